// Domain layer - records, value objects, accounting rules
// No dependencies on other layers

pub mod accounting;
pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
