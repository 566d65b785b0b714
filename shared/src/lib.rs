//! Wire types shared by the KommunalCRM server and its client.

pub mod collections;
pub mod protocol;

pub use collections::Collection;
