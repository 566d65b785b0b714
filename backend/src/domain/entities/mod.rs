pub mod document;
pub mod session;
pub mod user;

pub use document::Document;
pub use session::Session;
pub use user::User;
