pub mod llm;
pub mod mail;
pub mod persistence;
pub mod storage;

pub use llm::OpenAiTextGenerator;
pub use mail::SmtpMailer;
pub use persistence::*;
pub use storage::LocalFileStore;
