// Application ports - Driven ports (output ports implemented by infrastructure)

pub mod document_repository;
pub mod file_store;
pub mod mailer;
pub mod session_repository;
pub mod text_generator;

pub use document_repository::{DocumentQuery, DocumentRepository, Filter, SortSpec};
pub use file_store::{FileStore, StoredFile};
pub use mailer::{MailAttachment, Mailer, OutgoingMail, SmtpSettings};
pub use session_repository::SessionRepository;
pub use text_generator::TextGenerator;
