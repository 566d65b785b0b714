//! KommunalCRM REST backend: records, authentication, mail, AI text
//! generation and demo data for municipal political organizations.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use infrastructure::driving::build_router;
pub use infrastructure::AppState;
