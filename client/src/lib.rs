//! Async client for the KommunalCRM REST API.
//!
//! ```no_run
//! # async fn demo() -> kommunal_crm_client::ClientResult<()> {
//! use kommunal_crm_client::CrmClient;
//! use shared::collections::CONTACTS;
//!
//! let client = CrmClient::new("http://localhost:8001")?;
//! client.auth().login("demo@kommunalcrm.de", "demo123").await?;
//! let contacts = client.entity(CONTACTS).list(Some("-created_date"), Some(50)).await?;
//! # Ok(()) }
//! ```

mod api;
mod auth;
mod client;
mod entities;
mod error;

pub use api::{AiApi, DocumentsApi, EmailApi, FilesApi, OrganizationsApi, SearchApi, SmtpApi, UsersApi};
pub use auth::AuthApi;
pub use client::CrmClient;
pub use entities::{ChangeEvent, ChangeKind, EntityClient, EntityFilter};
pub use error::{ClientError, ClientResult};
pub use shared;
