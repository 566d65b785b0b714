pub mod document_id;
pub mod email;
pub mod org_role;
pub mod organization_slug;
pub mod user_role;

pub use document_id::DocumentId;
pub use email::Email;
pub use org_role::OrgRole;
pub use organization_slug::OrganizationSlug;
pub use user_role::UserRole;
