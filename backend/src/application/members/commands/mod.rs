pub mod get_user;
pub mod list_members;
pub mod list_users;
pub mod update_org_role;
pub mod update_user;
