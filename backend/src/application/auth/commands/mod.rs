pub mod login;
pub mod logout;
pub mod register;
pub mod reset_password;
pub mod update_profile;
