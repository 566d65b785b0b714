use serde::{Deserialize, Serialize};
use std::fmt;

const MAX_EMAIL_LEN: usize = 255;

/// Login and recipient address. Stored lowercase so that registration,
/// login and password reset all find the same `users` record regardless
/// of how the address was typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    pub fn new(email: impl Into<String>) -> Result<Self, String> {
        let email = email.into().trim().to_lowercase();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => return Err("Invalid email format".to_string()),
        }
        if email.len() > MAX_EMAIL_LEN {
            return Err("Email too long".to_string());
        }
        Ok(Self(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
