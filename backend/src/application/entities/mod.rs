// Generic CRUD over the entity collections

pub mod commands;

use crate::domain::User;
use crate::error::{AppError, AppResult};

pub const MAX_LIST_LIMIT: usize = 1000;

/// Anonymous callers may write; authenticated viewers may not.
pub fn authorize_write(actor: Option<&User>) -> AppResult<()> {
    match actor {
        Some(user) if !user.role().can_write() => Err(AppError::read_only()),
        _ => Ok(()),
    }
}
