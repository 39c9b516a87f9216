use crate::error::{AppError, Result};

/// Shared-secret check in front of the listing. The secrets ship inside the
/// client configuration, so this is a convenience barrier, not a security
/// boundary: no lockout, no rate limiting, no hashing.
pub fn check_password(candidate: &str, allowed: &[String]) -> Result<()> {
    if allowed.iter().any(|password| password == candidate) {
        Ok(())
    } else {
        Err(AppError::IncorrectPassword)
    }
}
