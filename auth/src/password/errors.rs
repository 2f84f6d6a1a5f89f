use thiserror::Error;

/// Error type for password operations.
///
/// Verification never errors: a malformed stored hash or a mismatch both
/// verify as false. Only hashing a new password can fail.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
