use thiserror::Error;

/// Error type for token operations.
///
/// Expiry is distinguished from every other verification failure so
/// callers can surface "token expired" separately from "invalid token".
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token is invalid: {0}")]
    InvalidToken(String),
}
