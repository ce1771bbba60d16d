//! Authentication utilities library
//!
//! Provides the authentication infrastructure for the portfolio backend:
//! - Password hashing (Argon2id)
//! - Bearer token generation and validation (JWT)
//! - Authentication coordination
//!
//! The service injects its signing secret and token lifetime at startup;
//! nothing in this crate reads ambient configuration.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::{Claims, JwtHandler};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::for_user("rec123", "alice@example.com", 24);
//! let token = handler.encode(&claims).unwrap();
//! let decoded = handler.decode(&token).unwrap();
//! assert_eq!(decoded.sub, "rec123");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", 24);
//!
//! // Register: hash password, then issue a token
//! let hash = auth.hash_password("password123").unwrap();
//! let token = auth.issue_token("rec123", "alice@example.com").unwrap();
//!
//! // Login: verify credentials and issue a token in one step
//! let result = auth
//!     .authenticate("password123", &hash, "rec123", "alice@example.com")
//!     .unwrap();
//!
//! // Validate a presented token
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.email, "alice@example.com");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
