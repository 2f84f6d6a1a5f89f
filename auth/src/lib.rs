//! Authentication library for the blog service
//!
//! Provides the security-sensitive building blocks the HTTP layer composes:
//! - Password hashing (Argon2id, PHC string format)
//! - Signed expiring tokens with access/refresh kinds
//! - A request-time guard that validates presented bearer tokens
//!
//! Token validity is stateless: a token is valid iff its signature checks out
//! against the configured secret and its expiry has not elapsed. Nothing is
//! persisted server-side and there is no revocation list.
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
//! assert!(!hasher.verify("not_my_password", &hash));
//! ```
//!
//! ## Issuing and Guarding Tokens
//! ```
//! use auth::{TokenCodec, TokenGuard, TokenIssuer, TokenKind};
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!", "HS256").unwrap();
//! let issuer = TokenIssuer::new(codec.clone(), 15, 2);
//! let token = issuer.issue_access_token("alice", "user").unwrap();
//!
//! let guard = TokenGuard::new(codec, TokenKind::Access);
//! let header = format!("Bearer {token}");
//! let claims = guard.verify(Some(&header)).unwrap();
//! assert_eq!(claims.sub, "alice");
//! ```
//!
//! ## Complete Login Flow
//! ```
//! use auth::{Authenticator, TokenCodec, TokenIssuer};
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!", "HS256").unwrap();
//! let auth = Authenticator::new(TokenIssuer::new(codec, 15, 2));
//!
//! // Signup: hash the password for storage
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and mint an access/refresh pair
//! let tokens = auth.authenticate("password123", &hash, "alice", "user").unwrap();
//! assert!(!tokens.access_token.is_empty());
//! assert!(!tokens.refresh_token.is_empty());
//! ```

pub mod authenticator;
pub mod clock;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use authenticator::TokenPair;
pub use clock::Clock;
pub use clock::SystemClock;
pub use jwt::AuthError;
pub use jwt::JwtError;
pub use jwt::TokenClaims;
pub use jwt::TokenCodec;
pub use jwt::TokenGuard;
pub use jwt::TokenIssuer;
pub use jwt::TokenKind;
pub use password::PasswordError;
pub use password::PasswordHasher;
