//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure:
//! - Password hashing (Argon2id, tunable work factor)
//! - Opaque bearer token generation and lookup hashing
//! - Authentication coordination
//!
//! Storage is left to the service: this crate never sees a database and never
//! keeps a plaintext password or token beyond the call that receives it.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! assert!(!hasher.verify("not_my_password", &hash).unwrap());
//! ```
//!
//! ## Opaque Tokens
//! ```
//! use auth::token::{hash_token, is_well_formed, TokenGenerator};
//!
//! let token = TokenGenerator::new().generate().unwrap();
//! assert!(is_well_formed(&token.plaintext));
//!
//! // Only the hash is persisted; presenting the plaintext recomputes it
//! assert_eq!(hash_token(&token.plaintext), token.hash);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, PasswordHasher};
//!
//! let auth = Authenticator::with_password_hasher(PasswordHasher::new()).unwrap();
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify, then mint a token
//! auth.verify_password("password123", &hash).unwrap();
//! let token = auth.generate_token().unwrap();
//! assert!(!token.plaintext.is_empty());
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use password::HashingParams;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::GeneratedToken;
pub use token::TokenGenerationError;
pub use token::TokenGenerator;
