//! X25519 key exchange.
//!
//! This module provides the X25519 Diffie–Hellman function of RFC 7748.
//!
//! Keys are plain 32-byte arrays: a secret is any 32 bytes (it is clamped
//! on use) and a public key is a little-endian Montgomery u-coordinate.
//!
//! ## Structure
//!
//! - `core`  
//!   The Montgomery ladder, public key derivation and the shared-secret
//!   computation with its all-zero check.

mod core;

// Re-export the public API at the `x25519` level.
pub use self::core::{BASEPOINT, derive, exchange};
