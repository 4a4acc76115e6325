//! Key material and key agreement.
//!
//! This module groups everything that turns 32-byte secrets into usable
//! scalars, and the operations that only need key material:
//!
//! - `expanded`: the SHA-512 expansion of an Ed25519 secret into a pruned
//!   scalar and a nonce prefix. Shared by signing and by secret conversion.
//! - `x25519`: Diffie–Hellman over Curve25519 with the Montgomery ladder
//!   (RFC 7748).
//! - `convert`: maps Ed25519 keys to X25519 keys so one identity key can
//!   serve both signing and key agreement.
//!
//! Signing and verification themselves live in `signatures`.

pub(crate) mod expanded;

pub mod convert;
pub mod x25519;

pub use convert::{convert_public, convert_secret};

/// Clamps 32 secret bytes into an X25519/Ed25519 scalar.
///
/// Clears the three low bits (multiple of the cofactor 8), clears bit 255
/// and sets bit 254.
#[inline]
pub(crate) fn clamp(bytes: &mut [u8; 32]) {
    bytes[0] &= 248;
    bytes[31] &= 127;
    bytes[31] |= 64;
}
