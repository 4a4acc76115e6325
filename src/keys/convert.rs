//! Ed25519 to X25519 key conversion.
//!
//! Edwards25519 and Curve25519 are birationally equivalent through
//!
//! ```text
//! u = (1 + y) / (1 − y)
//! ```
//!
//! so an Ed25519 key pair can be reused for X25519 key agreement. The
//! converted secret is the same clamped exponent Ed25519 signs with, hence
//! `derive(convert_secret(s)) == convert_public(generate(s))`.

use crate::keys::expanded::ExpandedSecret;
use crate::primitives::FieldElement;

/// Maps an Ed25519 public key to the X25519 public key of the same point.
///
/// Only the `y` coordinate is used; the sign bit is ignored and the
/// encoding is not checked to be on the curve. `y = 1` (the identity)
/// maps to `u = 0`, since inverting zero yields zero.
pub fn convert_public(ed_public: &[u8; 32]) -> [u8; 32] {
    let y = FieldElement::from_bytes(ed_public);
    let one = FieldElement::ONE;

    ((one + y) * (one - y).invert()).to_bytes()
}

/// Maps an Ed25519 secret to the X25519 secret with the same exponent.
///
/// This is the first half of `SHA-512(ed_secret)`, already clamped.
pub fn convert_secret(ed_secret: &[u8; 32]) -> [u8; 32] {
    ExpandedSecret::from_secret(ed_secret).scalar_bytes()
}
