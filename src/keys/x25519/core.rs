use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

use crate::curve::constants::A24;
use crate::error::{Error, Result};
use crate::keys::clamp;
use crate::primitives::FieldElement;

/// The u-coordinate of the Curve25519 base point, `u = 9`.
pub const BASEPOINT: [u8; 32] = {
    let mut bytes = [0u8; 32];
    bytes[0] = 9;
    bytes
};

/// Montgomery-ladder scalar multiplication (RFC 7748 §5).
///
/// Clamps `scalar`, decodes `u` (the top bit is ignored and values at or
/// above `p` are accepted and reduced), and returns the u-coordinate of
/// `scalar · u`.
///
/// The ladder keeps `(x₂ : z₂)` and `(x₃ : z₃)` and walks bits 254 down to
/// 0. Each step swaps the pair through an XOR mask driven by the current
/// bit, then performs one combined differential addition and doubling.
/// There is no branch or table index on secret data.
///
/// The clamped scalar and the ladder state are wiped before returning.
pub(crate) fn ladder(scalar: &[u8; 32], u: &[u8; 32]) -> [u8; 32] {
    let mut k = *scalar;
    clamp(&mut k);

    let x1 = FieldElement::from_bytes(u);
    let mut x2 = FieldElement::ONE;
    let mut z2 = FieldElement::ZERO;
    let mut x3 = x1;
    let mut z3 = FieldElement::ONE;

    let mut swap = Choice::from(0u8);

    for t in (0..255).rev() {
        let bit = Choice::from((k[t >> 3] >> (t & 7)) & 1);

        swap ^= bit;
        FieldElement::conditional_swap(&mut x2, &mut x3, swap);
        FieldElement::conditional_swap(&mut z2, &mut z3, swap);
        swap = bit;

        let a = x2 + z2;
        let aa = a.square();
        let b = x2 - z2;
        let bb = b.square();
        let e = aa - bb;
        let c = x3 + z3;
        let d = x3 - z3;
        let da = d * a;
        let cb = c * b;

        x3 = (da + cb).square();
        z3 = x1 * (da - cb).square();
        x2 = aa * bb;
        z2 = e * (aa + A24 * e);
    }

    FieldElement::conditional_swap(&mut x2, &mut x3, swap);
    FieldElement::conditional_swap(&mut z2, &mut z3, swap);

    let out = (x2 * z2.invert()).to_bytes();

    k.zeroize();
    x2.zeroize();
    z2.zeroize();
    x3.zeroize();
    z3.zeroize();

    out
}

/// Derives the X25519 public key for `secret`: `secret · 9`.
pub fn derive(secret: &[u8; 32]) -> [u8; 32] {
    ladder(secret, &BASEPOINT)
}

/// Computes the X25519 shared secret between `secret` and a peer's public
/// u-coordinate.
///
/// ## Errors
///
/// Returns [`Error::DegenerateSharedSecret`] when the result is all zeros,
/// which happens exactly when `public` is a small-order point (e.g. `0`,
/// `1` or any of their non-canonical encodings). The check is constant
/// time.
pub fn exchange(secret: &[u8; 32], public: &[u8; 32]) -> Result<[u8; 32]> {
    let shared = ladder(secret, public);

    if bool::from(shared[..].ct_eq(&[0u8; 32][..])) {
        return Err(Error::DegenerateSharedSecret);
    }

    Ok(shared)
}
