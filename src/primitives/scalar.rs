//! Scalar arithmetic modulo the Ed25519 group order.
//!
//! Scalars are integers modulo
//!
//! ```text
//! ℓ = 2^252 + 27742317777372353535851937790883648493
//! ```
//!
//! the prime order of the Ed25519 base point. They appear as:
//!
//! - the reduced secret exponent `a`,
//! - the deterministic nonce `r = H(prefix ‖ M) mod ℓ`,
//! - the challenge `k = H(R ‖ A ‖ M) mod ℓ`,
//! - the signature half `S = r + k·a mod ℓ`.
//!
//! ## Representation
//!
//! A [`Scalar`] is a 32-byte little-endian buffer that is always fully
//! reduced into `[0, ℓ)`. Every constructor either reduces or rejects.
//!
//! Internally, reduction works on signed 21-bit limbs held in `i64`.
//! Limbs above 2²⁵² are folded back down with
//!
//! ```text
//! 2^252 ≡ −27742317777372353535851937790883648493 (mod ℓ)
//! ```
//!
//! whose radix-2²¹ digits are the six `FOLD` coefficients below. Carries
//! are interleaved with the folds so no intermediate leaves the `i64`
//! range.

use std::ops::{Add, Mul};

use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

/// The group order ℓ, little-endian.
pub(crate) const ORDER: [u8; 32] = [
    0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde, 0x14,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
];

const LIMB_MASK: u64 = (1 << 21) - 1;

/// `−(2^252 mod ℓ)` in signed radix 2²¹, lowest digit first.
const FOLD: [i64; 6] = [666_643, 470_296, 654_183, -997_805, 136_657, -683_901];

/// A scalar modulo ℓ, stored as 32 little-endian bytes in `[0, ℓ)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Zeroize)]
pub(crate) struct Scalar(pub(crate) [u8; 32]);

impl Scalar {
    pub(crate) const ZERO: Self = Scalar([0u8; 32]);

    pub(crate) const ONE: Self = {
        let mut bytes = [0u8; 32];
        bytes[0] = 1;
        Scalar(bytes)
    };

    /// Reduces a 512-bit little-endian integer modulo ℓ.
    ///
    /// This is how 64-byte SHA-512 digests become nonces and challenges.
    pub(crate) fn from_bytes_mod_order_wide(wide: &[u8; 64]) -> Self {
        let mut limbs: [i64; 24] = load_limbs(wide);
        Scalar(reduce_limbs(&mut limbs))
    }

    /// Reduces a 256-bit little-endian integer modulo ℓ.
    pub(crate) fn from_bytes_mod_order(bytes: &[u8; 32]) -> Self {
        let mut wide = [0u8; 64];
        wide[..32].copy_from_slice(bytes);

        let scalar = Self::from_bytes_mod_order_wide(&wide);
        wide.zeroize();

        scalar
    }

    /// Accepts `bytes` only if it already encodes an integer below ℓ.
    ///
    /// Used on the `S` half of signatures, which is public, so the
    /// comparison is allowed to exit early.
    pub(crate) fn from_canonical_bytes(bytes: &[u8; 32]) -> Option<Self> {
        for (byte, bound) in bytes.iter().zip(ORDER.iter()).rev() {
            if byte < bound {
                return Some(Scalar(*bytes));
            }
            if byte > bound {
                return None;
            }
        }

        // Equal to ℓ.
        None
    }

    /// Returns the little-endian encoding.
    #[inline]
    pub(crate) fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Returns a reference to the little-endian encoding.
    #[inline]
    pub(crate) fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Computes `a · b + c mod ℓ`.
    ///
    /// This is the signature equation `S = k·a + r`. The 23-limb product
    /// is carried back into 21-bit limbs before going through the same
    /// folding as [`Scalar::from_bytes_mod_order_wide`].
    pub(crate) fn mul_add(a: &Scalar, b: &Scalar, c: &Scalar) -> Scalar {
        let a: [i64; 12] = load_limbs(&a.0);
        let b: [i64; 12] = load_limbs(&b.0);
        let c: [i64; 12] = load_limbs(&c.0);

        let mut s = [0i64; 24];
        s[..12].copy_from_slice(&c);

        for (i, ai) in a.iter().enumerate() {
            for (j, bj) in b.iter().enumerate() {
                s[i + j] += ai * bj;
            }
        }

        carry_round(&mut s, (0..=22).step_by(2).chain((1..=21).step_by(2)));

        let out = Scalar(reduce_limbs(&mut s));
        s.zeroize();

        out
    }
}

impl Add for Scalar {
    type Output = Scalar;

    fn add(self, rhs: Scalar) -> Scalar {
        Scalar::mul_add(&self, &Scalar::ONE, &rhs)
    }
}

impl Mul for Scalar {
    type Output = Scalar;

    fn mul(self, rhs: Scalar) -> Scalar {
        Scalar::mul_add(&self, &rhs, &Scalar::ZERO)
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

/// Splits `bytes` into `N` little-endian 21-bit limbs.
///
/// The last limb keeps every remaining bit, so a 32-byte input yields a
/// 25-bit top limb and a 64-byte input a 29-bit one.
fn load_limbs<const N: usize>(bytes: &[u8]) -> [i64; N] {
    let mut limbs = [0i64; N];

    for (index, limb) in limbs.iter_mut().enumerate() {
        let bit = 21 * index;
        let word = bytes[bit / 8..]
            .iter()
            .take(4)
            .rev()
            .fold(0u64, |acc, &byte| (acc << 8) | byte as u64);
        let value = word >> (bit % 8);

        *limb = if index + 1 == N {
            value as i64
        } else {
            (value & LIMB_MASK) as i64
        };
    }

    limbs
}

/// Folds limb `index ≥ 12` into the six limbs starting at `index − 12`.
#[inline(always)]
fn fold(s: &mut [i64; 24], index: usize) {
    let value = s[index];
    s[index] = 0;

    for (offset, coefficient) in FOLD.iter().enumerate() {
        s[index - 12 + offset] += value * coefficient;
    }
}

/// Carries each listed limb into the next one, rounding to nearest so the
/// limb ends up in `[−2²⁰, 2²⁰)`.
#[inline(always)]
fn carry_round(s: &mut [i64; 24], indices: impl Iterator<Item = usize>) {
    for index in indices {
        let carry = (s[index] + (1 << 20)) >> 21;
        s[index + 1] += carry;
        s[index] -= carry << 21;
    }
}

/// Carries each listed limb into the next one, rounding down so the limb
/// ends up in `[0, 2²¹)`.
#[inline(always)]
fn carry_floor(s: &mut [i64; 24], indices: impl Iterator<Item = usize>) {
    for index in indices {
        let carry = s[index] >> 21;
        s[index + 1] += carry;
        s[index] -= carry << 21;
    }
}

/// Reduces 24 signed 21-bit limbs modulo ℓ and packs the result.
fn reduce_limbs(s: &mut [i64; 24]) -> [u8; 32] {
    for index in (18..24).rev() {
        fold(s, index);
    }
    carry_round(s, (6..=16).step_by(2).chain((7..=15).step_by(2)));

    for index in (12..18).rev() {
        fold(s, index);
    }
    carry_round(s, (0..=10).step_by(2).chain((1..=11).step_by(2)));

    fold(s, 12);
    carry_floor(s, 0..12);

    fold(s, 12);
    carry_floor(s, 0..11);

    // Pack 12 x 21 bits into 252 bits, least significant byte first.
    let mut output = [0u8; 32];
    let mut acc: u64 = 0;
    let mut bits = 0;
    let mut index = 0;

    for &limb in s.iter().take(12) {
        acc |= (limb as u64) << bits;
        bits += 21;

        while bits >= 8 {
            output[index] = acc as u8;
            acc >>= 8;
            bits -= 8;
            index += 1;
        }
    }
    output[index] = acc as u8;

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_u64(value: u64) -> Scalar {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&value.to_le_bytes());
        Scalar(bytes)
    }

    fn order_minus(value: u8) -> [u8; 32] {
        let mut bytes = ORDER;
        bytes[0] -= value;
        bytes
    }

    #[test]
    fn order_reduces_to_zero() {
        assert_eq!(Scalar::from_bytes_mod_order(&ORDER), Scalar::ZERO);

        let mut order_plus_five = ORDER;
        order_plus_five[0] += 5;
        assert_eq!(Scalar::from_bytes_mod_order(&order_plus_five), from_u64(5));
    }

    #[test]
    fn reduced_values_are_unchanged() {
        let below = order_minus(1);
        assert_eq!(Scalar::from_bytes_mod_order(&below).to_bytes(), below);
        assert_eq!(Scalar::from_bytes_mod_order(&[0x07; 32]).0[31] & 0xf0, 0);
    }

    /// x = 2238329342913194256032495932344128051776374960164957527413114840482143558222
    const X: Scalar = Scalar([
        0x4e, 0x5a, 0xb4, 0x34, 0x5d, 0x47, 0x08, 0x84, 0x59, 0x13, 0xb4, 0x64, 0x1b, 0xc2, 0x7d,
        0x52, 0x52, 0xa5, 0x85, 0x10, 0x1b, 0xcc, 0x42, 0x44, 0xd4, 0x49, 0xf4, 0xa8, 0x79, 0xd9,
        0xf2, 0x04,
    ]);

    /// y = 2592331292931086675770238855846338635550719849568364935475441891787804997264
    const Y: Scalar = Scalar([
        0x90, 0x76, 0x33, 0xfe, 0x1c, 0x4b, 0x66, 0xa4, 0xa2, 0x8d, 0x2d, 0xd7, 0x67, 0x83, 0x86,
        0xc3, 0x53, 0xd0, 0xde, 0x54, 0x55, 0xd4, 0xfc, 0x9d, 0xe8, 0xef, 0x7a, 0xc3, 0x1f, 0x35,
        0xbb, 0x05,
    ]);

    /// x·y mod ℓ = 5690045403673944803228348699031245560686958845067437804563560795922180092780
    const X_TIMES_Y: Scalar = Scalar([
        0x6c, 0x33, 0x74, 0xa1, 0x89, 0x4f, 0x62, 0x21, 0x0a, 0xaa, 0x2f, 0xe1, 0x86, 0xa6, 0xf9,
        0x2c, 0xe0, 0xaa, 0x75, 0xc2, 0x77, 0x95, 0x81, 0xc2, 0x95, 0xfc, 0x08, 0x17, 0x9a, 0x73,
        0x94, 0x0c,
    ]);

    #[test]
    fn reduces_largest_256_bit_value() {
        // (2^256 - 1) mod ℓ
        let expected = Scalar([
            28, 149, 152, 141, 116, 49, 236, 214, 112, 207, 125, 115, 244, 91, 239, 198, 254, 255,
            255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 15,
        ]);
        assert_eq!(Scalar::from_bytes_mod_order(&[0xff; 32]), expected);
    }

    #[test]
    fn wide_reduction_matches_known_value() {
        // x + 2^256·x mod ℓ
        let mut wide = [0u8; 64];
        wide[..32].copy_from_slice(&X.0);
        wide[32..].copy_from_slice(&X.0);

        let expected = Scalar([
            216, 154, 179, 139, 210, 121, 2, 71, 69, 99, 158, 216, 23, 173, 63, 100, 204, 0, 91, 50,
            219, 153, 57, 249, 28, 82, 31, 197, 100, 165, 192, 8,
        ]);
        assert_eq!(Scalar::from_bytes_mod_order_wide(&wide), expected);
    }

    #[test]
    fn multiplication_matches_known_product() {
        assert_eq!(X * Y, X_TIMES_Y);
        assert_eq!(Scalar::mul_add(&X, &Y, &Scalar::ZERO), X_TIMES_Y);
        assert_eq!(Scalar::mul_add(&X, &Y, &X), X_TIMES_Y + X);
    }

    #[test]
    fn reduction_is_idempotent() {
        let once = Scalar::from_bytes_mod_order_wide(&[0xa7; 64]);
        let twice = Scalar::from_bytes_mod_order(&once.to_bytes());
        assert_eq!(once, twice);
    }

    #[test]
    fn canonical_check_matches_order() {
        assert!(Scalar::from_canonical_bytes(&order_minus(1)).is_some());
        assert!(Scalar::from_canonical_bytes(&ORDER).is_none());

        let mut above = ORDER;
        above[31] = 0x11;
        assert!(Scalar::from_canonical_bytes(&above).is_none());
        assert!(Scalar::from_canonical_bytes(&[0u8; 32]).is_some());
    }

    #[test]
    fn small_arithmetic() {
        assert_eq!(from_u64(6) * from_u64(7), from_u64(42));
        assert_eq!(from_u64(40) + from_u64(2), from_u64(42));
        assert_eq!(
            Scalar::mul_add(&from_u64(1_000_003), &from_u64(999_983), &from_u64(17)),
            from_u64(1_000_003 * 999_983 + 17)
        );
    }

    #[test]
    fn arithmetic_wraps_at_order() {
        let minus_one = Scalar(order_minus(1));
        assert_eq!(minus_one + Scalar::ONE, Scalar::ZERO);
        assert_eq!(minus_one * minus_one, Scalar::ONE);
        assert_eq!(minus_one + minus_one, Scalar(order_minus(2)));
    }

    #[test]
    fn mul_add_accepts_unreduced_256_bit_inputs() {
        // Pruned Ed25519 exponents are ≥ 2^254 > ℓ.
        let mut wide = [0u8; 32];
        wide[31] = 0x40;
        let reduced = Scalar::from_bytes_mod_order(&wide);

        let direct = Scalar::mul_add(&Scalar(wide), &from_u64(3), &Scalar::ZERO);
        assert_eq!(direct, reduced * from_u64(3));
    }
}
