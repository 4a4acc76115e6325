//! Finite field arithmetic for Curve25519.
//!
//! This module implements arithmetic in the prime field
//!
//! ```text
//! 𝔽ₚ where p = 2²⁵⁵ − 19
//! ```
//!
//! shared by the twisted Edwards form (Ed25519) and the Montgomery form
//! (X25519) of the curve.
//!
//! ## Representation
//!
//! Field elements are stored as five unsigned 64-bit limbs in radix 2⁵¹:
//!
//! ```text
//! x = l₀ + l₁·2⁵¹ + l₂·2¹⁰² + l₃·2¹⁵³ + l₄·2²⁰⁴
//! ```
//!
//! Limbs are kept *weakly reduced* (each below 2⁵² after every operation),
//! which leaves enough headroom for one addition or subtraction before a
//! multiplication without overflow. The canonical value in `[0, p)` is only
//! materialized by [`FieldElement::to_bytes`], and every comparison goes
//! through that encoding.
//!
//! ## Exponent chains
//!
//! Inversion and square-root extraction use the fixed addition chain
//! `pow22501`, which computes `a^(2²⁵⁰ − 1)` with 254 squarings and
//! 11 multiplications:
//!
//! - `invert(a)  = a^(p − 2)`
//! - `pow_p58(a) = a^((p − 5) / 8)`
//!
//! `invert(0)` is `0`. The function is total and never fails, which the
//! point decoder relies on when handed attacker-controlled encodings.

use std::ops::{Add, Mul, Neg, Sub};

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

const LOW_51_BIT_MASK: u64 = (1 << 51) - 1;

/// Loads eight little-endian bytes starting at `offset`.
#[inline(always)]
fn load_8(input: &[u8; 32], offset: usize) -> u64 {
    input[offset..offset + 8]
        .iter()
        .rev()
        .fold(0u64, |acc, &byte| (acc << 8) | byte as u64)
}

/// Field element modulo `2^255 - 19`, represented in radix `2^51`.
#[derive(Clone, Copy, Debug, Zeroize)]
pub(crate) struct FieldElement(pub(crate) [u64; 5]);

impl FieldElement {
    /// The additive identity (0).
    pub(crate) const ZERO: Self = FieldElement([0, 0, 0, 0, 0]);

    /// The multiplicative identity (1).
    pub(crate) const ONE: Self = FieldElement([1, 0, 0, 0, 0]);

    /// A square root of `−1`, i.e. `2^((p − 1) / 4)`.
    pub(crate) const SQRT_M1: Self = FieldElement([
        1_718_705_420_411_056,
        234_908_883_556_509,
        2_233_514_472_574_048,
        2_117_202_627_021_982,
        765_476_049_583_133,
    ]);

    /// Propagates carries so that every limb fits in 52 bits.
    ///
    /// The carry out of the top limb is folded back into the bottom limb
    /// using `2²⁵⁵ ≡ 19 (mod p)`. The result is congruent to the input but
    /// not necessarily canonical.
    #[inline(always)]
    fn reduce(mut limbs: [u64; 5]) -> Self {
        let c0 = limbs[0] >> 51;
        let c1 = limbs[1] >> 51;
        let c2 = limbs[2] >> 51;
        let c3 = limbs[3] >> 51;
        let c4 = limbs[4] >> 51;

        for limb in limbs.iter_mut() {
            *limb &= LOW_51_BIT_MASK;
        }

        limbs[0] += c4 * 19;
        limbs[1] += c0;
        limbs[2] += c1;
        limbs[3] += c2;
        limbs[4] += c3;

        FieldElement(limbs)
    }

    /// Decodes a field element from 32 little-endian bytes.
    ///
    /// The top bit (bit 255) is ignored, as required both for Edwards
    /// `y`-coordinates (where it carries the sign of `x`) and for X25519
    /// `u`-coordinates (RFC 7748 §5). Values in `[p, 2²⁵⁵)` are accepted
    /// and reduce to their canonical representative; callers that must
    /// reject them compare against [`FieldElement::to_bytes`].
    pub(crate) fn from_bytes(input: &[u8; 32]) -> Self {
        FieldElement([
            load_8(input, 0) & LOW_51_BIT_MASK,
            (load_8(input, 6) >> 3) & LOW_51_BIT_MASK,
            (load_8(input, 12) >> 6) & LOW_51_BIT_MASK,
            (load_8(input, 19) >> 1) & LOW_51_BIT_MASK,
            (load_8(input, 24) >> 12) & LOW_51_BIT_MASK,
        ])
    }

    /// Encodes this element into its canonical 32-byte little-endian form.
    ///
    /// This performs the only *full* reduction into `[0, p)`:
    ///
    /// 1. weakly reduce so each limb is below 2⁵²,
    /// 2. compute `q = ⌊(x + 19) / 2²⁵⁵⌋`, which is `1` exactly when `x ≥ p`,
    /// 3. add `19·q` and drop bit 255, i.e. subtract `q·p`.
    ///
    /// The output always has bit 255 cleared.
    pub(crate) fn to_bytes(self) -> [u8; 32] {
        let mut limbs = Self::reduce(self.0).0;

        let mut q = (limbs[0] + 19) >> 51;
        q = (limbs[1] + q) >> 51;
        q = (limbs[2] + q) >> 51;
        q = (limbs[3] + q) >> 51;
        q = (limbs[4] + q) >> 51;

        limbs[0] += 19 * q;

        limbs[1] += limbs[0] >> 51;
        limbs[0] &= LOW_51_BIT_MASK;
        limbs[2] += limbs[1] >> 51;
        limbs[1] &= LOW_51_BIT_MASK;
        limbs[3] += limbs[2] >> 51;
        limbs[2] &= LOW_51_BIT_MASK;
        limbs[4] += limbs[3] >> 51;
        limbs[3] &= LOW_51_BIT_MASK;
        limbs[4] &= LOW_51_BIT_MASK;

        // Pack 5 x 51 bits into 255 bits, least significant byte first.
        let mut output = [0u8; 32];
        let mut acc: u128 = 0;
        let mut bits = 0;
        let mut index = 0;

        for limb in limbs {
            acc |= (limb as u128) << bits;
            bits += 51;

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

    /// Returns `1` if the canonical encoding is odd.
    ///
    /// This is the "sign" of a field element in the Ed25519 point encoding.
    #[inline(always)]
    pub(crate) fn is_negative(&self) -> Choice {
        Choice::from(self.to_bytes()[0] & 1)
    }

    /// Returns `1` if this element is zero modulo `p`.
    #[inline(always)]
    pub(crate) fn is_zero(&self) -> Choice {
        self.to_bytes().ct_eq(&[0u8; 32])
    }

    /// Computes `self²`.
    #[inline(always)]
    pub(crate) fn square(&self) -> Self {
        *self * *self
    }

    /// Computes `self^(2^k)` by `k` successive squarings, `k ≥ 1`.
    pub(crate) fn pow2k(&self, k: u32) -> Self {
        debug_assert!(k > 0);

        let mut output = self.square();
        for _ in 1..k {
            output = output.square();
        }

        output
    }

    /// Computes `(self^(2^250 − 1), self^11)`.
    ///
    /// This is the shared prefix of the inversion and square-root chains.
    /// The exponent of each intermediate is noted on the right.
    fn pow22501(&self) -> (Self, Self) {
        let t0 = self.square(); //                     2
        let t1 = t0.pow2k(2); //                       8
        let t2 = *self * t1; //                        9
        let t3 = t0 * t2; //                           11
        let t4 = t3.square(); //                       22
        let t5 = t2 * t4; //                           2^5 - 1
        let t6 = t5.pow2k(5); //                       2^10 - 2^5
        let t7 = t6 * t5; //                           2^10 - 1
        let t8 = t7.pow2k(10); //                      2^20 - 2^10
        let t9 = t8 * t7; //                           2^20 - 1
        let t10 = t9.pow2k(20); //                     2^40 - 2^20
        let t11 = t10 * t9; //                         2^40 - 1
        let t12 = t11.pow2k(10); //                    2^50 - 2^10
        let t13 = t12 * t7; //                         2^50 - 1
        let t14 = t13.pow2k(50); //                    2^100 - 2^50
        let t15 = t14 * t13; //                        2^100 - 1
        let t16 = t15.pow2k(100); //                   2^200 - 2^100
        let t17 = t16 * t15; //                        2^200 - 1
        let t18 = t17.pow2k(50); //                    2^250 - 2^50
        let t19 = t18 * t13; //                        2^250 - 1

        (t19, t3)
    }

    /// Computes the multiplicative inverse `self^(p − 2)`.
    ///
    /// Zero maps to zero.
    pub(crate) fn invert(&self) -> Self {
        let (t19, t3) = self.pow22501();
        let t20 = t19.pow2k(5); // 2^255 - 2^5
        t20 * t3 //               2^255 - 21 = p - 2
    }

    /// Computes `self^((p − 5) / 8) = self^(2^252 − 3)`.
    pub(crate) fn pow_p58(&self) -> Self {
        let (t19, _) = self.pow22501();
        let t20 = t19.pow2k(2); // 2^252 - 4
        *self * t20 //            2^252 - 3
    }

    /// Computes a square root of `u / v`, if one exists.
    ///
    /// With `p ≡ 5 (mod 8)` the candidate
    ///
    /// ```text
    /// r = u · v³ · (u · v⁷)^((p − 5) / 8)
    /// ```
    ///
    /// satisfies `v·r² = ±u`. When the sign is `+` the candidate is the
    /// root; when it is `−` the root is `r · √−1`; otherwise `u / v` is not
    /// a square and `None` is returned.
    ///
    /// Only used on public inputs (point decoding), so it branches freely.
    pub(crate) fn sqrt_ratio(u: &Self, v: &Self) -> Option<Self> {
        let v3 = v.square() * *v;
        let v7 = v3.square() * *v;
        let r = *u * v3 * (*u * v7).pow_p58();

        let check = *v * r.square();

        if bool::from(check.ct_eq(u)) {
            Some(r)
        } else if bool::from(check.ct_eq(&-*u)) {
            Some(r * Self::SQRT_M1)
        } else {
            None
        }
    }
}

impl Add for FieldElement {
    type Output = FieldElement;

    #[inline(always)]
    fn add(self, rhs: FieldElement) -> FieldElement {
        let mut limbs = self.0;
        for (l, r) in limbs.iter_mut().zip(rhs.0) {
            *l += r;
        }

        FieldElement::reduce(limbs)
    }
}

impl Sub for FieldElement {
    type Output = FieldElement;

    /// Computes `self − rhs` as `self + 16p − rhs` to stay non-negative.
    #[inline(always)]
    fn sub(self, rhs: FieldElement) -> FieldElement {
        const SIXTEEN_P: [u64; 5] = [
            36_028_797_018_963_664,
            36_028_797_018_963_952,
            36_028_797_018_963_952,
            36_028_797_018_963_952,
            36_028_797_018_963_952,
        ];

        let mut limbs = [0u64; 5];
        for (index, limb) in limbs.iter_mut().enumerate() {
            *limb = (self.0[index] + SIXTEEN_P[index]) - rhs.0[index];
        }

        FieldElement::reduce(limbs)
    }
}

impl Mul for FieldElement {
    type Output = FieldElement;

    /// Schoolbook multiplication with the `2²⁵⁵ ≡ 19` wrap folded into the
    /// upper operand limbs, followed by a single carry pass.
    #[rustfmt::skip]
    fn mul(self, rhs: FieldElement) -> FieldElement {
        #[inline(always)]
        fn m(x: u64, y: u64) -> u128 {
            (x as u128) * (y as u128)
        }

        let a = &self.0;
        let b = &rhs.0;

        let b1_19 = b[1] * 19;
        let b2_19 = b[2] * 19;
        let b3_19 = b[3] * 19;
        let b4_19 = b[4] * 19;

        let c0: u128 = m(a[0], b[0]) + m(a[4], b1_19) + m(a[3], b2_19) + m(a[2], b3_19) + m(a[1], b4_19);
        let mut c1: u128 = m(a[1], b[0]) + m(a[0], b[1]) + m(a[4], b2_19) + m(a[3], b3_19) + m(a[2], b4_19);
        let mut c2: u128 = m(a[2], b[0]) + m(a[1], b[1]) + m(a[0], b[2]) + m(a[4], b3_19) + m(a[3], b4_19);
        let mut c3: u128 = m(a[3], b[0]) + m(a[2], b[1]) + m(a[1], b[2]) + m(a[0], b[3]) + m(a[4], b4_19);
        let mut c4: u128 = m(a[4], b[0]) + m(a[3], b[1]) + m(a[2], b[2]) + m(a[1], b[3]) + m(a[0], b[4]);

        let mut out = [0u64; 5];

        c1 += ((c0 >> 51) as u64) as u128;
        out[0] = (c0 as u64) & LOW_51_BIT_MASK;

        c2 += ((c1 >> 51) as u64) as u128;
        out[1] = (c1 as u64) & LOW_51_BIT_MASK;

        c3 += ((c2 >> 51) as u64) as u128;
        out[2] = (c2 as u64) & LOW_51_BIT_MASK;

        c4 += ((c3 >> 51) as u64) as u128;
        out[3] = (c3 as u64) & LOW_51_BIT_MASK;

        let carry = (c4 >> 51) as u64;
        out[4] = (c4 as u64) & LOW_51_BIT_MASK;

        out[0] += carry * 19;
        out[1] += out[0] >> 51;
        out[0] &= LOW_51_BIT_MASK;

        FieldElement(out)
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    #[inline(always)]
    fn neg(self) -> FieldElement {
        FieldElement::ZERO - self
    }
}

impl ConstantTimeEq for FieldElement {
    /// Compares canonical encodings, so any two representatives of the
    /// same residue are equal.
    fn ct_eq(&self, other: &Self) -> Choice {
        self.to_bytes().ct_eq(&other.to_bytes())
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        FieldElement([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
            u64::conditional_select(&a.0[4], &b.0[4], choice),
        ])
    }

    /// Swaps limb-by-limb through an XOR mask derived from `choice`.
    fn conditional_swap(a: &mut Self, b: &mut Self, choice: Choice) {
        for (l, r) in a.0.iter_mut().zip(b.0.iter_mut()) {
            u64::conditional_swap(l, r, choice);
        }
    }
}
