//! Edwards25519 group operations.
//!
//! Points live on the twisted Edwards curve
//!
//! ```text
//! −x² + y² = 1 + d·x²·y²   over 𝔽ₚ, p = 2²⁵⁵ − 19
//! ```
//!
//! and are held in extended coordinates `(X : Y : Z : T)` with
//!
//! ```text
//! x = X / Z,   y = Y / Z,   T = X·Y / Z
//! ```
//!
//! so that additions and doublings need no inversion. The only inversion
//! happens when a point is compressed.
//!
//! ## Formulas
//!
//! Addition uses the unified formula of Hisil, Wong, Carter and Dawson
//! (2008) for `a = −1`. Because `d` is not a square modulo `p`, it is
//! *complete*: it is correct for every pair of curve points, including
//! `P = Q` and the neutral element. Verification feeds it untrusted
//! points, so no special cases are needed.
//!
//! Doubling uses the dedicated projective doubling formula of the same
//! paper, which is cheaper than `P + P` but gives the same point.
//!
//! ## Encoding
//!
//! A compressed point is the 32-byte little-endian affine `y` with the
//! parity of affine `x` stored in bit 255 (RFC 8032 §5.1.2).
//!
//! Decompression operates only on public data and branches freely.

use std::ops::{Add, Neg};

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

use crate::curve::constants::{D, D2};
use crate::primitives::{FieldElement, Scalar};

#[cfg(not(feature = "precomputed-tables"))]
use crate::curve::constants::BASEPOINT;
#[cfg(feature = "precomputed-tables")]
use crate::curve::table::BaseTable;

/// A point on edwards25519 in extended coordinates.
///
/// Invariant: `X·Y = Z·T` and `(X/Z, Y/Z)` satisfies the curve equation.
/// Points are plain values; every operation returns a fresh point.
#[derive(Clone, Copy, Debug, Zeroize)]
pub(crate) struct EdwardsPoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t: FieldElement,
}

impl EdwardsPoint {
    /// The neutral element `(0, 1)`.
    pub(crate) const IDENTITY: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ONE,
        t: FieldElement::ZERO,
    };

    /// Doubles this point.
    ///
    /// With `A = X²`, `B = Y²`, `C = 2·Z²` and `E = (X + Y)² − A − B`:
    ///
    /// ```text
    /// X₃ = E·(C − B + A)
    /// Y₃ = (B + A)·(B − A)
    /// Z₃ = (B − A)·(C − B + A)
    /// T₃ = E·(B + A)
    /// ```
    pub(crate) fn double(&self) -> Self {
        let a = self.x.square();
        let b = self.y.square();
        let c = self.z.square() + self.z.square();
        let xy = (self.x + self.y).square();

        let b_plus_a = b + a;
        let b_minus_a = b - a;
        let e = xy - b_plus_a;
        let f = c - b_minus_a;

        Self {
            x: e * f,
            y: b_plus_a * b_minus_a,
            z: b_minus_a * f,
            t: e * b_plus_a,
        }
    }

    /// Compresses this point into its 32-byte encoding.
    ///
    /// Computes affine `x` and `y` with a single inversion of `Z`, encodes
    /// `y`, and places the parity of `x` in the top bit.
    pub(crate) fn compress(&self) -> [u8; 32] {
        let recip = self.z.invert();
        let x = self.x * recip;
        let y = self.y * recip;

        let mut output = y.to_bytes();
        output[31] ^= x.is_negative().unwrap_u8() << 7;

        output
    }

    /// Decompresses a 32-byte point encoding.
    ///
    /// The low 255 bits are `y` and the top bit selects the parity of `x`.
    /// `x` is recovered from
    ///
    /// ```text
    /// x² = (y² − 1) / (d·y² + 1)
    /// ```
    ///
    /// trying the square-root candidate and its product with `√−1`.
    ///
    /// Returns `None` when:
    /// - `y ≥ p` (non-canonical encoding),
    /// - `(y² − 1) / (d·y² + 1)` has no square root,
    /// - `x = 0` but the sign bit is set.
    pub(crate) fn decompress(bytes: &[u8; 32]) -> Option<Self> {
        let sign = bytes[31] >> 7;

        let mut y_bytes = *bytes;
        y_bytes[31] &= 0x7f;

        let y = FieldElement::from_bytes(&y_bytes);
        if y.to_bytes() != y_bytes {
            return None;
        }

        let yy = y.square();
        let u = yy - FieldElement::ONE;
        let v = yy * D + FieldElement::ONE;

        let mut x = FieldElement::sqrt_ratio(&u, &v)?;

        if bool::from(x.is_zero()) && sign == 1 {
            return None;
        }

        if x.is_negative().unwrap_u8() != sign {
            x = -x;
        }

        Some(Self {
            x,
            y,
            z: FieldElement::ONE,
            t: x * y,
        })
    }

    /// Computes `scalar · self` by plain double-and-add.
    ///
    /// **Not constant-time**: the sequence of additions depends on the bits
    /// of `scalar`. Only call this with public scalars and points, as in
    /// signature verification.
    pub(crate) fn mul_vartime(&self, scalar: &Scalar) -> Self {
        let bytes = scalar.as_bytes();
        let mut acc = Self::IDENTITY;

        for bit in (0..256).rev() {
            acc = acc.double();
            if (bytes[bit >> 3] >> (bit & 7)) & 1 == 1 {
                acc = acc + *self;
            }
        }

        acc
    }

    /// Computes `scalar · self` with a fixed sequence of doublings and
    /// additions, selecting each sum in constant time.
    #[cfg(any(test, not(feature = "precomputed-tables")))]
    pub(crate) fn mul_ct(&self, scalar: &Scalar) -> Self {
        let bytes = scalar.as_bytes();
        let mut acc = Self::IDENTITY;

        for bit in (0..256).rev() {
            acc = acc.double();
            let sum = acc + *self;
            let choice = Choice::from((bytes[bit >> 3] >> (bit & 7)) & 1);
            acc = Self::conditional_select(&acc, &sum, choice);
        }

        acc
    }

    /// Computes `scalar · B` for the Ed25519 base point `B`.
    ///
    /// Looks up the shared fixed-base table, building it on first use.
    #[cfg(feature = "precomputed-tables")]
    pub(crate) fn mul_base(scalar: &Scalar) -> Self {
        BaseTable::get().mul(scalar)
    }

    /// Computes `scalar · B` for the Ed25519 base point `B`.
    #[cfg(not(feature = "precomputed-tables"))]
    pub(crate) fn mul_base(scalar: &Scalar) -> Self {
        BASEPOINT.mul_ct(scalar)
    }
}

impl Add for EdwardsPoint {
    type Output = EdwardsPoint;

    /// Unified addition (`add-2008-hwcd-3`):
    ///
    /// ```text
    /// A = (Y₁ − X₁)(Y₂ − X₂)   B = (Y₁ + X₁)(Y₂ + X₂)
    /// C = 2d·T₁·T₂             D = 2·Z₁·Z₂
    /// X₃ = (B − A)(D − C)      Y₃ = (D + C)(B + A)
    /// Z₃ = (D − C)(D + C)      T₃ = (B − A)(B + A)
    /// ```
    fn add(self, rhs: EdwardsPoint) -> EdwardsPoint {
        let a = (self.y - self.x) * (rhs.y - rhs.x);
        let b = (self.y + self.x) * (rhs.y + rhs.x);
        let c = self.t * D2 * rhs.t;
        let zz = self.z * rhs.z;
        let d = zz + zz;

        let e = b - a;
        let f = d - c;
        let g = d + c;
        let h = b + a;

        EdwardsPoint {
            x: e * f,
            y: g * h,
            z: f * g,
            t: e * h,
        }
    }
}

impl Neg for &EdwardsPoint {
    type Output = EdwardsPoint;

    /// `(X, Y, Z, T) ↦ (−X, Y, Z, −T)`.
    fn neg(self) -> EdwardsPoint {
        EdwardsPoint {
            x: -self.x,
            y: self.y,
            z: self.z,
            t: -self.t,
        }
    }
}

impl Neg for EdwardsPoint {
    type Output = EdwardsPoint;

    fn neg(self) -> EdwardsPoint {
        -&self
    }
}

impl ConstantTimeEq for EdwardsPoint {
    /// Compares projectively, `X₁·Z₂ = X₂·Z₁` and `Y₁·Z₂ = Y₂·Z₁`, so no
    /// inversion is needed.
    fn ct_eq(&self, other: &Self) -> Choice {
        (self.x * other.z).ct_eq(&(other.x * self.z)) & (self.y * other.z).ct_eq(&(other.y * self.z))
    }
}

impl PartialEq for EdwardsPoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for EdwardsPoint {}

impl ConditionallySelectable for EdwardsPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
            t: FieldElement::conditional_select(&a.t, &b.t, choice),
        }
    }
}
