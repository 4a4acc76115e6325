//! Curve constants for edwards25519 and curve25519.
//!
//! All field constants are given as radix-2⁵¹ limbs.

use crate::curve::point::EdwardsPoint;
use crate::primitives::FieldElement;

/// Edwards `d = −121665 / 121666 mod p`.
pub(crate) const D: FieldElement = FieldElement([
    929_955_233_495_203,
    466_365_720_129_213,
    1_662_059_464_998_953,
    2_033_849_074_728_123,
    1_442_794_654_840_575,
]);

/// Edwards `2·d`, used by the unified addition formula.
pub(crate) const D2: FieldElement = FieldElement([
    1_859_910_466_990_425,
    932_731_440_258_426,
    1_072_319_116_312_658,
    1_815_898_335_770_999,
    633_789_495_995_903,
]);

/// `(A − 2) / 4` for the Montgomery curve `v² = u³ + 486662·u² + u`.
pub(crate) const A24: FieldElement = FieldElement([121_665, 0, 0, 0, 0]);

/// The Ed25519 base point `B`, with affine `y = 4/5` and even `x`.
pub(crate) const BASEPOINT: EdwardsPoint = EdwardsPoint {
    x: FieldElement([
        1_738_742_601_995_546,
        1_146_398_526_822_698,
        2_070_867_633_025_821,
        562_264_141_797_630,
        587_772_402_128_613,
    ]),
    y: FieldElement([
        1_801_439_850_948_184,
        1_351_079_888_211_148,
        450_359_962_737_049,
        900_719_925_474_099,
        1_801_439_850_948_198,
    ]),
    z: FieldElement::ONE,
    t: FieldElement([
        1_841_354_044_333_475,
        16_398_895_984_059,
        755_974_180_946_558,
        900_171_276_175_154,
        1_821_297_809_914_039,
    ]),
};

/// Compressed encoding of [`BASEPOINT`].
#[cfg(test)]
pub(crate) const BASEPOINT_COMPRESSED: [u8; 32] = [
    0x58, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
];

/// Number of radix-256 windows in the fixed-base table: 32 bytes plus one
/// window for the final carry.
#[cfg(feature = "precomputed-tables")]
pub(crate) const TABLE_WINDOWS: usize = 33;

/// Precomputed multiples per window, `1·Bᵢ ..= 128·Bᵢ`.
#[cfg(feature = "precomputed-tables")]
pub(crate) const TABLE_WINDOW_SIZE: usize = 128;
