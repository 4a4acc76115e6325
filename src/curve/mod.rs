//! The edwards25519 group.
//!
//! - `constants`: curve parameters, the base point and table geometry.
//! - `point`: extended-coordinate points, addition, doubling, encoding and
//!   scalar multiplication.
//! - `table`: the fixed-base table behind `EdwardsPoint::mul_base`
//!   (feature `precomputed-tables`).

pub(crate) mod constants;
pub(crate) mod point;

#[cfg(feature = "precomputed-tables")]
pub(crate) mod table;

pub(crate) use point::EdwardsPoint;
