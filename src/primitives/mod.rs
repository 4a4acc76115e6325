//! Arithmetic primitives
//!
//! This module defines the two number systems every curve operation is
//! built from:
//! - `FieldElement`: integers modulo `p = 2²⁵⁵ − 19`, in five 51-bit limbs
//! - `Scalar`: integers modulo the group order `ℓ`, always stored reduced
//!
//! Both are fixed-size `Copy` values with no heap allocation. Neither type
//! is exposed outside the crate; the public API speaks only in byte arrays.

pub(crate) mod field;
pub(crate) mod scalar;

pub(crate) use field::FieldElement;
pub(crate) use scalar::Scalar;
