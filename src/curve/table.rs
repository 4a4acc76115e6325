//! Fixed-base multiplication table.
//!
//! The scalar is split into 33 signed radix-256 digits
//!
//! ```text
//! s = Σ dᵢ · 256ⁱ,   dᵢ ∈ [−127, 128]
//! ```
//!
//! and window `i` stores `1·256ⁱ·B ..= 128·256ⁱ·B`, so `s·B` is the sum of
//! one table entry (possibly negated) per window: 33 additions and no
//! doublings.
//!
//! The table holds 33 × 128 = 4224 points. It is built once on first use and
//! is read-only afterwards, so any number of threads may share it.

use std::sync::OnceLock;

use subtle::{Choice, ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq};
use tracing::debug;
use zeroize::Zeroize;

use crate::curve::constants::{BASEPOINT, TABLE_WINDOW_SIZE, TABLE_WINDOWS};
use crate::curve::point::EdwardsPoint;
use crate::primitives::Scalar;

static TABLE: OnceLock<BaseTable> = OnceLock::new();

/// Multiples of the base point, one window per radix-256 digit.
///
/// Entry `j` of window `i` is `(j + 1) · 256ⁱ · B`.
pub(crate) struct BaseTable {
    entries: Vec<EdwardsPoint>,
}

impl BaseTable {
    /// Returns the shared table, building it on the first call.
    pub(crate) fn get() -> &'static BaseTable {
        TABLE.get_or_init(BaseTable::build)
    }

    fn build() -> Self {
        let mut entries = Vec::with_capacity(TABLE_WINDOWS * TABLE_WINDOW_SIZE);
        let mut base = BASEPOINT;

        for _ in 0..TABLE_WINDOWS {
            let mut multiple = base;
            for _ in 0..TABLE_WINDOW_SIZE {
                entries.push(multiple);
                multiple = multiple + base;
            }

            // 256·Bᵢ = 2 · (128·Bᵢ)
            base = entries[entries.len() - 1].double();
        }

        debug!(
            windows = TABLE_WINDOWS,
            entries = entries.len(),
            "built fixed-base table"
        );

        Self { entries }
    }

    /// Computes `scalar · B`.
    ///
    /// Every window is scanned in full, so neither the memory access pattern
    /// nor the sequence of additions depends on the scalar.
    pub(crate) fn mul(&self, scalar: &Scalar) -> EdwardsPoint {
        let mut digits = signed_digits(scalar.as_bytes());
        let mut acc = EdwardsPoint::IDENTITY;

        for (window, &digit) in digits.iter().enumerate() {
            let mut selected = self.select(window, digit);
            acc = acc + selected;
            selected.zeroize();
        }

        digits.zeroize();
        acc
    }

    /// Returns `digit · 256^window · B` for `digit ∈ [−128, 128]`.
    fn select(&self, window: usize, digit: i16) -> EdwardsPoint {
        let mask = digit >> 15;
        let negative = Choice::from((mask & 1) as u8);
        let abs = ((digit ^ mask) - mask) as u16;

        let start = window * TABLE_WINDOW_SIZE;
        let mut point = EdwardsPoint::IDENTITY;

        for (j, entry) in self.entries[start..start + TABLE_WINDOW_SIZE].iter().enumerate() {
            point.conditional_assign(entry, (j as u16 + 1).ct_eq(&abs));
        }

        point.conditional_negate(negative);
        point
    }
}

/// Recodes 32 little-endian bytes into 33 signed digits in `[−127, 128]`.
///
/// A byte above 128 borrows from the next window; the last carry becomes
/// digit 32.
fn signed_digits(bytes: &[u8; 32]) -> [i16; TABLE_WINDOWS] {
    let mut digits = [0i16; TABLE_WINDOWS];
    let mut carry = 0i16;

    for (digit, &byte) in digits.iter_mut().zip(bytes.iter()) {
        let v = byte as i16 + carry;
        carry = (v + 127) >> 8;
        *digit = v - (carry << 8);
    }

    digits[TABLE_WINDOWS - 1] = carry;
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_expected_shape() {
        let table = BaseTable::get();
        assert_eq!(table.entries.len(), 4224);

        let mut expected = EdwardsPoint::IDENTITY;
        for entry in &table.entries[..TABLE_WINDOW_SIZE] {
            expected = expected + BASEPOINT;
            assert_eq!(*entry, expected);
        }

        // Window 1 starts at 256·B.
        let mut b256 = BASEPOINT;
        for _ in 0..8 {
            b256 = b256.double();
        }
        assert_eq!(table.entries[TABLE_WINDOW_SIZE], b256);
    }

    #[test]
    fn repeated_get_returns_same_table() {
        assert!(std::ptr::eq(BaseTable::get(), BaseTable::get()));
    }

    #[test]
    fn signed_digits_recompose_scalar() {
        for value in [0u64, 1, 127, 128, 129, 255, 256, 0x80ff, 0xffff_ffff, u64::MAX] {
            let mut bytes = [0u8; 32];
            bytes[..8].copy_from_slice(&value.to_le_bytes());

            let digits = signed_digits(&bytes);
            assert!(digits.iter().all(|d| (-127..=128).contains(d)));

            let recomposed = digits
                .iter()
                .rev()
                .fold(0i128, |acc, &d| acc * 256 + d as i128);
            assert_eq!(recomposed, value as i128);
        }
    }

    #[test]
    fn select_handles_sign_and_zero() {
        let table = BaseTable::get();

        assert_eq!(table.select(0, 0), EdwardsPoint::IDENTITY);
        assert_eq!(table.select(0, 1), BASEPOINT);
        assert_eq!(table.select(0, -1), -BASEPOINT);
        assert_eq!(table.select(0, 128), table.entries[127]);
        assert_eq!(table.select(0, -127), -table.entries[126]);
    }

    #[test]
    fn table_multiplication_matches_ladder() {
        let table = BaseTable::get();

        let scalars = [
            Scalar::ZERO,
            Scalar::ONE,
            Scalar::from_bytes_mod_order(&[0xff; 32]),
            Scalar::from_bytes_mod_order(&[0x80; 32]),
            Scalar::from_bytes_mod_order_wide(&[0x5a; 64]),
            // Unreduced input exercises the carry into the last window.
            Scalar([0xff; 32]),
        ];

        for scalar in &scalars {
            assert_eq!(table.mul(scalar), BASEPOINT.mul_ct(scalar));
        }
    }

    #[test]
    fn wiping_selected_entries_leaves_table_intact() {
        let table = BaseTable::get();
        let scalar = Scalar::from_bytes_mod_order(&[0x81; 32]);

        let first = table.mul(&scalar);
        let second = table.mul(&scalar);

        assert_eq!(first, second);
        assert_eq!(table.entries[0], BASEPOINT);
        assert_eq!(table.select(0, 1), BASEPOINT);
    }
}
