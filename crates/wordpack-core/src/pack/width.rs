//! Bit width selection.

use wordpack_common::{BATCH_LEN, WORD_BITS, Word};

/// Returns the minimum number of bits that holds every value, in `0..=64`.
///
/// The bitwise OR of all values has the same highest set bit as the largest
/// value, so one reduction pass suffices.
#[inline]
#[must_use]
pub fn min_width(values: &[Word; BATCH_LEN]) -> u32 {
    let mask = values.iter().fold(0, |acc, &v| acc | v);
    WORD_BITS - mask.leading_zeros()
}
