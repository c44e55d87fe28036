//! Delta transform with zig-zag mapping.
//!
//! The first element of a batch is compared against an external offset, not
//! against any previous batch. Each delta is `previous - current`, so an
//! increasing sequence yields negative deltas. Overflowing subtraction wraps
//! and is part of the bijection.

use wordpack_common::{BATCH_LEN, Batch, Element, Word};

/// Writes the zig-zag encoded deltas of `batch` to `out`.
#[inline]
pub fn encode<T: Element>(batch: &Batch<T>, offset: T, out: &mut [Word; BATCH_LEN]) {
    let mut prev = offset;
    for (zz, &value) in out.iter_mut().zip(batch.iter()) {
        *zz = prev.zigzag_delta(value);
        prev = value;
    }
}

/// Reverses [`encode`], writing the recovered batch to `out`.
#[inline]
pub fn decode<T: Element>(deltas: &[Word; BATCH_LEN], offset: T, out: &mut Batch<T>) {
    let mut prev = offset;
    for (value, &zz) in out.iter_mut().zip(deltas.iter()) {
        prev = prev.apply_zigzag(zz);
        *value = prev;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_delta_against_offset() {
        let mut batch = [7i64; BATCH_LEN];
        batch[0] = 5;
        let mut zz = [0; BATCH_LEN];
        encode(&batch, 10, &mut zz);

        // 10 - 5 = 5, then 5 - 7 = -2, then zeros
        assert_eq!(zz[0], 10);
        assert_eq!(zz[1], 3);
        assert!(zz[2..].iter().all(|&v| v == 0));
    }

    #[test]
    fn test_overflowing_deltas_roundtrip() {
        let mut batch = [0i32; BATCH_LEN];
        for (i, v) in batch.iter_mut().enumerate() {
            *v = if i % 2 == 0 { i32::MIN } else { i32::MAX };
        }
        let mut zz = [0; BATCH_LEN];
        encode(&batch, i32::MAX, &mut zz);

        let mut got = [0i32; BATCH_LEN];
        decode(&zz, i32::MAX, &mut got);
        assert_eq!(got, batch);
    }

    #[test]
    fn test_unsigned_decrement_is_small() {
        let mut batch = [0u16; BATCH_LEN];
        for (i, v) in batch.iter_mut().enumerate() {
            *v = 100 - i as u16;
        }
        let mut zz = [0; BATCH_LEN];
        encode(&batch, 101, &mut zz);
        assert!(zz.iter().all(|&v| v == 2));
    }

    proptest! {
        #[test]
        fn prop_roundtrip_i8(values in prop::array::uniform32(any::<i8>()), offset in any::<i8>()) {
            let mut batch = [0i8; BATCH_LEN];
            batch[..32].copy_from_slice(&values);
            batch[32..].copy_from_slice(&values);

            let mut zz = [0; BATCH_LEN];
            encode(&batch, offset, &mut zz);
            prop_assert!(zz.iter().all(|&v| v < 1 << 8));

            let mut got = [0i8; BATCH_LEN];
            decode(&zz, offset, &mut got);
            prop_assert_eq!(got, batch);
        }
    }
}
