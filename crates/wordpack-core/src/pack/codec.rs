//! Batch codec: delta transform, width selection and bit packing combined.
//!
//! An encoded block is self-describing by length. Encoding a batch whose
//! deltas need `N` bits appends exactly `N` words, and decoding takes `N`
//! from the number of words it is handed.

#[cfg(not(feature = "specialized"))]
use super::bitpack as packer;
#[cfg(feature = "specialized")]
use super::specialized as packer;
use super::{delta, width};
use wordpack_common::{BATCH_LEN, Batch, Element, Result, Word};

/// Appends the encoding of `batch` to `dst`, with the first element's delta
/// taken against `offset`. Returns the bit width, which equals the number of
/// words appended.
pub fn append_delta_encode<T: Element>(dst: &mut Vec<Word>, batch: &Batch<T>, offset: T) -> u32 {
    let mut deltas = [0; BATCH_LEN];
    delta::encode(batch, offset, &mut deltas);
    let width = width::min_width(&deltas);
    packer::pack(&deltas, width, dst);
    width
}

/// Appends the 64 integers encoded in `src` to `dst`. The offset must match
/// the one used for encoding.
///
/// # Errors
///
/// Returns [`CodecError::InvalidWidth`](wordpack_common::CodecError) when
/// `src` holds more than 64 words. `dst` is left untouched in that case.
pub fn append_delta_decode<T: Element>(dst: &mut Vec<T>, src: &[Word], offset: T) -> Result<()> {
    let mut deltas = [0; BATCH_LEN];
    packer::unpack(src, &mut deltas)?;

    let mut batch = [T::ZERO; BATCH_LEN];
    delta::decode(&deltas, offset, &mut batch);
    dst.extend_from_slice(&batch);
    Ok(())
}

/// Returns the encoding of `batch` against `offset`.
#[must_use]
pub fn encode<T: Element>(batch: &Batch<T>, offset: T) -> Vec<Word> {
    let mut dst = Vec::new();
    append_delta_encode(&mut dst, batch, offset);
    dst
}

/// Returns the batch encoded in `src`.
pub fn decode<T: Element>(src: &[Word], offset: T) -> Result<Batch<T>> {
    let mut deltas = [0; BATCH_LEN];
    packer::unpack(src, &mut deltas)?;

    let mut batch = [T::ZERO; BATCH_LEN];
    delta::decode(&deltas, offset, &mut batch);
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use wordpack_common::{CodecError, Error};

    /// Deterministic batch whose zig-zag deltas need at most `width` bits.
    fn batch_of_width(width: u32, seed: u64) -> (Batch<i64>, i64) {
        let offset = seed as i64;
        let mut batch = [0i64; BATCH_LEN];
        if width == 0 {
            batch.fill(offset);
            return (batch, offset);
        }

        let mask = if width == 64 { u64::MAX } else { (1 << width) - 1 };
        let mut x = seed | 1;
        let mut prev = offset;
        for (i, v) in batch.iter_mut().enumerate() {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            // force the top bit once so the width is exact
            let zz = if i == 7 { mask } else { x & mask };
            prev = prev.apply_zigzag(zz);
            *v = prev;
        }
        (batch, offset)
    }

    #[test]
    fn test_every_width() {
        for width in 0..=64 {
            let (batch, offset) = batch_of_width(width, 42);
            let mut words = Vec::new();
            let got_width = append_delta_encode(&mut words, &batch, offset);
            assert_eq!(got_width, width);
            assert_eq!(words.len(), width as usize);

            let mut got = Vec::new();
            append_delta_decode(&mut got, &words, offset).unwrap();
            assert_eq!(got, batch.to_vec(), "width {width}");
        }
    }

    #[test]
    fn test_zero_delta_batch() {
        let batch = [-3i16; BATCH_LEN];
        let words = encode(&batch, -3);
        assert!(words.is_empty());
        assert_eq!(decode::<i16>(&[], -3).unwrap(), batch);
    }

    #[test]
    fn test_increment_single_word() {
        let offset = -10i32;
        let mut batch = [0i32; BATCH_LEN];
        for (i, v) in batch.iter_mut().enumerate() {
            *v = offset + i as i32 + 1;
        }

        let words = encode(&batch, offset);
        assert_eq!(words, vec![0xffff_ffff_ffff_ffff]);
        assert_eq!(decode(&words, offset).unwrap(), batch);
    }

    #[test]
    fn test_decrement_alternating_bits() {
        let offset = 10i64;
        let mut batch = [0i64; BATCH_LEN];
        for (i, v) in batch.iter_mut().enumerate() {
            *v = offset - i as i64 - 1;
        }

        let words = encode(&batch, offset);
        assert_eq!(words, vec![0xaaaa_aaaa_aaaa_aaaa, 0xaaaa_aaaa_aaaa_aaaa]);
        assert_eq!(decode(&words, offset).unwrap(), batch);
    }

    #[test]
    fn test_full_range_jump_needs_word_width() {
        let mut batch = [0i64; BATCH_LEN];
        batch[0] = i64::MIN;
        let words = encode(&batch, 0);
        assert_eq!(words.len(), 64);
        assert_eq!(words[0], u64::MAX);
        assert_eq!(decode(&words, 0).unwrap(), batch);
    }

    #[test]
    fn test_mixed_values() {
        let data: [i64; BATCH_LEN] = [
            99, 100, -101, 1, 2, 3, 4, 5, //
            144, 145, 146, 147, 148, 149, 150, 151, //
            244, 245, 246, 247, 248, 249, 250, 251, //
            344, 345, 346, 347, 348, 349, 350, 351, //
            444, 445, 446, 447, 448, 449, 450, 451, //
            544, 545, 546, 547, 548, 549, 550, 551, //
            644, 645, 646, 647, 648, 649, 650, 651, //
            744, 745, 746, 747, 748, 749, 750, 1001,
        ];
        let words = encode(&data, data[0]);
        assert_eq!(words.len(), 9);
        assert_eq!(decode(&words, 99).unwrap(), data);
    }

    #[test]
    fn test_decode_rejects_oversized_block() {
        let mut dst: Vec<u64> = vec![1, 2];
        let err = append_delta_decode(&mut dst, &[0; 65], 0u64).unwrap_err();
        assert!(matches!(
            err,
            Error::Codec(CodecError::InvalidWidth { width: 65 })
        ));
        assert_eq!(dst, vec![1, 2]);
    }

    #[test]
    fn test_wrong_offset_changes_output() {
        let batch = [5u8; BATCH_LEN];
        let words = encode(&batch, 4);
        assert_ne!(decode(&words, 3u8).unwrap(), batch);
    }

    proptest! {
        #[test]
        fn prop_roundtrip_u64(seed in any::<u64>(), offset in any::<u64>()) {
            let mut batch = [0u64; BATCH_LEN];
            let mut x = seed | 1;
            for v in batch.iter_mut() {
                x ^= x << 13;
                x ^= x >> 7;
                x ^= x << 17;
                *v = x;
            }
            let words = encode(&batch, offset);
            prop_assert_eq!(decode(&words, offset).unwrap(), batch);
        }

        #[test]
        fn prop_roundtrip_i32_small_steps(
            start in any::<i32>(),
            steps in prop::collection::vec(-300i32..300, BATCH_LEN),
        ) {
            let mut batch = [0i32; BATCH_LEN];
            let mut v = start;
            for (slot, step) in batch.iter_mut().zip(&steps) {
                v = v.wrapping_add(*step);
                *slot = v;
            }
            let words = encode(&batch, start);
            // |delta| < 300 fits in 10 zig-zag bits
            prop_assert!(words.len() <= 10);
            prop_assert_eq!(decode(&words, start).unwrap(), batch);
        }

        #[test]
        fn prop_roundtrip_u8(
            values in prop::collection::vec(any::<u8>(), BATCH_LEN),
            offset in any::<u8>(),
        ) {
            let mut batch = [0u8; BATCH_LEN];
            batch.copy_from_slice(&values);
            let words = encode(&batch, offset);
            prop_assert!(words.len() <= 8);
            prop_assert_eq!(decode(&words, offset).unwrap(), batch);
        }
    }
}
