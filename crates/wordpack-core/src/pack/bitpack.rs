//! Width-parameterized bit packing.
//!
//! Packs 64 values of `width` bits each into exactly `width` words, laid out
//! as one contiguous bit-stream, most significant value first and most
//! significant bit first. Unpacking derives the width from the number of
//! words supplied.

use wordpack_common::{BATCH_LEN, CodecError, WORD_BITS, Word};

/// Appends the `width`-bit encoding of `values` to `dst`, which grows by
/// exactly `width` words.
///
/// Every value must fit in `width` bits, and `width` must be at most 64.
/// Width 0 appends nothing and width 64 copies the values verbatim.
pub fn pack(values: &[Word; BATCH_LEN], width: u32, dst: &mut Vec<Word>) {
    debug_assert!(width <= WORD_BITS, "bit width {width} exceeds word");
    match width {
        0 => {}
        WORD_BITS => dst.extend_from_slice(values),
        _ => pack_words(values, width, dst),
    }
}

/// Recovers the 64 values packed in `src`. The bit width is `src.len()`.
pub fn unpack(src: &[Word], out: &mut [Word; BATCH_LEN]) -> Result<(), CodecError> {
    match src.len() {
        0 => out.fill(0),
        width if width == WORD_BITS as usize => out.copy_from_slice(src),
        width if width < WORD_BITS as usize => unpack_words(src, width as u32, out),
        width => return Err(CodecError::InvalidWidth { width }),
    }
    Ok(())
}

/// Packs with a width in `1..64`. Inlined so that constant widths fold.
#[inline(always)]
pub(crate) fn pack_words(values: &[Word; BATCH_LEN], width: u32, dst: &mut Vec<Word>) {
    dst.reserve(width as usize);

    let mut acc: Word = 0;
    // bits still unused in acc
    let mut free = WORD_BITS;
    for &v in values {
        debug_assert!(v >> width == 0, "value {v:#x} exceeds {width} bits");

        if free > width {
            free -= width;
            acc |= v << free;
        } else if free == width {
            dst.push(acc | v);
            acc = 0;
            free = WORD_BITS;
        } else {
            // straddles into the next word
            let spill = width - free;
            dst.push(acc | (v >> spill));
            free = WORD_BITS - spill;
            acc = v << free;
        }
    }
    debug_assert_eq!(free, WORD_BITS);
}

/// Unpacks with a width in `1..64`; `src` holds exactly `width` words.
#[inline(always)]
pub(crate) fn unpack_words(src: &[Word], width: u32, out: &mut [Word; BATCH_LEN]) {
    debug_assert_eq!(src.len(), width as usize);
    let mask: Word = (1 << width) - 1;

    for (i, slot) in out.iter_mut().enumerate() {
        let bit = i * width as usize;
        let word = bit / WORD_BITS as usize;
        let end = bit as u32 % WORD_BITS + width;

        *slot = if end <= WORD_BITS {
            (src[word] >> (WORD_BITS - end)) & mask
        } else {
            let over = end - WORD_BITS;
            ((src[word] << over) | (src[word + 1] >> (WORD_BITS - over))) & mask
        };
    }
}
