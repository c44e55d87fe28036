//! Per-width specialized packers.
//!
//! Each width in `1..64` gets its own monomorphized copy of the packing loops,
//! with the width as a const generic so shifts and masks fold into constants
//! and the loops unroll. A runtime match picks the copy. Output is
//! bit-identical to [`bitpack`](super::bitpack).

use super::bitpack;
use wordpack_common::{BATCH_LEN, CodecError, WORD_BITS, Word};

/// Packs `values` at the const width `N`.
#[inline]
pub fn pack_fixed<const N: u32>(values: &[Word; BATCH_LEN], dst: &mut Vec<Word>) {
    const { assert!(N > 0 && N < WORD_BITS) };
    bitpack::pack_words(values, N, dst);
}

/// Unpacks at the const width `N`; `src` holds exactly `N` words.
#[inline]
pub fn unpack_fixed<const N: u32>(src: &[Word], out: &mut [Word; BATCH_LEN]) {
    const { assert!(N > 0 && N < WORD_BITS) };
    bitpack::unpack_words(src, N, out);
}

macro_rules! specialize {
    ($($n:literal)*) => {
        /// Same contract as [`bitpack::pack`], dispatched to [`pack_fixed`].
        pub fn pack(values: &[Word; BATCH_LEN], width: u32, dst: &mut Vec<Word>) {
            match width {
                $($n => pack_fixed::<$n>(values, dst),)*
                _ => bitpack::pack(values, width, dst),
            }
        }

        /// Same contract as [`bitpack::unpack`], dispatched per width.
        pub fn unpack(src: &[Word], out: &mut [Word; BATCH_LEN]) -> Result<(), CodecError> {
            match src.len() {
                $($n => unpack_fixed::<$n>(src, out),)*
                _ => return bitpack::unpack(src, out),
            }
            Ok(())
        }
    };
}

specialize!(
    1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16
    17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32
    33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48
    49 50 51 52 53 54 55 56 57 58 59 60 61 62 63
);
