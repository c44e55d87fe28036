//! Integer element trait.
//!
//! Every primitive integer type implements [`Element`]. The trait carries the
//! two primitives the delta codec is built on: the zig-zag encoded difference
//! between neighbours, and its inverse.
//!
//! Differences are taken with wrapping subtraction in the element's own width
//! and reinterpreted as signed in that width. Sign-extending that value to 64
//! bits before the zig-zag mapping yields the same result as zig-zag modulo
//! the element width, so an element of `B` bits never produces a zig-zag value
//! wider than `B` bits.

use super::Word;

/// A primitive integer that can be delta encoded.
pub trait Element: Copy + Eq + Default + std::fmt::Debug + Send + Sync + 'static {
    /// The zero value.
    const ZERO: Self;

    /// Number of bits in the element type.
    const BITS: u32;

    /// Returns the zig-zag encoding of `self - next`, computed with
    /// wraparound in the element's width.
    fn zigzag_delta(self, next: Self) -> Word;

    /// Inverse of [`zigzag_delta`](Element::zigzag_delta): returns the value
    /// `next` such that `self.zigzag_delta(next) == zz`.
    ///
    /// Bits of `zz` beyond the element width are ignored.
    fn apply_zigzag(self, zz: Word) -> Self;

    /// Returns the element as an uncompressed word. Signed types are sign
    /// extended.
    fn to_raw_word(self) -> Word;

    /// Returns the element held by an uncompressed word, truncating to the
    /// element width.
    fn from_raw_word(word: Word) -> Self;
}

/// Zig-zag maps a signed value: `0, -1, 1, -2, 2` become `0, 1, 2, 3, 4`.
#[inline(always)]
#[must_use]
pub const fn zigzag_encode(delta: i64) -> Word {
    ((delta >> 63) ^ (delta << 1)) as Word
}

/// Reverses [`zigzag_encode`].
#[inline(always)]
#[must_use]
pub const fn zigzag_decode(zz: Word) -> i64 {
    ((zz >> 1) as i64) ^ -((zz & 1) as i64)
}

macro_rules! impl_element {
    ($($t:ty => $signed:ty),* $(,)?) => {
        $(
            #[allow(clippy::unnecessary_cast)]
            impl Element for $t {
                const ZERO: Self = 0;
                const BITS: u32 = <$t>::BITS;

                #[inline(always)]
                fn zigzag_delta(self, next: Self) -> Word {
                    zigzag_encode(self.wrapping_sub(next) as $signed as i64)
                }

                #[inline(always)]
                fn apply_zigzag(self, zz: Word) -> Self {
                    self.wrapping_sub(zigzag_decode(zz) as Self)
                }

                #[inline(always)]
                fn to_raw_word(self) -> Word {
                    self as Word
                }

                #[inline(always)]
                fn from_raw_word(word: Word) -> Self {
                    word as Self
                }
            }
        )*
    };
}

impl_element!(
    i8 => i8,
    i16 => i16,
    i32 => i32,
    i64 => i64,
    isize => isize,
    u8 => i8,
    u16 => i16,
    u32 => i32,
    u64 => i64,
    usize => isize,
);
