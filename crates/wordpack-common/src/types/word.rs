//! Word and batch definitions.

/// Fixed-width unsigned integer holding packed bits.
pub type Word = u64;

/// Number of bits in a [`Word`].
pub const WORD_BITS: u32 = Word::BITS;

/// Number of bytes in a [`Word`] on the wire.
pub const WORD_BYTES: usize = std::mem::size_of::<Word>();

/// Number of integers encoded together under one bit width.
///
/// The batch length equals the word width, so a batch of `N`-bit values
/// always fills exactly `N` words.
pub const BATCH_LEN: usize = WORD_BITS as usize;

/// A full batch of integers.
pub type Batch<T> = [T; BATCH_LEN];
