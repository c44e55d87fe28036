//! Batch compression for 64 integers at a time.
//!
//! Encoding runs four stages:
//!
//! 1. [`delta`] - differences between neighbours, zig-zag mapped to unsigned
//! 2. [`width`] - the minimum bit width holding every mapped delta
//! 3. [`bitpack`] - the deltas packed into exactly `width` words
//! 4. [`codec`] - the composition of the above, and its inverse
//!
//! # Layout
//!
//! The packed words form one big-endian bit-stream: value 0 occupies the
//! most significant `width` bits of word 0, value 1 follows, and a value may
//! straddle two neighbouring words. With 64 values per batch the stream is
//! always exactly `width` words long, so the length of an encoded block
//! tells its bit width.
//!
//! | Width | Words | Notes |
//! |-------|-------|-------|
//! | 0 | 0 | every delta is zero |
//! | 1..=63 | width | bit-stream, values may straddle words |
//! | 64 | 64 | one delta per word, no compression |
//!
//! # Example
//!
//! ```
//! use wordpack_core::pack::{decode, encode};
//!
//! let mut batch = [0u32; 64];
//! for (i, v) in batch.iter_mut().enumerate() {
//!     *v = 1000 + i as u32;
//! }
//!
//! let words = encode(&batch, 999);
//! assert_eq!(words, vec![u64::MAX]);
//! assert_eq!(decode::<u32>(&words, 999).unwrap(), batch);
//! ```

pub mod bitpack;
pub mod codec;
pub mod delta;
#[cfg(feature = "specialized")]
pub mod specialized;
pub mod width;

pub use codec::{append_delta_decode, append_delta_encode, decode, encode};
pub use width::min_width;
