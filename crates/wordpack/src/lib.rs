//! # Wordpack
//!
//! Integer compression for batches of 64. Each batch is reduced to the
//! differences between neighbouring values, zig-zag mapped so that small
//! negative and positive differences both stay small, and bit packed at the
//! smallest width that fits all 64. A batch needing `N` bits encodes to
//! exactly `N` 64-bit words.
//!
//! Start with [`encode`] and [`decode`] for single batches, or [`Writer`]
//! and [`Reader`] for streams of any length.
//!
//! ## Batches
//!
//! ```rust
//! let data: [i64; 64] = [
//!     99, 100, -101, 1, 2, 3, 4, 5,
//!     144, 145, 146, 147, 148, 149, 150, 151,
//!     244, 245, 246, 247, 248, 249, 250, 251,
//!     344, 345, 346, 347, 348, 349, 350, 351,
//!     444, 445, 446, 447, 448, 449, 450, 451,
//!     544, 545, 546, 547, 548, 549, 550, 551,
//!     644, 645, 646, 647, 648, 649, 650, 651,
//!     744, 745, 746, 747, 748, 749, 750, 1001,
//! ];
//!
//! let words = wordpack::encode(&data, data[0]);
//! assert_eq!(words.len(), 9);
//!
//! let got = wordpack::decode(&words, 99)?;
//! assert_eq!(got, data);
//! # Ok::<(), wordpack::Error>(())
//! ```
//!
//! ## Streams
//!
//! A stream groups up to nine batches per page behind a one-word header.
//! Writer and reader must agree on the delta offset.
//!
//! ```rust
//! use wordpack::{Reader, Writer};
//!
//! let data: Vec<u32> = (0..1000).map(|i| 5_000 + i * 2).collect();
//!
//! let mut buf = Vec::new();
//! Writer::new(&mut buf, 5_000).flush(&data)?;
//!
//! let mut reader = Reader::new(buf.as_slice(), 5_000);
//! let mut got = Vec::new();
//! reader.read_to_end(&mut got)?;
//! assert_eq!(got, data);
//! # Ok::<(), wordpack::Error>(())
//! ```
//!
//! ## Byte order
//!
//! Words are written in the host's byte order by default, so streams only
//! port between hosts that agree. Configure [`WordOrder::LittleEndian`] or
//! [`WordOrder::BigEndian`] through [`StreamConfig`] for portable streams.
//!
//! ## Features
//!
//! | Feature | Default | Notes |
//! | ------- | ------- | ----- |
//! | `specialized` | yes | one monomorphized packer per bit width |

// Re-export the batch codec
pub use wordpack_core::pack::{
    append_delta_decode, append_delta_encode, decode, encode, min_width,
};

// Re-export the stream API
pub use wordpack_adapters::stream::{
    PAGE_SIZE, PageHeader, Reader, SENTINEL, SLOTS_PER_PAGE, StreamConfig, WordOrder, Writer,
};

// Re-export common types - you'll need these for batches and error handling
pub use wordpack_common::{
    BATCH_LEN, Batch, CodecError, Element, Error, Result, StreamError, WORD_BITS, Word,
};
