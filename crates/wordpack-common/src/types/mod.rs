//! Core type definitions for Wordpack.
//!
//! - [`Word`] is the unit of packed storage and of stream I/O.
//! - [`Element`] is implemented by every primitive integer type that can be
//!   fed through the codec.
//! - A [`Batch`] holds exactly [`BATCH_LEN`] elements, all packed with one
//!   bit width.

mod element;
mod word;

pub use element::{Element, zigzag_decode, zigzag_encode};
pub use word::{BATCH_LEN, Batch, WORD_BITS, WORD_BYTES, Word};
