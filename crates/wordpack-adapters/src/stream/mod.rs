//! Paged stream format.
//!
//! A stream is a sequence of pages. Each page starts with one header word
//! followed by up to nine encoded blocks of 64 integers each:
//!
//! ```text
//! ┌────────┬─────────┬─────────┬─────┬─────────┐
//! │ header │ block 0 │ block 1 │ ... │ block 8 │   full page
//! └────────┴─────────┴─────────┴─────┴─────────┘
//! ┌────────┬─────────┬─────┬─────────────────┐
//! │ header │ block 0 │ ... │ raw tail (0-63) │   terminal partial page
//! └────────┴─────────┴─────┴─────────────────┘
//! ```
//!
//! The header holds the bit width of each block in a 7-bit slot, plus a
//! full-page flag. See [`PageHeader`] for the exact layout.
//!
//! - [`Writer`] - Encodes integers to a byte sink
//! - [`Reader`] - Decodes integers from a byte source
//! - [`word_io`] - Word transfer in a configurable byte order
//!
//! A writer or reader owns sequential state (the running last value, the
//! current header, buffered words). Use one instance per stream from one
//! thread at a time.

mod config;
mod header;
mod reader;
pub mod word_io;
mod writer;

pub use config::{StreamConfig, WordOrder};
pub use header::{FULL_PAGE_FLAG, PageHeader, SENTINEL, SLOT_BITS, SLOTS_PER_PAGE};
pub use reader::Reader;
pub use writer::Writer;

use wordpack_common::BATCH_LEN;

/// Number of integers in a full page.
pub const PAGE_SIZE: usize = SLOTS_PER_PAGE * BATCH_LEN;
