//! # wordpack-adapters
//!
//! Adapters layer for Wordpack: byte stream framing on top of the batch
//! codec.
//!
//! ## Modules
//!
//! - [`stream`] - Paged stream format ([`Writer`], [`Reader`], word I/O)

pub mod stream;

pub use stream::{PAGE_SIZE, PageHeader, Reader, StreamConfig, WordOrder, Writer};
