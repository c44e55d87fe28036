//! # wordpack-common
//!
//! Foundation layer for Wordpack: word and batch types, the integer element
//! trait, and the shared error type.
//!
//! This crate provides the building blocks used by all other Wordpack crates.
//! It has no internal dependencies and should be kept minimal.
//!
//! ## Modules
//!
//! - [`types`] - Core type definitions ([`Word`], [`Element`], batch constants)
//! - [`utils`] - Utility functions and helpers (errors)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use types::{BATCH_LEN, Batch, Element, WORD_BITS, WORD_BYTES, Word};
pub use utils::error::{CodecError, Error, Result, StreamError};
