//! # wordpack-core
//!
//! Core layer for Wordpack: the pure, stateless batch codec.
//!
//! Everything in this crate is a plain function over fixed-size arrays. There
//! is no shared state, so any function may be called concurrently over
//! disjoint inputs. It depends only on `wordpack-common`.
//!
//! ## Modules
//!
//! - [`pack`] - Delta transform, width selection, bit packing, batch codec

pub mod pack;

// Re-export commonly used functions
pub use pack::{append_delta_decode, append_delta_encode, decode, encode};
