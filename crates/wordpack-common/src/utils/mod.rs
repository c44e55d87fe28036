//! Utility functions and helpers.
//!
//! - [`error`] - Error types shared by all Wordpack crates

pub mod error;
