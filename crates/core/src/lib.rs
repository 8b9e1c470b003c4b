//! Core types for the lexitrie autocomplete index.
//!
//! This crate defines the foundations shared by the engine:
//! - `alphabet`: the fixed 27-symbol alphabet and the end-of-word padding rule
//! - `error`: Error type hierarchy
//! - `sets`: intersection/union folds over candidate sets

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alphabet;
pub mod error;
pub mod sets;

pub use error::{Error, Result};
