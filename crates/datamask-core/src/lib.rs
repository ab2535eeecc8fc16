//! Core contracts shared by the Datamask crates.
//!
//! This crate defines the column identity contract consumed by processors and
//! the error type used for reference parsing.

pub mod error;
pub mod source;

pub use error::{Error, Result};
pub use source::{ColumnRef, ColumnSource, composite_key};
