//! Conversion orchestration.
//!
//! This module provides:
//! - [`convert`] - a loaded trace to a musical document
//! - [`summarize`] - a printable report of a document

pub mod converter;
pub mod summary;

pub use converter::{convert, convert_source, convert_with_warnings, Conversion};
pub use summary::{summarize, InstrumentUsage, Summary, DEFAULT_NOTATION_LIMIT};
