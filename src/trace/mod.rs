//! Execution traces: the input side of the converter.
//!
//! This module provides:
//! - The trace document model ([`TraceDocument`], [`TraceStep`])
//! - The fixed register set and tolerant register value parsing
//! - JSON load/save and the [`TraceSource`] producers

pub mod register;
pub mod record;
pub mod file;
pub mod source;

pub use register::{Register, RegisterValue, UNKNOWN};
pub use record::{TraceDocument, TraceStep, TraceMetadata, RegisterMap};
pub use file::{load_trace, parse_trace, parse_trace_bytes, save_trace, TraceError};
pub use source::{TraceSource, FileTraceSource, SyntheticTraceSource};
