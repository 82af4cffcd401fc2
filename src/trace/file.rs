//! Trace document persistence.
//!
//! Traces are stored as JSON. Loading distinguishes a missing file from
//! content that is not a well-formed trace, so the CLI can report which
//! one happened.

use crate::trace::record::TraceDocument;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

/// Parse a trace document from JSON text.
pub fn parse_trace(text: &str) -> Result<TraceDocument, TraceError> {
    parse_trace_bytes(text.as_bytes())
}

/// Parse a trace document from raw JSON bytes.
///
/// Invalid UTF-8 is a format error, like any other unparseable content.
pub fn parse_trace_bytes(bytes: &[u8]) -> Result<TraceDocument, TraceError> {
    serde_json::from_slice(bytes).map_err(TraceError::from_json)
}

/// Load a trace document from disk.
pub fn load_trace<P: AsRef<Path>>(path: P) -> Result<TraceDocument, TraceError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .map_err(|e| TraceError::from_io(path, e))?;

    let trace = parse_trace_bytes(&bytes)?;
    log::info!("loaded trace {} with {} steps", path.display(), trace.len());
    Ok(trace)
}

/// Save a trace document to disk as pretty-printed JSON.
pub fn save_trace<P: AsRef<Path>>(path: P, trace: &TraceDocument) -> Result<(), TraceError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(trace)
        .map_err(TraceError::from_json)?;

    let mut file = std::fs::File::create(path)
        .map_err(|e| TraceError::Io(e.to_string()))?;
    writeln!(file, "{}", json).map_err(|e| TraceError::Io(e.to_string()))?;

    log::info!("saved trace {} with {} steps", path.display(), trace.len());
    Ok(())
}

/// Errors that can occur while reading or writing a trace document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    #[error("trace not found: {0}")]
    NotFound(String),

    #[error("malformed trace at line {line}, column {column}: {message}")]
    Format { line: usize, column: usize, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl TraceError {
    pub(crate) fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => TraceError::NotFound(path.display().to_string()),
            _ => TraceError::Io(format!("{}: {}", path.display(), err)),
        }
    }

    pub(crate) fn from_json(err: serde_json::Error) -> Self {
        TraceError::Format {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}
