//! Interchangeable producers of trace documents.
//!
//! The converter only needs "something that yields a [`TraceDocument`]".
//! A file written by a capture front end is the usual case; the synthetic
//! source fabricates a small deterministic trace from a piece of text, which
//! is handy for demos and tests when no debugger is around.

use crate::trace::file::{load_trace, TraceError};
use crate::trace::record::{TraceDocument, TraceMetadata, TraceStep};
use std::path::PathBuf;

/// Base address of the fabricated program counters.
const SYNTHETIC_PC_BASE: u64 = 0x5555_5555_5000;

/// Something that can produce a trace document.
pub trait TraceSource {
    /// Identifier recorded as `source_trace` in the musical document.
    fn describe(&self) -> String;

    /// Produce the trace.
    fn load(&self) -> Result<TraceDocument, TraceError>;
}

/// A trace stored on disk as JSON.
#[derive(Debug, Clone)]
pub struct FileTraceSource {
    pub path: PathBuf,
}

impl FileTraceSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TraceSource for FileTraceSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<TraceDocument, TraceError> {
        load_trace(&self.path)
    }
}

/// A trace fabricated from the characters of some text.
///
/// Each character becomes one step: even positions are a `mov` of the
/// character code into `eax`, odd positions an `add` into `ebx`, and the
/// register snapshot holds the code times one, two and three.
#[derive(Debug, Clone)]
pub struct SyntheticTraceSource {
    pub seed_text: String,
}

impl SyntheticTraceSource {
    pub fn new(seed_text: impl Into<String>) -> Self {
        Self { seed_text: seed_text.into() }
    }

    /// Build the trace. Infallible, unlike [`TraceSource::load`] in general.
    pub fn generate(&self) -> TraceDocument {
        let steps: Vec<TraceStep> = self
            .seed_text
            .chars()
            .enumerate()
            .map(|(i, ch)| {
                let code = ch as u64;
                let instruction = if i % 2 == 0 {
                    format!("mov ${},%eax", code)
                } else {
                    format!("add ${},%ebx", code)
                };
                let pc = SYNTHETIC_PC_BASE + (i as u64) * 4;

                TraceStep::new(i as u64, format!("0x{:x}", pc), instruction)
                    .with_register("rax", format!("0x{:x}", code))
                    .with_register("rbx", format!("0x{:x}", code * 2))
                    .with_register("rcx", format!("0x{:x}", code * 3))
            })
            .collect();

        TraceDocument {
            metadata: Some(TraceMetadata {
                total_instructions: Some(steps.len() as u64),
                timestamp: None,
                tracer_version: Some("synthetic-1.0".to_string()),
            }),
            steps,
        }
    }
}

impl TraceSource for SyntheticTraceSource {
    fn describe(&self) -> String {
        format!("synthetic:{}", self.seed_text)
    }

    fn load(&self) -> Result<TraceDocument, TraceError> {
        Ok(self.generate())
    }
}
