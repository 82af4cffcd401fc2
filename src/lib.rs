//! # trace2music
//!
//! Turns a captured CPU instruction trace into musical data.
//!
//! Each executed instruction becomes one note: the opcode picks the pitch
//! and the duration, the register holding the largest value picks the
//! instrument. The length of the trace sets the tempo and the register
//! values summed over the whole run set the key. The mapping is a fixed,
//! deterministic heuristic; rendering the result to audio is left to
//! downstream tools.

pub mod trace;
pub mod features;
pub mod music;
pub mod convert;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use trace::{Register, TraceDocument, TraceStep, TraceError, TraceSource, load_trace};
pub use features::{OpcodeClass, PartialDataWarning, extract_opcode, determine_dominant_register};
pub use music::{Note, Instrument, Key, MusicalDocument, DocumentError, save_document, load_document};
pub use convert::{convert, convert_with_warnings, Conversion, summarize, Summary};
