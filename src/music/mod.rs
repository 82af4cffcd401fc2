//! Musical mapping rules.
//!
//! Per-step rules (note, rhythm, instrument) are pure functions of the
//! extracted features. Tempo and key look at the whole trace.

mod note;
mod instrument;
mod rhythm;
mod tempo;
pub mod key;
pub mod document;

pub use note::{map_opcode_to_note, Note};
pub use instrument::{map_register_name_to_instrument, map_register_to_instrument, Instrument};
pub use rhythm::{compute_rhythm, duration_name, BASE_DURATION};
pub use tempo::{compute_tempo, DEFAULT_TEMPO};
pub use key::{compute_key, map_register_to_key, Key, KeyAccumulator};
pub use document::{load_document, save_document, DocumentError, DocumentMetadata, MusicalDocument, CONVERSION_VERSION};
