//! The musical document: output of one conversion run.

use crate::music::{Instrument, Key, Note};
use serde::{Serialize, Deserialize};
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

/// Version tag written into every document's metadata.
pub const CONVERSION_VERSION: &str = "1.0";

/// Provenance of a musical document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub source_trace: String,
    pub total_instructions: u64,
    #[serde(default = "default_version")]
    pub conversion_version: String,
}

fn default_version() -> String {
    CONVERSION_VERSION.to_string()
}

/// Tempo, key and the three step-aligned sequences.
///
/// `notes[i]`, `rhythms[i]` and `instruments[i]` all describe trace step `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusicalDocument {
    /// Beats per minute.
    pub tempo: u32,
    pub key: Key,
    pub notes: Vec<Note>,
    /// Durations as fractions of a whole note.
    pub rhythms: Vec<f64>,
    pub instruments: Vec<Instrument>,
    pub metadata: DocumentMetadata,
}

impl MusicalDocument {
    /// Number of step entries.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Check that the three sequences line up.
    pub fn is_aligned(&self) -> bool {
        self.notes.len() == self.rhythms.len() && self.notes.len() == self.instruments.len()
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(self).map_err(DocumentError::from_json)
    }

    /// Parse from JSON text.
    pub fn from_json(text: &str) -> Result<Self, DocumentError> {
        Self::from_json_bytes(text.as_bytes())
    }

    /// Parse from raw JSON bytes. Invalid UTF-8 is a format error.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, DocumentError> {
        let doc: MusicalDocument = serde_json::from_slice(bytes).map_err(DocumentError::from_json)?;
        if !doc.is_aligned() {
            return Err(DocumentError::Misaligned {
                notes: doc.notes.len(),
                rhythms: doc.rhythms.len(),
                instruments: doc.instruments.len(),
            });
        }
        Ok(doc)
    }
}

/// Write a musical document to disk.
pub fn save_document<P: AsRef<Path>>(path: P, doc: &MusicalDocument) -> Result<(), DocumentError> {
    let path = path.as_ref();
    let json = doc.to_json()?;

    let mut file = std::fs::File::create(path)
        .map_err(|e| DocumentError::Io(format!("{}: {}", path.display(), e)))?;
    writeln!(file, "{}", json).map_err(|e| DocumentError::Io(e.to_string()))?;

    log::info!("saved musical document {} ({} notes)", path.display(), doc.len());
    Ok(())
}

/// Read a previously saved musical document.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<MusicalDocument, DocumentError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DocumentError::NotFound(path.display().to_string()),
        _ => DocumentError::Io(format!("{}: {}", path.display(), e)),
    })?;
    MusicalDocument::from_json_bytes(&bytes)
}

/// Errors that can occur while reading or writing a musical document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("document not found: {0}")]
    NotFound(String),

    #[error("malformed document at line {line}, column {column}: {message}")]
    Format { line: usize, column: usize, message: String },

    #[error("document sequences differ in length: {notes} notes, {rhythms} rhythms, {instruments} instruments")]
    Misaligned { notes: usize, rhythms: usize, instruments: usize },

    #[error("I/O error: {0}")]
    Io(String),
}

impl DocumentError {
    fn from_json(err: serde_json::Error) -> Self {
        DocumentError::Format {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> MusicalDocument {
        MusicalDocument {
            tempo: 90,
            key: Key::D,
            notes: vec![Note::C4, Note::C5],
            rhythms: vec![0.25, 0.5],
            instruments: vec![Instrument::Guitar, Instrument::Piano],
            metadata: DocumentMetadata {
                source_trace: "cpu_trace.json".into(),
                total_instructions: 2,
                conversion_version: CONVERSION_VERSION.into(),
            },
        }
    }

    #[test]
    fn test_json_layout() {
        let value: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
        assert_eq!(value["tempo"], 90);
        assert_eq!(value["key"], "D");
        assert_eq!(value["notes"], serde_json::json!(["C4", "C5"]));
        assert_eq!(value["rhythms"], serde_json::json!([0.25, 0.5]));
        assert_eq!(value["instruments"], serde_json::json!(["guitar", "piano"]));
        assert_eq!(value["metadata"]["source_trace"], "cpu_trace.json");
        assert_eq!(value["metadata"]["total_instructions"], 2);
        assert_eq!(value["metadata"]["conversion_version"], "1.0");
    }

    #[test]
    fn test_field_order_is_stable() {
        let json = sample().to_json().unwrap();
        let tempo = json.find("\"tempo\"").unwrap();
        let key = json.find("\"key\"").unwrap();
        let notes = json.find("\"notes\"").unwrap();
        let metadata = json.find("\"metadata\"").unwrap();
        assert!(tempo < key && key < notes && notes < metadata);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("musical_data.json");
        save_document(&path, &sample()).unwrap();
        assert_eq!(load_document(&path).unwrap(), sample());
    }

    #[test]
    fn test_load_rejects_misaligned() {
        let mut doc = sample();
        doc.rhythms.pop();
        let json = serde_json::to_string(&doc).unwrap();
        assert!(matches!(
            MusicalDocument::from_json(&json),
            Err(DocumentError::Misaligned { notes: 2, rhythms: 1, instruments: 2 })
        ));
    }

    #[test]
    fn test_load_invalid_utf8_is_format_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, b"{\"tempo\": \xff}").unwrap();
        assert!(matches!(load_document(&path), Err(DocumentError::Format { .. })));
    }

    #[test]
    fn test_load_missing() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            load_document(dir.path().join("absent.json")),
            Err(DocumentError::NotFound(_))
        ));
    }
}
