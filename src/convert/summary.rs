//! Human-readable report of a musical document. Display only.

use crate::music::{duration_name, Instrument, Key, MusicalDocument};
use std::collections::BTreeMap;
use std::fmt;

/// Default number of notes listed in a summary.
pub const DEFAULT_NOTATION_LIMIT: usize = 10;

/// How often one instrument plays.
#[derive(Debug, Clone, PartialEq)]
pub struct InstrumentUsage {
    pub instrument: Instrument,
    pub count: usize,
    /// Share of all notes, 0-100.
    pub percentage: f64,
}

/// Aggregated view of a musical document.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub tempo: u32,
    pub key: Key,
    pub total_notes: usize,
    /// Sorted by instrument name.
    pub instrument_usage: Vec<InstrumentUsage>,
    /// `"<note> (<duration>) - <instrument>"` for the first notes.
    pub notation: Vec<String>,
}

/// Summarise a document, listing at most `limit` notes.
pub fn summarize(doc: &MusicalDocument, limit: usize) -> Summary {
    let mut counts: BTreeMap<&str, (Instrument, usize)> = BTreeMap::new();
    for &inst in &doc.instruments {
        counts.entry(inst.as_str()).or_insert((inst, 0)).1 += 1;
    }

    let total = doc.instruments.len();
    let instrument_usage = counts
        .into_values()
        .map(|(instrument, count)| InstrumentUsage {
            instrument,
            count,
            percentage: if total == 0 { 0.0 } else { count as f64 * 100.0 / total as f64 },
        })
        .collect();

    let notation = doc
        .notes
        .iter()
        .zip(&doc.rhythms)
        .zip(&doc.instruments)
        .take(limit)
        .map(|((note, &rhythm), inst)| format!("{} ({}) - {}", note, duration_name(rhythm), inst))
        .collect();

    Summary {
        tempo: doc.tempo,
        key: doc.key,
        total_notes: doc.notes.len(),
        instrument_usage,
        notation,
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "━━━ Conversion Summary ━━━")?;
        writeln!(f, "Tempo: {} BPM", self.tempo)?;
        writeln!(f, "Key: {} major", self.key)?;
        writeln!(f, "Total notes: {}", self.total_notes)?;

        writeln!(f)?;
        writeln!(f, "Instrument usage:")?;
        for usage in &self.instrument_usage {
            writeln!(f, "  {}: {} notes ({:.1}%)", usage.instrument, usage.count, usage.percentage)?;
        }

        writeln!(f)?;
        writeln!(f, "First {} notes:", self.notation.len())?;
        for (i, line) in self.notation.iter().enumerate() {
            writeln!(f, "  {:2}. {}", i + 1, line)?;
        }
        Ok(())
    }
}
