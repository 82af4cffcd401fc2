//! Trace to music conversion.
//!
//! One linear pass over the trace: extract features, map them to a note,
//! a duration and an instrument, feed the key accumulator. Tempo and key
//! are settled once every step has been seen.

use crate::features::{extract_features, PartialDataWarning};
use crate::music::{
    compute_rhythm, compute_tempo, map_opcode_to_note, map_register_to_instrument,
    DocumentMetadata, KeyAccumulator, MusicalDocument, CONVERSION_VERSION,
};
use crate::trace::{TraceDocument, TraceError, TraceSource};

/// Result of a conversion: the document plus whatever was degraded on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub document: MusicalDocument,
    pub warnings: Vec<PartialDataWarning>,
}

impl Conversion {
    /// Number of distinct steps that produced at least one warning.
    pub fn degraded_steps(&self) -> usize {
        let mut positions: Vec<usize> = self.warnings.iter().map(|w| w.position()).collect();
        positions.dedup();
        positions.len()
    }
}

/// Convert a trace, keeping the partial-data warnings.
///
/// `source` ends up in the document metadata as `source_trace`.
pub fn convert_with_warnings(trace: &TraceDocument, source: &str) -> Conversion {
    let step_count = trace.len();
    let mut notes = Vec::with_capacity(step_count);
    let mut rhythms = Vec::with_capacity(step_count);
    let mut instruments = Vec::with_capacity(step_count);
    let mut key_acc = KeyAccumulator::new();
    let mut warnings = Vec::new();

    for (position, step) in trace.steps.iter().enumerate() {
        let (features, step_warnings) = extract_features(step, position);
        for w in &step_warnings {
            log::debug!("{}", w);
        }
        warnings.extend(step_warnings);

        notes.push(map_opcode_to_note(&features.opcode));
        rhythms.push(compute_rhythm(&features.opcode));
        instruments.push(map_register_to_instrument(features.dominant));
        key_acc.add_step(step);
    }

    let document = MusicalDocument {
        tempo: compute_tempo(step_count),
        key: key_acc.key(),
        notes,
        rhythms,
        instruments,
        metadata: DocumentMetadata {
            source_trace: source.to_string(),
            total_instructions: step_count as u64,
            conversion_version: CONVERSION_VERSION.to_string(),
        },
    };

    let conversion = Conversion { document, warnings };
    if !conversion.warnings.is_empty() {
        log::warn!(
            "{} of {} steps had partial register/instruction data ({} warnings); defaults were used",
            conversion.degraded_steps(),
            step_count,
            conversion.warnings.len()
        );
    }
    log::info!(
        "converted {} steps: {} bpm in {}",
        step_count,
        conversion.document.tempo,
        conversion.document.key
    );

    conversion
}

/// Convert a trace into a musical document.
///
/// Total once the trace has loaded: malformed steps degrade to defaults
/// and never abort the run. Identical traces give identical documents.
pub fn convert(trace: &TraceDocument, source: &str) -> MusicalDocument {
    convert_with_warnings(trace, source).document
}

/// Load from a trace source and convert.
pub fn convert_source<S: TraceSource + ?Sized>(source: &S) -> Result<Conversion, TraceError> {
    let trace = source.load()?;
    Ok(convert_with_warnings(&trace, &source.describe()))
}
