//! In-memory form of a captured execution trace.
//!
//! The JSON layout is the one emitted by the capture front ends:
//!
//! ```text
//! { "instructions": [ { "step": 0, "pc": "0x401000",
//!                       "instruction": "mov %rax,%rbx",
//!                       "registers": { "rax": "0x10", ... } }, ... ],
//!   "metadata": { "total_instructions": 1, ... } }
//! ```

use crate::trace::register::{Register, RegisterValue};
use serde::{Serialize, Deserialize};
use std::collections::BTreeMap;

/// Register snapshot of one step, keyed by register name.
///
/// Names are kept as strings so that registers outside the fixed set
/// survive a load/save round trip.
pub type RegisterMap = BTreeMap<String, String>;

/// One captured execution event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceStep {
    /// Sequence position (0-based).
    #[serde(rename = "step")]
    pub index: u64,
    /// Program counter, display only.
    #[serde(rename = "pc")]
    pub program_counter: String,
    /// Mnemonic plus operands, or `"unknown"`.
    #[serde(rename = "instruction")]
    pub instruction_text: String,
    /// Register values as hex strings or `"unknown"`.
    pub registers: RegisterMap,
}

impl TraceStep {
    /// Create a step with an empty register snapshot.
    pub fn new(
        index: u64,
        program_counter: impl Into<String>,
        instruction_text: impl Into<String>,
    ) -> Self {
        Self {
            index,
            program_counter: program_counter.into(),
            instruction_text: instruction_text.into(),
            registers: RegisterMap::new(),
        }
    }

    /// Builder-style register assignment.
    pub fn with_register(mut self, name: &str, value: impl Into<String>) -> Self {
        self.registers.insert(name.to_string(), value.into());
        self
    }

    /// Parsed value of one of the fixed registers.
    ///
    /// A register missing from the snapshot reads as [`RegisterValue::Unknown`].
    pub fn register_value(&self, reg: Register) -> RegisterValue {
        self.registers
            .get(reg.name())
            .map(|text| RegisterValue::parse(text))
            .unwrap_or(RegisterValue::Unknown)
    }

    /// Parsed values of the fixed registers present in the snapshot,
    /// in canonical order.
    pub fn known_registers(&self) -> impl Iterator<Item = (Register, RegisterValue)> + '_ {
        Register::ALL.into_iter().filter_map(move |reg| {
            self.registers
                .get(reg.name())
                .map(|text| (reg, RegisterValue::parse(text)))
        })
    }
}

/// Optional capture metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraceMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_instructions: Option<u64>,
    /// Capture time in seconds since the Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracer_version: Option<String>,
}

/// An ordered sequence of trace steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraceDocument {
    #[serde(rename = "instructions")]
    pub steps: Vec<TraceStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<TraceMetadata>,
}

impl TraceDocument {
    /// Create a document from steps, without metadata.
    pub fn new(steps: Vec<TraceStep>) -> Self {
        Self { steps, metadata: None }
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
