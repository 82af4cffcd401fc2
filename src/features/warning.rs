//! Non-fatal anomalies found while extracting features.
//!
//! None of these stop a conversion. Every derivation falls back to its
//! documented default and the anomaly is reported alongside the output.

use thiserror::Error;

/// A step carried sentinel or malformed data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartialDataWarning {
    #[error("step {position}: instruction text missing, using default opcode")]
    UnknownInstruction { position: usize },

    #[error("step {position}: register {register} is unknown")]
    UnknownRegister { position: usize, register: String },

    #[error("step {position}: register {register} has malformed value {value:?}")]
    MalformedRegister { position: usize, register: String, value: String },

    #[error("step {position}: register {name} is not tracked, ignoring")]
    UnrecognizedRegister { position: usize, name: String },

    #[error("step {position}: recorded index {found} does not match position")]
    IndexMismatch { position: usize, found: u64 },
}

impl PartialDataWarning {
    /// Trace position the warning refers to.
    pub fn position(&self) -> usize {
        match self {
            PartialDataWarning::UnknownInstruction { position }
            | PartialDataWarning::UnknownRegister { position, .. }
            | PartialDataWarning::MalformedRegister { position, .. }
            | PartialDataWarning::UnrecognizedRegister { position, .. }
            | PartialDataWarning::IndexMismatch { position, .. } => *position,
        }
    }
}
