//! Feature extraction from raw trace steps.
//!
//! - [`extract_opcode`] - instruction text to opcode class
//! - [`determine_dominant_register`] - register snapshot to dominant register
//! - [`PartialDataWarning`] - anomalies that degrade to defaults

pub mod opcode;
pub mod dominant;
pub mod warning;

pub use opcode::{extract_opcode, OpcodeClass};
pub use dominant::{determine_dominant_register, extract_features, StepFeatures, DEFAULT_REGISTER};
pub use warning::PartialDataWarning;
