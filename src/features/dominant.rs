//! Per-step feature extraction.
//!
//! A step is reduced to two features: its opcode class and its dominant
//! register, the tracked register holding the numerically greatest value.

use crate::features::opcode::{extract_opcode, is_unknown_instruction, OpcodeClass};
use crate::features::warning::PartialDataWarning;
use crate::trace::{Register, RegisterMap, RegisterValue, TraceStep};

/// Register used when no value in the snapshot parses.
pub const DEFAULT_REGISTER: Register = Register::Rax;

/// Determine the register holding the strictly greatest parsed value.
///
/// Registers are visited in [`Register::ALL`] order, so on a tie the
/// earlier register keeps the lead. Sentinel, malformed and untracked
/// entries are skipped.
pub fn determine_dominant_register(registers: &RegisterMap) -> Register {
    let mut best: Option<(Register, u64)> = None;

    for reg in Register::ALL {
        let value = match registers.get(reg.name()).map(|text| RegisterValue::parse(text)) {
            Some(RegisterValue::Value(v)) => v,
            _ => continue,
        };

        match best {
            Some((_, max)) if value <= max => {}
            _ => best = Some((reg, value)),
        }
    }

    best.map(|(reg, _)| reg).unwrap_or(DEFAULT_REGISTER)
}

/// Features of a single trace step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepFeatures {
    pub opcode: OpcodeClass,
    pub dominant: Register,
}

/// Extract the features of one step and collect any partial-data warnings.
///
/// `position` is the step's place in the trace, used to tag warnings.
pub fn extract_features(step: &TraceStep, position: usize) -> (StepFeatures, Vec<PartialDataWarning>) {
    let mut warnings = Vec::new();

    if step.index != position as u64 {
        warnings.push(PartialDataWarning::IndexMismatch { position, found: step.index });
    }

    if is_unknown_instruction(&step.instruction_text) {
        warnings.push(PartialDataWarning::UnknownInstruction { position });
    }

    for (name, text) in &step.registers {
        let register = match name.parse::<Register>() {
            Ok(reg) => reg,
            Err(_) => {
                warnings.push(PartialDataWarning::UnrecognizedRegister {
                    position,
                    name: name.clone(),
                });
                continue;
            }
        };

        match RegisterValue::parse(text) {
            RegisterValue::Value(_) => {}
            RegisterValue::Unknown => warnings.push(PartialDataWarning::UnknownRegister {
                position,
                register: register.to_string(),
            }),
            RegisterValue::Malformed => warnings.push(PartialDataWarning::MalformedRegister {
                position,
                register: register.to_string(),
                value: text.clone(),
            }),
        }
    }

    let features = StepFeatures {
        opcode: extract_opcode(&step.instruction_text),
        dominant: determine_dominant_register(&step.registers),
    };

    (features, warnings)
}
