//! Note durations.
//!
//! Durations are fractions of a whole note. Cheap instructions get the
//! base duration, expensive ones twice that, everything else one and a half.

use crate::features::OpcodeClass;

/// Duration of a simple instruction (a quarter of a whole note).
pub const BASE_DURATION: f64 = 0.25;

/// Duration for an opcode class.
///
/// Only the opcode class decides the duration. The step's register snapshot
/// is not taken as a parameter since no tier depends on it.
pub fn compute_rhythm(opcode: &OpcodeClass) -> f64 {
    match opcode {
        OpcodeClass::Mov | OpcodeClass::Push | OpcodeClass::Pop => BASE_DURATION,
        OpcodeClass::Mul | OpcodeClass::Div | OpcodeClass::Call => BASE_DURATION * 2.0,
        _ => BASE_DURATION * 1.5,
    }
}

/// Readable name of a duration; unrecognised values read as "quarter".
pub fn duration_name(duration: f64) -> &'static str {
    const NAMES: [(f64, &str); 4] = [
        (0.125, "8th"),
        (0.25, "quarter"),
        (0.375, "dotted quarter"),
        (0.5, "half"),
    ];

    NAMES
        .iter()
        .find(|(d, _)| *d == duration)
        .map(|(_, name)| *name)
        .unwrap_or("quarter")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_tiers() {
        assert_eq!(compute_rhythm(&OpcodeClass::Mov), 0.25);
        assert_eq!(compute_rhythm(&OpcodeClass::Pop), 0.25);
        assert_eq!(compute_rhythm(&OpcodeClass::Call), 0.5);
        assert_eq!(compute_rhythm(&OpcodeClass::Div), 0.5);
        assert_eq!(compute_rhythm(&OpcodeClass::Cmp), 0.375);
        assert_eq!(compute_rhythm(&OpcodeClass::Other("nop".into())), 0.375);
    }

    #[test]
    fn test_duration_names() {
        assert_eq!(duration_name(0.125), "8th");
        assert_eq!(duration_name(0.25), "quarter");
        assert_eq!(duration_name(0.375), "dotted quarter");
        assert_eq!(duration_name(0.5), "half");
        assert_eq!(duration_name(1.0), "quarter");
        assert_eq!(duration_name(f64::NAN), "quarter");
    }
}
