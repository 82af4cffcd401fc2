//! Trace-global key.
//!
//! Every parsed register value in the trace is summed per register. The
//! register with the largest total picks the key. Sums are plain addition,
//! so partial accumulators over disjoint chunks of a trace can be merged in
//! any order and give the same answer.

use crate::trace::{Register, TraceDocument, TraceStep};
use serde::{Serialize, Deserialize};
use std::fmt;

/// A major key, named by its tonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Key {
    /// Key of an empty or all-sentinel trace.
    pub const DEFAULT: Key = Key::C;

    pub const fn as_str(self) -> &'static str {
        match self {
            Key::C => "C",
            Key::D => "D",
            Key::E => "E",
            Key::F => "F",
            Key::G => "G",
            Key::A => "A",
            Key::B => "B",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a register to a key. rsp wraps around to C.
pub fn map_register_to_key(register: Register) -> Key {
    match register {
        Register::Rax => Key::C,
        Register::Rbx => Key::D,
        Register::Rcx => Key::E,
        Register::Rdx => Key::F,
        Register::Rsi => Key::G,
        Register::Rdi => Key::A,
        Register::Rbp => Key::B,
        Register::Rsp => Key::C,
    }
}

/// Running per-register sums of parsed values.
///
/// `None` means the register never had a parseable value, which is
/// different from a total of zero: a register that only ever held `0x0`
/// can still be dominant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyAccumulator {
    sums: [Option<u128>; 8],
}

impl KeyAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one step's parsed register values.
    pub fn add_step(&mut self, step: &TraceStep) {
        for (reg, value) in step.known_registers() {
            if let Some(v) = value.value() {
                let slot = &mut self.sums[reg.index()];
                *slot = Some(slot.unwrap_or(0).saturating_add(v as u128));
            }
        }
    }

    /// Combine two accumulators built over different steps.
    pub fn merge(mut self, other: KeyAccumulator) -> KeyAccumulator {
        for (mine, theirs) in self.sums.iter_mut().zip(other.sums) {
            *mine = match (*mine, theirs) {
                (Some(a), Some(b)) => Some(a.saturating_add(b)),
                (a, b) => a.or(b),
            };
        }
        self
    }

    /// Accumulated total for one register, if it ever parsed.
    pub fn total(&self, register: Register) -> Option<u128> {
        self.sums[register.index()]
    }

    /// Register with the strictly greatest total, first in canonical order on ties.
    pub fn dominant(&self) -> Option<Register> {
        let mut best: Option<(Register, u128)> = None;
        for reg in Register::ALL {
            if let Some(total) = self.sums[reg.index()] {
                match best {
                    Some((_, max)) if total <= max => {}
                    _ => best = Some((reg, total)),
                }
            }
        }
        best.map(|(reg, _)| reg)
    }

    /// Key chosen by the dominant register, or C if nothing parsed.
    pub fn key(&self) -> Key {
        self.dominant().map(map_register_to_key).unwrap_or(Key::DEFAULT)
    }
}

/// Derive the key of a whole trace.
pub fn compute_key(trace: &TraceDocument) -> Key {
    let mut acc = KeyAccumulator::new();
    for step in &trace.steps {
        acc.add_step(step);
    }
    acc.key()
}
