//! Dominant register to instrument.

use crate::trace::Register;
use serde::{Serialize, Deserialize};
use std::fmt;

/// The eight voices, one per tracked register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Instrument {
    Bass,
    Drums,
    Flute,
    Guitar,
    Piano,
    Synth,
    Trumpet,
    Violin,
}

impl Instrument {
    /// Instrument used when a register cannot be resolved.
    pub const DEFAULT: Instrument = Instrument::Piano;

    pub const fn as_str(self) -> &'static str {
        match self {
            Instrument::Bass => "bass",
            Instrument::Drums => "drums",
            Instrument::Flute => "flute",
            Instrument::Guitar => "guitar",
            Instrument::Piano => "piano",
            Instrument::Synth => "synth",
            Instrument::Trumpet => "trumpet",
            Instrument::Violin => "violin",
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a register to its instrument.
pub fn map_register_to_instrument(register: Register) -> Instrument {
    match register {
        Register::Rax => Instrument::Piano,
        Register::Rbx => Instrument::Guitar,
        Register::Rcx => Instrument::Violin,
        Register::Rdx => Instrument::Flute,
        Register::Rsi => Instrument::Trumpet,
        Register::Rdi => Instrument::Drums,
        Register::Rbp => Instrument::Bass,
        Register::Rsp => Instrument::Synth,
    }
}

/// Map a register by name. Names outside the tracked set play piano.
pub fn map_register_name_to_instrument(name: &str) -> Instrument {
    name.parse::<Register>()
        .map(map_register_to_instrument)
        .unwrap_or(Instrument::DEFAULT)
}
