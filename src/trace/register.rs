//! The x86-64 general purpose registers captured in a trace.
//!
//! Only eight registers take part in the mapping:
//! - rax, rbx, rcx, rdx: the classic accumulator/base/count/data set
//! - rsi, rdi: source and destination index
//! - rbp, rsp: frame and stack pointer
//!
//! Every "first seen wins" rule in the mapper walks [`Register::ALL`], so the
//! order of that array is part of the output contract.

use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Sentinel written by capture front ends when a value could not be read.
pub const UNKNOWN: &str = "unknown";

/// One of the eight registers the mapper understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Register {
    Rax,
    Rbx,
    Rcx,
    Rdx,
    Rsi,
    Rdi,
    Rbp,
    Rsp,
}

impl Register {
    /// Canonical enumeration order used to break ties.
    pub const ALL: [Register; 8] = [
        Register::Rax,
        Register::Rbx,
        Register::Rcx,
        Register::Rdx,
        Register::Rsi,
        Register::Rdi,
        Register::Rbp,
        Register::Rsp,
    ];

    /// Position in [`Register::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase register name as it appears in trace documents.
    pub const fn name(self) -> &'static str {
        match self {
            Register::Rax => "rax",
            Register::Rbx => "rbx",
            Register::Rcx => "rcx",
            Register::Rdx => "rdx",
            Register::Rsi => "rsi",
            Register::Rdi => "rdi",
            Register::Rbp => "rbp",
            Register::Rsp => "rsp",
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Register {
    type Err = UnrecognizedRegister;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Register::ALL
            .iter()
            .copied()
            .find(|reg| reg.name() == s)
            .ok_or_else(|| UnrecognizedRegister(s.to_string()))
    }
}

/// A register name outside the fixed set (e.g. `rip`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized register name: {0}")]
pub struct UnrecognizedRegister(pub String);

/// Result of parsing one captured register value.
///
/// Parsing never fails outright: the sentinel and garbage both become
/// variants the caller can skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterValue {
    /// A successfully parsed unsigned value.
    Value(u64),
    /// The capture front end wrote the `"unknown"` sentinel.
    Unknown,
    /// Not a hexadecimal number (or wider than 64 bits).
    Malformed,
}

impl RegisterValue {
    /// Parse a hexadecimal register value, with or without a `0x` prefix.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.eq_ignore_ascii_case(UNKNOWN) {
            return RegisterValue::Unknown;
        }

        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        // from_str_radix accepts a leading '+', which is not hex
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return RegisterValue::Malformed;
        }

        match u64::from_str_radix(digits, 16) {
            Ok(v) => RegisterValue::Value(v),
            Err(_) => RegisterValue::Malformed,
        }
    }

    /// The parsed value, if any.
    #[inline]
    pub fn value(self) -> Option<u64> {
        match self {
            RegisterValue::Value(v) => Some(v),
            _ => None,
        }
    }
}
