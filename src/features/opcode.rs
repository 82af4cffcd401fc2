//! Opcode classification.
//!
//! A raw instruction like `movq %rsp,%rbp` is reduced to its mnemonic family
//! (`mov`). Width and condition suffixes are absorbed by prefix matching
//! against a fixed list of fifteen families; anything else keeps its
//! lowercased mnemonic.

use crate::trace::UNKNOWN;
use std::fmt;

/// Canonical mnemonic family of an instruction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OpcodeClass {
    // ==================== Data movement ====================
    Mov,
    Push,
    Pop,
    Lea,

    // ==================== Arithmetic / logic ====================
    Add,
    Sub,
    Mul,
    Div,
    Cmp,
    Xor,
    And,
    Or,

    // ==================== Control flow ====================
    Jmp,
    Call,
    Ret,

    /// Any mnemonic outside the fixed families, lowercased.
    Other(String),
}

impl OpcodeClass {
    /// The fixed families in matching order. The first prefix hit wins.
    pub const FAMILIES: [OpcodeClass; 15] = [
        OpcodeClass::Mov,
        OpcodeClass::Add,
        OpcodeClass::Sub,
        OpcodeClass::Mul,
        OpcodeClass::Div,
        OpcodeClass::Cmp,
        OpcodeClass::Jmp,
        OpcodeClass::Call,
        OpcodeClass::Ret,
        OpcodeClass::Push,
        OpcodeClass::Pop,
        OpcodeClass::Lea,
        OpcodeClass::Xor,
        OpcodeClass::And,
        OpcodeClass::Or,
    ];

    /// Class used when the instruction text is empty or the sentinel.
    pub const DEFAULT: OpcodeClass = OpcodeClass::Mov;

    /// Mnemonic text of the class.
    pub fn as_str(&self) -> &str {
        match self {
            OpcodeClass::Mov => "mov",
            OpcodeClass::Add => "add",
            OpcodeClass::Sub => "sub",
            OpcodeClass::Mul => "mul",
            OpcodeClass::Div => "div",
            OpcodeClass::Cmp => "cmp",
            OpcodeClass::Jmp => "jmp",
            OpcodeClass::Call => "call",
            OpcodeClass::Ret => "ret",
            OpcodeClass::Push => "push",
            OpcodeClass::Pop => "pop",
            OpcodeClass::Lea => "lea",
            OpcodeClass::Xor => "xor",
            OpcodeClass::And => "and",
            OpcodeClass::Or => "or",
            OpcodeClass::Other(token) => token,
        }
    }
}

impl fmt::Display for OpcodeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check whether instruction text is missing (empty or the sentinel).
pub fn is_unknown_instruction(instruction_text: &str) -> bool {
    let trimmed = instruction_text.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case(UNKNOWN)
}

/// Extract the opcode class from a free-form instruction string.
///
/// Never fails: empty or sentinel input yields [`OpcodeClass::DEFAULT`].
pub fn extract_opcode(instruction_text: &str) -> OpcodeClass {
    if is_unknown_instruction(instruction_text) {
        return OpcodeClass::DEFAULT;
    }

    let token = match instruction_text.split_whitespace().next() {
        Some(t) => t.to_lowercase(),
        None => return OpcodeClass::DEFAULT,
    };

    OpcodeClass::FAMILIES
        .iter()
        .find(|family| token.starts_with(family.as_str()))
        .cloned()
        .unwrap_or(OpcodeClass::Other(token))
}
