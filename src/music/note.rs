//! Opcode class to pitch.

use crate::features::OpcodeClass;
use serde::{Serialize, Deserialize};
use std::fmt;

/// A pitch in scientific notation, C4 through C6 on the white keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Note {
    C4,
    D4,
    E4,
    F4,
    G4,
    A4,
    B4,
    C5,
    D5,
    E5,
    F5,
    G5,
    A5,
    B5,
    C6,
}

impl Note {
    /// Pitch for opcodes outside the table.
    pub const DEFAULT: Note = Note::C4;

    pub const fn as_str(self) -> &'static str {
        match self {
            Note::C4 => "C4",
            Note::D4 => "D4",
            Note::E4 => "E4",
            Note::F4 => "F4",
            Note::G4 => "G4",
            Note::A4 => "A4",
            Note::B4 => "B4",
            Note::C5 => "C5",
            Note::D5 => "D5",
            Note::E5 => "E5",
            Note::F5 => "F5",
            Note::G5 => "G5",
            Note::A5 => "A5",
            Note::B5 => "B5",
            Note::C6 => "C6",
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map an opcode class to its note. Unknown classes play C4.
pub fn map_opcode_to_note(opcode: &OpcodeClass) -> Note {
    match opcode {
        OpcodeClass::Mov => Note::C4,
        OpcodeClass::Add => Note::D4,
        OpcodeClass::Sub => Note::E4,
        OpcodeClass::Mul => Note::F4,
        OpcodeClass::Div => Note::G4,
        OpcodeClass::Cmp => Note::A4,
        OpcodeClass::Jmp => Note::B4,
        OpcodeClass::Call => Note::C5,
        OpcodeClass::Ret => Note::D5,
        OpcodeClass::Push => Note::E5,
        OpcodeClass::Pop => Note::F5,
        OpcodeClass::Lea => Note::G5,
        OpcodeClass::Xor => Note::A5,
        OpcodeClass::And => Note::B5,
        OpcodeClass::Or => Note::C6,
        OpcodeClass::Other(_) => Note::DEFAULT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_families_ascend_through_two_octaves() {
        let notes: Vec<Note> = OpcodeClass::FAMILIES.iter().map(map_opcode_to_note).collect();
        assert_eq!(notes.first(), Some(&Note::C4));
        assert_eq!(notes.last(), Some(&Note::C6));

        // every family gets its own pitch
        let distinct: HashSet<_> = notes.iter().collect();
        assert_eq!(distinct.len(), OpcodeClass::FAMILIES.len());
    }

    #[test]
    fn test_unknown_opcode_plays_c4() {
        assert_eq!(map_opcode_to_note(&OpcodeClass::Other("nop".into())), Note::C4);
        assert_eq!(map_opcode_to_note(&OpcodeClass::Other("vpxor".into())), Note::C4);
    }

    #[test]
    fn test_serializes_as_name() {
        assert_eq!(serde_json::to_string(&Note::G5).unwrap(), "\"G5\"");
    }
}
