use serde::{Deserialize, Serialize};
use std::fmt;

/// One assembled SAP-1 instruction: 4-bit opcode followed by the 4-bit
/// operand field. Always exactly 8 characters over `{0,1,X}`; `X` appears
/// only in the operand nibble of operand-less instructions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineWord(String);

impl MachineWord {
    pub(crate) fn new(opcode: &str, address: &str) -> Self {
        Self(format!("{opcode}{address}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MachineWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lookup authority for an instruction set: mnemonic to opcode bits and
/// address label to operand bits. Both expect pre-normalized tokens
/// (uppercase, no surrounding whitespace); absence means "not a valid
/// token", never an error.
pub trait Isa {
    fn opcode(&self, mnemonic: &str) -> Option<&'static str>;
    fn address(&self, label: &str) -> Option<&'static str>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_serializes_as_plain_string() {
        let w = MachineWord::new("1110", "XXXX");
        assert_eq!(w.to_string(), "1110XXXX");
        assert_eq!(serde_json::to_string(&w).unwrap(), "\"1110XXXX\"");
    }
}
