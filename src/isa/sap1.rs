use crate::encoder::Isa;

/// SAP-1 instruction set (the "Simple-As-Possible" teaching machine).
/// Five mnemonics with 4-bit opcodes; operands are single hex nibbles
/// written `0H`..`FH`, plus `XH` as the don't-care label carried by
/// operand-less instructions.
pub struct Sap1Isa;

impl Sap1Isa {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Sap1Isa {
    fn default() -> Self {
        Self::new()
    }
}

const OPCODES: &[(&str, &str)] = &[
    ("LDA", "0000"),
    ("ADD", "0001"),
    ("SUB", "0010"),
    ("OUT", "1110"),
    ("HLT", "1111"),
];

const ADDRESSES: &[(&str, &str)] = &[
    ("0H", "0000"),
    ("1H", "0001"),
    ("2H", "0010"),
    ("3H", "0011"),
    ("4H", "0100"),
    ("5H", "0101"),
    ("6H", "0110"),
    ("7H", "0111"),
    ("8H", "1000"),
    ("9H", "1001"),
    ("AH", "1010"),
    ("BH", "1011"),
    ("CH", "1100"),
    ("DH", "1101"),
    ("EH", "1110"),
    ("FH", "1111"),
    ("XH", "XXXX"), // don't-care operand for OUT/HLT
];

impl Isa for Sap1Isa {
    fn opcode(&self, mnemonic: &str) -> Option<&'static str> {
        OPCODES.iter().find(|(m, _)| *m == mnemonic).map(|(_, bits)| *bits)
    }

    fn address(&self, label: &str) -> Option<&'static str> {
        ADDRESSES.iter().find(|(l, _)| *l == label).map(|(_, bits)| *bits)
    }
}
