use tracing::debug;

use crate::encoder::{Isa, MachineWord};

#[derive(thiserror::Error, Debug)]
pub enum AsmError {
    #[error("Invalid instruction at line {index}: {line:?}")]
    InvalidInstruction { index: usize, line: String },
}

/// Translates raw SAP-1 source lines into 8-bit machine words, one per
/// line, preserving input order. Translation is eager and atomic: either
/// every line assembles or the constructor returns the first failure and
/// no words are produced.
#[derive(Debug)]
pub struct Assembler {
    words: Vec<MachineWord>,
}

impl Assembler {
    pub fn new<T: Isa, S: AsRef<str>>(isa: &T, source: &[S]) -> Result<Self, AsmError> {
        let mut words = Vec::with_capacity(source.len());
        for (index, raw) in source.iter().enumerate() {
            let raw = raw.as_ref();
            let word = encode_line(isa, raw).ok_or_else(|| AsmError::InvalidInstruction {
                index,
                line: raw.trim().to_string(),
            })?;
            debug!(index, word = %word, "encoded line");
            words.push(word);
        }
        Ok(Self { words })
    }

    pub fn words(&self) -> &[MachineWord] {
        &self.words
    }

    pub fn into_words(self) -> Vec<MachineWord> {
        self.words
    }
}

/// Encode one source line. The first whitespace-separated token is the
/// mnemonic, the second (if present) the operand label; a missing operand
/// defaults to the don't-care label `XH`. Tokens past the second are
/// ignored. Matching is case-insensitive via explicit uppercasing; the
/// tables hold only uppercase keys.
fn encode_line<T: Isa>(isa: &T, raw: &str) -> Option<MachineWord> {
    let mut tokens = raw.split_whitespace();
    let mnemonic = tokens.next()?.to_ascii_uppercase();
    let label = tokens.next().unwrap_or("XH").to_ascii_uppercase();
    let opcode = isa.opcode(&mnemonic)?;
    let address = isa.address(&label)?;
    Some(MachineWord::new(opcode, address))
}
