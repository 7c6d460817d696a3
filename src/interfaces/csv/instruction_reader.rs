use crate::domain::instruction::Instruction;
use crate::error::{BankError, Result};
use std::io::Read;

/// Reads ledger instructions from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over
/// `Result<Instruction>`. It handles whitespace trimming and flexible
/// record lengths automatically.
pub struct InstructionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> InstructionReader<R> {
    /// Creates a new `InstructionReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes instructions,
    /// so large batches stream without being loaded into memory.
    pub fn instructions(self) -> impl Iterator<Item = Result<Instruction>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(BankError::from))
    }
}
