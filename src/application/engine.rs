use crate::domain::account::BalanceRecord;
use crate::domain::instruction::{Instruction, InstructionKind};
use crate::domain::ports::WireTransfersBox;
use crate::error::{BankError, Result};

/// Applies instruction batches against a bank.
///
/// `TransferEngine` owns the injected `WireTransfers` implementation
/// and ensures sequential consistency by awaiting each operation before
/// the next instruction is applied.
pub struct TransferEngine {
    bank: WireTransfersBox,
}

impl TransferEngine {
    /// Creates a new `TransferEngine` on top of the given bank.
    pub fn new(bank: WireTransfersBox) -> Self {
        Self { bank }
    }

    /// Applies a single instruction.
    ///
    /// A rejected transfer (insufficient funds) is a normal outcome and
    /// completes with `Ok(())`; only structurally invalid instructions
    /// error out.
    pub async fn process_instruction(&self, instruction: Instruction) -> Result<()> {
        match instruction.op {
            InstructionKind::Set => {
                let amount = instruction.amount.ok_or_else(|| {
                    BankError::InstructionError("set requires an amount".to_string())
                })?;
                self.bank.set_funds(&instruction.account, amount).await?;
            }
            InstructionKind::Transfer => {
                let amount = instruction.amount.ok_or_else(|| {
                    BankError::InstructionError("transfer requires an amount".to_string())
                })?;
                let to = instruction.to.ok_or_else(|| {
                    BankError::InstructionError("transfer requires a counterparty".to_string())
                })?;
                self.bank
                    .transfer_funds(amount, &instruction.account, &to)
                    .await?;
            }
        }
        Ok(())
    }

    /// Consumes the engine and returns the final state of all accounts.
    pub async fn into_results(self) -> Result<Vec<BalanceRecord>> {
        self.bank.balances().await
    }
}
