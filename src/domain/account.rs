use serde::Serialize;
use std::collections::HashMap;

/// Final state of a single account as reported to callers.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct BalanceRecord {
    pub account: String,
    pub funds: u64,
}

/// The account balance table.
///
/// Maps account ids to integer funds. Accounts that were never written
/// read as 0 without being materialized. This type is single-threaded on
/// purpose; the infrastructure adapters decide how access is serialized.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BalanceTable {
    balances: HashMap<String, u64>,
}

impl BalanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current funds for `account`; 0 if it was never set.
    pub fn funds(&self, account: &str) -> u64 {
        self.balances.get(account).copied().unwrap_or(0)
    }

    /// Unconditionally overwrites the funds of `account`.
    pub fn set_funds(&mut self, account: &str, amount: u64) {
        self.balances.insert(account.to_owned(), amount);
    }

    /// Adds `amount` to `account`, creating the entry if needed.
    /// Returns false and leaves the table untouched if the credit would
    /// overflow.
    pub fn credit(&mut self, account: &str, amount: u64) -> bool {
        match self.funds(account).checked_add(amount) {
            Some(total) => {
                self.balances.insert(account.to_owned(), total);
                true
            }
            None => false,
        }
    }

    /// Removes `amount` from `account` if its funds cover it.
    pub fn debit(&mut self, account: &str, amount: u64) -> bool {
        let current = self.funds(account);
        if current < amount {
            return false;
        }
        self.balances.insert(account.to_owned(), current - amount);
        true
    }

    /// Moves `amount` from `from` to `to` iff `from` covers it (equality
    /// counts as covered). On failure both balances stay unchanged.
    ///
    /// Callers that hold exclusive access to the table get an atomic
    /// check-then-move; there is no window between the sufficiency check
    /// and the two writes.
    pub fn transfer_funds(&mut self, amount: u64, from: &str, to: &str) -> bool {
        let source = self.funds(from);
        if source < amount {
            return false;
        }
        // A self-transfer is a net-zero move.
        if from == to {
            return true;
        }
        let Some(dest) = self.funds(to).checked_add(amount) else {
            return false;
        };
        self.balances.insert(from.to_owned(), source - amount);
        self.balances.insert(to.to_owned(), dest);
        true
    }

    /// All materialized accounts, sorted by id for stable output.
    pub fn records(&self) -> Vec<BalanceRecord> {
        let mut records: Vec<BalanceRecord> = self
            .balances
            .iter()
            .map(|(account, funds)| BalanceRecord {
                account: account.clone(),
                funds: *funds,
            })
            .collect();
        records.sort_by(|a, b| a.account.cmp(&b.account));
        records
    }
}
