use crate::domain::account::{BalanceRecord, BalanceTable};
use crate::domain::ports::WireTransfers;
use crate::error::Result;
use async_trait::async_trait;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Default shard count for `ShardedBank`.
pub const DEFAULT_SHARDS: usize = 16;

/// A bank that splits the balance table across independently locked
/// shards, so unrelated accounts do not contend on one lock.
///
/// An account always routes to the same shard. Cross-shard transfers
/// hold both shard guards for the whole check-debit-credit sequence;
/// guards are acquired in ascending shard-index order, which rules out
/// deadlock between concurrent transfers in opposite directions.
#[derive(Clone)]
pub struct ShardedBank {
    shards: Arc<Vec<RwLock<BalanceTable>>>,
}

impl ShardedBank {
    pub fn new() -> Self {
        Self::with_shards(DEFAULT_SHARDS)
    }

    pub fn with_shards(count: usize) -> Self {
        let count = count.max(1);
        let shards = (0..count).map(|_| RwLock::new(BalanceTable::new())).collect();
        Self {
            shards: Arc::new(shards),
        }
    }

    fn shard_index(&self, account: &str) -> usize {
        let mut hasher = DefaultHasher::new();
        account.hash(&mut hasher);
        (hasher.finish() as usize) % self.shards.len()
    }
}

impl Default for ShardedBank {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WireTransfers for ShardedBank {
    async fn funds(&self, account: &str) -> Result<u64> {
        let shard = self.shards[self.shard_index(account)].read().await;
        Ok(shard.funds(account))
    }

    async fn set_funds(&self, account: &str, amount: u64) -> Result<()> {
        let mut shard = self.shards[self.shard_index(account)].write().await;
        shard.set_funds(account, amount);
        Ok(())
    }

    async fn transfer_funds(&self, amount: u64, from: &str, to: &str) -> Result<bool> {
        let src = self.shard_index(from);
        let dst = self.shard_index(to);

        if src == dst {
            // Covers self-transfers too: same account, same shard.
            return Ok(self.shards[src].write().await.transfer_funds(amount, from, to));
        }

        // Ascending shard-index order; both guards stay held until the
        // credit lands.
        let (mut source, mut dest) = if src < dst {
            let source = self.shards[src].write().await;
            let dest = self.shards[dst].write().await;
            (source, dest)
        } else {
            let dest = self.shards[dst].write().await;
            let source = self.shards[src].write().await;
            (source, dest)
        };

        if source.funds(from) < amount || dest.funds(to).checked_add(amount).is_none() {
            return Ok(false);
        }
        source.debit(from, amount);
        dest.credit(to, amount);
        Ok(true)
    }

    async fn balances(&self) -> Result<Vec<BalanceRecord>> {
        let mut records = Vec::new();
        for shard in self.shards.iter() {
            records.extend(shard.read().await.records());
        }
        records.sort_by(|a, b| a.account.cmp(&b.account));
        Ok(records)
    }
}
