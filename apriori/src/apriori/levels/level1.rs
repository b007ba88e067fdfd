use crate::apriori::counting::count_supports;
use crate::apriori::storage::SupportTable;
use crate::apriori::Item;
use crate::config::MiningConfig;
use crate::transaction::Transaction;

/// Level 1: single-item supports and the frequent items.
#[derive(Debug, Clone)]
pub struct Level1<T> {
    /// Support of every item seen, frequent or not.
    pub item_support: SupportTable<T>,
    /// Items with support >= `min_support`, ascending.
    pub frequent: Vec<T>,
}

pub fn count_items<T>(transactions: &[Transaction<T>], config: &MiningConfig) -> Level1<T>
where
    T: Item + Send + Sync,
{
    let item_support = count_supports(transactions, config.parallel(), |transaction, table| {
        for item in transaction.items() {
            table.increment(item.clone());
        }
    });
    let frequent = item_support.frequent(config.min_support());

    tracing::debug!(
        counted = item_support.len(),
        frequent = frequent.len(),
        "level 1 counted"
    );
    Level1 { item_support, frequent }
}
