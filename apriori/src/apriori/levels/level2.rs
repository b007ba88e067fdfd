use crate::apriori::combinations::for_each_combination;
use crate::apriori::counting::count_supports;
use crate::apriori::itemset::{Item, Pair};
use crate::apriori::storage::SupportTable;
use crate::config::MiningConfig;
use crate::transaction::Transaction;
use std::collections::HashSet;

/// Level 2: pair supports and the frequent pairs.
#[derive(Debug, Clone)]
pub struct Level2<T> {
    /// Number of candidate pairs generated from L1.
    pub candidates: usize,
    /// Support of every candidate pair that occurred at least once.
    pub pair_support: SupportTable<Pair<T>>,
    /// Pairs with support >= `min_support`, ascending.
    pub frequent: Vec<Pair<T>>,
}

impl<T: Item> Level2<T> {
    fn empty() -> Self {
        Self {
            candidates: 0,
            pair_support: SupportTable::new(),
            frequent: Vec::new(),
        }
    }
}

/// C2: every pair `(a, b)` with `a < b` drawn from the sorted L1.
pub fn candidate_pairs<T: Item>(frequent_items: &[T]) -> HashSet<Pair<T>> {
    let mut candidates = HashSet::new();
    for_each_combination(frequent_items, 2, |pair| {
        candidates.insert(Pair::from_combination(pair));
    });
    candidates
}

pub fn count_pairs<T>(
    transactions: &[Transaction<T>],
    frequent_items: &[T],
    config: &MiningConfig,
) -> Level2<T>
where
    T: Item + Send + Sync,
{
    if frequent_items.len() < 2 {
        tracing::debug!(frequent_items = frequent_items.len(), "level 2 skipped");
        return Level2::empty();
    }

    let candidates = candidate_pairs(frequent_items);
    let pair_support = count_supports(transactions, config.parallel(), |transaction, table| {
        // Transactions are sorted, so the restriction stays sorted.
        let restricted: Vec<&T> = transaction
            .items()
            .iter()
            .filter(|item| frequent_items.binary_search(item).is_ok())
            .collect();
        for_each_combination(&restricted, 2, |combination| {
            let pair = Pair::from_sorted([T::clone(combination[0]), T::clone(combination[1])]);
            if candidates.contains(&pair) {
                table.increment(pair);
            }
        });
    });
    let frequent = pair_support.frequent(config.min_support());

    tracing::debug!(
        candidates = candidates.len(),
        counted = pair_support.len(),
        frequent = frequent.len(),
        "level 2 counted"
    );
    Level2 {
        candidates: candidates.len(),
        pair_support,
        frequent,
    }
}
