use super::storage::SupportTable;
use crate::transaction::Transaction;
use rayon::prelude::*;
use std::hash::Hash;

/// Runs one counting pass over `transactions`.
///
/// `visit` adds the keys one transaction supports to a partial table. In
/// parallel mode rayon splits the transactions into shards, each shard folds
/// into its own table and the partial tables are merged by sum. Both modes
/// yield the same table.
pub fn count_supports<T, K, F>(
    transactions: &[Transaction<T>],
    parallel: bool,
    visit: F,
) -> SupportTable<K>
where
    T: Sync,
    K: Hash + Eq + Send,
    F: Fn(&Transaction<T>, &mut SupportTable<K>) + Sync,
{
    if parallel {
        transactions
            .par_iter()
            .fold(SupportTable::new, |mut table, transaction| {
                visit(transaction, &mut table);
                table
            })
            .reduce(SupportTable::new, SupportTable::merge)
    } else {
        let mut table = SupportTable::new();
        for transaction in transactions {
            visit(transaction, &mut table);
        }
        table
    }
}
