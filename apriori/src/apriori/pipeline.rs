use super::itemset::Item;
use super::levels::{count_items, count_pairs, count_triples, Level1, Level2, Level3};
use super::rules::{pair_rules, triple_rules, PairRule, TripleRule};
use crate::config::MiningConfig;
use crate::transaction::Transaction;
use serde::Serialize;

/// Everything one mining run produces. Owned by the caller; nothing is
/// retained between runs.
#[derive(Debug, Clone)]
pub struct MiningOutcome<T> {
    pub transactions: usize,
    pub level1: Level1<T>,
    pub level2: Level2<T>,
    pub level3: Level3<T>,
    /// Top-k rules from frequent pairs, best first.
    pub pair_rules: Vec<PairRule<T>>,
    /// Top-k rules from frequent triples, best first.
    pub triple_rules: Vec<TripleRule<T>>,
}

/// Candidate, counted and frequent sizes of one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelStats {
    pub itemset_size: usize,
    pub candidates: usize,
    pub counted: usize,
    pub frequent: usize,
}

impl<T> MiningOutcome<T> {
    pub fn stats(&self) -> [LevelStats; 3] {
        [
            LevelStats {
                itemset_size: 1,
                candidates: self.level1.item_support.len(),
                counted: self.level1.item_support.len(),
                frequent: self.level1.frequent.len(),
            },
            LevelStats {
                itemset_size: 2,
                candidates: self.level2.candidates,
                counted: self.level2.pair_support.len(),
                frequent: self.level2.frequent.len(),
            },
            LevelStats {
                itemset_size: 3,
                candidates: self.level3.candidates,
                counted: self.level3.triple_support.len(),
                frequent: self.level3.frequent.len(),
            },
        ]
    }
}

/// Mines frequent items, pairs and triples, then ranks rules from the pairs
/// and triples.
///
/// Each level is computed in full before the next one reads it. Empty
/// input gives empty levels and empty rule lists.
pub fn mine<T>(transactions: &[Transaction<T>], config: &MiningConfig) -> MiningOutcome<T>
where
    T: Item + Send + Sync,
{
    let level1 = count_items(transactions, config);
    let level2 = count_pairs(transactions, &level1.frequent, config);
    let level3 = count_triples(transactions, &level2.frequent, config);

    let pair_rules = pair_rules(
        &level2.frequent,
        &level2.pair_support,
        &level1.item_support,
        config.top_k(),
    );
    let triple_rules = triple_rules(
        &level3.frequent,
        &level3.triple_support,
        &level2.pair_support,
        config.top_k(),
    );

    tracing::info!(
        transactions = transactions.len(),
        min_support = config.min_support(),
        frequent_items = level1.frequent.len(),
        frequent_pairs = level2.frequent.len(),
        frequent_triples = level3.frequent.len(),
        pair_rules = pair_rules.len(),
        triple_rules = triple_rules.len(),
        "apriori run complete"
    );

    MiningOutcome {
        transactions: transactions.len(),
        level1,
        level2,
        level3,
        pair_rules,
        triple_rules,
    }
}
