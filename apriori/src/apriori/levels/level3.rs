use crate::apriori::combinations::for_each_combination;
use crate::apriori::counting::count_supports;
use crate::apriori::itemset::{Item, Pair, Triple};
use crate::apriori::storage::SupportTable;
use crate::config::MiningConfig;
use crate::transaction::Transaction;
use std::collections::{BTreeMap, HashSet};

/// Level 3: triple supports and the frequent triples.
#[derive(Debug, Clone)]
pub struct Level3<T> {
    /// Number of candidate triples that survived the subset prune.
    pub candidates: usize,
    pub triple_support: SupportTable<Triple<T>>,
    /// Triples with support >= `min_support`, ascending.
    pub frequent: Vec<Triple<T>>,
}

/// Join and prune: candidate triples from the frequent pairs.
///
/// Pairs sharing a first item `a` are joined into `(a, b, c)` for every
/// `b < c` among their second items. A candidate is kept only when all three
/// of its 2-subsets are frequent pairs.
pub fn candidate_triples<T: Item>(frequent_pairs: &[Pair<T>]) -> HashSet<Triple<T>> {
    let frequent: HashSet<&Pair<T>> = frequent_pairs.iter().collect();

    let mut by_first: BTreeMap<&T, Vec<&T>> = BTreeMap::new();
    for pair in frequent_pairs {
        by_first.entry(pair.first()).or_default().push(pair.second());
    }

    let mut candidates = HashSet::new();
    for (a, mut seconds) in by_first {
        seconds.sort_unstable();
        seconds.dedup();
        for_each_combination(&seconds, 2, |bc| {
            let (b, c) = (bc[0], bc[1]);
            // a < b < c holds because every pair is canonical.
            let triple = Triple::from_sorted([a.clone(), T::clone(b), T::clone(c)]);
            let all_subsets_frequent = triple
                .splits()
                .iter()
                .all(|(subset, _)| frequent.contains(subset));
            if all_subsets_frequent {
                candidates.insert(triple);
            }
        });
    }
    candidates
}

pub fn count_triples<T>(
    transactions: &[Transaction<T>],
    frequent_pairs: &[Pair<T>],
    config: &MiningConfig,
) -> Level3<T>
where
    T: Item + Send + Sync,
{
    let candidates = candidate_triples(frequent_pairs);
    if candidates.is_empty() {
        tracing::debug!("level 3 scan skipped: no candidate triples");
        return Level3 {
            candidates: 0,
            triple_support: SupportTable::new(),
            frequent: Vec::new(),
        };
    }

    // A triple containing an item outside every frequent pair cannot be a
    // candidate, so such items are dropped before enumerating.
    let paired: HashSet<&T> = frequent_pairs.iter().flat_map(|pair| pair.items()).collect();

    let triple_support = count_supports(transactions, config.parallel(), |transaction, table| {
        let restricted: Vec<&T> = transaction
            .items()
            .iter()
            .filter(|item| paired.contains(item))
            .collect();
        for_each_combination(&restricted, 3, |xyz| {
            let triple =
                Triple::from_sorted([T::clone(xyz[0]), T::clone(xyz[1]), T::clone(xyz[2])]);
            if candidates.contains(&triple) {
                table.increment(triple);
            }
        });
    });
    let frequent = triple_support.frequent(config.min_support());

    tracing::debug!(
        candidates = candidates.len(),
        counted = triple_support.len(),
        frequent = frequent.len(),
        "level 3 counted"
    );
    Level3 {
        candidates: candidates.len(),
        triple_support,
        frequent,
    }
}
