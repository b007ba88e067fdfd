use super::itemset::{Item, Pair, Triple};
use super::storage::SupportTable;
use serde::Serialize;
use std::cmp::Ordering;

/// A directed association rule `lhs => rhs`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule<L, R> {
    pub lhs: L,
    pub rhs: R,
    /// Support of `lhs ∪ {rhs}`.
    pub support: usize,
    /// `support / support(lhs)`.
    pub confidence: f64,
}

/// Rule derived from a frequent pair: one item implies the other.
pub type PairRule<T> = Rule<T, T>;
/// Rule derived from a frequent triple: a pair implies the third item.
pub type TripleRule<T> = Rule<Pair<T>, T>;

impl<L: Ord, R: Ord> Rule<L, R> {
    fn new(lhs: L, rhs: R, support: usize, lhs_support: usize) -> Self {
        // Every lhs here is a subset of a frequent itemset, so it is frequent.
        debug_assert!(lhs_support > 0, "confidence denominator must be positive");
        Self {
            lhs,
            rhs,
            support,
            confidence: support as f64 / lhs_support as f64,
        }
    }

    /// Ranking order: confidence descending, then lhs ascending, then rhs
    /// ascending. This is a total order, so ties never depend on input order.
    pub fn ranking(&self, other: &Self) -> Ordering {
        other
            .confidence
            .total_cmp(&self.confidence)
            .then_with(|| self.lhs.cmp(&other.lhs))
            .then_with(|| self.rhs.cmp(&other.rhs))
    }
}

/// Both directional rules of every frequent pair, ranked, top `k`.
pub fn pair_rules<T: Item>(
    frequent_pairs: &[Pair<T>],
    pair_support: &SupportTable<Pair<T>>,
    item_support: &SupportTable<T>,
    k: usize,
) -> Vec<PairRule<T>> {
    let mut rules = Vec::with_capacity(frequent_pairs.len() * 2);
    for pair in frequent_pairs {
        let support = pair_support.get(pair);
        let [a, b] = pair.items();
        rules.push(Rule::new(a.clone(), b.clone(), support, item_support.get(a)));
        rules.push(Rule::new(b.clone(), a.clone(), support, item_support.get(b)));
    }
    top_k(rules, k)
}

/// The three pair-to-item rules of every frequent triple, ranked, top `k`.
pub fn triple_rules<T: Item>(
    frequent_triples: &[Triple<T>],
    triple_support: &SupportTable<Triple<T>>,
    pair_support: &SupportTable<Pair<T>>,
    k: usize,
) -> Vec<TripleRule<T>> {
    let mut rules = Vec::with_capacity(frequent_triples.len() * 3);
    for triple in frequent_triples {
        let support = triple_support.get(triple);
        for (lhs, rhs) in triple.splits() {
            let lhs_support = pair_support.get(&lhs);
            rules.push(Rule::new(lhs, rhs, support, lhs_support));
        }
    }
    top_k(rules, k)
}

/// The `k` best rules under [`Rule::ranking`], best first.
pub fn top_k<L: Ord, R: Ord>(mut rules: Vec<Rule<L, R>>, k: usize) -> Vec<Rule<L, R>> {
    if k == 0 {
        return Vec::new();
    }
    if rules.len() > k {
        rules.select_nth_unstable_by(k - 1, Rule::ranking);
        rules.truncate(k);
    }
    rules.sort_unstable_by(Rule::ranking);
    rules
}
