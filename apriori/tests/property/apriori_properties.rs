use apriori_rules::{mine, MiningConfig, MiningOutcome, Pair, Transaction, Triple};
use proptest::prelude::*;

const UNIVERSE: u8 = 8;

fn transactions_strategy() -> impl Strategy<Value = Vec<Transaction<u8>>> {
    prop::collection::vec(prop::collection::vec(0..UNIVERSE, 0..6), 0..40)
        .prop_map(|rows| rows.into_iter().map(Transaction::new).collect())
}

fn brute_support(transactions: &[Transaction<u8>], itemset: &[u8]) -> usize {
    transactions.iter().filter(|t| t.contains_all(itemset)).count()
}

fn run(transactions: &[Transaction<u8>], min_support: usize, top_k: usize) -> MiningOutcome<u8> {
    let config = MiningConfig::new(min_support, top_k).unwrap();
    mine(transactions, &config)
}

// ── Anti-monotonicity ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn subsets_of_frequent_itemsets_are_frequent(
        transactions in transactions_strategy(),
        min_support in 1usize..5,
    ) {
        let outcome = run(&transactions, min_support, 5);
        for pair in &outcome.level2.frequent {
            for item in pair.items() {
                prop_assert!(outcome.level1.frequent.contains(item));
            }
        }
        for triple in &outcome.level3.frequent {
            for (subset, _) in triple.splits() {
                prop_assert!(
                    outcome.level2.frequent.contains(&subset),
                    "{:?} frequent but {:?} is not", triple, subset
                );
            }
        }
    }
}

// ── Canonical form ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn itemsets_are_strictly_increasing(
        transactions in transactions_strategy(),
        min_support in 1usize..5,
    ) {
        let outcome = run(&transactions, min_support, 5);
        prop_assert!(outcome.level1.frequent.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(outcome.level2.frequent.iter().all(|p| p.items()[0] < p.items()[1]));
        prop_assert!(outcome
            .level3
            .frequent
            .iter()
            .all(|t| t.items().windows(2).all(|w| w[0] < w[1])));
    }
}

// ── Support consistency against a brute-force scan ───────────────────────

proptest! {
    #[test]
    fn counted_supports_match_brute_force(
        transactions in transactions_strategy(),
        min_support in 1usize..5,
    ) {
        let outcome = run(&transactions, min_support, 5);
        for (item, support) in outcome.level1.item_support.iter() {
            prop_assert_eq!(support, brute_support(&transactions, &[*item]));
        }
        for (pair, support) in outcome.level2.pair_support.iter() {
            prop_assert_eq!(support, brute_support(&transactions, pair.items()));
        }
        for (triple, support) in outcome.level3.triple_support.iter() {
            prop_assert_eq!(support, brute_support(&transactions, triple.items()));
        }
    }

    #[test]
    fn frequent_sets_are_complete(
        transactions in transactions_strategy(),
        min_support in 1usize..5,
    ) {
        let outcome = run(&transactions, min_support, 5);

        let mut pairs = Vec::new();
        let mut triples = Vec::new();
        for a in 0..UNIVERSE {
            for b in a + 1..UNIVERSE {
                if brute_support(&transactions, &[a, b]) >= min_support {
                    pairs.push(Pair::new([a, b]).unwrap());
                }
                for c in b + 1..UNIVERSE {
                    if brute_support(&transactions, &[a, b, c]) >= min_support {
                        triples.push(Triple::new([a, b, c]).unwrap());
                    }
                }
            }
        }
        prop_assert_eq!(&outcome.level2.frequent, &pairs);
        prop_assert_eq!(&outcome.level3.frequent, &triples);
    }
}

// ── Deterministic ranking ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn ranking_ignores_transaction_order(
        transactions in transactions_strategy(),
        min_support in 1usize..4,
        top_k in 1usize..8,
    ) {
        let forward = run(&transactions, min_support, top_k);
        let again = run(&transactions, min_support, top_k);
        let mut reversed_input = transactions.clone();
        reversed_input.reverse();
        let reversed = run(&reversed_input, min_support, top_k);

        prop_assert_eq!(&forward.pair_rules, &again.pair_rules);
        prop_assert_eq!(&forward.pair_rules, &reversed.pair_rules);
        prop_assert_eq!(&forward.triple_rules, &reversed.triple_rules);
    }

    #[test]
    fn parallel_counting_matches_sequential(
        transactions in transactions_strategy(),
        min_support in 1usize..4,
    ) {
        let config = MiningConfig::new(min_support, 5).unwrap();
        let sequential = mine(&transactions, &config);
        let parallel = mine(&transactions, &config.with_parallel(true));

        prop_assert_eq!(&sequential.level2.pair_support, &parallel.level2.pair_support);
        prop_assert_eq!(&sequential.level3.triple_support, &parallel.level3.triple_support);
        prop_assert_eq!(&sequential.pair_rules, &parallel.pair_rules);
        prop_assert_eq!(&sequential.triple_rules, &parallel.triple_rules);
    }
}

// ── Top-K correctness ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn pair_rules_are_the_k_best(
        transactions in transactions_strategy(),
        min_support in 1usize..4,
        top_k in 1usize..8,
    ) {
        let outcome = run(&transactions, min_support, top_k);

        // Every directional rule over the frequent pairs, ranked by hand.
        let mut all: Vec<(f64, u8, u8)> = Vec::new();
        for pair in &outcome.level2.frequent {
            let [a, b] = *pair.items();
            let support = brute_support(&transactions, &[a, b]) as f64;
            all.push((support / brute_support(&transactions, &[a]) as f64, a, b));
            all.push((support / brute_support(&transactions, &[b]) as f64, b, a));
        }
        all.sort_by(|x, y| y.0.total_cmp(&x.0).then(x.1.cmp(&y.1)).then(x.2.cmp(&y.2)));
        all.truncate(top_k);

        let got: Vec<(f64, u8, u8)> = outcome
            .pair_rules
            .iter()
            .map(|r| (r.confidence, r.lhs, r.rhs))
            .collect();
        prop_assert_eq!(got, all);
    }

    #[test]
    fn triple_rules_are_the_k_best(
        transactions in transactions_strategy(),
        min_support in 1usize..4,
        top_k in 1usize..8,
    ) {
        let outcome = run(&transactions, min_support, top_k);

        let mut all: Vec<(f64, [u8; 2], u8)> = Vec::new();
        for triple in &outcome.level3.frequent {
            let support = brute_support(&transactions, triple.items()) as f64;
            for (lhs, rhs) in triple.splits() {
                let lhs = *lhs.items();
                all.push((support / brute_support(&transactions, &lhs) as f64, lhs, rhs));
            }
        }
        all.sort_by(|x, y| y.0.total_cmp(&x.0).then(x.1.cmp(&y.1)).then(x.2.cmp(&y.2)));
        all.truncate(top_k);

        let got: Vec<(f64, [u8; 2], u8)> = outcome
            .triple_rules
            .iter()
            .map(|r| (r.confidence, *r.lhs.items(), r.rhs))
            .collect();
        prop_assert_eq!(got, all);

        for rule in &outcome.triple_rules {
            prop_assert!(rule.confidence > 0.0 && rule.confidence <= 1.0);
        }
    }
}
