//! Text and JSON rendering of ranked rules.

use crate::apriori::{LevelStats, MiningOutcome, PairRule, Rule, TripleRule};
use crate::error::ReportError;
use serde::Serialize;
use std::fmt::{self, Display, Write as _};

impl<L: Display, R: Display> Display for Rule<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} => {} | support={} | confidence={:.6}",
            self.lhs, self.rhs, self.support, self.confidence
        )
    }
}

/// Renders `rules` as a numbered list, one rule per line.
pub fn render_ranked<L: Display, R: Display>(rules: &[Rule<L, R>]) -> String {
    let mut out = String::new();
    for (rank, rule) in rules.iter().enumerate() {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{}. {rule}", rank + 1);
    }
    out
}

/// Borrowed view of a run for rendering.
#[derive(Debug, Serialize)]
pub struct RuleReport<'a, T: Serialize> {
    pub transactions: usize,
    pub levels: [LevelStats; 3],
    pub pair_rules: &'a [PairRule<T>],
    pub triple_rules: &'a [TripleRule<T>],
}

impl<'a, T: Serialize> RuleReport<'a, T> {
    pub fn new(outcome: &'a MiningOutcome<T>) -> Self {
        Self {
            transactions: outcome.transactions,
            levels: outcome.stats(),
            pair_rules: &outcome.pair_rules,
            triple_rules: &outcome.triple_rules,
        }
    }

    /// # Errors
    /// Returns an error if an item fails to serialize.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<T: Serialize + Display> Display for RuleReport<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== Top {} rules from frequent pairs =====", self.pair_rules.len())?;
        f.write_str(&render_ranked(self.pair_rules))?;
        writeln!(f)?;
        writeln!(f, "===== Top {} rules from frequent triples =====", self.triple_rules.len())?;
        f.write_str(&render_ranked(self.triple_rules))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apriori::Pair;

    #[test]
    fn pair_rule_line_matches_expected_format() {
        let rule = Rule { lhs: "A", rhs: "B", support: 3, confidence: 0.75 };
        assert_eq!(rule.to_string(), "A => B | support=3 | confidence=0.750000");
    }

    #[test]
    fn triple_rules_show_lhs_pair() {
        let rules = vec![Rule {
            lhs: Pair::new(["A", "B"]).unwrap(),
            rhs: "C",
            support: 2,
            confidence: 2.0 / 3.0,
        }];
        assert_eq!(
            render_ranked(&rules),
            "1. (A, B) => C | support=2 | confidence=0.666667\n"
        );
    }

    #[test]
    fn empty_list_renders_nothing() {
        let rules: Vec<Rule<u32, u32>> = Vec::new();
        assert!(render_ranked(&rules).is_empty());
    }
}
