//! Level-wise Apriori mining of frequent items, pairs and triples, with
//! ranked association rules derived from the pairs and triples.
//!
//! ```
//! use apriori_rules::{mine, MiningConfig, Transaction};
//!
//! let transactions: Vec<Transaction<&str>> = vec![
//!     Transaction::new(["A", "B", "C"]),
//!     Transaction::new(["A", "B"]),
//!     Transaction::new(["A", "C"]),
//!     Transaction::new(["B", "C"]),
//!     Transaction::new(["A", "B", "C"]),
//! ];
//! let config = MiningConfig::new(2, 5).unwrap();
//! let outcome = mine(&transactions, &config);
//!
//! assert_eq!(outcome.level1.frequent, vec!["A", "B", "C"]);
//! assert_eq!(outcome.level3.frequent.len(), 1);
//! ```

pub mod apriori;
pub mod config;
pub mod error;
pub mod report;
pub mod transaction;

#[cfg(feature = "python")]
mod python;

pub use apriori::{
    mine, Item, Itemset, LevelStats, MiningOutcome, Pair, PairRule, Rule, SupportTable, Triple,
    TripleRule,
};
pub use config::MiningConfig;
pub use error::{ConfigError, ReportError};
pub use report::{render_ranked, RuleReport};
pub use transaction::{from_dense, Transaction};
