pub mod combinations;
pub mod counting;
pub mod itemset;
pub mod levels;
pub mod pipeline;
pub mod rules;
pub mod storage;


pub use itemset::{Item, Itemset, Pair, Triple};
pub use levels::{Level1, Level2, Level3};
pub use pipeline::{mine, LevelStats, MiningOutcome};
pub use rules::{PairRule, Rule, TripleRule};
pub use storage::SupportTable;
