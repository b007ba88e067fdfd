pub mod level1;
pub mod level2;
pub mod level3;

pub use level1::{count_items, Level1};
pub use level2::{candidate_pairs, count_pairs, Level2};
pub use level3::{candidate_triples, count_triples, Level3};
