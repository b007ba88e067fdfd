use serde::{Serialize, Serializer};
use std::fmt;
use std::hash::Hash;

/// Bound for anything that can be mined as an item.
///
/// Ordering only canonicalizes itemsets; it carries no domain meaning.
pub trait Item: Ord + Hash + Clone + fmt::Debug {}

impl<T: Ord + Hash + Clone + fmt::Debug> Item for T {}

/// A canonical itemset of `K` distinct items in strictly increasing order.
///
/// Two itemsets are the same entity iff their canonical arrays are equal, so
/// the derived `Eq`/`Hash`/`Ord` are the identity and the lexicographic
/// tie-break order at the same time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Itemset<T, const K: usize>([T; K]);

pub type Pair<T> = Itemset<T, 2>;
pub type Triple<T> = Itemset<T, 3>;

impl<T: Item, const K: usize> Itemset<T, K> {
    /// Canonicalizes `items`; returns `None` when they are not distinct.
    pub fn new(mut items: [T; K]) -> Option<Self> {
        items.sort_unstable();
        items.windows(2).all(|w| w[0] < w[1]).then_some(Self(items))
    }

    /// Wraps items the caller already holds in strictly increasing order.
    pub(crate) fn from_sorted(items: [T; K]) -> Self {
        debug_assert!(
            items.windows(2).all(|w| w[0] < w[1]),
            "itemset not canonical: {items:?}"
        );
        Self(items)
    }

    /// Builds an itemset from a combination of borrowed, sorted items.
    pub(crate) fn from_combination(combination: &[&T]) -> Self {
        debug_assert_eq!(combination.len(), K);
        Self::from_sorted(std::array::from_fn(|i| combination[i].clone()))
    }

    pub fn items(&self) -> &[T; K] {
        &self.0
    }

    pub fn first(&self) -> &T {
        &self.0[0]
    }

    pub fn contains(&self, item: &T) -> bool {
        self.0.binary_search(item).is_ok()
    }
}

impl<T: Item> Pair<T> {
    pub fn second(&self) -> &T {
        &self.0[1]
    }
}

impl<T: Item> Triple<T> {
    /// The three 2-subsets, each paired with the item it leaves out:
    /// `(x,y)+z`, `(x,z)+y`, `(y,z)+x`.
    pub fn splits(&self) -> [(Pair<T>, T); 3] {
        let [x, y, z] = &self.0;
        [
            (Pair::from_sorted([x.clone(), y.clone()]), z.clone()),
            (Pair::from_sorted([x.clone(), z.clone()]), y.clone()),
            (Pair::from_sorted([y.clone(), z.clone()]), x.clone()),
        ]
    }
}

// Serialized as a plain sequence; serde has no const-generic array impl.
impl<T: Serialize, const K: usize> Serialize for Itemset<T, K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

impl<T: fmt::Display, const K: usize> fmt::Display for Itemset<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str(")")
    }
}
