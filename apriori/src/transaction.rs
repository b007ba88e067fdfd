use crate::apriori::Item;
use ndarray::ArrayView2;

/// A transaction held as its canonical item set: sorted, without duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transaction<T> {
    items: Vec<T>,
}

impl<T: Item> Transaction<T> {
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        let mut items: Vec<T> = items.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Self { items }
    }

    /// Items in ascending order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.binary_search(item).is_ok()
    }

    /// True when every item of `itemset` (sorted) is in this transaction.
    pub fn contains_all(&self, itemset: &[T]) -> bool {
        itemset.iter().all(|item| self.contains(item))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Item> FromIterator<T> for Transaction<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Converts a binary transaction matrix into transactions, one per row.
///
/// Column `j` is item `j`; any non-zero cell marks the item as present.
pub fn from_dense(matrix: ArrayView2<'_, i32>) -> Vec<Transaction<usize>> {
    matrix
        .rows()
        .into_iter()
        .map(|row| {
            // Column order is already ascending.
            let items = row
                .iter()
                .enumerate()
                .filter_map(|(item, &cell)| (cell != 0).then_some(item))
                .collect();
            Transaction { items }
        })
        .collect()
}
