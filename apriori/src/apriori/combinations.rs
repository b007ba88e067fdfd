/// Calls `callback` with every `k`-combination of `items`, in lexicographic
/// index order. When `items` is sorted each combination is sorted too.
pub fn for_each_combination<'a, T, F>(items: &'a [T], k: usize, mut callback: F)
where
    F: FnMut(&[&'a T]),
{
    if k == 0 || k > items.len() {
        return;
    }
    let mut current = Vec::with_capacity(k);
    combinations_recursive(items, k, 0, &mut current, &mut callback);
}

fn combinations_recursive<'a, T, F>(
    items: &'a [T],
    k: usize,
    start: usize,
    current: &mut Vec<&'a T>,
    callback: &mut F,
) where
    F: FnMut(&[&'a T]),
{
    if current.len() == k {
        callback(current);
        return;
    }

    // Stop early once too few items remain to complete the combination.
    let last_start = items.len() - (k - current.len());
    for i in start..=last_start {
        current.push(&items[i]);
        combinations_recursive(items, k, i + 1, current, callback);
        current.pop();
    }
}
