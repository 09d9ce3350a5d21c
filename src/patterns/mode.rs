// src/patterns/mode.rs - Most-frequent-value selection

use std::collections::HashMap;
use std::hash::Hash;

/// Return the most frequent value, or `None` for an empty input.
///
/// Ties go to the value whose first occurrence comes earliest, so the result
/// depends only on the input order and never on hash iteration order.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    // value -> (count, index of first occurrence)
    let mut tally: HashMap<T, (usize, usize)> = HashMap::new();
    for (idx, value) in values.into_iter().enumerate() {
        tally.entry(value).or_insert((0, idx)).0 += 1;
    }

    tally
        .into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(value, _)| value)
}
