/// Remove duplicates by strict equality, keeping first occurrences in their
/// original order.
///
/// Works with any `PartialEq` element, including [`Value`](crate::Value),
/// so it does not need hashing. Quadratic in the number of distinct items.
///
/// # Examples
///
/// ```
/// use helpkit_util::dedupe;
///
/// let arr = [1, 4, 2, 3, 5, 3, 2, 3, 4, 1, 2, 3, 1];
/// assert_eq!(dedupe(&arr), vec![1, 4, 2, 3, 5]);
/// ```
pub fn dedupe<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    let mut unique: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !unique.contains(item) {
            unique.push(item.clone());
        }
    }
    unique
}
