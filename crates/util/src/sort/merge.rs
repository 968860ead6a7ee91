/// Merge two ascending sequences into one ascending sequence.
///
/// Two-pointer merge: at every step the smaller head is taken, ties go to
/// `b`, and an exhausted side behaves as `+∞`. Output length is always
/// `a.len() + b.len()`.
///
/// # Performance
///
/// - Time complexity: O(n + m)
/// - Space complexity: O(n + m) for the output, nothing else
///
/// # Examples
///
/// ```
/// use helpkit_util::sort::merge_sorted;
///
/// assert_eq!(merge_sorted(&[1, 6], &[2, 3, 4, 10]), vec![1, 2, 3, 4, 6, 10]);
/// ```
pub fn merge_sorted<T: PartialOrd + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() || j < b.len() {
        let take_a = match (a.get(i), b.get(j)) {
            (Some(x), Some(y)) => x < y,
            (Some(_), None) => true,
            _ => false,
        };
        if take_a {
            merged.push(a[i].clone());
            i += 1;
        } else {
            merged.push(b[j].clone());
            j += 1;
        }
    }
    merged
}
