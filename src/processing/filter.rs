//! Element filtering for in-memory slices.

/// Returns a new `Vec` containing clones of the elements for which `predicate` returns `true`.
///
/// Relative order is preserved and `data` is left untouched.
pub fn filter<T, F>(data: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    data.iter().filter(|item| predicate(*item)).cloned().collect()
}
