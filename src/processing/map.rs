//! Element mapping for in-memory slices.

/// Returns a new `Vec` by applying `mapper` to every element of `data`, in order.
pub fn map<T, U, F>(data: &[T], mapper: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    data.iter().map(mapper).collect()
}
