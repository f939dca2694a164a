//! Fused filter-then-transform pipeline.
//!
//! Both functions make one forward pass over `data`. For each element the predicate runs first;
//! the transform runs only if the predicate accepted it, before the next element is looked at.
//! Callbacks with observable side effects therefore see elements strictly in input order.

/// Keeps the elements accepted by `filter_func` and maps each one through `transform_func`.
///
/// - The output holds exactly one value per accepted element, in input order.
/// - `filter_func` is called once per element; `transform_func` once per accepted element.
/// - Empty input, or a predicate that rejects everything, yields an empty `Vec`.
///
/// Callbacks may be impure (`FnMut`); keeping them side-effect free is up to the caller.
/// A panic in either callback unwinds out of this call and no output is returned.
///
/// ```rust
/// use pipeline_processing::processing::process;
///
/// let out = process(&[1, 2, 3, 4, 5], |x| x % 2 == 0, |x| x * 10);
/// assert_eq!(out, vec![20, 40]);
/// ```
pub fn process<T, U, P, F>(data: &[T], mut filter_func: P, mut transform_func: F) -> Vec<U>
where
    P: FnMut(&T) -> bool,
    F: FnMut(&T) -> U,
{
    data.iter()
        .filter(|item| filter_func(*item))
        .map(|item| transform_func(item))
        .collect()
}

/// Fallible variant of [`process`].
///
/// The first `Err` returned by either callback stops the pass and is returned unchanged. No
/// element after the failing one is visited and the partially built output is dropped.
pub fn try_process<T, U, E, P, F>(
    data: &[T],
    mut filter_func: P,
    mut transform_func: F,
) -> Result<Vec<U>, E>
where
    P: FnMut(&T) -> Result<bool, E>,
    F: FnMut(&T) -> Result<U, E>,
{
    let mut out = Vec::new();
    for item in data {
        if filter_func(item)? {
            out.push(transform_func(item)?);
        }
    }
    Ok(out)
}
