//! Small higher-order helpers over slices and functions.

/// Returns every other item of `items`, beginning with the first.
///
/// An empty slice yields an empty vector.
pub fn every_other<T: Clone>(items: &[T]) -> Vec<T> {
    items.iter().step_by(2).cloned().collect()
}

/// Flattens one level of nesting, preserving order.
pub fn flatten<T>(nested: Vec<Vec<T>>) -> Vec<T> {
    nested.into_iter().flatten().collect()
}

/// Decorates a predicate into a reusable filter over slices.
///
/// ```rust
/// let evens = svot::filter_with(|n: &i32| n % 2 == 0);
/// assert_eq!(evens(&[1, 2, 3, 4]), vec![2, 4]);
/// assert_eq!(evens(&[5, 7]), Vec::<i32>::new());
/// ```
pub fn filter_with<T, P>(predicate: P) -> impl Fn(&[T]) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    move |items| {
        items
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }
}

/// Wraps `f` so that only the first `limit` calls go through.
///
/// The first `limit` invocations delegate to `f` and return `Some`; every
/// later invocation returns `None` without calling `f` at all.
pub fn limit_calls<A, R, F>(mut f: F, limit: usize) -> impl FnMut(A) -> Option<R>
where
    F: FnMut(A) -> R,
{
    let mut calls = 0;
    move |arg| {
        if calls >= limit {
            return None;
        }
        calls += 1;
        Some(f(arg))
    }
}
