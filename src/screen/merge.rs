//! Screen-size merging: mobile-first inheritance over sparse breakpoint maps.
//!
//! [`merge_screens`] reduces a sparse map to its canonical form (the base
//! breakpoint always present, repeats of the inherited value dropped).
//! [`fill_screens`] goes the other way and expands a sparse map into one value
//! per breakpoint.

use super::ScreenMap;

/// Canonicalize a sparse per-breakpoint map.
///
/// Walks `order` ascending while carrying the last value seen (seeded with
/// `T::default()`, i.e. `0` for numbers):
///
/// - the first breakpoint is always emitted, with the seed when it is unset;
/// - later breakpoints are emitted only when set *and* different from the
///   carried value.
///
/// Only a missing key counts as "unset"; `0` is a value like any other. Keys
/// not present in `order` are ignored. The result is idempotent:
/// `merge_screens(&merge_screens(m, o), o) == merge_screens(m, o)`.
pub fn merge_screens<T, S>(screens: &ScreenMap<T>, order: &[S]) -> ScreenMap<T>
where
    T: Clone + PartialEq + Default,
    S: AsRef<str>,
{
    let (_, merged) = order.iter().enumerate().fold(
        (T::default(), ScreenMap::new()),
        |(last, mut merged), (index, name)| {
            let name = name.as_ref();
            match screens.get(name) {
                Some(value) if index == 0 || *value != last => {
                    merged.insert(name.to_owned(), value.clone());
                    (value.clone(), merged)
                }
                None if index == 0 => {
                    merged.insert(name.to_owned(), last.clone());
                    (last, merged)
                }
                _ => (last, merged),
            }
        },
    );
    merged
}

/// Expand a sparse map into one value per breakpoint of `order`.
///
/// Unset breakpoints take the value of the previous one; an unset first
/// breakpoint takes `T::default()`.
pub fn fill_screens<T, S>(screens: &ScreenMap<T>, order: &[S]) -> Vec<T>
where
    T: Clone + Default,
    S: AsRef<str>,
{
    order
        .iter()
        .scan(T::default(), |last, name| {
            if let Some(value) = screens.get(name.as_ref()) {
                *last = value.clone();
            }
            Some(last.clone())
        })
        .collect()
}
