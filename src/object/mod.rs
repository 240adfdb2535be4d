//! Container helpers
//!
//! Key introspection, shallow and deep copies. Every function returns a new
//! container and leaves its arguments untouched.

mod merge;

pub use merge::{merge, merge_owned, merge_values};

use putkonen_kind::Container;
use serde_json::Value;

/// True iff every name is a key of `target`.
///
/// An empty `names` list is vacuously true.
pub fn has(target: &Container, names: &[&str]) -> bool {
    names.iter().all(|name| target.contains_key(*name))
}

/// Shallow copy of the sources, applied left to right.
///
/// A later source's value for a shared key replaces the earlier one as a
/// whole; nested containers are not combined.
pub fn assign(sources: &[&Container]) -> Container {
    let mut target = Container::new();
    for source in sources {
        target.extend(source.iter().map(|(key, value)| (key.clone(), value.clone())));
    }
    target
}

/// Keys of `target` in insertion order.
pub fn keys(target: &Container) -> Vec<&str> {
    target.keys().map(String::as_str).collect()
}

/// Values of `target`, in the same order as [`keys`].
pub fn values(target: &Container) -> Vec<&Value> {
    target.values().collect()
}

/// A new container holding only `key`, with the value it has in `target`.
///
/// Empty when `target` has no such key.
pub fn wrap(key: &str, target: &Container) -> Container {
    let mut wrapped = Container::new();
    if let Some(value) = target.get(key) {
        wrapped.insert(key.to_string(), value.clone());
    }
    wrapped
}

/// `target` without the listed keys.
///
/// Retained keys are deep-copied one at a time through [`wrap`] and folded
/// into the result with [`merge_owned`], so the accumulator is never re-cloned.
pub fn omit(target: &Container, names: &[&str]) -> Container {
    target
        .keys()
        .filter(|key| !names.contains(&key.as_str()))
        .fold(Container::new(), |result, key| {
            merge_owned([result, wrap(key, target)])
        })
}
