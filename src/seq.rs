//! Sequence shortcuts
//!
//! Thin wrappers over slice and iterator operations, plus a recursive
//! `flatten` for nested JSON arrays.

use putkonen_kind::expect_sequence;
use serde_json::Value;

use crate::error::Result;

/// Call `f` for each element.
pub fn each<T, F>(items: &[T], f: F)
where
    F: FnMut(&T),
{
    items.iter().for_each(f)
}

/// First element matching `predicate`.
pub fn find<T, F>(items: &[T], mut predicate: F) -> Option<&T>
where
    F: FnMut(&T) -> bool,
{
    items.iter().find(|item| predicate(item))
}

/// Elements matching `predicate`, in order.
pub fn filter<T, F>(items: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    items.iter().filter(|item| predicate(item)).cloned().collect()
}

pub fn map<T, U, F>(items: &[T], f: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    items.iter().map(f).collect()
}

/// Fold `items` into `initial` with `f`.
pub fn reduce<T, A, F>(items: &[T], f: F, initial: A) -> A
where
    F: FnMut(A, &T) -> A,
{
    items.iter().fold(initial, f)
}

pub fn first<T>(items: &[T]) -> Option<&T> {
    items.first()
}

/// Everything after the first element; empty for an empty slice.
pub fn rest<T>(items: &[T]) -> &[T] {
    items.get(1..).unwrap_or(&[])
}

/// `target` followed by each of `others`.
pub fn concat<T: Clone>(target: &[T], others: &[&[T]]) -> Vec<T> {
    let mut joined = target.to_vec();
    for other in others {
        joined.extend_from_slice(other);
    }
    joined
}

pub fn contains<T: PartialEq>(items: &[T], value: &T) -> bool {
    items.contains(value)
}

/// Recursively splice nested arrays into one flat sequence.
///
/// No element of the result is an array.
pub fn flatten(items: &[Value]) -> Vec<Value> {
    reduce(
        items,
        |mut flat, element| {
            match element {
                Value::Array(nested) => flat.extend(flatten(nested)),
                scalar => flat.push(scalar.clone()),
            }
            flat
        },
        Vec::new(),
    )
}

/// [`flatten`] for a dynamic value, which must be an array.
pub fn flatten_value(value: &Value) -> Result<Vec<Value>> {
    Ok(flatten(expect_sequence(value)?))
}
