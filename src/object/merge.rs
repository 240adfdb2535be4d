//! Deep merge of containers
//!
//! Merge semantics:
//! - Containers: deep-merge by key (recursive)
//! - Arrays: REPLACE (later wins entirely, never concatenated)
//! - Scalars: override (later wins)
//! - Null: override (null is a scalar, never merged into)

use putkonen_kind::{expect_container, Container};
use serde_json::Value;

use crate::error::Result;

/// Deep merge containers, left to right.
///
/// The result owns fresh copies of every value, so mutating it never affects
/// any of the sources. Later sources win at every nesting depth.
pub fn merge(sources: &[&Container]) -> Container {
    sources.iter().fold(Container::new(), |mut target, source| {
        merge_into(&mut target, source);
        target
    })
}

/// Deep merge containers that are no longer needed by the caller.
///
/// Same semantics as [`merge`], reusing the sources' allocations.
pub fn merge_owned<I>(sources: I) -> Container
where
    I: IntoIterator<Item = Container>,
{
    sources.into_iter().fold(Container::new(), |mut target, source| {
        merge_owned_into(&mut target, source);
        target
    })
}

/// Deep merge dynamic values, each of which must be a container.
pub fn merge_values(values: &[Value]) -> Result<Container> {
    let sources = values
        .iter()
        .map(expect_container)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(merge(&sources))
}

fn merge_into(target: &mut Container, source: &Container) {
    for (key, incoming) in source {
        match incoming {
            // Both containers: recurse so keys only present earlier survive
            Value::Object(incoming) => match target.get_mut(key) {
                Some(Value::Object(existing)) => merge_into(existing, incoming),
                _ => {
                    target.insert(key.clone(), Value::Object(incoming.clone()));
                }
            },

            // Arrays, scalars and null replace whatever was there
            other => {
                target.insert(key.clone(), other.clone());
            }
        }
    }
}

fn merge_owned_into(target: &mut Container, source: Container) {
    for (key, incoming) in source {
        match incoming {
            Value::Object(incoming) => match target.get_mut(&key) {
                Some(Value::Object(existing)) => merge_owned_into(existing, incoming),
                _ => {
                    target.insert(key, Value::Object(incoming));
                }
            },
            other => {
                target.insert(key, other);
            }
        }
    }
}
