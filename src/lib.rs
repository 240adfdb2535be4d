//! Putkonen - generic sequence and container helpers
//!
//! Mapping/filtering/reducing shortcuts over slices, deep merge of JSON
//! containers, key introspection and a pass-through `log`. Every function
//! returns fresh values and leaves its arguments untouched.

pub mod config;
pub mod error;
pub mod log;
pub mod object;
pub mod seq;

pub use config::{LogOptions, LogTarget};
pub use error::{Error, Result};
pub use log::{log, log_to, log_with};
pub use object::{assign, has, keys, merge, merge_owned, merge_values, omit, values, wrap};
pub use putkonen_kind::{is_array, is_object, Container, Kind, Shape, ShapeMismatch};
pub use seq::{
    concat, contains, each, filter, find, first, flatten, flatten_value, map, reduce, rest,
};
