//! JSON Pointer (RFC 6901) resolution for `serde_json` documents.
//!
//! `serde_json::Value::pointer` answers "is there something here", but says
//! nothing about why a lookup failed and cannot create a path. This crate
//! provides strict resolution with a typed error, and a create-along-path
//! setter with configurable container creation.
//!
//! # Example
//!
//! ```
//! use json_accessor_pointer::{find_pointer, set_at_pointer, JsonPointerError, SetOptions};
//! use serde_json::json;
//!
//! let mut doc = json!({"user": {"name": "Alice"}});
//! assert_eq!(find_pointer(&doc, "/user/name"), Ok(&json!("Alice")));
//! assert_eq!(find_pointer(&doc, "/user/age"), Err(JsonPointerError::NotFound));
//!
//! set_at_pointer(&mut doc, "/user/age", json!(23), &SetOptions::default()).unwrap();
//! assert_eq!(doc, json!({"user": {"name": "Alice", "age": 23}}));
//! ```

use thiserror::Error;

mod find;
mod set;
pub mod types;
mod util;
pub mod validate;

pub use find::{find_pointer, find_pointer_mut};
pub use set::set_at_pointer;
pub use types::SetOptions;
pub use util::{escape_component, is_valid_index, parse_json_pointer, unescape_component};
pub use validate::validate_json_pointer;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonPointerError {
    #[error("POINTER_INVALID")]
    PointerInvalid,
    #[error("INVALID_ESCAPE")]
    InvalidEscape,
    #[error("NOT_FOUND")]
    NotFound,
    #[error("INVALID_INDEX")]
    InvalidIndex,
    #[error("PAST_THE_END")]
    PastTheEnd,
    #[error("VALUE_IS_SCALAR")]
    ValueIsScalar,
    #[error("INDEX_OUT_OF_RANGE")]
    IndexOutOfRange,
}
