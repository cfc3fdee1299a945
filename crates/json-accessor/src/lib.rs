//! Typed accessors over fixed JSON Pointer paths.
//!
//! A tag is a zero-size type bound to a value type and an RFC 6901 pointer.
//! The generic operations in this crate take the tag as an argument, so the
//! path string and the conversion are written once, at the declaration, and
//! every call site is checked at compile time.
//!
//! | operation | on a missing path | result |
//! |-----------|-------------------|--------|
//! | [`read`] | panics | `T` |
//! | [`try_read`] | `Err` | `Result<T, AccessError>` |
//! | [`write`] | `Ok(false)`, no mutation | `Result<bool, AccessError>` |
//! | [`emplace`] | creates the path | `Result<&mut Value, AccessError>` |
//! | [`reference`] / [`reference_mut`] | `None` | `Option<&Value>` |
//! | [`path`] | n/a | `&'static str` |
//!
//! # Example
//!
//! ```
//! use json_accessor::{emplace, json_accessor, read, reference, try_read, write, JsonNull};
//! use serde_json::{json, Value};
//!
//! json_accessor! {
//!     pub UserName: String = "/user/name";
//!     pub UserAge: i64 = "/user/age";
//! }
//!
//! let mut doc = json!({"user": {"name": "Alice", "age": 23}});
//! assert_eq!(read(&doc, UserAge), 23);
//! assert!(write(&mut doc, UserAge, 100i64).unwrap());
//! assert_eq!(read(&doc, UserAge), 100);
//! assert!(write(&mut doc, UserName, JsonNull).unwrap());
//! assert_eq!(doc["user"]["name"], Value::Null);
//!
//! let mut empty = Value::Null;
//! assert!(!write(&mut empty, UserAge, 100i64).unwrap());
//! assert!(reference(&empty, UserAge).is_none());
//! assert!(try_read(&empty, UserAge).is_err());
//!
//! emplace(&mut empty, UserName, "Bob".to_string()).unwrap();
//! assert_eq!(empty, json!({"user": {"name": "Bob"}}));
//! ```

mod accessor;
mod error;
mod macros;
pub mod settable;

pub use accessor::{
    emplace, emplace_with, path, read, reference, reference_mut, try_read, write, JsonAccessor,
};
pub use error::AccessError;
pub use json_accessor_pointer as pointer;
pub use json_accessor_pointer::{JsonPointerError, SetOptions};
pub use settable::{IntoSettable, JsonNull, Settable};
