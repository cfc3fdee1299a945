//! Tag-dispatched accessor operations.
//!
//! Every function takes the tag value as an argument and is monomorphized on
//! its type, so `read(&doc, UserAge)` and `read(&doc, UserName)` resolve to
//! different paths and return types at compile time.

use json_accessor_pointer::{find_pointer, find_pointer_mut, set_at_pointer, SetOptions};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use crate::error::AccessError;
use crate::settable::IntoSettable;

/// Binds a zero-size tag type to a JSON Pointer and a value type.
///
/// Implemented by [`json_accessor!`](crate::json_accessor) and
/// [`define_json_accessor!`](crate::define_json_accessor); there is rarely a
/// reason to implement it by hand.
pub trait JsonAccessor: Copy {
    /// Type stored at [`PATH`](Self::PATH).
    type Value: Serialize + DeserializeOwned;
    /// RFC 6901 pointer into the document.
    const PATH: &'static str;
}

/// Read and convert the value at the tag's path.
///
/// # Panics
///
/// Panics if the path does not resolve or the value does not convert to
/// `A::Value`. Use [`try_read`] to get the error instead.
#[track_caller]
pub fn read<A: JsonAccessor>(doc: &Value, tag: A) -> A::Value {
    match try_read(doc, tag) {
        Ok(value) => value,
        Err(err) => panic!("cannot read `{}`: {err}", A::PATH),
    }
}

/// Read and convert the value at the tag's path.
///
/// # Errors
///
/// [`AccessError::Pointer`] if the path does not resolve,
/// [`AccessError::Convert`] if the value does not convert to `A::Value`.
pub fn try_read<A: JsonAccessor>(doc: &Value, _tag: A) -> Result<A::Value, AccessError> {
    let slot = find_pointer(doc, A::PATH)?;
    Ok(<A::Value as Deserialize>::deserialize(slot)?)
}

/// Overwrite the value at the tag's path, if it exists.
///
/// Never creates structure. Returns `Ok(false)` without touching the
/// document when the path does not resolve, `Ok(true)` after a store.
/// `value` may be an owned value, a reference, or [`JsonNull`](crate::JsonNull).
/// Accessors typed `String` also take a `&str`.
///
/// # Errors
///
/// [`AccessError::Convert`] if the value cannot be serialized; the document
/// is left as it was.
pub fn write<'v, A, V>(doc: &mut Value, _tag: A, value: V) -> Result<bool, AccessError>
where
    A: JsonAccessor,
    A::Value: 'v,
    V: IntoSettable<'v, A::Value>,
{
    let slot = match find_pointer_mut(doc, A::PATH) {
        Ok(slot) => slot,
        Err(error) => {
            trace!(path = A::PATH, error = %error, "write target missing");
            return Ok(false);
        }
    };
    *slot = value.into_settable().into_json()?;
    Ok(true)
}

/// Store a value at the tag's path, creating missing objects and arrays.
///
/// Returns the slot now holding the value. Uses [`SetOptions::default`].
///
/// # Errors
///
/// [`AccessError::Pointer`] when the path cannot be extended, for example
/// because it crosses a non-null scalar. [`AccessError::Convert`] when the
/// value cannot be serialized. The document is unchanged on error.
pub fn emplace<'d, 'v, A, V>(doc: &'d mut Value, tag: A, value: V) -> Result<&'d mut Value, AccessError>
where
    A: JsonAccessor,
    A::Value: 'v,
    V: IntoSettable<'v, A::Value>,
{
    emplace_with(doc, tag, value, &SetOptions::default())
}

/// [`emplace`] with explicit path-creation options.
pub fn emplace_with<'d, 'v, A, V>(
    doc: &'d mut Value,
    _tag: A,
    value: V,
    options: &SetOptions,
) -> Result<&'d mut Value, AccessError>
where
    A: JsonAccessor,
    A::Value: 'v,
    V: IntoSettable<'v, A::Value>,
{
    let value = value.into_settable().into_json()?;
    Ok(set_at_pointer(doc, A::PATH, value, options)?)
}

/// The raw value at the tag's path, or `None` if it does not resolve.
pub fn reference<A: JsonAccessor>(doc: &Value, _tag: A) -> Option<&Value> {
    find_pointer(doc, A::PATH).ok()
}

/// Mutable counterpart of [`reference`]. Never creates structure.
pub fn reference_mut<A: JsonAccessor>(doc: &mut Value, _tag: A) -> Option<&mut Value> {
    find_pointer_mut(doc, A::PATH).ok()
}

/// The pointer bound to the tag.
pub fn path<A: JsonAccessor>(_tag: A) -> &'static str {
    A::PATH
}
