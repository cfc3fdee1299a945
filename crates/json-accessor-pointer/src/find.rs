use serde_json::Value;

use crate::util::{parse_index, parse_json_pointer};
use crate::JsonPointerError;

/// Resolve a JSON Pointer against a document.
///
/// Resolution is strict: every token must name an existing object member or
/// array element.
///
/// # Errors
///
/// - `PointerInvalid` / `InvalidEscape` for a malformed pointer
/// - `NotFound` for a missing key or an index at or past the array length
/// - `PastTheEnd` for the `-` token, which never names an existing element
/// - `InvalidIndex` for an array token that is not a canonical index
/// - `ValueIsScalar` when a token is applied to a scalar or `null`
///
/// # Example
///
/// ```
/// use json_accessor_pointer::{find_pointer, JsonPointerError};
/// use serde_json::json;
///
/// let doc = json!({"user": {"langs": ["Rust", "C++"]}});
/// assert_eq!(find_pointer(&doc, "/user/langs/1").unwrap(), &json!("C++"));
/// assert_eq!(find_pointer(&doc, "/user/age"), Err(JsonPointerError::NotFound));
/// ```
pub fn find_pointer<'a>(val: &'a Value, pointer: &str) -> Result<&'a Value, JsonPointerError> {
    let mut current = val;
    for token in parse_json_pointer(pointer)? {
        current = match current {
            Value::Object(map) => map.get(&token).ok_or(JsonPointerError::NotFound)?,
            Value::Array(arr) => {
                if token == "-" {
                    return Err(JsonPointerError::PastTheEnd);
                }
                arr.get(parse_index(&token)?)
                    .ok_or(JsonPointerError::NotFound)?
            }
            _ => return Err(JsonPointerError::ValueIsScalar),
        };
    }
    Ok(current)
}

/// Mutable counterpart of [`find_pointer`]. Never creates structure.
pub fn find_pointer_mut<'a>(
    val: &'a mut Value,
    pointer: &str,
) -> Result<&'a mut Value, JsonPointerError> {
    let mut current = val;
    for token in parse_json_pointer(pointer)? {
        current = match current {
            Value::Object(map) => map.get_mut(&token).ok_or(JsonPointerError::NotFound)?,
            Value::Array(arr) => {
                if token == "-" {
                    return Err(JsonPointerError::PastTheEnd);
                }
                arr.get_mut(parse_index(&token)?)
                    .ok_or(JsonPointerError::NotFound)?
            }
            _ => return Err(JsonPointerError::ValueIsScalar),
        };
    }
    Ok(current)
}
