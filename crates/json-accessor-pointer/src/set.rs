use serde_json::{Map, Value};
use tracing::trace;

use crate::types::SetOptions;
use crate::util::{is_valid_index, parse_index, parse_json_pointer};
use crate::JsonPointerError;

/// Store `value` at `pointer`, creating missing structure along the way.
///
/// Existing members and elements are followed. At the first slot that does
/// not exist (or is `null`, or is a scalar and `replace_scalars` is set) the
/// rest of the path is built as fresh containers according to `options`,
/// then attached. Returns the slot now holding `value`.
///
/// The document is only modified once the whole path is known to be
/// settable, so an error leaves it untouched.
///
/// # Errors
///
/// - `PointerInvalid` / `InvalidEscape` for a malformed pointer
/// - `ValueIsScalar` when the path crosses a non-null scalar
/// - `InvalidIndex` for a token applied to an array that is not an index
/// - `IndexOutOfRange` when reaching an index would need more than
///   `max_created_elements` padding elements
/// - `NotFound` when a container must be created but `options` forbid it
///
/// # Example
///
/// ```
/// use json_accessor_pointer::{set_at_pointer, SetOptions};
/// use serde_json::{json, Value};
///
/// let mut doc = Value::Null;
/// set_at_pointer(&mut doc, "/user/langs/-", json!("Rust"), &SetOptions::default()).unwrap();
/// assert_eq!(doc, json!({"user": {"langs": ["Rust"]}}));
/// ```
pub fn set_at_pointer<'a>(
    doc: &'a mut Value,
    pointer: &str,
    value: Value,
    options: &SetOptions,
) -> Result<&'a mut Value, JsonPointerError> {
    let tokens = parse_json_pointer(pointer)?;
    let mut current = doc;
    let mut rest = &tokens[..];

    while let Some((token, tail)) = rest.split_first() {
        let replace = match current {
            Value::Null => true,
            Value::Object(_) | Value::Array(_) => false,
            _ if options.replace_scalars => {
                trace!(pointer = pointer, token = token.as_str(), kind = "replace", "replacing scalar on path");
                true
            }
            _ => return Err(JsonPointerError::ValueIsScalar),
        };
        if replace {
            *current = build(rest, value, options)?;
            trace!(pointer = pointer, token = token.as_str(), kind = created_kind(current), "created missing structure");
            return descend(current, rest);
        }

        match current {
            Value::Object(map) => {
                if map.contains_key(token) {
                    current = map.get_mut(token).ok_or(JsonPointerError::NotFound)?;
                    rest = tail;
                    continue;
                }
                let slot = map
                    .entry(token.clone())
                    .or_insert(build(tail, value, options)?);
                trace!(pointer = pointer, token = token.as_str(), kind = created_kind(slot), "created missing structure");
                return descend(slot, tail);
            }
            Value::Array(arr) => {
                let idx = if token == "-" {
                    arr.len()
                } else {
                    parse_index(token)?
                };
                if idx < arr.len() {
                    current = &mut arr[idx];
                    rest = tail;
                    continue;
                }
                if idx - arr.len() > options.max_created_elements {
                    return Err(JsonPointerError::IndexOutOfRange);
                }
                let element = build(tail, value, options)?;
                arr.resize(idx, Value::Null);
                arr.push(element);
                trace!(pointer = pointer, token = token.as_str(), kind = created_kind(&arr[idx]), "created missing structure");
                return descend(&mut arr[idx], tail);
            }
            _ => return Err(JsonPointerError::ValueIsScalar),
        }
    }

    *current = value;
    Ok(current)
}

/// Build the detached structure a `null` slot turns into for `tokens`.
fn build(tokens: &[String], value: Value, options: &SetOptions) -> Result<Value, JsonPointerError> {
    let Some((token, tail)) = tokens.split_first() else {
        return Ok(value);
    };
    if options.create_arrays && (token == "-" || is_valid_index(token)) {
        let idx = if token == "-" { 0 } else { parse_index(token)? };
        if idx > options.max_created_elements {
            return Err(JsonPointerError::IndexOutOfRange);
        }
        let mut arr = vec![Value::Null; idx];
        arr.push(build(tail, value, options)?);
        Ok(Value::Array(arr))
    } else if options.create_objects {
        let mut map = Map::new();
        map.insert(token.clone(), build(tail, value, options)?);
        Ok(Value::Object(map))
    } else {
        Err(JsonPointerError::NotFound)
    }
}

/// What a freshly attached slot holds, for trace output.
fn created_kind(value: &Value) -> &'static str {
    match value {
        Value::Object(_) => "object",
        Value::Array(_) => "array",
        _ => "value",
    }
}

/// Walk a structure produced by [`build`] down to its leaf.
fn descend<'a>(mut current: &'a mut Value, tokens: &[String]) -> Result<&'a mut Value, JsonPointerError> {
    for token in tokens {
        current = match current {
            Value::Object(map) => map.get_mut(token),
            Value::Array(arr) => {
                if token == "-" {
                    arr.last_mut()
                } else {
                    arr.get_mut(parse_index(token)?)
                }
            }
            _ => None,
        }
        .ok_or(JsonPointerError::NotFound)?;
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn set(doc: &mut Value, pointer: &str, value: Value) -> Result<Value, JsonPointerError> {
        set_at_pointer(doc, pointer, value, &SetOptions::default()).map(|slot| slot.clone())
    }

    #[test]
    fn test_set_root() {
        let mut doc = json!({"a": 1});
        assert_eq!(set(&mut doc, "", json!([1])), Ok(json!([1])));
        assert_eq!(doc, json!([1]));
    }

    #[test]
    fn test_set_existing_member() {
        let mut doc = json!({"user": {"age": 23}});
        set(&mut doc, "/user/age", json!(100)).unwrap();
        assert_eq!(doc, json!({"user": {"age": 100}}));
    }

    #[test]
    fn test_set_creates_objects_from_null() {
        let mut doc = Value::Null;
        set(&mut doc, "/a/b/c", json!(true)).unwrap();
        assert_eq!(doc, json!({"a": {"b": {"c": true}}}));
    }

    #[test]
    fn test_set_creates_missing_member_in_existing_object() {
        let mut doc = json!({"a": {"keep": 1}});
        set(&mut doc, "/a/b/c", json!(2)).unwrap();
        assert_eq!(doc, json!({"a": {"keep": 1, "b": {"c": 2}}}));
    }

    #[test]
    fn test_set_creates_arrays_for_index_tokens() {
        let mut doc = Value::Null;
        set(&mut doc, "/items/0/name", json!("x")).unwrap();
        assert_eq!(doc, json!({"items": [{"name": "x"}]}));

        set(&mut doc, "/items/-", json!(7)).unwrap();
        assert_eq!(doc, json!({"items": [{"name": "x"}, 7]}));
    }

    #[test]
    fn test_set_array_append_by_index() {
        let mut doc = json!([1, 2]);
        assert_eq!(set(&mut doc, "/2", json!(3)), Ok(json!(3)));
        assert_eq!(doc, json!([1, 2, 3]));
    }

    #[test]
    fn test_set_array_index_past_end() {
        let mut doc = json!([1]);
        assert_eq!(
            set(&mut doc, "/3", json!(4)),
            Err(JsonPointerError::IndexOutOfRange)
        );
        assert_eq!(doc, json!([1]));

        let opts = SetOptions::default().with_max_created_elements(2);
        set_at_pointer(&mut doc, "/3", json!(4), &opts).unwrap();
        assert_eq!(doc, json!([1, null, null, 4]));
    }

    #[test]
    fn test_set_array_invalid_token() {
        let mut doc = json!({"a": [1]});
        assert_eq!(
            set(&mut doc, "/a/name", json!(1)),
            Err(JsonPointerError::InvalidIndex)
        );
        assert_eq!(doc, json!({"a": [1]}));
    }

    #[test]
    fn test_set_refuses_scalar_on_path() {
        let mut doc = json!({"a": 5});
        assert_eq!(
            set(&mut doc, "/a/b", json!(1)),
            Err(JsonPointerError::ValueIsScalar)
        );
        assert_eq!(doc, json!({"a": 5}));
    }

    #[test]
    fn test_set_replaces_scalar_when_allowed() {
        let mut doc = json!({"a": 5});
        let opts = SetOptions::default().with_replace_scalars(true);
        set_at_pointer(&mut doc, "/a/b", json!(1), &opts).unwrap();
        assert_eq!(doc, json!({"a": {"b": 1}}));
    }

    #[test]
    fn test_set_without_array_creation_uses_objects() {
        let mut doc = Value::Null;
        let opts = SetOptions::default().with_create_arrays(false);
        set_at_pointer(&mut doc, "/list/0", json!("x"), &opts).unwrap();
        assert_eq!(doc, json!({"list": {"0": "x"}}));
    }

    #[test]
    fn test_set_without_creation_fails_untouched() {
        let mut doc = json!({"a": null});
        let opts = SetOptions::default()
            .with_create_arrays(false)
            .with_create_objects(false);
        assert_eq!(
            set_at_pointer(&mut doc, "/a/b", json!(1), &opts).map(|v| v.clone()),
            Err(JsonPointerError::NotFound)
        );
        assert_eq!(doc, json!({"a": null}));
    }

    #[test]
    fn test_set_deep_failure_leaves_document_untouched() {
        let mut doc = json!({"keep": 1});
        assert_eq!(
            set(&mut doc, "/new/5", json!(1)),
            Err(JsonPointerError::IndexOutOfRange)
        );
        assert_eq!(doc, json!({"keep": 1}));
    }

    #[test]
    fn test_created_kind() {
        let built = build(&["a".to_string(), "0".to_string()], json!(1), &SetOptions::default()).unwrap();
        assert_eq!(created_kind(&built), "object");
        assert_eq!(created_kind(&built["a"]), "array");
        assert_eq!(created_kind(&built["a"][0]), "value");
    }

    #[test]
    fn test_descend_past_the_end_token_reaches_last_element() {
        let mut doc = Value::Null;
        set(&mut doc, "/a/-", json!(1)).unwrap();
        set(&mut doc, "/a/-", json!(2)).unwrap();
        assert_eq!(doc, json!({"a": [1, 2]}));

        let mut nested = json!({"a": [0]});
        let slot = set_at_pointer(&mut nested, "/a/-/b/-", json!("x"), &SetOptions::default()).unwrap();
        assert_eq!(*slot, json!("x"));
        assert_eq!(nested, json!({"a": [0, {"b": ["x"]}]}));
    }

    #[test]
    fn test_set_returns_slot_reference() {
        let mut doc = Value::Null;
        let slot = set_at_pointer(&mut doc, "/a/-/b", json!(1), &SetOptions::default()).unwrap();
        *slot = json!(2);
        assert_eq!(doc, json!({"a": [{"b": 2}]}));
    }
}
