//! Validation functions for JSON Pointer.

use crate::JsonPointerError;

/// Validate a JSON Pointer string.
///
/// # Errors
///
/// - `JsonPointerError::PointerInvalid` if the pointer is non-empty and
///   doesn't start with `/`
/// - `JsonPointerError::InvalidEscape` if a `~` is not followed by `0` or `1`
///
/// # Example
///
/// ```
/// use json_accessor_pointer::validate_json_pointer;
///
/// validate_json_pointer("").unwrap();  // Root is valid
/// validate_json_pointer("/foo/bar").unwrap();
/// validate_json_pointer("foo").unwrap_err();  // Missing leading /
/// validate_json_pointer("/a~2b").unwrap_err();
/// ```
pub fn validate_json_pointer(pointer: &str) -> Result<(), JsonPointerError> {
    if pointer.is_empty() {
        return Ok(());
    }
    if !pointer.starts_with('/') {
        return Err(JsonPointerError::PointerInvalid);
    }
    let mut bytes = pointer.bytes();
    while let Some(b) = bytes.next() {
        if b == b'~' && !matches!(bytes.next(), Some(b'0' | b'1')) {
            return Err(JsonPointerError::InvalidEscape);
        }
    }
    Ok(())
}
