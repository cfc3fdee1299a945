use crate::validate::validate_json_pointer;
use crate::JsonPointerError;

/// Unescapes a JSON Pointer reference token.
///
/// `~1` becomes `/` and `~0` becomes `~`. Invalid escapes are left as they
/// are; use [`parse_json_pointer`] when the input has not been validated.
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // ~1 first, so that "~01" decodes to "~1" and not "/"
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes a string so it can be used as a single reference token.
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

/// Parse a JSON Pointer string into unescaped reference tokens.
///
/// The empty pointer is the root and yields no tokens. `"/"` yields a
/// single empty token.
///
/// # Errors
///
/// Returns the error from [`validate_json_pointer`] for a pointer without a
/// leading `/` or with a `~` not followed by `0` or `1`.
pub fn parse_json_pointer(pointer: &str) -> Result<Vec<String>, JsonPointerError> {
    validate_json_pointer(pointer)?;
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    Ok(pointer[1..].split('/').map(unescape_component).collect())
}

/// Check if a token is a valid array index: ASCII digits without a leading
/// zero, except for `"0"` itself.
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}

/// Parse an array index token.
///
/// `-` is reported separately since reading and writing treat it differently.
pub(crate) fn parse_index(token: &str) -> Result<usize, JsonPointerError> {
    if !is_valid_index(token) {
        return Err(JsonPointerError::InvalidIndex);
    }
    token.parse().map_err(|_| JsonPointerError::InvalidIndex)
}
