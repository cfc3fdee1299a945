//! The value parameter of `write` and `emplace`.
//!
//! A single [`Settable`] covers the three ways a slot can be assigned: moving
//! a value in, copying from a borrow, or storing JSON `null`.

use serde::Serialize;
use serde_json::Value;

/// A value ready to be stored at an accessor's path.
#[derive(Debug, Clone, PartialEq)]
pub enum Settable<'a, T> {
    Owned(T),
    Borrowed(&'a T),
    Null,
}

impl<T: Serialize> Settable<'_, T> {
    /// Convert into the JSON value that will be stored.
    ///
    /// # Errors
    ///
    /// Whatever `serde_json::to_value` reports for `T`, e.g. a map with
    /// non-string keys.
    pub fn into_json(self) -> Result<Value, serde_json::Error> {
        match self {
            Settable::Owned(value) => serde_json::to_value(value),
            Settable::Borrowed(value) => serde_json::to_value(value),
            Settable::Null => Ok(Value::Null),
        }
    }
}

/// Explicit JSON `null`, accepted by `write` and `emplace` for any accessor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct JsonNull;

/// Conversion into a [`Settable`] for an accessor whose type is `T`.
pub trait IntoSettable<'a, T> {
    fn into_settable(self) -> Settable<'a, T>;
}

impl<'a, T: Serialize> IntoSettable<'a, T> for T {
    fn into_settable(self) -> Settable<'a, T> {
        Settable::Owned(self)
    }
}

impl<'a, T: Serialize> IntoSettable<'a, T> for &'a T {
    fn into_settable(self) -> Settable<'a, T> {
        Settable::Borrowed(self)
    }
}

impl<'a> IntoSettable<'a, String> for &str {
    fn into_settable(self) -> Settable<'a, String> {
        Settable::Owned(self.to_owned())
    }
}

impl<'a, T> IntoSettable<'a, T> for JsonNull {
    fn into_settable(self) -> Settable<'a, T> {
        Settable::Null
    }
}

/// `None` stores `null`.
impl<'a, T> IntoSettable<'a, T> for Option<T> {
    fn into_settable(self) -> Settable<'a, T> {
        match self {
            Some(value) => Settable::Owned(value),
            None => Settable::Null,
        }
    }
}

impl<'a, T> IntoSettable<'a, T> for Settable<'a, T> {
    fn into_settable(self) -> Settable<'a, T> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn to_json<'a, V: IntoSettable<'a, Vec<String>>>(value: V) -> Value {
        value.into_settable().into_json().unwrap()
    }

    #[test]
    fn test_owned_borrowed_and_null() {
        let langs = vec!["Rust".to_string(), "C++".to_string()];
        assert_eq!(to_json(&langs), json!(["Rust", "C++"]));
        assert_eq!(to_json(langs), json!(["Rust", "C++"]));
        assert_eq!(to_json(JsonNull), Value::Null);
    }

    #[test]
    fn test_option() {
        assert_eq!(to_json(Some(vec!["a".to_string()])), json!(["a"]));
        assert_eq!(to_json(None), Value::Null);
    }

    #[test]
    fn test_settable_passthrough() {
        assert_eq!(to_json(Settable::Null), Value::Null);
        assert_eq!(to_json(Settable::Owned(vec![])), json!([]));
    }

    #[test]
    fn test_str_for_string() {
        fn name<'a, V: IntoSettable<'a, String>>(value: V) -> Value {
            value.into_settable().into_json().unwrap()
        }

        assert_eq!(name("Alice"), json!("Alice"));
        assert_eq!(name(&"Bob".to_string()), json!("Bob"));
        assert_eq!(name(JsonNull), Value::Null);
    }

    #[test]
    fn test_conversion_error_surfaces() {
        use std::collections::BTreeMap;

        let mut map = BTreeMap::new();
        map.insert(vec![1u8], 1);
        assert!(Settable::Owned(map).into_json().is_err());
    }
}
