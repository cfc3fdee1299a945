//! Declaration macros.
//!
//! A tag can be declared and bound in one step with
//! [`json_accessor!`](crate::json_accessor), or in two steps:
//! [`declare_json_accessor!`](crate::declare_json_accessor) emits the tag type
//! and [`define_json_accessor!`](crate::define_json_accessor) binds it to a
//! type and path, possibly from another module. A declared tag that was
//! never defined is a valid type but is rejected by every accessor operation
//! at compile time.

/// Declare tag types and bind each one to a value type and JSON Pointer.
///
/// Attributes and doc comments on an entry are forwarded to the tag struct.
///
/// # Example
///
/// ```
/// use json_accessor::{json_accessor, read, write};
/// use serde_json::json;
///
/// json_accessor! {
///     /// Display name of the current user.
///     pub UserName: String = "/user/name";
///     pub UserAge: u32 = "/user/age";
/// }
///
/// let mut doc = json!({"user": {"name": "Alice", "age": 23}});
/// assert_eq!(read(&doc, UserName), "Alice");
/// assert!(write(&mut doc, UserAge, 24u32).unwrap());
/// assert_eq!(read(&doc, UserAge), 24);
/// ```
#[macro_export]
macro_rules! json_accessor {
    ($( $(#[$meta:meta])* $vis:vis $tag:ident : $ty:ty = $path:expr; )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            $vis struct $tag;

            impl $crate::JsonAccessor for $tag {
                type Value = $ty;
                const PATH: &'static str = $path;
            }
        )*
    };
}

/// Declare tag types without binding them.
///
/// # Example
///
/// ```
/// mod tags {
///     json_accessor::declare_json_accessor! {
///         pub Theme;
///     }
/// }
///
/// json_accessor::define_json_accessor! {
///     tags::Theme: String = "/settings/theme";
/// }
///
/// assert_eq!(json_accessor::path(tags::Theme), "/settings/theme");
/// ```
#[macro_export]
macro_rules! declare_json_accessor {
    ($( $(#[$meta:meta])* $vis:vis $tag:ident; )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            $vis struct $tag;
        )*
    };
}

/// Bind previously declared tag types to a value type and JSON Pointer.
#[macro_export]
macro_rules! define_json_accessor {
    ($( $tag:ty : $ty:ty = $path:expr; )*) => {
        $(
            impl $crate::JsonAccessor for $tag {
                type Value = $ty;
                const PATH: &'static str = $path;
            }
        )*
    };
}
