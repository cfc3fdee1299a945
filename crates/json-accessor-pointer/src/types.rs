//! Type definitions for JSON Pointer.

/// Controls how [`set_at_pointer`](crate::set_at_pointer) extends a document
/// when the pointer runs past the existing structure.
///
/// The default creates objects and arrays in place of missing or `null`
/// slots, refuses to overwrite non-null scalars, and only allows appending
/// to arrays (no padding).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetOptions {
    /// Turn a missing or `null` slot into an object when the next token is a
    /// member name.
    pub create_objects: bool,
    /// Turn a missing or `null` slot into an array when the next token is
    /// `-` or an array index.
    pub create_arrays: bool,
    /// Replace non-null scalars on the path as if they were `null`.
    pub replace_scalars: bool,
    /// How many `null` elements may be inserted to reach an index past the
    /// end of an array.
    pub max_created_elements: usize,
}

impl Default for SetOptions {
    fn default() -> Self {
        Self {
            create_objects: true,
            create_arrays: true,
            replace_scalars: false,
            max_created_elements: 0,
        }
    }
}

impl SetOptions {
    pub fn with_create_objects(mut self, create_objects: bool) -> Self {
        self.create_objects = create_objects;
        self
    }

    pub fn with_create_arrays(mut self, create_arrays: bool) -> Self {
        self.create_arrays = create_arrays;
        self
    }

    pub fn with_replace_scalars(mut self, replace_scalars: bool) -> Self {
        self.replace_scalars = replace_scalars;
        self
    }

    pub fn with_max_created_elements(mut self, max_created_elements: usize) -> Self {
        self.max_created_elements = max_created_elements;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = SetOptions::default();
        assert!(opts.create_objects);
        assert!(opts.create_arrays);
        assert!(!opts.replace_scalars);
        assert_eq!(opts.max_created_elements, 0);
    }

    #[test]
    fn test_builder_chain() {
        let opts = SetOptions::default()
            .with_create_arrays(false)
            .with_replace_scalars(true)
            .with_max_created_elements(4);
        assert!(opts.create_objects);
        assert!(!opts.create_arrays);
        assert!(opts.replace_scalars);
        assert_eq!(opts.max_created_elements, 4);
    }
}
