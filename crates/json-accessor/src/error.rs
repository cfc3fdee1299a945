use json_accessor_pointer::JsonPointerError;
use thiserror::Error;

/// Failure of an accessor operation.
///
/// Both variants are transparent: the message is the one produced by the
/// pointer layer or by `serde_json`.
#[derive(Debug, Error)]
pub enum AccessError {
    /// The path did not resolve, or could not be created.
    #[error(transparent)]
    Pointer(#[from] JsonPointerError),
    /// The value at the path does not convert to or from the declared type.
    #[error(transparent)]
    Convert(#[from] serde_json::Error),
}

impl AccessError {
    /// The pointer error, if this is a resolution failure.
    pub fn pointer_error(&self) -> Option<&JsonPointerError> {
        match self {
            Self::Pointer(err) => Some(err),
            Self::Convert(_) => None,
        }
    }
}
