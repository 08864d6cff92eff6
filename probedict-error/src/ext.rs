use std::{any::Any, error::Error};

use crate::StatusCode;

/// Extension trait for library errors (object-safe).
///
/// Gives every error a status code, a message that is safe to show to the
/// caller and a short type name for logs.
pub trait ErrorExt: Error + Send + Sync + 'static {
    /// Status code of the error. Defaults to [`StatusCode::Internal`].
    fn status_code(&self) -> StatusCode {
        StatusCode::Internal
    }

    /// Returns the error as [`Any`] so it can be downcast to a concrete type.
    fn as_any(&self) -> &dyn Any;

    /// Message suitable for the caller.
    ///
    /// Internal errors are reported as `"Internal error"` without details.
    fn client_message(&self) -> String {
        if self.status_code().is_internal() {
            "Internal error".to_string()
        } else {
            self.to_string()
        }
    }

    /// Detailed message for logs.
    fn log_message(&self) -> String {
        format!("{self:?}")
    }

    /// Short type name of the error.
    fn type_name(&self) -> String {
        std::any::type_name::<Self>()
            .split("::")
            .last()
            .unwrap_or("Unknown")
            .to_string()
    }
}
