use std::any::Any;

use thiserror::Error;

use crate::{ErrorExt, StatusCode};

/// Errors raised while constructing a dictionary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DictError {
    /// Initial capacity below zero.
    #[error("Capacity must be >= 0, got {capacity}")]
    NegativeCapacity { capacity: i64 },
    /// Load threshold outside of `(0, 1]`.
    #[error("Load threshold must be in (0, 1], got {threshold}")]
    InvalidLoadThreshold { threshold: f64 },
}

/// Errors raised while constructing an unordered set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetError {
    #[error("Set capacity must be >= 0, got {capacity}")]
    NegativeCapacity { capacity: i64 },
}

impl ErrorExt for DictError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NegativeCapacity { .. } | Self::InvalidLoadThreshold { .. } => {
                StatusCode::InvalidArgs
            }
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl ErrorExt for SetError {
    fn status_code(&self) -> StatusCode {
        StatusCode::InvalidArgs
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dict_error_messages() {
        let err = DictError::NegativeCapacity { capacity: -4 };
        assert_eq!(err.to_string(), "Capacity must be >= 0, got -4");
        assert_eq!(err.status_code(), StatusCode::InvalidArgs);

        let err = DictError::InvalidLoadThreshold { threshold: 1.5 };
        assert!(err.to_string().contains("1.5"));
        assert_eq!(err.client_message(), err.to_string());
    }

    #[test]
    fn test_set_error_is_client_error() {
        let err = SetError::NegativeCapacity { capacity: -1 };
        assert!(err.status_code().is_client_error());
        assert_eq!(err.type_name(), "SetError");
    }
}
