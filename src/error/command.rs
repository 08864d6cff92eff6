use std::any::Any;

use probedict_error::{ErrorExt, StatusCode};
use thiserror::Error;

/// Errors produced while parsing a console line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error("{0} requires {1} argument(s)")]
    WrongArgCount(&'static str, usize),
}

impl ErrorExt for CommandError {
    fn status_code(&self) -> StatusCode {
        StatusCode::InvalidCommand
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use probedict_error::StackError;

    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(CommandError::Empty.to_string(), "empty command");
        assert_eq!(
            CommandError::Unknown("SET".into()).to_string(),
            "unknown command 'SET'"
        );
        assert_eq!(
            CommandError::WrongArgCount("PUT", 2).to_string(),
            "PUT requires 2 argument(s)"
        );
    }

    #[test]
    fn test_is_client_error() {
        let err = CommandError::Unknown("FLUSH".into());
        assert_eq!(err.status_code(), StatusCode::InvalidCommand);
        assert!(err.status_code().is_client_error());
        assert_eq!(err.client_message(), "unknown command 'FLUSH'");

        let stacked = StackError::from(err.clone());
        assert_eq!(stacked.downcast_ref::<CommandError>(), Some(&err));
    }
}
