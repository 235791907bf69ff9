use crate::selector::SelectorError;
use crate::validation::ValidationError;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Failures of the persistence layer.
///
/// `Read` and `Decode` are the read-side failures, `Write` and `Encode` the write-side
/// ones. `TimedOut` means a read did not finish within the configured bound.
/// `Unavailable` is reported by backends that are not file-based.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Cannot read user store {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("User store {} is not a valid user collection", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot write user store {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot encode user collection")]
    Encode(#[source] serde_json::Error),

    #[error("Timed out after {0:?} reading the user store")]
    TimedOut(Duration),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// The mutation that failed, used for the user-facing `OperationFailed` message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Add,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verb = match self {
            Operation::List => "load users",
            Operation::Add => "add user",
            Operation::Delete => "delete user",
        };
        f.write_str(verb)
    }
}

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Invalid user: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Failed to {operation}")]
    OperationFailed {
        operation: Operation,
        #[source]
        cause: StoreError,
    },

    #[error(transparent)]
    Selector(#[from] SelectorError),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("No delete is pending confirmation")]
    NothingToConfirm,

    #[error("Another change is still being saved")]
    MutationInFlight,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RosterError {
    pub fn operation_failed(operation: Operation, cause: StoreError) -> Self {
        RosterError::OperationFailed { operation, cause }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
