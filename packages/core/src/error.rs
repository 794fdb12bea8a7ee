use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimekeepError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Records file {path:?} is malformed: {source}")]
    MalformedStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Refusing to overwrite {path:?}: it could not be loaded this session")]
    SaveBlocked { path: PathBuf },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type TimekeepResult<T> = Result<T, TimekeepError>;

/// How loudly an error should be surfaced to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
}

impl TimekeepError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Severity used when the error is shown as a notice
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TimekeepError::MalformedStore { .. } | TimekeepError::Config(_) => {
                ErrorSeverity::Warning
            }
            TimekeepError::Io(_)
            | TimekeepError::Serialization(_)
            | TimekeepError::SaveBlocked { .. } => ErrorSeverity::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_mapping() {
        let io = TimekeepError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(io.severity(), ErrorSeverity::Error);
        assert_eq!(
            TimekeepError::config("bad interval").severity(),
            ErrorSeverity::Warning
        );
    }

    #[test]
    fn test_malformed_store_message() {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = TimekeepError::MalformedStore {
            path: PathBuf::from("time_records.json"),
            source,
        };
        assert!(err.to_string().contains("time_records.json"));
        assert!(err.to_string().contains("malformed"));
        assert_eq!(err.severity(), ErrorSeverity::Warning);
    }
}
