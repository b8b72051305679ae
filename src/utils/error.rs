use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("{message}")]
    UsageError { message: String },

    #[error("Error reading input file '{path}': {source}")]
    InputReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing JSON: {0}")]
    DecodeError(#[source] serde_json::Error),

    #[error("Error creating JSON output: {0}")]
    EncodeError(#[source] serde_json::Error),

    #[error("Error writing output file '{path}': {source}")]
    OutputWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Input,
    Data,
    Output,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::UsageError { .. } | EtlError::InvalidConfigValueError { .. } => {
                ErrorCategory::Usage
            }
            EtlError::InputReadError { .. } => ErrorCategory::Input,
            EtlError::DecodeError(_) | EtlError::EncodeError(_) => ErrorCategory::Data,
            EtlError::OutputWriteError { .. } => ErrorCategory::Output,
        }
    }

    /// One-line diagnostic for the console.
    pub fn user_friendly_message(&self) -> String {
        self.to_string()
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Usage => "Run with exactly two arguments: <INPUT> <OUTPUT>",
            ErrorCategory::Input => "Check that the input file exists and is readable",
            ErrorCategory::Data => "Make sure the input is a JSON array of product objects",
            ErrorCategory::Output => "Check that the output directory exists and is writable",
        }
    }

    /// Every failure is terminal and reported the same way.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Keeps clap's rendered diagnostic, usage line included.
#[cfg(feature = "cli")]
impl From<clap::Error> for EtlError {
    fn from(err: clap::Error) -> Self {
        EtlError::UsageError {
            message: err.to_string().trim_end().to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_read_error_names_path_and_cause() {
        let err = EtlError::InputReadError {
            path: "missing.json".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };

        assert_eq!(
            err.user_friendly_message(),
            "Error reading input file 'missing.json': not found"
        );
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_decode_error_category() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = EtlError::DecodeError(json_err);

        assert!(err.to_string().starts_with("Error parsing JSON: "));
        assert_eq!(err.category(), ErrorCategory::Data);
        assert_eq!(err.exit_code(), 1);
    }
}
