//! Error handling for name-forge

use thiserror::Error;

/// Main error type for name-forge
#[derive(Error, Debug, Clone)]
pub enum NameForgeError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Pattern error: {message}")]
    Pattern { message: String },
}

impl NameForgeError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a pattern error
    pub fn pattern(message: impl Into<String>) -> Self {
        Self::Pattern {
            message: message.into(),
        }
    }
}

impl From<regex::Error> for NameForgeError {
    fn from(err: regex::Error) -> Self {
        Self::pattern(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, NameForgeError>;

/// Helper macro for common error patterns
#[macro_export]
macro_rules! validation_error {
    ($msg:expr) => {
        $crate::error::NameForgeError::validation($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::NameForgeError::validation(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructors() {
        let err = NameForgeError::validation("needs at least two words");
        assert!(err.to_string().contains("needs at least two words"));

        let err = NameForgeError::pattern("bad expression");
        assert!(err.to_string().contains("Pattern error"));
    }

    #[test]
    fn test_regex_error_conversion() {
        let bad = regex::Regex::new("(unclosed");
        let err: NameForgeError = bad.unwrap_err().into();
        assert!(matches!(err, NameForgeError::Pattern { .. }));
    }

    #[test]
    fn test_error_macro() {
        let err = crate::validation_error!("expected {} words, got {}", 2, 1);
        assert!(err.to_string().contains("expected 2 words, got 1"));
    }
}
