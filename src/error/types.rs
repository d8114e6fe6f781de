//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for argtable commands
///
/// Parsing and lookups never fail; these cover the command layer around them.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ArgTableError {
    /// Usage Error - invalid options given to the command
    #[error("Usage error: {message}")]
    Usage { message: String },

    /// Serialization Error - a table could not be rendered
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl ArgTableError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Usage { .. } => 1,
            Self::Serialization { .. } => 2,
        }
    }

    /// Create a usage error
    #[inline]
    pub fn usage<S: Into<String>>(message: S) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Create a serialization error
    #[inline]
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(ArgTableError::usage("bad").exit_code(), 1);
        assert_eq!(ArgTableError::serialization("bad").exit_code(), 2);
    }

    #[test]
    fn display_includes_kind() {
        let err = ArgTableError::usage("Invalid format: xml");
        assert_eq!(err.to_string(), "Usage error: Invalid format: xml");
    }
}
