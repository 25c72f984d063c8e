//! Unified error types for spdx-snapshot.
//!
//! The error surface is narrow by design: documents either parse or they
//! don't, and purl resolution is a total function with no error path at all.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for spdx-snapshot operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SnapshotError {
    /// Errors while parsing an SPDX document
    #[error("Failed to parse SPDX document: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// IO errors with path context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Errors while submitting a snapshot
    #[error("Snapshot submission failed: {context}")]
    Submit {
        context: String,
        #[source]
        source: SubmitErrorKind,
    },
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Not an SPDX JSON document: {0}")]
    NotSpdx(String),

    #[error("Document too large: {size} bytes (limit {limit})")]
    TooLarge { size: u64, limit: u64 },
}

/// Specific submission error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SubmitErrorKind {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API returned error status {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Missing credentials: {0}")]
    MissingCredentials(String),
}

/// Convenient Result type for spdx-snapshot operations
pub type Result<T> = std::result::Result<T, SnapshotError>;

impl SnapshotError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a submission error
    pub fn submit(context: impl Into<String>, source: SubmitErrorKind) -> Self {
        Self::Submit {
            context: context.into(),
            source,
        }
    }
}

impl From<std::io::Error> for SnapshotError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "JSON deserialization",
            ParseErrorKind::InvalidJson(err.to_string()),
        )
    }
}

/// Extension trait for adding context to errors.
///
/// The context string is prepended to the error's existing context,
/// creating a chain that shows the path through the code.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (lazy evaluation).
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<SnapshotError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: SnapshotError, new_ctx: &str) -> SnapshotError {
    match err {
        SnapshotError::Parse {
            context: existing,
            source,
        } => SnapshotError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        SnapshotError::Io {
            path,
            message,
            source,
        } => SnapshotError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        SnapshotError::Config(msg) => SnapshotError::Config(chain_context(new_ctx, &msg)),
        SnapshotError::Submit {
            context: existing,
            source,
        } => SnapshotError::Submit {
            context: chain_context(new_ctx, &existing),
            source,
        },
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SnapshotError::parse(
            "at sbom.spdx.json",
            ParseErrorKind::InvalidJson("unexpected EOF".to_string()),
        );
        let display = err.to_string();
        assert!(
            display.contains("parse") || display.contains("SPDX"),
            "Error message should mention parsing or SPDX: {}",
            display
        );
    }

    #[test]
    fn test_io_error_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = SnapshotError::io("/path/to/sbom.json", io_err);

        assert!(err.to_string().contains("/path/to/sbom.json"));
    }

    #[test]
    fn test_context_chaining() {
        let initial_err: Result<()> = Err(SnapshotError::parse(
            "initial context",
            ParseErrorKind::NotSpdx("no packages field".to_string()),
        ));

        let err_with_context = initial_err.context("outer context");

        match err_with_context {
            Err(SnapshotError::Parse { context, .. }) => {
                assert!(context.contains("outer context"), "context: {}", context);
                assert!(context.contains("initial context"), "context: {}", context);
            }
            _ => panic!("Expected Parse error"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;

        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called, "Closure should not be called for Ok result");

        let err_result: Result<i32> = Err(SnapshotError::config("bad pattern"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called, "Closure should be called for Err result");
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("new", "existing"), "new: existing");
    }
}
