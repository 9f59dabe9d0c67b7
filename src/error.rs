//! Error types for path evaluation
//!
//! Every failure is fatal to the call that raised it; there are no partial
//! results. Empty result sets are values, not errors.
//!
//! # Error Categories
//!
//! - `InvalidInput` - an entry term is missing, of the wrong kind, or malformed
//! - `NoPathFound` - the path graph declares no `sh:path` / `tree:path`
//! - `DepthExceeded` - the path expression nests deeper than the configured limit
//!
//! # Example
//!
//! ```rust
//! use shacl_path::{evaluate_path, ErrorCode, Triple};
//!
//! let err = evaluate_path(Vec::<Triple>::new(), Vec::<Triple>::new(), "http://ex.org/5", None)
//!     .unwrap_err();
//! assert_eq!(err.code(), ErrorCode::NoPathFound);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Error Codes
// ============================================================================

/// Unique error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Entry term absent, of the wrong kind, or unparsable
    InvalidInput = 1000,
    /// No path declaration reachable from the entry
    NoPathFound = 2000,
    /// Path expression nesting exceeded the depth limit
    DepthExceeded = 3000,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Get a short description of the error code
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "Invalid input",
            ErrorCode::NoPathFound => "No path declaration found",
            ErrorCode::DepthExceeded => "Path expression too deep",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

// ============================================================================
// Main Error Type
// ============================================================================

/// Errors raised by path location and evaluation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// An entry term could not be coerced into a node term
    #[error("invalid {role}: {reason}")]
    InvalidInput {
        /// Which argument was rejected (`object entry`, `path entry`)
        role: &'static str,
        reason: String,
    },

    /// Neither `sh:path` nor `tree:path` is declared for the entry
    #[error("no path declaration found{}", entry_suffix(.entry))]
    NoPathFound {
        /// The path entry that was searched, if any
        entry: Option<String>,
    },

    /// The path graph nests deeper than the configured limit, usually a cycle
    #[error("path expression exceeds the nesting limit of {limit} at {node}")]
    DepthExceeded {
        limit: usize,
        /// The path graph node being interpreted when the limit was hit
        node: String,
    },
}

impl PathError {
    /// Create an invalid input error
    pub fn invalid_input(role: &'static str, reason: impl Into<String>) -> Self {
        PathError::InvalidInput {
            role,
            reason: reason.into(),
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            PathError::InvalidInput { .. } => ErrorCode::InvalidInput,
            PathError::NoPathFound { .. } => ErrorCode::NoPathFound,
            PathError::DepthExceeded { .. } => ErrorCode::DepthExceeded,
        }
    }

    /// Structured report of this error
    pub fn report(&self) -> ErrorReport {
        ErrorReport::from(self)
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        self.report().to_json()
    }
}

fn entry_suffix(entry: &Option<String>) -> String {
    match entry {
        Some(entry) => format!(" for {}", entry),
        None => String::new(),
    }
}

/// A Result type using PathError
pub type PathResult<T> = Result<T, PathError>;

// ============================================================================
// Error report
// ============================================================================

/// Serializable summary of a [`PathError`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Error code
    pub code: ErrorCode,
    /// Numeric error code
    pub code_num: u32,
    /// Error message
    pub message: String,
}

impl From<&PathError> for ErrorReport {
    fn from(err: &PathError) -> Self {
        let code = err.code();
        Self {
            code,
            code_num: code.code(),
            message: err.to_string(),
        }
    }
}

impl ErrorReport {
    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"code_num":{},"message":"{}"}}"#, self.code_num, self.message)
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
