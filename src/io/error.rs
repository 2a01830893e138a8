//! Error types and context management for grid and autotiling operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all autotiling operations
#[derive(Debug)]
pub enum AutotileError {
    /// Grid constructed with a zero-sized axis
    InvalidDimension {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },

    /// Query or stroke origin addressed outside the valid range
    ///
    /// `rows` and `cols` describe the exclusive upper limits that were
    /// violated: the cell grid for queries and corner strokes, the vertex
    /// lattice (`rows + 1`, `cols + 1`) for vertex strokes.
    OutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Exclusive row limit
        rows: usize,
        /// Exclusive column limit
        cols: usize,
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Stroke script line could not be understood
    ScriptParse {
        /// 1-based line number in the script
        line: usize,
        /// Description of the problem
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for AutotileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { rows, cols } => {
                write!(
                    f,
                    "Invalid grid dimensions {rows}x{cols}: both axes must be positive"
                )
            }
            Self::OutOfBounds {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "Position ({row}, {col}) is out of bounds (limits {rows}x{cols})"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ScriptParse { line, reason } => {
                write!(f, "Stroke script error on line {line}: {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for AutotileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for autotiling results
pub type Result<T> = std::result::Result<T, AutotileError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Script line being replayed when the error occurred
    pub line: Option<usize>,
    /// File being processed
    pub path: Option<PathBuf>,
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Enriches error messages with replay state information
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the script line context
    ///
    /// # Errors
    ///
    /// Propagates the original error with the line context applied
    fn with_line(self, line: usize) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<AutotileError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let error = e.into();
            match error {
                // Grid failures during replay are reported against the script line
                AutotileError::OutOfBounds { .. } | AutotileError::InvalidParameter { .. } => {
                    match context.line {
                        Some(line) => AutotileError::ScriptParse {
                            line,
                            reason: error.to_string(),
                        },
                        None => error,
                    }
                }
                AutotileError::FileSystem {
                    path,
                    operation,
                    source,
                } => AutotileError::FileSystem {
                    path: context.path.unwrap_or(path),
                    operation: context.operation.unwrap_or(operation),
                    source,
                },
                other => other,
            }
        })
    }

    fn with_line(self, line: usize) -> Result<T> {
        self.with_context(ErrorContext {
            line: Some(line),
            ..Default::default()
        })
    }
}

impl From<std::io::Error> for AutotileError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AutotileError {
    AutotileError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an out-of-bounds error against the given exclusive limits
pub const fn out_of_bounds(row: usize, col: usize, rows: usize, cols: usize) -> AutotileError {
    AutotileError::OutOfBounds {
        row,
        col,
        rows,
        cols,
    }
}

/// Create a path validation error for CLI targets
pub fn io_error(msg: &str) -> AutotileError {
    AutotileError::InvalidParameter {
        parameter: "path",
        value: String::new(),
        reason: msg.to_string(),
    }
}
