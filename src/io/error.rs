//! Error types for generation, export and persistence

use std::fmt;
use std::path::PathBuf;

/// Why a persistence operation failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceFailure {
    /// Record names must contain at least one non-whitespace character
    EmptyName,
    /// No record is stored under the requested name
    NotFound,
    /// The stored data could not be decoded
    Malformed {
        /// Decoder message
        reason: String,
    },
}

impl fmt::Display for PersistenceFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => f.write_str("pattern name is empty"),
            Self::NotFound => f.write_str("no saved pattern with that name"),
            Self::Malformed { reason } => write!(f, "stored data is malformed: {reason}"),
        }
    }
}

/// Main error type for all engine operations
#[derive(Debug)]
pub enum EngineError {
    /// A required output surface could not be set up
    Initialization {
        /// Description of the missing surface
        reason: String,
    },

    /// Pattern selector does not name one of the builders
    UnknownPatternKind {
        /// Selector value that failed to match
        name: String,
    },

    /// Canvas extent is non-positive, non-finite or too large
    InvalidDimensions {
        /// Requested width in physical units
        width: f64,
        /// Requested height in physical units
        height: f64,
        /// Explanation of why the extent was rejected
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Export was requested in a state that cannot produce output
    ExportPrecondition {
        /// Description of the unmet precondition
        reason: String,
    },

    /// The intermediate image resource of a raster export failed to load
    ResourceLoad {
        /// Description of the load failure
        reason: String,
    },

    /// Saving, loading or deleting a named pattern failed
    Persistence {
        /// Record name involved
        name: String,
        /// What went wrong
        failure: PersistenceFailure,
    },

    /// Encoding a raster image failed
    ImageEncode {
        /// Target format name
        format: &'static str,
        /// Underlying encoder error
        source: image::ImageError,
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

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initialization { reason } => write!(f, "Initialization failed: {reason}"),
            Self::UnknownPatternKind { name } => write!(f, "Unknown pattern type: '{name}'"),
            Self::InvalidDimensions {
                width,
                height,
                reason,
            } => write!(f, "Invalid canvas dimensions {width}x{height}: {reason}"),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}"),
            Self::ExportPrecondition { reason } => write!(f, "Cannot export: {reason}"),
            Self::ResourceLoad { reason } => {
                write!(f, "Failed to load scene for image export: {reason}")
            }
            Self::Persistence { name, failure } => {
                write!(f, "Pattern store error for '{name}': {failure}")
            }
            Self::ImageEncode { format, source } => {
                write!(f, "Failed to encode {format} image: {source}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => write!(
                f,
                "File system error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageEncode { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for engine results
pub type Result<T> = std::result::Result<T, EngineError>;

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        Self::Persistence {
            name: String::from("<store>"),
            failure: PersistenceFailure::Malformed {
                reason: err.to_string(),
            },
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> EngineError {
    EngineError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an export precondition error
pub fn export_precondition(reason: &impl ToString) -> EngineError {
    EngineError::ExportPrecondition {
        reason: reason.to_string(),
    }
}

/// Create a resource load error
pub fn resource_load(reason: &impl ToString) -> EngineError {
    EngineError::ResourceLoad {
        reason: reason.to_string(),
    }
}

/// Create a persistence error for a named record
pub fn persistence_error(name: &str, failure: PersistenceFailure) -> EngineError {
    EngineError::Persistence {
        name: name.to_string(),
        failure,
    }
}

/// Attach a path and operation to an I/O error
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> EngineError {
    let path = path.into();
    move |source| EngineError::FileSystem {
        path,
        operation,
        source,
    }
}
