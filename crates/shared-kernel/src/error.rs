// crates/shared-kernel/src/error.rs
use std::{fmt, num::ParseIntError, path::PathBuf};

use thiserror::Error;

use crate::Inches;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum PanelOrderError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<PanelOrderError>,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

impl PanelOrderError {
    /// Returns the order error at the bottom of a context chain, if any.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Self::Context { source, .. } => source.as_domain(),
            Self::Domain(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PanelOrderError>;

/// Which half of a feet-and-inches expression failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthComponent {
    Feet,
    Inches,
}

impl fmt::Display for LengthComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Feet => f.write_str("feet"),
            Self::Inches => f.write_str("inches"),
        }
    }
}

/// Failure to resolve a length expression into inches.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LengthParseError {
    #[error("invalid {component} '{input}': {source}")]
    InvalidNumber {
        component: LengthComponent,
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("length '{input}' is out of range")]
    OutOfRange { input: String },
}

impl LengthParseError {
    pub fn component(&self) -> Option<LengthComponent> {
        match self {
            Self::InvalidNumber { component, .. } => Some(*component),
            Self::OutOfRange { .. } => None,
        }
    }
}

/// Order errors. The first one encountered aborts the whole batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid format in line {line_number}: '{line}' (use: quantity @ length)")]
    InvalidFormat { line_number: usize, line: String },

    #[error("Invalid quantity '{quantity}' in line {line_number}")]
    InvalidQuantity { line_number: usize, quantity: String },

    #[error("Invalid length '{length}' in line {line_number}: {source}")]
    InvalidLength {
        line_number: usize,
        length: String,
        #[source]
        source: LengthParseError,
    },

    #[error("Panel count at {length:#} exceeds the supported range")]
    QuantityOverflow { length: Inches },

    #[error("Total order length exceeds the supported range")]
    TotalOverflow,
}

impl DomainError {
    /// 1-based input line that caused the error, when it is tied to one.
    pub fn line_number(&self) -> Option<usize> {
        match self {
            Self::InvalidFormat { line_number, .. }
            | Self::InvalidQuantity { line_number, .. }
            | Self::InvalidLength { line_number, .. } => Some(*line_number),
            Self::QuantityOverflow { .. } | Self::TotalOverflow => None,
        }
    }
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read standard input: {source}")]
    StdinRead {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {format} output: {details}")]
    SerializationError { format: String, details: String },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },

    #[error("Configuration building failed: {0}")]
    ConfigBuildFailed(String),
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for PanelOrderError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PanelOrderError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for InfrastructureError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for PanelOrderError {
    fn from(err: serde_yaml::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<PanelOrderError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| PanelOrderError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| PanelOrderError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
