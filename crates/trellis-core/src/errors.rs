//! Error types for the trellis toolkit.

use thiserror::Error;

/// Top-level error type for the trellis toolkit.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error(transparent)]
    SizeSpec(#[from] SizeSpecError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Driver(#[from] DriverError),
}

/// Errors in declarative track size specifications.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SizeSpecError {
    #[error("invalid track size specification: {value:?}")]
    Invalid { value: String },
}

/// Errors in compiled CSS track sizes.
///
/// These indicate a contract violation by the drag-interaction library,
/// which is expected to report only pixel and fractional values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unexpected CSS grid track size: {value:?}")]
    UnexpectedCssSize { value: String },
}

/// Failure reported by the external drag-interaction driver.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("splitter driver failure: {reason}")]
pub struct DriverError {
    reason: String,
}

impl DriverError {
    /// Wrap a driver failure message.
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}
