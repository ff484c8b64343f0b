//! Error handling for the TFR dashboard
//!
//! This module defines custom error types and a Result alias for use
//! throughout the application. Only dataset loading and configuration can
//! fail; chart building never returns errors.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for dashboard operations
#[derive(Error, Debug)]
pub enum DashboardError {
    /// A dataset file could not be opened
    #[error("Dataset file not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// Errors raised while reading the indicator CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Errors raised while reading the boundary GeoJSON
    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),

    /// Structurally valid input that cannot be used as a dataset
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// A required column is absent from the indicator CSV header
    #[error("Missing required column '{column}' in {}", .path.display())]
    MissingColumn { column: String, path: PathBuf },

    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<DashboardError>,
    },
}

impl DashboardError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        DashboardError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, below any context wrappers
    pub fn root(&self) -> &DashboardError {
        match self {
            DashboardError::WithContext { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}
