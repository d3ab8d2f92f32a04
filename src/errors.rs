//! Centralized error handling for nc2xml
//!
//! This module provides structured error types for the conversion pipeline,
//! enabling better error context than a generic `Box<dyn Error>`.

use std::fmt;
use std::path::PathBuf;

/// Main error type for nc2xml operations
#[derive(Debug)]
pub enum Nc2XmlError {
    /// Source or config path is missing or unreadable
    SourceNotFound { path: PathBuf },

    /// Input does not parse as a netCDF file, or a netCDF read failed
    Format(netcdf::Error),

    /// Output path could not be written
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// I/O operation errors
    Io(std::io::Error),

    /// XML serialization errors
    Xml(quick_xml::Error),

    /// Array shape or dimension error
    Array(ndarray::ShapeError),

    /// Variable named in the catalog but absent from the file
    VariableNotFound { var: String },
}

impl fmt::Display for Nc2XmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nc2XmlError::SourceNotFound { path } => {
                write!(f, "Could not find source file: {}", path.display())
            }
            Nc2XmlError::Format(e) => write!(f, "Not a readable netCDF file: {}", e),
            Nc2XmlError::Write { path, source } => {
                write!(f, "Failed to write '{}': {}", path.display(), source)
            }
            Nc2XmlError::Io(e) => write!(f, "I/O error: {}", e),
            Nc2XmlError::Xml(e) => write!(f, "XML error: {}", e),
            Nc2XmlError::Array(e) => write!(f, "Array error: {}", e),
            Nc2XmlError::VariableNotFound { var } => {
                write!(f, "Variable '{}' not found in file", var)
            }
        }
    }
}

impl std::error::Error for Nc2XmlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Nc2XmlError::Format(e) => Some(e),
            Nc2XmlError::Write { source, .. } => Some(source),
            Nc2XmlError::Io(e) => Some(e),
            Nc2XmlError::Xml(e) => Some(e),
            Nc2XmlError::Array(e) => Some(e),
            _ => None,
        }
    }
}

impl From<netcdf::Error> for Nc2XmlError {
    fn from(error: netcdf::Error) -> Self {
        Nc2XmlError::Format(error)
    }
}

impl From<std::io::Error> for Nc2XmlError {
    fn from(error: std::io::Error) -> Self {
        Nc2XmlError::Io(error)
    }
}

impl From<quick_xml::Error> for Nc2XmlError {
    fn from(error: quick_xml::Error) -> Self {
        Nc2XmlError::Xml(error)
    }
}

impl From<ndarray::ShapeError> for Nc2XmlError {
    fn from(error: ndarray::ShapeError) -> Self {
        Nc2XmlError::Array(error)
    }
}

/// Result type alias for nc2xml operations
pub type Result<T> = std::result::Result<T, Nc2XmlError>;
