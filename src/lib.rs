//! nc2xml: netCDF parameter files rendered as XML
//!
//! A small library and CLI for converting a netCDF parameter file into an
//! XML document describing variable metadata and variable values, grouped by
//! dimensional category (scalar, per-PFT, per-litter-class, per-name).
//!
//! The conversion is a single forward pipeline:
//!
//! 1. [`loader`]: open the file and read its variable catalog
//! 2. [`classify`] + [`document`]: categorize each variable, collect
//!    metadata, then extract values per category
//! 3. [`xml_io`]: serialize the accumulated tree with indentation
//!
//! ## Module Organization
//!
//! - [`loader`]: netCDF file access and the variable catalog
//! - [`classify`]: the category decision table
//! - [`document`]: document tree assembly, one builder per format version
//! - [`xml_io`]: XML serialization and output
//! - [`config`]: ini-style config file reading
//! - [`errors`]: centralized error handling
//!
//! ## Usage
//!
//! ```rust,no_run
//! use nc2xml::{convert_file, FormatVersion};
//!
//! convert_file("fates_params.nc", "fates_params.xml", FormatVersion::V1, false).unwrap();
//! ```

pub mod classify;
pub mod cli;
pub mod config;
pub mod document;
pub mod errors;
pub mod loader;
pub mod xml_io;

// Direct re-exports for the public API
pub use classify::{classify, Category};
pub use document::{new_document, FormatVersion, ParameterDocument, ParametersV1};
pub use errors::{Nc2XmlError, Result};
pub use loader::{ParameterFile, VariableDescriptor};

use std::path::Path;

// High-level convenience API
pub mod prelude {
    //! Commonly used imports for convenience
    pub use crate::classify::{classify, Category};
    pub use crate::document::{new_document, FormatVersion, ParameterDocument};
    pub use crate::errors::{Nc2XmlError, Result};
    pub use crate::loader::{ParameterFile, VariableDescriptor};
}

/// Runs the full conversion pipeline: load the source, extract metadata and
/// data per category, and write the XML document to `dest`.
pub fn convert_file(
    source: impl AsRef<Path>,
    dest: impl AsRef<Path>,
    version: FormatVersion,
    debug: bool,
) -> Result<()> {
    let source = source.as_ref();

    println!("Reading {}", source.display());
    let file = ParameterFile::open(source)?;
    println!("dims = {{{}}}", file.dimension_summary());

    let mut doc = new_document(version, debug);
    doc.extract_variable_metadata(&file);

    // A partially built document is still written; an extraction failure is
    // what the caller sees.
    let extracted = doc.extract_variable_data(&file);
    let written = doc.write(dest.as_ref());
    extracted?;
    written
}
