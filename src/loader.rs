//! netCDF catalog loading.
//!
//! This module wraps `netcdf` file access behind an immutable variable
//! catalog. Descriptors (name, shape, dimension names, stringified
//! attributes) are read once at open time; variable values are read on
//! demand during data extraction. The file handle is owned by
//! [`ParameterFile`] and released when it goes out of scope.

use crate::errors::{Nc2XmlError, Result};
use ndarray::ArrayD;
use netcdf::{AttributeValue, File};
use std::path::Path;

/// Immutable description of one variable in the source file.
#[derive(Debug, Clone)]
pub struct VariableDescriptor {
    pub name: String,
    /// Extent of each dimension, in order
    pub shape: Vec<usize>,
    /// Dimension names, same length as `shape`
    pub dimensions: Vec<String>,
    /// Attributes in source order, values stringified
    pub attributes: Vec<(String, String)>,
    /// Whether the element type is character data
    pub is_char: bool,
}

impl VariableDescriptor {
    /// Total number of elements across all dimensions.
    pub fn total_elements(&self) -> usize {
        self.shape.iter().product()
    }
}

/// Open handle and variable catalog for one netCDF parameter file.
pub struct ParameterFile {
    file: File,
    variables: Vec<VariableDescriptor>,
}

impl ParameterFile {
    /// Opens a netCDF file and reads its variable catalog.
    ///
    /// Fails with [`Nc2XmlError::SourceNotFound`] when the path does not
    /// exist, and with [`Nc2XmlError::Format`] when the file does not parse
    /// as netCDF.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Nc2XmlError::SourceNotFound {
                path: path.to_path_buf(),
            });
        }

        let file = netcdf::open(path)?;

        let variables = file
            .variables()
            .map(|var| {
                let dimensions: Vec<String> = var
                    .dimensions()
                    .iter()
                    .map(|d| d.name().to_string())
                    .collect();
                let shape: Vec<usize> = var.dimensions().iter().map(|d| d.len()).collect();

                let mut attributes = Vec::new();
                for attr in var.attributes() {
                    if let Ok(value) = attr.value() {
                        attributes.push((attr.name().to_string(), attribute_text(&value)));
                    }
                }

                let is_char = format!("{:?}", var.vartype())
                    .to_lowercase()
                    .contains("char");

                VariableDescriptor {
                    name: var.name().to_string(),
                    shape,
                    dimensions,
                    attributes,
                    is_char,
                }
            })
            .collect();

        Ok(Self { file, variables })
    }

    /// Variable descriptors in source iteration order.
    pub fn variables(&self) -> &[VariableDescriptor] {
        &self.variables
    }

    /// Descriptor for a single variable, if present.
    pub fn descriptor(&self, name: &str) -> Option<&VariableDescriptor> {
        self.variables.iter().find(|d| d.name == name)
    }

    /// Extent of a global dimension, if the file defines it.
    pub fn dimension_len(&self, name: &str) -> Option<usize> {
        self.file.dimension(name).map(|d| d.len())
    }

    /// Global dimensions rendered as `name: extent` pairs.
    pub fn dimension_summary(&self) -> String {
        self.file
            .dimensions()
            .map(|d| format!("{}: {}", d.name(), d.len()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Reads a variable's full numeric contents as `f64`.
    pub fn read_values(&self, name: &str) -> Result<ArrayD<f64>> {
        let var = self
            .file
            .variable(name)
            .ok_or_else(|| Nc2XmlError::VariableNotFound {
                var: name.to_string(),
            })?;
        let shape: Vec<usize> = var.dimensions().iter().map(|d| d.len()).collect();
        let values = var.get_values::<f64, _>(..)?;
        Ok(ArrayD::from_shape_vec(shape, values)?)
    }

    /// Decodes a character variable row-wise along its last dimension.
    ///
    /// Each row is decoded as text with NUL and whitespace padding trimmed.
    /// A 1-D character variable yields a single row.
    pub fn read_text_rows(&self, name: &str) -> Result<Vec<String>> {
        let desc = self
            .descriptor(name)
            .ok_or_else(|| Nc2XmlError::VariableNotFound {
                var: name.to_string(),
            })?;
        let width = desc.shape.last().copied().unwrap_or(0);
        if width == 0 {
            return Ok(Vec::new());
        }

        let var = self
            .file
            .variable(name)
            .ok_or_else(|| Nc2XmlError::VariableNotFound {
                var: name.to_string(),
            })?;
        let bytes: Vec<u8> = var.get_values::<u8, _>(..)?;

        Ok(bytes
            .chunks(width)
            .map(|row| {
                String::from_utf8_lossy(row)
                    .trim_matches(|c: char| c == '\0' || c.is_whitespace())
                    .to_string()
            })
            .collect())
    }
}

/// Renders an attribute value as text: scalar variants through their display
/// form, vector variants through their debug form.
fn attribute_text(value: &AttributeValue) -> String {
    match value {
        AttributeValue::Str(s) => s.clone(),
        AttributeValue::Strs(ss) => format!("{:?}", ss),
        AttributeValue::Float(v) => v.to_string(),
        AttributeValue::Floats(vs) => format!("{:?}", vs),
        AttributeValue::Double(v) => v.to_string(),
        AttributeValue::Doubles(vs) => format!("{:?}", vs),
        AttributeValue::Int(v) => v.to_string(),
        AttributeValue::Ints(vs) => format!("{:?}", vs),
        AttributeValue::Short(v) => v.to_string(),
        AttributeValue::Shorts(vs) => format!("{:?}", vs),
        AttributeValue::Uchar(v) => v.to_string(),
        AttributeValue::Uchars(vs) => format!("{:?}", vs),
        AttributeValue::Ushort(v) => v.to_string(),
        AttributeValue::Ushorts(vs) => format!("{:?}", vs),
        AttributeValue::Uint(v) => v.to_string(),
        AttributeValue::Uints(vs) => format!("{:?}", vs),
        other => format!("{:?}", other),
    }
}
