//! Parameter document assembly.
//!
//! Builds the in-memory XML tree for a parameter file: one `definitions`
//! section per category holding variable metadata, followed by one `data`
//! section per category holding extracted values. The builder is selected by
//! output format version; only v1 exists today.

use crate::classify::classify;
use crate::errors::Result;
use crate::loader::{ParameterFile, VariableDescriptor};
use crate::xml_io;
use ndarray::ArrayD;
use std::path::Path;

/// Metadata keys every variable definition must carry.
const REQUIRED_METADATA: [&str; 2] = ["units", "long_name"];

/// Sentinel value for required metadata absent from the source.
const UNKNOWN: &str = "unknown";

/// One `variable` element in a definitions section.
#[derive(Debug, Clone)]
pub struct VariableDef {
    pub name: String,
    /// `metadata` children as (name, text) pairs, in display order
    pub metadata: Vec<(String, String)>,
}

impl VariableDef {
    /// Builds a definition from a descriptor: every source attribute copied
    /// verbatim in order, then any missing required key appended with the
    /// `unknown` sentinel.
    pub fn from_descriptor(desc: &VariableDescriptor) -> Self {
        let mut metadata = desc.attributes.clone();
        for key in REQUIRED_METADATA {
            if !metadata.iter().any(|(name, _)| name == key) {
                metadata.push((key.to_string(), UNKNOWN.to_string()));
            }
        }
        Self {
            name: desc.name.clone(),
            metadata,
        }
    }
}

/// One `value` element in a data group.
#[derive(Debug, Clone)]
pub struct ValueNode {
    pub variable: String,
    pub text: String,
}

/// One indexed `group` element in a data section.
#[derive(Debug, Clone)]
pub struct Group {
    pub label: String,
    pub values: Vec<ValueNode>,
}

/// A `definitions` section holding one category's variable metadata.
#[derive(Debug, Clone)]
pub struct DefinitionsSection {
    pub name: &'static str,
    pub variables: Vec<VariableDef>,
}

/// A `data` section holding one category's extracted values.
#[derive(Debug, Clone)]
pub struct DataSection {
    pub name: &'static str,
    pub groups: Vec<Group>,
}

/// Output format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatVersion {
    V1,
}

/// Creates the document builder for the requested format version.
pub fn new_document(version: FormatVersion, debug: bool) -> Box<dyn ParameterDocument> {
    match version {
        FormatVersion::V1 => Box::new(ParametersV1::new(debug)),
    }
}

/// A version-specific parameter document builder.
///
/// Metadata extraction and data extraction are separate passes; `write`
/// serializes whatever has been accumulated.
pub trait ParameterDocument {
    /// Classifies every variable and fills the definitions sections.
    fn extract_variable_metadata(&mut self, source: &ParameterFile);

    /// Fills the data sections from the variables collected into the
    /// definitions sections.
    fn extract_variable_data(&mut self, source: &ParameterFile) -> Result<()>;

    /// Serializes the document to the destination path.
    fn write(&self, path: &Path) -> Result<()>;
}

/// Version 1.0 of the parameters document.
pub struct ParametersV1 {
    debug: bool,
    definitions: Vec<DefinitionsSection>,
    data: Vec<DataSection>,
}

impl ParametersV1 {
    pub fn new(debug: bool) -> Self {
        // Definitions are emitted in this order; data sections follow in the
        // order extract_variable_data builds them.
        let definitions = ["scalars", "pft", "litterclass", "name"]
            .into_iter()
            .map(|name| DefinitionsSection {
                name,
                variables: Vec::new(),
            })
            .collect();
        Self {
            debug,
            definitions,
            data: Vec::new(),
        }
    }

    pub fn definitions(&self) -> &[DefinitionsSection] {
        &self.definitions
    }

    pub fn data(&self) -> &[DataSection] {
        &self.data
    }

    fn section_mut(&mut self, name: &str) -> &mut DefinitionsSection {
        self.definitions
            .iter_mut()
            .find(|s| s.name == name)
            .unwrap_or_else(|| unreachable!("unknown section '{}'", name))
    }

    fn section(&self, name: &str) -> &DefinitionsSection {
        self.definitions
            .iter()
            .find(|s| s.name == name)
            .unwrap_or_else(|| unreachable!("unknown section '{}'", name))
    }

    /// Builds the scalars data section: the whole value of every
    /// scalar-category variable, under group index 0.
    fn scalar_data_section(&self, source: &ParameterFile) -> Result<DataSection> {
        let mut values = Vec::new();
        for def in &self.section("scalars").variables {
            values.push(ValueNode {
                variable: def.name.clone(),
                text: full_value_text(source, &def.name)?,
            });
        }
        Ok(DataSection {
            name: "scalars",
            groups: vec![Group {
                label: "0".to_string(),
                values,
            }],
        })
    }

    /// Builds the name data section: each name-category variable's rows are
    /// decoded, trimmed, and joined into one string, under group index 0.
    fn name_data_section(&self, source: &ParameterFile) -> Result<DataSection> {
        let mut values = Vec::new();
        for def in &self.section("name").variables {
            values.push(ValueNode {
                variable: def.name.clone(),
                text: source.read_text_rows(&def.name)?.join(" "),
            });
        }
        Ok(DataSection {
            name: "name",
            groups: vec![Group {
                label: "0".to_string(),
                values,
            }],
        })
    }

    /// Builds a data section with one group per index of the category's
    /// dimension. A file without that dimension yields zero groups.
    fn grouped_data_section(
        &self,
        name: &'static str,
        source: &ParameterFile,
    ) -> Result<DataSection> {
        let mut groups = Vec::new();
        if let Some(extent) = source.dimension_len(name) {
            // Read each variable once, then slice per group index.
            let mut columns: Vec<(String, ArrayD<f64>)> = Vec::new();
            for def in &self.section(name).variables {
                columns.push((def.name.clone(), source.read_values(&def.name)?));
            }

            for index in 0..extent {
                let values = columns
                    .iter()
                    .map(|(variable, data)| ValueNode {
                        variable: variable.clone(),
                        text: data
                            .iter()
                            .nth(index)
                            .map(|v| v.to_string())
                            .unwrap_or_default(),
                    })
                    .collect();
                groups.push(Group {
                    label: index.to_string(),
                    values,
                });
            }
        }
        Ok(DataSection { name, groups })
    }
}

impl ParameterDocument for ParametersV1 {
    fn extract_variable_metadata(&mut self, source: &ParameterFile) {
        for desc in source.variables() {
            if self.debug {
                println!(
                    "{} : dims = {:?}  shape = {:?}",
                    desc.name, desc.dimensions, desc.shape
                );
            }

            let category = classify(&desc.dimensions);
            let Some(section) = category.section_name() else {
                println!(
                    "skipping : \"{}\"  shape = {}   dims = {}",
                    desc.name,
                    desc.shape.len(),
                    desc.dimensions.len()
                );
                continue;
            };

            let def = VariableDef::from_descriptor(desc);
            self.section_mut(section).variables.push(def);
        }
    }

    fn extract_variable_data(&mut self, source: &ParameterFile) -> Result<()> {
        // Scalars and names have no group dimension; they get a single
        // index-0 group. The per-index categories follow.
        let scalars = self.scalar_data_section(source)?;
        self.data.push(scalars);

        let names = self.name_data_section(source)?;
        self.data.push(names);

        let litterclass = self.grouped_data_section("litterclass", source)?;
        self.data.push(litterclass);

        let pft = self.grouped_data_section("pft", source)?;
        self.data.push(pft);

        Ok(())
    }

    fn write(&self, path: &Path) -> Result<()> {
        println!("Writing {}", path.display());
        xml_io::write_parameters(&self.definitions, &self.data, path)
    }
}

/// Renders a variable's entire contents as text.
///
/// Character variables decode to trimmed strings, rows joined with single
/// spaces. Single-element numeric data renders as the bare value; anything
/// larger renders as a bracketed list with no elision.
fn full_value_text(source: &ParameterFile, name: &str) -> Result<String> {
    let is_char = source.descriptor(name).is_some_and(|d| d.is_char);
    if is_char {
        Ok(source.read_text_rows(name)?.join(" "))
    } else {
        let data = source.read_values(name)?;
        Ok(render_numeric(data.iter().copied()))
    }
}

/// Formats numeric data: a lone value as-is, multiple values as a bracketed
/// comma-separated list.
pub fn render_numeric(values: impl Iterator<Item = f64>) -> String {
    let rendered: Vec<String> = values.map(|v| v.to_string()).collect();
    match rendered.as_slice() {
        [single] => single.clone(),
        _ => format!("[{}]", rendered.join(", ")),
    }
}
