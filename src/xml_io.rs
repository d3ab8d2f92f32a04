//! XML serialization of the parameter document.
//!
//! Renders the document tree with `quick-xml` using 4-space indentation and
//! one element per line. The whole document is rendered into an in-memory
//! buffer, then written to the destination path in a single call.

use crate::document::{DataSection, DefinitionsSection};
use crate::errors::{Nc2XmlError, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::fs;
use std::path::Path;

const XMLNS: &str = "https://github.com/escmi/cime";
const XMLNS_XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";
const SCHEMA_LOCATION: &str = "parameters.xsd";
const DOCUMENT_VERSION: &str = "1.0";

/// Serializes the definitions and data sections under a `parameters` root
/// and writes the result to `path`, creating or overwriting the file.
pub fn write_parameters(
    definitions: &[DefinitionsSection],
    data: &[DataSection],
    path: &Path,
) -> Result<()> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", None, None)))?;

    let mut root = BytesStart::new("parameters");
    root.push_attribute(("xmlns", XMLNS));
    root.push_attribute(("xmlns:xsi", XMLNS_XSI));
    root.push_attribute(("xsi:schemaLocation", SCHEMA_LOCATION));
    root.push_attribute(("version", DOCUMENT_VERSION));
    writer.write_event(Event::Start(root))?;

    for section in definitions {
        write_definitions(&mut writer, section)?;
    }
    for section in data {
        write_data(&mut writer, section)?;
    }

    writer.write_event(Event::End(BytesEnd::new("parameters")))?;

    let buffer = writer.into_inner();
    fs::write(path, buffer).map_err(|source| Nc2XmlError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn write_definitions(
    writer: &mut Writer<Vec<u8>>,
    section: &DefinitionsSection,
) -> Result<()> {
    let mut start = BytesStart::new("definitions");
    start.push_attribute(("name", section.name));

    if section.variables.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for var in &section.variables {
        let mut elem = BytesStart::new("variable");
        elem.push_attribute(("name", var.name.as_str()));
        writer.write_event(Event::Start(elem))?;

        for (key, value) in &var.metadata {
            write_text_element(writer, "metadata", key, value)?;
        }

        writer.write_event(Event::End(BytesEnd::new("variable")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("definitions")))?;
    Ok(())
}

fn write_data(writer: &mut Writer<Vec<u8>>, section: &DataSection) -> Result<()> {
    let mut start = BytesStart::new("data");
    start.push_attribute(("name", section.name));

    if section.groups.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for group in &section.groups {
        let mut elem = BytesStart::new("group");
        elem.push_attribute(("name", group.label.as_str()));

        if group.values.is_empty() {
            writer.write_event(Event::Empty(elem))?;
            continue;
        }

        writer.write_event(Event::Start(elem))?;
        for value in &group.values {
            write_text_element(writer, "value", &value.variable, &value.text)?;
        }
        writer.write_event(Event::End(BytesEnd::new("group")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("data")))?;
    Ok(())
}

/// Writes `<tag name="{name}">{text}</tag>`.
fn write_text_element(
    writer: &mut Writer<Vec<u8>>,
    tag: &str,
    name: &str,
    text: &str,
) -> Result<()> {
    let mut elem = BytesStart::new(tag);
    elem.push_attribute(("name", name));
    writer.write_event(Event::Start(elem))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
