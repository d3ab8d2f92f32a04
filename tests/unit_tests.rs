//! Unit tests for the nc2xml modules
//!
//! These tests cover the classifier decision table, metadata defaults,
//! value rendering, config parsing, and error formatting.

use nc2xml::classify::{classify, Category};
use nc2xml::config::read_config_file;
use nc2xml::document::{render_numeric, VariableDef};
use nc2xml::errors::Nc2XmlError;
use nc2xml::loader::VariableDescriptor;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn dims(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn test_classify_scalar_rules() {
    // Zero dimensions is always a scalar
    assert_eq!(classify(&dims(&[])), Category::Scalar);

    // One dimension named param or allpfts is treated as flat
    assert_eq!(classify(&dims(&["param"])), Category::Scalar);
    assert_eq!(classify(&dims(&["allpfts"])), Category::Scalar);
}

#[test]
fn test_classify_category_dimensions() {
    assert_eq!(classify(&dims(&["pft"])), Category::Pft);
    assert_eq!(classify(&dims(&["litterclass"])), Category::LitterClass);
}

#[test]
fn test_classify_name_rule() {
    // Any two-dimensional variable whose second dimension is string_length
    assert_eq!(classify(&dims(&["pft", "string_length"])), Category::Name);
    assert_eq!(
        classify(&dims(&["litterclass", "string_length"])),
        Category::Name
    );
}

#[test]
fn test_classify_unrecognized() {
    assert_eq!(classify(&dims(&["time"])), Category::Unrecognized);
    assert_eq!(classify(&dims(&["pft", "time"])), Category::Unrecognized);
    assert_eq!(
        classify(&dims(&["string_length", "pft"])),
        Category::Unrecognized
    );
    assert_eq!(
        classify(&dims(&["time", "pft", "litterclass"])),
        Category::Unrecognized
    );
}

#[test]
fn test_category_section_names() {
    assert_eq!(Category::Scalar.section_name(), Some("scalars"));
    assert_eq!(Category::Pft.section_name(), Some("pft"));
    assert_eq!(Category::LitterClass.section_name(), Some("litterclass"));
    assert_eq!(Category::Name.section_name(), Some("name"));
    assert_eq!(Category::Unrecognized.section_name(), None);
}

fn descriptor(name: &str, attributes: &[(&str, &str)]) -> VariableDescriptor {
    VariableDescriptor {
        name: name.to_string(),
        shape: Vec::new(),
        dimensions: Vec::new(),
        attributes: attributes
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        is_char: false,
    }
}

#[test]
fn test_definition_keeps_source_attributes_in_order() {
    let desc = descriptor("foo", &[("units", "m"), ("custom", "x"), ("long_name", "distance")]);
    let def = VariableDef::from_descriptor(&desc);

    assert_eq!(def.name, "foo");
    assert_eq!(
        def.metadata,
        vec![
            ("units".to_string(), "m".to_string()),
            ("custom".to_string(), "x".to_string()),
            ("long_name".to_string(), "distance".to_string()),
        ]
    );
}

#[test]
fn test_definition_appends_missing_required_metadata() {
    let desc = descriptor("bar", &[("units", "kg")]);
    let def = VariableDef::from_descriptor(&desc);

    // Source attributes first, then the missing required key with the sentinel
    assert_eq!(
        def.metadata,
        vec![
            ("units".to_string(), "kg".to_string()),
            ("long_name".to_string(), "unknown".to_string()),
        ]
    );

    let bare = VariableDef::from_descriptor(&descriptor("baz", &[]));
    assert_eq!(
        bare.metadata,
        vec![
            ("units".to_string(), "unknown".to_string()),
            ("long_name".to_string(), "unknown".to_string()),
        ]
    );
}

#[test]
fn test_definition_extraction_is_deterministic() {
    let desc = descriptor("foo", &[("units", "m")]);
    let first = VariableDef::from_descriptor(&desc);
    let second = VariableDef::from_descriptor(&desc);
    assert_eq!(first.metadata, second.metadata);
}

#[test]
fn test_render_numeric() {
    assert_eq!(render_numeric([42.0].into_iter()), "42");
    assert_eq!(render_numeric([5.5].into_iter()), "5.5");
    assert_eq!(render_numeric([1.5, 2.5, 3.5].into_iter()), "[1.5, 2.5, 3.5]");
    assert_eq!(render_numeric(std::iter::empty()), "[]");

    // Long arrays render in full, no elision
    let long: Vec<f64> = (0..64).map(|i| i as f64).collect();
    let rendered = render_numeric(long.into_iter());
    assert!(rendered.starts_with("[0, 1, 2"));
    assert!(rendered.ends_with("62, 63]"));
    assert!(!rendered.contains("..."));
}

#[test]
fn test_read_config_file() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("settings.cfg");
    fs::write(
        &path,
        "# comment\nbare = 1\n[main]\nkey = value\n; another comment\n",
    )
    .expect("Failed to write config");

    let settings = read_config_file(&path).expect("Failed to read config");
    assert_eq!(settings.get("bare").map(String::as_str), Some("1"));
    assert_eq!(settings.get("main.key").map(String::as_str), Some("value"));
}

#[test]
fn test_read_config_file_missing() {
    let result = read_config_file(&PathBuf::from("/no/such/settings.cfg"));
    match result {
        Err(Nc2XmlError::SourceNotFound { path }) => {
            assert!(path.to_string_lossy().contains("settings.cfg"));
        }
        _ => panic!("Expected SourceNotFound error"),
    }
}

#[test]
fn test_error_types() {
    let missing = Nc2XmlError::SourceNotFound {
        path: PathBuf::from("/data/params.nc"),
    };
    assert!(format!("{}", missing).contains("/data/params.nc"));

    let format_err = Nc2XmlError::Format(netcdf::Error::NotFound("test".to_string()));
    assert!(format!("{}", format_err).contains("netCDF"));

    let write_err = Nc2XmlError::Write {
        path: PathBuf::from("/data/out.xml"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(format!("{}", write_err).contains("/data/out.xml"));

    let var_err = Nc2XmlError::VariableNotFound {
        var: "foo".to_string(),
    };
    assert!(format!("{}", var_err).contains("Variable 'foo' not found"));
}
