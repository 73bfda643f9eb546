//! Python bindings for the name formatter using PyO3

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::config::{Configuration, SeparatorSet};
use crate::formatter::{self, NameFormatter};

fn config_error(e: impl std::fmt::Display) -> PyErr {
    PyErr::new::<PyValueError, _>(format!("Invalid configuration: {}", e))
}

/// Rename identifiers with an optional JSON configuration (Python function)
#[pyfunction]
#[pyo3(name = "rename_all", signature = (identifiers, config_json=None))]
pub fn py_rename_all(identifiers: Vec<String>, config_json: Option<&str>) -> PyResult<Vec<String>> {
    let config = match config_json {
        Some(json) => Configuration::from_json(json).map_err(config_error)?,
        None => Configuration::default(),
    };
    Ok(formatter::rename_all(&identifiers, &config))
}

/// Python wrapper for the name formatter
#[pyclass(name = "NameFormatter")]
pub struct PyNameFormatter {
    formatter: NameFormatter,
}

#[pymethods]
impl PyNameFormatter {
    #[new]
    #[pyo3(signature = (
        template=None,
        separators=None,
        prefixes=None,
        sides=None,
        include_prefix=true,
        include_side=true
    ))]
    fn new(
        template: Option<String>,
        separators: Option<&str>,
        prefixes: Option<Vec<String>>,
        sides: Option<Vec<String>>,
        include_prefix: bool,
        include_side: bool,
    ) -> Self {
        let mut config = Configuration::default()
            .with_include_prefix(include_prefix)
            .with_include_side(include_side);
        if let Some(template) = template {
            config.template = template;
        }
        if let Some(separators) = separators {
            config.separators = SeparatorSet::new(separators);
        }
        if let Some(prefixes) = prefixes {
            config.prefixes = prefixes;
        }
        if let Some(sides) = sides {
            config.sides = sides;
        }

        Self {
            formatter: NameFormatter::new(config),
        }
    }

    /// Build from a JSON object; missing keys use the defaults
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let config = Configuration::from_json(json).map_err(config_error)?;
        Ok(Self {
            formatter: NameFormatter::new(config),
        })
    }

    /// Build from the add-on's text fields (prefixes comma-separated)
    #[staticmethod]
    fn from_settings(format_guide: &str, separator_chars: &str, format_prefix: &str) -> Self {
        Self {
            formatter: NameFormatter::new(Configuration::from_settings(
                format_guide,
                separator_chars,
                format_prefix,
            )),
        }
    }

    fn rename(&self, name: &str) -> String {
        self.formatter.rename(name)
    }

    fn rename_all(&self, names: Vec<String>) -> Vec<String> {
        self.formatter.rename_all(&names)
    }

    /// Classify a name and return its parts as a dict
    fn parse_name<'py>(&self, name: &str, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let parsed = self.formatter.parse(name);

        let dict = PyDict::new_bound(py);
        dict.set_item("prefix", parsed.prefix)?;
        dict.set_item("bodies", parsed.bodies)?;
        dict.set_item("side", parsed.side)?;
        dict.set_item("number", parsed.number)?;
        Ok(dict)
    }

    /// Classified segments as a list of dicts
    fn segments<'py>(&self, name: &str, py: Python<'py>) -> PyResult<Vec<Bound<'py, PyDict>>> {
        self.formatter
            .segments(name)
            .into_iter()
            .map(|segment| -> PyResult<Bound<'py, PyDict>> {
                let dict = PyDict::new_bound(py);
                let kind = serde_json::to_value(segment.kind)
                    .map_err(|e| PyErr::new::<PyValueError, _>(format!("Failed to serialize segment: {}", e)))?;
                dict.set_item("text", segment.text)?;
                dict.set_item("kind", kind.as_str().unwrap_or_default())?;
                Ok(dict)
            })
            .collect()
    }

    /// Parsed template as a JSON string
    fn template_tokens(&self) -> PyResult<String> {
        serde_json::to_string(self.formatter.template_tokens())
            .map_err(|e| PyErr::new::<PyValueError, _>(format!("Failed to serialize template: {}", e)))
    }

    /// Current configuration as a JSON string
    fn config_json(&self) -> PyResult<String> {
        serde_json::to_string(self.formatter.config())
            .map_err(|e| PyErr::new::<PyValueError, _>(format!("Failed to serialize configuration: {}", e)))
    }

    /// Configuration warnings, one message per problem
    fn diagnostics(&self) -> Vec<String> {
        self.formatter
            .config()
            .diagnostics()
            .iter()
            .map(ToString::to_string)
            .collect()
    }
}
