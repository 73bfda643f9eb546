//! Name formatter - renames hierarchical identifiers into one naming convention
//!
//! An identifier such as `Def-Arm_L.01` is split on separator characters,
//! each segment is classified as prefix, side, number or body, and the name
//! is rebuilt from a template such as `Pr_BdBd#.x`.

pub mod types;
pub mod config;
pub mod tokenizer;
pub mod classifier;
pub mod template;
pub mod reconstruct;
pub mod formatter;

pub use types::*;
pub use config::*;
pub use tokenizer::*;
pub use classifier::*;
pub use template::*;
pub use reconstruct::*;
pub use formatter::{rename_all, NameFormatter};

// Python bindings
#[cfg(feature = "python")]
pub mod py;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn name_formatter(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use py::*;
    m.add_class::<PyNameFormatter>()?;
    m.add_function(wrap_pyfunction!(py_rename_all, m)?)?;
    Ok(())
}
