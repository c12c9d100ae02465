// Python-bindinger (feature "python"). Bygges med maturin.
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::driver::summarize as summarize_package;
use crate::input::{parse_packages, Package};

fn to_py_err(e: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// summarize("RUN", [15000, 1, 75]) -> ferdig formatert linje
#[pyfunction]
fn summarize(code: &str, data: Vec<f64>) -> PyResult<String> {
    let package = Package::new(code, data);
    let info = summarize_package(&package).map_err(to_py_err)?;
    Ok(info.get_message())
}

/// summarize_packages('[["RUN", [15000, 1, 75]], ...]') -> liste med linjer.
/// Første feil avbryter.
#[pyfunction]
fn summarize_packages(json_str: &str) -> PyResult<Vec<String>> {
    let packages = parse_packages(json_str).map_err(to_py_err)?;
    packages
        .iter()
        .map(|p| summarize_package(p).map(|info| info.get_message()).map_err(to_py_err))
        .collect()
}

#[pymodule]
#[pyo3(name = "workout_core")]
fn workout_core_module(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(summarize, m)?)?;
    m.add_function(wrap_pyfunction!(summarize_packages, m)?)?;
    Ok(())
}
