//! utils: Python argument conversion for the PyO3 bindings.
//!
//! Converts Python-side inputs (numpy arrays, pandas frames, nested
//! sequences, variable names) into the crate's Rust types. Everything here
//! is compiled only with the `python-bindings` feature.

#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::{PyTypeError, PyValueError},
    prelude::*,
    types::PyAny,
};

#[cfg(feature = "python-bindings")]
use numpy::PyReadonlyArray2;

#[cfg(feature = "python-bindings")]
use crate::table::{JointTable, Variable};

/// Extract a joint table from a 2-D float array-like.
///
/// Accepts, in order of preference, a `numpy.ndarray` of `float64`, any
/// object with a `to_numpy()` method returning one (e.g. a pandas
/// `DataFrame`), or a nested sequence of floats. Rows of a nested sequence
/// may differ in length; the engine reports that as a ragged table.
/// Cell `[0][0]` is carried through but never read.
#[cfg(feature = "python-bindings")]
pub fn extract_joint_table<'py>(
    _py: Python<'py>, raw_table: &Bound<'py, PyAny>,
) -> PyResult<JointTable> {
    if let Ok(arr) = raw_table.extract::<PyReadonlyArray2<f64>>() {
        return Ok(table_from_array(&arr));
    }

    if let Ok(obj) = raw_table.call_method0("to_numpy") {
        if let Ok(arr) = obj.extract::<PyReadonlyArray2<f64>>() {
            return Ok(table_from_array(&arr));
        }
    }

    let rows: Vec<Vec<f64>> = raw_table.extract().map_err(|_| {
        PyTypeError::new_err(
            "expected a 2-D numpy.ndarray, pandas.DataFrame, or nested sequence of float64",
        )
    })?;
    Ok(JointTable::from_numeric(rows))
}

#[cfg(feature = "python-bindings")]
fn table_from_array(arr: &PyReadonlyArray2<'_, f64>) -> JointTable {
    let rows = arr.as_array().rows().into_iter().map(|row| row.to_vec()).collect();
    JointTable::from_numeric(rows)
}

/// Parse `"X"` / `"Y"` (either case) into a [`Variable`].
#[cfg(feature = "python-bindings")]
pub fn extract_variable(name: &str) -> PyResult<Variable> {
    name.parse::<Variable>().map_err(PyValueError::new_err)
}
