//! Python bindings for the Streamlit renderer.

use std::collections::HashMap;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};
use serde_json::Value;

use crate::config::AggregateConfig;
use crate::logging::init_logger;
use crate::mission::MissionMeta;
use crate::pipeline::process_capture_json;
use crate::report::chart_title as render_title;

/// Aggregate a capture given as a JSON string.
///
/// `include_inactive` falls back to `OCAP_STATS_INCLUDE_INACTIVE` when not
/// passed.
///
/// # Returns
/// `{"stats": {"ai": [...], "player": [...]}, "mission": {...}}` with the
/// same keys as the JSON output.
#[pyfunction]
#[pyo3(signature = (capture_json, include_inactive=None))]
fn process_capture(
    py: Python<'_>,
    capture_json: &str,
    include_inactive: Option<bool>,
) -> PyResult<PyObject> {
    init_logger();

    let config = match include_inactive {
        Some(flag) => AggregateConfig::new().with_include_inactive(flag),
        None => AggregateConfig::from_env(),
    };
    let result = process_capture_json(capture_json, &config)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    let value = serde_json::to_value(&result).map_err(|e| PyValueError::new_err(e.to_string()))?;

    json_to_py(py, &value)
}

/// Chart title for a `result["mission"]` dict.
#[pyfunction]
fn chart_title(mission: HashMap<String, String>) -> PyResult<String> {
    let mission =
        MissionMeta::from_fields(&mission).map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(render_title(&mission))
}

fn json_to_py(py: Python<'_>, value: &Value) -> PyResult<PyObject> {
    Ok(match value {
        Value::Null => py.None(),
        Value::Bool(b) => (*b).into_py(py),
        Value::Number(n) => match (n.as_i64(), n.as_u64()) {
            (Some(i), _) => i.into_py(py),
            (None, Some(u)) => u.into_py(py),
            _ => n.as_f64().unwrap_or(f64::NAN).into_py(py),
        },
        Value::String(s) => s.as_str().into_py(py),
        Value::Array(items) => {
            let list = PyList::empty(py);
            for item in items {
                list.append(json_to_py(py, item)?)?;
            }
            list.into()
        }
        Value::Object(map) => {
            let dict = PyDict::new(py);
            for (key, item) in map {
                dict.set_item(key, json_to_py(py, item)?)?;
            }
            dict.into()
        }
    })
}

/// Python module definition
#[pymodule]
fn ocap_stats_core(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(process_capture, m)?)?;
    m.add_function(wrap_pyfunction!(chart_title, m)?)?;
    Ok(())
}
