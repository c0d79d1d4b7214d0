//! Path resolution against a fetched JSON tree.
//!
//! A spec's path is walked one segment at a time: objects are indexed
//! by field name, arrays by integer. Absence is surfaced as an error
//! rather than substituted with a default, so the scheduler can
//! degrade exactly one variable instead of silently zeroing it.

use serde_json::Value;
use thiserror::Error;

use crate::data::format::parse_go_duration;

/// Errors raised while resolving a variable path against a document.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// A field was absent from an object, or an index was out of
    /// range or not a non-negative integer against an array.
    #[error("path not found at segment '{0}'")]
    PathNotFound(String),

    /// Descended into a scalar, or the terminal node was not
    /// convertible to a number.
    #[error("type mismatch at segment '{0}'")]
    TypeMismatch(String),
}

/// Resolve `path` against `tree`, yielding the raw scalar.
pub fn extract(tree: &Value, path: &[String]) -> Result<f64, ExtractError> {
    let mut node = tree;
    for segment in path {
        node = match node {
            Value::Object(map) => map
                .get(segment)
                .ok_or_else(|| ExtractError::PathNotFound(segment.clone()))?,
            Value::Array(items) => {
                let index: usize = segment
                    .parse()
                    .map_err(|_| ExtractError::PathNotFound(segment.clone()))?;
                items
                    .get(index)
                    .ok_or_else(|| ExtractError::PathNotFound(segment.clone()))?
            }
            _ => return Err(ExtractError::TypeMismatch(segment.clone())),
        };
    }

    as_number(node).ok_or_else(|| {
        ExtractError::TypeMismatch(path.last().cloned().unwrap_or_default())
    })
}

/// Coerce a terminal node to a number.
///
/// Accepts JSON numbers, booleans (0/1), numeric strings, and
/// Go-style duration strings like "1.5ms" (converted to nanoseconds).
fn as_number(node: &Value) -> Option<f64> {
    match node {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<f64>().ok().or_else(|| parse_go_duration(s))
        }
        _ => None,
    }
}
