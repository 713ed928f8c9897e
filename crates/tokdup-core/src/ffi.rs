//! FFI-friendly JSON entrypoint for language bindings.
//!
//! ## Response Envelope
//!
//! - Success: `{"ok": true, "data": {...receipt...}}`
//! - Error: `{"ok": false, "error": {"code": "...", "message": "...", "details": ...}}`
//!
//! ## Parsing
//!
//! - Missing keys use defaults
//! - Values of the wrong JSON type return errors
//! - An unknown metric name or an out-of-range threshold falls back to its
//!   default and is reported in the receipt's `warnings`

use std::path::PathBuf;

use serde_json::Value;

use crate::error::{ErrorCode, ResponseEnvelope, TokdupError};
use crate::{Record, cluster_inputs, cluster_records};
use tokdup_settings::{
    ClusterSettings, DEFAULT_MIN_TOKENS, DEFAULT_THRESHOLD_0, DEFAULT_THRESHOLD_1, InputSettings,
    mode_or_default,
};

/// Run a tokdup operation with JSON arguments, returning JSON output.
///
/// # Modes
///
/// * `cluster` - cluster either inline `records` (`[{"id": .., "tokens": [..]}]`)
///   or the files listed in `paths`
/// * `version` - tool and schema versions
///
/// # Example
///
/// ```
/// use tokdup_core::ffi::run_json;
///
/// let out = run_json("cluster", r#"{"records": [], "mode": "cosine"}"#);
/// assert!(out.starts_with(r#"{"ok":true"#));
/// ```
pub fn run_json(mode: &str, args_json: &str) -> String {
    match run_json_inner(mode, args_json) {
        Ok(data) => ResponseEnvelope::success(data).to_json(),
        Err(err) => ResponseEnvelope::error(&err).to_json(),
    }
}

fn run_json_inner(mode: &str, args_json: &str) -> Result<Value, TokdupError> {
    let args: Value = serde_json::from_str(args_json)?;

    match mode {
        "cluster" => {
            let mut warnings = Vec::new();
            let settings = parse_cluster_settings(&args, &mut warnings)?;
            let mut receipt = match args.get("records") {
                Some(records) if !records.is_null() => {
                    let records = parse_records(records)?;
                    cluster_records(records, &settings)?
                }
                _ => {
                    let paths = parse_paths(&args)?;
                    let input = InputSettings {
                        tab: parse_bool(&args, "tab", false)?,
                    };
                    cluster_inputs(&paths, &input, &settings)?
                }
            };
            if !warnings.is_empty() {
                warnings.append(&mut receipt.warnings);
                receipt.warnings = warnings;
            }
            Ok(serde_json::to_value(&receipt)?)
        }
        "version" => Ok(serde_json::json!({
            "version": version(),
            "schema_version": schema_version(),
        })),
        _ => Err(TokdupError::unknown_mode(mode)),
    }
}

// ============================================================================
// Parsing helpers
// ============================================================================

fn parse_cluster_settings(
    args: &Value,
    warnings: &mut Vec<String>,
) -> Result<ClusterSettings, TokdupError> {
    let mode = match parse_optional_string(args, "mode")? {
        Some(raw) => mode_or_default(&raw, warnings),
        None => Default::default(),
    };
    Ok(ClusterSettings {
        mode,
        threshold_0: parse_f64(args, "threshold", DEFAULT_THRESHOLD_0)?,
        threshold_1: parse_f64(args, "multiset_threshold", DEFAULT_THRESHOLD_1)?,
        min_tokens: parse_usize(args, "min_tokens", DEFAULT_MIN_TOKENS)?,
    })
}

fn parse_records(value: &Value) -> Result<Vec<Record>, TokdupError> {
    serde_json::from_value(value.clone()).map_err(|e| {
        TokdupError::with_details(
            ErrorCode::InvalidSettings,
            "Invalid value for 'records': expected an array of {\"id\", \"tokens\"} objects",
            e.to_string(),
        )
    })
}

/// `paths` must list at least one input; stdin is not available to bindings.
fn parse_paths(args: &Value) -> Result<Vec<PathBuf>, TokdupError> {
    let paths = match args.get("paths") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|v| v.as_str().map(PathBuf::from))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| TokdupError::invalid_field("paths", "an array of strings"))?,
        Some(_) => return Err(TokdupError::invalid_field("paths", "an array of strings")),
    };
    if paths.is_empty() {
        return Err(TokdupError::new(
            ErrorCode::InvalidSettings,
            "Either 'records' or 'paths' is required",
        ));
    }
    if let Some(missing) = paths.iter().find(|p| !p.exists()) {
        return Err(TokdupError::path_not_found(&missing.display().to_string()));
    }
    Ok(paths)
}

fn parse_bool(args: &Value, field: &str, default: bool) -> Result<bool, TokdupError> {
    match args.get(field) {
        None | Some(Value::Null) => Ok(default),
        Some(v) => v
            .as_bool()
            .ok_or_else(|| TokdupError::invalid_field(field, "a boolean (true or false)")),
    }
}

fn parse_usize(args: &Value, field: &str, default: usize) -> Result<usize, TokdupError> {
    match args.get(field) {
        None | Some(Value::Null) => Ok(default),
        Some(v) => v
            .as_u64()
            .map(|n| n as usize)
            .ok_or_else(|| TokdupError::invalid_field(field, "a non-negative integer")),
    }
}

fn parse_f64(args: &Value, field: &str, default: f64) -> Result<f64, TokdupError> {
    match args.get(field) {
        None | Some(Value::Null) => Ok(default),
        Some(v) => v
            .as_f64()
            .ok_or_else(|| TokdupError::invalid_field(field, "a number")),
    }
}

fn parse_optional_string(args: &Value, field: &str) -> Result<Option<String>, TokdupError> {
    match args.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v
            .as_str()
            .map(|s| Some(s.to_string()))
            .ok_or_else(|| TokdupError::invalid_field(field, "a string")),
    }
}

/// Get the tokdup version string.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Get the schema version.
pub fn schema_version() -> u32 {
    tokdup_types::SCHEMA_VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_f64_accepts_integers() {
        let args = serde_json::json!({"threshold": 1});
        assert_eq!(parse_f64(&args, "threshold", 0.9).unwrap(), 1.0);
    }

    #[test]
    fn parse_f64_rejects_strings() {
        let args = serde_json::json!({"threshold": "high"});
        let err = parse_f64(&args, "threshold", 0.9).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSettings);
        assert!(err.message.contains("'threshold'"));
    }

    #[test]
    fn unknown_mode_string_falls_back() {
        let mut warnings = Vec::new();
        let args = serde_json::json!({"mode": "hamming"});
        let s = parse_cluster_settings(&args, &mut warnings).unwrap();
        assert_eq!(s.mode, tokdup_types::MetricMode::Jaccard);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn missing_inputs_are_rejected() {
        let err = parse_paths(&serde_json::json!({})).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSettings);
    }
}
