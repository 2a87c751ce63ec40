//! Optional-path access into untyped JSON documents.
//!
//! Upstream documents leave fields out freely. Every optional column is read
//! through [`get_opt`] so a missing or mistyped value becomes `None` instead
//! of an error, and each field is looked up independently of the others.

use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Walks `path` from `root`. Segments that parse as integers index arrays,
/// all others look up object keys.
pub fn get_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(root, |node, segment| match node {
        Value::Object(map) => map.get(*segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
    .filter(|value| !value.is_null())
}

/// Value at `path` converted to `T`, or `None` when absent or of another type.
pub fn get_opt<T: DeserializeOwned>(root: &Value, path: &[&str]) -> Option<T> {
    get_path(root, path).and_then(|value| T::deserialize(value).ok())
}

/// Value at `path` converted to `T`, or `default` when absent.
pub fn get_or_default<T: DeserializeOwned>(root: &Value, path: &[&str], default: T) -> T {
    get_opt(root, path).unwrap_or(default)
}

/// Integer at `path`, also accepting numeric strings such as `"8"`.
pub fn get_i64(root: &Value, path: &[&str]) -> Option<i64> {
    match get_path(root, path)? {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Float at `path`, also accepting numeric strings.
pub fn get_f64(root: &Value, path: &[&str]) -> Option<f64> {
    match get_path(root, path)? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// String at `path`. Numbers are rendered, so `jerseyNumber: 7` reads as `"7"`.
pub fn get_string(root: &Value, path: &[&str]) -> Option<String> {
    match get_path(root, path)? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Integer at `path` that the record cannot be built without.
pub fn require_i64(root: &Value, path: &[&str], context: &str) -> Result<i64, AppError> {
    get_i64(root, path).ok_or_else(|| missing(path, context))
}

/// String at `path` that the record cannot be built without.
pub fn require_string(root: &Value, path: &[&str], context: &str) -> Result<String, AppError> {
    get_string(root, path).ok_or_else(|| missing(path, context))
}

fn missing(path: &[&str], context: &str) -> AppError {
    AppError::schema_violation(context, format!("missing required field `{}`", path.join(".")))
}

/// True for `null`, `{}` and `[]`.
pub fn is_empty_document(document: &Value) -> bool {
    match document {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc() -> Value {
        json!({
            "liveData": {
                "plays": {
                    "allPlays": [
                        {"about": {"inning": 1}, "playEvents": [{"details": {"code": "B"}}]},
                        {"about": {"inning": 2}}
                    ]
                }
            },
            "hitData": {"location": "8", "launchSpeed": 101.4, "totalDistance": 402.0},
            "person": {"jerseyNumber": 27, "note": null}
        })
    }

    #[test]
    fn test_get_path_objects_and_arrays() {
        let doc = doc();
        let path = ["liveData", "plays", "allPlays", "1", "about", "inning"];
        assert_eq!(get_i64(&doc, &path), Some(2));
        let code = ["liveData", "plays", "allPlays", "0", "playEvents", "0", "details", "code"];
        assert_eq!(get_string(&doc, &code), Some("B".to_string()));
    }

    #[test]
    fn test_missing_paths_yield_none() {
        let doc = doc();
        assert_eq!(get_path(&doc, &["liveData", "plays", "allPlays", "5"]), None);
        assert_eq!(get_path(&doc, &["liveData", "plays", "allPlays", "x"]), None);
        assert_eq!(get_path(&doc, &["hitData", "launchSpeed", "deeper"]), None);
        assert_eq!(get_path(&doc, &["person", "note"]), None);
        assert_eq!(get_f64(&doc, &["pitchData", "startSpeed"]), None);
    }

    #[test]
    fn test_lenient_numbers() {
        let doc = doc();
        assert_eq!(get_i64(&doc, &["hitData", "location"]), Some(8));
        assert_eq!(get_i64(&doc, &["hitData", "totalDistance"]), Some(402));
        assert_eq!(get_i64(&doc, &["hitData", "launchSpeed"]), None);
        assert_eq!(get_f64(&doc, &["hitData", "launchSpeed"]), Some(101.4));
        assert_eq!(get_string(&doc, &["person", "jerseyNumber"]), Some("27".to_string()));
    }

    #[test]
    fn test_get_or_default() {
        let doc = doc();
        assert_eq!(get_or_default(&doc, &["count", "balls"], 0i64), 0);
        assert!(!get_or_default(&doc, &["details", "isPitch"], false));
        let typed: Option<Vec<Value>> = get_opt(&doc, &["liveData", "plays", "allPlays"]);
        assert_eq!(typed.map(|plays| plays.len()), Some(2));
    }

    #[test]
    fn test_required_fields() {
        let doc = doc();
        let err = require_i64(&doc, &["gameData", "game", "pk"], "live feed").unwrap_err();
        assert!(matches!(err, AppError::SchemaViolation { .. }));
        assert!(err.to_string().contains("gameData.game.pk"));
    }

    #[test]
    fn test_is_empty_document() {
        assert!(is_empty_document(&Value::Null));
        assert!(is_empty_document(&json!({})));
        assert!(is_empty_document(&json!([])));
        assert!(!is_empty_document(&doc()));
    }
}
