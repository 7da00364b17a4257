//! Diff generation for audit logging
//!
//! Summarizes which top-level fields of an account changed between two
//! JSON snapshots.

use serde_json::Value;

/// Fields that change on every write and would only add noise to a diff
const IGNORED_FIELDS: &[&str] = &["updated_at"];

/// Generate a one-line summary of the changed fields
///
/// Returns `None` when nothing besides bookkeeping timestamps changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let (Value::Object(before_obj), Value::Object(after_obj)) = (before, after) else {
        return (before != after)
            .then(|| format!("{} -> {}", format_value(before), format_value(after)));
    };

    let mut changes = Vec::new();

    for (key, before_val) in before_obj {
        if IGNORED_FIELDS.contains(&key.as_str()) {
            continue;
        }
        match after_obj.get(key) {
            Some(after_val) if after_val != before_val => changes.push(format!(
                "{}: {} -> {}",
                key,
                format_value(before_val),
                format_value(after_val)
            )),
            Some(_) => {}
            None => changes.push(format!("{}: {} -> (removed)", key, format_value(before_val))),
        }
    }

    for (key, after_val) in after_obj {
        if !before_obj.contains_key(key) && !IGNORED_FIELDS.contains(&key.as_str()) {
            changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
        }
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) if s.chars().count() > 50 => {
            let head: String = s.chars().take(47).collect();
            format!("\"{}...\"", head)
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_changed_fields() {
        let before = json!({"label": "Wallet", "sort_key": 0, "updated_at": "a"});
        let after = json!({"label": "Purse", "sort_key": 0, "updated_at": "b"});
        assert_eq!(
            generate_diff(&before, &after),
            Some("label: \"Wallet\" -> \"Purse\"".to_string())
        );
    }

    #[test]
    fn test_timestamp_only_change_is_no_diff() {
        let before = json!({"label": "Wallet", "updated_at": "a"});
        let after = json!({"label": "Wallet", "updated_at": "b"});
        assert_eq!(generate_diff(&before, &after), None);
    }

    #[test]
    fn test_long_strings_truncated() {
        let long = "x".repeat(80);
        let before = json!({"description": ""});
        let diff = generate_diff(&before, &json!({"description": long})).unwrap();
        assert!(diff.ends_with("...\""));
    }

    #[test]
    fn test_added_and_removed_fields() {
        let diff = generate_diff(&json!({"a": 1}), &json!({"b": 2})).unwrap();
        assert!(diff.contains("a: 1 -> (removed)"));
        assert!(diff.contains("b: (added) -> 2"));
    }
}
