use serde_json::Value;

/// Print just the key answer value from the output.
///
/// Heuristic: look for the headline field of each calculation in priority
/// order, then fall back to the first field in the result object.
pub fn print_minimal(value: &Value) {
    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let priority_keys = ["housing_total", "front_end", "monthly_payment", "principal"];

    if let Value::Object(map) = result {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        if let Some((_, val)) = map.iter().next() {
            println!("{}", format_minimal(val));
        }
    } else {
        println!("{}", format_minimal(result));
    }
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
