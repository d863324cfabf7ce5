use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Known result fields in display order; anything unlisted follows in the
/// order the result object serialises them.
const FIELD_ORDER: [&str; 14] = [
    "base_loan",
    "adjusted_loan",
    "ltv",
    "upfront_fee",
    "p_i",
    "taxes",
    "hoi",
    "hoa",
    "mi",
    "housing_total",
    "front_end",
    "back_end",
    "monthly_payment",
    "principal",
];

/// Format output as a table using the tabled crate.
pub fn print_table(value: &Value) {
    let (result, envelope) = match value.get("result") {
        Some(result) => (result, Some(value)),
        None => (value, None),
    };

    match result {
        Value::Object(map) => {
            let mut builder = Builder::default();
            builder.push_record(["Field", "Value"]);
            for key in ordered_keys(map) {
                builder.push_record([key.as_str(), &format_value(&map[key.as_str()])]);
            }
            println!("{}", Table::from(builder));
        }
        other => println!("{}", format_value(other)),
    }

    if let Some(envelope) = envelope {
        if let Some(Value::Array(warnings)) = envelope.get("warnings") {
            if !warnings.is_empty() {
                println!("\nWarnings:");
                for w in warnings {
                    if let Value::String(s) = w {
                        println!("  - {}", s);
                    }
                }
            }
        }

        if let Some(Value::String(methodology)) = envelope.get("methodology") {
            println!("\nMethodology: {}", methodology);
        }
    }
}

fn ordered_keys(map: &serde_json::Map<String, Value>) -> Vec<String> {
    let mut keys: Vec<String> = FIELD_ORDER
        .iter()
        .filter(|k| map.contains_key(**k))
        .map(|k| k.to_string())
        .collect();
    for key in map.keys() {
        if !FIELD_ORDER.contains(&key.as_str()) {
            keys.push(key.clone());
        }
    }
    keys
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}
