use crate::models::{FieldValue, FormEntry, Parameter, ParameterKind, RecordValue};

pub fn init_entries(parameters: &[Parameter]) -> Vec<FormEntry> {
    parameters
        .iter()
        .map(|param| FormEntry {
            id: param.id.clone(),
            value: param.kind.default_value(),
        })
        .collect()
}

/// Replaces the value of the entry matching `id`; unknown ids are ignored.
pub fn update_entry(entries: &mut [FormEntry], id: &str, value: FieldValue) {
    if let Some(entry) = entries.iter_mut().find(|entry| entry.id == id) {
        entry.value = value;
    }
}

pub fn normalize(parameters: &[Parameter], entries: &[FormEntry]) -> Vec<RecordValue> {
    entries
        .iter()
        .map(|entry| {
            let kind = parameters
                .iter()
                .find(|param| param.id == entry.id)
                .map(|param| param.kind);

            RecordValue {
                id: entry.id.clone(),
                value: normalize_value(kind, &entry.value),
            }
        })
        .collect()
}

fn normalize_value(kind: Option<ParameterKind>, value: &FieldValue) -> String {
    match kind {
        Some(ParameterKind::Number) => numeric_text(value),
        Some(ParameterKind::Boolean) => truthy(value).to_string(),
        _ => raw_text(value),
    }
}

// Empty input coerces to zero, matching the untouched-field default; other
// non-numeric input becomes the literal "NaN" and the backend stores it as-is.
fn numeric_text(value: &FieldValue) -> String {
    let number = match value {
        FieldValue::Bool(flag) => {
            if *flag {
                1.0
            } else {
                0.0
            }
        }
        FieldValue::Text(text) => {
            let text = text.trim();
            if text.is_empty() {
                0.0
            } else {
                text.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
    };
    number.to_string()
}

fn truthy(value: &FieldValue) -> bool {
    match value {
        FieldValue::Bool(flag) => *flag,
        FieldValue::Text(text) => text == "true",
    }
}

fn raw_text(value: &FieldValue) -> String {
    match value {
        FieldValue::Bool(flag) => flag.to_string(),
        FieldValue::Text(text) => text.clone(),
    }
}
