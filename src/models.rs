use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    Boolean,
    Number,
    #[serde(other)]
    Text,
}

impl ParameterKind {
    pub fn default_value(self) -> FieldValue {
        match self {
            ParameterKind::Boolean => FieldValue::Bool(false),
            _ => FieldValue::Text(String::new()),
        }
    }

    pub fn input_widget(self) -> InputWidget {
        match self {
            ParameterKind::Boolean => InputWidget::YesNoSelect,
            ParameterKind::Number => InputWidget::NumberField,
            ParameterKind::Text => InputWidget::TextField,
        }
    }
}

/// Rendering strategy for a parameter; the crate never renders, it only
/// names the widget a view layer should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputWidget {
    YesNoSelect,
    NumberField,
    TextField,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ParameterKind,
}

/// Raw in-progress value of one form entry, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Bool(bool),
    Text(String),
}

impl From<bool> for FieldValue {
    fn from(flag: bool) -> Self {
        FieldValue::Bool(flag)
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormEntry {
    pub id: String,
    pub value: FieldValue,
}

#[derive(Debug, Clone)]
pub struct FormData {
    pub date: NaiveDate,
    pub entries: Vec<FormEntry>,
}

impl Default for FormData {
    fn default() -> Self {
        Self {
            date: Local::now().date_naive(),
            entries: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordValue {
    pub id: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub data: Vec<RecordValue>,
    pub overwrite: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_widget_follows_parameter_kind() {
        assert_eq!(ParameterKind::Boolean.input_widget(), InputWidget::YesNoSelect);
        assert_eq!(ParameterKind::Number.input_widget(), InputWidget::NumberField);
        assert_eq!(ParameterKind::Text.input_widget(), InputWidget::TextField);
    }

    #[test]
    fn unknown_schema_type_deserializes_as_text() {
        let param: Parameter =
            serde_json::from_str(r#"{"id":"p9","name":"Mood","type":"scale"}"#).unwrap();
        assert_eq!(param.kind, ParameterKind::Text);
        assert_eq!(param.kind.input_widget(), InputWidget::TextField);
    }
}
