use serde_json::Value;

use crate::error::Result;

/// Car-buying preferences decoded from the request body.
///
/// Every field is already coerced: no `null`, wrong-typed or untrimmed value survives decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarPreferences {
    pub budget: String,
    pub picks: Vec<String>,
    pub notes: String,
}

impl CarPreferences {
    /// Decode a raw body. Empty bodies and non-object JSON give the default record;
    /// only a body that is not JSON at all is an error.
    pub fn from_json(body: &[u8]) -> Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        let value: Value = serde_json::from_slice(body)?;
        Ok(Self::from_value(&value))
    }

    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        let budget = obj.get("budget").and_then(scalar_text).unwrap_or_default();
        let notes = obj.get("notes").and_then(scalar_text).unwrap_or_default();
        let picks = obj
            .get("picks")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(scalar_text).collect())
            .unwrap_or_default();

        Self {
            budget: budget.trim().to_string(),
            picks,
            notes: notes.trim().to_string(),
        }
    }

    pub fn budget_or_placeholder(&self) -> &str {
        if self.budget.is_empty() {
            "Not provided"
        } else {
            &self.budget
        }
    }

    pub fn picks_or_placeholder(&self) -> String {
        if self.picks.is_empty() {
            "None selected".to_string()
        } else {
            self.picks.join(", ")
        }
    }

    pub fn notes_or_placeholder(&self) -> &str {
        if self.notes.is_empty() {
            "None"
        } else {
            &self.notes
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
