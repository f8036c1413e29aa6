//! JSON Schema validation for question records

use anyhow::Result;
use jsonschema::Validator;
use serde_json::Value as JsonValue;

/// Shape every record in a dataset file must have
pub const RECORD_SCHEMA: &str = r#"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "title": "Question record",
  "type": "object",
  "required": ["question", "options", "answer"],
  "properties": {
    "question": { "type": "string", "minLength": 1 },
    "options": {
      "type": "array",
      "items": { "type": "string" }
    },
    "answer": {
      "anyOf": [
        { "type": "string" },
        {
          "type": "array",
          "items": { "type": "string" },
          "minItems": 1
        }
      ]
    },
    "correctCount": { "type": "integer", "minimum": 1 },
    "explanation": { "type": "string" }
  }
}"#;

/// Compiled record schema
pub struct RecordSchema {
    validator: Validator,
}

impl RecordSchema {
    /// Compile the built-in record schema
    pub fn new() -> Result<Self> {
        let schema: JsonValue = serde_json::from_str(RECORD_SCHEMA)?;
        Self::from_value(&schema)
    }

    pub fn from_value(schema: &JsonValue) -> Result<Self> {
        let validator = Validator::new(schema)
            .map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))?;
        Ok(Self { validator })
    }

    /// Validate one record, returning a message per violation
    pub fn violations(&self, record: &JsonValue) -> Vec<String> {
        self.validator
            .iter_errors(record)
            .map(|error| {
                let path = error.instance_path.to_string();
                if path.is_empty() {
                    error.to_string()
                } else {
                    format!("{}: {}", path, error)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_valid_records() {
        let schema = RecordSchema::new().unwrap();
        let single = json!({
            "question": "Q?",
            "options": ["a", "b"],
            "answer": "a",
            "explanation": "x"
        });
        let multiple = json!({
            "question": "Q?",
            "options": ["a", "b", "c"],
            "answer": ["a", "b"],
            "correctCount": 2
        });
        assert!(schema.violations(&single).is_empty());
        assert!(schema.violations(&multiple).is_empty());
    }

    #[test]
    fn test_reports_shape_errors() {
        let schema = RecordSchema::new().unwrap();
        let record = json!({
            "question": "Q?",
            "options": "a, b",
            "answer": 3
        });
        let violations = schema.violations(&record);
        assert_eq!(violations.len(), 2);
        assert!(violations.iter().any(|v| v.starts_with("/options")));
        assert!(violations.iter().any(|v| v.starts_with("/answer")));
    }

    #[test]
    fn test_reports_missing_required() {
        let schema = RecordSchema::new().unwrap();
        let violations = schema.violations(&json!({ "question": "Q?" }));
        assert!(!violations.is_empty());
        assert!(violations.iter().all(|v| v.contains("required")));
    }
}
