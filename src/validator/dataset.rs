//! Dataset verification: structure, option counts, answer integrity

use super::schema::RecordSchema;
use crate::models::{
    question_key, DatasetConfig, ErrorCategory, Question, ValidationError, ValidationResult,
    VerifyConfig,
};
use crate::services::load_records;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

/// Whether a file holds the expected number of records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CountStatus {
    Ok,
    Check,
}

impl CountStatus {
    pub fn name(&self) -> &'static str {
        match self {
            CountStatus::Ok => "OK",
            CountStatus::Check => "CHECK",
        }
    }
}

/// Verification result for one dataset file
#[derive(Debug, Clone, Serialize)]
pub struct DatasetReport {
    pub name: String,
    pub path: PathBuf,
    pub count: usize,
    /// Option count -> number of records
    pub option_histogram: BTreeMap<usize, usize>,
    /// 0-based indices of records with too few options
    pub short_records: Vec<usize>,
    pub status: CountStatus,
    /// Whether the first record has every required key (`None` when empty)
    pub structure_valid: Option<bool>,
    pub findings: Vec<ValidationError>,
}

impl DatasetReport {
    fn new(dataset: &DatasetConfig) -> Self {
        Self {
            name: dataset.name.clone(),
            path: dataset.path.clone(),
            count: 0,
            option_histogram: BTreeMap::new(),
            short_records: Vec::new(),
            status: CountStatus::Check,
            structure_valid: None,
            findings: Vec::new(),
        }
    }

    fn push(&mut self, message: impl Into<String>, index: Option<usize>, category: ErrorCategory) {
        self.findings
            .push(ValidationError::new(message, self.path.clone(), index, category));
    }

    pub fn result(&self) -> ValidationResult {
        ValidationResult::new(self.findings.clone())
    }

    pub fn is_valid(&self) -> bool {
        self.result().is_valid()
    }
}

/// Verification result across all datasets
#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    pub generated_at: DateTime<Utc>,
    pub datasets: Vec<DatasetReport>,
    pub total: usize,
    pub target_total: usize,
}

impl VerifyReport {
    /// Total records as a percentage of the combined target
    pub fn achievement(&self) -> f64 {
        if self.target_total == 0 {
            return 0.0;
        }
        self.total as f64 * 100.0 / self.target_total as f64
    }

    /// All findings from every dataset
    pub fn result(&self) -> ValidationResult {
        ValidationResult::new(
            self.datasets
                .iter()
                .flat_map(|d| d.findings.iter().cloned())
                .collect(),
        )
    }

    /// No dataset has a high-severity finding
    pub fn is_valid(&self) -> bool {
        self.datasets.iter().all(DatasetReport::is_valid)
    }
}

/// Read-only verifier for dataset files
pub struct DatasetVerifier {
    config: VerifyConfig,
    schema: RecordSchema,
}

impl DatasetVerifier {
    pub fn new(config: VerifyConfig) -> Result<Self> {
        Ok(Self {
            config,
            schema: RecordSchema::new()?,
        })
    }

    /// Verify every dataset; never modifies a file
    pub fn verify(&self, datasets: &[DatasetConfig]) -> VerifyReport {
        let reports: Vec<DatasetReport> = datasets.iter().map(|d| self.verify_dataset(d)).collect();
        let total = reports.iter().map(|r| r.count).sum();

        VerifyReport {
            generated_at: Utc::now(),
            target_total: self.config.target_count * datasets.len(),
            datasets: reports,
            total,
        }
    }

    pub fn verify_dataset(&self, dataset: &DatasetConfig) -> DatasetReport {
        let mut report = DatasetReport::new(dataset);

        let records = match load_records(&dataset.path) {
            Ok(records) => records,
            Err(e) => {
                report.push(e.to_string(), None, ErrorCategory::Unreadable);
                return report;
            }
        };
        self.check_records(&records, &mut report);
        report
    }

    /// Run every check over already-loaded records
    pub fn check_records(&self, records: &[JsonValue], report: &mut DatasetReport) {
        report.count = records.len();
        report.status = if records.len() == self.config.target_count {
            CountStatus::Ok
        } else {
            report.push(
                format!(
                    "{} records, expected {}",
                    records.len(),
                    self.config.target_count
                ),
                None,
                ErrorCategory::UnexpectedSize,
            );
            CountStatus::Check
        };

        if let Some(first) = records.first() {
            let missing: Vec<&str> = self
                .config
                .required_keys
                .iter()
                .filter(|key| first.get(key.as_str()).is_none())
                .map(String::as_str)
                .collect();
            report.structure_valid = Some(missing.is_empty());
            if !missing.is_empty() {
                report.push(
                    format!("Missing required keys: {}", missing.join(", ")),
                    Some(0),
                    ErrorCategory::MissingKey,
                );
            }
        }

        let mut seen: HashMap<String, usize> = HashMap::new();
        for (idx, record) in records.iter().enumerate() {
            let option_count = record
                .get("options")
                .and_then(JsonValue::as_array)
                .map_or(0, Vec::len);
            *report.option_histogram.entry(option_count).or_insert(0) += 1;
            if option_count < self.config.min_options {
                report.short_records.push(idx);
                report.push(
                    format!("Only {} options", option_count),
                    Some(idx),
                    ErrorCategory::TooFewOptions,
                );
            }

            let violations = self.schema.violations(record);
            if !violations.is_empty() {
                for violation in violations {
                    report.push(violation, Some(idx), ErrorCategory::SchemaViolation);
                }
                continue;
            }

            let Ok(question) = serde_json::from_value::<Question>(record.clone()) else {
                continue;
            };

            if !question.answer_in_options() {
                report.push(
                    "Answer is not one of the options",
                    Some(idx),
                    ErrorCategory::AnswerNotInOptions,
                );
            }
            if !question.has_consistent_count() {
                report.push(
                    format!(
                        "correctCount {} does not match {} answer(s)",
                        question.correct_count(),
                        question.answer.len()
                    ),
                    Some(idx),
                    ErrorCategory::CountMismatch,
                );
            }
            if let Some(first) = seen.get(&question_key(&question.question)) {
                report.push(
                    format!("Duplicate of Q{}", first + 1),
                    Some(idx),
                    ErrorCategory::DuplicateQuestion,
                );
            } else {
                seen.insert(question_key(&question.question), idx);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn verifier() -> DatasetVerifier {
        DatasetVerifier::new(VerifyConfig::default()).unwrap()
    }

    fn write(dir: &TempDir, name: &str, value: &JsonValue) -> DatasetConfig {
        let path = dir.path().join(name);
        fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
        DatasetConfig::new(name, path)
    }

    fn record(question: &str, options: &[&str], answer: JsonValue) -> JsonValue {
        json!({
            "question": question,
            "options": options,
            "answer": answer,
            "explanation": "Because."
        })
    }

    #[test]
    fn test_flags_record_with_three_options() {
        let dir = TempDir::new().unwrap();
        let dataset = write(
            &dir,
            "one.json",
            &json!([record("Which one?", &["a1", "b1", "c1"], json!("a1"))]),
        );

        let report = verifier().verify(&[dataset]);
        let file = &report.datasets[0];

        assert_eq!(file.short_records, vec![0]);
        assert_eq!(file.option_histogram.get(&3), Some(&1));
        assert!(!report.is_valid());
        let short = report.result().by_category(ErrorCategory::TooFewOptions).len();
        assert_eq!(short, 1);
    }

    #[test]
    fn test_clean_file_passes() {
        let dir = TempDir::new().unwrap();
        let config = VerifyConfig {
            target_count: 2,
            ..VerifyConfig::default()
        };
        let dataset = write(
            &dir,
            "good.json",
            &json!([
                record("First?", &["a", "b", "c", "d"], json!("a")),
                json!({
                    "question": "Second?",
                    "options": ["a", "b", "c", "d", "e"],
                    "answer": ["b", "c"],
                    "correctCount": 2,
                    "explanation": "x"
                }),
            ]),
        );

        let report = DatasetVerifier::new(config).unwrap().verify(&[dataset]);
        assert!(report.is_valid());
        assert!(!report.result().has_errors());
        assert_eq!(report.datasets[0].status, CountStatus::Ok);
        assert_eq!(report.datasets[0].structure_valid, Some(true));
        assert_eq!(report.achievement(), 100.0);
    }

    #[test]
    fn test_answer_and_count_defects() {
        let dir = TempDir::new().unwrap();
        let dataset = write(
            &dir,
            "bad.json",
            &json!([
                record("First?", &["a", "b", "c", "d"], json!("z")),
                json!({
                    "question": "Second?",
                    "options": ["a", "b", "c", "d"],
                    "answer": ["a", "b"],
                    "correctCount": 3,
                    "explanation": "x"
                }),
                record("  FIRST? ", &["a", "b", "c", "d"], json!("a")),
            ]),
        );

        let result = verifier().verify(&[dataset]).result();
        assert_eq!(result.by_category(ErrorCategory::AnswerNotInOptions)[0].index, Some(0));
        assert_eq!(result.by_category(ErrorCategory::CountMismatch)[0].index, Some(1));
        let dup = result.by_category(ErrorCategory::DuplicateQuestion);
        assert_eq!(dup.len(), 1);
        assert_eq!(dup[0].index, Some(2));
        assert_eq!(dup[0].severity, Severity::Medium);
    }

    #[test]
    fn test_missing_keys_and_schema() {
        let dir = TempDir::new().unwrap();
        let dataset = write(
            &dir,
            "keys.json",
            &json!([{ "question": "Q?", "options": ["a", "b", "c", "d"], "answer": 7 }]),
        );

        let report = verifier().verify(&[dataset]);
        let file = &report.datasets[0];
        assert_eq!(file.structure_valid, Some(false));
        let result = file.result();
        assert_eq!(result.by_category(ErrorCategory::MissingKey).len(), 1);
        assert!(!result.by_category(ErrorCategory::SchemaViolation).is_empty());
        assert!(!result.is_valid());
    }

    #[test]
    fn test_unreadable_file_and_totals() {
        let dir = TempDir::new().unwrap();
        let missing = DatasetConfig::new("missing", dir.path().join("nope.json"));
        let object = write(&dir, "object.json", &json!({ "question": "Q?" }));

        let report = verifier().verify(&[missing, object]);
        assert_eq!(report.total, 0);
        assert_eq!(report.target_total, 600);
        assert_eq!(report.achievement(), 0.0);
        for file in &report.datasets {
            assert_eq!(file.result().by_category(ErrorCategory::Unreadable).len(), 1);
        }
        assert!(!report.is_valid());
    }

    #[test]
    fn test_size_mismatch_is_low_only() {
        let dir = TempDir::new().unwrap();
        let dataset = write(
            &dir,
            "small.json",
            &json!([record("Only?", &["a", "b", "c", "d"], json!("a"))]),
        );

        let report = verifier().verify(&[dataset]);
        assert_eq!(report.datasets[0].status, CountStatus::Check);
        assert!(report.is_valid());
        assert_eq!(report.result().count_by_severity(Severity::Low), 1);
    }
}
