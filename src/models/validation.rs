use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for dataset findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// High severity - the dataset is structurally broken
    High,
    /// Medium severity - data quality problem, should be fixed
    Medium,
    /// Low severity - informational
    Low,
}

impl Severity {
    /// Get display symbol for severity
    pub fn symbol(&self) -> &'static str {
        match self {
            Severity::High => "🔴",
            Severity::Medium => "🟡",
            Severity::Low => "🔵",
        }
    }

    /// Get display name for severity
    pub fn name(&self) -> &'static str {
        match self {
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        }
    }
}

/// Category of dataset finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// File could not be read or parsed
    Unreadable,
    /// Fewer options than the configured minimum
    TooFewOptions,
    /// Required key missing from the sample record
    MissingKey,
    /// Record does not match the record schema
    SchemaViolation,
    /// An answer is not one of the options
    AnswerNotInOptions,
    /// correctCount disagrees with the answer
    CountMismatch,
    /// Question repeats an earlier one
    DuplicateQuestion,
    /// Record count differs from the target
    UnexpectedSize,
}

impl ErrorCategory {
    /// Get display name for category
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCategory::Unreadable => "Unreadable",
            ErrorCategory::TooFewOptions => "Too Few Options",
            ErrorCategory::MissingKey => "Missing Key",
            ErrorCategory::SchemaViolation => "Schema Violation",
            ErrorCategory::AnswerNotInOptions => "Answer Not In Options",
            ErrorCategory::CountMismatch => "Count Mismatch",
            ErrorCategory::DuplicateQuestion => "Duplicate Question",
            ErrorCategory::UnexpectedSize => "Unexpected Size",
        }
    }

    /// Default severity for the category
    pub fn severity(&self) -> Severity {
        match self {
            ErrorCategory::Unreadable
            | ErrorCategory::TooFewOptions
            | ErrorCategory::MissingKey
            | ErrorCategory::SchemaViolation
            | ErrorCategory::AnswerNotInOptions => Severity::High,
            ErrorCategory::CountMismatch | ErrorCategory::DuplicateQuestion => Severity::Medium,
            ErrorCategory::UnexpectedSize => Severity::Low,
        }
    }
}

/// A problem found in a dataset file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    /// Message describing what's wrong
    pub message: String,
    /// Dataset file
    pub file: PathBuf,
    /// Record index (0-based) if the finding concerns a single record
    pub index: Option<usize>,
    /// Severity level
    pub severity: Severity,
    /// Category for grouping
    pub category: ErrorCategory,
}

impl ValidationError {
    /// Create a finding with the category's default severity
    pub fn new(
        message: impl Into<String>,
        file: impl Into<PathBuf>,
        index: Option<usize>,
        category: ErrorCategory,
    ) -> Self {
        Self {
            message: message.into(),
            file: file.into(),
            index,
            severity: category.severity(),
            category,
        }
    }

    /// Format finding for display; records are shown 1-based as Q<n>
    pub fn format(&self) -> String {
        let file_display = self.file.display();
        if let Some(index) = self.index {
            format!(
                "{} [{}] {}: {} Q{} - {}",
                self.severity.symbol(),
                self.severity.name(),
                self.category.name(),
                file_display,
                index + 1,
                self.message
            )
        } else {
            format!(
                "{} [{}] {}: {} - {}",
                self.severity.symbol(),
                self.severity.name(),
                self.category.name(),
                file_display,
                self.message
            )
        }
    }
}

/// Result of validation
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// List of all findings
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// Check if validation passed (no high-severity findings)
    pub fn is_valid(&self) -> bool {
        !self.errors.iter().any(|e| e.severity == Severity::High)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Count findings by severity
    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.errors.iter().filter(|e| e.severity == severity).count()
    }

    /// Findings of one category
    pub fn by_category(&self, category: ErrorCategory) -> Vec<&ValidationError> {
        self.errors
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    /// Format all findings for display
    pub fn format_errors(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.format())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Heuristic thresholds for rejecting answer options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionRules {
    /// Minimum number of characters
    pub min_chars: usize,
    /// More periods than this marks run-on text from a broken PDF
    pub max_periods: usize,
    /// Placeholder values left behind by corrupted source documents
    pub sentinels: Vec<String>,
}

impl Default for OptionRules {
    fn default() -> Self {
        Self {
            min_chars: 5,
            max_periods: 5,
            sentinels: vec!["Mastered".to_string(), "Not Mastered".to_string()],
        }
    }
}
