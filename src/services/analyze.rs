//! Question quality heuristics

use crate::models::{AnalyzeConfig, Question};
use serde::Serialize;

/// Characters of question text kept for an example
const EXAMPLE_CHARS: usize = 60;

/// Quality class assigned to a question; the first matching rule wins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Quality {
    TooShort,
    NoScenario,
    WeakOpener,
    Good,
}

impl Quality {
    pub fn label(&self) -> &'static str {
        match self {
            Quality::TooShort => "Too simple/short",
            Quality::NoScenario => "No scenario",
            Quality::WeakOpener => "Poor wording",
            Quality::Good => "Good questions",
        }
    }
}

/// A flagged question: 1-based position plus a text excerpt
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityExample {
    pub number: usize,
    pub excerpt: String,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct QualityReport {
    pub sampled: usize,
    pub too_short: Vec<QualityExample>,
    pub no_scenario: Vec<QualityExample>,
    pub weak_opener: Vec<QualityExample>,
    pub good: Vec<QualityExample>,
}

impl QualityReport {
    pub fn examples(&self, quality: Quality) -> &[QualityExample] {
        match quality {
            Quality::TooShort => &self.too_short,
            Quality::NoScenario => &self.no_scenario,
            Quality::WeakOpener => &self.weak_opener,
            Quality::Good => &self.good,
        }
    }

    /// Share of the sample in `quality`, as a percentage
    pub fn percent(&self, quality: Quality) -> f64 {
        if self.sampled == 0 {
            return 0.0;
        }
        self.examples(quality).len() as f64 * 100.0 / self.sampled as f64
    }
}

/// Classify a single question text
pub fn classify(text: &str, config: &AnalyzeConfig) -> Quality {
    let lower = text.to_lowercase();
    if text.chars().count() < config.min_question_chars {
        Quality::TooShort
    } else if !config
        .scenario_keywords
        .iter()
        .any(|k| lower.contains(&k.to_lowercase()))
    {
        Quality::NoScenario
    } else if config.weak_openers.iter().any(|o| text.starts_with(o.as_str())) {
        Quality::WeakOpener
    } else {
        Quality::Good
    }
}

/// Classify the first `sample_size` records
pub fn analyze(records: &[Question], config: &AnalyzeConfig) -> QualityReport {
    let mut report = QualityReport::default();

    for (idx, q) in records.iter().take(config.sample_size).enumerate() {
        let example = QualityExample {
            number: idx + 1,
            excerpt: q.question.chars().take(EXAMPLE_CHARS).collect(),
        };
        match classify(&q.question, config) {
            Quality::TooShort => report.too_short.push(example),
            Quality::NoScenario => report.no_scenario.push(example),
            Quality::WeakOpener => report.weak_opener.push(example),
            Quality::Good => report.good.push(example),
        }
        report.sampled += 1;
    }

    report
}
