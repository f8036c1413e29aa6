use serde::{Deserialize, Serialize};

/// The correct answer(s) of a question
///
/// Serialized untagged so that dataset files keep their legacy shape:
/// a JSON string for single-answer questions and an array of strings for
/// multi-select questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    /// Exactly one correct option
    Single(String),
    /// Multi-select (2-3 correct options), in display order
    Multiple(Vec<String>),
}

impl Answer {
    /// Number of correct options
    pub fn len(&self) -> usize {
        match self {
            Answer::Single(_) => 1,
            Answer::Multiple(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the correct option texts
    pub fn values(&self) -> Vec<&str> {
        match self {
            Answer::Single(value) => vec![value.as_str()],
            Answer::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }

    /// First correct option, if any
    pub fn first(&self) -> Option<&str> {
        match self {
            Answer::Single(value) => Some(value.as_str()),
            Answer::Multiple(values) => values.first().map(String::as_str),
        }
    }

    pub fn is_single(&self) -> bool {
        matches!(self, Answer::Single(_))
    }

    /// Check that every correct option appears verbatim in `options`
    pub fn is_subset_of(&self, options: &[String]) -> bool {
        self.values()
            .iter()
            .all(|value| options.iter().any(|opt| opt == value))
    }
}

impl Default for Answer {
    fn default() -> Self {
        Answer::Single(String::new())
    }
}

/// One multiple-choice question record as stored in a dataset file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,

    #[serde(default)]
    pub options: Vec<String>,

    #[serde(default)]
    pub answer: Answer,

    /// Mirrors `answer.len()`; absent in legacy single-answer records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_count: Option<usize>,

    #[serde(default)]
    pub explanation: String,
}

impl Question {
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        answer: Answer,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            options,
            answer,
            correct_count: None,
            explanation: explanation.into(),
        }
    }

    /// Effective number of correct answers (`correctCount`, defaulting to 1)
    pub fn correct_count(&self) -> usize {
        self.correct_count.unwrap_or(1)
    }

    /// Whether the stored `correctCount` agrees with the answer's shape
    pub fn has_consistent_count(&self) -> bool {
        match &self.answer {
            Answer::Single(_) => self.correct_count() == 1,
            Answer::Multiple(values) => self.correct_count == Some(values.len()),
        }
    }

    /// Re-derive `correctCount` from the answer
    pub fn sync_correct_count(&mut self) {
        self.correct_count = Some(self.answer.len());
    }

    pub fn answer_in_options(&self) -> bool {
        self.answer.is_subset_of(&self.options)
    }
}

/// Normalized key used to detect duplicate questions
///
/// Lowercased, trimmed, whitespace collapsed, first 200 characters.
pub fn question_key(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(200)
        .collect()
}
