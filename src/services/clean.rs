//! Dataset cleaning: scrub text, drop corrupted options and records

use crate::models::{Answer, AnswerFallback, CleanConfig, Question};
use crate::parser::{truncate_chars, TextCleaner};
use crate::validator::is_valid_option_with;
use serde::Serialize;

/// Outcome of a cleaning pass
#[derive(Debug, Default, Clone, Serialize)]
pub struct CleanReport {
    pub original: usize,
    pub cleaned: usize,
    /// Question text outside the configured length window
    pub bad_length: usize,
    /// Too few options survived validation
    pub too_few_options: usize,
    /// Answer not among the surviving options and replaced by the first one
    pub answer_fallbacks: usize,
    /// Answer not among the surviving options and the record dropped
    pub answer_discards: usize,
}

impl CleanReport {
    pub fn removed(&self) -> usize {
        self.original - self.cleaned
    }
}

/// Clean every record, dropping the ones that cannot be salvaged
pub fn clean_dataset(records: &[Question], config: &CleanConfig) -> (Vec<Question>, CleanReport) {
    let cleaner = TextCleaner::new();
    let mut report = CleanReport {
        original: records.len(),
        ..CleanReport::default()
    };

    let mut cleaned = Vec::with_capacity(records.len());
    for record in records {
        if let Some(q) = clean_record(record, config, &cleaner, &mut report) {
            cleaned.push(q);
        }
    }

    report.cleaned = cleaned.len();
    (cleaned, report)
}

fn clean_record(
    record: &Question,
    config: &CleanConfig,
    cleaner: &TextCleaner,
    report: &mut CleanReport,
) -> Option<Question> {
    let question = cleaner.clean(&record.question);
    let length = question.chars().count();
    if length < config.min_question_chars || length > config.max_question_chars {
        report.bad_length += 1;
        return None;
    }

    let mut options: Vec<String> = Vec::new();
    for option in &record.options {
        let option = cleaner.clean(option);
        if is_valid_option_with(&option, &config.option_rules)
            && option.chars().count() < config.max_option_chars
            && !options.contains(&option)
        {
            options.push(option);
        }
    }
    if options.len() < config.min_options {
        report.too_few_options += 1;
        return None;
    }

    let kept: Vec<String> = record
        .answer
        .values()
        .into_iter()
        .map(|value| cleaner.clean(value))
        .filter(|value| options.contains(value))
        .collect();

    let answer = match (&record.answer, kept.len()) {
        (_, 0) => match config.answer_fallback {
            AnswerFallback::FirstOption => {
                report.answer_fallbacks += 1;
                Answer::Single(options[0].clone())
            }
            AnswerFallback::Discard => {
                report.answer_discards += 1;
                return None;
            }
        },
        (Answer::Single(_), _) | (_, 1) => Answer::Single(kept[0].clone()),
        (Answer::Multiple(_), _) => Answer::Multiple(kept),
    };

    let explanation = cleaner.clean(&record.explanation);
    let explanation = if explanation.is_empty() {
        config.explanation_placeholder.clone()
    } else {
        truncate_chars(&explanation, config.max_explanation_chars)
    };

    let mut out = Question::new(question, options, answer, explanation);
    if record.correct_count.is_some() || !out.answer.is_single() {
        out.sync_correct_count();
    }
    Some(out)
}
