//! Duplicate question removal

use crate::models::{question_key, Question};
use std::collections::HashSet;

/// Drop repeated questions, keeping the first occurrence of each key
///
/// Order of the surviving records is preserved.
pub fn dedupe(records: Vec<Question>) -> Vec<Question> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|q| seen.insert(question_key(&q.question)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Answer;

    fn q(text: &str) -> Question {
        Question::new(
            text,
            vec!["a".into(), "b".into()],
            Answer::Single("a".into()),
            "",
        )
    }

    #[test]
    fn test_first_occurrence_wins() {
        let mut second = q("What is  Amazon S3?");
        second.explanation = "second".to_string();
        let records = vec![q("What is Amazon S3?"), q("What is EBS?"), second];

        let out = dedupe(records);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].explanation, "");
        assert_eq!(out[1].question, "What is EBS?");
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let out = dedupe(vec![q("WHAT is\nS3?"), q("  what IS s3? ")]);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_prefix_key_merges_long_questions() {
        let base = "x".repeat(200);
        let out = dedupe(vec![q(&format!("{}A", base)), q(&format!("{}B", base))]);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_idempotent_and_ordered() {
        let records = vec![q("c"), q("a"), q("c"), q("b"), q("a")];
        let once = dedupe(records.clone());
        let twice = dedupe(once.clone());

        assert_eq!(once, twice);
        assert!(once.len() <= records.len());
        let order: Vec<&str> = once.iter().map(|r| r.question.as_str()).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }
}
