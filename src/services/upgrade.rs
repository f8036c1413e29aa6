//! Replace the head of a bank with a premium question set

use crate::models::Question;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct UpgradeReport {
    pub existing: usize,
    pub premium: usize,
    /// Records of the original bank that survived
    pub kept: usize,
    pub total: usize,
}

/// Put `premium` in front of `existing`, keeping the bank's size
///
/// When the premium set is at least as large as the bank, the result is the
/// first `target` premium records, where `target` is the existing bank size
/// (or the premium size when the bank is empty).
pub fn upgrade(existing: &[Question], premium: &[Question]) -> (Vec<Question>, UpgradeReport) {
    let upgraded: Vec<Question> = if premium.len() < existing.len() {
        premium
            .iter()
            .chain(&existing[premium.len()..])
            .cloned()
            .collect()
    } else {
        let target = if existing.is_empty() {
            premium.len()
        } else {
            existing.len()
        };
        premium[..target].to_vec()
    };

    let report = UpgradeReport {
        existing: existing.len(),
        premium: premium.len(),
        kept: upgraded.len().saturating_sub(premium.len()),
        total: upgraded.len(),
    };
    (upgraded, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Answer;

    fn bank(prefix: &str, n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| {
                Question::new(
                    format!("{} {}", prefix, i),
                    vec!["a".into(), "b".into()],
                    Answer::Single("a".into()),
                    "",
                )
            })
            .collect()
    }

    #[test]
    fn test_premium_replaces_head() {
        let (out, report) = upgrade(&bank("old", 5), &bank("new", 2));
        let texts: Vec<&str> = out.iter().map(|q| q.question.as_str()).collect();
        assert_eq!(texts, vec!["new 0", "new 1", "old 2", "old 3", "old 4"]);
        assert_eq!(report.kept, 3);
        assert_eq!(report.total, 5);
    }

    #[test]
    fn test_large_premium_capped_to_bank_size() {
        let (out, report) = upgrade(&bank("old", 3), &bank("new", 10));
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|q| q.question.starts_with("new")));
        assert_eq!(report.kept, 0);
    }

    #[test]
    fn test_empty_bank_takes_premium() {
        let (out, _) = upgrade(&[], &bank("new", 4));
        assert_eq!(out.len(), 4);
    }
}
