//! Backfill short option lists with generic distractors

use crate::models::{DistractorPool, Question, RepairConfig};
use serde::Serialize;

/// Outcome of a repair pass
#[derive(Debug, Default, Clone, Serialize)]
pub struct RepairReport {
    pub total: usize,
    /// Indices (0-based) of records that had too few options
    pub repaired: Vec<usize>,
    /// Records that are still short because every pool was exhausted
    pub still_short: Vec<usize>,
}

/// Pick the pool for a question: first keyword match, else the first catch-all
pub fn select_pool<'a>(
    pools: &'a [DistractorPool],
    question: &str,
    dataset_name: &str,
) -> Option<&'a DistractorPool> {
    let dataset_words: Vec<String> = dataset_name
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect();

    pools
        .iter()
        .find(|pool| {
            pool.question_keywords.iter().any(|k| question.contains(k.as_str()))
                || pool
                    .dataset_keywords
                    .iter()
                    .any(|k| dataset_words.contains(&k.to_lowercase()))
        })
        .or_else(|| pools.iter().find(|pool| pool.is_catch_all()))
}

/// Pad every record with fewer than `min_options` options
///
/// Missing answer members are inserted first so the answer stays valid;
/// distractors never duplicate an existing option or the answer.
pub fn repair_dataset(
    records: &[Question],
    dataset_name: &str,
    config: &RepairConfig,
) -> (Vec<Question>, RepairReport) {
    let mut report = RepairReport {
        total: records.len(),
        ..RepairReport::default()
    };

    let repaired = records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            if record.options.len() >= config.min_options {
                return record.clone();
            }

            let mut q = record.clone();
            for (pos, value) in record.answer.values().into_iter().enumerate() {
                if !value.is_empty() && !q.options.iter().any(|o| o == value) {
                    q.options.insert(pos.min(q.options.len()), value.to_string());
                }
            }

            if let Some(pool) = select_pool(&config.pools, &q.question, dataset_name) {
                for distractor in &pool.distractors {
                    if q.options.len() >= config.min_options {
                        break;
                    }
                    if !q.options.contains(distractor) {
                        q.options.push(distractor.clone());
                    }
                }
            }
            q.options.truncate(config.max_options.max(config.min_options));

            report.repaired.push(idx);
            if q.options.len() < config.min_options {
                report.still_short.push(idx);
            }
            q
        })
        .collect();

    (repaired, report)
}
