//! Seeded re-labeling of answer cardinality (single / double / triple)

use crate::models::{Answer, Question, RelabelConfig};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;

/// Target answer-cardinality group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Bucket {
    Single,
    Double,
    Triple,
}

/// Planned bucket sizes for a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BucketTargets {
    pub single: usize,
    pub double: usize,
    pub triple: usize,
}

impl BucketTargets {
    /// Floor the single and double shares; triple absorbs the remainder
    pub fn compute(total: usize, config: &RelabelConfig) -> Self {
        let single = (total * config.single_percent / 100).min(total);
        let double = (total * config.double_percent / 100).min(total - single);
        Self {
            single,
            double,
            triple: total - single - double,
        }
    }
}

/// Answer-count distribution of a dataset
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Distribution {
    pub single: usize,
    pub double: usize,
    pub triple: usize,
    pub other: usize,
}

impl Distribution {
    pub fn of(records: &[Question]) -> Self {
        let mut dist = Self::default();
        for q in records {
            match q.correct_count() {
                1 => dist.single += 1,
                2 => dist.double += 1,
                3 => dist.triple += 1,
                _ => dist.other += 1,
            }
        }
        dist
    }
}

/// Outcome of a re-labeling pass
#[derive(Debug, Clone, Serialize)]
pub struct RelabelReport {
    pub targets: BucketTargets,
    /// Records upgraded to two answers
    pub upgraded_double: usize,
    /// Records upgraded to three answers
    pub upgraded_triple: usize,
    /// Targeted records left alone because they were not eligible
    pub ineligible: usize,
    /// Distribution after re-labeling
    pub distribution: Distribution,
}

impl RelabelReport {
    /// Records whose answer shape was changed by an upgrade
    pub fn modified(&self) -> usize {
        self.upgraded_double + self.upgraded_triple
    }
}

/// Assign answer counts to a copy of `records`
///
/// The same seed and the same input always produce the same output.
pub fn relabel(records: &[Question], config: &RelabelConfig) -> (Vec<Question>, RelabelReport) {
    let targets = BucketTargets::compute(records.len(), config);

    let mut indices: Vec<usize> = (0..records.len()).collect();
    let mut rng = StdRng::seed_from_u64(config.seed);
    indices.shuffle(&mut rng);

    let mut buckets = vec![Bucket::Single; records.len()];
    for &idx in &indices[targets.single..targets.single + targets.double] {
        buckets[idx] = Bucket::Double;
    }
    for &idx in &indices[targets.single + targets.double..] {
        buckets[idx] = Bucket::Triple;
    }

    let mut out = records.to_vec();
    let mut report = RelabelReport {
        targets,
        upgraded_double: 0,
        upgraded_triple: 0,
        ineligible: 0,
        distribution: Distribution::default(),
    };

    for (q, bucket) in out.iter_mut().zip(buckets) {
        match bucket {
            Bucket::Single => force_single(q),
            Bucket::Double => {
                if upgrade(q, 2, 4) {
                    report.upgraded_double += 1;
                } else {
                    report.ineligible += 1;
                }
            }
            Bucket::Triple => {
                if upgrade(q, 3, 5) {
                    report.upgraded_triple += 1;
                } else {
                    report.ineligible += 1;
                }
            }
        }

        // correctCount is derived; keep it in sync even for records left in place
        if q.correct_count.is_some() && !q.has_consistent_count() {
            q.sync_correct_count();
        }
    }

    report.distribution = Distribution::of(&out);
    (out, report)
}

fn force_single(q: &mut Question) {
    let value = q
        .answer
        .first()
        .map(str::to_string)
        .or_else(|| q.options.first().cloned())
        .unwrap_or_default();
    q.answer = Answer::Single(value);
    q.correct_count = Some(1);
}

/// Turn a single answer into `count` answers using the first other options
fn upgrade(q: &mut Question, count: usize, min_options: usize) -> bool {
    let Answer::Single(first) = &q.answer else {
        return false;
    };
    if q.options.len() < min_options {
        return false;
    }

    let mut values = vec![first.clone()];
    for option in &q.options {
        if values.len() == count {
            break;
        }
        if !values.contains(option) {
            values.push(option.clone());
        }
    }
    if values.len() < count {
        return false;
    }

    q.answer = Answer::Multiple(values);
    q.correct_count = Some(count);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank(n: usize, option_count: usize) -> Vec<Question> {
        (0..n)
            .map(|i| {
                let options: Vec<String> =
                    (0..option_count).map(|o| format!("Option {} of {}", o, i)).collect();
                let answer = Answer::Single(options[i % option_count].clone());
                Question::new(format!("Question number {}?", i), options, answer, "")
            })
            .collect()
    }

    #[test]
    fn test_targets_sum_to_total() {
        let config = RelabelConfig::default();
        assert_eq!(
            BucketTargets::compute(300, &config),
            BucketTargets { single: 180, double: 90, triple: 30 }
        );
        assert_eq!(
            BucketTargets::compute(7, &config),
            BucketTargets { single: 4, double: 2, triple: 1 }
        );
        assert_eq!(
            BucketTargets::compute(0, &config),
            BucketTargets { single: 0, double: 0, triple: 0 }
        );
    }

    #[test]
    fn test_full_eligibility_hits_targets() {
        let (out, report) = relabel(&bank(300, 5), &RelabelConfig::default());

        assert_eq!(report.upgraded_double, 90);
        assert_eq!(report.upgraded_triple, 30);
        assert_eq!(report.ineligible, 0);
        assert_eq!(
            report.distribution,
            Distribution { single: 180, double: 90, triple: 30, other: 0 }
        );
        assert_eq!(out.len(), 300);
    }

    #[test]
    fn test_ineligible_records_left_alone() {
        let (out, report) = relabel(&bank(300, 4), &RelabelConfig::default());

        assert_eq!(report.upgraded_double, 90);
        assert_eq!(report.upgraded_triple, 0);
        assert_eq!(report.ineligible, 30);
        assert!(report.upgraded_triple <= report.targets.triple);
        assert_eq!(out.iter().filter(|q| q.correct_count.is_none()).count(), 30);
    }

    #[test]
    fn test_invariants_hold() {
        let mut input = bank(50, 5);
        input[3].answer = Answer::Multiple(vec![input[3].options[0].clone(), input[3].options[1].clone()]);
        input[3].correct_count = Some(3);

        let (out, _) = relabel(&input, &RelabelConfig::default());
        for q in &out {
            match &q.answer {
                Answer::Multiple(values) => assert_eq!(q.correct_count, Some(values.len())),
                Answer::Single(_) => assert_eq!(q.correct_count(), 1),
            }
            assert!(q.answer_in_options());
        }
    }

    #[test]
    fn test_deterministic_for_seed() {
        let input = bank(120, 5);
        let config = RelabelConfig::default();
        let (a, _) = relabel(&input, &config);
        let (b, _) = relabel(&input, &config);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );

        let other = RelabelConfig { seed: 7, ..config };
        let (c, _) = relabel(&input, &other);
        assert_ne!(a, c);
    }

    #[test]
    fn test_does_not_touch_input() {
        let input = bank(10, 5);
        let before = input.clone();
        let _ = relabel(&input, &RelabelConfig::default());
        assert_eq!(input, before);
    }

    #[test]
    fn test_single_bucket_flattens_multiple() {
        let mut input = bank(1, 5);
        input[0].answer = Answer::Multiple(vec![input[0].options[2].clone(), input[0].options[3].clone()]);
        let config = RelabelConfig {
            single_percent: 100,
            double_percent: 0,
            ..RelabelConfig::default()
        };
        let (out, _) = relabel(&input, &config);
        assert_eq!(out[0].answer, Answer::Single(input[0].options[2].clone()));
        assert_eq!(out[0].correct_count, Some(1));
    }

    #[test]
    fn test_upgrade_adds_first_other_option() {
        let mut q = bank(1, 5).remove(0);
        q.answer = Answer::Single(q.options[2].clone());
        assert!(upgrade(&mut q, 3, 5));
        assert_eq!(
            q.answer,
            Answer::Multiple(vec![q.options[2].clone(), q.options[0].clone(), q.options[1].clone()])
        );
    }
}
