use crate::models::OptionRules;

/// Check an answer option against the default heuristics
pub fn is_valid_option(text: &str) -> bool {
    is_valid_option_with(text, &OptionRules::default())
}

/// Check an answer option against explicit thresholds
///
/// Rejects short strings, sentinel placeholders and run-on text with too
/// many periods. This is a heuristic filter; misfires are left to review.
pub fn is_valid_option_with(text: &str, rules: &OptionRules) -> bool {
    if text.chars().count() < rules.min_chars {
        return false;
    }

    let trimmed = text.trim();
    if rules.sentinels.iter().any(|s| s == trimmed) {
        return false;
    }

    text.matches('.').count() <= rules.max_periods
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_sentinels() {
        assert!(!is_valid_option("Mastered"));
        assert!(!is_valid_option("Not Mastered"));
        assert!(!is_valid_option("  Mastered "));
    }

    #[test]
    fn test_accepts_normal_option() {
        assert!(is_valid_option("Use IAM roles for EC2"));
        assert!(is_valid_option("Amazon S3"));
    }

    #[test]
    fn test_rejects_short() {
        assert!(!is_valid_option(""));
        assert!(!is_valid_option("EBS"));
        assert!(is_valid_option("EBS v"));
    }

    #[test]
    fn test_period_limit() {
        assert!(is_valid_option("a.b.c.d.e.f"));
        assert!(!is_valid_option("a.b.c.d.e.f.g"));
    }

    #[test]
    fn test_custom_rules() {
        let rules = OptionRules {
            min_chars: 2,
            max_periods: 0,
            sentinels: vec!["N/A".to_string()],
        };
        assert!(is_valid_option_with("S3", &rules));
        assert!(!is_valid_option_with("N/A", &rules));
        assert!(!is_valid_option_with("v1.2", &rules));
        assert!(is_valid_option_with("Mastered", &rules));
    }
}
