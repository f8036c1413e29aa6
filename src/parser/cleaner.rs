use regex::Regex;

/// Watermarks and promotional text injected into exam-dump PDFs
const BOILERPLATE_PATTERNS: &[&str] = &[
    r"(?is)Passing Certification Exams Made Easy.*?\.com",
    r"(?is)Recommend!!.*?Questions?\)",
    r"(?is)visit\s*-\s*https?://.*?\.com",
    r"(?is)Get the Full [A-Z0-9-]+ dumps.*?Questions?\)",
    r"(?is)Your Partner of IT Exam.*?Questions?\)",
    r"(?i)\(\d+ New Questions?\)",
    r"(?i)https?://\S+",
];

/// Words that PDF extraction tends to cut one letter short
const TRUNCATION_FIXES: &[(&str, &str)] = &[
    ("functio ", "function "),
    ("bucke ", "bucket "),
    ("clas ", "class "),
];

/// Strips boilerplate and PDF artifacts from question text
pub struct TextCleaner {
    boilerplate: Vec<Regex>,
    stray_letter: Regex,
}

impl TextCleaner {
    pub fn new() -> Self {
        let boilerplate = BOILERPLATE_PATTERNS
            .iter()
            .map(|p| Regex::new(p).expect("boilerplate pattern is valid"))
            .collect();

        Self {
            boilerplate,
            // Option letters past E bleeding into the text, e.g. "... F. ..."
            stray_letter: Regex::new(r"\s[F-M]\.\s").expect("stray letter pattern is valid"),
        }
    }

    /// Remove boilerplate only, keeping line structure intact
    pub fn strip_boilerplate(&self, text: &str) -> String {
        let mut out = text.to_string();
        for pattern in &self.boilerplate {
            out = pattern.replace_all(&out, "").into_owned();
        }
        out.trim().to_string()
    }

    /// Full clean: boilerplate, truncation fixes, whitespace collapse
    ///
    /// Passes repeat until the text stops changing, so cleaning is idempotent.
    /// Every changing pass removes text or repairs a truncated word, and a
    /// repaired word never matches a fix again, so the loop terminates.
    pub fn clean(&self, text: &str) -> String {
        let mut current = self.clean_pass(text);
        loop {
            let next = self.clean_pass(&current);
            if next == current {
                return current;
            }
            current = next;
        }
    }

    fn clean_pass(&self, text: &str) -> String {
        let stripped = self.strip_boilerplate(text);

        // Collapse first so the fixes below also see words split by newlines
        let mut out = collapse_whitespace(&stripped);
        for (broken, fixed) in TRUNCATION_FIXES {
            out = out.replace(broken, fixed);
        }
        out = self.stray_letter.replace_all(&out, ". ").into_owned();

        collapse_whitespace(&out)
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapse runs of whitespace to single spaces and trim
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate to at most `max` characters, respecting char boundaries
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_watermarks() {
        let cleaner = TextCleaner::new();
        let text = "Which service? Passing Certification Exams Made Easy visit - https://www.surepassexam.com Use S3.";
        assert_eq!(cleaner.clean(text), "Which service? Use S3.");
    }

    #[test]
    fn test_removes_promotions_spanning_lines() {
        let cleaner = TextCleaner::new();
        let text = "A developer needs storage.\nRecommend!! Get the Full DVA-C02 dumps in VCE and PDF From SurePassExam\n(127 New Questions)\nWhich option?";
        assert_eq!(
            cleaner.clean(text),
            "A developer needs storage. Which option?"
        );
    }

    #[test]
    fn test_removes_raw_urls() {
        let cleaner = TextCleaner::new();
        assert_eq!(
            cleaner.clean("See https://docs.aws.amazon.com/lambda/latest/dg/ for limits"),
            "See for limits"
        );
    }

    #[test]
    fn test_fixes_truncations() {
        let cleaner = TextCleaner::new();
        assert_eq!(
            cleaner.clean("Invoke the functio when the bucke receives a clas file"),
            "Invoke the function when the bucket receives a class file"
        );
    }

    #[test]
    fn test_fixes_truncation_across_newline() {
        let cleaner = TextCleaner::new();
        assert_eq!(cleaner.clean("the functio\nruns"), "the function runs");
    }

    #[test]
    fn test_stray_letters_replaced() {
        let cleaner = TextCleaner::new();
        assert_eq!(cleaner.clean("Use DynamoDB F. G. streams"), "Use DynamoDB.. streams");
    }

    #[test]
    fn test_collapses_whitespace() {
        let cleaner = TextCleaner::new();
        assert_eq!(cleaner.clean("  a \n\n b\t c  "), "a b c");
    }

    #[test]
    fn test_unchanged_when_nothing_matches() {
        let cleaner = TextCleaner::new();
        assert_eq!(cleaner.clean("Use IAM roles for EC2"), "Use IAM roles for EC2");
        assert_eq!(cleaner.clean(""), "");
    }

    #[test]
    fn test_clean_is_idempotent() {
        let cleaner = TextCleaner::new();
        let inputs = [
            "Use DynamoDB F. G. H. streams",
            "the functio\nfunctio  x",
            "Recommend!! x (12 New Questions) Recommend!! y Questions)",
            "https://a.com https://b.com text",
            "  spaced \t out \n text ",
            "clas clas  bucke\tbucke",
            "Passing Certification Exams Made Easy visit - https://www.exambible.com",
        ];
        for input in inputs {
            let once = cleaner.clean(input);
            assert_eq!(cleaner.clean(&once), once, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_nested_watermarks_fully_removed() {
        let cleaner = TextCleaner::new();
        // Each pass strips only the innermost promotion, exposing the next one
        let mut nested = "Recommend!! x Questions)".to_string();
        for _ in 0..20 {
            nested = format!("Recom{}mend!! x Questions)", nested);
        }
        let input = format!("keep {} tail", nested);

        let once = cleaner.clean(&input);
        assert_eq!(once, "keep tail");
        assert_eq!(cleaner.clean(&once), once);
    }

    #[test]
    fn test_strip_boilerplate_keeps_lines() {
        let cleaner = TextCleaner::new();
        let text = "Question text\nhttps://www.exambible.com/x\nA. One\nB. Two";
        assert_eq!(cleaner.strip_boilerplate(text), "Question text\n\nA. One\nB. Two");
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }
}
