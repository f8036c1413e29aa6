use regex::Regex;
use std::collections::BTreeMap;

/// Options recovered from the question+options section of a block
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedOptions {
    /// Byte offset where the first option marker starts; the question text
    /// is everything before it
    pub question_end: usize,
    /// Letter and raw text of each option, in display order
    pub options: Vec<(char, String)>,
}

impl ParsedOptions {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|(_, text)| text.as_str())
    }
}

/// Common interface for option parsing strategies
///
/// The extractor holds an ordered list of strategies and takes the first
/// one that returns `Some`.
pub trait OptionStrategy: Send + Sync {
    /// Parse options out of a question+options section
    fn parse(&self, section: &str) -> Option<ParsedOptions>;

    /// Get the name of this strategy for display purposes
    fn name(&self) -> &'static str;
}

/// Minimum number of options for a parse to count as a success
const MIN_OPTIONS: usize = 2;

/// Option text must be longer than this to be kept
const MIN_OPTION_CHARS: usize = 2;

fn keep_option(text: &str) -> bool {
    text.chars().count() > MIN_OPTION_CHARS
}

/// Line-leading `A.` / `A)` markers in sequence, each option running to
/// the next marker and possibly spanning several lines
pub struct SpanningMarkerStrategy {
    marker: Regex,
}

impl SpanningMarkerStrategy {
    pub fn new() -> Self {
        Self {
            marker: Regex::new(r"(?m)^[ \t]*([A-E])[.)]").expect("marker pattern is valid"),
        }
    }
}

impl Default for SpanningMarkerStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionStrategy for SpanningMarkerStrategy {
    fn parse(&self, section: &str) -> Option<ParsedOptions> {
        // (letter, marker start, text start)
        let mut markers: Vec<(char, usize, usize)> = Vec::new();
        let mut expected = 'A';

        for caps in self.marker.captures_iter(section) {
            let (Some(whole), Some(letter)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let letter = letter.as_str().chars().next()?;
            // Out-of-sequence markers are ordinary text of the previous option
            if letter != expected {
                continue;
            }
            markers.push((letter, whole.start(), whole.end()));
            expected = (expected as u8 + 1) as char;
        }

        let question_end = markers.first()?.1;

        let mut options = Vec::new();
        for (i, (letter, _, text_start)) in markers.iter().enumerate() {
            let text_end = markers
                .get(i + 1)
                .map(|(_, start, _)| *start)
                .unwrap_or(section.len());
            let text = section[*text_start..text_end].trim();
            if keep_option(text) {
                options.push((*letter, text.to_string()));
            }
        }

        if options.len() < MIN_OPTIONS {
            return None;
        }

        Some(ParsedOptions {
            question_end,
            options,
        })
    }

    fn name(&self) -> &'static str {
        "spanning-markers"
    }
}

/// One option per line, `^<Letter>[.)] <text>$`, letters in any order
pub struct LineMarkerStrategy {
    line: Regex,
}

impl LineMarkerStrategy {
    pub fn new() -> Self {
        Self {
            line: Regex::new(r"^([A-E])[.)]\s*(.+)$").expect("line pattern is valid"),
        }
    }
}

impl Default for LineMarkerStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionStrategy for LineMarkerStrategy {
    fn parse(&self, section: &str) -> Option<ParsedOptions> {
        let mut by_letter: BTreeMap<char, String> = BTreeMap::new();
        let mut question_end: Option<usize> = None;
        let mut offset = 0;

        for line in section.split('\n') {
            let line_start = offset;
            offset += line.len() + 1;

            let Some(caps) = self.line.captures(line.trim()) else {
                continue;
            };
            let (Some(letter), Some(text)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            let text = text.as_str().trim();
            if !keep_option(text) {
                continue;
            }

            if let Some(letter) = letter.as_str().chars().next() {
                by_letter.insert(letter, text.to_string());
                question_end.get_or_insert(line_start);
            }
        }

        if by_letter.len() < MIN_OPTIONS {
            return None;
        }

        Some(ParsedOptions {
            question_end: question_end?,
            options: by_letter.into_iter().collect(),
        })
    }

    fn name(&self) -> &'static str {
        "line-markers"
    }
}

/// Default strategy order: spanning markers first, single lines as fallback
pub fn default_strategies() -> Vec<Box<dyn OptionStrategy>> {
    vec![
        Box::new(SpanningMarkerStrategy::new()),
        Box::new(LineMarkerStrategy::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spanning_simple() {
        let section = "What is X?\nA. Foo\nB. Bar\nC. Baz";
        let parsed = SpanningMarkerStrategy::new().parse(section).unwrap();
        assert_eq!(&section[..parsed.question_end], "What is X?\n");
        assert_eq!(parsed.texts().collect::<Vec<_>>(), vec!["Foo", "Bar", "Baz"]);
    }

    #[test]
    fn test_spanning_multiline_option() {
        let section = "Pick one.\nA) Store the data in\nAmazon S3 buckets\nB) Use EBS volumes";
        let parsed = SpanningMarkerStrategy::new().parse(section).unwrap();
        assert_eq!(parsed.options[0], ('A', "Store the data in\nAmazon S3 buckets".to_string()));
        assert_eq!(parsed.options[1], ('B', "Use EBS volumes".to_string()));
    }

    #[test]
    fn test_spanning_ignores_out_of_sequence() {
        let section = "Stem\nA. First choice\nC. Not a marker here\nB. Second choice";
        let parsed = SpanningMarkerStrategy::new().parse(section).unwrap();
        assert_eq!(parsed.options.len(), 2);
        assert_eq!(parsed.options[0].1, "First choice\nC. Not a marker here");
    }

    #[test]
    fn test_spanning_requires_letter_a() {
        let section = "Stem\nB. Second choice\nC. Third choice";
        assert!(SpanningMarkerStrategy::new().parse(section).is_none());
    }

    #[test]
    fn test_spanning_needs_two_options() {
        assert!(SpanningMarkerStrategy::new().parse("Stem\nA. Only one").is_none());
        assert!(SpanningMarkerStrategy::new().parse("Stem\nA. ok\nB. x").is_none());
    }

    #[test]
    fn test_line_markers_any_order() {
        let section = "Stem text\nB. Second choice\nD) Fourth choice\nC. Third choice";
        let parsed = LineMarkerStrategy::new().parse(section).unwrap();
        assert_eq!(&section[..parsed.question_end], "Stem text\n");
        let letters: Vec<char> = parsed.options.iter().map(|(l, _)| *l).collect();
        assert_eq!(letters, vec!['B', 'C', 'D']);
    }

    #[test]
    fn test_line_markers_later_duplicate_wins() {
        let section = "Stem\nB. old text\nB. new text\nC. other";
        let parsed = LineMarkerStrategy::new().parse(section).unwrap();
        assert_eq!(parsed.options[0], ('B', "new text".to_string()));
    }

    #[test]
    fn test_line_markers_need_two_letters() {
        assert!(LineMarkerStrategy::new().parse("Stem\nB. one\nB. two").is_none());
    }

    #[test]
    fn test_default_order() {
        let names: Vec<&str> = default_strategies().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["spanning-markers", "line-markers"]);
    }
}
