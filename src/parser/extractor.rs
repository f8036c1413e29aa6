use super::cleaner::{truncate_chars, TextCleaner};
use super::source::SourceDocument;
use super::strategy::{default_strategies, OptionStrategy};
use crate::models::{Answer, AnswerFallback, BlockError, ExtractConfig, Question};
use crate::Result;
use regex::Regex;
use serde::Serialize;

/// Counters and warnings collected while extracting
#[derive(Debug, Default, Clone, Serialize)]
pub struct ExtractionReport {
    /// Question blocks found after splitting on the heading marker
    pub blocks: usize,
    /// Blocks below the minimum length
    pub short_blocks: usize,
    /// Blocks without an `Answer: <letter>` line
    pub missing_answer: usize,
    /// Blocks where no strategy found enough options
    pub missing_options: usize,
    /// Blocks whose question text was too short
    pub short_question: usize,
    /// Records whose answer letter fell back to the first option
    pub answer_fallbacks: usize,
    /// Blocks skipped because of a `BlockError`
    pub failed_blocks: usize,
    /// Records produced, per strategy name
    pub by_strategy: Vec<(String, usize)>,
    pub warnings: Vec<String>,
}

impl ExtractionReport {
    fn count_strategy(&mut self, name: &str) {
        match self.by_strategy.iter_mut().find(|(n, _)| n == name) {
            Some((_, count)) => *count += 1,
            None => self.by_strategy.push((name.to_string(), 1)),
        }
    }

    /// Fold another report into this one
    pub fn merge(&mut self, other: ExtractionReport) {
        self.blocks += other.blocks;
        self.short_blocks += other.short_blocks;
        self.missing_answer += other.missing_answer;
        self.missing_options += other.missing_options;
        self.short_question += other.short_question;
        self.answer_fallbacks += other.answer_fallbacks;
        self.failed_blocks += other.failed_blocks;
        for (name, count) in other.by_strategy {
            match self.by_strategy.iter_mut().find(|(n, _)| *n == name) {
                Some((_, total)) => *total += count,
                None => self.by_strategy.push((name, count)),
            }
        }
        self.warnings.extend(other.warnings);
    }
}

/// Records and report produced by one extraction run
#[derive(Debug, Default)]
pub struct Extraction {
    pub questions: Vec<Question>,
    pub report: ExtractionReport,
}

/// Turns raw exam-dump text into question records
pub struct QuestionExtractor {
    config: ExtractConfig,
    cleaner: TextCleaner,
    heading: Regex,
    leading_heading: Regex,
    answer: Regex,
    explanation: Regex,
    strategies: Vec<Box<dyn OptionStrategy>>,
}

impl QuestionExtractor {
    /// Create an extractor with the default option strategies
    pub fn new(config: ExtractConfig) -> Result<Self> {
        Self::with_strategies(config, default_strategies())
    }

    /// Create an extractor with an explicit, ordered strategy list
    pub fn with_strategies(
        config: ExtractConfig,
        strategies: Vec<Box<dyn OptionStrategy>>,
    ) -> Result<Self> {
        let marker = &config.question_marker;
        let heading = Regex::new(&format!("(?i){}", marker))
            .map_err(|e| anyhow::anyhow!("Invalid question_marker '{}': {}", marker, e))?;
        let leading_heading = Regex::new(&format!(r"(?i)^(?:{})\s*", marker))?;
        let answer = Regex::new(r"(?i)\n\s*Answer:\s*([A-E])(?:\s|$)")?;
        let explanation = Regex::new(&format!(
            r"(?is)Explanation:\s*(.+?)(?:References:|{}|\z)",
            marker
        ))?;

        Ok(Self {
            config,
            cleaner: TextCleaner::new(),
            heading,
            leading_heading,
            answer,
            explanation,
            strategies,
        })
    }

    /// Extract questions from the pages of one document
    pub fn extract(&self, pages: &[String]) -> Extraction {
        let document = pages.iter().fold(String::new(), |mut acc, page| {
            acc.push_str(page);
            acc.push('\n');
            acc
        });

        let mut extraction = Extraction::default();
        for (block_idx, block) in self.split_blocks(&document).into_iter().enumerate() {
            extraction.report.blocks += 1;

            if block.trim().chars().count() < self.config.min_block_chars {
                extraction.report.short_blocks += 1;
                continue;
            }

            match self.parse_block(block, &mut extraction.report) {
                Ok(Some(question)) => extraction.questions.push(question),
                Ok(None) => {}
                Err(e) => {
                    extraction.report.failed_blocks += 1;
                    extraction
                        .report
                        .warnings
                        .push(format!("Error in block {}: {}", block_idx + 1, e));
                }
            }
        }

        extraction
    }

    /// Extract from several documents, keeping their order
    pub fn extract_documents(&self, documents: &[SourceDocument]) -> Extraction {
        let mut all = Extraction::default();
        for doc in documents {
            let mut extraction = self.extract(&doc.pages);
            for warning in extraction.report.warnings.iter_mut() {
                *warning = format!("{}: {}", doc.name, warning);
            }
            all.questions.extend(extraction.questions);
            all.report.merge(extraction.report);
        }
        all
    }

    /// Split a document into blocks that each start with a heading
    ///
    /// Text before the first heading is dropped.
    fn split_blocks<'a>(&self, document: &'a str) -> Vec<&'a str> {
        let starts: Vec<usize> = self.heading.find_iter(document).map(|m| m.start()).collect();
        starts
            .iter()
            .enumerate()
            .map(|(i, start)| {
                let end = starts.get(i + 1).copied().unwrap_or(document.len());
                &document[*start..end]
            })
            .collect()
    }

    fn parse_block(
        &self,
        block: &str,
        report: &mut ExtractionReport,
    ) -> std::result::Result<Option<Question>, BlockError> {
        let block = self.cleaner.strip_boilerplate(block);

        let Some(caps) = self.answer.captures(&block) else {
            report.missing_answer += 1;
            return Ok(None);
        };
        let (Some(marker), Some(letter)) = (caps.get(0), caps.get(1)) else {
            return Err(BlockError::MissingAnswerLetter);
        };
        let letter = letter
            .as_str()
            .chars()
            .next()
            .ok_or(BlockError::MissingAnswerLetter)?
            .to_ascii_uppercase();

        let question_section = block[..marker.start()].trim();
        let explanation_section = block[marker.start()..].trim();
        let explanation = self.parse_explanation(explanation_section);

        let Some((strategy, parsed)) = self
            .strategies
            .iter()
            .find_map(|s| s.parse(question_section).map(|p| (s.name(), p)))
        else {
            report.missing_options += 1;
            return Ok(None);
        };

        let question_text = self.cleaner.clean(&question_section[..parsed.question_end]);
        if question_text.chars().count() < self.config.min_question_chars {
            report.short_question += 1;
            return Ok(None);
        }
        let question_text = self
            .leading_heading
            .replace(&question_text, "")
            .trim()
            .to_string();
        if question_text.is_empty() {
            report.short_question += 1;
            return Ok(None);
        }

        // Resolve the letter against the parsed markers, before empty options are dropped
        let cleaned: Vec<(char, String)> = parsed
            .options
            .iter()
            .take(self.config.max_options)
            .map(|(marker, text)| (*marker, self.cleaner.clean(text)))
            .collect();
        let letter_in_range = cleaned.iter().any(|(marker, _)| *marker >= letter);
        let chosen = cleaned
            .iter()
            .find(|(marker, text)| *marker == letter && !text.is_empty())
            .map(|(_, text)| text.clone());

        let options: Vec<String> = cleaned
            .into_iter()
            .map(|(_, text)| text)
            .filter(|text| !text.is_empty())
            .collect();
        if options.is_empty() {
            return Err(BlockError::NoUsableOptions);
        }
        if options.len() < 2 {
            report.missing_options += 1;
            return Ok(None);
        }

        let answer = match chosen {
            Some(option) => option,
            None => match self.config.answer_fallback {
                AnswerFallback::FirstOption => {
                    report.answer_fallbacks += 1;
                    report.warnings.push(format!(
                        "Answer {} has no usable option among {}, using first option: {}",
                        letter,
                        options.len(),
                        truncate_chars(&question_text, 60)
                    ));
                    options[0].clone()
                }
                AnswerFallback::Discard if letter_in_range => {
                    return Err(BlockError::EmptyAnswerOption { letter });
                }
                AnswerFallback::Discard => {
                    return Err(BlockError::AnswerOutOfRange {
                        letter,
                        count: options.len(),
                    });
                }
            },
        };

        report.count_strategy(strategy);

        Ok(Some(Question::new(
            truncate_chars(&question_text, self.config.max_question_chars),
            options,
            Answer::Single(answer),
            explanation,
        )))
    }

    fn parse_explanation(&self, section: &str) -> String {
        self.explanation
            .captures(section)
            .and_then(|caps| caps.get(1))
            .map(|m| self.cleaner.clean(m.as_str()))
            .filter(|text| !text.is_empty())
            .map(|text| truncate_chars(&text, self.config.max_explanation_chars))
            .unwrap_or_else(|| self.config.explanation_placeholder.clone())
    }
}
