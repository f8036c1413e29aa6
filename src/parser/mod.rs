pub mod cleaner;
pub mod extractor;
pub mod source;
pub mod strategy;

pub use cleaner::{collapse_whitespace, truncate_chars, TextCleaner};
pub use extractor::{Extraction, ExtractionReport, QuestionExtractor};
pub use source::{discover_sources, read_source, SourceDocument};
pub use strategy::{
    default_strategies, LineMarkerStrategy, OptionStrategy, ParsedOptions,
    SpanningMarkerStrategy,
};
