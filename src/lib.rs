// qbank - certification question bank toolkit
// Extracts, cleans, repairs and verifies JSON banks of practice exam questions

pub mod cli;
pub mod models;
pub mod parser;
pub mod services;
pub mod validator;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use models::{Answer, QbankConfig, Question};
pub use parser::{QuestionExtractor, TextCleaner};
pub use validator::{is_valid_option, DatasetVerifier};
