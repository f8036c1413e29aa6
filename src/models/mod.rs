pub mod config;
pub mod error;
pub mod question;
pub mod validation;

pub use config::{
    AnalyzeConfig, AnswerFallback, CleanConfig, DatasetConfig, DistractorPool, ExtractConfig,
    QbankConfig, RelabelConfig, RepairConfig, VerifyConfig, CONFIG_FILE,
};
pub use error::{BlockError, DatasetError, DatasetResult};
pub use question::{question_key, Answer, Question};
pub use validation::{ErrorCategory, OptionRules, Severity, ValidationError, ValidationResult};
