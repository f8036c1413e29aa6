//! Service layer for qbank
//!
//! Each dataset stage is a pure function over `Vec<Question>`; the CLI
//! commands load, call the stage, and save.

pub mod analyze;
pub mod clean;
pub mod dedupe;
pub mod file_service;
pub mod relabel;
pub mod repair;
pub mod upgrade;

// Re-export commonly used types
pub use analyze::{analyze, classify, Quality, QualityExample, QualityReport};
pub use clean::{clean_dataset, CleanReport};
pub use dedupe::dedupe;
pub use file_service::{load_questions, load_questions_or_empty, load_records, save_questions};
pub use relabel::{relabel, BucketTargets, Distribution, RelabelReport};
pub use repair::{repair_dataset, select_pool, RepairReport};
pub use upgrade::{upgrade, UpgradeReport};
