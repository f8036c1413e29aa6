pub mod dataset;
pub mod option;
pub mod schema;

pub use dataset::{CountStatus, DatasetReport, DatasetVerifier, VerifyReport};
pub use option::{is_valid_option, is_valid_option_with};
pub use schema::{RecordSchema, RECORD_SCHEMA};
