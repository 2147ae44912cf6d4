pub mod field;
pub mod lexicon;
pub mod record;
pub mod redact;
pub mod report;

pub use field::{FieldError, parse_age, parse_expense};
pub use lexicon::{Lexicon, LexiconFile};
pub use record::{COLUMN_NAMES, PatientRecord};
pub use redact::redact_value;
pub use report::{MetricValue, SummaryReport, metrics};
