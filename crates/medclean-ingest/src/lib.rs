pub mod convert;
pub mod error;
pub mod schema;
pub mod table;
pub mod writer;

pub use convert::{records_from_table, rows_from_records};
pub use error::{IngestError, Result};
pub use schema::{ColumnIndex, validate_schema};
pub use table::{RecordTable, read_record_table};
pub use writer::write_cleaned_csv;
