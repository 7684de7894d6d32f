//! Row sources.
//!
//! Both readers produce [`RawRecord`](crate::RawRecord)s keyed by the header
//! row. The `try_*` functions report why a source could not be read; the
//! plain ones log the problem and hand back an empty vector so a batch run
//! never aborts on a missing file.

mod config;
pub mod csv_reader;
pub mod sheet_reader;

pub use config::{ReaderConfig, ReaderConfigBuilder};
pub use csv_reader::{load_employees, try_load_employees};
pub use sheet_reader::{
    TARGETS_SHEET, TRANSACTIONS_SHEET, load_targets, load_transactions, read_sheet,
};
