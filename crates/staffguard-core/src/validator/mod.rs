//! Record validation.
//!
//! The [`Validator`] owns an ordered list of [`FieldRule`]s and runs them
//! against a [`RawRecord`]; the first failing rule decides the outcome. Records
//! are never modified, the validator only gatekeeps.

mod validation;

pub use validation::{InvalidRecordReport, ValidationOutcome, Validator, filter_valid};
