use serde::Serialize;

use crate::errors::ErrorKind;
use crate::record::RawRecord;
use crate::rules::{AsciiDigits, FieldRule, FloatRange, IntegerRange, Range};

/// Result of validating one record.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    Valid(RawRecord),
    Invalid(ErrorKind),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid(_))
    }
}

/// A rejected record: its raw `employee_id` (possibly empty) and the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidRecordReport {
    pub employee_id: String,
    pub reason: ErrorKind,
}

pub struct Validator {
    rules: Vec<Box<dyn FieldRule>>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Validator with the employee rule set, in evaluation order:
    /// id, age, salary, performance.
    pub fn new() -> Self {
        let rules: Vec<Box<dyn FieldRule>> = vec![
            Box::new(AsciiDigits::new("employee_id", ErrorKind::InvalidEmployeeId)),
            Box::new(IntegerRange::new(
                "age",
                Range::between(18, 70),
                ErrorKind::InvalidAge,
                ErrorKind::AgeOutOfRange,
            )),
            Box::new(FloatRange::new(
                "monthly_salary",
                Range::positive(),
                ErrorKind::InvalidSalary,
                ErrorKind::SalaryNotPositive,
            )),
            Box::new(FloatRange::new(
                "performance",
                Range::between(1.0, 5.0),
                ErrorKind::InvalidPerformance,
                ErrorKind::PerformanceOutOfRange,
            )),
        ];
        Self { rules }
    }

    /// Check a record without consuming it.
    pub fn check(&self, record: &RawRecord) -> Result<(), ErrorKind> {
        self.rules
            .iter()
            .try_for_each(|rule| rule.check(record.trimmed(rule.field())))
    }

    pub fn validate(&self, record: RawRecord) -> ValidationOutcome {
        match self.check(&record) {
            Ok(()) => ValidationOutcome::Valid(record),
            Err(kind) => ValidationOutcome::Invalid(kind),
        }
    }

    /// Field and rule name of each configured check, in evaluation order.
    pub fn get_rules(&self) -> Vec<(String, &'static str)> {
        self.rules
            .iter()
            .map(|r| (r.field().to_string(), r.name()))
            .collect()
    }
}

/// Split records into valid rows (source order) and reports for the rest.
pub fn filter_valid(records: Vec<RawRecord>) -> (Vec<RawRecord>, Vec<InvalidRecordReport>) {
    let validator = Validator::new();
    let mut valid = Vec::with_capacity(records.len());
    let mut invalid = Vec::new();

    for record in records {
        match validator.check(&record) {
            Ok(()) => valid.push(record),
            Err(reason) => {
                log::debug!(
                    "Rejected employee_id={:?}: {}",
                    record.get("employee_id"),
                    reason
                );
                invalid.push(InvalidRecordReport {
                    employee_id: record.get("employee_id").unwrap_or("").to_string(),
                    reason,
                });
            }
        }
    }

    (valid, invalid)
}
