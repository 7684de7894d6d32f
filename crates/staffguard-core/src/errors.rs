use std::fmt;

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    /// Source file is missing or cannot be opened
    #[error("Source unavailable '{path}': {source}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Tabular data is structurally broken (bad header, ragged rows, ...)
    #[error("Malformed source '{path}': {message}")]
    MalformedSource { path: String, message: String },

    /// The clean snapshot could not be written
    #[error("Failed to write snapshot '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON encoding error
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The spreadsheet workbook could not be opened or read
    #[error("Workbook error '{path}': {message}")]
    Workbook { path: String, message: String },

    #[error("Sheet '{sheet}' not found in '{path}'")]
    SheetNotFound { path: String, sheet: String },
}

/// Reason a record failed validation.
///
/// Variants are ordered the way the rules run: the first failing rule decides
/// which kind a record gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ErrorKind {
    InvalidEmployeeId,
    InvalidAge,
    AgeOutOfRange,
    InvalidSalary,
    SalaryNotPositive,
    InvalidPerformance,
    PerformanceOutOfRange,
}

impl ErrorKind {
    /// Every kind, in rule order.
    pub const ALL: [ErrorKind; 7] = [
        ErrorKind::InvalidEmployeeId,
        ErrorKind::InvalidAge,
        ErrorKind::AgeOutOfRange,
        ErrorKind::InvalidSalary,
        ErrorKind::SalaryNotPositive,
        ErrorKind::InvalidPerformance,
        ErrorKind::PerformanceOutOfRange,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidEmployeeId => "InvalidEmployeeId",
            ErrorKind::InvalidAge => "InvalidAge",
            ErrorKind::AgeOutOfRange => "AgeOutOfRange",
            ErrorKind::InvalidSalary => "InvalidSalary",
            ErrorKind::SalaryNotPositive => "SalaryNotPositive",
            ErrorKind::InvalidPerformance => "InvalidPerformance",
            ErrorKind::PerformanceOutOfRange => "PerformanceOutOfRange",
        }
    }

    /// Human readable explanation used in reports.
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::InvalidEmployeeId => "invalid employee_id",
            ErrorKind::InvalidAge => "age is not an integer",
            ErrorKind::AgeOutOfRange => "age out of allowed range (18-70)",
            ErrorKind::InvalidSalary => "monthly_salary is not a number",
            ErrorKind::SalaryNotPositive => "monthly_salary must be greater than 0",
            ErrorKind::InvalidPerformance => "performance is not a number",
            ErrorKind::PerformanceOutOfRange => "performance out of allowed range (1.0-5.0)",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display_uses_message() {
        assert_eq!(ErrorKind::AgeOutOfRange.to_string(), "age out of allowed range (18-70)");
        assert_eq!(ErrorKind::InvalidEmployeeId.as_str(), "InvalidEmployeeId");
    }

    #[test]
    fn test_error_kind_serializes_as_variant_name() {
        let json = serde_json::to_string(&ErrorKind::SalaryNotPositive).unwrap();
        assert_eq!(json, "\"SalaryNotPositive\"");
    }

    #[test]
    fn test_write_error_message() {
        let err = PipelineError::Write {
            path: "out.json".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().starts_with("Failed to write snapshot 'out.json'"));
    }
}
