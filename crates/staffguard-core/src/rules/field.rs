use crate::errors::ErrorKind;
use crate::rules::Range;

/// A check applied to one field of a record.
///
/// Rules receive the already trimmed value; a missing field arrives as `""`.
pub trait FieldRule: Send + Sync {
    /// Returns the name of the rule.
    fn name(&self) -> &'static str;
    /// Field the rule reads.
    fn field(&self) -> &str;
    /// Validates a single trimmed value.
    fn check(&self, value: &str) -> Result<(), ErrorKind>;
}

fn is_ascii_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Non-empty, ASCII digits only.
pub struct AsciiDigits {
    field: String,
    error: ErrorKind,
}

impl AsciiDigits {
    pub fn new(field: impl Into<String>, error: ErrorKind) -> Self {
        Self {
            field: field.into(),
            error,
        }
    }
}

impl FieldRule for AsciiDigits {
    fn name(&self) -> &'static str {
        "AsciiDigits"
    }

    fn field(&self) -> &str {
        &self.field
    }

    fn check(&self, value: &str) -> Result<(), ErrorKind> {
        if is_ascii_digits(value) {
            Ok(())
        } else {
            Err(self.error)
        }
    }
}

/// Unsigned integer written with digits only, within a range.
pub struct IntegerRange {
    field: String,
    range: Range<u64>,
    parse_error: ErrorKind,
    range_error: ErrorKind,
}

impl IntegerRange {
    pub fn new(
        field: impl Into<String>,
        range: Range<u64>,
        parse_error: ErrorKind,
        range_error: ErrorKind,
    ) -> Self {
        Self {
            field: field.into(),
            range,
            parse_error,
            range_error,
        }
    }
}

impl FieldRule for IntegerRange {
    fn name(&self) -> &'static str {
        "IntegerRange"
    }

    fn field(&self) -> &str {
        &self.field
    }

    fn check(&self, value: &str) -> Result<(), ErrorKind> {
        if !is_ascii_digits(value) {
            return Err(self.parse_error);
        }
        // Digits only, so the sole parse failure left is overflow: out of range.
        match value.parse::<u64>() {
            Ok(n) if self.range.contains(n) => Ok(()),
            _ => Err(self.range_error),
        }
    }
}

/// Decimal number (standard float syntax, exponent allowed) within a range.
pub struct FloatRange {
    field: String,
    range: Range<f64>,
    parse_error: ErrorKind,
    range_error: ErrorKind,
}

impl FloatRange {
    pub fn new(
        field: impl Into<String>,
        range: Range<f64>,
        parse_error: ErrorKind,
        range_error: ErrorKind,
    ) -> Self {
        Self {
            field: field.into(),
            range,
            parse_error,
            range_error,
        }
    }
}

impl FieldRule for FloatRange {
    fn name(&self) -> &'static str {
        "FloatRange"
    }

    fn field(&self) -> &str {
        &self.field
    }

    fn check(&self, value: &str) -> Result<(), ErrorKind> {
        let number: f64 = value.parse().map_err(|_| self.parse_error)?;
        if self.range.contains(number) {
            Ok(())
        } else {
            Err(self.range_error)
        }
    }
}
