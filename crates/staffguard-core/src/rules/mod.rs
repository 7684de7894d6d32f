pub mod field;
pub mod range;

pub use field::{AsciiDigits, FieldRule, FloatRange, IntegerRange};
pub use range::Range;
