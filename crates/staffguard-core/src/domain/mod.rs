//! Typed employee model built from validated rows.

mod employee;
mod operations;

pub use employee::{
    DEFAULT_TAX_RATE, DerivedFields, Employee, EmploymentMode, Serializable,
    compute_derived_fields, is_remote_flag,
};
pub use operations::{best_value_score, best_value_top, split_remote_onsite};
