pub mod domain;
pub mod engine;
pub mod errors;
pub mod lookup;
pub mod persist;
pub mod pipeline;
pub mod readers;
pub mod record;
pub mod results;
pub mod rules;
pub mod utils;
pub mod validator;

pub use domain::{DerivedFields, Employee, EmploymentMode, Serializable};
pub use errors::{ErrorKind, PipelineError};
pub use lookup::{
    JoinSummary, SalesSummary, build_department_map, department_map_from, join_departments,
};
pub use persist::save_clean_json;
pub use pipeline::{Pipeline, PipelineConfig, PipelineConfigBuilder};
pub use readers::{ReaderConfig, load_employees, load_targets, load_transactions};
pub use record::{RawRecord, ValidRecord, ValidRecordSet};
pub use results::{
    AggregateSummary, BestValueEntry, CityCount, CountryWorkSplit, DepartmentAverage,
    PipelineReport, SnapshotOutcome,
};
pub use validator::{InvalidRecordReport, ValidationOutcome, Validator, filter_valid};
