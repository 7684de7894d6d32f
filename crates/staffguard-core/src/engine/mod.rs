//! Read-only reductions over a [`ValidRecordSet`](crate::ValidRecordSet).

mod aggregator;
mod dedup;

pub use aggregator::{
    DEFAULT_TOP_CITIES, average_salary_by_department, remote_split_by_country, summarize,
    top_cities,
};
pub use dedup::find_duplicate_ids;
