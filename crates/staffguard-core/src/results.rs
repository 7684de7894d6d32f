use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::Serialize;

use crate::errors::ErrorKind;
use crate::validator::InvalidRecordReport;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentAverage {
    pub department: String,
    pub average_salary: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityCount {
    pub city: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryWorkSplit {
    pub country: String,
    pub total: usize,
    pub remote: usize,
    pub on_site: usize,
    pub remote_percentage: f64,
}

/// The three reductions over a valid record set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateSummary {
    pub average_salary_by_department: Vec<DepartmentAverage>,
    pub top_cities: Vec<CityCount>,
    pub work_split_by_country: Vec<CountryWorkSplit>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestValueEntry {
    pub employee_id: String,
    pub name: String,
    pub score: f64,
    pub tenure_years: f64,
    pub monthly_net_estimate: f64,
}

/// What happened to the clean snapshot during a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum SnapshotOutcome {
    Written(PathBuf),
    /// Nothing was loaded, so nothing was persisted.
    Skipped,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineReport {
    pub source: PathBuf,
    pub loaded_rows: usize,
    pub valid_rows: usize,
    pub invalid: Vec<InvalidRecordReport>,
    pub aggregates: AggregateSummary,
    pub duplicate_ids: BTreeSet<String>,
    pub remote_count: usize,
    pub onsite_count: usize,
    pub best_value: Vec<BestValueEntry>,
    pub snapshot: SnapshotOutcome,
}

impl PipelineReport {
    /// Report for a run whose source produced no rows.
    pub fn empty(source: PathBuf) -> Self {
        Self {
            source,
            loaded_rows: 0,
            valid_rows: 0,
            invalid: Vec::new(),
            aggregates: AggregateSummary::default(),
            duplicate_ids: BTreeSet::new(),
            remote_count: 0,
            onsite_count: 0,
            best_value: Vec::new(),
            snapshot: SnapshotOutcome::Skipped,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.loaded_rows == 0
    }

    pub fn invalid_rows(&self) -> usize {
        self.invalid.len()
    }

    /// Rejected record count per reason, ordered by rule.
    pub fn invalid_by_reason(&self) -> BTreeMap<ErrorKind, usize> {
        let mut counts = BTreeMap::new();
        for report in &self.invalid {
            *counts.entry(report.reason).or_insert(0) += 1;
        }
        counts
    }

    pub fn snapshot_failed(&self) -> bool {
        matches!(self.snapshot, SnapshotOutcome::Failed(_))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty_report() {
        let report = PipelineReport::empty(PathBuf::from("employees.csv"));
        assert!(report.is_empty());
        assert_eq!(report.snapshot, SnapshotOutcome::Skipped);
        assert!(!report.snapshot_failed());
    }

    #[test]
    fn test_invalid_by_reason() {
        let mut report = PipelineReport::empty(PathBuf::from("employees.csv"));
        for (id, reason) in [
            ("1", ErrorKind::AgeOutOfRange),
            ("", ErrorKind::InvalidEmployeeId),
            ("3", ErrorKind::AgeOutOfRange),
        ] {
            report.invalid.push(InvalidRecordReport {
                employee_id: id.to_string(),
                reason,
            });
        }
        let counts = report.invalid_by_reason();
        assert_eq!(counts.get(&ErrorKind::AgeOutOfRange), Some(&2));
        assert_eq!(counts.keys().next(), Some(&ErrorKind::InvalidEmployeeId));
    }

    #[test]
    fn test_snapshot_outcome_serialization() {
        let json = serde_json::to_string(&SnapshotOutcome::Failed("denied".into())).unwrap();
        assert_eq!(json, r#"{"status":"failed","detail":"denied"}"#);
    }
}
