//! Batch entry point: load → validate → aggregate → deduplicate → persist.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::domain::{DEFAULT_TAX_RATE, best_value_top, compute_derived_fields, split_remote_onsite};
use crate::engine::{DEFAULT_TOP_CITIES, find_duplicate_ids, summarize};
use crate::lookup::build_department_map;
use crate::persist::save_clean_json;
use crate::readers::{ReaderConfig, load_employees};
use crate::record::ValidRecordSet;
use crate::results::{BestValueEntry, PipelineReport, SnapshotOutcome};
use crate::validator::filter_valid;

pub const DEFAULT_SOURCE_PATH: &str = "employees.csv";
pub const DEFAULT_SNAPSHOT_PATH: &str = "employees_clean.json";
pub const DEFAULT_BEST_VALUE_LIMIT: usize = 15;
pub const DEFAULT_HOME_OFFICE_BONUS: f64 = 150.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub source_path: PathBuf,
    pub clean_snapshot_path: PathBuf,
    pub top_cities: usize,
    pub best_value_limit: usize,
    pub home_office_bonus: f64,
    pub tax_rate: f64,
    /// Reference date for tenure. `None` means today.
    pub as_of: Option<NaiveDate>,
    pub reader: ReaderConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            clean_snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
            top_cities: DEFAULT_TOP_CITIES,
            best_value_limit: DEFAULT_BEST_VALUE_LIMIT,
            home_office_bonus: DEFAULT_HOME_OFFICE_BONUS,
            tax_rate: DEFAULT_TAX_RATE,
            as_of: None,
            reader: ReaderConfig::default(),
        }
    }
}

impl PipelineConfig {
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::new()
    }
}

pub struct PipelineConfigBuilder {
    config: PipelineConfig,
}

impl Default for PipelineConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineConfigBuilder {
    /// Create a new [`PipelineConfigBuilder`] seeded with the defaults
    pub fn new() -> Self {
        Self {
            config: PipelineConfig::default(),
        }
    }

    /// Build a [`PipelineConfig`]
    pub fn build(self) -> PipelineConfig {
        self.config
    }

    pub fn with_source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.source_path = path.into();
        self
    }

    pub fn with_clean_snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.clean_snapshot_path = path.into();
        self
    }

    pub fn with_top_cities(mut self, n: usize) -> Self {
        self.config.top_cities = n;
        self
    }

    pub fn with_best_value_limit(mut self, limit: usize) -> Self {
        self.config.best_value_limit = limit;
        self
    }

    pub fn with_home_office_bonus(mut self, bonus: f64) -> Self {
        self.config.home_office_bonus = bonus;
        self
    }

    pub fn with_tax_rate(mut self, tax_rate: f64) -> Self {
        self.config.tax_rate = tax_rate;
        self
    }

    pub fn with_as_of(mut self, date: NaiveDate) -> Self {
        self.config.as_of = Some(date);
        self
    }

    pub fn with_reader(mut self, reader: ReaderConfig) -> Self {
        self.config.reader = reader;
        self
    }
}

pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Load and validate the source. Returns the valid set and the report
    /// skeleton, without touching the snapshot.
    pub fn process(&self) -> (ValidRecordSet, PipelineReport) {
        let source = &self.config.source_path;
        let rows = load_employees(source, &self.config.reader);
        if rows.is_empty() {
            log::warn!("No data loaded from {}", source.display());
            return (ValidRecordSet::default(), PipelineReport::empty(source.clone()));
        }

        let loaded_rows = rows.len();
        let (valid, invalid) = filter_valid(rows);
        let records = ValidRecordSet::from_raw(valid, self.config.home_office_bonus);
        log::info!(
            "Validated {}: {} valid, {} invalid",
            source.display(),
            records.len(),
            invalid.len()
        );

        let aggregates = summarize(&records, self.config.top_cities);
        let duplicate_ids = find_duplicate_ids(records.raw_records());
        let (remote, onsite) = split_remote_onsite(records.employees());
        let today = self.config.as_of.unwrap_or_else(|| Local::now().date_naive());
        let best_value = best_value_top(records.employees(), self.config.best_value_limit)
            .into_iter()
            .map(|(employee, score)| {
                let derived = compute_derived_fields(employee, today, self.config.tax_rate);
                BestValueEntry {
                    employee_id: employee.employee_id.clone(),
                    name: employee.name.clone(),
                    score,
                    tenure_years: derived.tenure_years,
                    monthly_net_estimate: derived.monthly_net_estimate,
                }
            })
            .collect();

        let report = PipelineReport {
            source: source.clone(),
            loaded_rows,
            valid_rows: records.len(),
            invalid,
            aggregates,
            duplicate_ids,
            remote_count: remote.len(),
            onsite_count: onsite.len(),
            best_value,
            snapshot: SnapshotOutcome::Skipped,
        };
        (records, report)
    }

    /// Full run. A snapshot write failure is recorded in the report, not
    /// raised; the caller decides whether it is fatal.
    pub fn run(&self) -> PipelineReport {
        let (records, mut report) = self.process();
        if report.is_empty() {
            return report;
        }

        let path = &self.config.clean_snapshot_path;
        report.snapshot = match save_clean_json(records.raw_records(), path) {
            Ok(()) => SnapshotOutcome::Written(path.clone()),
            Err(e) => {
                log::error!("{e}");
                SnapshotOutcome::Failed(e.to_string())
            }
        };
        report
    }

    /// Employee-id → department for the configured paths.
    pub fn department_map(&self) -> HashMap<String, String> {
        build_department_map(
            &self.config.clean_snapshot_path,
            &self.config.source_path,
            &self.config.reader,
        )
    }

    pub fn source_path(&self) -> &Path {
        &self.config.source_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.source_path, PathBuf::from("employees.csv"));
        assert_eq!(config.clean_snapshot_path, PathBuf::from("employees_clean.json"));
        assert_eq!(config.top_cities, 5);
        assert_eq!(config.best_value_limit, 15);
        assert_eq!(config.home_office_bonus, 150.0);
        assert_eq!(config.tax_rate, 0.21);
    }

    #[test]
    fn test_config_builder() {
        let config = PipelineConfig::builder()
            .with_source_path("in.csv")
            .with_clean_snapshot_path("out.json")
            .with_top_cities(3)
            .with_best_value_limit(1)
            .with_home_office_bonus(0.0)
            .with_tax_rate(0.3)
            .with_as_of(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .build();
        assert_eq!(config.source_path, PathBuf::from("in.csv"));
        assert_eq!(config.clean_snapshot_path, PathBuf::from("out.json"));
        assert_eq!(config.top_cities, 3);
        assert_eq!(config.best_value_limit, 1);
        assert_eq!(config.home_office_bonus, 0.0);
        assert_eq!(config.tax_rate, 0.3);
        assert_eq!(config.as_of, NaiveDate::from_ymd_opt(2024, 1, 1));
    }

    #[test]
    fn test_missing_source_yields_empty_report() {
        let config = PipelineConfig::builder()
            .with_source_path("/nonexistent/employees.csv")
            .build();
        let report = Pipeline::new(config).run();
        assert!(report.is_empty());
        assert_eq!(report.snapshot, SnapshotOutcome::Skipped);
    }
}
