//! Employee-id → department lookup used to join sales data.
//!
//! The clean snapshot is preferred because it already holds validated rows.
//! When it is missing or does not look like a snapshot, the map is rebuilt
//! from the primary source through the same load and validate steps the
//! pipeline uses.

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::readers::{ReaderConfig, load_employees, load_targets, load_transactions};
use crate::record::RawRecord;
use crate::validator::filter_valid;

/// Rows inspected when deciding whether a snapshot is usable.
const SHAPE_CHECK_ROWS: usize = 5;

fn json_to_cell(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn object_to_record(object: &Map<String, Value>) -> RawRecord {
    object
        .iter()
        .map(|(name, value)| (name.clone(), json_to_cell(value)))
        .collect()
}

fn has_lookup_keys(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|row| row.contains_key("employee_id") && row.contains_key("department"))
}

/// Load the clean snapshot, or `None` when it is unusable.
///
/// Usable means: readable, valid JSON, a top-level array, and its first five
/// elements are objects carrying both `employee_id` and `department`.
///
/// Fields keep the order they have in the file. Strings are taken as is,
/// other scalars are stringified (`true` gives `"true"`, `1.0` gives `"1.0"`)
/// and `null` becomes an empty cell, the same as an empty source cell.
pub fn load_clean_snapshot(path: impl AsRef<Path>) -> Option<Vec<RawRecord>> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            log::debug!("Snapshot {} unavailable: {e}", path.display());
            return None;
        }
    };
    let data: Value = match serde_json::from_reader(BufReader::new(file)) {
        Ok(data) => data,
        Err(e) => {
            log::debug!("Snapshot {} is not valid JSON: {e}", path.display());
            return None;
        }
    };

    let Value::Array(rows) = data else {
        log::debug!("Snapshot {} is not an array", path.display());
        return None;
    };
    if !rows.iter().take(SHAPE_CHECK_ROWS).all(has_lookup_keys) {
        log::debug!("Snapshot {} rows lack employee_id/department", path.display());
        return None;
    }

    let records = rows
        .iter()
        .filter_map(|row| match row.as_object() {
            Some(object) => Some(object_to_record(object)),
            None => {
                log::debug!("Skipping non-object snapshot row: {row}");
                None
            }
        })
        .collect();
    Some(records)
}

/// Build the lookup from rows: trimmed id and department, empty ids skipped,
/// later rows overwrite earlier ones.
pub fn department_map_from<'a, I>(records: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = &'a RawRecord>,
{
    let mut mapping = HashMap::new();
    for record in records {
        let employee_id = record.trimmed("employee_id");
        if employee_id.is_empty() {
            continue;
        }
        mapping.insert(
            employee_id.to_string(),
            record.trimmed("department").to_string(),
        );
    }
    mapping
}

/// Employee-id → department, from the clean snapshot when usable, otherwise
/// from the valid rows of the primary source.
pub fn build_department_map(
    clean_snapshot_path: impl AsRef<Path>,
    primary_source_path: impl AsRef<Path>,
    config: &ReaderConfig,
) -> HashMap<String, String> {
    if let Some(rows) = load_clean_snapshot(&clean_snapshot_path) {
        log::info!(
            "Department map from snapshot {}",
            clean_snapshot_path.as_ref().display()
        );
        return department_map_from(&rows);
    }

    log::info!(
        "Snapshot unusable, rebuilding department map from {}",
        primary_source_path.as_ref().display()
    );
    let rows = load_employees(primary_source_path, config);
    let (valid, _invalid) = filter_valid(rows);
    department_map_from(&valid)
}

/// Sales rows grouped by the department of their `employee_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JoinSummary {
    pub by_department: BTreeMap<String, usize>,
    pub unmatched: usize,
}

impl JoinSummary {
    pub fn matched(&self) -> usize {
        self.by_department.values().sum()
    }
}

/// Sales workbook figures for the KPI view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SalesSummary {
    pub transactions: JoinSummary,
    pub targets: usize,
}

impl SalesSummary {
    /// Join the "Transactions" sheet against `departments` and count the
    /// "Targets" rows. A missing workbook or sheet counts as empty.
    pub fn from_workbook(path: impl AsRef<Path>, departments: &HashMap<String, String>) -> Self {
        let path = path.as_ref();
        let transactions = load_transactions(path);
        let targets = load_targets(path);
        log::info!(
            "Loaded {} transactions and {} targets from {}",
            transactions.len(),
            targets.len(),
            path.display()
        );
        Self {
            transactions: join_departments(&transactions, departments),
            targets: targets.len(),
        }
    }
}

pub fn join_departments<'a, I>(rows: I, departments: &HashMap<String, String>) -> JoinSummary
where
    I: IntoIterator<Item = &'a RawRecord>,
{
    let mut summary = JoinSummary::default();
    for row in rows {
        match departments.get(row.trimmed("employee_id")) {
            Some(department) => *summary.by_department.entry(department.clone()).or_insert(0) += 1,
            None => summary.unmatched += 1,
        }
    }
    summary
}
