//! Row representations flowing through the pipeline.
//!
//! A [`RawRecord`] is one source row exactly as read: field name to raw string,
//! no trimming, no coercion. Once a row passes validation it is paired with its
//! typed [`Employee`] conversion in a [`ValidRecord`], so downstream consumers
//! never re-parse strings.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::Employee;

/// One source row, field order preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    fields: Vec<(String, Option<String>)>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Set a field, replacing the value if the name already exists.
    pub fn insert(&mut self, name: impl Into<String>, value: Option<String>) {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Builder-style [`RawRecord::insert`] with a present value.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, Some(value.into()));
        self
    }

    /// Raw value of a field. Missing fields and empty cells both read as `None`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Trimmed value of a field, `""` when absent.
    pub fn trimmed(&self, name: &str) -> &str {
        self.get(name).map(str::trim).unwrap_or("")
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|(n, _)| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, Option<String>)> for RawRecord {
    fn from_iter<T: IntoIterator<Item = (String, Option<String>)>>(iter: T) -> Self {
        let mut record = RawRecord::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

// Values stay strings in the snapshot; an empty cell is written as "".
impl Serialize for RawRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value.as_deref().unwrap_or(""))?;
        }
        map.end()
    }
}

/// A record that passed validation, with its typed conversion.
#[derive(Debug, Clone)]
pub struct ValidRecord {
    pub raw: RawRecord,
    pub employee: Employee,
}

/// Valid records in source order. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct ValidRecordSet {
    records: Vec<ValidRecord>,
}

impl ValidRecordSet {
    /// Convert already validated rows. Remote rows receive `home_office_bonus`.
    pub fn from_raw(records: Vec<RawRecord>, home_office_bonus: f64) -> Self {
        let records = records
            .into_iter()
            .map(|raw| {
                let employee = Employee::from_raw(&raw, home_office_bonus);
                ValidRecord { raw, employee }
            })
            .collect();
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidRecord> {
        self.records.iter()
    }

    pub fn raw_records(&self) -> impl Iterator<Item = &RawRecord> {
        self.records.iter().map(|r| &r.raw)
    }

    pub fn employees(&self) -> impl Iterator<Item = &Employee> {
        self.records.iter().map(|r| &r.employee)
    }
}

impl<'a> IntoIterator for &'a ValidRecordSet {
    type Item = &'a ValidRecord;
    type IntoIter = std::slice::Iter<'a, ValidRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
