use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::record::RawRecord;
use crate::utils::{date_parser::parse_date, numbers::round2};

/// Tax rate applied by [`Employee::monthly_net_estimate`] when none is configured.
pub const DEFAULT_TAX_RATE: f64 = 0.21;

const REMOTE_FLAGS: [&str; 4] = ["true", "1", "yes", "y"];

/// `true` when a raw `remote` cell marks a remote worker (case-insensitive).
pub fn is_remote_flag(value: &str) -> bool {
    let value = value.trim();
    REMOTE_FLAGS.iter().any(|flag| value.eq_ignore_ascii_case(flag))
}

/// How an employee works.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EmploymentMode {
    OnSite,
    Remote { home_office_bonus: f64 },
}

impl EmploymentMode {
    pub fn is_remote(&self) -> bool {
        matches!(self, EmploymentMode::Remote { .. })
    }

    /// Monthly bonus added before tax. Zero for on-site staff.
    pub fn bonus(&self) -> f64 {
        match self {
            EmploymentMode::OnSite => 0.0,
            EmploymentMode::Remote { home_office_bonus } => *home_office_bonus,
        }
    }
}

/// Capability of turning a record into a JSON object.
pub trait Serializable {
    fn to_map(&self) -> Map<String, Value>;
}

/// Employee with coerced fields. Unparseable numbers fall back to zero and
/// unparseable dates to `None`; gatekeeping is the validator's job.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub employee_id: String,
    pub name: String,
    pub department: String,
    pub city: String,
    pub country: String,
    pub age: u32,
    pub monthly_salary: f64,
    pub performance: f64,
    pub hire_date: Option<NaiveDate>,
    pub mode: EmploymentMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedFields {
    pub tenure_years: f64,
    pub monthly_net_estimate: f64,
}

impl Employee {
    pub fn from_raw(record: &RawRecord, home_office_bonus: f64) -> Self {
        let mode = if is_remote_flag(record.trimmed("remote")) {
            EmploymentMode::Remote { home_office_bonus }
        } else {
            EmploymentMode::OnSite
        };

        Self {
            employee_id: record.trimmed("employee_id").to_string(),
            name: record.trimmed("name").to_string(),
            department: record.trimmed("department").to_string(),
            city: record.trimmed("city").to_string(),
            country: record.trimmed("country").to_string(),
            age: record.trimmed("age").parse().unwrap_or(0),
            monthly_salary: record.trimmed("monthly_salary").parse().unwrap_or(0.0),
            performance: record.trimmed("performance").parse().unwrap_or(0.0),
            hire_date: parse_date(record.trimmed("hire_date")),
            mode,
        }
    }

    pub fn is_remote(&self) -> bool {
        self.mode.is_remote()
    }

    /// Years since `hire_date` (365.25-day years, two decimals). Zero when the
    /// date is unknown or not in the past.
    pub fn tenure_years(&self, today: NaiveDate) -> f64 {
        let Some(hired) = self.hire_date else {
            return 0.0;
        };
        let days = (today - hired).num_days();
        if days <= 0 {
            return 0.0;
        }
        round2(days as f64 / 365.25)
    }

    /// `(salary + bonus) * (1 - tax_rate)`, tax rate clamped to `[0, 1]`.
    pub fn monthly_net_estimate(&self, tax_rate: f64) -> f64 {
        let tax_rate = tax_rate.clamp(0.0, 1.0);
        let gross = self.monthly_salary + self.mode.bonus();
        round2(gross * (1.0 - tax_rate))
    }
}

pub fn compute_derived_fields(employee: &Employee, today: NaiveDate, tax_rate: f64) -> DerivedFields {
    DerivedFields {
        tenure_years: employee.tenure_years(today),
        monthly_net_estimate: employee.monthly_net_estimate(tax_rate),
    }
}

impl Serializable for Employee {
    fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("employee_id".into(), Value::from(self.employee_id.clone()));
        map.insert("name".into(), Value::from(self.name.clone()));
        map.insert("age".into(), Value::from(self.age));
        map.insert("department".into(), Value::from(self.department.clone()));
        map.insert("city".into(), Value::from(self.city.clone()));
        map.insert("country".into(), Value::from(self.country.clone()));
        map.insert("monthly_salary".into(), Value::from(self.monthly_salary));
        map.insert("performance".into(), Value::from(self.performance));
        map.insert(
            "hire_date".into(),
            self.hire_date
                .map(|d| Value::from(d.format("%Y-%m-%d").to_string()))
                .unwrap_or(Value::Null),
        );
        map.insert("remote".into(), Value::from(self.is_remote()));
        if let EmploymentMode::Remote { home_office_bonus } = self.mode {
            map.insert("home_office_bonus".into(), Value::from(home_office_bonus));
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(remote: &str) -> RawRecord {
        RawRecord::new()
            .with("employee_id", " 7 ")
            .with("name", "Lucía")
            .with("department", "IT")
            .with("city", "Madrid")
            .with("country", "Spain")
            .with("age", "34")
            .with("monthly_salary", "2500.50")
            .with("performance", "4.2")
            .with("hire_date", "15/06/2020")
            .with("remote", remote)
    }

    #[test]
    fn test_from_raw_on_site() {
        let e = Employee::from_raw(&row("no"), 150.0);
        assert_eq!(e.employee_id, "7");
        assert_eq!(e.age, 34);
        assert_eq!(e.monthly_salary, 2500.5);
        assert_eq!(e.hire_date, NaiveDate::from_ymd_opt(2020, 6, 15));
        assert_eq!(e.mode, EmploymentMode::OnSite);
    }

    #[test]
    fn test_from_raw_remote_flags() {
        for flag in ["true", "TRUE", "1", "Yes", " y "] {
            let e = Employee::from_raw(&row(flag), 150.0);
            assert_eq!(e.mode, EmploymentMode::Remote { home_office_bonus: 150.0 }, "{flag}");
        }
        assert!(!Employee::from_raw(&row("t"), 150.0).is_remote());
        assert!(!Employee::from_raw(&row("false"), 150.0).is_remote());
    }

    #[test]
    fn test_from_raw_defaults_on_garbage() {
        let raw = RawRecord::new().with("age", "abc").with("hire_date", "soon");
        let e = Employee::from_raw(&raw, 0.0);
        assert_eq!(e.age, 0);
        assert_eq!(e.monthly_salary, 0.0);
        assert_eq!(e.hire_date, None);
        assert_eq!(e.employee_id, "");
    }

    #[test]
    fn test_tenure_years() {
        let e = Employee::from_raw(&row("no"), 0.0);
        let today = NaiveDate::from_ymd_opt(2022, 6, 15).unwrap();
        assert_eq!(e.tenure_years(today), 2.0);

        let before_hire = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
        assert_eq!(e.tenure_years(before_hire), 0.0);
    }

    #[test]
    fn test_net_estimate_dispatches_on_mode() {
        let onsite = Employee::from_raw(&row("no"), 150.0);
        let remote = Employee::from_raw(&row("yes"), 150.0);

        assert_eq!(onsite.monthly_net_estimate(0.2), 2000.4);
        assert_eq!(remote.monthly_net_estimate(0.2), 2120.4);
        // clamped tax rates
        assert_eq!(onsite.monthly_net_estimate(-1.0), 2500.5);
        assert_eq!(onsite.monthly_net_estimate(3.0), 0.0);
    }

    #[test]
    fn test_compute_derived_fields() {
        let e = Employee::from_raw(&row("yes"), 100.0);
        let today = NaiveDate::from_ymd_opt(2021, 6, 15).unwrap();
        let derived = compute_derived_fields(&e, today, 0.0);
        assert_eq!(derived.tenure_years, 1.0);
        assert_eq!(derived.monthly_net_estimate, 2600.5);
    }

    #[test]
    fn test_to_map_includes_bonus_only_for_remote() {
        let onsite = Employee::from_raw(&row("no"), 150.0).to_map();
        let remote = Employee::from_raw(&row("yes"), 150.0).to_map();

        assert_eq!(onsite["hire_date"], Value::from("2020-06-15"));
        assert_eq!(onsite["remote"], Value::from(false));
        assert!(!onsite.contains_key("home_office_bonus"));
        assert_eq!(remote["home_office_bonus"], Value::from(150.0));
    }
}
