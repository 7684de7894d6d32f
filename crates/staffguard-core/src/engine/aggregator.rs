use std::collections::HashMap;

use crate::domain::Employee;
use crate::record::ValidRecordSet;
use crate::results::{AggregateSummary, CityCount, CountryWorkSplit, DepartmentAverage};
use crate::utils::numbers::{percentage, round2};

pub const DEFAULT_TOP_CITIES: usize = 5;

/// Insertion-ordered grouping: the group index of a key is the position of its
/// first appearance, so a stable sort over the groups keeps that order on ties.
struct Groups<A> {
    index: HashMap<String, usize>,
    groups: Vec<(String, A)>,
}

impl<A: Default> Groups<A> {
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            groups: Vec::new(),
        }
    }

    fn entry(&mut self, key: &str) -> &mut A {
        let idx = match self.index.get(key) {
            Some(&idx) => idx,
            None => {
                self.groups.push((key.to_string(), A::default()));
                self.index.insert(key.to_string(), self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        &mut self.groups[idx].1
    }

    fn into_vec(self) -> Vec<(String, A)> {
        self.groups
    }
}

#[derive(Default)]
struct DepartmentTotals {
    total_salary: f64,
    count: usize,
}

/// Average monthly salary per department, highest first.
pub fn average_salary_by_department<'a, I>(employees: I) -> Vec<DepartmentAverage>
where
    I: IntoIterator<Item = &'a Employee>,
{
    let mut departments: Groups<DepartmentTotals> = Groups::new();
    for employee in employees {
        let totals = departments.entry(&employee.department);
        totals.total_salary += employee.monthly_salary;
        totals.count += 1;
    }

    let mut averages: Vec<DepartmentAverage> = departments
        .into_vec()
        .into_iter()
        .map(|(department, totals)| DepartmentAverage {
            department,
            average_salary: round2(totals.total_salary / totals.count as f64),
        })
        .collect();
    averages.sort_by(|a, b| b.average_salary.total_cmp(&a.average_salary));
    averages
}

/// The `n` cities with the most employees, largest first.
pub fn top_cities<'a, I>(employees: I, n: usize) -> Vec<CityCount>
where
    I: IntoIterator<Item = &'a Employee>,
{
    let mut cities: Groups<usize> = Groups::new();
    for employee in employees {
        *cities.entry(&employee.city) += 1;
    }

    let mut counts: Vec<CityCount> = cities
        .into_vec()
        .into_iter()
        .map(|(city, count)| CityCount { city, count })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(n);
    counts
}

#[derive(Default)]
struct WorkTypeCounts {
    total: usize,
    remote: usize,
    on_site: usize,
}

/// Remote and on-site head counts per country, in first-seen order.
pub fn remote_split_by_country<'a, I>(employees: I) -> Vec<CountryWorkSplit>
where
    I: IntoIterator<Item = &'a Employee>,
{
    let mut countries: Groups<WorkTypeCounts> = Groups::new();
    for employee in employees {
        let counts = countries.entry(&employee.country);
        counts.total += 1;
        if employee.is_remote() {
            counts.remote += 1;
        } else {
            counts.on_site += 1;
        }
    }

    // percentages only once every record of a country is counted
    countries
        .into_vec()
        .into_iter()
        .map(|(country, counts)| CountryWorkSplit {
            country,
            remote_percentage: percentage(counts.remote, counts.total),
            total: counts.total,
            remote: counts.remote,
            on_site: counts.on_site,
        })
        .collect()
}

/// Run the three reductions. They share no state, so rayon runs them side by side.
pub fn summarize(records: &ValidRecordSet, top_n: usize) -> AggregateSummary {
    let (average_salary_by_department, (top_cities, work_split_by_country)) = rayon::join(
        || average_salary_by_department(records.employees()),
        || {
            rayon::join(
                || top_cities(records.employees(), top_n),
                || remote_split_by_country(records.employees()),
            )
        },
    );

    AggregateSummary {
        average_salary_by_department,
        top_cities,
        work_split_by_country,
    }
}
