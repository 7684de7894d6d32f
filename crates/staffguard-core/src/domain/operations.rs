use super::Employee;

/// Partition employees into `(remote, onsite)`, keeping input order.
pub fn split_remote_onsite<'a, I>(employees: I) -> (Vec<&'a Employee>, Vec<&'a Employee>)
where
    I: IntoIterator<Item = &'a Employee>,
{
    employees.into_iter().partition(|e| e.is_remote())
}

/// Performance per unit of salary. `None` when the salary is not positive.
pub fn best_value_score(employee: &Employee) -> Option<f64> {
    (employee.monthly_salary > 0.0).then(|| employee.performance / employee.monthly_salary)
}

/// The `limit` employees with the highest [`best_value_score`], best first.
/// Equal scores keep input order.
pub fn best_value_top<'a, I>(employees: I, limit: usize) -> Vec<(&'a Employee, f64)>
where
    I: IntoIterator<Item = &'a Employee>,
{
    let mut scored: Vec<(&Employee, f64)> = employees
        .into_iter()
        .filter_map(|e| best_value_score(e).map(|score| (e, score)))
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(limit);
    scored
}
