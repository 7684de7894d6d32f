use chrono::NaiveDate;

/// Accepted hire date layouts, tried in order.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y"];

/// Parse a hire date, first matching layout wins. Unparseable input is `None`.
pub fn parse_date(str_date: &str) -> Option<NaiveDate> {
    let str_date = str_date.trim();
    if str_date.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(str_date, fmt).ok())
}
