use std::collections::{BTreeSet, HashSet};

use crate::record::RawRecord;
use crate::utils::hasher::Xxh3State;

/// Ids of records repeating an earlier `(name, hire_date)` pair.
///
/// The first record carrying a pair is never reported. Repeats with an empty
/// `employee_id` still count as sightings but add nothing to the result.
pub fn find_duplicate_ids<'a, I>(records: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a RawRecord>,
{
    let mut seen: HashSet<(&str, &str), Xxh3State> = HashSet::with_hasher(Xxh3State);
    let mut duplicates = BTreeSet::new();

    for record in records {
        let key = (record.trimmed("name"), record.trimmed("hire_date"));
        if seen.insert(key) {
            continue;
        }
        let employee_id = record.trimmed("employee_id");
        if !employee_id.is_empty() {
            duplicates.insert(employee_id.to_string());
        }
    }

    duplicates
}
