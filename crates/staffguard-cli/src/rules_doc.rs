use staffguard_core::{ErrorKind, Validator};

/// Print the record rules in the order they are evaluated.
pub fn print_rules_documentation() {
    println!("{}", rules_documentation());
}

fn rules_documentation() -> String {
    let mut doc = String::from("STAFFGUARD RECORD RULES\n=======================\n");
    doc.push_str("\nRules run in this order; the first failure rejects the record.\n");
    doc.push_str("Values are trimmed before checking; a missing field counts as empty.\n\n");

    for (i, (field, rule)) in Validator::new().get_rules().into_iter().enumerate() {
        doc.push_str(&format!("  {}. {:<16} {}\n", i + 1, field, rule));
    }

    doc.push_str("\nRejection reasons:\n");
    for kind in ErrorKind::ALL {
        doc.push_str(&format!("  {:<24} {}\n", kind.as_str(), kind.message()));
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documentation_lists_rules_in_order() {
        let doc = rules_documentation();
        assert!(doc.contains("1. employee_id"));
        assert!(doc.contains("2. age"));
        assert!(doc.contains("3. monthly_salary"));
        assert!(doc.contains("4. performance"));
        assert!(doc.contains("age out of allowed range (18-70)"));
    }
}
