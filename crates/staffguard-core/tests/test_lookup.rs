use staffguard_core::lookup::load_clean_snapshot;
use staffguard_core::{
    ReaderConfig, build_department_map, department_map_from, filter_valid, load_employees,
    save_clean_json,
};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tempfile::tempdir;

fn write_source(path: &Path) {
    let mut file = File::create(path).unwrap();
    writeln!(file, "employee_id,name,department,age,monthly_salary,performance").unwrap();
    writeln!(file, "1,Ana,IT,30,2000,4.0").unwrap();
    writeln!(file, "2,Luis, HR ,41,1800,3.5").unwrap();
    writeln!(file, "3,Eva,Sales,15,1500,3.0").unwrap();
    writeln!(file, "1,Ana,Finance,30,2100,4.2").unwrap();
}

#[test]
fn test_snapshot_round_trip_matches_direct_map() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("employees.csv");
    let snapshot = dir.path().join("employees_clean.json");
    write_source(&source);

    let (valid, _) = filter_valid(load_employees(&source, &ReaderConfig::default()));
    save_clean_json(&valid, &snapshot).unwrap();

    let reloaded = load_clean_snapshot(&snapshot).unwrap();
    assert_eq!(reloaded, valid);
    assert_eq!(department_map_from(&reloaded), department_map_from(&valid));
}

#[test]
fn test_missing_snapshot_falls_back_to_source() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("employees.csv");
    write_source(&source);

    let map = build_department_map(
        dir.path().join("missing.json"),
        &source,
        &ReaderConfig::default(),
    );

    assert_eq!(map.len(), 2);
    assert_eq!(map["1"], "Finance");
    assert_eq!(map["2"], "HR");
    assert!(!map.contains_key("3"));

    let config = ReaderConfig::default();
    let (valid, _) = filter_valid(load_employees(&source, &config));
    assert_eq!(map, department_map_from(&valid));
}

#[test]
fn test_malformed_snapshot_falls_back_to_source() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("employees.csv");
    let snapshot = dir.path().join("employees_clean.json");
    write_source(&source);
    fs::write(&snapshot, r#"[{"id": 1}]"#).unwrap();

    let config = ReaderConfig::default();
    let map = build_department_map(&snapshot, &source, &config);
    assert_eq!(map["1"], "Finance");

    let (valid, _) = filter_valid(load_employees(&source, &config));
    assert_eq!(map, department_map_from(&valid));
}

#[test]
fn test_usable_snapshot_wins_over_source() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("employees.csv");
    let snapshot = dir.path().join("employees_clean.json");
    write_source(&source);
    fs::write(&snapshot, r#"[{"employee_id": 7, "department": "Legal"}]"#).unwrap();

    let map = build_department_map(&snapshot, &source, &ReaderConfig::default());
    assert_eq!(map.len(), 1);
    assert_eq!(map["7"], "Legal");
}

#[test]
fn test_nothing_available_gives_empty_map() {
    let dir = tempdir().unwrap();
    let map = build_department_map(
        dir.path().join("a.json"),
        dir.path().join("b.csv"),
        &ReaderConfig::default(),
    );
    assert!(map.is_empty());
}
