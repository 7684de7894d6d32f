use staffguard_core::readers::try_load_employees;
use staffguard_core::{PipelineError, ReaderConfig, load_employees};
use std::fs::File;
use std::io::Write;
use tempfile::tempdir;

#[test]
fn test_load_preserves_order_and_raw_values() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("employees.csv");
    let mut file = File::create(&file_path).unwrap();
    writeln!(file, "employee_id,name,city,remote").unwrap();
    writeln!(file, "1, Ana ,Madrid,yes").unwrap();
    writeln!(file, "2,\"Smith, John\",,no").unwrap();
    writeln!(file, "3,Zoë,Kraków,").unwrap();

    let rows = load_employees(&file_path, &ReaderConfig::default());

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].get("name"), Some(" Ana "));
    assert_eq!(rows[1].get("name"), Some("Smith, John"));
    assert_eq!(rows[1].get("city"), None);
    assert_eq!(rows[2].get("city"), Some("Kraków"));
    assert_eq!(rows[2].get("remote"), None);
    let fields: Vec<&str> = rows[0].iter().map(|(name, _)| name).collect();
    assert_eq!(fields, vec!["employee_id", "name", "city", "remote"]);
}

#[test]
fn test_small_batches_keep_all_rows() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("employees.csv");
    let mut file = File::create(&file_path).unwrap();
    writeln!(file, "employee_id").unwrap();
    for i in 0..10 {
        writeln!(file, "{i}").unwrap();
    }

    let config = staffguard_core::readers::ReaderConfigBuilder::new()
        .with_batch_size(3)
        .build();
    let rows = load_employees(&file_path, &config);
    let ids: Vec<&str> = rows.iter().filter_map(|r| r.get("employee_id")).collect();
    assert_eq!(ids, vec!["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"]);
}

#[test]
fn test_semicolon_delimiter() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("employees.csv");
    let mut file = File::create(&file_path).unwrap();
    writeln!(file, "employee_id;department").unwrap();
    writeln!(file, "1;IT").unwrap();

    let config = staffguard_core::readers::ReaderConfigBuilder::new()
        .with_delimiter(b';')
        .build();
    let rows = load_employees(&file_path, &config);
    assert_eq!(rows[0].get("department"), Some("IT"));
}

#[test]
fn test_header_only_file() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("employees.csv");
    let mut file = File::create(&file_path).unwrap();
    writeln!(file, "employee_id,name").unwrap();

    assert!(load_employees(&file_path, &ReaderConfig::default()).is_empty());
}

#[test]
fn test_missing_file_is_soft() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("nope.csv");

    assert!(load_employees(&file_path, &ReaderConfig::default()).is_empty());
    assert!(matches!(
        try_load_employees(&file_path, &ReaderConfig::default()),
        Err(PipelineError::SourceUnavailable { .. })
    ));
}

#[test]
fn test_extra_cells_keep_every_row() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("employees.csv");
    let mut file = File::create(&file_path).unwrap();
    writeln!(file, "employee_id,department").unwrap();
    for i in 1..=100 {
        writeln!(file, "{i},Sales").unwrap();
    }
    writeln!(file, "101,IT,stray").unwrap();

    let rows = load_employees(&file_path, &ReaderConfig::default());

    assert_eq!(rows.len(), 101);
    assert_eq!(rows[100].get("employee_id"), Some("101"));
    assert_eq!(rows[100].get("department"), Some("IT"));
    assert_eq!(rows[100].len(), 2);
}

#[test]
fn test_short_rows_keep_missing_fields_empty() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("employees.csv");
    let mut file = File::create(&file_path).unwrap();
    writeln!(file, "employee_id,name,city").unwrap();
    writeln!(file, "1,Ana,Madrid").unwrap();
    writeln!(file, "2,Luis").unwrap();

    let rows = try_load_employees(&file_path, &ReaderConfig::default()).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].get("name"), Some("Luis"));
    assert_eq!(rows[1].get("city"), None);
}

#[test]
fn test_short_and_long_rows_together() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("employees.csv");
    let mut file = File::create(&file_path).unwrap();
    writeln!(file, "employee_id,name,city").unwrap();
    writeln!(file, "1,Ana").unwrap();
    writeln!(file, "2,Luis,Lima,extra").unwrap();
    writeln!(file, "3,Eva,Quito").unwrap();

    let rows = load_employees(&file_path, &ReaderConfig::default());
    let ids: Vec<&str> = rows.iter().filter_map(|r| r.get("employee_id")).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(rows[0].get("city"), None);
    assert_eq!(rows[1].get("city"), Some("Lima"));
}

#[test]
fn test_invalid_utf8_is_malformed() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("employees.csv");
    let mut file = File::create(&file_path).unwrap();
    file.write_all(b"employee_id,name\n1,\xff\xfe\n").unwrap();

    assert!(load_employees(&file_path, &ReaderConfig::default()).is_empty());
    assert!(matches!(
        try_load_employees(&file_path, &ReaderConfig::default()),
        Err(PipelineError::MalformedSource { .. })
    ));
}
