//! End-to-end runs of the report against a temporary data file.

use std::fs;

use palletstore_cli::{AppConfig, run};

fn config_in(dir: &tempfile::TempDir) -> AppConfig {
    AppConfig {
        data_path: dir.path().join("Example.json"),
        ..AppConfig::default()
    }
}

fn run_to_string(config: &AppConfig) -> anyhow::Result<String> {
    let mut out = Vec::new();
    run(config, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn report_groups_by_day_then_lists_earliest() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);

    let report = run_to_string(&config).unwrap();
    let (groups, earliest) = report.split_once("==============================\n").unwrap();

    let headers: Vec<&str> = groups
        .lines()
        .filter(|l| l.starts_with("Group by expiration date"))
        .collect();
    assert_eq!(
        headers,
        vec![
            "Group by expiration date (2024-03-20):",
            "Group by expiration date (2024-04-10):",
            "Group by expiration date (never):",
        ]
    );

    let group_order: Vec<&str> = groups.lines().filter(|l| l.starts_with("Pallet ")).collect();
    assert_eq!(
        group_order,
        vec!["Pallet 1:", "Pallet 6:", "Pallet 2:", "Pallet 3:", "Pallet 5:", "Pallet 4:"]
    );

    let top: Vec<&str> = earliest.lines().filter(|l| l.starts_with("Pallet ")).collect();
    assert_eq!(top, vec!["Pallet 1:", "Pallet 6:", "Pallet 2:"]);
}

#[test]
fn run_writes_the_data_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);

    run_to_string(&config).unwrap();

    let text = fs::read_to_string(&config.data_path).unwrap();
    assert!(text.trim_start().starts_with('['));
    assert!(text.contains("\"productionDate\": \"2024-01-01\""));
}

#[test]
fn report_top_limits_final_section() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        report_top: 1,
        ..config_in(&dir)
    };

    let report = run_to_string(&config).unwrap();
    let (_, earliest) = report.split_once("==============================\n").unwrap();
    assert_eq!(earliest.lines().filter(|l| l.starts_with("Pallet ")).count(), 1);
}

#[test]
fn unwritable_path_fails_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        data_path: dir.path().join("missing").join("Example.json"),
        ..AppConfig::default()
    };

    let err = run_to_string(&config).unwrap_err();
    assert!(err.to_string().contains("failed to load pallets"));
}
