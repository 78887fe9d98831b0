//! Binary-level CLI tests

use assert_cmd::Command;
use predicates::prelude::*;
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn sheetcast() -> Command {
    Command::cargo_bin("sheetcast").unwrap()
}

fn write_orders_config(dir: &Path, range: &str) -> PathBuf {
    let path = dir.join("config.xlsx");
    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();
    ws.set_name("Config").unwrap();
    ws.write_string(0, 1, "Sheet Name").unwrap();
    ws.write_string(1, 1, "Orders").unwrap();
    ws.write_string(1, 2, "orders.csv").unwrap();
    ws.write_string(1, 3, "false").unwrap();
    ws.write_string(1, 4, "false").unwrap();
    ws.write_string(1, 5, range).unwrap();
    ws.write_string(1, 7, "data").unwrap();
    workbook.save(&path).unwrap();
    path
}

fn write_orders_workbook(dir: &Path) -> PathBuf {
    let path = dir.join("data.xlsx");
    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();
    ws.set_name("Orders").unwrap();
    ws.write_string(0, 0, "Key").unwrap();
    ws.write_string(0, 1, "Name").unwrap();
    ws.write_string(1, 0, "K1").unwrap();
    ws.write_string(1, 1, "Widget").unwrap();
    workbook.save(&path).unwrap();
    path
}

#[test]
fn test_help_lists_commands() {
    sheetcast()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("sheets"));
}

#[test]
fn test_convert_end_to_end() {
    let dir = TempDir::new().unwrap();
    let config = write_orders_config(dir.path(), "NA");
    let workbook = write_orders_workbook(dir.path());
    let out = dir.path().join("out");

    sheetcast()
        .arg("convert")
        .arg(&config)
        .arg(&workbook)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Conversion completed successfully"));

    assert!(out.join("data/orders.csv").exists());
}

#[test]
fn test_convert_missing_config_fails() {
    sheetcast()
        .args(["convert", "missing.xlsx", "also-missing.xlsx"])
        .assert()
        .failure();
}

#[test]
fn test_convert_missing_sheet_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.xlsx");
    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();
    ws.set_name("Config").unwrap();
    ws.write_string(0, 1, "Sheet Name").unwrap();
    ws.write_string(1, 1, "Ghost").unwrap();
    ws.write_string(1, 2, "ghost.csv").unwrap();
    workbook.save(&config).unwrap();

    let data = write_orders_workbook(dir.path());
    let out = dir.path().join("out");

    sheetcast()
        .arg("convert")
        .arg(&config)
        .arg(&data)
        .arg("-o")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Ghost"));
}

#[test]
fn test_check_flags_invalid_range_token() {
    let dir = TempDir::new().unwrap();
    let config = write_orders_config(dir.path(), "2-4,potato");

    sheetcast()
        .arg("check")
        .arg(&config)
        .assert()
        .failure()
        .stdout(predicate::str::contains("invalid range token 'potato'"));
}

#[test]
fn test_check_verifies_sheets_against_workbook() {
    let dir = TempDir::new().unwrap();
    let config = write_orders_config(dir.path(), "NA");
    let workbook = write_orders_workbook(dir.path());

    sheetcast()
        .arg("check")
        .arg(&config)
        .arg("--workbook")
        .arg(&workbook)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration looks good"));
}

#[test]
fn test_sheets_lists_names_and_sizes() {
    let dir = TempDir::new().unwrap();
    let workbook = write_orders_workbook(dir.path());

    sheetcast()
        .arg("sheets")
        .arg(&workbook)
        .assert()
        .success()
        .stdout(predicate::str::contains("Orders"))
        .stdout(predicate::str::contains("2 rows"));
}
