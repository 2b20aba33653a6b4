use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::SalesFixture;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sales_summary"))
}

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sales_summary"))
        .stdout(predicate::str::contains("--delimiter"));
}

#[test]
fn json_report_for_mock_file() {
    let fixture = SalesFixture::new();
    let output = bin()
        .args(["--format", "json", "--region", "pichincha"])
        .arg(fixture.mock())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(json["records"], 6);
    assert_eq!(json["totals_by_region"]["GUAYAS"], 2100.0);
    assert_eq!(json["region_total"]["total"], 1500.0);
    assert_eq!(json["exports_by_month"]["01"], 700.0);
    assert_eq!(json["max_imports"]["region"], "GUAYAS");
}

#[test]
fn csv_report_selected_sections() {
    let fixture = SalesFixture::new();
    bin()
        .args(["--format", "csv", "--report", "exports"])
        .arg(fixture.mock())
        .assert()
        .success()
        .stdout(predicate::str::contains("month:exports,01,700.00"))
        .stdout(predicate::str::contains("region:total_sales").not());
}

#[test]
fn missing_file_is_not_fatal() {
    let fixture = SalesFixture::new();
    bin()
        .args(["--format", "json"])
        .arg(fixture.missing())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"records\": 0"))
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn region_report_without_region_fails() {
    let fixture = SalesFixture::new();
    bin().args(["--report", "region"]).arg(fixture.mock()).assert().code(2);
}

#[test]
fn rejects_multi_char_delimiter() {
    bin().args(["--delimiter", "||", "ventas.csv"]).assert().failure();
}
