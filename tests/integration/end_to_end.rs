// tests/integration/end_to_end.rs
use std::collections::HashSet;

use sales_summary::{DEFAULT_DELIMITER, SalesAggregator};

#[path = "../common/mod.rs"]
mod common;
use common::SalesFixture;

fn mock_aggregator(fixture: &SalesFixture) -> SalesAggregator {
    sales_summary::open(fixture.mock(), DEFAULT_DELIMITER)
}

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 0.005, "expected {expected:.2}, got {actual:.2}");
}

#[test]
fn totals_by_region_matches_mock() {
    let fixture = SalesFixture::new();
    let totals = mock_aggregator(&fixture).totals_by_region();

    let expected: HashSet<_> = ["PICHINCHA", "GUAYAS", "AZUAY", "IMBABURA"].into_iter().collect();
    assert_eq!(totals.keys().collect::<HashSet<_>>(), expected);
    for (region, total) in totals.iter() {
        assert!(*total >= 0.0, "{region} has a negative total");
    }
    assert_close(totals.get("IMBABURA").copied().unwrap_or(-1.0), 0.0);
}

#[test]
fn total_for_three_regions() {
    let fixture = SalesFixture::new();
    let aggregator = mock_aggregator(&fixture);

    assert_close(aggregator.total_for_region("PICHINCHA"), 1500.0);
    assert_close(aggregator.total_for_region("GUAYAS"), 2100.0);
    assert_close(aggregator.total_for_region("AZUAY"), 3000.0);
}

#[test]
fn total_for_unknown_region_is_exactly_zero() {
    let fixture = SalesFixture::new();
    assert_eq!(mock_aggregator(&fixture).total_for_region("NARNIA_NO_EXISTE"), 0.0);
}

#[test]
fn exports_by_month_matches_mock() {
    let fixture = SalesFixture::new();
    let exports = mock_aggregator(&fixture).exports_by_month();

    assert_close(exports.get("01").copied().unwrap_or_default(), 700.0);
    assert_close(exports.get("02").copied().unwrap_or_default(), 1000.0);
}

#[test]
fn region_with_max_imports_matches_mock() {
    let fixture = SalesFixture::new();
    let best = mock_aggregator(&fixture).region_with_max_imports();

    assert_eq!(best.region.as_deref(), Some("GUAYAS"));
    assert_close(best.total, 1300.0);
    assert!(best.total > 0.0);
}

#[test]
fn records_keep_file_order_and_passthrough_columns() {
    let fixture = SalesFixture::new();
    let path = fixture.write(
        "extra.csv",
        &["PROVINCIA;TOTAL_VENTAS;CANTON;MES", "azuay;1,5;CUENCA;07", "loja;2;;08"],
    );
    let aggregator = sales_summary::open(path, b';');

    let regions: Vec<_> = aggregator.records().iter().map(|r| r.region().as_str()).collect();
    assert_eq!(regions, ["AZUAY", "LOJA"]);
    assert_eq!(aggregator.records()[0].extra("CANTON"), Some("CUENCA"));
    assert_eq!(aggregator.records()[1].extra("CANTON"), Some(""));
    assert_close(aggregator.total_for_region("azuay"), 1.5);
}

#[test]
fn zero_rate_percentage_over_file() {
    let fixture = SalesFixture::new();
    let path = fixture.write(
        "tarifa0.csv",
        &[
            "PROVINCIA|TOTAL_VENTAS|VENTAS_NETAS_TARIFA_0",
            "NAPO|400|100",
            "NAPO|600|150",
            "CARCHI|0|50",
            "|100|100",
        ],
    );
    let pct = sales_summary::open(path, b'|').zero_rate_percentage_by_region();

    assert_close(pct.get("NAPO").copied().unwrap_or_default(), 25.0);
    assert_eq!(pct.get("CARCHI"), Some(&0.0));
    // blank region rows do not form a group here
    assert!(!pct.contains_key(""));
}

#[test]
fn missing_region_column_groups_under_unknown() {
    let fixture = SalesFixture::new();
    let path = fixture.write("sin_provincia.csv", &["TOTAL_VENTAS|IMPORTACIONES", "10|5", "20|7"]);
    let aggregator = sales_summary::open(path, b'|');

    let totals = aggregator.totals_by_region();
    assert_eq!(totals.len(), 1);
    assert_close(totals.get("UNKNOWN").copied().unwrap_or_default(), 30.0);
    assert_eq!(aggregator.region_with_max_imports().region.as_deref(), Some("UNKNOWN"));
}
