// tests/integration/load_failures.rs
use sales_summary::DEFAULT_DELIMITER;

#[path = "../common/mod.rs"]
mod common;
use common::SalesFixture;

#[test]
fn missing_file_yields_empty_dataset_and_default_answers() {
    let fixture = SalesFixture::new();
    let aggregator = sales_summary::open(fixture.missing(), DEFAULT_DELIMITER);

    assert!(aggregator.is_empty());
    assert!(aggregator.totals_by_region().is_empty());
    assert_eq!(aggregator.total_for_region("PICHINCHA"), 0.0);
    assert!(aggregator.exports_by_month().is_empty());
    let best = aggregator.region_with_max_imports();
    assert_eq!((best.region, best.total), (None, 0.0));
    assert!(aggregator.zero_rate_percentage_by_region().is_empty());
}

#[test]
fn corrupt_file_yields_empty_dataset() {
    let fixture = SalesFixture::new();
    let path = fixture.write_bytes("corrupto.csv", b"PROVINCIA|TOTAL_VENTAS\nAZUAY|10\n\xff\xfe|20\n");

    // a single bad row discards the whole load
    assert!(sales_summary::open(path, DEFAULT_DELIMITER).is_empty());
}

/// A failed load and a header-only file look the same to callers.
#[test]
fn degraded_load_is_indistinguishable_from_no_rows() {
    let fixture = SalesFixture::new();
    let header_only = fixture.write("vacio.csv", &["PROVINCIA|TOTAL_VENTAS"]);
    let corrupt = fixture.write_bytes("roto.csv", b"PROVINCIA|TOTAL_VENTAS\n\xc3\x28|1\n");

    let from_header_only = sales_summary::open(header_only, DEFAULT_DELIMITER);
    let from_corrupt = sales_summary::open(corrupt, DEFAULT_DELIMITER);

    assert!(from_header_only.is_empty());
    assert!(from_corrupt.is_empty());
    assert_eq!(from_header_only.totals_by_region(), from_corrupt.totals_by_region());
}

#[test]
fn wrong_delimiter_degrades_to_unknown_region_not_failure() {
    let fixture = SalesFixture::new();
    let path = fixture.mock();
    let aggregator = sales_summary::open(path, b',');

    // the whole line is one column, so no designated column is found
    assert_eq!(aggregator.len(), 6);
    assert_eq!(aggregator.totals_by_region().keys().collect::<Vec<_>>(), ["UNKNOWN"]);
    assert_eq!(aggregator.total_for_region("UNKNOWN"), 0.0);
}
