//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::path::{Path, PathBuf};

use pennywise_core::test_utils::{date, limits, sample_receipt, sample_transactions};
use pennywise_core::{snapshot, AmountRange, DateRange, Granularity, Query, Settings};

use crate::cli::FilterArgs;
use crate::commands::{self, format_amount, parse_amount, progress_bar, truncate};

fn write_snapshot(dir: &Path) -> PathBuf {
    let path = dir.join("transactions.json");
    snapshot::save(&path, &sample_transactions()).unwrap();
    path
}

fn ids(txs: &[pennywise_core::Transaction]) -> Vec<&str> {
    txs.iter().map(|t| t.id.as_str()).collect()
}

// ========== Helper Tests ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("Groceries", 20), "Groceries");
    assert_eq!(truncate("Weekly groceries run", 10), "Weekly ...");
    assert_eq!(truncate("Café crème au lait", 8), "Café ...");
}

#[test]
fn test_parse_amount() {
    assert_eq!(parse_amount("12.50").unwrap(), 1250);
    assert_eq!(parse_amount("12").unwrap(), 1200);
    assert_eq!(parse_amount("0.5").unwrap(), 50);
    assert_eq!(parse_amount(" 7.05 ").unwrap(), 705);
    assert_eq!(parse_amount("-3.25").unwrap(), -325);
}

#[test]
fn test_parse_amount_rejects_garbage() {
    for bad in ["", ".", "-", "abc", "1.234", "1,50", "$5", "1.2.3", ".50"] {
        assert!(parse_amount(bad).is_err(), "expected error for {:?}", bad);
    }
}

#[test]
fn test_format_amount() {
    assert_eq!(format_amount(1250), "12.50");
    assert_eq!(format_amount(5), "0.05");
    assert_eq!(format_amount(0), "0.00");
    assert_eq!(format_amount(-325), "-3.25");
}

#[test]
fn test_progress_bar() {
    assert_eq!(progress_bar(50.0, 10), "█████░░░░░");
    assert_eq!(progress_bar(0.0, 4), "░░░░");
    assert_eq!(progress_bar(100.0, 4), "████");
    // Out-of-range input is clamped
    assert_eq!(progress_bar(250.0, 4), "████");
    assert_eq!(progress_bar(-10.0, 4), "░░░░");
}

#[test]
fn test_resolve_data_path() {
    let mut settings = Settings::default();
    assert_eq!(
        commands::resolve_data_path(None, &settings),
        PathBuf::from("transactions.json")
    );

    settings.data_file = Some(PathBuf::from("/srv/family.json"));
    assert_eq!(
        commands::resolve_data_path(None, &settings),
        PathBuf::from("/srv/family.json")
    );
    assert_eq!(
        commands::resolve_data_path(Some(Path::new("other.json")), &settings),
        PathBuf::from("other.json")
    );
}

#[test]
fn test_load_transactions_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let txs = commands::load_transactions(&dir.path().join("nope.json")).unwrap();
    assert!(txs.is_empty());
}

// ========== Query Building Tests ==========

#[test]
fn test_build_query_no_flags() {
    let query = commands::build_query(&FilterArgs::default(), date(2024, 3, 15)).unwrap();
    assert!(query.is_empty());
}

#[test]
fn test_build_query_period() {
    let filters = FilterArgs {
        period: Some("this-month".to_string()),
        ..Default::default()
    };
    let query = commands::build_query(&filters, date(2024, 3, 15)).unwrap();
    assert_eq!(
        query.date_range,
        Some(DateRange::new(date(2024, 3, 1), date(2024, 3, 15)))
    );
}

#[test]
fn test_build_query_explicit_dates_override_period() {
    let filters = FilterArgs {
        period: Some("this-month".to_string()),
        from: Some("2024-02-20".to_string()),
        ..Default::default()
    };
    let query = commands::build_query(&filters, date(2024, 3, 15)).unwrap();
    assert_eq!(
        query.date_range,
        Some(DateRange::new(date(2024, 2, 20), date(2024, 3, 15)))
    );

    let filters = FilterArgs {
        to: Some("2024-01-31".to_string()),
        ..Default::default()
    };
    let query = commands::build_query(&filters, date(2024, 3, 15)).unwrap();
    assert_eq!(query.date_range, Some(DateRange::at_most(date(2024, 1, 31))));
}

#[test]
fn test_build_query_amounts_and_text() {
    let filters = FilterArgs {
        text: Some("mart".to_string()),
        category: Some("Food".to_string()),
        min: Some("10".to_string()),
        max: Some("50.5".to_string()),
        ..Default::default()
    };
    let query = commands::build_query(&filters, date(2024, 3, 15)).unwrap();
    assert_eq!(query.text, "mart");
    assert_eq!(query.category.as_deref(), Some("Food"));
    assert_eq!(query.amount_range, Some(AmountRange::new(1000, 5050)));
    assert_eq!(query.date_range, None);
}

#[test]
fn test_build_query_rejects_bad_input() {
    let today = date(2024, 3, 15);
    let bad_period = FilterArgs {
        period: Some("fortnight".to_string()),
        ..Default::default()
    };
    assert!(commands::build_query(&bad_period, today).is_err());

    let bad_date = FilterArgs {
        from: Some("03/01/2024".to_string()),
        ..Default::default()
    };
    assert!(commands::build_query(&bad_date, today).is_err());

    let bad_amount = FilterArgs {
        min: Some("ten".to_string()),
        ..Default::default()
    };
    assert!(commands::build_query(&bad_amount, today).is_err());
}

#[test]
fn test_build_query_filters_snapshot() {
    let txs = sample_transactions();
    let filters = FilterArgs {
        category: Some("Food".to_string()),
        ..Default::default()
    };
    let query = commands::build_query(&filters, date(2024, 3, 15)).unwrap();
    let matched = pennywise_core::filter(&txs, &query);
    assert_eq!(ids(&matched), vec!["tx-1", "tx-4"]);

    let filters = FilterArgs {
        period: Some("last-month".to_string()),
        ..Default::default()
    };
    let query = commands::build_query(&filters, date(2024, 3, 15)).unwrap();
    let matched = pennywise_core::filter(&txs, &query);
    assert_eq!(ids(&matched), vec!["tx-4"]);
}

// ========== Report Command Tests ==========

#[test]
fn test_report_commands_run() {
    let txs = sample_transactions();
    let query = Query::new();
    let limits = limits(&[("Food", 10000), ("Transport", 5000), ("Health", 2000)]);

    assert!(commands::cmd_search(&txs, &query, false).is_ok());
    assert!(commands::cmd_search(&txs, &query, true).is_ok());
    assert!(commands::cmd_summary(&txs, &query, &limits, false).is_ok());
    assert!(commands::cmd_summary(&txs, &query, &limits, true).is_ok());
    assert!(commands::cmd_trends(&txs, &query, Granularity::Monthly).is_ok());
    assert!(commands::cmd_trends(&txs, &query, Granularity::Weekly).is_ok());
    assert!(commands::cmd_stores(&txs, &query, 3).is_ok());
    assert!(commands::cmd_categories(&Settings::default()).is_ok());
}

#[test]
fn test_report_commands_empty_input() {
    let query = Query::new().text("nothing matches this");
    let txs = sample_transactions();

    assert!(commands::cmd_search(&txs, &query, false).is_ok());
    assert!(commands::cmd_summary(&txs, &query, &limits(&[]), false).is_ok());
    assert!(commands::cmd_trends(&[], &query, Granularity::Monthly).is_ok());
    assert!(commands::cmd_stores(&[], &query, 10).is_ok());
}

// ========== Export Tests ==========

#[test]
fn test_cmd_export() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.csv");
    let txs = sample_transactions();

    let count = commands::cmd_export(&txs, &Query::new(), &output).unwrap();
    assert_eq!(count, 5);

    let content = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "id,date,description,category,store,amount,items");
    assert!(lines[1].starts_with("tx-1,2024-01-05,"));
    assert!(lines[1].contains("Fresh Mart,64.80,Milk 2%; Bread"));
}

#[test]
fn test_cmd_export_filtered() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("transport.csv");
    let query = Query::new().category(Some("Transport"));

    let count = commands::cmd_export(&sample_transactions(), &query, &output).unwrap();
    assert_eq!(count, 2);

    let mut rdr = csv::Reader::from_path(&output).unwrap();
    let ids: Vec<String> = rdr
        .records()
        .map(|r| r.unwrap()[0].to_string())
        .collect();
    assert_eq!(ids, vec!["tx-2", "tx-5"]);
}

// ========== Receipt Tests ==========

fn write_receipt(dir: &Path) -> PathBuf {
    let path = dir.join("receipt.json");
    std::fs::write(&path, serde_json::to_string(&sample_receipt()).unwrap()).unwrap();
    path
}

#[test]
fn test_cmd_receipt_adds_transaction() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("transactions.json");
    let receipt = write_receipt(dir.path());
    let settings = Settings::default();

    let tx = commands::cmd_receipt(&data, &receipt, "Food", "r-1", &settings, date(2024, 6, 1))
        .unwrap();
    assert_eq!(tx.amount, 1299);
    assert_eq!(tx.store_name.as_deref(), Some("Fresh Mart"));
    assert_eq!(tx.date, date(2024, 5, 30));
    assert_eq!(tx.items.len(), 2);

    let stored = snapshot::load(&data).unwrap();
    assert_eq!(stored, vec![tx]);
}

#[test]
fn test_cmd_receipt_same_id_replaces() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_snapshot(dir.path());
    let receipt = write_receipt(dir.path());
    let settings = Settings::default();
    let today = date(2024, 6, 1);

    commands::cmd_receipt(&data, &receipt, "Food", "r-1", &settings, today).unwrap();
    commands::cmd_receipt(&data, &receipt, "Shopping", "r-1", &settings, today).unwrap();

    let stored = snapshot::load(&data).unwrap();
    assert_eq!(stored.len(), 6);
    assert_eq!(stored[5].id, "r-1");
    assert_eq!(stored[5].category, "Shopping");
}

#[test]
fn test_cmd_receipt_unknown_category() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("transactions.json");
    let receipt = write_receipt(dir.path());

    let err = commands::cmd_receipt(
        &data,
        &receipt,
        "Yachts",
        "r-1",
        &Settings::default(),
        date(2024, 6, 1),
    )
    .unwrap_err();
    assert!(err.to_string().contains("Unknown category"));
    assert!(!data.exists());
}

#[test]
fn test_cmd_receipt_invalid_json() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("transactions.json");
    let receipt = dir.path().join("receipt.json");
    std::fs::write(&receipt, "not json").unwrap();

    let result = commands::cmd_receipt(
        &data,
        &receipt,
        "Food",
        "r-1",
        &Settings::default(),
        date(2024, 6, 1),
    );
    assert!(result.is_err());
}

// ========== Remove Tests ==========

#[test]
fn test_cmd_remove() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_snapshot(dir.path());

    commands::cmd_remove(&data, "tx-2").unwrap();

    let stored = snapshot::load(&data).unwrap();
    assert_eq!(ids(&stored), vec!["tx-1", "tx-3", "tx-4", "tx-5"]);
}

#[test]
fn test_cmd_remove_missing_id() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_snapshot(dir.path());

    assert!(commands::cmd_remove(&data, "tx-99").is_err());
    assert_eq!(snapshot::load(&data).unwrap().len(), 5);
}

// ========== Argument Tests ==========

#[test]
fn test_period_help_describes_date_merge() {
    use clap::CommandFactory;

    let cmd = crate::cli::Cli::command();
    let summary = cmd.find_subcommand("summary").unwrap();
    let period = summary
        .get_arguments()
        .find(|a| a.get_id() == "period")
        .unwrap();
    let help = period.get_help().unwrap().to_string();
    assert!(help.contains("--from/--to replace its start/end"));
    assert!(!help.contains("ignored"));
}
