use super::writer::write_transactions;
use super::{write_report_file, Metrics};

use std::fs;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tempfile::{tempdir, NamedTempFile};
use uuid::Uuid;

use crate::config::Configuration;
use crate::engine::TransactionGenerator;
use crate::models::{Catalog, Item, Transaction};

fn create_transaction(sequence_number: u32, items: &[(&str, u32, &str)]) -> Result<Transaction> {
    let timestamp = NaiveDate::from_ymd_opt(2025, 7, 4)
        .and_then(|date| date.and_hms_opt(9, 5, 3))
        .ok_or_else(|| anyhow!("invalid timestamp"))?;

    let mut lines = Vec::new();

    for (product_id, quantity, unit_price) in items {
        lines.push(Item {
            product_id: product_id.to_string(),
            quantity: *quantity,
            unit_price: Decimal::from_str(unit_price)?,
        });
    }

    Ok(Transaction::new(
        sequence_number,
        Uuid::from_u128(sequence_number as u128),
        "00042".to_string(),
        timestamp,
        lines,
    ))
}

fn generate(seed: u64, count: u32) -> Result<Vec<Transaction>> {
    let config = Configuration::default();
    let catalog = Catalog::build(&config.categories);
    let mut generator =
        TransactionGenerator::new(&config.categories, &catalog, config.period, Some(seed))?;

    Ok(generator.generate(count, config.num_customers, config.max_items_per_transaction)?)
}

#[test]
fn test_transaction_block_layout() -> Result<()> {
    let transaction = create_transaction(3, &[("TST0001", 2, "10"), ("ABC0100", 1, "4.5")])?;
    let mut output = Vec::new();

    write_transactions(&mut output, &[transaction])?;

    let expected = "\
Transaction Number: 3
Transaction ID: 00000000-0000-0000-0000-000000000003
Customer ID: 00042
Date: 2025-07-04 09:05:03
Total Amount: $24.50
Items Purchased (Unique Products): 2
Total Quantity of All Items in Cart: 3
  Product ID: TST0001, Quantity: 2, Price: $10.00
  Product ID: ABC0100, Quantity: 1, Price: $4.50
----------------------------------------------------
";

    assert_eq!(String::from_utf8(output)?, expected);

    Ok(())
}

#[test]
fn test_file_amounts_are_not_grouped() -> Result<()> {
    let transaction = create_transaction(1, &[("ELC0001", 3, "650.00"), ("ELC0002", 2, "649.99")])?;
    let mut output = Vec::new();

    write_transactions(&mut output, &[transaction])?;

    let report = String::from_utf8(output)?;
    assert!(report.contains("Total Amount: $3249.98\n"));

    Ok(())
}

#[test]
fn test_report_file_is_overwritten_and_empty_for_no_transactions() -> Result<()> {
    let file = NamedTempFile::new()?;
    fs::write(file.path(), "stale content")?;

    assert_eq!(write_report_file(file.path(), &[])?, 0);
    assert!(fs::read_to_string(file.path())?.is_empty());

    Ok(())
}

#[test]
fn test_report_file_contains_one_block_per_transaction() -> Result<()> {
    let directory = tempdir()?;
    let path = directory.path().join("transactions.txt");
    let transactions = generate(8, 120)?;

    assert_eq!(write_report_file(&path, &transactions)?, 120);

    let report = fs::read_to_string(&path)?;
    let separator = "-".repeat(52);

    assert_eq!(report.lines().filter(|line| *line == separator).count(), 120);
    assert_eq!(report.lines().filter(|line| line.starts_with("Transaction Number: ")).count(), 120);

    Ok(())
}

#[test]
fn test_seeded_runs_produce_identical_report_files() -> Result<()> {
    let directory = tempdir()?;
    let first_path = directory.path().join("first.txt");
    let second_path = directory.path().join("second.txt");

    write_report_file(&first_path, &generate(1234, 300)?)?;
    write_report_file(&second_path, &generate(1234, 300)?)?;

    assert_eq!(fs::read(&first_path)?, fs::read(&second_path)?);

    Ok(())
}

#[test]
fn test_metrics_aggregate_revenue_and_units() -> Result<()> {
    let transactions = vec![
        create_transaction(1, &[("TST0001", 2, "10.00")])?,
        create_transaction(2, &[("TST0002", 1, "5.00"), ("TST0003", 1, "15.00")])?
    ];

    let metrics = Metrics::calculate(&transactions);

    assert_eq!(metrics.transactions, 2);
    assert_eq!(metrics.units_sold, 4);
    assert_eq!(metrics.total_revenue, Decimal::from_str("40.00")?);
    assert_eq!(metrics.average_order_value, Decimal::from(20));
    assert_eq!(metrics.average_selling_price, Decimal::from(10));

    Ok(())
}

#[test]
fn test_metrics_guard_against_division_by_zero() {
    let metrics = Metrics::calculate(&[]);

    assert_eq!(metrics.transactions, 0);
    assert_eq!(metrics.units_sold, 0);
    assert!(metrics.total_revenue.is_zero());
    assert!(metrics.average_order_value.is_zero());
    assert!(metrics.average_selling_price.is_zero());
}

#[test]
fn test_metrics_summary_uses_thousands_separators() -> Result<()> {
    let metrics = Metrics {
        transactions: 50_000,
        units_sold: 123_456,
        total_revenue: Decimal::from_str("7654321.5")?,
        average_order_value: Decimal::from_str("153.08643")?,
        average_selling_price: Decimal::from_str("62.0003")?,
    };
    let mut output = Vec::new();

    metrics.write_summary(&mut output)?;

    let expected = "\
--- Aggregate Metrics ---
Total Number of Transactions: 50,000
Total Number of Units Sold: 123,456
Total Revenue: $7,654,321.50
Average Order Value (AOV): $153.09
Average Selling Price (ASP): $62.00
";

    assert_eq!(String::from_utf8(output)?, expected);

    Ok(())
}

#[test]
fn test_empty_metrics_summary_reports_zeroes() -> Result<()> {
    let mut output = Vec::new();

    Metrics::calculate(&[]).write_summary(&mut output)?;

    let summary = String::from_utf8(output)?;
    assert!(summary.contains("Total Number of Transactions: 0\n"));
    assert!(summary.contains("Total Revenue: $0.00\n"));
    assert!(summary.contains("Average Order Value (AOV): $0.00\n"));
    assert!(summary.contains("Average Selling Price (ASP): $0.00\n"));

    Ok(())
}
