use super::id::synthesize_transaction_id;
use super::{read_source, CsvParser, IngestError, RawRow, RejectReason, TransactionValidator};

use std::collections::HashSet;
use std::io::Write;

use anyhow::{anyhow, Result};
use tempfile::{Builder, NamedTempFile};

use crate::models::ValidationError;
use crate::types::Channel;

const HEADER: &str = "customer_id,transaction_id,transaction_amount,kyc_verified,account_age_days,channel_encoded,transaction_datetime";

fn create_csv(rows: &[&str]) -> String {
    let mut content = String::from(HEADER);

    for row in rows {
        content.push('\n');
        content.push_str(row);
    }

    content
}

fn create_row() -> RawRow {
    RawRow::new()
        .with("customer_id", "CUST001")
        .with("transaction_id", "TXN001")
        .with("transaction_amount", "1500.00")
        .with("kyc_verified", "1")
        .with("account_age_days", "365")
        .with("channel_encoded", "0")
        .with("transaction_datetime", "2024-01-15 14:30:00")
}

#[test]
fn test_parser_yields_one_transaction_per_well_formed_row() -> Result<()> {
    let content = create_csv(&[
        "CUST001,TXN001,1500.00,1,365,0,2024-01-15 14:30:00",
        "CUST002,TXN002,25000.00,0,15,1,2024-01-15 23:45:00",
        "CUST003,TXN003,500.00,1,730,2,2024-01-16 10:15:00"
    ]);

    let batch = CsvParser::new().parse(&content)?;

    assert_eq!(batch.transactions.len(), 3);
    assert!(batch.rejected.is_empty());
    assert_eq!(batch.transactions[1].transaction_id, "TXN002");
    assert_eq!(batch.transactions[1].transaction_amount, 25000.0);
    assert_eq!(batch.transactions[1].channel, Channel::Atm);
    assert_eq!(batch.transactions[2].account_age_days, 730);

    Ok(())
}

#[test]
fn test_parser_accepts_columns_in_any_order_and_ignores_extras() -> Result<()> {
    let content = "channel_encoded,notes,transaction_datetime,account_age_days,kyc_verified,transaction_amount,customer_id\n\
                   3,vip,2024-01-16 02:30:00,5,0,125000,CUST001";

    let batch = CsvParser::new().parse(content)?;
    let transaction = &batch.transactions[0];

    assert_eq!(transaction.customer_id, "CUST001");
    assert_eq!(transaction.channel, Channel::Mobile);
    assert_eq!(transaction.kyc_verified, 0);
    assert!(transaction.transaction_id.starts_with("TXN"));

    Ok(())
}

#[test]
fn test_parser_drops_row_with_missing_value_without_affecting_others() -> Result<()> {
    let content = create_csv(&[
        "CUST001,TXN001,1500.00,1,365,0,2024-01-15 14:30:00",
        "CUST002,TXN002,250.00,,15,1,2024-01-15 23:45:00",
        "CUST003,TXN003,500.00,1,730,2,2024-01-16 10:15:00"
    ]);

    let batch = CsvParser::new().parse(&content)?;

    assert_eq!(batch.transactions.len(), 2);
    assert_eq!(batch.rejected.len(), 1);
    assert_eq!(batch.rejected[0].row, 2);
    assert_eq!(batch.rejected[0].reason, RejectReason::Invalid(ValidationError::missing(2, "kyc_verified")));

    Ok(())
}

#[test]
fn test_parser_skips_rows_with_column_count_mismatch() -> Result<()> {
    let content = create_csv(&[
        "CUST001,TXN001,1500.00,1,365,0",
        "CUST002,TXN002,250.00,1,15,1,2024-01-15 23:45:00"
    ]);

    let batch = CsvParser::new().parse(&content)?;

    assert_eq!(batch.transactions.len(), 1);
    assert_eq!(batch.rejected[0].reason, RejectReason::ColumnCountMismatch { expected: 7, found: 6 });

    Ok(())
}

#[test]
fn test_parser_reports_missing_columns_before_reading_rows() {
    let content = "customer_id,transaction_amount,kyc_verified,account_age_days,transaction_datetime\n\
                   this,row,would,never,validate";

    let result = CsvParser::new().parse(content);

    match result {
        Err(IngestError::MissingColumns { columns }) => assert_eq!(columns, vec!["channel_encoded".to_string()]),
        other => panic!("expected missing columns, got {other:?}")
    }
}

#[test]
fn test_parser_rejects_empty_and_header_only_input() {
    assert!(matches!(CsvParser::new().parse(""), Err(IngestError::EmptyInput)));
    assert!(matches!(CsvParser::new().parse("\n\n"), Err(IngestError::EmptyInput)));
    assert!(matches!(CsvParser::new().parse(HEADER), Err(IngestError::EmptyInput)));
    assert!(matches!(CsvParser::new().parse(&format!("{HEADER}\n\n  \n")), Err(IngestError::EmptyInput)));
}

#[test]
fn test_parser_fails_when_no_row_survives_validation() {
    let content = create_csv(&[
        "CUST001,TXN001,abc,1,365,0,2024-01-15 14:30:00",
        "CUST002,TXN002,100,2,15,1,2024-01-15 23:45:00"
    ]);

    let result = CsvParser::new().parse(&content);

    assert!(matches!(result, Err(IngestError::NoValidRows { rejected: 2 })));
}

#[test]
fn test_parser_ignores_blank_lines_between_rows() -> Result<()> {
    let content = create_csv(&[
        "CUST001,TXN001,1500.00,1,365,0,2024-01-15 14:30:00",
        "",
        "CUST002,TXN002,250.00,1,15,1,2024-01-15 23:45:00",
        ""
    ]);

    let batch = CsvParser::new().parse(&content)?;

    assert_eq!(batch.transactions.len(), 2);
    assert!(batch.rejected.is_empty());

    Ok(())
}

#[test]
fn test_parser_rejects_delimiter_only_lines() -> Result<()> {
    let batch = CsvParser::new().parse(&create_csv(&[
        "CUST001,TXN001,1500.00,1,365,0,2024-01-15 14:30:00",
        ",,,,,,"
    ]))?;

    assert_eq!(batch.transactions.len(), 1);
    assert_eq!(batch.rejected.len(), 1);
    assert_eq!(batch.rejected[0].row, 2);
    assert_eq!(batch.rejected[0].reason, RejectReason::Invalid(ValidationError::missing(2, "customer_id")));

    let only_delimiters = CsvParser::new().parse(&create_csv(&[",,,,,,"]));

    assert!(matches!(only_delimiters, Err(IngestError::NoValidRows { rejected: 1 })));

    Ok(())
}

#[test]
fn test_parser_synthesizes_unique_ids_for_identical_rows() -> Result<()> {
    let content = create_csv(&[
        "CUST001,,100.00,1,365,0,2024-01-15 14:30:00",
        "CUST001,,100.00,1,365,0,2024-01-15 14:30:00",
        "CUST001,,100.00,1,365,0,2024-01-15 14:30:00"
    ]);

    let batch = CsvParser::new().parse(&content)?;
    let ids: HashSet<&str> = batch.transactions.iter().map(|transaction| transaction.transaction_id.as_str()).collect();

    assert_eq!(ids.len(), 3);

    Ok(())
}

#[test]
fn test_synthesized_id_has_expected_shape() -> Result<()> {
    let id = synthesize_transaction_id(7);
    let parts: Vec<&str> = id.split('_').collect();

    assert_eq!(parts.len(), 3);

    let millis = parts[0].strip_prefix("TXN").ok_or_else(|| anyhow!("missing TXN prefix in {id}"))?;
    let _: i64 = millis.parse()?;

    assert_eq!(parts[1], "7");
    assert_eq!(parts[2].len(), 5);
    assert!(parts[2].chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));

    Ok(())
}

#[test]
fn test_validator_accepts_boundary_values() -> Result<()> {
    let validator = TransactionValidator::new();
    let row = create_row()
        .with("kyc_verified", "0")
        .with("account_age_days", "0")
        .with("channel_encoded", "3")
        .with("transaction_amount", "-12.5");

    let transaction = validator.validate(&row, 1)?;

    assert_eq!(transaction.kyc_verified, 0);
    assert_eq!(transaction.account_age_days, 0);
    assert_eq!(transaction.channel, Channel::Mobile);
    assert_eq!(transaction.transaction_amount, -12.5);

    Ok(())
}

#[test]
fn test_validator_rejects_out_of_range_values() {
    let validator = TransactionValidator::new();

    let kyc = validator.validate(&create_row().with("kyc_verified", "2"), 1);
    let channel = validator.validate(&create_row().with("channel_encoded", "4"), 1);
    let age = validator.validate(&create_row().with("account_age_days", "-3"), 1);

    assert!(matches!(kyc, Err(ValidationError::OutOfRange { field: "kyc_verified", .. })));
    assert!(matches!(channel, Err(ValidationError::OutOfRange { field: "channel_encoded", .. })));
    assert!(matches!(age, Err(ValidationError::OutOfRange { field: "account_age_days", expected: "a non-negative integer", .. })));
}

#[test]
fn test_validator_reports_account_age_overflow_separately() {
    let validator = TransactionValidator::new();

    let largest = validator.validate(&create_row().with("account_age_days", "4294967295"), 1);
    let overflow = validator.validate(&create_row().with("account_age_days", "4294967296"), 1);

    assert!(matches!(largest, Ok(transaction) if transaction.account_age_days == u32::MAX));
    assert_eq!(overflow, Err(ValidationError::out_of_range(1, "account_age_days", "4294967296", "at most 4294967295")));
}

#[test]
fn test_validator_rejects_non_numeric_and_non_finite_values() {
    let validator = TransactionValidator::new();

    let amount = validator.validate(&create_row().with("transaction_amount", "12,5"), 4);
    let infinite = validator.validate(&create_row().with("transaction_amount", "inf"), 4);
    let not_a_number = validator.validate(&create_row().with("transaction_amount", "NaN"), 4);
    let fractional_kyc = validator.validate(&create_row().with("kyc_verified", "1.5"), 4);
    let named_channel = validator.validate(&create_row().with("channel_encoded", "Online"), 4);

    assert_eq!(amount, Err(ValidationError::invalid_number(4, "transaction_amount", "12,5")));
    assert_eq!(infinite, Err(ValidationError::non_finite(4, "transaction_amount", "inf")));
    assert_eq!(not_a_number, Err(ValidationError::non_finite(4, "transaction_amount", "NaN")));
    assert_eq!(fractional_kyc, Err(ValidationError::invalid_number(4, "kyc_verified", "1.5")));
    assert_eq!(named_channel, Err(ValidationError::invalid_number(4, "channel_encoded", "Online")));
}

#[test]
fn test_validator_requires_customer_and_datetime() {
    let validator = TransactionValidator::new();

    let customer = validator.validate(&create_row().with("customer_id", "  "), 1);
    let datetime = validator.validate(&create_row().with("transaction_datetime", ""), 1);

    assert_eq!(customer, Err(ValidationError::missing(1, "customer_id")));
    assert_eq!(datetime, Err(ValidationError::missing(1, "transaction_datetime")));
}

#[test]
fn test_read_source_loads_csv_file() -> Result<()> {
    let mut file = Builder::new().suffix(".csv").tempfile()?;
    write!(file, "{}", create_csv(&["CUST001,TXN001,1500.00,1,365,0,2024-01-15 14:30:00"]))?;

    let content = read_source(file.path(), 1024)?;

    assert!(content.starts_with("customer_id"));

    Ok(())
}

#[test]
fn test_read_source_enforces_size_limit() -> Result<()> {
    let mut file = Builder::new().suffix(".CSV").tempfile()?;
    write!(file, "{}", "x".repeat(64))?;

    let result = read_source(file.path(), 32);

    assert!(matches!(result, Err(IngestError::FileSizeExceeded { size: 64, limit: 32 })));

    Ok(())
}

#[test]
fn test_read_source_rejects_non_csv_files() -> Result<()> {
    let file = NamedTempFile::new()?;

    let result = read_source(file.path(), 1024);

    assert!(matches!(result, Err(IngestError::UnsupportedFile { .. })));

    Ok(())
}
