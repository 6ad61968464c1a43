use super::{group_digits, Monetary};
use anyhow::Result;
use rust_decimal::Decimal;
use std::str::FromStr;

#[test]
fn test_monetary_displays_two_decimal_places() -> Result<()> {
    let test_cases = vec![
        ("10", "$10.00"),
        ("10.5", "$10.50"),
        ("0", "$0.00"),
        ("1234567.891", "$1234567.89"),
        ("0.005", "$0.00"),
        ("-3.1", "-$3.10"),
    ];

    for (input, expected_output) in test_cases {
        assert_eq!(Monetary::new(Decimal::from_str(input)?).to_string(), expected_output);
    }

    Ok(())
}

#[test]
fn test_monetary_grouped_inserts_thousands_separators() -> Result<()> {
    let test_cases = vec![
        ("0", "$0.00"),
        ("999.99", "$999.99"),
        ("1000", "$1,000.00"),
        ("1234567.8", "$1,234,567.80"),
        ("-98765.4", "-$98,765.40"),
    ];

    for (input, expected_output) in test_cases {
        assert_eq!(Monetary::new(Decimal::from_str(input)?).grouped(), expected_output);
    }

    Ok(())
}

#[test]
fn test_group_digits_formats_counts() {
    assert_eq!(group_digits(0), "0");
    assert_eq!(group_digits(999), "999");
    assert_eq!(group_digits(1_000), "1,000");
    assert_eq!(group_digits(50_000), "50,000");
    assert_eq!(group_digits(1_234_567), "1,234,567");
}
