use rust_decimal::Decimal;
use std::fmt;
use std::fmt::{Display, Formatter};

const DECIMAL_PLACES: u32 = 2;
const GROUP_SEPARATOR: char = ',';

/// A currency amount rendered with a `$` sign and exactly two decimal places.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub struct Monetary(Decimal);

impl Monetary {
    pub fn new(amount: Decimal) -> Self {
        Monetary(amount.round_dp(DECIMAL_PLACES))
    }

    /// Renders the amount with thousands separators, e.g. `$1,234,567.80`.
    pub fn grouped(&self) -> String {
        let plain = format!("{:.width$}", self.0.abs(), width = DECIMAL_PLACES as usize);
        let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), ""));
        let sign = if self.0.is_sign_negative() && !self.0.is_zero() { "-" } else { "" };

        format!("{}${}.{}", sign, group(integer), fraction)
    }
}

impl Display for Monetary {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let sign = if self.0.is_sign_negative() && !self.0.is_zero() { "-" } else { "" };
        write!(formatter, "{}${:.width$}", sign, self.0.abs(), width = DECIMAL_PLACES as usize)
    }
}

/// Formats an integer count with thousands separators, e.g. `50,000`.
pub fn group_digits(value: u64) -> String {
    group(&value.to_string())
}

fn group(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }

    grouped
}
