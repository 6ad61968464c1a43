use std::io::Write;

use rust_decimal::Decimal;

use crate::models::Transaction;
use crate::types::{group_digits, Monetary};

/// Aggregate figures over a finished set of transactions.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Metrics {
    pub transactions: u64,
    pub units_sold: u64,
    pub total_revenue: Decimal,
    /// Average order value, zero when there are no transactions.
    pub average_order_value: Decimal,
    /// Average selling price per unit, zero when nothing was sold.
    pub average_selling_price: Decimal,
}

impl Metrics {
    pub fn calculate(transactions: &[Transaction]) -> Self {
        let total_revenue: Decimal = transactions.iter().map(|t| t.total_amount).sum();
        let units_sold: u64 = transactions.iter().map(Transaction::total_quantity).sum();
        let count = transactions.len() as u64;

        Self {
            transactions: count,
            units_sold,
            total_revenue,
            average_order_value: average(total_revenue, count),
            average_selling_price: average(total_revenue, units_sold),
        }
    }

    pub fn write_summary<W: Write>(&self, output: &mut W) -> std::io::Result<()> {
        writeln!(output, "--- Aggregate Metrics ---")?;
        writeln!(output, "Total Number of Transactions: {}", group_digits(self.transactions))?;
        writeln!(output, "Total Number of Units Sold: {}", group_digits(self.units_sold))?;
        writeln!(output, "Total Revenue: {}", grouped(self.total_revenue))?;
        writeln!(output, "Average Order Value (AOV): {}", grouped(self.average_order_value))?;
        writeln!(output, "Average Selling Price (ASP): {}", grouped(self.average_selling_price))?;

        Ok(())
    }
}

fn grouped(amount: Decimal) -> String {
    Monetary::new(amount).grouped()
}

fn average(total: Decimal, count: u64) -> Decimal {
    if count == 0 {
        return Decimal::ZERO;
    }

    total / Decimal::from(count)
}
