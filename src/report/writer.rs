use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::models::Transaction;
use crate::types::Monetary;

const SEPARATOR_WIDTH: usize = 52;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes every transaction to `path`, replacing any existing file.
///
/// Returns how many transactions were written.
pub fn write_report_file<P: AsRef<Path>>(
    path: P,
    transactions: &[Transaction],
) -> std::io::Result<usize> {
    let mut output = BufWriter::new(File::create(path)?);

    write_transactions(&mut output, transactions)?;
    output.flush()?;

    Ok(transactions.len())
}

pub fn write_transactions<W: Write>(
    output: &mut W,
    transactions: &[Transaction],
) -> std::io::Result<()> {
    for transaction in transactions {
        write_transaction(output, transaction)?;
    }

    Ok(())
}

fn write_transaction<W: Write>(output: &mut W, transaction: &Transaction) -> std::io::Result<()> {
    writeln!(output, "Transaction Number: {}", transaction.sequence_number)?;
    writeln!(output, "Transaction ID: {}", transaction.transaction_id)?;
    writeln!(output, "Customer ID: {}", transaction.customer_id)?;
    writeln!(output, "Date: {}", transaction.timestamp.format(TIMESTAMP_FORMAT))?;
    writeln!(output, "Total Amount: {}", Monetary::new(transaction.total_amount))?;
    writeln!(output, "Items Purchased (Unique Products): {}", transaction.unique_items())?;
    writeln!(output, "Total Quantity of All Items in Cart: {}", transaction.total_quantity())?;

    for item in &transaction.items {
        writeln!(
            output,
            "  Product ID: {}, Quantity: {}, Price: {}",
            item.product_id,
            item.quantity,
            Monetary::new(item.unit_price),
        )?;
    }

    writeln!(output, "{}", "-".repeat(SEPARATOR_WIDTH))?;

    Ok(())
}
