use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::types::{CustomerId, ProductId, SequenceNumber};

const AMOUNT_DECIMAL_PLACES: u32 = 2;

/// One line of a transaction.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Item {
    pub product_id: ProductId,
    pub quantity: u32,
    /// Price of a single unit, rounded to cents.
    pub unit_price: Decimal,
}

impl Item {
    pub fn extended_price(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// A single synthetic purchase event.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Transaction {
    /// 1-based position in the generation loop. Discarded transactions leave gaps.
    pub sequence_number: SequenceNumber,
    pub transaction_id: Uuid,
    pub customer_id: CustomerId,
    pub timestamp: NaiveDateTime,
    /// Sum of the extended prices of all items, rounded to cents.
    pub total_amount: Decimal,
    pub items: Vec<Item>,
}

impl Transaction {
    pub fn new(
        sequence_number: SequenceNumber,
        transaction_id: Uuid,
        customer_id: CustomerId,
        timestamp: NaiveDateTime,
        items: Vec<Item>,
    ) -> Self {
        let total_amount = items
            .iter()
            .map(Item::extended_price)
            .sum::<Decimal>()
            .round_dp(AMOUNT_DECIMAL_PLACES);

        Self {
            sequence_number,
            transaction_id,
            customer_id,
            timestamp,
            total_amount,
            items,
        }
    }

    /// Number of lines in the cart. Repeated products count once per line.
    pub fn unique_items(&self) -> usize {
        self.items.len()
    }

    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}
