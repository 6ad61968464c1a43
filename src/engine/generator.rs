use chrono::{Datelike, NaiveDate, NaiveDateTime};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use tracing::{debug, info, trace};
use uuid::{Builder, Uuid};

use crate::config::{Category, SalesPeriod};
use crate::engine::{CumulativeWeights, GeneratorError};
use crate::models::{Catalog, Item, Product, Transaction};
use crate::types::CustomerId;

const PRICE_DECIMAL_PLACES: u32 = 2;
const CUSTOMER_ID_WIDTH: usize = 5;

/// Produces synthetic transactions from a catalog and a weighted category table.
///
/// Every random draw goes through a single `StdRng`, so a generator built with a
/// seed yields the same sequence of transactions, identifiers included.
pub struct TransactionGenerator<'a> {
    catalog: &'a Catalog,
    categories: &'a [Category],
    weights: CumulativeWeights,
    period: SalesPeriod,
    days_in_period: u32,
    rng: StdRng,
}

impl<'a> TransactionGenerator<'a> {
    pub fn new(
        categories: &'a [Category],
        catalog: &'a Catalog,
        period: SalesPeriod,
        seed: Option<u64>,
    ) -> Result<Self, GeneratorError> {
        let weights = CumulativeWeights::new(categories.iter().map(|c| c.weight))?;
        let days_in_period = days_in_month(period)?;

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            catalog,
            categories,
            weights,
            period,
            days_in_period,
            rng,
        })
    }

    /// Attempts `num_transactions` transactions, numbered from 1.
    ///
    /// A transaction whose draws produced no items is dropped and its number is not reused.
    pub fn generate(
        &mut self,
        num_transactions: u32,
        num_customers: u32,
        max_items: u32,
    ) -> Result<Vec<Transaction>, GeneratorError> {
        if num_customers == 0 && num_transactions > 0 {
            return Err(GeneratorError::EmptyCustomerPool);
        }

        if max_items == 0 && num_transactions > 0 {
            return Err(GeneratorError::InvalidItemLimit);
        }

        let mut transactions = Vec::with_capacity(num_transactions as usize);

        for sequence_number in 1..=num_transactions {
            let transaction_id = self.transaction_id();
            let customer_id = self.customer_id(num_customers);
            let timestamp = self.timestamp()?;
            let items = self.items(max_items)?;

            if items.is_empty() {
                debug!("Transaction [{sequence_number}] discarded with no line items");
                continue;
            }

            transactions.push(Transaction::new(
                sequence_number,
                transaction_id,
                customer_id,
                timestamp,
                items,
            ));
        }

        info!(
            "Generated {} of {} attempted transactions",
            transactions.len(),
            num_transactions
        );

        Ok(transactions)
    }

    fn transaction_id(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        Builder::from_random_bytes(bytes).into_uuid()
    }

    fn customer_id(&mut self, num_customers: u32) -> CustomerId {
        let customer = self.rng.gen_range(1..=num_customers);
        format!("{:0width$}", customer, width = CUSTOMER_ID_WIDTH)
    }

    fn timestamp(&mut self) -> Result<NaiveDateTime, GeneratorError> {
        let day = self.rng.gen_range(1..=self.days_in_period);
        let hour = self.rng.gen_range(0..=23);
        let minute = self.rng.gen_range(0..=59);
        let second = self.rng.gen_range(0..=59);

        NaiveDate::from_ymd_opt(self.period.year, self.period.month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, second))
            .ok_or(GeneratorError::InvalidPeriod {
                year: self.period.year,
                month: self.period.month,
            })
    }

    fn items(&mut self, max_items: u32) -> Result<Vec<Item>, GeneratorError> {
        let draws = self.rng.gen_range(1..=max_items);
        let mut items = Vec::with_capacity(draws as usize);

        for _ in 0..draws {
            let category = &self.categories[self.weights.sample(&mut self.rng)];

            let products = self.catalog.products_in(&category.name);

            let Some(product) = products.choose(&mut self.rng) else {
                continue;
            };

            trace!("Drew product [{}] from [{}]", product.product_id, product.category);

            items.push(Item {
                product_id: product.product_id.clone(),
                quantity: draw_quantity(&mut self.rng, product)?,
                unit_price: draw_unit_price(&mut self.rng, product)?,
            });
        }

        Ok(items)
    }
}

fn draw_quantity<R: Rng>(rng: &mut R, product: &Product) -> Result<u32, GeneratorError> {
    let range = product.quantity_range;

    if range.min > range.max {
        return Err(GeneratorError::invalid_quantity_range(product));
    }

    Ok(rng.gen_range(range.min..=range.max))
}

fn draw_unit_price<R: Rng>(rng: &mut R, product: &Product) -> Result<Decimal, GeneratorError> {
    let bounds = (product.price_range.min.to_f64(), product.price_range.max.to_f64());

    let (Some(min), Some(max)) = bounds else {
        return Err(GeneratorError::invalid_price_range(product));
    };

    if min > max {
        return Err(GeneratorError::invalid_price_range(product));
    }

    let price = Decimal::from_f64(rng.gen_range(min..=max))
        .ok_or_else(|| GeneratorError::invalid_price_range(product))?;

    Ok(price.round_dp(PRICE_DECIMAL_PLACES))
}

fn days_in_month(period: SalesPeriod) -> Result<u32, GeneratorError> {
    let invalid = || GeneratorError::InvalidPeriod {
        year: period.year,
        month: period.month,
    };

    let first = NaiveDate::from_ymd_opt(period.year, period.month, 1).ok_or_else(invalid)?;
    let (next_year, next_month) = match first.month() {
        12 => (first.year() + 1, 1),
        month => (first.year(), month + 1),
    };
    let next = NaiveDate::from_ymd_opt(next_year, next_month, 1).ok_or_else(invalid)?;

    Ok(next.signed_duration_since(first).num_days() as u32)
}
