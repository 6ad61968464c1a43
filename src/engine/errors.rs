use thiserror::Error;

use crate::models::Product;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Customer pool is empty")]
    EmptyCustomerPool,
    #[error("Maximum items per transaction must be at least 1")]
    InvalidItemLimit,
    #[error("Category weights must sum to a positive value")]
    InvalidWeights,
    #[error("Sales period [{year}-{month:02}] is not a valid calendar month")]
    InvalidPeriod {
        year: i32,
        month: u32,
    },
    #[error("Quantity range [{min}..={max}] is inverted for product [{product_id}]")]
    InvalidQuantityRange {
        product_id: String,
        min: u32,
        max: u32,
    },
    #[error("Price range [{min}..={max}] is invalid for product [{product_id}]")]
    InvalidPriceRange {
        product_id: String,
        min: String,
        max: String,
    },
}

impl GeneratorError {
    pub fn invalid_quantity_range(product: &Product) -> Self {
        Self::InvalidQuantityRange {
            product_id: product.product_id.clone(),
            min: product.quantity_range.min,
            max: product.quantity_range.max,
        }
    }

    pub fn invalid_price_range(product: &Product) -> Self {
        Self::InvalidPriceRange {
            product_id: product.product_id.clone(),
            min: product.price_range.min.to_string(),
            max: product.price_range.max.to_string(),
        }
    }
}
