use crate::config::{Category, PriceRange, QuantityRange};
use crate::types::ProductId;

const SEQUENCE_WIDTH: usize = 4;

/// A single catalog entry.
///
/// The price and quantity profile is copied from the owning category when the
/// product is created so the catalog never needs to consult the configuration again.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Product {
    /// Category prefix followed by a zero-padded sequence number, e.g. `GRC0042`.
    pub product_id: ProductId,
    /// Name of the owning category.
    pub category: String,
    pub price_range: PriceRange,
    pub quantity_range: QuantityRange,
}

impl Product {
    pub fn new(category: &Category, sequence_number: u32) -> Self {
        Self {
            product_id: product_id(&category.prefix, sequence_number),
            category: category.name.clone(),
            price_range: category.price_range,
            quantity_range: category.quantity_range,
        }
    }
}

pub(crate) fn product_id(prefix: &str, sequence_number: u32) -> ProductId {
    format!("{}{:0width$}", prefix, sequence_number, width = SEQUENCE_WIDTH)
}
