mod configuration;

pub use configuration::{Category, Configuration, PriceRange, QuantityRange, SalesPeriod};
