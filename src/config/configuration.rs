use rust_decimal::Decimal;
use tracing::level_filters::LevelFilter;

/// Inclusive bounds for a unit price.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceRange {
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    #[cfg(test)]
    pub fn contains(&self, price: Decimal) -> bool {
        self.min <= price && price <= self.max
    }
}

/// Inclusive bounds for the quantity of a single line item.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct QuantityRange {
    pub min: u32,
    pub max: u32,
}

impl QuantityRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    #[cfg(test)]
    pub fn contains(&self, quantity: u32) -> bool {
        self.min <= quantity && quantity <= self.max
    }
}

/// A named group of products sharing a price/quantity profile and a relative selection weight.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Category {
    /// Unique name of the category.
    pub name: String,
    /// Three letter code every product identifier in the category starts with.
    pub prefix: String,
    /// Relative selection weight.
    pub weight: u32,
    pub price_range: PriceRange,
    pub quantity_range: QuantityRange,
}

impl Category {
    pub fn new(
        name: &str,
        prefix: &str,
        weight: u32,
        price_range: (i64, i64),
        quantity_range: (u32, u32),
    ) -> Self {
        Self {
            name: name.to_string(),
            prefix: prefix.to_string(),
            weight,
            price_range: PriceRange::new(
                Decimal::from(price_range.0),
                Decimal::from(price_range.1),
            ),
            quantity_range: QuantityRange::new(quantity_range.0, quantity_range.1),
        }
    }
}

/// The calendar month every transaction timestamp falls into.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SalesPeriod {
    pub year: i32,
    pub month: u32,
}

/// Every parameter of a generation run.
///
/// Built once at startup and handed by reference to each stage of the pipeline.
/// Nothing here is validated up front; malformed values surface as errors from
/// the stage that consumes them.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// Number of transactions to attempt. Discarded transactions are not replaced.
    pub num_transactions: u32,
    /// Size of the customer identifier pool.
    pub num_customers: u32,
    /// Inclusive upper bound on line-item draws per transaction.
    pub max_items_per_transaction: u32,
    pub output_filename: String,
    /// Product categories in selection-table order.
    pub categories: Vec<Category>,
    pub period: SalesPeriod,
    /// Fixed seed for reproducible runs, entropy when absent.
    pub seed: Option<u64>,
    pub log_level: LevelFilter,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            num_transactions: 50_000,
            num_customers: 10_000,
            max_items_per_transaction: 4,
            output_filename: "transactions.txt".to_string(),
            categories: default_categories(),
            period: SalesPeriod { year: 2025, month: 7 },
            seed: None,
            log_level: LevelFilter::WARN,
        }
    }
}

fn default_categories() -> Vec<Category> {
    vec![
        Category::new("Groceries", "GRC", 4, (1, 40), (1, 3)),
        Category::new("Office Supplies", "OFC", 11, (2, 45), (1, 3)),
        Category::new("Art & Craft Supplies", "ART", 8, (3, 80), (1, 3)),
        Category::new("Movies & TV Shows", "MOV", 12, (4, 35), (1, 2)),
        Category::new("Clothing", "CLH", 9, (12, 65), (1, 2)),
        Category::new("Beauty", "BET", 9, (2, 40), (1, 2)),
        Category::new("Baby & Toddler", "BBY", 7, (3, 45), (1, 2)),
        Category::new("Pet Supplies", "PET", 8, (4, 60), (1, 2)),
        Category::new("Health & Personal Care", "HPC", 6, (5, 40), (1, 2)),
        Category::new("Books", "BOK", 12, (4, 35), (1, 2)),
        Category::new("Toys & Games", "TYS", 10, (3, 80), (1, 2)),
        Category::new("Kitchen & Dining", "KTD", 8, (3, 80), (1, 2)),
        Category::new("Children 4-12", "CHD", 6, (4, 55), (1, 2)),
        Category::new("Electronics", "ELC", 4, (30, 650), (1, 1)),
        Category::new("Jewelry", "JWL", 3, (20, 110), (1, 1)),
        Category::new("Automotive", "ATO", 2, (25, 200), (1, 1)),
        Category::new("Music & Instruments", "MUS", 2, (10, 210), (1, 1)),
        Category::new("Furniture", "FNT", 1, (40, 270), (1, 1)),
        Category::new("Industrial & Scientific", "INS", 1, (80, 450), (1, 1)),
        Category::new("Home Goods", "HME", 7, (6, 55), (1, 2)),
        Category::new("Sports & Outdoors", "SPT", 6, (10, 90), (1, 2)),
        Category::new("Tools & Utility", "TLS", 4, (7, 100), (1, 2)),
        Category::new("Garden & Patio", "GRD", 3, (20, 110), (1, 2)),
        Category::new("Home Improvement", "HMI", 5, (12, 120), (1, 2)),
        Category::new("Outdoor Recreation", "OUT", 5, (10, 135), (1, 2)),
        Category::new("Teens 13-19", "TNS", 5, (5, 105), (1, 2)),
        Category::new("Software", "SFT", 6, (15, 90), (1, 1)),
        Category::new("Digital Goods", "DGT", 12, (1, 65), (1, 1)),
    ]
}
