use std::collections::HashMap;
use std::ops::Range;

use crate::config::Category;
use crate::models::Product;

pub const PRODUCTS_PER_CATEGORY: u32 = 100;

/// The read-only set of every product across all categories.
///
/// Products are stored contiguously per category in configuration order, which
/// lets a category's products be handed out as a slice.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    categories: HashMap<String, Range<usize>>,
}

impl Catalog {
    /// Expands every category into [`PRODUCTS_PER_CATEGORY`] products numbered from 1.
    pub fn build(categories: &[Category]) -> Self {
        let mut catalog = Catalog {
            products: Vec::with_capacity(categories.len() * PRODUCTS_PER_CATEGORY as usize),
            categories: HashMap::new(),
        };

        for category in categories {
            let start = catalog.products.len();

            for sequence_number in 1..=PRODUCTS_PER_CATEGORY {
                catalog.products.push(Product::new(category, sequence_number));
            }

            catalog.categories.insert(category.name.clone(), start..catalog.products.len());
        }

        catalog
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// All products of the named category, empty when the category is unknown.
    pub fn products_in(&self, category: &str) -> &[Product] {
        self.categories
            .get(category)
            .map(|range| &self.products[range.clone()])
            .unwrap_or(&[])
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }
}
