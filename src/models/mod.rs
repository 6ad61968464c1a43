mod catalog;
mod product;
mod transaction;

pub use catalog::Catalog;
pub use product::Product;
pub use transaction::{Item, Transaction};
