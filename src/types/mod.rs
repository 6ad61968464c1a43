mod monetary;
#[cfg(test)]
mod tests;

pub use monetary::{group_digits, Monetary};

pub type ProductId = String;
pub type CustomerId = String;
pub type SequenceNumber = u32;
