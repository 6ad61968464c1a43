mod errors;
mod generator;
mod sampling;

pub use errors::GeneratorError;
pub use generator::TransactionGenerator;
pub use sampling::CumulativeWeights;
