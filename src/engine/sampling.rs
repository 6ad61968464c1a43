use rand::Rng;

use crate::engine::GeneratorError;

/// Prefix sums over a list of relative weights.
///
/// A selection is one uniform draw in `0..total` followed by a binary search
/// for the first cumulative weight above it. Zero weights are never selected.
#[derive(Debug, Clone)]
pub struct CumulativeWeights {
    cumulative: Vec<u64>,
}

impl CumulativeWeights {
    pub fn new<I>(weights: I) -> Result<Self, GeneratorError>
    where
        I: IntoIterator<Item = u32>,
    {
        let mut total = 0u64;
        let cumulative: Vec<u64> = weights
            .into_iter()
            .map(|weight| {
                total += u64::from(weight);
                total
            })
            .collect();

        if total == 0 {
            return Err(GeneratorError::InvalidWeights);
        }

        Ok(Self { cumulative })
    }

    pub fn total(&self) -> u64 {
        self.cumulative.last().copied().unwrap_or(0)
    }

    /// Picks an index with probability proportional to its weight.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        let roll = rng.gen_range(0..self.total());
        self.cumulative.partition_point(|&bound| bound <= roll)
    }
}
