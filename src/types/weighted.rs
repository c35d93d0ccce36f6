use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use crate::types::errors::WeightedChoiceError;

/// A discrete distribution over a fixed set of values, each carrying an explicit weight.
///
/// The probability of drawing a value is its weight divided by the sum of all weights.
/// Values with a weight of zero are never drawn.
#[derive(Debug, Clone)]
pub struct WeightedChoice<T> {
    values: Vec<T>,
    weights: Vec<u32>,
    index: WeightedIndex<u32>
}

impl<T: Clone + PartialEq> WeightedChoice<T> {
    /// Builds the distribution from `(value, weight)` pairs.
    ///
    /// # Errors
    /// Returns `WeightedChoiceError` if no pairs are given or every weight is zero.
    pub fn new(pairs: &[(T, u32)]) -> Result<Self, WeightedChoiceError> {
        if pairs.is_empty() {
            return Err(WeightedChoiceError::Empty)
        }

        let values: Vec<T> = pairs.iter().map(|(value, _)| value.clone()).collect();
        let weights: Vec<u32> = pairs.iter().map(|(_, weight)| *weight).collect();

        let index = WeightedIndex::new(&weights)
            .map_err(|error| WeightedChoiceError::InvalidWeights(error.to_string()))?;

        Ok(Self { values, weights, index })
    }

    /// Probability of drawing `value`, summed over every pair that carries it.
    pub fn probability_of(&self, value: &T) -> f64 {
        let total: u64 = self.weights.iter().map(|weight| u64::from(*weight)).sum();

        let matching: u64 = self.values.iter()
            .zip(&self.weights)
            .filter(|(candidate, _)| *candidate == value)
            .map(|(_, weight)| u64::from(*weight))
            .sum();

        matching as f64 / total as f64
    }
}

impl<T: Clone> Distribution<T> for WeightedChoice<T> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        self.values[self.index.sample(rng)].clone()
    }
}
