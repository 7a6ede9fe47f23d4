#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/prototype_test.rs"]
mod prototype_test;

use super::*;
use crate::algorithms::math::euclidean_distance;
use crate::utils::{Float, SomResult, check_dimension};

/// Represents a single grid cell of the map.
#[derive(Clone, Debug)]
pub struct Prototype {
    /// A weight vector.
    weights: Vec<Float>,
    /// A coordinate in the grid.
    coordinate: Coordinate,
    /// A last computed distance to the input.
    activation: Float,
}

impl Prototype {
    /// Creates a new instance of `Prototype`.
    pub fn new(coordinate: Coordinate, weights: Vec<Float>) -> Self {
        Self { weights, coordinate, activation: 0. }
    }

    /// Returns weights of the prototype.
    pub fn weights(&self) -> &[Float] {
        self.weights.as_slice()
    }

    /// Returns coordinate of the prototype in the grid.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Returns last computed activation.
    pub fn activation(&self) -> Float {
        self.activation
    }

    /// Computes euclidean distance to the input and remembers it as the current activation.
    pub fn compute_activation(&mut self, input: &[Float]) -> SomResult<Float> {
        check_dimension(self.weights.len(), input.len())?;

        self.activation = self.distance(input);

        Ok(self.activation)
    }

    /// Returns euclidean distance to the input without changing the activation.
    pub(crate) fn distance(&self, input: &[Float]) -> Float {
        euclidean_distance(self.weights.iter().copied(), input.iter().copied())
    }

    /// Moves weights towards the input using a gaussian kernel over grid distance to the winner:
    /// `w = w + lr * exp(-d^2 / (2 * width^2)) * (x - w)`.
    ///
    /// Neighborhood width is expected to be positive.
    pub fn apply_update(
        &mut self,
        learning_rate: Float,
        neighborhood_width: Float,
        winner: &Coordinate,
        input: &[Float],
    ) -> SomResult<()> {
        check_dimension(self.weights.len(), input.len())?;

        let distance = self.coordinate.manhattan_distance(winner) as Float;
        let influence =
            learning_rate * (-(distance * distance) / (2. * neighborhood_width * neighborhood_width)).exp();

        self.weights.iter_mut().zip(input.iter()).for_each(|(weight, &value)| {
            *weight += influence * (value - *weight);
        });

        Ok(())
    }
}
