#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/map_test.rs"]
mod map_test;

use super::*;
use crate::utils::{Float, Random, SomError, SomResult, check_dimension, compare_floats};

/// A Kohonen Self Organizing Map: a rectangular grid of prototypes trained with competitive learning.
pub struct Map {
    /// Grid shape as (rows, cols).
    shape: (usize, usize),
    /// Data dimension.
    dimension: usize,
    /// All prototypes in row-major order.
    prototypes: Vec<Prototype>,
}

impl Map {
    /// Creates a new instance of `Map` with weights sampled independently and uniformly from
    /// the half-open `range`.
    ///
    /// # Panics
    ///
    /// `range` must be ordered as (min, max) with `min <= max` and without NaN, otherwise
    /// `DefaultRandom` panics on the first sampled weight.
    pub fn new(dimension: usize, shape: (usize, usize), range: (Float, Float), random: &dyn Random) -> Self {
        let (rows, cols) = shape;
        let prototypes = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Coordinate(row, col)))
            .map(|coordinate| {
                let weights = (0..dimension).map(|_| random.uniform_real(range.0, range.1)).collect();
                Prototype::new(coordinate, weights)
            })
            .collect();

        Self { shape, dimension, prototypes }
    }

    /// Creates a new instance of `Map` using given weights in row-major order.
    pub fn from_weights(shape: (usize, usize), weights: Vec<Vec<Float>>) -> SomResult<Self> {
        let (rows, cols) = shape;
        check_dimension(rows * cols, weights.len())?;

        let dimension = weights.first().map_or(0, |weights| weights.len());
        weights.iter().try_for_each(|weights| check_dimension(dimension, weights.len()))?;

        let prototypes = weights
            .into_iter()
            .enumerate()
            .map(|(idx, weights)| Prototype::new(Coordinate(idx / cols, idx % cols), weights))
            .collect();

        Ok(Self { shape, dimension, prototypes })
    }

    /// Returns grid shape as (rows, cols).
    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    /// Returns dimension of prototype weights.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns a total amount of prototypes.
    pub fn size(&self) -> usize {
        self.prototypes.len()
    }

    /// Finds prototype by its coordinate.
    pub fn get(&self, coordinate: &Coordinate) -> Option<&Prototype> {
        let (rows, cols) = self.shape;
        if coordinate.0 < rows && coordinate.1 < cols {
            self.prototypes.get(coordinate.0 * cols + coordinate.1)
        } else {
            None
        }
    }

    /// Iterates over prototypes in row-major order.
    pub fn prototypes(&self) -> impl Iterator<Item = &Prototype> {
        self.prototypes.iter()
    }

    /// Returns last computed activations arranged as the grid.
    pub fn activation_grid(&self) -> Vec<Vec<Float>> {
        let (rows, cols) = self.shape;

        (0..rows).map(|row| (0..cols).map(|col| self.prototypes[row * cols + col].activation()).collect()).collect()
    }

    /// Computes activation of every prototype for the same input.
    pub fn compute_activations(&mut self, input: &[Float]) -> SomResult<()> {
        check_dimension(self.dimension, input.len())?;

        self.prototypes.iter_mut().try_for_each(|prototype| prototype.compute_activation(input).map(|_| ()))
    }

    /// Finds the best matching unit within the map for the given input. Ties are resolved in favor
    /// of the first prototype in row-major order.
    pub fn find_bmu(&self, input: &[Float]) -> SomResult<Coordinate> {
        check_dimension(self.dimension, input.len())?;

        self.prototypes
            .iter()
            .map(|prototype| (prototype.coordinate(), prototype.distance(input)))
            .min_by(|(_, a), (_, b)| compare_floats(*a, *b))
            .map(|(coordinate, _)| coordinate)
            .ok_or(SomError::EmptyMap)
    }

    /// Performs one step of Kohonen learning rule: activations are refreshed for the input, then
    /// every prototype is pulled towards the input proportionally to its grid proximity to the winner.
    /// Returns coordinate of the winner.
    pub fn train_step(
        &mut self,
        learning_rate: Float,
        neighborhood_width: Float,
        input: &[Float],
    ) -> SomResult<Coordinate> {
        self.compute_activations(input)?;

        let winner = self.find_winner()?;

        self.prototypes
            .iter_mut()
            .try_for_each(|prototype| prototype.apply_update(learning_rate, neighborhood_width, &winner, input))?;

        Ok(winner)
    }

    /// Returns mean squared distance between samples and their best matching units.
    pub fn quantization_error<S: AsRef<[Float]>>(&mut self, samples: &[S]) -> SomResult<Float> {
        if samples.is_empty() {
            return Err(SomError::EmptyDataset);
        }

        let total = samples.iter().try_fold(Float::default(), |acc, sample| -> SomResult<Float> {
            self.compute_activations(sample.as_ref())?;
            let activation = self.min_activation()?;

            Ok(acc + activation * activation)
        })?;

        Ok(total / samples.len() as Float)
    }

    /// Returns a sum of squared differences in the first two weight coordinates between grid
    /// neighbours. For each axis, a prototype is compared with its previous neighbour, or, if it is
    /// the first one in that axis, with the next one.
    pub fn dispersion(&self) -> Float {
        let (rows, cols) = self.shape;
        let plane = self.dimension.min(2);

        let difference = |a: &Prototype, b: Coordinate| {
            let b = &self.prototypes[b.0 * cols + b.1];
            a.weights().iter().zip(b.weights().iter()).take(plane).map(|(a, b)| (a - b) * (a - b)).sum::<Float>()
        };

        self.prototypes.iter().fold(Float::default(), |acc, prototype| {
            let Coordinate(row, col) = prototype.coordinate();

            let vertical = match row {
                0 if rows > 1 => difference(prototype, Coordinate(row + 1, col)),
                0 => 0.,
                _ => difference(prototype, Coordinate(row - 1, col)),
            };

            let horizontal = match col {
                0 if cols > 1 => difference(prototype, Coordinate(row, col + 1)),
                0 => 0.,
                _ => difference(prototype, Coordinate(row, col - 1)),
            };

            acc + vertical + horizontal
        })
    }

    fn find_winner(&self) -> SomResult<Coordinate> {
        self.prototypes
            .iter()
            .min_by(|a, b| compare_floats(a.activation(), b.activation()))
            .map(|prototype| prototype.coordinate())
            .ok_or(SomError::EmptyMap)
    }

    fn min_activation(&self) -> SomResult<Float> {
        self.prototypes
            .iter()
            .map(|prototype| prototype.activation())
            .min_by(|a, b| compare_floats(*a, *b))
            .ok_or(SomError::EmptyMap)
    }
}
