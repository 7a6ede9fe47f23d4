#[cfg(test)]
#[path = "../../../tests/unit/algorithms/inverse/estimator_test.rs"]
mod estimator_test;

use super::*;
use crate::algorithms::som::Map;
use crate::utils::{Float, SomError, SomResult};
use std::fmt::{Display, Formatter};

/// Specifies how neighbour prototypes are interpolated into an estimate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InverseStrategy {
    /// Takes weights of the single nearest prototype.
    Nearest,

    /// Takes arithmetic mean of weights of `k` nearest prototypes.
    UniformK {
        /// Amount of neighbours.
        k: usize,
    },

    /// Takes weighted sum of weights of `k` nearest prototypes, where neighbour `i` contributes
    /// with coefficient `(1 - d_i / sum(d)) / (k - 1)`. Requires at least two neighbours.
    WeightedK {
        /// Amount of neighbours.
        k: usize,
    },
}

/// An inverse estimation result.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Estimate {
    /// Neighbours used to build the estimate, sorted by ascending distance.
    pub neighbours: Vec<Neighbour>,
    /// Estimated point.
    pub point: TrajectoryPoint,
}

impl InverseStrategy {
    /// Estimates a point which corresponds to the query point in the query subspace.
    pub fn estimate(&self, map: &Map, subspaces: &Subspaces, query: &[Float]) -> SomResult<Estimate> {
        if map.size() == 0 {
            return Err(SomError::EmptyMap);
        }

        let neighbours = match self {
            InverseStrategy::Nearest => vec![nearest(map, query, subspaces.query())?],
            InverseStrategy::UniformK { k } => k_nearest(map, query, *k, subspaces.query())?,
            InverseStrategy::WeightedK { k } => {
                if *k < 2 {
                    return Err(SomError::InvalidK { k: *k, size: map.size() });
                }
                k_nearest(map, query, *k, subspaces.query())?
            }
        };

        let coefficients = self.coefficients(neighbours.as_slice());
        let interpolate = |indices: &[usize]| -> SomResult<Vec<Float>> {
            let mut result = vec![Float::default(); indices.len()];

            neighbours.iter().zip(coefficients.iter()).try_for_each(|(neighbour, &coefficient)| -> SomResult<()> {
                let weights = map.get(&neighbour.coordinate).ok_or(SomError::EmptyMap)?.weights();

                result.iter_mut().zip(indices.iter()).try_for_each(|(value, &idx)| -> SomResult<()> {
                    let weight = weights
                        .get(idx)
                        .ok_or(SomError::DimensionMismatch { expected: weights.len(), actual: idx + 1 })?;
                    *value += coefficient * weight;

                    Ok(())
                })
            })?;

            Ok(result)
        };

        let point = TrajectoryPoint { query: interpolate(subspaces.query())?, output: interpolate(subspaces.output())? };

        Ok(Estimate { neighbours, point })
    }

    /// Returns interpolation coefficients of the neighbours, they sum up to one.
    fn coefficients(&self, neighbours: &[Neighbour]) -> Vec<Float> {
        let count = neighbours.len() as Float;
        let uniform = || vec![1. / count; neighbours.len()];

        match self {
            InverseStrategy::Nearest | InverseStrategy::UniformK { .. } => uniform(),
            InverseStrategy::WeightedK { .. } => {
                let total = neighbours.iter().map(|neighbour| neighbour.distance).sum::<Float>();

                // NOTE query coincides with all neighbours: no one is closer than another
                if total == 0. {
                    return uniform();
                }

                neighbours.iter().map(|neighbour| (1. - neighbour.distance / total) / (count - 1.)).collect()
            }
        }
    }
}

impl Display for InverseStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InverseStrategy::Nearest => write!(f, "nearest"),
            InverseStrategy::UniformK { k } => write!(f, "uniform-{k}"),
            InverseStrategy::WeightedK { k } => write!(f, "weighted-{k}"),
        }
    }
}
