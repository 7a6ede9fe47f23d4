#[cfg(test)]
#[path = "../../../tests/unit/algorithms/inverse/trajectory_test.rs"]
mod trajectory_test;

use super::*;
use crate::algorithms::som::Map;
use crate::utils::{Float, SomError, SomResult, check_dimension};

/// Generates a trajectory of `step_count` estimated points following the line from `from` to `to`
/// in the query subspace. Intermediate queries are taken at evenly spaced fractions of the path,
/// the last one is exactly `to`.
pub fn generate(
    map: &Map,
    strategy: &InverseStrategy,
    subspaces: &Subspaces,
    from: &[Float],
    to: &[Float],
    step_count: usize,
) -> SomResult<Vec<TrajectoryPoint>> {
    if step_count < 2 {
        return Err(SomError::InvalidStepCount(step_count));
    }

    check_dimension(subspaces.query().len(), from.len())?;
    check_dimension(subspaces.query().len(), to.len())?;

    let segments = (step_count - 1) as Float;

    (0..step_count - 1)
        .map(|step| {
            let fraction = step as Float / segments;
            from.iter().zip(to.iter()).map(|(&from, &to)| from + fraction * (to - from)).collect::<Vec<_>>()
        })
        .chain(std::iter::once(to.to_vec()))
        .map(|query| strategy.estimate(map, subspaces, query.as_slice()).map(|estimate| estimate.point))
        .collect()
}
