#[cfg(test)]
#[path = "../../../tests/unit/algorithms/inverse/search_test.rs"]
mod search_test;

use crate::algorithms::math::euclidean_distance;
use crate::algorithms::som::{Coordinate, Map, Prototype};
use crate::utils::{Float, SomError, SomResult, check_dimension, compare_floats_refs};
use serde::Serialize;

/// A prototype found by the search together with its distance to the query point.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Neighbour {
    /// A coordinate of the prototype.
    pub coordinate: Coordinate,
    /// A distance to the query in the searched subspace.
    pub distance: Float,
}

/// Finds the nearest prototype to the query point in the given weight subspace.
/// When distances are equal, the first prototype in row-major order wins.
pub fn nearest(map: &Map, query: &[Float], subspace: &[usize]) -> SomResult<Neighbour> {
    check_query(map, query, subspace)?;

    map.prototypes()
        .map(|prototype| Neighbour {
            coordinate: prototype.coordinate(),
            distance: subspace_distance(prototype, query, subspace),
        })
        .min_by(|a, b| compare_floats_refs(&a.distance, &b.distance))
        .ok_or(SomError::EmptyMap)
}

/// Finds `k` nearest prototypes to the query point in the given weight subspace. Result is sorted
/// by ascending distance, ties keep row-major order.
pub fn k_nearest(map: &Map, query: &[Float], k: usize, subspace: &[usize]) -> SomResult<Vec<Neighbour>> {
    check_query(map, query, subspace)?;

    if k == 0 || k > map.size() {
        return Err(SomError::InvalidK { k, size: map.size() });
    }

    let mut neighbours: Vec<Neighbour> = Vec::with_capacity(k + 1);

    map.prototypes().for_each(|prototype| {
        let distance = subspace_distance(prototype, query, subspace);
        let candidate = Neighbour { coordinate: prototype.coordinate(), distance };

        if neighbours.len() < k {
            neighbours.push(candidate);
        } else if neighbours.last().is_some_and(|worst| distance < worst.distance) {
            neighbours[k - 1] = candidate;
        } else {
            return;
        }

        // NOTE sort is stable, so equal distances keep their scan order
        neighbours.sort_by(|a, b| compare_floats_refs(&a.distance, &b.distance));
    });

    Ok(neighbours)
}

fn subspace_distance(prototype: &Prototype, query: &[Float], subspace: &[usize]) -> Float {
    let weights = prototype.weights();
    euclidean_distance(subspace.iter().map(|&idx| weights[idx]), query.iter().copied())
}

fn check_query(map: &Map, query: &[Float], subspace: &[usize]) -> SomResult<()> {
    if map.size() == 0 {
        return Err(SomError::EmptyMap);
    }

    check_dimension(subspace.len(), query.len())?;

    match subspace.iter().find(|&&idx| idx >= map.dimension()) {
        Some(&idx) => Err(SomError::DimensionMismatch { expected: map.dimension(), actual: idx + 1 }),
        None => Ok(()),
    }
}
