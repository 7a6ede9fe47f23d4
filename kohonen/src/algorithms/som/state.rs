#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/state_test.rs"]
mod state_test;

use super::*;
use crate::algorithms::math::euclidean_distance;
use crate::utils::Float;
use serde::Serialize;
use std::fmt::{Display, Formatter, Result, Write};

/// Represents state of the map.
#[derive(Serialize)]
pub struct MapState {
    /// Shape of the map as (rows, cols, num of weights).
    pub shape: (usize, usize, usize),
    /// Nodes of the map in row-major order.
    pub nodes: Vec<NodeState>,
}

/// Contains information about map node state.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeState {
    /// Node coordinate in the grid.
    pub coordinate: (usize, usize),
    /// Unified distance to neighbors.
    pub unified_distance: Float,
    /// Node weights.
    pub weights: Vec<Float>,
}

/// Gets map state.
pub fn get_map_state(map: &Map) -> MapState {
    let (rows, cols) = map.shape();

    let nodes = map
        .prototypes()
        .map(|prototype| {
            let Coordinate(row, col) = prototype.coordinate();

            let neighbours = [
                row.checked_sub(1).map(|row| Coordinate(row, col)),
                Some(Coordinate(row + 1, col)).filter(|c| c.0 < rows),
                col.checked_sub(1).map(|col| Coordinate(row, col)),
                Some(Coordinate(row, col + 1)).filter(|c| c.1 < cols),
            ];

            let (sum, count) = neighbours
                .iter()
                .flatten()
                .filter_map(|coordinate| map.get(coordinate))
                .fold((0., 0), |(sum, count), neighbour| {
                    let distance =
                        euclidean_distance(prototype.weights().iter().copied(), neighbour.weights().iter().copied());
                    (sum + distance, count + 1)
                });

            NodeState {
                coordinate: (row, col),
                unified_distance: if count > 0 { sum / count as Float } else { 0. },
                weights: prototype.weights().to_vec(),
            }
        })
        .collect::<Vec<_>>();

    MapState { shape: (rows, cols, map.dimension()), nodes }
}

impl Display for MapState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        // NOTE serialize state in simple representation which can be embedded
        // to json as string and then easily parsed.
        let nodes = self.nodes.iter().fold(String::new(), |mut res, n| {
            let (row, col) = n.coordinate;
            let weights = n.weights.iter().map(|w| format!("{w:.7}")).collect::<Vec<_>>().join(",");

            // NOTE writing to a string cannot fail
            let _ = write!(&mut res, "({},{},{:.7},[{}]),", row, col, n.unified_distance, weights);

            res
        });

        write!(f, "({},{},{},[{}])", self.shape.0, self.shape.1, self.shape.2, nodes)
    }
}
