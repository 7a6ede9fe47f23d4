#[cfg(test)]
#[path = "../../../tests/unit/algorithms/math/distance_test.rs"]
mod distance_test;

use crate::utils::Float;

/// Calculates euclidean distance between two vectors: D = sqrt(sum((x - y)^2))
pub fn euclidean_distance<A, B>(a: A, b: B) -> Float
where
    A: Iterator<Item = Float>,
    B: Iterator<Item = Float>,
{
    squared_euclidean_distance(a, b).sqrt()
}

/// Calculates squared euclidean distance between two vectors.
pub fn squared_euclidean_distance<A, B>(a: A, b: B) -> Float
where
    A: Iterator<Item = Float>,
    B: Iterator<Item = Float>,
{
    a.zip(b).fold(Float::default(), |acc, (a, b)| {
        let diff = a - b;
        acc + diff * diff
    })
}
