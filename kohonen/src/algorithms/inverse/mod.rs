//! Provides the way to query a trained map for an inverse mapping: each prototype encodes jointly
//! a point of the query subspace and a point of the output subspace, so nearby prototypes in
//! the query subspace can be interpolated to estimate the output.

use crate::utils::Float;
use serde::Serialize;

mod estimator;
pub use self::estimator::*;

mod search;
pub use self::search::*;

mod trajectory;
pub use self::trajectory::*;

/// Specifies which weight indices are used to search prototypes and which are estimated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subspaces {
    query: Vec<usize>,
    output: Vec<usize>,
}

impl Subspaces {
    /// Creates a new instance of `Subspaces`.
    pub fn new(query: Vec<usize>, output: Vec<usize>) -> Self {
        Self { query, output }
    }

    /// Creates subspaces where the first `at` weights are used for search and the rest of
    /// `dimension` weights are estimated.
    pub fn split_at(dimension: usize, at: usize) -> Self {
        let at = at.min(dimension);
        Self { query: (0..at).collect(), output: (at..dimension).collect() }
    }

    /// Returns query subspace indices.
    pub fn query(&self) -> &[usize] {
        self.query.as_slice()
    }

    /// Returns output subspace indices.
    pub fn output(&self) -> &[usize] {
        self.output.as_slice()
    }
}

/// A pair of sub-vectors of an estimated prototype weight vector.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrajectoryPoint {
    /// A part which belongs to the query subspace.
    pub query: Vec<Float>,
    /// A part which belongs to the output subspace.
    pub output: Vec<Float>,
}
