//! This crate provides a Kohonen self-organizing map (SOM) learned on a flat rectangular grid
//! together with the query functionality which uses a trained map to estimate an inverse mapping:
//! given a point in one weight subspace, it recovers the corresponding point in another one.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod prelude;
pub mod utils;
