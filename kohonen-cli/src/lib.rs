//! A driver for Kohonen map experiments: it trains a map on samples of a robotic two-link arm
//! and evaluates how well the trained map estimates hand positions from motor positions.
//!
//! The core algorithms live in the `kohonen` crate, this crate adds data generation, JSON
//! configuration and reporting.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod helpers;

pub mod extensions;
