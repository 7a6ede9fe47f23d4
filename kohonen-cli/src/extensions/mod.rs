//! Contains building blocks of the experiment.

pub mod arm;
pub mod config;
pub mod experiment;
