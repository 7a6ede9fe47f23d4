//! Experiment configuration.

#[cfg(test)]
#[path = "../../tests/unit/extensions/config_test.rs"]
mod config_test;

extern crate serde_json;

use kohonen::prelude::*;
use serde::Deserialize;
use std::io::{BufReader, Read};

/// An experiment configuration, every part is optional.
#[derive(Clone, Deserialize, Debug, Default)]
pub struct Config {
    /// Specifies map shape.
    pub map: Option<MapConfig>,
    /// Specifies training parameters.
    pub training: Option<TrainingSettings>,
    /// Specifies training data generation.
    pub dataset: Option<DatasetConfig>,
    /// Specifies inverse queries.
    pub query: Option<QueryConfig>,
}

/// A map shape configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    /// Amount of rows. Default is 10.
    pub rows: Option<usize>,
    /// Amount of columns. Default is 10.
    pub cols: Option<usize>,
}

/// A training configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSettings {
    /// A learning rate. Default is 0.1.
    pub learning_rate: Option<Float>,
    /// A neighborhood width. Default is 0.9.
    pub neighborhood_width: Option<Float>,
    /// Amount of training iterations. Default is 30000.
    pub iteration_count: Option<usize>,
    /// How often quantization error is logged. Default is 1000, unlike `TrainingConfigBuilder`
    /// which does not log progress unless an interval is set.
    pub log_interval: Option<usize>,
}

/// A two-link arm dataset configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DatasetConfig {
    /// Amount of samples. Default is 1200.
    pub samples: Option<usize>,
    /// Length of the first link. Default is 0.7.
    pub l1: Option<Float>,
    /// Length of the second link. Default is 0.3.
    pub l2: Option<Float>,
}

/// An inverse query configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct QueryConfig {
    /// Amount of neighbours used by k strategies. Default is 4.
    pub k: Option<usize>,
    /// Amount of trajectory steps. Default is 10.
    pub steps: Option<usize>,
    /// Motor position where trajectory starts. Default is [1, 1].
    pub from: Option<Vec<Float>>,
    /// Motor position where trajectory ends. Default is [2.5, 2.5].
    pub to: Option<Vec<Float>>,
}

/// Query parameters with defaults applied.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryParams {
    /// Amount of neighbours used by k strategies.
    pub k: usize,
    /// Amount of trajectory steps.
    pub steps: usize,
    /// Motor position where trajectory starts.
    pub from: Vec<Float>,
    /// Motor position where trajectory ends.
    pub to: Vec<Float>,
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}

/// Returns map shape as (rows, cols).
pub fn get_map_shape(config: &Config) -> (usize, usize) {
    let map = config.map.as_ref();

    (map.and_then(|map| map.rows).unwrap_or(10), map.and_then(|map| map.cols).unwrap_or(10))
}

/// Returns amount of samples and link lengths as (samples, l1, l2).
pub fn get_dataset_params(config: &Config) -> (usize, Float, Float) {
    let dataset = config.dataset.as_ref();

    (
        dataset.and_then(|dataset| dataset.samples).unwrap_or(1200),
        dataset.and_then(|dataset| dataset.l1).unwrap_or(0.7),
        dataset.and_then(|dataset| dataset.l2).unwrap_or(0.3),
    )
}

/// Returns query parameters.
pub fn get_query_params(config: &Config) -> QueryParams {
    let query = config.query.as_ref();

    QueryParams {
        k: query.and_then(|query| query.k).unwrap_or(4),
        steps: query.and_then(|query| query.steps).unwrap_or(10),
        from: query.and_then(|query| query.from.clone()).unwrap_or_else(|| vec![1., 1.]),
        to: query.and_then(|query| query.to.clone()).unwrap_or_else(|| vec![2.5, 2.5]),
    }
}

/// Creates a training config, missing parameters are reported through the logger.
pub fn create_training_config(config: &Config, logger: InfoLogger) -> GenericResult<TrainingConfig> {
    let mut builder = TrainingConfigBuilder::default().with_logger(logger);

    let training = config.training.as_ref();

    if let Some(learning_rate) = training.and_then(|training| training.learning_rate) {
        builder = builder.with_learning_rate(learning_rate);
    }

    if let Some(neighborhood_width) = training.and_then(|training| training.neighborhood_width) {
        builder = builder.with_neighborhood_width(neighborhood_width);
    }

    if let Some(iteration_count) = training.and_then(|training| training.iteration_count) {
        builder = builder.with_iteration_count(iteration_count);
    }

    builder = builder.with_log_interval(training.and_then(|training| training.log_interval).unwrap_or(1000));

    builder.build()
}
