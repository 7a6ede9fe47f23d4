//! Runs an experiment: trains a map on two-link arm samples, then estimates hand positions from
//! motor positions using the trained map.

#[cfg(test)]
#[path = "../../tests/unit/extensions/experiment_test.rs"]
mod experiment_test;

use super::arm::{SAMPLE_DIMENSION, TwoLinkArm};
use super::config::*;
use kohonen::algorithms::inverse::generate;
use kohonen::algorithms::math::euclidean_distance;
use kohonen::algorithms::som::{MapState, get_map_state};
use kohonen::prelude::*;
use serde::Serialize;
use std::io::{BufWriter, Write};
use std::ops::Deref;

/// A range of motor angles used for the test position.
const MOTOR_TEST_RANGE: (Float, Float) = (0.5, 3.);

/// An experiment report.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Quantization error of the trained map on the training samples.
    pub quantization_error: Float,
    /// Dispersion of the trained map in the motor subspace.
    pub dispersion: Float,
    /// Motor position used to test estimation strategies.
    pub motor_position: Vec<Float>,
    /// Hand position which corresponds to the motor position.
    pub ideal_position: Vec<Float>,
    /// Estimates of the hand position, one per strategy.
    pub estimates: Vec<EstimateReport>,
    /// Hand trajectories, one per strategy.
    pub trajectories: Vec<TrajectoryReport>,
    /// State of the trained map.
    pub map: MapState,
}

/// A hand position estimated by some strategy.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateReport {
    /// Strategy name.
    pub strategy: String,
    /// Coordinates of prototypes used by the estimate.
    pub neighbours: Vec<Coordinate>,
    /// Estimated hand position.
    pub position: Vec<Float>,
    /// Euclidean distance between estimated and ideal hand positions.
    pub error: Float,
}

/// A hand trajectory generated by some strategy.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrajectoryReport {
    /// Strategy name.
    pub strategy: String,
    /// Trajectory points.
    pub points: Vec<TrajectoryPoint>,
}

/// Runs the experiment using given configuration and environment.
pub fn run_experiment(config: &Config, environment: &Environment) -> GenericResult<Report> {
    let logger = environment.logger.clone();
    let random = environment.random.as_ref();

    let shape = get_map_shape(config);
    let (sample_count, l1, l2) = get_dataset_params(config);
    let query = get_query_params(config);
    let training = create_training_config(config, logger.clone())?;

    let arm = TwoLinkArm::new(l1, l2);
    let samples = arm.generate_samples(sample_count, random);
    logger.deref()(&format!("generated {} samples for arm with links: {l1}, {l2}", samples.len()));

    let mut map = Map::new(SAMPLE_DIMENSION, shape, (0., 1.), random);
    train(&mut map, samples.as_slice(), &training, environment)?;

    let quantization_error = map.quantization_error(samples.as_slice())?;
    let dispersion = map.dispersion();
    logger.deref()(&format!("trained map, quantization error: {quantization_error:.7}, dispersion: {dispersion:.7}"));

    let motor_position = vec![
        random.uniform_real(MOTOR_TEST_RANGE.0, MOTOR_TEST_RANGE.1),
        random.uniform_real(MOTOR_TEST_RANGE.0, MOTOR_TEST_RANGE.1),
    ];
    let (x, y) = arm.hand_position(motor_position[0], motor_position[1]);
    let ideal_position = vec![x, y];

    let subspaces = Subspaces::split_at(SAMPLE_DIMENSION, 2);
    let strategies =
        [InverseStrategy::Nearest, InverseStrategy::UniformK { k: query.k }, InverseStrategy::WeightedK { k: query.k }];

    let estimates = strategies
        .iter()
        .map(|strategy| -> SomResult<EstimateReport> {
            let estimate = strategy.estimate(&map, &subspaces, motor_position.as_slice())?;
            let position = estimate.point.output;
            let error = euclidean_distance(position.iter().copied(), ideal_position.iter().copied());

            logger.deref()(&format!("strategy '{strategy}' estimated hand position with error: {error:.7}"));

            Ok(EstimateReport {
                strategy: strategy.to_string(),
                neighbours: estimate.neighbours.into_iter().map(|neighbour| neighbour.coordinate).collect(),
                position,
                error,
            })
        })
        .collect::<SomResult<Vec<_>>>()?;

    let trajectories = strategies
        .iter()
        .map(|strategy| {
            generate(&map, strategy, &subspaces, query.from.as_slice(), query.to.as_slice(), query.steps)
                .map(|points| TrajectoryReport { strategy: strategy.to_string(), points })
        })
        .collect::<SomResult<Vec<_>>>()?;

    Ok(Report {
        quantization_error,
        dispersion,
        motor_position,
        ideal_position,
        estimates,
        trajectories,
        map: get_map_state(&map),
    })
}

/// Writes report as pretty printed json.
pub fn write_report<W: Write>(mut writer: BufWriter<W>, report: &Report) -> Result<(), String> {
    serde_json::to_writer_pretty(&mut writer, report).map_err(|err| format!("cannot serialize report: '{err}'"))?;
    writer.write_all(b"\n").and_then(|_| writer.flush()).map_err(|err| format!("cannot write report: '{err}'"))
}
