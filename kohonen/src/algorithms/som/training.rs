#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/training_test.rs"]
mod training_test;

use super::*;
use crate::utils::{Environment, Float, GenericError, GenericResult, InfoLogger, SomError, SomResult};
use std::ops::Deref;

/// A configuration which controls map training.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingConfig {
    /// A learning rate, must be positive.
    pub learning_rate: Float,
    /// A neighborhood width, must be positive.
    pub neighborhood_width: Float,
    /// Amount of training iterations.
    pub iteration_count: usize,
    /// Specifies how often quantization error is logged.
    pub log_interval: Option<usize>,
}

impl TrainingConfig {
    /// Creates a new instance of `TrainingConfig` checking its parameters.
    pub fn new(
        learning_rate: Float,
        neighborhood_width: Float,
        iteration_count: usize,
        log_interval: Option<usize>,
    ) -> GenericResult<Self> {
        if !(learning_rate > 0.) {
            return Err(format!("learning rate should be positive, got: {learning_rate}").into());
        }

        if !(neighborhood_width > 0.) {
            return Err(format!("neighborhood width should be positive, got: {neighborhood_width}").into());
        }

        if log_interval == Some(0) {
            return Err("log interval should be positive".into());
        }

        Ok(Self { learning_rate, neighborhood_width, iteration_count, log_interval })
    }
}

/// Provides configurable way to build training configuration using fluent interface style.
pub struct TrainingConfigBuilder {
    learning_rate: Option<Float>,
    neighborhood_width: Option<Float>,
    iteration_count: Option<usize>,
    log_interval: Option<usize>,
    logger: Option<InfoLogger>,
}

impl Default for TrainingConfigBuilder {
    fn default() -> Self {
        Self { learning_rate: None, neighborhood_width: None, iteration_count: None, log_interval: None, logger: None }
    }
}

impl TrainingConfigBuilder {
    /// Sets learning rate. Default is 0.1.
    pub fn with_learning_rate(mut self, learning_rate: Float) -> Self {
        self.learning_rate = Some(learning_rate);
        self
    }

    /// Sets neighborhood width. Default is 0.9.
    pub fn with_neighborhood_width(mut self, neighborhood_width: Float) -> Self {
        self.neighborhood_width = Some(neighborhood_width);
        self
    }

    /// Sets amount of training iterations. Default is 30000.
    pub fn with_iteration_count(mut self, iteration_count: usize) -> Self {
        self.iteration_count = Some(iteration_count);
        self
    }

    /// Sets how often training progress is logged. Progress is not logged by default.
    ///
    /// NOTE `kohonen-cli` always sets an interval, its default is 1000 iterations.
    pub fn with_log_interval(mut self, log_interval: usize) -> Self {
        self.log_interval = Some(log_interval);
        self
    }

    /// Sets a logger which reports chosen parameters.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Builds the training config.
    pub fn build(self) -> Result<TrainingConfig, GenericError> {
        let log = |message: &str| {
            if let Some(logger) = self.logger.as_ref() {
                logger.deref()(message)
            }
        };

        let learning_rate = self.learning_rate.unwrap_or_else(|| {
            log("configured to use default learning rate (0.1)");
            0.1
        });
        let neighborhood_width = self.neighborhood_width.unwrap_or_else(|| {
            log("configured to use default neighborhood width (0.9)");
            0.9
        });
        let iteration_count = self.iteration_count.unwrap_or_else(|| {
            log("configured to use default iteration count (30000)");
            30000
        });

        log(format!(
            "configured to use learning rate: {learning_rate}, neighborhood width: {neighborhood_width}, \
             iterations: {iteration_count}"
        )
        .as_str());

        TrainingConfig::new(learning_rate, neighborhood_width, iteration_count, self.log_interval)
    }
}

/// Trains the map on samples: at every iteration a sample is selected randomly and used
/// to perform one training step.
pub fn train<S: AsRef<[Float]>>(
    map: &mut Map,
    samples: &[S],
    config: &TrainingConfig,
    environment: &Environment,
) -> SomResult<()> {
    if config.iteration_count == 0 {
        return Ok(());
    }

    if samples.is_empty() {
        return Err(SomError::EmptyDataset);
    }

    let last_index = samples.len().min(i32::MAX as usize) as i32 - 1;

    (0..config.iteration_count).try_for_each(|iteration| -> SomResult<()> {
        let sample = samples[environment.random.uniform_int(0, last_index) as usize].as_ref();

        map.train_step(config.learning_rate, config.neighborhood_width, sample)?;

        match config.log_interval {
            Some(interval) if iteration % interval == 0 || iteration + 1 == config.iteration_count => {
                let error = map.quantization_error(samples)?;
                environment.logger.deref()(&format!(
                    "[{iteration}/{}] quantization error: {error:.7}",
                    config.iteration_count
                ));
            }
            _ => {}
        }

        Ok(())
    })
}
