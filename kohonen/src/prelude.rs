//! This module reimports a common used types.

pub use crate::algorithms::som::Coordinate;
pub use crate::algorithms::som::Map;
pub use crate::algorithms::som::Prototype;
pub use crate::algorithms::som::TrainingConfig;
pub use crate::algorithms::som::TrainingConfigBuilder;
pub use crate::algorithms::som::train;

pub use crate::algorithms::inverse::InverseStrategy;
pub use crate::algorithms::inverse::Subspaces;
pub use crate::algorithms::inverse::TrajectoryPoint;

pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::Float;
pub use crate::utils::InfoLogger;
pub use crate::utils::compare_floats;
pub use crate::utils::{GenericError, GenericResult, SomError, SomResult};
pub use crate::utils::Random;
