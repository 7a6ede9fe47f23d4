//! A robotic two-link arm used as a source of training data.

#[cfg(test)]
#[path = "../../tests/unit/extensions/arm_test.rs"]
mod arm_test;

use kohonen::prelude::{Float, Random};
use std::f64::consts::PI;

/// Amount of values in one sample: two joint angles followed by hand position.
pub const SAMPLE_DIMENSION: usize = 4;

/// A planar arm with two rigid links connected by rotational joints.
#[derive(Clone, Debug, PartialEq)]
pub struct TwoLinkArm {
    l1: Float,
    l2: Float,
}

impl TwoLinkArm {
    /// Creates a new instance of `TwoLinkArm` with given link lengths.
    pub fn new(l1: Float, l2: Float) -> Self {
        Self { l1, l2 }
    }

    /// Returns hand position (x, y) for given joint angles.
    pub fn hand_position(&self, theta1: Float, theta2: Float) -> (Float, Float) {
        let x = self.l1 * theta1.cos() + self.l2 * (theta1 + theta2).cos();
        let y = self.l1 * theta1.sin() + self.l2 * (theta1 + theta2).sin();

        (x, y)
    }

    /// Returns a sample `[theta1, theta2, x, y]` for given joint angles.
    pub fn sample(&self, theta1: Float, theta2: Float) -> Vec<Float> {
        let (x, y) = self.hand_position(theta1, theta2);

        vec![theta1, theta2, x, y]
    }

    /// Generates samples with joint angles drawn uniformly from `[0, PI)`.
    pub fn generate_samples(&self, count: usize, random: &dyn Random) -> Vec<Vec<Float>> {
        (0..count).map(|_| self.sample(random.uniform_real(0., PI), random.uniform_real(0., PI))).collect()
    }
}

impl Default for TwoLinkArm {
    fn default() -> Self {
        Self::new(0.7, 0.3)
    }
}
