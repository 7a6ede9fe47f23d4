//! This module contains some math related functionality.

mod distance;
pub use self::distance::*;
