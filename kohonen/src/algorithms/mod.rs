//! This module contains algorithms used by the map and its queries.

pub mod inverse;
pub mod math;
pub mod som;
