//! Quantification module
//!
//! Retention factors from line positions and semi-quantitative lane intensity profiles.

mod retention;
mod profile;

#[cfg(test)]
mod tests;

pub use retention::{RF_SCALE, rf};
pub use profile::{ProfilePoint, intensity_profile, lane_columns};
