//! Plate and spot geometry
//!
//! Either one implicit plate spanning the image, or a list of rectangular plate regions
//! with one of them active. Every edit lands on exactly one [`PlateState`].

pub mod types;
mod model;


pub use types::{CropDraft, Geometry, PlateRegion, PlateSet, PlateState, PlateView, Spot, SpotRef};
pub use model::MIN_PLATE_SIZE;
