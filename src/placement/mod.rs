//! Turning templates into scene elements
//!
//! [`transform`] maps geometry from a template's local frame to the scene;
//! [`pipeline`] sequences identity rewriting, the transform and the scene commit.

pub mod pipeline;
pub mod transform;

pub use pipeline::{Placed, PlacementPipeline};
pub use transform::{centered_anchor, fit_scale, place, PlacementTransform};
