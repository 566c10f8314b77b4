//! Pose data model and geometry
//!
//! Frame/landmark types plus the pure math the classifiers run on.

mod frame;
mod geometry;

pub use frame::{Keypoint, KeypointFrame, Landmark, KEYPOINT_COUNT, VALUES_PER_KEYPOINT};
pub use geometry::{angle_degrees, slope};
