//! Squat depth check
//!
//! In position when the hips have dropped to knee level: average hip y at or
//! below a point `squat_depth_offset` px above the average knee y (image
//! coordinates, y grows downward).

use super::require;
use crate::config::SessionConfig;
use crate::error::FrameError;
use crate::pose::{Keypoint, KeypointFrame};

pub fn in_squat_position(frame: &KeypointFrame, cfg: &SessionConfig) -> Result<bool, FrameError> {
    let min = cfg.confidence_threshold;
    let left_hip = require(frame, Keypoint::LeftHip, min)?;
    let right_hip = require(frame, Keypoint::RightHip, min)?;
    let left_knee = require(frame, Keypoint::LeftKnee, min)?;
    let right_knee = require(frame, Keypoint::RightKnee, min)?;

    let hip_y = (left_hip.y + right_hip.y) / 2.0;
    let knee_y = (left_knee.y + right_knee.y) / 2.0;

    Ok(hip_y >= knee_y - cfg.squat_depth_offset)
}
