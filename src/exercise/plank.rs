//! Plank hold check
//!
//! A good plank keeps shoulders, hips and ankles on one line. We compare the
//! torso slope (shoulder to hip) with the leg slope (hip to ankle) per side;
//! the body counts as straight when the absolute slopes agree within
//! tolerance on at least one side. A horizontal gate (shoulders not far
//! above hips on either side) rejects standing upright, which also has a
//! straight body line.

use super::require;
use crate::config::SessionConfig;
use crate::error::FrameError;
use crate::pose::{slope, Keypoint, KeypointFrame};

pub fn is_holding(frame: &KeypointFrame, cfg: &SessionConfig) -> Result<bool, FrameError> {
    let min = cfg.confidence_threshold;
    let left_shoulder = require(frame, Keypoint::LeftShoulder, min)?;
    let right_shoulder = require(frame, Keypoint::RightShoulder, min)?;
    let left_hip = require(frame, Keypoint::LeftHip, min)?;
    let right_hip = require(frame, Keypoint::RightHip, min)?;
    let left_ankle = require(frame, Keypoint::LeftAnkle, min)?;
    let right_ankle = require(frame, Keypoint::RightAnkle, min)?;

    let left_torso = slope(left_shoulder, left_hip).abs();
    let left_legs = slope(left_hip, left_ankle).abs();
    let right_torso = slope(right_shoulder, right_hip).abs();
    let right_legs = slope(right_hip, right_ankle).abs();

    let left_aligned = (left_torso - left_legs).abs() < cfg.plank_slope_tolerance;
    let right_aligned = (right_torso - right_legs).abs() < cfg.plank_slope_tolerance;

    let horizontal = left_shoulder.y > left_hip.y - cfg.plank_horizontal_tolerance
        && right_shoulder.y > right_hip.y - cfg.plank_horizontal_tolerance;

    Ok((left_aligned || right_aligned) && horizontal)
}
