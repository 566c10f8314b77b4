//! Bicep curl flex check
//!
//! An arm is curled when the elbow angle (shoulder-elbow-wrist) closes below
//! the cutoff. Either arm being curled puts the body in position; each side
//! is evaluated independently so one occluded arm does not block the other.

use super::require;
use crate::config::SessionConfig;
use crate::error::FrameError;
use crate::pose::{angle_degrees, Keypoint, KeypointFrame};

/// One arm's verdict. Coincident joints make the elbow angle undefined.
fn arm_curled(
    frame: &KeypointFrame,
    shoulder: Keypoint,
    elbow: Keypoint,
    wrist: Keypoint,
    cfg: &SessionConfig,
) -> Result<bool, FrameError> {
    let min = cfg.confidence_threshold;
    let shoulder = require(frame, shoulder, min)?;
    let elbow = require(frame, elbow, min)?;
    let wrist = require(frame, wrist, min)?;

    angle_degrees(shoulder, elbow, wrist)
        .map(|angle| angle < cfg.curl_angle_cutoff)
        .ok_or(FrameError::DegenerateGeometry)
}

/// An undefined angle is never a curl; that side just reads "not curled"
fn settle(side: Result<bool, FrameError>) -> Result<bool, FrameError> {
    match side {
        Err(FrameError::DegenerateGeometry) => Ok(false),
        other => other,
    }
}

/// Errors only when neither arm is observable
pub fn in_curl_position(frame: &KeypointFrame, cfg: &SessionConfig) -> Result<bool, FrameError> {
    let left = settle(arm_curled(
        frame,
        Keypoint::LeftShoulder,
        Keypoint::LeftElbow,
        Keypoint::LeftWrist,
        cfg,
    ));
    let right = settle(arm_curled(
        frame,
        Keypoint::RightShoulder,
        Keypoint::RightElbow,
        Keypoint::RightWrist,
        cfg,
    ));

    match (left, right) {
        (Ok(l), Ok(r)) => Ok(l || r),
        (Ok(curled), Err(_)) | (Err(_), Ok(curled)) => Ok(curled),
        (Err(e), Err(_)) => Err(e),
    }
}
