//! Push-up bottom-position check
//!
//! In the down position the elbows sit below the shoulders: average elbow y
//! at least `pushup_elbow_drop` px greater than average shoulder y.

use super::require;
use crate::config::SessionConfig;
use crate::error::FrameError;
use crate::pose::{Keypoint, KeypointFrame};

pub fn in_pushup_position(frame: &KeypointFrame, cfg: &SessionConfig) -> Result<bool, FrameError> {
    let min = cfg.confidence_threshold;
    let left_shoulder = require(frame, Keypoint::LeftShoulder, min)?;
    let right_shoulder = require(frame, Keypoint::RightShoulder, min)?;
    let left_elbow = require(frame, Keypoint::LeftElbow, min)?;
    let right_elbow = require(frame, Keypoint::RightElbow, min)?;

    let shoulder_y = (left_shoulder.y + right_shoulder.y) / 2.0;
    let elbow_y = (left_elbow.y + right_elbow.y) / 2.0;

    Ok(elbow_y >= shoulder_y + cfg.pushup_elbow_drop)
}
