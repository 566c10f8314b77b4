//! Session configuration - all classification thresholds
//!
//! One canonical threshold table. The values are fixed at session start;
//! the JS host may override individual fields when constructing a session
//! but nothing mutates them mid-session.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Minimum landmark score to count as detected
    pub confidence_threshold: f32,
    /// Minimum confident landmarks before a frame is worth classifying
    pub min_valid_keypoints: usize,
    /// Squat: in position when avg hip y >= avg knee y - this offset (px)
    pub squat_depth_offset: f32,
    /// Push-up: in position when avg elbow y >= avg shoulder y + this drop (px)
    pub pushup_elbow_drop: f32,
    /// Bicep curl: arm counts as curled below this elbow angle (degrees)
    pub curl_angle_cutoff: f32,
    /// Plank: max difference between torso and leg abs-slopes
    pub plank_slope_tolerance: f32,
    /// Plank: shoulder may sit at most this far above the hip (px)
    pub plank_horizontal_tolerance: f32,
    /// Minimum interval between counted reps, any exercise (ms)
    pub rep_debounce_ms: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.3,
            min_valid_keypoints: 10,
            squat_depth_offset: 30.0,
            pushup_elbow_drop: 20.0,
            curl_angle_cutoff: 90.0,
            plank_slope_tolerance: 0.3,
            plank_horizontal_tolerance: 50.0,
            rep_debounce_ms: 1000.0,
        }
    }
}
