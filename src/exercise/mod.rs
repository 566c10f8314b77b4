//! Exercise classifiers
//!
//! One geometric in-position predicate per exercise, plus the single shared
//! rep-counting rule: a rep completes on the falling edge (in position ->
//! out of position), so it counts when the motion returns to start, not when
//! the target is reached. Plank is the odd one out - it measures hold
//! duration, handled by the session controller over `plank::is_holding`.
//!
//! Predicates return `Result<bool, FrameError>`: a missing required landmark
//! is an error the caller recovers from by leaving all state untouched,
//! never by assuming a position.

pub mod bicep_curl;
pub mod plank;
pub mod pushup;
pub mod squat;

use crate::config::SessionConfig;
use crate::error::FrameError;
use crate::pose::{Keypoint, KeypointFrame, Landmark};

// ============================================================================
// EXERCISE KINDS
// ============================================================================

/// The supported exercises. Closed set - adding one is a code change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExerciseKind {
    Squat,
    PushUp,
    Plank,
    BicepCurl,
}

impl ExerciseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseKind::Squat => "squat",
            ExerciseKind::PushUp => "pushup",
            ExerciseKind::Plank => "plank",
            ExerciseKind::BicepCurl => "bicep-curl",
        }
    }

    /// Parse the identifier the JS control layer sends
    pub fn from_str(name: &str) -> Option<Self> {
        match name {
            "squat" => Some(ExerciseKind::Squat),
            "pushup" => Some(ExerciseKind::PushUp),
            "plank" => Some(ExerciseKind::Plank),
            "bicep-curl" => Some(ExerciseKind::BicepCurl),
            _ => None,
        }
    }

    /// Plank holds are timed, everything else is counted
    pub fn is_rep_based(&self) -> bool {
        !matches!(self, ExerciseKind::Plank)
    }
}

/// Confidence-gated lookup shared by all predicates
pub(crate) fn require(
    frame: &KeypointFrame,
    name: Keypoint,
    min_score: f32,
) -> Result<Landmark, FrameError> {
    frame
        .confident(name, min_score)
        .ok_or(FrameError::MissingLandmark(name))
}

// ============================================================================
// SHARED REP RULE
// ============================================================================

/// Rep-counting state for the active exercise
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RepState {
    /// Completed reps since selection/reset
    pub count: u32,
    /// Was the body in the loaded position on the last decidable frame?
    pub in_position: bool,
    /// Timestamp of the last counted rep, for debouncing
    pub last_rep_ms: Option<f64>,
}

/// In-position verdict for the active exercise on this frame
pub fn observe(
    kind: ExerciseKind,
    frame: &KeypointFrame,
    cfg: &SessionConfig,
) -> Result<bool, FrameError> {
    match kind {
        ExerciseKind::Squat => squat::in_squat_position(frame, cfg),
        ExerciseKind::PushUp => pushup::in_pushup_position(frame, cfg),
        ExerciseKind::BicepCurl => bicep_curl::in_curl_position(frame, cfg),
        ExerciseKind::Plank => plank::is_holding(frame, cfg),
    }
}

/// Public predicate view: undecidable frames read as "not in position"
pub fn is_in_target_position(
    kind: ExerciseKind,
    frame: &KeypointFrame,
    cfg: &SessionConfig,
) -> bool {
    observe(kind, frame, cfg).unwrap_or(false)
}

/// Advance the rep state machine by one frame.
///
/// `observation` is the predicate result for this frame; `None` (landmarks
/// unavailable) leaves the state untouched. A falling edge increments the
/// count by exactly one, unless it lands inside the debounce window - then
/// the position state still updates but the rep is discarded as jitter.
///
/// Returns the new state and whether a rep was counted this frame.
pub fn advance(
    observation: Option<bool>,
    prior: RepState,
    now_ms: f64,
    cfg: &SessionConfig,
) -> (RepState, bool) {
    let Some(in_position) = observation else {
        return (prior, false);
    };

    let mut next = prior;
    next.in_position = in_position;

    if prior.in_position && !in_position {
        let debounced = prior
            .last_rep_ms
            .is_some_and(|last| now_ms - last < cfg.rep_debounce_ms);
        if !debounced {
            next.count = prior.count + 1;
            next.last_rep_ms = Some(now_ms);
            return (next, true);
        }
    }

    (next, false)
}
