//! Session controller - owns the active exercise and its counters
//!
//! One controller per workout session. Frames arrive one at a time from the
//! capture loop; the controller dispatches to the active classifier, holds
//! the rep/plank state the classifiers themselves never own, and reports a
//! `StatsUpdate` whenever something the display layer cares about changed.

use serde::Serialize;

use crate::config::SessionConfig;
use crate::exercise::{self, plank, ExerciseKind, RepState};
use crate::pose::KeypointFrame;

// ============================================================================
// DISPLAY-LAYER NOTIFICATION
// ============================================================================

/// Snapshot handed to the display layer on change. The controller never
/// formats or renders; JS decides how to show it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatsUpdate {
    pub exercise: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plank_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<&'static str>,
}

impl StatsUpdate {
    fn reps(kind: ExerciseKind, count: u32, feedback: Option<&'static str>) -> Self {
        Self {
            exercise: kind.as_str(),
            reps: Some(count),
            plank_ms: None,
            feedback,
        }
    }

    fn plank(duration_ms: f64, feedback: Option<&'static str>) -> Self {
        Self {
            exercise: ExerciseKind::Plank.as_str(),
            reps: None,
            plank_ms: Some(duration_ms),
            feedback,
        }
    }
}

/// Prompt shown on reaching the loaded position (rep exercises only; the
/// plank path emits its own hold messages)
fn entry_prompt(kind: ExerciseKind) -> Option<&'static str> {
    match kind {
        ExerciseKind::Squat => Some("Good! Now stand up"),
        ExerciseKind::PushUp => Some("Good! Now push up"),
        ExerciseKind::BicepCurl => Some("Good! Now lower slowly"),
        ExerciseKind::Plank => None,
    }
}

// ============================================================================
// PLANK HOLD STATE
// ============================================================================

/// {NotHolding, Holding} with a continuously sampled duration while holding
#[derive(Clone, Copy, Debug, Default)]
struct PlankState {
    holding: bool,
    start_ms: f64,
    duration_ms: f64,
}

impl PlankState {
    fn clear(&mut self) {
        *self = Self::default();
    }
}

// ============================================================================
// CONTROLLER
// ============================================================================

pub struct SessionController {
    config: SessionConfig,
    active: Option<ExerciseKind>,
    reps: RepState,
    plank: PlankState,
}

impl SessionController {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            active: None,
            reps: RepState::default(),
            plank: PlankState::default(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn active_exercise(&self) -> Option<ExerciseKind> {
        self.active
    }

    pub fn rep_count(&self) -> u32 {
        self.reps.count
    }

    /// Current hold duration; 0 whenever not holding
    pub fn plank_duration_ms(&self) -> f64 {
        self.plank.duration_ms
    }

    pub fn in_position(&self) -> bool {
        match self.active {
            Some(ExerciseKind::Plank) => self.plank.holding,
            Some(_) => self.reps.in_position,
            None => false,
        }
    }

    /// Switch the active exercise. Count and body state never survive a
    /// switch, even when re-selecting the same exercise.
    pub fn select_exercise(&mut self, kind: ExerciseKind) -> StatsUpdate {
        self.active = Some(kind);
        self.reps = RepState::default();
        self.plank.clear();

        if kind == ExerciseKind::Plank {
            StatsUpdate::plank(0.0, None)
        } else {
            StatsUpdate::reps(kind, 0, None)
        }
    }

    /// Zero the counter without changing the selected exercise. Idempotent.
    pub fn reset_count(&mut self) -> Option<StatsUpdate> {
        let kind = self.active?;
        self.reps = RepState::default();
        self.plank.clear();

        Some(if kind == ExerciseKind::Plank {
            StatsUpdate::plank(0.0, Some("Counter reset"))
        } else {
            StatsUpdate::reps(kind, 0, Some("Counter reset"))
        })
    }

    /// Process one frame. Returns an update only when the displayed count,
    /// body state or plank duration changed; frames with no exercise
    /// selected or too few confident landmarks are no-ops.
    pub fn on_frame(&mut self, frame: &KeypointFrame, now_ms: f64) -> Option<StatsUpdate> {
        let kind = self.active?;

        if frame.confident_count(self.config.confidence_threshold) < self.config.min_valid_keypoints
        {
            return None;
        }

        match kind {
            ExerciseKind::Plank => self.advance_plank(frame, now_ms),
            _ => self.advance_reps(kind, frame, now_ms),
        }
    }

    fn advance_reps(
        &mut self,
        kind: ExerciseKind,
        frame: &KeypointFrame,
        now_ms: f64,
    ) -> Option<StatsUpdate> {
        // an undecidable frame (missing landmarks) advances nothing
        let observation = exercise::observe(kind, frame, &self.config).ok();
        let (next, _counted) = exercise::advance(observation, self.reps, now_ms, &self.config);

        let entered_position = next.in_position && !self.reps.in_position;
        let changed = next.count != self.reps.count || next.in_position != self.reps.in_position;
        self.reps = next;

        let feedback = entered_position.then(|| entry_prompt(kind));
        changed.then(|| StatsUpdate::reps(kind, next.count, feedback.flatten()))
    }

    fn advance_plank(&mut self, frame: &KeypointFrame, now_ms: f64) -> Option<StatsUpdate> {
        match plank::is_holding(frame, &self.config).ok()? {
            true if !self.plank.holding => {
                self.plank = PlankState {
                    holding: true,
                    start_ms: now_ms,
                    duration_ms: 0.0,
                };
                Some(StatsUpdate::plank(0.0, Some("Plank position detected")))
            }
            true => {
                self.plank.duration_ms = now_ms - self.plank.start_ms;
                Some(StatsUpdate::plank(self.plank.duration_ms, None))
            }
            false if self.plank.holding => {
                // freeze the duration at its last computed value, then reset;
                // time between the last holding frame and the loss frame
                // (e.g. an occlusion gap) was never held
                let held_ms = self.plank.duration_ms;
                self.plank.clear();
                Some(StatsUpdate::plank(held_ms, Some("Plank position lost")))
            }
            false => None,
        }
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::{Keypoint, Landmark, KEYPOINT_COUNT};

    fn lm(x: f32, y: f32) -> Landmark {
        Landmark { x, y, score: 0.9 }
    }

    /// All 17 landmarks detected, spread out so nothing is degenerate
    fn full_frame() -> KeypointFrame {
        let mut frame = KeypointFrame::empty();
        for i in 0..KEYPOINT_COUNT {
            let name = match i {
                0 => Keypoint::Nose,
                1 => Keypoint::LeftEye,
                2 => Keypoint::RightEye,
                3 => Keypoint::LeftEar,
                4 => Keypoint::RightEar,
                5 => Keypoint::LeftShoulder,
                6 => Keypoint::RightShoulder,
                7 => Keypoint::LeftElbow,
                8 => Keypoint::RightElbow,
                9 => Keypoint::LeftWrist,
                10 => Keypoint::RightWrist,
                11 => Keypoint::LeftHip,
                12 => Keypoint::RightHip,
                13 => Keypoint::LeftKnee,
                14 => Keypoint::RightKnee,
                15 => Keypoint::LeftAnkle,
                _ => Keypoint::RightAnkle,
            };
            frame.set(name, lm(10.0 * i as f32, 5.0 * i as f32));
        }
        frame
    }

    fn squat_frame(hip_y: f32, knee_y: f32) -> KeypointFrame {
        let mut frame = full_frame();
        frame.set(Keypoint::LeftHip, lm(100.0, hip_y));
        frame.set(Keypoint::RightHip, lm(110.0, hip_y));
        frame.set(Keypoint::LeftKnee, lm(100.0, knee_y));
        frame.set(Keypoint::RightKnee, lm(110.0, knee_y));
        frame
    }

    fn plank_frame(holding: bool) -> KeypointFrame {
        let mut frame = full_frame();
        // holding: flat shoulder-hip-ankle line; lost: hips sag while the
        // legs stay flat, breaking the slope match
        let (hip_y, ankle_y) = if holding { (205.0, 212.0) } else { (240.0, 245.0) };
        frame.set(Keypoint::LeftShoulder, lm(100.0, 200.0));
        frame.set(Keypoint::RightShoulder, lm(105.0, 200.0));
        frame.set(Keypoint::LeftHip, lm(200.0, hip_y));
        frame.set(Keypoint::RightHip, lm(205.0, hip_y));
        frame.set(Keypoint::LeftAnkle, lm(300.0, ankle_y));
        frame.set(Keypoint::RightAnkle, lm(305.0, ankle_y));
        frame
    }

    #[test]
    fn test_no_exercise_selected_is_noop() {
        let mut session = SessionController::default();
        assert!(session.on_frame(&squat_frame(300.0, 310.0), 0.0).is_none());
        assert_eq!(session.rep_count(), 0);
    }

    #[test]
    fn test_sparse_frame_is_noop() {
        let mut session = SessionController::default();
        session.select_exercise(ExerciseKind::Squat);

        // only 4 confident landmarks, below the minimum of 10
        let mut sparse = KeypointFrame::empty();
        sparse.set(Keypoint::LeftHip, lm(100.0, 300.0));
        sparse.set(Keypoint::RightHip, lm(110.0, 300.0));
        sparse.set(Keypoint::LeftKnee, lm(100.0, 310.0));
        sparse.set(Keypoint::RightKnee, lm(110.0, 310.0));

        assert!(session.on_frame(&sparse, 0.0).is_none());
        assert!(!session.in_position());
    }

    #[test]
    fn test_squat_cycle_counts_one_rep() {
        let mut session = SessionController::default();
        session.select_exercise(ExerciseKind::Squat);

        // hip 300 >= knee 310 - 30: in squat position
        let update = session.on_frame(&squat_frame(300.0, 310.0), 100.0).unwrap();
        assert_eq!(update.reps, Some(0));
        assert!(session.in_position());

        // holding the bottom produces no further updates
        assert!(session.on_frame(&squat_frame(300.0, 310.0), 200.0).is_none());

        // standing back up (hip 200 < 280) completes the rep
        let update = session.on_frame(&squat_frame(200.0, 310.0), 300.0).unwrap();
        assert_eq!(update.reps, Some(1));
        assert_eq!(session.rep_count(), 1);
        assert!(!session.in_position());
    }

    #[test]
    fn test_entering_position_emits_prompt() {
        let mut session = SessionController::default();
        session.select_exercise(ExerciseKind::Squat);

        // reaching the bottom prompts the return movement
        let update = session.on_frame(&squat_frame(300.0, 310.0), 100.0).unwrap();
        assert_eq!(update.feedback, Some("Good! Now stand up"));
        assert_eq!(update.reps, Some(0));

        // completing the rep reports the count, no entry prompt
        let update = session.on_frame(&squat_frame(200.0, 310.0), 1200.0).unwrap();
        assert_eq!(update.feedback, None);
        assert_eq!(update.reps, Some(1));
    }

    #[test]
    fn test_entry_prompts_per_exercise() {
        assert_eq!(entry_prompt(ExerciseKind::Squat), Some("Good! Now stand up"));
        assert_eq!(entry_prompt(ExerciseKind::PushUp), Some("Good! Now push up"));
        assert_eq!(
            entry_prompt(ExerciseKind::BicepCurl),
            Some("Good! Now lower slowly")
        );
        assert_eq!(entry_prompt(ExerciseKind::Plank), None);
    }

    #[test]
    fn test_selecting_exercise_resets_state() {
        let mut session = SessionController::default();
        session.select_exercise(ExerciseKind::Squat);
        session.on_frame(&squat_frame(300.0, 310.0), 100.0);
        session.on_frame(&squat_frame(200.0, 310.0), 1200.0);
        assert_eq!(session.rep_count(), 1);

        let update = session.select_exercise(ExerciseKind::PushUp);
        assert_eq!(update.reps, Some(0));
        assert_eq!(session.rep_count(), 0);
        assert!(!session.in_position());
    }

    #[test]
    fn test_reset_count_is_idempotent() {
        let mut session = SessionController::default();
        assert!(session.reset_count().is_none());

        session.select_exercise(ExerciseKind::Squat);
        session.on_frame(&squat_frame(300.0, 310.0), 100.0);
        session.on_frame(&squat_frame(200.0, 310.0), 1200.0);
        assert_eq!(session.rep_count(), 1);

        let first = session.reset_count().unwrap();
        let second = session.reset_count().unwrap();
        assert_eq!(first, second);
        assert_eq!(session.rep_count(), 0);
        assert_eq!(session.active_exercise(), Some(ExerciseKind::Squat));
    }

    #[test]
    fn test_plank_hold_and_loss() {
        let mut session = SessionController::default();
        session.select_exercise(ExerciseKind::Plank);

        // entering the hold
        let update = session.on_frame(&plank_frame(true), 1_000.0).unwrap();
        assert_eq!(update.feedback, Some("Plank position detected"));
        assert!(session.in_position());

        // duration tracks elapsed time from entry
        let update = session.on_frame(&plank_frame(true), 4_000.0).unwrap();
        assert_eq!(update.plank_ms, Some(3_000.0));
        assert_eq!(session.plank_duration_ms(), 3_000.0);

        // losing the hold freezes the duration at its last computed value
        let update = session.on_frame(&plank_frame(false), 5_000.0).unwrap();
        assert_eq!(update.feedback, Some("Plank position lost"));
        assert_eq!(update.plank_ms, Some(3_000.0));
        assert_eq!(session.plank_duration_ms(), 0.0);
        assert!(!session.in_position());

        // re-entering restarts from zero, nothing carries across the gap
        let update = session.on_frame(&plank_frame(true), 9_000.0).unwrap();
        assert_eq!(update.plank_ms, Some(0.0));
        let update = session.on_frame(&plank_frame(true), 10_000.0).unwrap();
        assert_eq!(update.plank_ms, Some(1_000.0));
    }

    #[test]
    fn test_plank_gap_before_loss_does_not_inflate_duration() {
        let mut session = SessionController::default();
        session.select_exercise(ExerciseKind::Plank);

        // hold entered at 1s, last confirmed holding frame at 2s
        session.on_frame(&plank_frame(true), 1_000.0).unwrap();
        let update = session.on_frame(&plank_frame(true), 2_000.0).unwrap();
        assert_eq!(update.plank_ms, Some(1_000.0));

        // long stretch of undecidable frames (landmarks occluded)
        let occluded = KeypointFrame::empty();
        for t in [10_000.0, 20_000.0, 40_000.0] {
            assert!(session.on_frame(&occluded, t).is_none());
        }

        // the loss event reports only time actually confirmed holding
        let update = session.on_frame(&plank_frame(false), 50_000.0).unwrap();
        assert_eq!(update.feedback, Some("Plank position lost"));
        assert_eq!(update.plank_ms, Some(1_000.0));
    }

    #[test]
    fn test_plank_staying_out_of_position_is_silent() {
        let mut session = SessionController::default();
        session.select_exercise(ExerciseKind::Plank);
        assert!(session.on_frame(&plank_frame(false), 100.0).is_none());
        assert!(session.on_frame(&plank_frame(false), 200.0).is_none());
    }
}
