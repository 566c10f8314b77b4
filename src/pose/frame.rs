//! Keypoint frame - one snapshot of pose landmarks
//!
//! The pose engine (MoveNet single-pose) emits 17 named landmarks per video
//! frame. A frame stores them indexed by name; a landmark the engine failed
//! to detect is simply absent, never a fabricated position.

// ============================================================================
// KEYPOINT VOCABULARY (MoveNet / COCO 17-point layout)
// ============================================================================

/// Keypoint names in MoveNet output order, so the flat-array index is the name
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Keypoint {
    Nose = 0,
    LeftEye = 1,
    RightEye = 2,
    LeftEar = 3,
    RightEar = 4,
    LeftShoulder = 5,
    RightShoulder = 6,
    LeftElbow = 7,
    RightElbow = 8,
    LeftWrist = 9,
    RightWrist = 10,
    LeftHip = 11,
    RightHip = 12,
    LeftKnee = 13,
    RightKnee = 14,
    LeftAnkle = 15,
    RightAnkle = 16,
}

/// Total landmarks per frame
pub const KEYPOINT_COUNT: usize = 17;

/// Floats per landmark on the wire (x, y, score)
pub const VALUES_PER_KEYPOINT: usize = 3;

// ============================================================================
// LANDMARK DATA STRUCTURE
// ============================================================================

/// A single 2D landmark observation in image coordinates (y grows downward)
#[derive(Clone, Copy, Debug, Default)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    /// Detection confidence, 0-1
    pub score: f32,
}

/// All landmarks for one capture instant
#[derive(Clone, Debug, Default)]
pub struct KeypointFrame {
    landmarks: [Option<Landmark>; KEYPOINT_COUNT],
}

impl KeypointFrame {
    /// Build a frame from the flat array JS pushes across the boundary:
    /// 17 landmarks x (x, y, score) = 51 floats in MoveNet order.
    pub fn from_flat(data: &[f32]) -> Option<Self> {
        if data.len() != KEYPOINT_COUNT * VALUES_PER_KEYPOINT {
            return None;
        }

        let mut landmarks = [None; KEYPOINT_COUNT];
        for (i, slot) in landmarks.iter_mut().enumerate() {
            *slot = Some(Landmark {
                x: data[i * VALUES_PER_KEYPOINT],
                y: data[i * VALUES_PER_KEYPOINT + 1],
                score: data[i * VALUES_PER_KEYPOINT + 2],
            });
        }

        Some(Self { landmarks })
    }

    /// Frame with every landmark missing (engine returned nothing usable)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Insert or replace one landmark (test scaffolding and partial frames)
    pub fn set(&mut self, name: Keypoint, landmark: Landmark) {
        self.landmarks[name as usize] = Some(landmark);
    }

    /// Raw lookup by name, ignoring confidence
    pub fn get(&self, name: Keypoint) -> Option<Landmark> {
        self.landmarks[name as usize]
    }

    /// Lookup gated on confidence: absent or below-threshold landmarks are
    /// both "unknown" to consumers.
    pub fn confident(&self, name: Keypoint, min_score: f32) -> Option<Landmark> {
        self.get(name).filter(|lm| lm.score >= min_score)
    }

    /// Number of landmarks at or above the confidence threshold
    pub fn confident_count(&self, min_score: f32) -> usize {
        self.landmarks
            .iter()
            .flatten()
            .filter(|lm| lm.score >= min_score)
            .count()
    }
}
