//! Per-frame fault taxonomy
//!
//! Nothing here is fatal: every variant has a defined fallback of "skip this
//! frame". The bridge logs the fault and surfaces a transient status string;
//! the core never panics on bad input.

use thiserror::Error;

use crate::pose::Keypoint;

#[derive(Debug, Error, PartialEq)]
pub enum FrameError {
    /// A required landmark is absent or below the confidence threshold
    #[error("required landmark {0:?} not detected this frame")]
    MissingLandmark(Keypoint),

    /// Coincident points made an angle/slope undefined
    #[error("degenerate geometry: zero-length limb segment")]
    DegenerateGeometry,

    /// The pose engine delivered something unusable
    #[error("pose engine failure: {reason}")]
    EngineFailure { reason: String },
}
