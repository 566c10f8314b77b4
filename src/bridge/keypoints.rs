//! Keypoint ingestion - JS bridge for pose frames
//!
//! The JS side runs MoveNet and pushes each detection result across as a
//! flat Float32Array (17 landmarks x x, y, score = 51 values). The parsed
//! frame is stored thread-locally for the session bridge and for debugging
//! getters; WASM is single-threaded so RefCell is all the locking we need.

use std::cell::RefCell;

use crate::error::FrameError;
use crate::pose::{KeypointFrame, KEYPOINT_COUNT, VALUES_PER_KEYPOINT};

thread_local! {
    static CURRENT_FRAME: RefCell<Option<KeypointFrame>> = RefCell::new(None);
}

/// Parse the wire format and store the frame. A wrong-length array means the
/// engine handed us garbage; the caller surfaces that as a transient status.
pub fn ingest(data: &[f32]) -> Result<KeypointFrame, FrameError> {
    let frame = KeypointFrame::from_flat(data).ok_or_else(|| FrameError::EngineFailure {
        reason: format!(
            "expected {} values, got {}",
            KEYPOINT_COUNT * VALUES_PER_KEYPOINT,
            data.len()
        ),
    })?;

    CURRENT_FRAME.with(|cell| {
        *cell.borrow_mut() = Some(frame.clone());
    });

    Ok(frame)
}

/// Last successfully ingested frame, if any
#[allow(dead_code)]
pub fn current_frame() -> Option<KeypointFrame> {
    CURRENT_FRAME.with(|cell| cell.borrow().clone())
}

/// Drop the stored frame (session teardown)
pub fn clear() {
    CURRENT_FRAME.with(|cell| {
        *cell.borrow_mut() = None;
    });
}
