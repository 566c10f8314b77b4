//! Session bridge - wasm_bindgen entry points for the workout session
//!
//! Holds the one `SessionController` for the page in thread-local storage
//! (WASM is single-threaded) and translates between the JS control surface
//! and the pure Rust core. JS drives the loop:
//! `process_frame` per detection result, then polls the getters or reads
//! `last_update` for the change notification.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use super::keypoints;
use crate::config::SessionConfig;
use crate::exercise::ExerciseKind;
use crate::session::{SessionController, StatsUpdate};

struct BridgeState {
    session: SessionController,
    /// Most recent change notification, consumed by `last_update`
    last_update: Option<StatsUpdate>,
    /// Transient status line ("Move into frame properly", engine faults)
    status: Option<String>,
}

impl Default for BridgeState {
    fn default() -> Self {
        Self {
            session: SessionController::default(),
            last_update: None,
            status: None,
        }
    }
}

thread_local! {
    static BRIDGE: RefCell<BridgeState> = RefCell::new(BridgeState::default());
}

/// Rebuild the session with overridden thresholds. Accepts a plain JS object
/// with any subset of the SessionConfig fields; call before selecting an
/// exercise.
#[wasm_bindgen]
pub fn configure_session(config: JsValue) -> Result<(), JsValue> {
    let config: SessionConfig =
        serde_wasm_bindgen::from_value(config).map_err(|e| JsValue::from_str(&e.to_string()))?;

    BRIDGE.with(|cell| {
        *cell.borrow_mut() = BridgeState {
            session: SessionController::new(config),
            last_update: None,
            status: None,
        };
    });
    Ok(())
}

/// Select the active exercise: "squat", "pushup", "plank" or "bicep-curl".
/// Resets the counter and body state.
#[wasm_bindgen]
pub fn select_exercise(name: &str) -> Result<(), JsValue> {
    let kind = ExerciseKind::from_str(name)
        .ok_or_else(|| JsValue::from_str(&format!("unknown exercise: {name}")))?;

    BRIDGE.with(|cell| {
        let mut state = cell.borrow_mut();
        let update = state.session.select_exercise(kind);
        state.last_update = Some(update);
        state.status = None;
    });
    Ok(())
}

/// Zero the rep counter (and plank duration) for the current exercise
#[wasm_bindgen]
pub fn reset_count() {
    BRIDGE.with(|cell| {
        let mut state = cell.borrow_mut();
        if let Some(update) = state.session.reset_count() {
            state.last_update = Some(update);
        }
    });
}

/// Feed one pose-engine result: 51 floats (x, y, score per landmark in
/// MoveNet order) plus the capture timestamp in milliseconds
/// (performance.now()). Never throws - bad frames become a status message.
#[wasm_bindgen]
pub fn process_frame(data: &[f32], timestamp_ms: f64) {
    let frame = match keypoints::ingest(data) {
        Ok(frame) => frame,
        Err(err) => {
            web_sys::console::warn_1(&format!("skipping frame: {err}").into());
            BRIDGE.with(|cell| {
                cell.borrow_mut().status = Some(err.to_string());
            });
            return;
        }
    };

    BRIDGE.with(|cell| {
        let mut state = cell.borrow_mut();

        let sparse = state.session.active_exercise().is_some()
            && frame.confident_count(state.session.config().confidence_threshold)
                < state.session.config().min_valid_keypoints;
        state.status = sparse.then(|| "Move into frame properly".to_string());

        if let Some(update) = state.session.on_frame(&frame, timestamp_ms) {
            state.last_update = Some(update);
        }
    });
}

/// Rep count for the active exercise
#[wasm_bindgen]
pub fn rep_count() -> u32 {
    BRIDGE.with(|cell| cell.borrow().session.rep_count())
}

/// Current plank hold duration in ms; 0 when not holding
#[wasm_bindgen]
pub fn plank_duration_ms() -> f64 {
    BRIDGE.with(|cell| cell.borrow().session.plank_duration_ms())
}

/// Is the body currently in the exercise's loaded position?
#[wasm_bindgen]
pub fn in_position() -> bool {
    BRIDGE.with(|cell| cell.borrow().session.in_position())
}

/// Identifier of the active exercise, if one is selected
#[wasm_bindgen]
pub fn active_exercise() -> Option<String> {
    BRIDGE.with(|cell| {
        cell.borrow()
            .session
            .active_exercise()
            .map(|kind| kind.as_str().to_string())
    })
}

/// Take the latest change notification as a JS object
/// `{ exercise, reps?, plank_ms?, feedback? }`, or undefined when nothing
/// changed since the last call.
#[wasm_bindgen]
pub fn last_update() -> JsValue {
    BRIDGE.with(|cell| {
        let mut state = cell.borrow_mut();
        match state.last_update.take() {
            Some(update) => {
                serde_wasm_bindgen::to_value(&update).unwrap_or(JsValue::UNDEFINED)
            }
            None => JsValue::UNDEFINED,
        }
    })
}

/// Transient status line for the display layer, or undefined
#[wasm_bindgen]
pub fn status_message() -> Option<String> {
    BRIDGE.with(|cell| cell.borrow().status.clone())
}

/// Tear the session down (page navigation); drops all state
#[wasm_bindgen]
pub fn end_session() {
    keypoints::clear();
    BRIDGE.with(|cell| {
        *cell.borrow_mut() = BridgeState::default();
    });
}
