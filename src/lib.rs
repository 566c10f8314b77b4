//! Fitness Web - Webcam Rep Counting Trainer
//!
//! WASM core for pose-based exercise tracking. JavaScript owns the camera,
//! the MoveNet pose model and the DOM; this crate owns the classification:
//! per-frame geometric checks and the rep/hold state machines for squat,
//! push-up, plank and bicep curl.
//!
//! lib.rs only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules

mod bridge;
pub mod config;
pub mod error;
pub mod exercise;
pub mod pose;
pub mod session;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    active_exercise, configure_session, end_session, in_position, last_update,
    plank_duration_ms, process_frame, rep_count, reset_count, select_exercise, status_message,
};

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    console_log!("fitness-web core loaded");
}
