//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod keypoints;
mod session_bridge;

pub use keypoints::{clear, current_frame, ingest};

pub use session_bridge::{
    active_exercise, configure_session, end_session, in_position, last_update,
    plank_duration_ms, process_frame, rep_count, reset_count, select_exercise, status_message,
};
