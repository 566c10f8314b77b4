//! Browser smoke test for the JS bridge (run with wasm-pack test)

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use fitness_web::pose::{KEYPOINT_COUNT, VALUES_PER_KEYPOINT};

wasm_bindgen_test_configure!(run_in_browser);

/// Flat MoveNet-style frame: every landmark confident, squat geometry
/// controlled by the hip/knee y values.
fn squat_frame(hip_y: f32, knee_y: f32) -> Vec<f32> {
    let mut data = Vec::with_capacity(KEYPOINT_COUNT * VALUES_PER_KEYPOINT);
    for i in 0..KEYPOINT_COUNT {
        let y = match i {
            11 | 12 => hip_y,  // hips
            13 | 14 => knee_y, // knees
            _ => 10.0 * i as f32,
        };
        data.extend_from_slice(&[50.0 + 10.0 * i as f32, y, 0.9]);
    }
    data
}

#[wasm_bindgen_test]
fn squat_rep_counts_through_the_bridge() {
    fitness_web::end_session();
    fitness_web::select_exercise("squat").unwrap();
    assert_eq!(fitness_web::rep_count(), 0);

    // bottom of the squat, then stand back up
    fitness_web::process_frame(&squat_frame(300.0, 310.0), 100.0);
    assert!(fitness_web::in_position());
    fitness_web::process_frame(&squat_frame(200.0, 310.0), 1200.0);

    assert_eq!(fitness_web::rep_count(), 1);
    assert!(!fitness_web::in_position());

    fitness_web::reset_count();
    assert_eq!(fitness_web::rep_count(), 0);
    assert_eq!(fitness_web::active_exercise().as_deref(), Some("squat"));

    fitness_web::end_session();
    assert!(fitness_web::active_exercise().is_none());
}

#[wasm_bindgen_test]
fn malformed_frame_becomes_status_not_panic() {
    fitness_web::end_session();
    fitness_web::select_exercise("plank").unwrap();

    fitness_web::process_frame(&[1.0, 2.0, 3.0], 0.0);
    assert!(fitness_web::status_message().is_some());
    assert_eq!(fitness_web::plank_duration_ms(), 0.0);

    fitness_web::end_session();
}

#[wasm_bindgen_test]
fn unknown_exercise_is_rejected() {
    assert!(fitness_web::select_exercise("deadlift").is_err());
}
