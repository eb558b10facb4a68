//! Playback Controller Tests
//!
//! Tests for:
//! - State transitions: play/record/stop/scrub gating
//! - Fixed-step ticking: one step per frame period, drift-free accumulator
//! - Terminal clamp to the last keyframe timestamp
//! - FrameRecorder numbering and reset

use std::fs;
use std::path::PathBuf;

use armature::{FrameRecorder, KeyframeStore, PlaybackSession, PlaybackState, SceneKey};

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("armature_{}_{name}", std::process::id()))
}

/// Scene keys at t = 0..=max, pitch ramping 0..=90.
fn store_to(max: f32) -> KeyframeStore {
    let mut store = KeyframeStore::new();
    store.push_scene_key(SceneKey {
        t: 0.0,
        lower_arm_pitch: 0.0,
        ..SceneKey::default()
    });
    store.push_scene_key(SceneKey {
        t: max,
        lower_arm_pitch: 90.0,
        ..SceneKey::default()
    });
    store
}

/// One animation unit per step, ten steps per second.
fn session() -> PlaybackSession {
    PlaybackSession::new(1.0, 0.1)
}

// ============================================================================
// Transitions
// ============================================================================

#[test]
fn play_requires_nonempty_store() {
    let mut s = session();
    assert!(!s.play(&KeyframeStore::new()));
    assert_eq!(s.state(), PlaybackState::Idle);

    assert!(s.play(&store_to(3.0)));
    assert_eq!(s.state(), PlaybackState::Playing);
}

#[test]
fn record_requires_nonempty_store() {
    let mut s = session();
    assert!(!s.record(&KeyframeStore::new()));
    assert!(s.record(&store_to(3.0)));
    assert_eq!(s.state(), PlaybackState::Recording);
    assert!(s.is_recording());
}

#[test]
fn play_resumes_from_scrub_time() {
    let store = store_to(10.0);
    let mut s = session();
    assert!(s.scrub(4.0));
    assert!(s.play(&store));

    let state = s.tick(0.0, &store).expect("first tick steps");
    assert!(approx(s.time(), 5.0), "4.0 scrub + one step, got {}", s.time());
    assert!(approx(state.scene.unwrap().lower_arm_pitch, 45.0));
}

#[test]
fn record_resets_time_to_zero() {
    let store = store_to(10.0);
    let mut s = session();
    s.scrub(7.0);
    assert!(s.record(&store));
    assert!(approx(s.time(), 0.0));
}

#[test]
fn scrub_rejected_while_playing() {
    let store = store_to(10.0);
    let mut s = session();
    s.play(&store);
    assert!(!s.scrub(2.0));
    assert!(approx(s.time(), 0.0));

    s.stop();
    assert!(s.scrub(2.0));
    assert!(approx(s.time(), 2.0));
}

#[test]
fn play_rejected_while_already_playing() {
    let store = store_to(10.0);
    let mut s = session();
    assert!(s.play(&store));
    assert!(!s.play(&store));
    assert!(!s.record(&store), "recording starts from Idle only");
}

#[test]
fn stop_goes_idle_and_keeps_time() {
    let store = store_to(10.0);
    let mut s = session();
    s.play(&store);
    s.tick(0.0, &store);
    s.tick(0.1, &store);
    let t = s.time();

    s.stop();
    assert_eq!(s.state(), PlaybackState::Idle);
    assert!(approx(s.time(), t), "pause keeps the stored time");
    assert!(s.tick(0.2, &store).is_none(), "idle ticks do nothing");
}

// ============================================================================
// Fixed-step Ticking
// ============================================================================

#[test]
fn tick_steps_once_per_frame_period() {
    let store = store_to(100.0);
    let mut s = session();
    s.play(&store);

    assert!(s.tick(0.0, &store).is_some(), "first tick steps immediately");
    assert!(approx(s.time(), 1.0));

    assert!(s.tick(0.05, &store).is_none(), "period not yet elapsed");
    assert!(approx(s.time(), 1.0));

    assert!(s.tick(0.1, &store).is_some());
    assert!(approx(s.time(), 2.0));
}

#[test]
fn tick_takes_at_most_one_step_per_call() {
    let store = store_to(100.0);
    let mut s = session();
    s.play(&store);
    s.tick(0.0, &store);

    // A long stall is worth many periods, but only one step is taken;
    // the backlog drains over subsequent calls.
    assert!(s.tick(5.0, &store).is_some());
    assert!(approx(s.time(), 2.0));
    assert!(s.tick(5.0, &store).is_some());
    assert!(approx(s.time(), 3.0));
}

#[test]
fn tick_applies_evaluated_state() {
    let store = store_to(10.0);
    let mut s = session();
    s.play(&store);

    s.tick(0.0, &store);
    let state = s.tick(0.1, &store).unwrap();
    assert!(approx(state.scene.unwrap().lower_arm_pitch, 18.0)); // t=2 of 10
}

// ============================================================================
// Terminal Clamp
// ============================================================================

#[test]
fn playback_stops_clamped_at_max_timestamp() {
    let store = store_to(3.0);
    let mut s = session();
    s.play(&store);

    s.tick(0.0, &store); // t=1
    s.tick(0.1, &store); // t=2
    s.tick(0.2, &store); // t=3 == max, still playing
    assert_eq!(s.state(), PlaybackState::Playing);
    assert!(approx(s.time(), 3.0));

    // The next step would pass the end: clamp, evaluate, go idle
    let last = s.tick(0.3, &store).expect("terminal tick still evaluates");
    assert_eq!(s.state(), PlaybackState::Idle);
    assert!(approx(s.time(), 3.0), "time never exceeds the maximum");
    assert!(approx(last.scene.unwrap().lower_arm_pitch, 90.0));

    assert!(s.tick(0.4, &store).is_none());
}

#[test]
fn recording_also_stops_at_end() {
    let store = store_to(1.0);
    let mut s = session();
    s.record(&store);

    s.tick(0.0, &store); // t=1 == max
    assert!(s.is_recording());
    s.tick(0.1, &store); // clamp, idle
    assert_eq!(s.state(), PlaybackState::Idle);
    assert!(!s.is_recording());
}

// ============================================================================
// Frame Recorder
// ============================================================================

#[test]
fn recorder_numbers_frames_sequentially() {
    let dir = temp_dir("frames_seq");
    fs::remove_dir_all(&dir).ok();
    let mut rec = FrameRecorder::new(&dir);
    assert_eq!(rec.next_index(), 0);

    let pixels = vec![255u8; 2 * 2 * 3];
    let p0 = rec.capture(2, 2, &pixels).unwrap();
    let p1 = rec.capture(2, 2, &pixels).unwrap();

    assert!(p0.ends_with("frame_0000.bmp"));
    assert!(p1.ends_with("frame_0001.bmp"));
    assert!(p0.exists() && p1.exists());
    assert_eq!(rec.next_index(), 2);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn recorder_creates_output_dir_on_first_use() {
    let dir = temp_dir("frames_dir");
    fs::remove_dir_all(&dir).ok();
    assert!(!dir.exists());

    let mut rec = FrameRecorder::new(&dir);
    let pixels = vec![0u8; 4 * 4 * 3];
    rec.capture(4, 4, &pixels).unwrap();
    assert!(dir.is_dir());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn recorder_reset_rewinds_numbering() {
    let dir = temp_dir("frames_reset");
    fs::remove_dir_all(&dir).ok();
    let mut rec = FrameRecorder::new(&dir);

    let pixels = vec![128u8; 3];
    rec.capture(1, 1, &pixels).unwrap();
    rec.capture(1, 1, &pixels).unwrap();
    rec.reset();
    assert_eq!(rec.next_index(), 0);

    let p = rec.capture(1, 1, &pixels).unwrap();
    assert!(p.ends_with("frame_0000.bmp"));

    fs::remove_dir_all(&dir).ok();
}
