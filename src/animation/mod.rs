//! Keyframe Animation Module
//!
//! - [`CameraKey`] / [`SceneKey`]: timestamped snapshots of camera pose and
//!   scene parameters
//! - [`KeyframeStore`]: ordered key sequences with text persistence
//! - [`bezier`]: Bernstein-basis curve evaluation for camera paths
//! - [`evaluator`]: time → interpolated [`AnimationState`]
//! - [`PlaybackSession`]: frame-locked play/record state machine
//! - [`FrameRecorder`]: numbered frame capture to disk

pub mod bezier;
pub mod evaluator;
pub mod keys;
pub mod playback;
pub mod recorder;
pub mod store;

pub use bezier::{bezier_point, camera_path_polyline};
pub use evaluator::AnimationState;
pub use keys::{CameraKey, SceneKey};
pub use playback::{PlaybackSession, PlaybackState};
pub use recorder::FrameRecorder;
pub use store::KeyframeStore;
