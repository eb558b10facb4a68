#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

//! Scene-graph and keyframe-animation core for an interactive 3D scene
//! editor/viewer.
//!
//! The crate owns the hierarchical node model (transform composition,
//! world-frame queries, text serialization), the keyframe store and its
//! evaluator (Bezier camera paths, piecewise-linear scene parameters), a
//! robot-arm articulated figure, and the frame-locked playback/record state
//! machine. Rendering, tessellation and window/input plumbing live outside:
//! the graph hands per-node matrices and texture state across the
//! [`render::NodeRenderer`] boundary, and shape vertex data is supplied by
//! an external tessellator.

pub mod animation;
pub mod errors;
pub mod figure;
pub mod render;
pub mod scene;

pub use animation::{
    AnimationState, CameraKey, FrameRecorder, KeyframeStore, PlaybackSession, PlaybackState,
    SceneKey, bezier_point, camera_path_polyline,
};
pub use errors::{ArmatureError, Result};
pub use figure::RobotArm;
pub use render::{NodeDraw, NodeRenderer, TextureId};
pub use scene::{Node, NodeHandle, SceneGraph, Shape, ShapeKind};
