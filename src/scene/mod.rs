//! Scene Graph Module
//!
//! Manages the editor's node hierarchy:
//! - [`Node`]: a node carrying local transforms, color, optional geometry
//!   and texture state
//! - [`Shape`]: geometry reference populated by the external tessellator
//! - [`SceneGraph`]: arena-backed node tree with traversal, centroid,
//!   world-frame queries and text persistence
//! - [`io`]: the line-oriented scene file format and its lenient parsers

pub mod graph;
pub mod io;
pub mod node;
pub mod shape;

pub use graph::SceneGraph;
pub use node::Node;
pub use shape::{Shape, ShapeKind};

use slotmap::new_key_type;

new_key_type! {
    /// Stable handle into a [`SceneGraph`]'s node arena. Handles are
    /// invalidated when the owning graph is cleared or dropped; a stale
    /// handle simply fails to resolve.
    pub struct NodeHandle;
}
