//! Rendering Boundary
//!
//! The scene graph computes per-node matrices and texture state and hands
//! them to an external renderer through [`NodeRenderer`]. The core never
//! touches graphics-API state itself: the collaborator binds the shape's
//! GPU resources and issues the draw call.

use glam::{Mat4, Vec4};

use crate::scene::Shape;

/// Opaque handle to a texture owned by the external renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Everything the external renderer needs to draw one node.
#[derive(Debug, Clone, Copy)]
pub struct NodeDraw<'a> {
    /// Geometry to bind and draw.
    pub shape: &'a Shape,
    /// Combined projection · view · model matrix.
    pub mvp: Mat4,
    /// Model matrix alone (world frame with this node's scale applied).
    pub model: Mat4,
    /// Node color. The collaborator decides how to apply it, typically by
    /// baking it into per-vertex colors.
    pub color: Vec4,
    /// Whether to sample the texture.
    pub use_texture: bool,
    /// Texture to bind when `use_texture` is set.
    pub texture: Option<TextureId>,
}

/// External draw capability invoked once per node with geometry during
/// [`crate::scene::SceneGraph::draw`] traversal.
pub trait NodeRenderer {
    fn draw_node(&mut self, draw: &NodeDraw<'_>);
}
