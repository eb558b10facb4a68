//! Scene node.
//!
//! A node carries local transform components, a color, optional geometry
//! and texture state, and its hierarchy links. Transform components are
//! kept separate (translation vector, rotation matrix, scale vector)
//! because they compose differently for rendering and for frame queries:
//! rendering uses translate · rotate · scale, while the propagated frame a
//! node hands its children is translate · rotate only. A parent's
//! non-uniform scale must never distort child joint geometry.

use glam::{Mat4, Vec3, Vec4};

use crate::render::TextureId;
use crate::scene::NodeHandle;
use crate::scene::shape::Shape;

#[derive(Debug, Clone)]
pub struct Node {
    /// Local translation.
    pub translation: Vec3,
    /// Local rotation as a pure rotation matrix. Stored as a matrix rather
    /// than a quaternion so edit operations compose exactly and the
    /// serialized 16-float field round-trips bit-for-bit.
    pub rotation: Mat4,
    /// Local per-axis scale, applied only to this node's own geometry.
    pub scale: Vec3,
    /// RGBA color, default white.
    pub color: Vec4,
    /// Owned geometry reference, if any.
    pub shape: Option<Shape>,
    /// Texture bound by the external renderer when drawing this node.
    pub texture: Option<TextureId>,
    /// Whether the renderer should sample `texture`.
    pub use_texture: bool,

    pub(crate) parent: Option<NodeHandle>,
    pub(crate) children: Vec<NodeHandle>,
}

impl Node {
    #[must_use]
    pub fn new() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Mat4::IDENTITY,
            scale: Vec3::ONE,
            color: Vec4::ONE,
            shape: None,
            texture: None,
            use_texture: false,
            parent: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_shape(shape: Shape) -> Self {
        Self {
            shape: Some(shape),
            ..Self::new()
        }
    }

    /// Returns the parent handle, if any.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    /// Child handles in insertion order. Traversal and serialization both
    /// follow this order.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }

    /// Local frame: translate · rotate, no scale. This is what propagates
    /// to children during traversal.
    #[must_use]
    pub fn local_frame(&self) -> Mat4 {
        Mat4::from_translation(self.translation) * self.rotation
    }

    /// Local model matrix: translate · rotate · scale. Applied only to this
    /// node's own geometry.
    #[must_use]
    pub fn local_matrix(&self) -> Mat4 {
        self.local_frame() * Mat4::from_scale(self.scale)
    }

    // ========================================================================
    // Interactive edit operations
    // ========================================================================

    /// Post-multiplies an axis rotation onto the local rotation, matching
    /// the modeller's incremental rotate edits.
    pub fn rotate_about(&mut self, axis: Vec3, angle: f32) {
        self.rotation *= Mat4::from_axis_angle(axis, angle);
    }

    /// Offsets the local translation.
    pub fn translate_by(&mut self, delta: Vec3) {
        self.translation += delta;
    }

    /// Multiplies the local per-axis scale.
    pub fn scale_by(&mut self, factor: Vec3) {
        self.scale *= factor;
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}
