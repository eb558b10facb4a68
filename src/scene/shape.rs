//! Shape geometry references.
//!
//! Tessellation is an external concern: the collaborator that generates
//! vertex data (and uploads it to the GPU) fills in [`Shape::vertices`].
//! The core only needs the kind and tessellation level for serialization
//! and the object-space vertex positions for centroid queries.

use glam::Vec3;

/// Procedural primitive kinds understood by the scene file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Sphere,
    Box,
    Cylinder,
    Cone,
}

impl ShapeKind {
    /// Token written to and read from scene files.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            ShapeKind::Sphere => "sphere",
            ShapeKind::Box => "box",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Cone => "cone",
        }
    }

    /// Parses a scene-file token. Unrecognized tokens yield `None`, which
    /// loads as a node without geometry rather than a failure.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "sphere" => Some(ShapeKind::Sphere),
            "box" => Some(ShapeKind::Box),
            "cylinder" => Some(ShapeKind::Cylinder),
            "cone" => Some(ShapeKind::Cone),
            _ => None,
        }
    }
}

/// Drawable geometry owned by a node.
#[derive(Debug, Clone)]
pub struct Shape {
    pub kind: ShapeKind,
    /// Tessellation level (0..=4 by convention, not enforced).
    pub level: u32,
    /// Object-space vertex positions, supplied by the external tessellator.
    /// May be empty; centroid queries then see no points.
    pub vertices: Vec<Vec3>,
}

impl Shape {
    #[must_use]
    pub fn new(kind: ShapeKind, level: u32) -> Self {
        Self {
            kind,
            level,
            vertices: Vec::new(),
        }
    }

    /// Attaches externally tessellated vertex positions.
    #[must_use]
    pub fn with_vertices(mut self, vertices: Vec<Vec3>) -> Self {
        self.vertices = vertices;
        self
    }
}
