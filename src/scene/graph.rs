//! Arena-backed scene graph.
//!
//! Nodes live in a generational arena and reference each other by
//! [`NodeHandle`]. The graph always has a root node, even when "empty";
//! [`SceneGraph::clear`] swaps in a fresh arena, so every previously issued
//! handle stops resolving at that moment. Control references held elsewhere
//! (the articulated figure's joint handles, an editor's current selection)
//! are plain handles and never own anything.

use glam::{Mat4, Vec3};
use slotmap::SlotMap;

use crate::render::{NodeDraw, NodeRenderer};
use crate::scene::node::Node;
use crate::scene::shape::Shape;
use crate::scene::NodeHandle;

pub struct SceneGraph {
    pub(crate) nodes: SlotMap<NodeHandle, Node>,
    root: NodeHandle,
}

impl SceneGraph {
    /// Creates a graph holding a single empty root with identity
    /// transforms.
    #[must_use]
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node::new());
        Self { nodes, root }
    }

    /// The root handle. Always valid for this graph; the root node itself
    /// carries identity transforms by convention but may be mutated (the
    /// inspect mode rotates it).
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeHandle {
        self.root
    }

    /// Resets to a fresh empty root. Invalidates every handle previously
    /// returned by this graph (clearing the arena bumps slot versions, so
    /// stale handles never alias new nodes).
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = self.nodes.insert(Node::new());
    }

    /// Number of live nodes, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// True when the root has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes[self.root].children.is_empty()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Inserts `node` under `parent` (the root when `None`). Children keep
    /// insertion order, which is also traversal and serialization order.
    pub fn add_node(&mut self, node: Node, parent: Option<NodeHandle>) -> NodeHandle {
        let parent = parent.unwrap_or(self.root);
        let handle = self.nodes.insert(node);
        self.nodes[handle].parent = Some(parent);
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(handle);
        } else {
            log::warn!("add_node: parent handle is stale, attaching under root");
            self.nodes[handle].parent = Some(self.root);
            let root = self.root;
            self.nodes[root].children.push(handle);
        }
        handle
    }

    /// Appends a new child of root owning the given shape and returns its
    /// handle. The handle stays valid until the graph is cleared.
    pub fn add_shape(&mut self, shape: Shape) -> NodeHandle {
        self.add_node(Node::with_shape(shape), None)
    }

    /// Removes the most recently added direct child of root, freeing its
    /// whole subtree. No-op when root has no children.
    pub fn remove_last(&mut self) {
        let last = self.nodes[self.root].children.last().copied();
        if let Some(handle) = last {
            self.remove_node(handle);
        }
    }

    /// Removes a node and its subtree. Stale handles are ignored.
    pub fn remove_node(&mut self, handle: NodeHandle) {
        let Some(node) = self.nodes.get(handle) else {
            return;
        };
        if handle == self.root {
            log::warn!("remove_node: refusing to remove the root, use clear()");
            return;
        }
        let children = node.children.clone();
        for child in children {
            self.remove_node(child);
        }
        if let Some(parent) = self.nodes[handle].parent {
            if let Some(p) = self.nodes.get_mut(parent) {
                if let Some(pos) = p.children.iter().position(|&c| c == handle) {
                    p.children.remove(pos);
                }
            }
        }
        self.nodes.remove(handle);
    }

    // ========================================================================
    // Access
    // ========================================================================

    #[must_use]
    pub fn node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    #[must_use]
    pub fn node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Arithmetic mean of every shape vertex in the tree, in object space.
    /// Node transforms are deliberately not applied. Returns the zero
    /// vector when no vertices exist.
    #[must_use]
    pub fn compute_centroid(&self) -> Vec3 {
        let mut sum = Vec3::ZERO;
        let mut count = 0usize;
        self.collect_vertices(self.root, &mut sum, &mut count);
        if count == 0 {
            Vec3::ZERO
        } else {
            sum / count as f32
        }
    }

    fn collect_vertices(&self, handle: NodeHandle, sum: &mut Vec3, count: &mut usize) {
        let node = &self.nodes[handle];
        if let Some(shape) = &node.shape {
            for v in &shape.vertices {
                *sum += *v;
                *count += 1;
            }
        }
        for &child in &node.children {
            self.collect_vertices(child, sum, count);
        }
    }

    /// Accumulated translate · rotate from root to `target`, including the
    /// target's own frame. Scale is excluded. `None` when the handle is
    /// stale or not reachable from root.
    #[must_use]
    pub fn world_frame_of(&self, target: NodeHandle) -> Option<Mat4> {
        self.world_frame_rec(self.root, target, Mat4::IDENTITY)
    }

    fn world_frame_rec(
        &self,
        handle: NodeHandle,
        target: NodeHandle,
        parent_frame: Mat4,
    ) -> Option<Mat4> {
        let node = self.nodes.get(handle)?;
        let frame = parent_frame * node.local_frame();
        if handle == target {
            return Some(frame);
        }
        for &child in &node.children {
            if let Some(found) = self.world_frame_rec(child, target, frame) {
                return Some(found);
            }
        }
        None
    }

    // ========================================================================
    // Draw traversal
    // ========================================================================

    /// Depth-first pre-order traversal. For each node:
    /// `frame = parent_frame · translate · rotate` and
    /// `model = frame · scale`; the renderer receives
    /// `mvp = view_proj · model` for nodes with geometry. Children inherit
    /// `frame`, never `model`, so an ancestor's scale applies only to that
    /// ancestor's own geometry.
    pub fn draw(&self, view_proj: Mat4, renderer: &mut dyn NodeRenderer) {
        self.draw_rec(self.root, view_proj, Mat4::IDENTITY, renderer);
    }

    fn draw_rec(
        &self,
        handle: NodeHandle,
        view_proj: Mat4,
        parent_frame: Mat4,
        renderer: &mut dyn NodeRenderer,
    ) {
        let node = &self.nodes[handle];
        let frame = parent_frame * node.local_frame();
        if let Some(shape) = &node.shape {
            let model = frame * Mat4::from_scale(node.scale);
            renderer.draw_node(&NodeDraw {
                shape,
                mvp: view_proj * model,
                model,
                color: node.color,
                use_texture: node.use_texture,
                texture: node.texture,
            });
        }
        for &child in &node.children {
            self.draw_rec(child, view_proj, frame, renderer);
        }
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}
