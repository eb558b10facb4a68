//! Robot arm articulated figure.
//!
//! A fixed topology built on a private [`SceneGraph`]: a box base, then a
//! chain of empty pivot nodes (lower arm, upper arm, wrist) each carrying a
//! visual joint sphere and an arm segment, ending in a hand box with two
//! gripper fingers. Joint handles are control back-references into the
//! owned graph — ownership stays with the graph, and the handles die with
//! it. All geometry hangs off pivot nodes so scale never leaks down the
//! chain.

use glam::{Mat4, Vec3, Vec4};

use crate::animation::keys::SceneKey;
use crate::render::NodeRenderer;
use crate::scene::{Node, NodeHandle, SceneGraph, Shape, ShapeKind};

// Arm proportions. Geometry scales and the gripper math below stay in sync
// through the struct fields.
const BASE_SCALE: Vec3 = Vec3::new(0.5, 0.3, 0.5);
const BASE_HALF_EXTENT: f32 = 0.5;
const LOWER_LEN: f32 = 0.8;
const UPPER_LEN: f32 = 0.8;
const JOINT_RADIUS: f32 = 0.15;
const HAND_WIDTH: f32 = 0.35;
const HAND_HEIGHT: f32 = 0.25;
const HAND_DEPTH: f32 = 0.18;
const GRIPPER_WIDTH: f32 = 0.07;
const GRIPPER_HEIGHT: f32 = 0.30;
const GRIPPER_DEPTH: f32 = 0.07;
const GRIPPER_OVERLAP_EPS: f32 = 0.002;

const JOINT_COLOR: Vec4 = Vec4::new(0.3, 0.3, 0.3, 1.0);

pub struct RobotArm {
    graph: SceneGraph,

    // Joint pivots (control references, non-owning)
    base: NodeHandle,
    lower_arm: NodeHandle,
    upper_arm: NodeHandle,
    /// Wrist pivot; doubles as the hand joint for rotations.
    hand: NodeHandle,
    hand_geom: NodeHandle,
    gripper_left: NodeHandle,
    gripper_right: NodeHandle,

    // Joint parameters
    pub lower_arm_pitch: f32,
    pub lower_arm_yaw: f32,
    pub upper_arm_pitch: f32,
    pub upper_arm_yaw: f32,
    pub hand_pitch: f32,
    pub hand_yaw: f32,
    pub hand_roll: f32,
    /// Gripper openness in [0, 1].
    pub gripper_open: f32,

    // Dimensions used by the gripper mapping
    hand_width: f32,
    hand_height: f32,
    gripper_width: f32,
    gripper_height: f32,
    gripper_overlap_eps: f32,
}

fn joint_sphere(radius: f32) -> Node {
    let mut node = Node::with_shape(Shape::new(ShapeKind::Sphere, 2));
    node.scale = Vec3::splat(radius);
    node.color = JOINT_COLOR;
    node
}

impl RobotArm {
    /// Builds the arm in its rest pose (grippers partly open so the
    /// fingers are visible).
    #[must_use]
    pub fn new() -> Self {
        let mut graph = SceneGraph::new();

        // Base box sitting on the ground plane
        let mut base_node = Node::with_shape(Shape::new(ShapeKind::Box, 0));
        base_node.scale = BASE_SCALE;
        base_node.color = Vec4::new(0.9, 0.8, 0.2, 1.0);
        let base = graph.add_node(base_node, None);

        // Exact top of the base after scaling; the arm chain pivots there
        let base_top = BASE_HALF_EXTENT * BASE_SCALE.y;

        // Lower arm pivot at the top of the base
        let mut pivot = Node::new();
        pivot.translation = Vec3::new(0.0, base_top, 0.0);
        let lower_arm = graph.add_node(pivot, Some(base));

        graph.add_node(joint_sphere(JOINT_RADIUS), Some(lower_arm));

        // Lower arm segment, pivot at its bottom
        let mut seg = Node::with_shape(Shape::new(ShapeKind::Cylinder, 2));
        seg.translation = Vec3::new(0.0, LOWER_LEN * 0.5, 0.0);
        seg.scale = Vec3::new(0.12, LOWER_LEN, 0.12);
        seg.color = Vec4::new(1.0, 0.3, 0.3, 1.0);
        graph.add_node(seg, Some(lower_arm));

        // Upper arm pivot at the top of the lower arm
        let mut pivot = Node::new();
        pivot.translation = Vec3::new(0.0, LOWER_LEN, 0.0);
        let upper_arm = graph.add_node(pivot, Some(lower_arm));

        graph.add_node(joint_sphere(JOINT_RADIUS), Some(upper_arm));

        let mut seg = Node::with_shape(Shape::new(ShapeKind::Cylinder, 2));
        seg.translation = Vec3::new(0.0, UPPER_LEN * 0.5, 0.0);
        seg.scale = Vec3::new(0.10, UPPER_LEN, 0.10);
        seg.color = Vec4::new(0.3, 0.6, 1.0, 1.0);
        graph.add_node(seg, Some(upper_arm));

        // Wrist pivot; hand rotations apply here
        let mut pivot = Node::new();
        pivot.translation = Vec3::new(0.0, UPPER_LEN, 0.0);
        let hand = graph.add_node(pivot, Some(upper_arm));

        graph.add_node(joint_sphere(JOINT_RADIUS * 0.9), Some(hand));

        // Hand box, pivot at its bottom
        let mut hand_box = Node::with_shape(Shape::new(ShapeKind::Box, 1));
        hand_box.translation = Vec3::new(0.0, HAND_HEIGHT * 0.5, 0.0);
        hand_box.scale = Vec3::new(HAND_WIDTH, HAND_HEIGHT, HAND_DEPTH);
        hand_box.color = Vec4::new(0.3, 1.0, 0.4, 1.0);
        let hand_geom = graph.add_node(hand_box, Some(hand));

        // Gripper fingers, bottoms flush with the hand top
        let grip_y = 0.5 * (HAND_HEIGHT + GRIPPER_HEIGHT);
        let mut finger = Node::with_shape(Shape::new(ShapeKind::Box, 0));
        finger.translation = Vec3::new(-0.14, grip_y, 0.0);
        finger.scale = Vec3::new(GRIPPER_WIDTH, GRIPPER_HEIGHT, GRIPPER_DEPTH);
        finger.color = Vec4::new(1.0, 0.7, 0.2, 1.0);
        let gripper_left = graph.add_node(finger.clone(), Some(hand_geom));
        finger.translation.x = 0.14;
        let gripper_right = graph.add_node(finger, Some(hand_geom));

        let mut arm = Self {
            graph,
            base,
            lower_arm,
            upper_arm,
            hand,
            hand_geom,
            gripper_left,
            gripper_right,
            lower_arm_pitch: 0.0,
            lower_arm_yaw: 0.0,
            upper_arm_pitch: 0.0,
            upper_arm_yaw: 0.0,
            hand_pitch: 0.0,
            hand_yaw: 0.0,
            hand_roll: 0.0,
            gripper_open: 0.7,
            hand_width: HAND_WIDTH,
            hand_height: HAND_HEIGHT,
            gripper_width: GRIPPER_WIDTH,
            gripper_height: GRIPPER_HEIGHT,
            gripper_overlap_eps: GRIPPER_OVERLAP_EPS,
        };
        arm.update_joints();
        arm
    }

    #[inline]
    #[must_use]
    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    #[inline]
    #[must_use]
    pub fn base(&self) -> NodeHandle {
        self.base
    }

    #[inline]
    #[must_use]
    pub fn hand(&self) -> NodeHandle {
        self.hand
    }

    #[inline]
    #[must_use]
    pub fn lower_arm(&self) -> NodeHandle {
        self.lower_arm
    }

    #[inline]
    #[must_use]
    pub fn upper_arm(&self) -> NodeHandle {
        self.upper_arm
    }

    #[inline]
    #[must_use]
    pub fn grippers(&self) -> (NodeHandle, NodeHandle) {
        (self.gripper_left, self.gripper_right)
    }

    /// Hand geometry node, the texturing target for the hand.
    #[inline]
    #[must_use]
    pub fn hand_geom(&self) -> NodeHandle {
        self.hand_geom
    }

    /// Mutable access to the figure's graph, for texturing and editing.
    /// Handles returned by the accessors stay valid as long as the graph is
    /// not cleared.
    #[inline]
    pub fn graph_mut(&mut self) -> &mut SceneGraph {
        &mut self.graph
    }

    /// Gripper x-offset from the hand center as a function of openness.
    /// Fully closed leaves a small overlap so the fingertips meet without a
    /// seam; fully open puts each finger's outer face flush against the
    /// hand's inner wall. Linear and monotonic in between.
    #[must_use]
    pub fn gripper_offset(&self, openness: f32) -> f32 {
        let t = openness.clamp(0.0, 1.0);
        let hand_half = 0.5 * self.hand_width;
        let grip_half = 0.5 * self.gripper_width;
        let closed = grip_half - self.gripper_overlap_eps;
        let open = hand_half - grip_half;
        (1.0 - t) * closed + t * open
    }

    /// Recomputes joint rotations and gripper translations from the stored
    /// parameters. 2-DOF joints compose yaw about Y then pitch about X;
    /// the 3-DOF hand composes roll about Z, yaw about Y, pitch about X —
    /// pitch applies first in the joint's local frame.
    pub fn update_joints(&mut self) {
        let lower = Mat4::from_rotation_y(self.lower_arm_yaw)
            * Mat4::from_rotation_x(self.lower_arm_pitch);
        self.graph.node_mut(self.lower_arm).expect("joint handle").rotation = lower;

        let upper = Mat4::from_rotation_y(self.upper_arm_yaw)
            * Mat4::from_rotation_x(self.upper_arm_pitch);
        self.graph.node_mut(self.upper_arm).expect("joint handle").rotation = upper;

        let hand = Mat4::from_rotation_z(self.hand_roll)
            * Mat4::from_rotation_y(self.hand_yaw)
            * Mat4::from_rotation_x(self.hand_pitch);
        self.graph.node_mut(self.hand).expect("joint handle").rotation = hand;

        let offset = self.gripper_offset(self.gripper_open);
        let grip_y = 0.5 * (self.hand_height + self.gripper_height);
        self.graph
            .node_mut(self.gripper_left)
            .expect("gripper handle")
            .translation = Vec3::new(-offset, grip_y, 0.0);
        self.graph
            .node_mut(self.gripper_right)
            .expect("gripper handle")
            .translation = Vec3::new(offset, grip_y, 0.0);
    }

    /// Snapshot of the joint parameters as a scene key (timestamp, lights
    /// and car fields left at their defaults for the caller to fill).
    #[must_use]
    pub fn pose(&self) -> SceneKey {
        SceneKey {
            lower_arm_pitch: self.lower_arm_pitch,
            lower_arm_yaw: self.lower_arm_yaw,
            upper_arm_pitch: self.upper_arm_pitch,
            upper_arm_yaw: self.upper_arm_yaw,
            hand_pitch: self.hand_pitch,
            hand_yaw: self.hand_yaw,
            hand_roll: self.hand_roll,
            gripper_open: self.gripper_open,
            ..SceneKey::default()
        }
    }

    /// Applies a scene key's joint fields and refreshes the node
    /// transforms.
    pub fn set_pose(&mut self, key: &SceneKey) {
        self.lower_arm_pitch = key.lower_arm_pitch;
        self.lower_arm_yaw = key.lower_arm_yaw;
        self.upper_arm_pitch = key.upper_arm_pitch;
        self.upper_arm_yaw = key.upper_arm_yaw;
        self.hand_pitch = key.hand_pitch;
        self.hand_yaw = key.hand_yaw;
        self.hand_roll = key.hand_roll;
        self.gripper_open = key.gripper_open;
        self.update_joints();
    }

    /// Draws the whole figure through the rendering boundary.
    pub fn draw(&self, view_proj: Mat4, renderer: &mut dyn NodeRenderer) {
        self.graph.draw(view_proj, renderer);
    }
}

impl Default for RobotArm {
    fn default() -> Self {
        Self::new()
    }
}
