//! Keyframe snapshot types.

use glam::Vec3;

/// One camera state on the animation path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraKey {
    /// Timestamp. Sequences are kept in ascending order by caller
    /// convention; nothing re-sorts on append or load.
    pub t: f32,
    pub eye: Vec3,
    pub look_at: Vec3,
    pub up: Vec3,
}

impl Default for CameraKey {
    fn default() -> Self {
        Self {
            t: 0.0,
            eye: Vec3::ZERO,
            look_at: Vec3::NEG_Z,
            up: Vec3::Y,
        }
    }
}

/// One full scene state: robot-arm joint parameters, light toggles and the
/// free-moving car.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SceneKey {
    pub t: f32,

    // Robot arm
    pub lower_arm_pitch: f32,
    pub lower_arm_yaw: f32,
    pub upper_arm_pitch: f32,
    pub upper_arm_yaw: f32,
    pub hand_pitch: f32,
    pub hand_yaw: f32,
    pub hand_roll: f32,
    /// Gripper openness in [0, 1].
    pub gripper_open: f32,

    // Light states, 0.0 = off, 1.0 = on. Stored as floats to match the
    // file format; they step rather than blend during evaluation.
    pub light0_on: f32,
    pub light1_on: f32,
    pub toy_light_on: f32,

    // Car free body
    pub car_pos: Vec3,
    pub car_yaw: f32,
}

fn lerp(a: f32, b: f32, alpha: f32) -> f32 {
    a + alpha * (b - a)
}

impl SceneKey {
    /// Interpolates every continuous field toward `other` by `alpha`.
    /// Light fields are a step function: they take `self`'s value verbatim,
    /// never a blend.
    #[must_use]
    pub fn lerp(&self, other: &SceneKey, alpha: f32) -> SceneKey {
        SceneKey {
            t: lerp(self.t, other.t, alpha),
            lower_arm_pitch: lerp(self.lower_arm_pitch, other.lower_arm_pitch, alpha),
            lower_arm_yaw: lerp(self.lower_arm_yaw, other.lower_arm_yaw, alpha),
            upper_arm_pitch: lerp(self.upper_arm_pitch, other.upper_arm_pitch, alpha),
            upper_arm_yaw: lerp(self.upper_arm_yaw, other.upper_arm_yaw, alpha),
            hand_pitch: lerp(self.hand_pitch, other.hand_pitch, alpha),
            hand_yaw: lerp(self.hand_yaw, other.hand_yaw, alpha),
            hand_roll: lerp(self.hand_roll, other.hand_roll, alpha),
            gripper_open: lerp(self.gripper_open, other.gripper_open, alpha),
            light0_on: self.light0_on,
            light1_on: self.light1_on,
            toy_light_on: self.toy_light_on,
            car_pos: self.car_pos.lerp(other.car_pos, alpha),
            car_yaw: lerp(self.car_yaw, other.car_yaw, alpha),
        }
    }
}
