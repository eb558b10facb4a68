//! Articulated Figure Module
//!
//! [`RobotArm`]: the robot-arm toy built on a private scene graph, mapping
//! scalar joint parameters onto node rotations and gripper translations.

pub mod arm;

pub use arm::RobotArm;
