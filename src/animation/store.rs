//! Keyframe store and its file persistence.
//!
//! Camera and scene key sequences are independent: different lengths,
//! different timestamp sets. Appends do not reorder — callers insert in
//! increasing time order. Key files are whitespace-separated floats, one
//! key per line; loading replaces the in-memory sequence and stops quietly
//! at the first malformed or missing token, keeping what parsed so far.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use glam::Vec3;

use crate::animation::keys::{CameraKey, SceneKey};
use crate::errors::Result;

#[derive(Debug, Clone, Default)]
pub struct KeyframeStore {
    pub camera_keys: Vec<CameraKey>,
    pub scene_keys: Vec<SceneKey>,
}

/// Pulls `N` floats from the token stream; `None` ends the read loop on the
/// first missing or unparseable token, mirroring a failed formatted read.
fn take_floats<'a, I, const N: usize>(tokens: &mut I) -> Option<[f32; N]>
where
    I: Iterator<Item = &'a str>,
{
    let mut out = [0.0; N];
    for slot in &mut out {
        *slot = tokens.next()?.parse().ok()?;
    }
    Some(out)
}

fn read_tokens(path: &Path) -> Result<String> {
    let mut text = String::new();
    File::open(path)
        .inspect_err(|e| {
            log::warn!("failed to open key file for reading {}: {e}", path.display());
        })?
        .read_to_string(&mut text)?;
    Ok(text)
}

fn create_out(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).inspect_err(|e| {
        log::warn!("failed to open key file for writing {}: {e}", path.display());
    })?;
    Ok(BufWriter::new(file))
}

impl KeyframeStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_camera_key(&mut self, key: CameraKey) {
        self.camera_keys.push(key);
    }

    pub fn push_scene_key(&mut self, key: SceneKey) {
        self.scene_keys.push(key);
    }

    /// True when both key sequences are empty. Playback refuses to start on
    /// an empty store.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.camera_keys.is_empty() && self.scene_keys.is_empty()
    }

    /// Largest timestamp across both sequences, 0 when the store is empty.
    /// Playback stops once time passes this.
    #[must_use]
    pub fn max_time(&self) -> f32 {
        let cam = self.camera_keys.last().map_or(0.0, |k| k.t);
        let scene = self.scene_keys.last().map_or(0.0, |k| k.t);
        cam.max(scene)
    }

    // ========================================================================
    // Camera key files: t eye.xyz look_at.xyz up.xyz (10 floats per line)
    // ========================================================================

    pub fn save_camera_keys(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut out = create_out(path.as_ref())?;
        for k in &self.camera_keys {
            writeln!(
                out,
                "{} {} {} {} {} {} {} {} {} {}",
                k.t,
                k.eye.x,
                k.eye.y,
                k.eye.z,
                k.look_at.x,
                k.look_at.y,
                k.look_at.z,
                k.up.x,
                k.up.y,
                k.up.z
            )?;
        }
        out.flush()?;
        Ok(())
    }

    /// Replaces the camera key sequence from a file. Returns the count
    /// loaded.
    pub fn load_camera_keys(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let text = read_tokens(path)?;
        self.camera_keys.clear();
        let mut tokens = text.split_whitespace();
        while let Some(f) = take_floats::<_, 10>(&mut tokens) {
            self.camera_keys.push(CameraKey {
                t: f[0],
                eye: Vec3::new(f[1], f[2], f[3]),
                look_at: Vec3::new(f[4], f[5], f[6]),
                up: Vec3::new(f[7], f[8], f[9]),
            });
        }
        log::info!(
            "loaded {} camera keys from {}",
            self.camera_keys.len(),
            path.display()
        );
        Ok(self.camera_keys.len())
    }

    // ========================================================================
    // Scene key files: t, 8 joint params, 3 light toggles, car pos + yaw
    // (16 floats per line)
    // ========================================================================

    pub fn save_scene_keys(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut out = create_out(path.as_ref())?;
        for k in &self.scene_keys {
            writeln!(
                out,
                "{} {} {} {} {} {} {} {} {} {} {} {} {} {} {} {}",
                k.t,
                k.lower_arm_pitch,
                k.lower_arm_yaw,
                k.upper_arm_pitch,
                k.upper_arm_yaw,
                k.hand_pitch,
                k.hand_yaw,
                k.hand_roll,
                k.gripper_open,
                k.light0_on,
                k.light1_on,
                k.toy_light_on,
                k.car_pos.x,
                k.car_pos.y,
                k.car_pos.z,
                k.car_yaw
            )?;
        }
        out.flush()?;
        Ok(())
    }

    /// Replaces the scene key sequence from a file. Returns the count
    /// loaded.
    pub fn load_scene_keys(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let text = read_tokens(path)?;
        self.scene_keys.clear();
        let mut tokens = text.split_whitespace();
        while let Some(f) = take_floats::<_, 16>(&mut tokens) {
            self.scene_keys.push(SceneKey {
                t: f[0],
                lower_arm_pitch: f[1],
                lower_arm_yaw: f[2],
                upper_arm_pitch: f[3],
                upper_arm_yaw: f[4],
                hand_pitch: f[5],
                hand_yaw: f[6],
                hand_roll: f[7],
                gripper_open: f[8],
                light0_on: f[9],
                light1_on: f[10],
                toy_light_on: f[11],
                car_pos: Vec3::new(f[12], f[13], f[14]),
                car_yaw: f[15],
            });
        }
        log::info!(
            "loaded {} scene keys from {}",
            self.scene_keys.len(),
            path.display()
        );
        Ok(self.scene_keys.len())
    }
}
