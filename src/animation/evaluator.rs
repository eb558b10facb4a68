//! Time → interpolated animation state.
//!
//! Camera eye and look-at follow one global Bezier over the whole key
//! sequence, parameterized by normalized time over the first/last key
//! timestamps; the up vector is lerped (and renormalized) between the two
//! keys bracketing the clamped time. Scene parameters interpolate
//! piecewise-linearly per segment, except the boolean-as-float light
//! toggles which step on the left key. Degenerate key counts (0, 1 key,
//! zero-duration segments) take explicit fallback branches and never error.

use crate::animation::bezier::{bezier_eyes, bezier_look_ats};
use crate::animation::keys::{CameraKey, SceneKey};
use crate::animation::store::KeyframeStore;

/// Evaluation result. `None` fields mean the corresponding key sequence is
/// empty and the caller's current state should stand.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimationState {
    pub camera: Option<CameraKey>,
    pub scene: Option<SceneKey>,
}

impl KeyframeStore {
    /// Evaluates both sequences at `time`.
    #[must_use]
    pub fn sample(&self, time: f32) -> AnimationState {
        AnimationState {
            camera: self.sample_camera(time),
            scene: self.sample_scene(time),
        }
    }

    fn sample_camera(&self, time: f32) -> Option<CameraKey> {
        let keys = &self.camera_keys;
        match keys.len() {
            0 => None,
            1 => Some(keys[0]),
            _ => {
                let start = keys[0].t;
                let end = keys[keys.len() - 1].t;
                // Not clamp(): out-of-order key sequences are permitted and
                // must not panic on an inverted range.
                let clamped = time.max(start).min(end);
                let span = end - start;
                let alpha = if span == 0.0 { 0.0 } else { (clamped - start) / span };

                let eye = bezier_eyes(keys, alpha);
                let look_at = bezier_look_ats(keys, alpha);

                // The up vector blends only across the bracketing segment;
                // first bracketing pair wins.
                let mut i = 0;
                for j in 0..keys.len() - 1 {
                    if clamped >= keys[j].t && clamped <= keys[j + 1].t {
                        i = j;
                        break;
                    }
                }
                let (k0, k1) = (&keys[i], &keys[i + 1]);
                let seg = k1.t - k0.t;
                let seg_alpha = if seg == 0.0 { 0.0 } else { (clamped - k0.t) / seg };
                let up = k0.up.lerp(k1.up, seg_alpha).normalize();

                Some(CameraKey {
                    t: clamped,
                    eye,
                    look_at,
                    up,
                })
            }
        }
    }

    fn sample_scene(&self, time: f32) -> Option<SceneKey> {
        let keys = &self.scene_keys;
        if keys.is_empty() {
            return None;
        }
        let start = keys[0].t;
        let end = keys[keys.len() - 1].t;
        let clamped = time.max(start).min(end);

        // First index whose successor lies past the clamped time; the last
        // key doubles as both segment ends at the boundary.
        let mut i = keys.len() - 1;
        for j in 0..keys.len() - 1 {
            if clamped < keys[j + 1].t {
                i = j;
                break;
            }
        }
        let s0 = keys[i];
        let s1 = if i + 1 < keys.len() { keys[i + 1] } else { s0 };

        let span = s1.t - s0.t;
        let alpha = if span == 0.0 { 0.0 } else { (clamped - s0.t) / span };

        let mut out = s0.lerp(&s1, alpha);
        out.t = clamped;
        Some(out)
    }
}
