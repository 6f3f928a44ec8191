//! Per-frame rotation of the point cloud.
//!
//! Two angle pairs feed the rotation: a persistent auto-rotation speed that
//! switches between a normal and a slowed regime, and a transient offset
//! derived from the pointer's displacement from the region center.

use crate::constants::{NORMAL_ROTATION_SPEED, POINTER_GAIN, SLOW_ROTATION_SPEED};
use crate::layout::Point;
use glam::DMat3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationSpeed {
    Normal,
    Slow,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationEngine {
    pub base_rot_x: f64,
    pub base_rot_y: f64,
    pub pointer_rot_x: f64,
    pub pointer_rot_y: f64,
    normal_speed: (f64, f64),
    slow_speed: (f64, f64),
    pointer_gain: f64,
    mode: RotationSpeed,
}

impl Default for RotationEngine {
    fn default() -> Self {
        Self::new(NORMAL_ROTATION_SPEED, SLOW_ROTATION_SPEED, POINTER_GAIN)
    }
}

impl RotationEngine {
    pub fn new(normal_speed: (f64, f64), slow_speed: (f64, f64), pointer_gain: f64) -> Self {
        Self {
            base_rot_x: normal_speed.0,
            base_rot_y: normal_speed.1,
            pointer_rot_x: 0.0,
            pointer_rot_y: 0.0,
            normal_speed,
            slow_speed,
            pointer_gain,
            mode: RotationSpeed::Normal,
        }
    }

    #[inline]
    pub fn mode(&self) -> RotationSpeed {
        self.mode
    }

    pub fn set_auto_rotate_speed(&mut self, mode: RotationSpeed) {
        let (x, y) = match mode {
            RotationSpeed::Normal => self.normal_speed,
            RotationSpeed::Slow => self.slow_speed,
        };
        self.base_rot_x = x;
        self.base_rot_y = y;
        if self.mode != mode {
            log::debug!("[rotation] speed {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
    }

    /// `dx`/`dy` are the pointer's displacement from the region center in
    /// pixels. Vertical displacement tilts (X axis), horizontal spins (Y axis).
    pub fn set_pointer_offset(&mut self, dx: f64, dy: f64) {
        self.pointer_rot_x = dy * self.pointer_gain;
        self.pointer_rot_y = dx * self.pointer_gain;
    }

    pub fn clear_pointer_offset(&mut self) {
        self.pointer_rot_x = 0.0;
        self.pointer_rot_y = 0.0;
    }

    /// Angles applied this frame around X and Y.
    #[inline]
    pub fn effective_angles(&self) -> (f64, f64) {
        (
            self.base_rot_x + self.pointer_rot_x,
            self.base_rot_y + self.pointer_rot_y,
        )
    }

    /// Combined rotation: X first, then Y.
    #[inline]
    pub fn frame_matrix(&self) -> DMat3 {
        let (ax, ay) = self.effective_angles();
        DMat3::from_rotation_y(ay) * DMat3::from_rotation_x(ax)
    }

    /// Rotate every point in place. Repeated calls keep accumulating.
    pub fn apply_rotation_frame(&self, points: &mut [Point]) {
        let m = self.frame_matrix();
        for p in points.iter_mut() {
            p.position = m * p.position;
        }
    }
}
