use glam::{DVec2, DVec3};

/// Screen-space position of a point plus its perspective scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl ProjectedPoint {
    #[inline]
    pub fn screen(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

/// Perspective projection of unit-sphere points onto the canvas.
///
/// The denominator `fov + z * base_radius` stays positive for `|z| <= 1` as
/// long as `base_radius > 0` and `fov_factor > 1`; `SceneConfig::validate`
/// enforces both.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projector {
    base_radius: f64,
    fov: f64,
    center: DVec2,
}

impl Projector {
    pub fn new(base_radius: f64, fov_factor: f64, center: DVec2) -> Self {
        Self {
            base_radius,
            fov: base_radius * fov_factor,
            center,
        }
    }

    #[inline]
    pub fn base_radius(&self) -> f64 {
        self.base_radius
    }

    #[inline]
    pub fn fov(&self) -> f64 {
        self.fov
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        self.center
    }

    pub fn set_center(&mut self, center: DVec2) {
        self.center = center;
    }

    #[inline]
    pub fn project(&self, p: DVec3) -> ProjectedPoint {
        let scale = self.fov / (self.fov + p.z * self.base_radius);
        ProjectedPoint {
            x: self.center.x + p.x * self.base_radius * scale,
            y: self.center.y + p.y * self.base_radius * scale,
            scale,
        }
    }
}
