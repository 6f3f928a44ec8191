use crate::constants::{
    BASE_RADIUS, DEFAULT_VIEWPORT, FOV_FACTOR, HIT_THRESHOLD_PX, NORMAL_ROTATION_SPEED,
    POINTER_GAIN, SLOW_ROTATION_SPEED, TOOLTIP_OFFSET_Y,
};
use crate::error::SceneError;
use crate::render::LabelStyle;

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub base_radius: f64,
    pub fov_factor: f64,
    pub hit_threshold_px: f64,
    pub tooltip_offset_y: f64,
    pub pointer_gain: f64,
    pub normal_speed: (f64, f64),
    pub slow_speed: (f64, f64),
    pub viewport: (f64, f64),
    pub style: LabelStyle,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            base_radius: BASE_RADIUS,
            fov_factor: FOV_FACTOR,
            hit_threshold_px: HIT_THRESHOLD_PX,
            tooltip_offset_y: TOOLTIP_OFFSET_Y,
            pointer_gain: POINTER_GAIN,
            normal_speed: NORMAL_ROTATION_SPEED,
            slow_speed: SLOW_ROTATION_SPEED,
            viewport: DEFAULT_VIEWPORT,
            style: LabelStyle::default(),
        }
    }
}

impl SceneConfig {
    pub fn with_viewport(mut self, width: f64, height: f64) -> Self {
        self.viewport = (width, height);
        self
    }

    /// Reject values that would let the projection denominator reach zero or
    /// otherwise poison the frame with NaN.
    pub fn validate(&self) -> Result<(), SceneError> {
        let finite = [
            self.base_radius,
            self.fov_factor,
            self.hit_threshold_px,
            self.tooltip_offset_y,
            self.pointer_gain,
            self.normal_speed.0,
            self.normal_speed.1,
            self.slow_speed.0,
            self.slow_speed.1,
            self.viewport.0,
            self.viewport.1,
            self.style.base_font_px,
            self.style.font_scale_px,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(SceneError::InvalidConfig("values must be finite"));
        }
        if self.base_radius <= 0.0 {
            return Err(SceneError::InvalidConfig("base_radius must be positive"));
        }
        if self.fov_factor <= 1.0 {
            return Err(SceneError::InvalidConfig("fov_factor must exceed 1"));
        }
        if self.hit_threshold_px <= 0.0 {
            return Err(SceneError::InvalidConfig("hit_threshold_px must be positive"));
        }
        Ok(())
    }
}

/// Split a comma-separated label list, trimming whitespace and dropping
/// empty entries.
pub fn parse_labels(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
