//! The owned scene state shared by the animation loop and pointer handlers.

use crate::config::SceneConfig;
use crate::error::SceneError;
use crate::interaction::{HoverState, InteractionController, TooltipUpdate};
use crate::layout::{fibonacci_sphere, Point};
use crate::projection::Projector;
use crate::render::{draw_list, render_frame, DrawSurface, LabelDraw, LabelStyle};
use crate::rotation::RotationEngine;
use glam::DVec2;

pub struct Scene {
    points: Vec<Point>,
    rotation: RotationEngine,
    projector: Projector,
    interaction: InteractionController,
    style: LabelStyle,
}

impl Scene {
    pub fn new<S: AsRef<str>>(labels: &[S], config: SceneConfig) -> Result<Self, SceneError> {
        config.validate()?;
        let points = fibonacci_sphere(labels)?;
        let (w, h) = config.viewport;
        let projector = Projector::new(
            config.base_radius,
            config.fov_factor,
            DVec2::new(w, h) * 0.5,
        );
        log::info!(
            "[scene] points={} radius={:.1} viewport={:.0}x{:.0}",
            points.len(),
            config.base_radius,
            w,
            h
        );
        Ok(Self {
            points,
            rotation: RotationEngine::new(
                config.normal_speed,
                config.slow_speed,
                config.pointer_gain,
            ),
            projector,
            interaction: InteractionController::new(
                config.hit_threshold_px,
                config.tooltip_offset_y,
            ),
            style: config.style,
        })
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn rotation(&self) -> &RotationEngine {
        &self.rotation
    }

    #[inline]
    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    #[inline]
    pub fn hover(&self) -> &HoverState {
        self.interaction.state()
    }

    #[inline]
    pub fn style(&self) -> &LabelStyle {
        &self.style
    }

    /// Recenter the projection on a canvas of the given backing size.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.projector.set_center(DVec2::new(width, height) * 0.5);
    }

    /// Advance the rotation by one frame.
    pub fn tick(&mut self) {
        self.rotation.apply_rotation_frame(&mut self.points);
    }

    pub fn render(&self, surface: &mut dyn DrawSurface) {
        render_frame(&self.points, &self.projector, &self.style, surface);
    }

    pub fn draw_list(&self) -> Vec<LabelDraw<'_>> {
        draw_list(&self.points, &self.projector, &self.style)
    }

    pub fn pointer_enter(&mut self) {
        self.interaction.pointer_enter(&mut self.rotation);
    }

    pub fn pointer_move(&mut self, x: f64, y: f64, region_w: f64, region_h: f64) -> TooltipUpdate {
        self.interaction.pointer_move(
            DVec2::new(x, y),
            DVec2::new(region_w, region_h),
            &self.points,
            &self.projector,
            &mut self.rotation,
        )
    }

    pub fn pointer_leave(&mut self) -> TooltipUpdate {
        self.interaction.pointer_leave(&mut self.rotation)
    }
}
