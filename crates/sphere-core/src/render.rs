//! Back-to-front label drawing through a platform-neutral surface.

use crate::constants::{
    ALPHA_BASE, ALPHA_DEPTH_GAIN, BASE_FONT_PX, FONT_SCALE_PX, LABEL_FILL, LABEL_FONT_FAMILY,
};
use crate::layout::Point;
use crate::projection::Projector;

#[derive(Clone, Debug, PartialEq)]
pub struct LabelStyle {
    pub fill: String,
    pub font_family: String,
    pub base_font_px: f64,
    pub font_scale_px: f64,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            fill: LABEL_FILL.to_string(),
            font_family: LABEL_FONT_FAMILY.to_string(),
            base_font_px: BASE_FONT_PX,
            font_scale_px: FONT_SCALE_PX,
        }
    }
}

impl LabelStyle {
    /// CSS font shorthand, e.g. `"23.5px Arial"`.
    pub fn font(&self, font_px: f64) -> String {
        format!("{}px {}", font_px, self.font_family)
    }
}

/// One centered text draw.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelDraw<'a> {
    pub index: usize,
    pub text: &'a str,
    pub x: f64,
    pub y: f64,
    pub depth: f64,
    pub font_px: f64,
    pub alpha: f64,
}

/// Anything that can clear itself and draw centered text.
pub trait DrawSurface {
    fn clear(&mut self);
    fn fill_label(&mut self, label: &LabelDraw<'_>, style: &LabelStyle);
}

/// Opacity for a point at depth `z`, clamped to [0, 1].
#[inline]
pub fn depth_alpha(z: f64) -> f64 {
    (ALPHA_BASE + (z + 1.0) * ALPHA_DEPTH_GAIN).clamp(0.0, 1.0)
}

/// Indices into `points` ordered farthest (smallest z) first.
///
/// The slice itself is left in canonical order.
pub fn depth_order(points: &[Point]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| points[a].position.z.total_cmp(&points[b].position.z));
    order
}

pub fn draw_list<'a>(
    points: &'a [Point],
    projector: &Projector,
    style: &LabelStyle,
) -> Vec<LabelDraw<'a>> {
    depth_order(points)
        .into_iter()
        .map(|i| {
            let p = &points[i];
            let s = projector.project(p.position);
            LabelDraw {
                index: i,
                text: &p.label,
                x: s.x,
                y: s.y,
                depth: p.position.z,
                font_px: style.base_font_px + s.scale * style.font_scale_px,
                alpha: depth_alpha(p.position.z),
            }
        })
        .collect()
}

/// Clear the surface and paint every label back to front.
pub fn render_frame(
    points: &[Point],
    projector: &Projector,
    style: &LabelStyle,
    surface: &mut dyn DrawSurface,
) {
    surface.clear();
    for draw in draw_list(points, projector, style) {
        surface.fill_label(&draw, style);
    }
}
