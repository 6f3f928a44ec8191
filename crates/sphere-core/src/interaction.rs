//! Pointer hover state machine and nearest-label hit-testing.

use crate::layout::Point;
use crate::projection::Projector;
use crate::rotation::{RotationEngine, RotationSpeed};
use glam::DVec2;

#[derive(Clone, Debug, PartialEq)]
pub struct HoverTarget {
    pub index: usize,
    pub text: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum HoverState {
    #[default]
    Idle,
    HoveringRegion,
    HoveringPoint(HoverTarget),
}

impl HoverState {
    #[inline]
    pub fn in_region(&self) -> bool {
        !matches!(self, HoverState::Idle)
    }

    #[inline]
    pub fn target(&self) -> Option<&HoverTarget> {
        match self {
            HoverState::HoveringPoint(t) => Some(t),
            _ => None,
        }
    }
}

/// What the front end should do with the tooltip element.
#[derive(Clone, Debug, PartialEq)]
pub enum TooltipUpdate {
    Show { text: String, x: f64, y: f64 },
    Hide,
}

/// Nearest projected point strictly within `threshold` pixels of `cursor`.
///
/// Ties keep the earliest point in canonical order.
pub fn hit_test(
    points: &[Point],
    projector: &Projector,
    cursor: DVec2,
    threshold: f64,
) -> Option<HoverTarget> {
    let mut best: Option<(f64, HoverTarget)> = None;
    for (i, p) in points.iter().enumerate() {
        let s = projector.project(p.position);
        let d = cursor.distance(s.screen());
        if d >= threshold {
            continue;
        }
        if best.as_ref().map_or(true, |(bd, _)| d < *bd) {
            best = Some((
                d,
                HoverTarget {
                    index: i,
                    text: p.label.clone(),
                    x: s.x,
                    y: s.y,
                },
            ));
        }
    }
    best.map(|(_, t)| t)
}

#[derive(Clone, Debug, PartialEq)]
pub struct InteractionController {
    state: HoverState,
    hit_threshold: f64,
    tooltip_offset_y: f64,
}

impl InteractionController {
    pub fn new(hit_threshold: f64, tooltip_offset_y: f64) -> Self {
        Self {
            state: HoverState::Idle,
            hit_threshold,
            tooltip_offset_y,
        }
    }

    #[inline]
    pub fn state(&self) -> &HoverState {
        &self.state
    }

    pub fn pointer_enter(&mut self, rotation: &mut RotationEngine) {
        rotation.set_auto_rotate_speed(RotationSpeed::Slow);
        if !self.state.in_region() {
            self.state = HoverState::HoveringRegion;
        }
    }

    /// `cursor` is relative to the region's top-left corner, `region_size` is
    /// the region's width and height.
    pub fn pointer_move(
        &mut self,
        cursor: DVec2,
        region_size: DVec2,
        points: &[Point],
        projector: &Projector,
        rotation: &mut RotationEngine,
    ) -> TooltipUpdate {
        // Some browsers deliver a move without a preceding enter.
        if !self.state.in_region() {
            self.pointer_enter(rotation);
        }

        let d = cursor - region_size * 0.5;
        rotation.set_pointer_offset(d.x, d.y);

        match hit_test(points, projector, cursor, self.hit_threshold) {
            Some(target) => {
                if self.state.target().map(|t| t.index) != Some(target.index) {
                    log::debug!("[hover] {}", target.text);
                }
                let update = TooltipUpdate::Show {
                    text: target.text.clone(),
                    x: target.x,
                    y: target.y - self.tooltip_offset_y,
                };
                self.state = HoverState::HoveringPoint(target);
                update
            }
            None => {
                self.state = HoverState::HoveringRegion;
                TooltipUpdate::Hide
            }
        }
    }

    pub fn pointer_leave(&mut self, rotation: &mut RotationEngine) -> TooltipUpdate {
        rotation.clear_pointer_offset();
        rotation.set_auto_rotate_speed(RotationSpeed::Normal);
        self.state = HoverState::Idle;
        TooltipUpdate::Hide
    }
}
