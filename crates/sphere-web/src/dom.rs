use anyhow::anyhow;
use glam::DVec2;
use skill_sphere_core::{parse_labels, DEFAULT_SKILLS};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow!("#{} has unexpected type: {:?}", id, e))
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("getContext failed: {:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!(format!("{:?}", e)))
}

/// Cursor position relative to the region's top-left corner, plus the
/// region's size, both in CSS pixels.
#[inline]
pub fn region_local_px(ev: &web::MouseEvent, region: &web::Element) -> (DVec2, DVec2) {
    let rect = region.get_bounding_client_rect();
    let cursor = DVec2::new(
        ev.client_x() as f64 - rect.left(),
        ev.client_y() as f64 - rect.top(),
    );
    (cursor, DVec2::new(rect.width(), rect.height()))
}

/// Labels from the region's `data-labels` attribute, else the built-in set.
pub fn read_labels(region: &web::Element) -> Vec<String> {
    let labels = region
        .get_attribute("data-labels")
        .map(|raw| parse_labels(&raw))
        .unwrap_or_default();
    if labels.is_empty() {
        DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect()
    } else {
        labels
    }
}
