use skill_sphere_core::{DrawSurface, LabelDraw, LabelStyle};
use web_sys as web;

/// `DrawSurface` backed by a canvas 2D context.
pub struct CanvasSurface<'a> {
    pub ctx: &'a web::CanvasRenderingContext2d,
    pub width: f64,
    pub height: f64,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(ctx: &'a web::CanvasRenderingContext2d, canvas: &web::HtmlCanvasElement) -> Self {
        Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        }
    }
}

impl DrawSurface for CanvasSurface<'_> {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_label(&mut self, label: &LabelDraw<'_>, style: &LabelStyle) {
        self.ctx.set_global_alpha(label.alpha);
        self.ctx.set_fill_style_str(&style.fill);
        self.ctx.set_font(&style.font(label.font_px));
        self.ctx.set_text_align("center");
        let _ = self.ctx.fill_text(label.text, label.x, label.y);
    }
}
