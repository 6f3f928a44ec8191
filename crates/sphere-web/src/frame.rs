use crate::surface::CanvasSurface;
use skill_sphere_core::Scene;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub running: Rc<Cell<bool>>,
    pub frames: u64,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let mut scene = self.scene.borrow_mut();
        scene.set_viewport(self.canvas.width() as f64, self.canvas.height() as f64);
        scene.tick();
        let mut surface = CanvasSurface::new(&self.ctx, &self.canvas);
        scene.render(&mut surface);
        self.frames += 1;
    }
}

/// Drive `FrameContext::frame` from `requestAnimationFrame` until `running`
/// is cleared.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let running = frame_ctx_tick.borrow().running.get();
        if !running {
            log::info!(
                "[frame] loop stopped after {} frames",
                frame_ctx_tick.borrow().frames
            );
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
