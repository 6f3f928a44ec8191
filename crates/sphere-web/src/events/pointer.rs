use crate::dom;
use crate::tooltip;
use skill_sphere_core::Scene;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub region: web::Element,
    pub tooltip: web::HtmlElement,
    pub scene: Rc<RefCell<Scene>>,
    pub running: Rc<Cell<bool>>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointerenter(&w);
    wire_pointermove(&w);
    wire_pointerleave(&w);
}

fn listen(target: &web::Element, event: &str, handler: impl FnMut(web::PointerEvent) + 'static) {
    let closure = wasm_bindgen::closure::Closure::wrap(
        Box::new(handler) as Box<dyn FnMut(web::PointerEvent)>
    );
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::error!("[pointer] failed to listen for {}: {:?}", event, e);
    }
    closure.forget();
}

fn wire_pointerenter(w: &PointerWiring) {
    let w2 = w.clone();
    listen(&w.region, "pointerenter", move |_ev| {
        if !w2.running.get() {
            return;
        }
        w2.scene.borrow_mut().pointer_enter();
    });
}

fn wire_pointermove(w: &PointerWiring) {
    let w2 = w.clone();
    listen(&w.region, "pointermove", move |ev| {
        if !w2.running.get() {
            return;
        }
        let (cursor, size) = dom::region_local_px(&ev, &w2.region);
        let update = w2
            .scene
            .borrow_mut()
            .pointer_move(cursor.x, cursor.y, size.x, size.y);
        tooltip::apply(&w2.tooltip, &update);
    });
}

fn wire_pointerleave(w: &PointerWiring) {
    let w2 = w.clone();
    listen(&w.region, "pointerleave", move |_ev| {
        if !w2.running.get() {
            return;
        }
        let update = w2.scene.borrow_mut().pointer_leave();
        tooltip::apply(&w2.tooltip, &update);
    });
}
