#![cfg(target_arch = "wasm32")]
use registry::{MountKey, MountRegistry, Mounted};
use skill_sphere_core::{Scene, SceneConfig};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod registry;
mod surface;
mod tooltip;

const CANVAS_ID: &str = "sphereCanvas";
const REGION_ID: &str = "box";
const TOOLTIP_ID: &str = "tooltip";

thread_local! {
    static MOUNTED: RefCell<MountRegistry<SphereHandle>> = RefCell::new(MountRegistry::default());
}

/// Handle to a mounted sphere. Dropping it leaves the sphere running.
#[wasm_bindgen]
#[derive(Clone)]
pub struct SphereHandle {
    running: Rc<Cell<bool>>,
    scene: Rc<RefCell<Scene>>,
    tooltip: web::HtmlElement,
}

#[wasm_bindgen]
impl SphereHandle {
    /// Stop the animation loop. The region's pointer handlers stay attached
    /// but become no-ops.
    pub fn stop(&self) {
        if self.running.replace(false) {
            tooltip::hide(&self.tooltip);
        }
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Labels in layout order.
    pub fn labels(&self) -> js_sys::Array {
        self.scene
            .borrow()
            .points()
            .iter()
            .map(|p| JsValue::from_str(&p.label))
            .collect()
    }
}

impl Mounted for SphereHandle {
    fn is_running(&self) -> bool {
        self.running.get()
    }

    fn stop(&self) {
        SphereHandle::stop(self);
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("skill-sphere-web starting");

    // Pages with the default markup get a sphere without calling `mount`;
    // a later `mount` with the default ids returns this same sphere.
    let has_default_markup = dom::window_document()
        .and_then(|d| d.get_element_by_id(CANVAS_ID))
        .is_some();
    if has_default_markup {
        if let Err(e) = init(CANVAS_ID, REGION_ID, TOOLTIP_ID) {
            log::error!("init error: {:?}", e);
        }
    }
    Ok(())
}

/// Mount a sphere on the given canvas, pointer region and tooltip elements.
///
/// A sphere already running with the same ids is returned as is; one running
/// on the same canvas with other ids is stopped and replaced.
#[wasm_bindgen]
pub fn mount(canvas_id: &str, region_id: &str, tooltip_id: &str) -> Result<SphereHandle, JsValue> {
    init(canvas_id, region_id, tooltip_id).map_err(|e| {
        log::error!("mount error: {:?}", e);
        JsValue::from_str(&e.to_string())
    })
}

fn init(canvas_id: &str, region_id: &str, tooltip_id: &str) -> anyhow::Result<SphereHandle> {
    let key = MountKey::new(canvas_id, region_id, tooltip_id);
    if let Some(handle) = MOUNTED.with(|m| m.borrow_mut().claim(&key)) {
        log::info!("[mount] #{} already running", canvas_id);
        return Ok(handle);
    }
    let handle = build(&key)?;
    MOUNTED.with(|m| m.borrow_mut().insert(key, handle.clone()));
    Ok(handle)
}

fn build(key: &MountKey) -> anyhow::Result<SphereHandle> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, &key.canvas)?;
    let region: web::Element = dom::element_by_id(&document, &key.region)?;
    let tooltip_el: web::HtmlElement = dom::element_by_id(&document, &key.tooltip)?;
    let ctx = dom::context_2d(&canvas)?;

    let labels = dom::read_labels(&region);
    let config =
        SceneConfig::default().with_viewport(canvas.width() as f64, canvas.height() as f64);
    let scene = Rc::new(RefCell::new(Scene::new(&labels, config)?));
    let running = Rc::new(Cell::new(true));
    tooltip::hide(&tooltip_el);

    events::wire_pointer_handlers(events::PointerWiring {
        region,
        tooltip: tooltip_el.clone(),
        scene: scene.clone(),
        running: running.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene: scene.clone(),
        canvas,
        ctx,
        running: running.clone(),
        frames: 0,
    }));
    frame::start_loop(frame_ctx);

    Ok(SphereHandle {
        running,
        scene,
        tooltip: tooltip_el,
    })
}
