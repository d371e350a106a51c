#![cfg(target_arch = "wasm32")]
use field_core::{Animator, CancelToken, ParticleField, PointerState};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod constants;
mod cursor;
mod dom;
mod events;
mod frame;
mod plan;
mod style;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hero-field-web starting");
    Ok(())
}

/// Particle background bound to a `<canvas>`, plus the spring cursor when the
/// page provides one. Lives until [`HeroField::teardown`] or until dropped.
#[wasm_bindgen]
pub struct HeroField {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl HeroField {
    /// Mounts on the canvas with id `canvas_id` (defaults to `hero-canvas`).
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: Option<String>) -> Result<HeroField, JsValue> {
        let id = canvas_id.unwrap_or_else(|| constants::DEFAULT_CANVAS_ID.to_string());
        match mount(&id) {
            Ok(mounted) => Ok(HeroField { mounted }),
            Err(e) => {
                log::error!("mount error: {:?}", e);
                Err(JsValue::from_str(&format!("{:#}", e)))
            }
        }
    }

    /// Stop the frame loop and remove every listener. Safe to call twice.
    pub fn teardown(&mut self) {
        if let Some(m) = self.mounted.take() {
            m.teardown();
        }
    }

    /// Frames drawn so far; 0 for an inert field.
    pub fn frames(&self) -> f64 {
        self.mounted
            .as_ref()
            .and_then(|m| m.frame_ctx.borrow().animator.as_ref().map(|a| a.frames() as f64))
            .unwrap_or(0.0)
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.mounted
            .as_ref()
            .and_then(|m| m.frame_ctx.borrow().animator.as_ref().map(|a| a.is_running()))
            .unwrap_or(false)
    }
}

impl Drop for HeroField {
    fn drop(&mut self) {
        self.teardown();
    }
}

struct Mounted {
    frame_ctx: Rc<RefCell<frame::FrameContext>>,
    frame_loop: frame::FrameLoop,
    listeners: Vec<dom::Listener>,
}

impl Mounted {
    fn teardown(self) {
        self.frame_loop.cancel();
        let mut ctx = self.frame_ctx.borrow_mut();
        if let Some(a) = &mut ctx.animator {
            a.teardown();
        }
        if let Some(c) = &ctx.cursor {
            c.hide();
        }
        drop(ctx);
        let n = self.listeners.len();
        drop(self.listeners);
        log::info!("[mount] removed {} listeners", n);
    }
}

// Keep the canvas backing store equal to the viewport, resizing the field's
// wrap bounds with it.
fn wire_resize(window: &web::Window, frame_ctx: &Rc<RefCell<frame::FrameContext>>) -> dom::Listener {
    let ctx = frame_ctx.clone();
    let window_resize = window.clone();
    dom::Listener::new(window, "resize", move |_| {
        let (w, h) = dom::viewport_size(&window_resize);
        if let Some(a) = &mut ctx.borrow_mut().animator {
            a.resize(w as f64, h as f64);
        }
        log::debug!("[resize] {}x{}", w, h);
    })
}

/// `Ok(None)` when the page offers neither a 2D context nor a cursor: nothing
/// starts. A missing or non-canvas element is an error.
fn mount(canvas_id: &str) -> anyhow::Result<Option<Mounted>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, canvas_id)?;

    let ctx2d = dom::context_2d(&canvas);
    let cursor = cursor::CursorView::mount(&window, &document);
    let plan = plan::MountPlan::new(ctx2d.is_some(), cursor.is_some());
    if !plan.needs_loop() {
        log::warn!("[mount] #{} has no 2D context and no cursor, nothing to run", canvas_id);
        return Ok(None);
    }

    let (w, h) = dom::viewport_size(&window);
    let animator = match ctx2d {
        Some(ctx2d) => {
            let config = dom::read_config(&canvas);
            let field = ParticleField::new(w as f64, h as f64, config, &mut rand::thread_rng());
            Some(Animator::new(field, canvas::CanvasSurface::new(canvas, ctx2d)))
        }
        None => {
            log::warn!("[mount] #{} has no 2D context, background disabled", canvas_id);
            None
        }
    };

    let pointer = Rc::new(Cell::new(PointerState::default()));
    let follower = cursor.as_ref().map(|c| c.follower.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        animator,
        pointer: pointer.clone(),
        cursor,
        token: CancelToken::new(),
        last_instant: Instant::now(),
    }));

    let mut listeners = events::wire_input_handlers(&events::InputWiring {
        window: window.clone(),
        document: document.clone(),
        pointer,
        follower,
    });
    if plan.field {
        listeners.push(wire_resize(&window, &frame_ctx));
    }

    let frame_loop = frame::start_loop(frame_ctx.clone());
    log::info!(
        "[mount] #{} {}x{} {:?} listeners={}",
        canvas_id,
        w,
        h,
        plan,
        listeners.len()
    );

    Ok(Some(Mounted {
        frame_ctx,
        frame_loop,
        listeners,
    }))
}
