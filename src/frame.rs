use crate::canvas::CanvasSurface;
use crate::constants::MAX_FRAME_DT_SEC;
use crate::cursor::CursorView;
use crate::style;
use field_core::{Animator, CancelToken, FrameStatus, PointerState};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    /// `None` when the canvas has no 2D context; the cursor still runs.
    pub animator: Option<Animator<CanvasSurface>>,
    pub pointer: Rc<Cell<PointerState>>,
    pub cursor: Option<CursorView>,
    pub token: CancelToken,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) -> FrameStatus {
        if self.token.is_cancelled() {
            return FrameStatus::Stopped;
        }
        let now = Instant::now();
        let dt_sec = style::frame_dt((now - self.last_instant).as_secs_f64(), MAX_FRAME_DT_SEC);
        self.last_instant = now;

        if let Some(a) = &mut self.animator {
            if a.frame(self.pointer.get().position()) == FrameStatus::Stopped {
                return FrameStatus::Stopped;
            }
        }
        if let Some(c) = &self.cursor {
            c.frame(dt_sec);
        }
        FrameStatus::Continue
    }
}

/// Handle to a running requestAnimationFrame loop.
pub struct FrameLoop {
    token: CancelToken,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    /// Stop the loop: no frame callback runs after this returns. Idempotent.
    pub fn cancel(&self) {
        self.token.cancel();
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // drops the closure and with it the loop's reference to itself
        self.tick.borrow_mut().take();
    }
}

/// Request frames until `frame_ctx` reports [`FrameStatus::Stopped`] or the
/// returned loop is cancelled. Pointer and resize updates never restart it.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let token = frame_ctx.borrow().token.clone();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let raf_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_tick.set(None);
        if frame_ctx.borrow_mut().frame() == FrameStatus::Stopped {
            return;
        }
        if let Some(cb) = tick_clone.borrow().as_ref() {
            raf_tick.set(request_frame(cb));
        }
    }) as Box<dyn FnMut()>));

    if let Some(cb) = tick.borrow().as_ref() {
        raf_id.set(request_frame(cb));
    }
    FrameLoop {
        token,
        raf_id,
        tick,
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    let w = web::window()?;
    match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}
