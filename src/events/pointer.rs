use crate::constants::HOVERABLE_SELECTOR;
use crate::dom::Listener;
use field_core::{CursorFollower, PointerState};
use glam::DVec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub pointer: Rc<Cell<PointerState>>,
    pub follower: Option<Rc<RefCell<CursorFollower>>>,
}

/// Register every pointer listener; dropping the result unregisters them.
pub fn wire_input_handlers(w: &InputWiring) -> Vec<Listener> {
    let mut listeners = vec![wire_mousemove(w)];
    if let Some(follower) = &w.follower {
        listeners.extend(wire_visibility(&w.document, follower));
        listeners.extend(wire_hover(&w.document, follower));
    }
    listeners
}

fn wire_mousemove(w: &InputWiring) -> Listener {
    let pointer = w.pointer.clone();
    let follower = w.follower.clone();
    Listener::new(&w.window, "mousemove", move |ev: web::Event| {
        let Some(me) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let (x, y) = (me.client_x() as f64, me.client_y() as f64);
        // storage only; the frame loop reads it on its next tick
        let mut state = pointer.get();
        state.moved(x, y);
        pointer.set(state);
        if let Some(f) = &follower {
            f.borrow_mut().pointer_moved(DVec2::new(x, y));
        }
    })
}

fn wire_visibility(document: &web::Document, follower: &Rc<RefCell<CursorFollower>>) -> Vec<Listener> {
    let enter = follower.clone();
    let leave = follower.clone();
    vec![
        Listener::new(document, "mouseenter", move |_| {
            enter.borrow_mut().set_visible(true);
        }),
        Listener::new(document, "mouseleave", move |_| {
            leave.borrow_mut().set_visible(false);
        }),
    ]
}

// Only elements present at mount are tracked.
fn wire_hover(document: &web::Document, follower: &Rc<RefCell<CursorFollower>>) -> Vec<Listener> {
    let nodes = match document.query_selector_all(HOVERABLE_SELECTOR) {
        Ok(n) => n,
        Err(e) => {
            log::warn!("[cursor] bad hover selector: {:?}", e);
            return Vec::new();
        }
    };
    let mut listeners = Vec::with_capacity(nodes.length() as usize * 2);
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else {
            continue;
        };
        let enter = follower.clone();
        let leave = follower.clone();
        listeners.push(Listener::new(&node, "mouseenter", move |_| {
            enter.borrow_mut().set_hovering(true);
        }));
        listeners.push(Listener::new(&node, "mouseleave", move |_| {
            leave.borrow_mut().set_hovering(false);
        }));
    }
    log::info!("[cursor] tracking {} hoverable elements", nodes.length());
    listeners
}
