use field_core::CursorFollower;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

use crate::constants::{CURSOR_DOT_ID, CURSOR_RING_ID};
use crate::dom;
use crate::style;

/// DOM side of the spring cursor: two absolutely positioned elements driven
/// by a shared [`CursorFollower`].
pub struct CursorView {
    pub follower: Rc<RefCell<CursorFollower>>,
    ring: web::HtmlElement,
    dot: web::HtmlElement,
}

impl CursorView {
    /// `None` on touch-only devices or when the page has no cursor elements.
    pub fn mount(window: &web::Window, document: &web::Document) -> Option<Self> {
        if !dom::has_fine_pointer(window) {
            log::info!("[cursor] no fine pointer, keeping the system cursor");
            return None;
        }
        let ring = dom::html_element_by_id(document, CURSOR_RING_ID)?;
        let dot = dom::html_element_by_id(document, CURSOR_DOT_ID)?;
        let view = Self {
            follower: Rc::new(RefCell::new(CursorFollower::new())),
            ring,
            dot,
        };
        view.apply();
        Some(view)
    }

    pub fn frame(&self, dt_sec: f64) {
        self.follower.borrow_mut().step(dt_sec);
        self.apply();
    }

    pub fn hide(&self) {
        for el in [&self.ring, &self.dot] {
            _ = el.style().set_property("display", style::display(false));
        }
    }

    fn apply(&self) {
        let f = self.follower.borrow();
        let shown = style::display(f.is_visible());

        let ring = self.ring.style();
        _ = ring.set_property("display", shown);
        _ = ring.set_property("transform", &style::cursor_transform(f.ring_pos()));
        let size = style::px(f.ring_size());
        _ = ring.set_property("width", &size);
        _ = ring.set_property("height", &size);
        _ = ring.set_property("opacity", &style::opacity(f.ring_opacity()));

        let dot = self.dot.style();
        _ = dot.set_property("display", shown);
        _ = dot.set_property("transform", &style::cursor_transform(f.dot_pos()));
    }
}
