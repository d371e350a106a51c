use field_core::FieldConfig;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{CONFIG_ATTRIBUTE, FINE_POINTER_QUERY};
use crate::style;

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", id, e))
}

#[inline]
pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// 2D context, or `None` when the browser refuses one.
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    match canvas.get_context("2d") {
        Ok(Some(ctx)) => ctx.dyn_into::<web::CanvasRenderingContext2d>().ok(),
        Ok(None) => None,
        Err(e) => {
            log::warn!("getContext('2d') failed: {:?}", e);
            None
        }
    }
}

/// Current viewport size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> (u32, u32) {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    style::viewport_size(read(window.inner_width()), read(window.inner_height()))
}

pub fn has_fine_pointer(window: &web::Window) -> bool {
    matches!(window.match_media(FINE_POINTER_QUERY), Ok(Some(mq)) if mq.matches())
}

/// Field config from the canvas' data attribute, defaults when absent or invalid.
pub fn read_config(canvas: &web::HtmlCanvasElement) -> FieldConfig {
    match canvas.get_attribute(CONFIG_ATTRIBUTE) {
        None => FieldConfig::default(),
        Some(json) => match FieldConfig::from_json(&json) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("ignoring {}: {}", CONFIG_ATTRIBUTE, e);
                FieldConfig::default()
            }
        },
    }
}

/// Event listener that unregisters itself when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        if let Err(e) =
            target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::warn!("addEventListener('{}') failed: {:?}", event, e);
        }
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
