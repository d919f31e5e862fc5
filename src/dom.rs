use crate::geometry::{Rect, Viewport};
use crate::lines::LineConfig;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn viewport() -> Option<Viewport> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(width as f32, height as f32))
}

/// Bounding box of a mounted element; `None` while it is detached.
pub fn element_rect(el: &web::Element) -> Option<Rect> {
    if !el.is_connected() {
        return None;
    }
    let r = el.get_bounding_client_rect();
    Some(Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    ))
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Per-element connector overrides: `data-line-distance`, `data-line-color`.
pub fn line_config_for(el: &web::Element) -> LineConfig {
    let mut config = LineConfig::default();
    if let Some(raw) = el.get_attribute("data-line-distance") {
        match raw.trim().parse::<f32>() {
            Ok(v) if v.is_finite() => config.distance_percentage = v,
            _ => log::warn!("[dom] ignoring data-line-distance={:?}", raw),
        }
    }
    if let Some(color) = el.get_attribute("data-line-color") {
        if !color.trim().is_empty() {
            config.color = color;
        }
    }
    config
}

#[inline]
pub fn set_state_class(el: &web::Element, on_class: &str, off_class: &str, on: bool) {
    let cl = el.class_list();
    let (add, remove) = if on {
        (on_class, off_class)
    } else {
        (off_class, on_class)
    };
    _ = cl.remove_1(remove);
    _ = cl.add_1(add);
}

#[inline]
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(property, value);
    }
}

pub fn dispatch_cue(document: &web::Document, cue: &str) {
    let init = web::CustomEventInit::new();
    init.set_detail(&JsValue::from_str(cue));
    match web::CustomEvent::new_with_event_init_dict("portfolio:cue", &init) {
        Ok(ev) => {
            _ = document.dispatch_event(&ev);
        }
        Err(e) => log::warn!("[dom] cue event failed: {:?}", e),
    }
}
