use crate::lines::LineRegistry;
use crate::overlay;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-frame redraw state. Line events only flip `dirty`; the SVG layer is
/// rebuilt at most once per animation frame.
pub struct FrameContext {
    pub document: web::Document,
    pub layer: web::Element,
    pub lines: Rc<RefCell<LineRegistry>>,
    pub dirty: Rc<Cell<bool>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        if !self.dirty.replace(false) {
            return;
        }
        // a handler may hold the registry mid-update; retry next frame
        match self.lines.try_borrow() {
            Ok(lines) => overlay::draw_lines(&self.document, &self.layer, &lines),
            Err(_) => self.dirty.set(true),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
