use super::{Shared, TrackedElement};
use crate::dom;
use crate::lines::LineTracker;
use crate::windows::WindowEvent;
use web_sys as web;

/// Click-to-front for every `[data-window-id]` element.
pub fn wire_windows(shared: &Shared) {
    for el in dom::query_all(&shared.document, "[data-window-id]") {
        let Some(id) = el.get_attribute("data-window-id") else {
            continue;
        };
        let z = shared.windows.borrow_mut().register(&id);
        dom::set_style(&el, "z-index", &z.to_string());

        let windows = shared.windows.clone();
        let target = el.clone();
        dom::add_listener(&el, "pointerdown", move |_ev| {
            let z = windows.borrow_mut().bring_to_front(&id);
            dom::set_style(&target, "z-index", &z.to_string());
        });
    }

    let document = shared.document.clone();
    shared.windows.borrow_mut().subscribe(move |ev| match ev {
        WindowEvent::ActiveChanged(active) => {
            for el in dom::query_all(&document, "[data-window-id]") {
                let id = el.get_attribute("data-window-id");
                let is_active = id.as_deref() == active.as_deref();
                dom::set_state_class(&el, "window-active", "window-inactive", is_active);
            }
        }
    });
    log::info!("[windows] {} windows registered", shared.windows.borrow().len());
}

/// Track `[data-line-id]` elements and feed drag movement to their routers.
///
/// The element itself is moved by whatever drag library the page uses; we
/// only read its bounding box. Besides raw pointer movement, a
/// `portfolio:drag-move` event dispatched on the element forces a re-read.
pub fn wire_drag_tracking(shared: &Shared) {
    let viewport = dom::viewport();
    for el in dom::query_all(&shared.document, "[data-line-id]") {
        let Some(id) = el.get_attribute("data-line-id").filter(|s| !s.is_empty()) else {
            continue;
        };
        let mut tracker = LineTracker::new(id, dom::line_config_for(&el));
        if let Some(vp) = viewport {
            tracker.mount(dom::element_rect(&el), vp, &mut shared.lines.borrow_mut());
        }

        let index = {
            let mut tracked = shared.tracked.borrow_mut();
            tracked.push(TrackedElement {
                el: el.clone(),
                tracker,
            });
            tracked.len() - 1
        };

        let dragging = shared.dragging.clone();
        dom::add_listener(&el, "pointerdown", move |_ev| {
            *dragging.borrow_mut() = Some(index);
        });

        let s = shared.clone();
        dom::add_listener(&el, "portfolio:drag-move", move |_ev| {
            drag_moved(&s, index);
        });
    }

    let Some(window) = web::window() else {
        return;
    };
    let target: &web::EventTarget = &window;

    let s = shared.clone();
    dom::add_listener(target, "pointermove", move |_ev| {
        let current = *s.dragging.borrow();
        if let Some(index) = current {
            drag_moved(&s, index);
        }
    });

    for name in ["pointerup", "pointercancel"] {
        let dragging = shared.dragging.clone();
        dom::add_listener(target, name, move |_ev| {
            *dragging.borrow_mut() = None;
        });
    }
    log::info!("[lines] tracking {} elements", shared.tracked.borrow().len());
}

fn drag_moved(shared: &Shared, index: usize) {
    let Some(viewport) = dom::viewport() else {
        return;
    };
    let mut tracked = shared.tracked.borrow_mut();
    let Some(t) = tracked.get_mut(index) else {
        return;
    };
    let rect = dom::element_rect(&t.el);
    t.tracker.drag_moved(rect, viewport, &mut shared.lines.borrow_mut());
}

pub fn wire_resize(shared: &Shared) {
    let Some(window) = web::window() else {
        return;
    };
    let s = shared.clone();
    dom::add_listener(&window, "resize", move |_ev| {
        let Some(viewport) = dom::viewport() else {
            return;
        };
        let mut lines = s.lines.borrow_mut();
        for t in s.tracked.borrow_mut().iter_mut() {
            t.tracker.resize(dom::element_rect(&t.el), viewport, &mut lines);
        }
    });
}
