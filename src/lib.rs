#![cfg(target_arch = "wasm32")]
use crate::events::Shared;
use crate::lines::LineRegistry;
use crate::panels::PanelCoordinator;
use crate::windows::WindowStack;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub mod bus;
pub mod constants;
mod dom;
mod events;
mod frame;
pub mod geometry;
pub mod lines;
mod overlay;
pub mod panels;
pub mod windows;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let layer = overlay::ensure_line_layer(&document)
        .ok_or_else(|| anyhow::anyhow!("cannot create #viewport-lines layer"))?;

    let shared = Shared {
        document: document.clone(),
        panels: Rc::new(RefCell::new(PanelCoordinator::new())),
        lines: Rc::new(RefCell::new(LineRegistry::new())),
        windows: Rc::new(RefCell::new(WindowStack::new())),
        tracked: Rc::new(RefCell::new(Vec::new())),
        dragging: Rc::new(RefCell::new(None)),
    };

    // Line changes only mark the overlay dirty; the frame loop redraws.
    let dirty = Rc::new(Cell::new(true));
    {
        let dirty = dirty.clone();
        shared.lines.borrow_mut().subscribe(move |_ev| dirty.set(true));
    }

    events::wire_windows(&shared);
    events::wire_drag_tracking(&shared);
    events::wire_resize(&shared);
    events::wire_panel_controls(&shared);

    // Bring the page in line with the initial panel layout.
    let snapshot = shared.panels.borrow().snapshot();
    events::apply_panel_snapshot(&shared, &snapshot);
    log::info!("[panels] initial flags={:?}", snapshot.flags.as_slice());

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        document,
        layer,
        lines: shared.lines.clone(),
        dirty,
    })));
    Ok(())
}
