pub mod panels;
pub mod pointer;

pub use panels::{apply_panel_snapshot, wire_panel_controls};
pub use pointer::{wire_drag_tracking, wire_resize, wire_windows};

use crate::lines::{LineRegistry, LineTracker};
use crate::panels::PanelCoordinator;
use crate::windows::WindowStack;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// A `[data-line-id]` element and the tracker routing its connector.
pub struct TrackedElement {
    pub el: web::Element,
    pub tracker: LineTracker,
}

/// Coordinators shared by every listener. Each is the only writer of its
/// own state; listeners borrow one at a time.
#[derive(Clone)]
pub struct Shared {
    pub document: web::Document,
    pub panels: Rc<RefCell<PanelCoordinator>>,
    pub lines: Rc<RefCell<LineRegistry>>,
    pub windows: Rc<RefCell<WindowStack>>,
    pub tracked: Rc<RefCell<Vec<TrackedElement>>>,
    pub dragging: Rc<RefCell<Option<usize>>>,
}
