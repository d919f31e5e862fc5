use super::Shared;
use crate::dom;
use crate::overlay;
use crate::panels::{Panel, PanelEvent, PanelSnapshot, Tab, Visibility};
use web_sys as web;

// Menu markup may name the panel or give its display index.
#[derive(Clone, Copy, Debug)]
enum ToggleTarget {
    Named(Panel),
    Index(usize),
}

fn parse_toggle_target(raw: &str) -> Option<ToggleTarget> {
    match raw.parse::<Panel>() {
        Ok(panel) => Some(ToggleTarget::Named(panel)),
        Err(e) => match raw.trim().parse::<usize>() {
            Ok(i) => Some(ToggleTarget::Index(i)),
            Err(_) => {
                log::warn!("[panels] {}", e);
                None
            }
        },
    }
}

fn panel_attr(el: &web::Element, name: &str) -> Option<Panel> {
    let raw = el.get_attribute(name)?;
    match raw.parse::<Panel>() {
        Ok(p) => Some(p),
        Err(e) => {
            log::warn!("[panels] {}: {}", name, e);
            None
        }
    }
}

pub fn wire_panel_controls(shared: &Shared) {
    for el in dom::query_all(&shared.document, "[data-panel-toggle]") {
        let Some(target) = el
            .get_attribute("data-panel-toggle")
            .and_then(|raw| parse_toggle_target(&raw))
        else {
            continue;
        };
        let panels = shared.panels.clone();
        dom::add_listener(&el, "click", move |_ev| {
            let mut p = panels.borrow_mut();
            match target {
                ToggleTarget::Named(panel) => {
                    let next = !p.is_active(panel);
                    p.toggle_panel(panel, next);
                }
                ToggleTarget::Index(i) => {
                    let next = Panel::from_index(i).map_or(true, |panel| !p.is_active(panel));
                    p.toggle(i, next);
                }
            }
        });
    }

    for el in dom::query_all(&shared.document, "[data-panel-close]") {
        let Some(panel) = panel_attr(&el, "data-panel-close") else {
            continue;
        };
        let panels = shared.panels.clone();
        dom::add_listener(&el, "click", move |_ev| {
            panels.borrow_mut().toggle_panel(panel, false);
        });
    }

    // Tab headers inside the Skills/Loisirs container only ever activate.
    for el in dom::query_all(&shared.document, "[data-tab-toggle]") {
        let Some(raw) = el.get_attribute("data-tab-toggle") else {
            continue;
        };
        let tab = match raw.parse::<Tab>() {
            Ok(t) => t,
            Err(e) => {
                log::warn!("[panels] {}", e);
                continue;
            }
        };
        let panels = shared.panels.clone();
        dom::add_listener(&el, "click", move |_ev| {
            panels.borrow_mut().toggle_tab(tab, true);
        });
    }

    let s = shared.clone();
    shared.panels.borrow_mut().subscribe(move |ev| match ev {
        PanelEvent::Changed(snapshot) => apply_panel_snapshot(&s, snapshot),
        PanelEvent::Cue(cue) => dom::dispatch_cue(&s.document, cue.name()),
    });
    log::info!("[panels] controls wired");
}

/// Push a snapshot into the DOM: panel visibility, menu/link classes, pair
/// container and tab stacking. Hidden panels count as unmounted.
pub fn apply_panel_snapshot(shared: &Shared, snapshot: &PanelSnapshot) {
    let doc = &shared.document;
    let flags = &snapshot.flags;

    for el in dom::query_all(doc, "[data-panel]") {
        let Some(panel) = panel_attr(&el, "data-panel") else {
            continue;
        };
        let on = flags.get(panel);
        overlay::set_visible(&el, on);
        dom::set_state_class(
            &el,
            Visibility::Active.class(),
            Visibility::Inactive.class(),
            on,
        );
        sync_mounted(shared, &el, on);
    }

    for el in dom::query_all(doc, "[data-panel-toggle]") {
        if let Some(panel) = el
            .get_attribute("data-panel-toggle")
            .and_then(|raw| parse_toggle_target(&raw))
            .and_then(|t| match t {
                ToggleTarget::Named(p) => Some(p),
                ToggleTarget::Index(i) => Panel::from_index(i),
            })
        {
            dom::set_state_class(
                &el,
                Visibility::Active.menu_class(),
                Visibility::Inactive.menu_class(),
                flags.get(panel),
            );
        }
    }

    for el in dom::query_all(doc, "[data-panel-link]") {
        if let Some(panel) = panel_attr(&el, "data-panel-link") {
            dom::set_state_class(
                &el,
                Visibility::Active.link_class(),
                Visibility::Inactive.link_class(),
                flags.get(panel),
            );
        }
    }

    for el in dom::query_all(doc, "[data-panel-pair]") {
        overlay::set_visible(&el, snapshot.is_pair_visible());
    }

    for el in dom::query_all(doc, "[data-tab]") {
        let Some(tab) = el.get_attribute("data-tab").and_then(|t| t.parse::<Tab>().ok()) else {
            continue;
        };
        if let Some(rank) = snapshot.pair.rank(tab.panel()) {
            dom::set_style(&el, "z-index", &rank.to_string());
        }
    }
}

// Register/unregister the panel's window and connector lines as it shows/hides.
fn sync_mounted(shared: &Shared, panel_el: &web::Element, on: bool) {
    if let Some(id) = panel_el.get_attribute("data-window-id") {
        let mut windows = shared.windows.borrow_mut();
        if on {
            let z = windows.register(&id);
            dom::set_style(panel_el, "z-index", &z.to_string());
        } else {
            windows.unregister(&id);
        }
    }

    let Some(viewport) = dom::viewport() else {
        return;
    };
    let mut lines = shared.lines.borrow_mut();
    for t in shared.tracked.borrow_mut().iter_mut() {
        let node: &web::Node = &t.el;
        if !panel_el.contains(Some(node)) {
            continue;
        }
        if on {
            t.tracker.mount(dom::element_rect(&t.el), viewport, &mut lines);
        } else {
            t.tracker.unmount(&mut lines);
        }
    }
}
