// Host-side tests for the panel visibility coordinator.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod bus {
    include!("../src/bus.rs");
}
mod constants {
    include!("../src/constants.rs");
}
mod panels {
    include!("../src/panels.rs");
}

use panels::*;
use std::cell::RefCell;
use std::rc::Rc;

const DEFAULTS: [bool; 6] = [true, true, true, false, false, false];

fn record(coord: &mut PanelCoordinator) -> Rc<RefCell<Vec<PanelEvent>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    coord.subscribe(move |ev| sink.borrow_mut().push(*ev));
    log
}

#[test]
fn starts_with_default_layout() {
    let coord = PanelCoordinator::new();
    assert_eq!(coord.flags().as_slice(), &DEFAULTS);
    assert!(!coord.is_pair_visible());
    assert_eq!(coord.pair().front(), Panel::Loisirs);
}

#[test]
fn index_mapping_matches_display_order() {
    for (i, p) in Panel::ALL.iter().enumerate() {
        assert_eq!(p.index(), i);
        assert_eq!(Panel::from_index(i), Some(*p));
    }
    assert_eq!(Panel::from_index(6), None);
    assert_eq!(Panel::from_index(usize::MAX), None);
}

#[test]
fn out_of_range_index_is_ignored() {
    let mut coord = PanelCoordinator::new();
    let events = record(&mut coord);
    assert!(!coord.toggle(6, true));
    assert!(!coord.toggle(42, false));
    assert_eq!(coord.flags().as_slice(), &DEFAULTS);
    assert!(events.borrow().is_empty());
}

#[test]
fn plain_toggle_on_then_off_restores_sequence() {
    let mut coord = PanelCoordinator::new();
    for i in 0..3 {
        // start each plain panel from off
        coord.toggle(i, false);
        let before = *coord.flags();
        coord.toggle(i, true);
        assert!(coord.flags().get(Panel::from_index(i).unwrap()));
        coord.toggle(i, false);
        assert_eq!(*coord.flags(), before, "panel {i} did not restore");
    }
}

#[test]
fn same_state_toggle_is_silent() {
    let mut coord = PanelCoordinator::new();
    let events = record(&mut coord);
    assert!(!coord.toggle_panel(Panel::Experience, true));
    assert!(!coord.toggle_panel(Panel::Skills, false));
    assert_eq!(coord.flags().as_slice(), &DEFAULTS);
    assert!(events.borrow().is_empty());
}

#[test]
fn portfolio_open_then_close_scenario() {
    let mut coord = PanelCoordinator::new();
    coord.toggle(5, true);
    assert_eq!(
        coord.flags().as_slice(),
        &[false, false, false, false, false, true]
    );
    assert_eq!(coord.flags().active_count(), 1);
    coord.toggle(5, false);
    assert_eq!(coord.flags().as_slice(), &DEFAULTS);
}

#[test]
fn portfolio_close_restores_defaults_regardless_of_prior_state() {
    let mut coord = PanelCoordinator::new();
    coord.toggle_panel(Panel::Experience, false);
    coord.toggle_panel(Panel::Skills, true);
    coord.toggle_panel(Panel::Portfolio, true);
    assert_eq!(coord.flags().active_count(), 1);
    assert!(coord.is_active(Panel::Portfolio));
    coord.toggle_panel(Panel::Portfolio, false);
    assert_eq!(coord.flags().as_slice(), &DEFAULTS);
}

#[test]
fn plain_toggle_restores_sequence_with_portfolio_open() {
    let mut coord = PanelCoordinator::new();
    coord.toggle(5, true);
    let before = *coord.flags();
    for i in 0..3 {
        coord.toggle(i, true);
        assert!(coord.is_active(Panel::Portfolio));
        coord.toggle(i, false);
        assert_eq!(*coord.flags(), before, "panel {i} did not restore");
    }
}

#[test]
fn pair_activation_leaves_portfolio_untouched() {
    let mut coord = PanelCoordinator::new();
    coord.toggle_panel(Panel::Portfolio, true);
    coord.toggle_tab(Tab::Skills, true);
    assert!(coord.is_active(Panel::Portfolio));
    assert!(coord.is_active(Panel::Skills));
    assert!(!coord.is_active(Panel::Loisirs));
}

#[test]
fn pair_members_are_exclusive_and_reorder() {
    let mut coord = PanelCoordinator::new();
    coord.toggle(3, true);
    assert!(coord.is_active(Panel::Skills));
    assert!(!coord.is_active(Panel::Loisirs));
    assert_eq!(coord.pair().front(), Panel::Skills);
    assert!(coord.pair().rank(Panel::Skills) > coord.pair().rank(Panel::Loisirs));
    assert!(coord.is_pair_visible());

    coord.toggle(4, true);
    assert!(!coord.is_active(Panel::Skills));
    assert!(coord.is_active(Panel::Loisirs));
    assert_eq!(coord.pair().front(), Panel::Loisirs);
    assert!(coord.pair().rank(Panel::Loisirs) > coord.pair().rank(Panel::Skills));
    assert_eq!(coord.pair().rank(Panel::Experience), None);
}

#[test]
fn deactivating_either_pair_member_collapses_both() {
    let mut coord = PanelCoordinator::new();
    coord.toggle_tab(Tab::Loisirs, true);
    coord.toggle_panel(Panel::Skills, false);
    assert!(!coord.is_active(Panel::Skills));
    assert!(!coord.is_active(Panel::Loisirs));
    assert!(!coord.is_pair_visible());

    coord.toggle_tab(Tab::Skills, true);
    coord.toggle_tab(Tab::Skills, false);
    assert!(!coord.is_pair_visible());
}

#[test]
fn applied_toggle_publishes_snapshot_then_cue() {
    let mut coord = PanelCoordinator::new();
    let events = record(&mut coord);
    coord.toggle_panel(Panel::Skills, true);
    coord.toggle_panel(Panel::Skills, false);

    let events = events.borrow();
    assert_eq!(events.len(), 4);
    match events[0] {
        PanelEvent::Changed(snap) => {
            assert!(snap.flags.get(Panel::Skills));
            assert_eq!(snap.pair.front(), Panel::Skills);
            assert!(snap.is_pair_visible());
        }
        other => panic!("expected snapshot, got {other:?}"),
    }
    assert_eq!(events[1], PanelEvent::Cue(SoundCue::Open));
    assert!(matches!(events[2], PanelEvent::Changed(s) if !s.is_pair_visible()));
    assert_eq!(events[3], PanelEvent::Cue(SoundCue::Close));
}

#[test]
fn unsubscribed_handler_stops_receiving() {
    let mut coord = PanelCoordinator::new();
    let hits = Rc::new(RefCell::new(0));
    let h = hits.clone();
    let id = coord.subscribe(move |_| *h.borrow_mut() += 1);
    coord.toggle_panel(Panel::Formation, false);
    assert!(coord.unsubscribe(id));
    coord.toggle_panel(Panel::Formation, true);
    assert_eq!(*hits.borrow(), 2);
}

#[test]
fn visibility_classes() {
    let mut coord = PanelCoordinator::new();
    assert_eq!(coord.visibility(Panel::Experience).class(), "active");
    assert_eq!(coord.visibility(Panel::Portfolio).class(), "inactive");
    coord.toggle_panel(Panel::Portfolio, true);
    assert_eq!(coord.visibility(Panel::Portfolio).menu_class(), "menu-active");
    assert_eq!(coord.visibility(Panel::Experience).link_class(), "link-inactive");
}

#[test]
fn names_parse_case_insensitively() {
    assert_eq!("Experience".parse::<Panel>(), Ok(Panel::Experience));
    assert_eq!(" PORTFOLIO ".parse::<Panel>(), Ok(Panel::Portfolio));
    assert_eq!("competances".parse::<Panel>(), Ok(Panel::Competences));
    assert_eq!("loisirs".parse::<Tab>(), Ok(Tab::Loisirs));
    assert_eq!(Tab::Skills.panel(), Panel::Skills);
    for p in Panel::ALL {
        assert_eq!(p.name().parse::<Panel>(), Ok(p));
    }

    let err = "about".parse::<Panel>().unwrap_err();
    assert_eq!(err, ParseNameError::UnknownPanel("about".to_string()));
    assert!(err.to_string().contains("about"));
    assert!(matches!(
        "portfolio".parse::<Tab>(),
        Err(ParseNameError::UnknownTab(_))
    ));
}
