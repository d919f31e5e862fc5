use crate::bus::{SubscriptionId, Topic};
use crate::constants::{DEFAULT_PANEL_FLAGS, PAIR_RANK_BACK, PAIR_RANK_FRONT};
use std::fmt;
use std::str::FromStr;

/// Named content sections of the page, in their fixed display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Panel {
    Experience,
    Formation,
    Competences,
    Skills,
    Loisirs,
    Portfolio,
}

impl Panel {
    pub const COUNT: usize = 6;
    pub const ALL: [Panel; Panel::COUNT] = [
        Panel::Experience,
        Panel::Formation,
        Panel::Competences,
        Panel::Skills,
        Panel::Loisirs,
        Panel::Portfolio,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(index: usize) -> Option<Panel> {
        Self::ALL.get(index).copied()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Panel::Experience => "experience",
            Panel::Formation => "formation",
            Panel::Competences => "competences",
            Panel::Skills => "skills",
            Panel::Loisirs => "loisirs",
            Panel::Portfolio => "portfolio",
        }
    }

    /// The other member of the Skills/Loisirs pair.
    pub const fn pair_partner(self) -> Option<Panel> {
        match self {
            Panel::Skills => Some(Panel::Loisirs),
            Panel::Loisirs => Some(Panel::Skills),
            _ => None,
        }
    }

    /// Portfolio hides every other panel while it is open.
    #[inline]
    pub const fn is_override(self) -> bool {
        matches!(self, Panel::Portfolio)
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseNameError {
    #[error("unknown panel name: {0:?}")]
    UnknownPanel(String),
    #[error("unknown tab name: {0:?} (expected \"skills\" or \"loisirs\")")]
    UnknownTab(String),
}

impl FromStr for Panel {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "experience" => Ok(Panel::Experience),
            "formation" => Ok(Panel::Formation),
            // older markup used the French spelling
            "competences" | "competances" => Ok(Panel::Competences),
            "skills" => Ok(Panel::Skills),
            "loisirs" => Ok(Panel::Loisirs),
            "portfolio" => Ok(Panel::Portfolio),
            _ => Err(ParseNameError::UnknownPanel(s.to_string())),
        }
    }
}

/// Tabs of the combined Skills/Loisirs container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Skills,
    Loisirs,
}

impl Tab {
    #[inline]
    pub const fn panel(self) -> Panel {
        match self {
            Tab::Skills => Panel::Skills,
            Tab::Loisirs => Panel::Loisirs,
        }
    }
}

impl FromStr for Tab {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skills" => Ok(Tab::Skills),
            "loisirs" => Ok(Tab::Loisirs),
            _ => Err(ParseNameError::UnknownTab(s.to_string())),
        }
    }
}

/// Fixed-length visibility flags, indexed by [`Panel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelSet([bool; Panel::COUNT]);

impl Default for PanelSet {
    fn default() -> Self {
        Self(DEFAULT_PANEL_FLAGS)
    }
}

impl PanelSet {
    pub const fn from_flags(flags: [bool; Panel::COUNT]) -> Self {
        Self(flags)
    }

    pub const fn none() -> Self {
        Self([false; Panel::COUNT])
    }

    #[inline]
    pub fn get(&self, panel: Panel) -> bool {
        self.0[panel.index()]
    }

    #[inline]
    fn set(&mut self, panel: Panel, on: bool) {
        self.0[panel.index()] = on;
    }

    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (Panel, bool)> + '_ {
        Panel::ALL.iter().map(move |p| (*p, self.get(*p)))
    }

    pub fn active_count(&self) -> usize {
        self.0.iter().filter(|on| **on).count()
    }
}

/// Stacking ranks of the two tabs sharing the pair container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PairStacking {
    pub skills: u32,
    pub loisirs: u32,
}

impl Default for PairStacking {
    fn default() -> Self {
        Self {
            skills: PAIR_RANK_BACK,
            loisirs: PAIR_RANK_FRONT,
        }
    }
}

impl PairStacking {
    fn bring_forward(&mut self, panel: Panel) {
        match panel {
            Panel::Skills => {
                self.skills = PAIR_RANK_FRONT;
                self.loisirs = PAIR_RANK_BACK;
            }
            Panel::Loisirs => {
                self.skills = PAIR_RANK_BACK;
                self.loisirs = PAIR_RANK_FRONT;
            }
            _ => {}
        }
    }

    /// Rank for a pair member; `None` for panels outside the pair.
    pub fn rank(&self, panel: Panel) -> Option<u32> {
        match panel {
            Panel::Skills => Some(self.skills),
            Panel::Loisirs => Some(self.loisirs),
            _ => None,
        }
    }

    pub fn front(&self) -> Panel {
        if self.skills > self.loisirs {
            Panel::Skills
        } else {
            Panel::Loisirs
        }
    }
}

/// CSS-class view of a single panel flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Active,
    Inactive,
}

impl Visibility {
    #[inline]
    pub const fn from_flag(on: bool) -> Self {
        if on {
            Visibility::Active
        } else {
            Visibility::Inactive
        }
    }

    pub const fn class(self) -> &'static str {
        match self {
            Visibility::Active => "active",
            Visibility::Inactive => "inactive",
        }
    }

    pub const fn menu_class(self) -> &'static str {
        match self {
            Visibility::Active => "menu-active",
            Visibility::Inactive => "menu-inactive",
        }
    }

    pub const fn link_class(self) -> &'static str {
        match self {
            Visibility::Active => "link-active",
            Visibility::Inactive => "link-inactive",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelSnapshot {
    pub flags: PanelSet,
    pub pair: PairStacking,
}

impl PanelSnapshot {
    #[inline]
    pub fn is_pair_visible(&self) -> bool {
        self.flags.get(Panel::Skills) || self.flags.get(Panel::Loisirs)
    }
}

/// Open/close sound hint emitted alongside every applied toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    Open,
    Close,
}

impl SoundCue {
    pub const fn name(self) -> &'static str {
        match self {
            SoundCue::Open => "open",
            SoundCue::Close => "close",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelEvent {
    Changed(PanelSnapshot),
    Cue(SoundCue),
}

/// Owns the panel flags and enforces the pair and override rules.
///
/// All mutation goes through [`PanelCoordinator::toggle`] (or its typed
/// variants). Subscribers receive one `Changed` snapshot per applied toggle,
/// followed by a `Cue`; toggles that change nothing publish nothing.
#[derive(Default)]
pub struct PanelCoordinator {
    flags: PanelSet,
    pair: PairStacking,
    events: Topic<PanelEvent>,
}

impl PanelCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle by display index. Out-of-range indices are ignored.
    /// Returns whether any state changed.
    pub fn toggle(&mut self, index: usize, active: bool) -> bool {
        match Panel::from_index(index) {
            Some(panel) => self.toggle_panel(panel, active),
            None => {
                log::debug!("[panels] ignoring toggle for out-of-range index {}", index);
                false
            }
        }
    }

    pub fn toggle_tab(&mut self, tab: Tab, active: bool) -> bool {
        self.toggle_panel(tab.panel(), active)
    }

    pub fn toggle_panel(&mut self, panel: Panel, active: bool) -> bool {
        let before = self.snapshot();

        if panel.is_override() {
            self.flags = if active {
                let mut only = PanelSet::none();
                only.set(panel, true);
                only
            } else {
                PanelSet::default()
            };
        } else {
            match panel.pair_partner() {
                Some(partner) if active => {
                    self.flags.set(panel, true);
                    self.flags.set(partner, false);
                    self.pair.bring_forward(panel);
                }
                Some(partner) => {
                    self.flags.set(panel, false);
                    self.flags.set(partner, false);
                }
                // plain panels never touch their neighbours
                None => self.flags.set(panel, active),
            }
        }

        let after = self.snapshot();
        if after == before {
            return false;
        }

        log::debug!(
            "[panels] {} -> {} flags={:?} pair=({},{})",
            panel,
            active,
            after.flags.as_slice(),
            after.pair.skills,
            after.pair.loisirs
        );
        self.events.publish(&PanelEvent::Changed(after));
        let cue = if active { SoundCue::Open } else { SoundCue::Close };
        self.events.publish(&PanelEvent::Cue(cue));
        true
    }

    #[inline]
    pub fn flags(&self) -> &PanelSet {
        &self.flags
    }

    #[inline]
    pub fn is_active(&self, panel: Panel) -> bool {
        self.flags.get(panel)
    }

    #[inline]
    pub fn visibility(&self, panel: Panel) -> Visibility {
        Visibility::from_flag(self.flags.get(panel))
    }

    /// Whether the combined Skills/Loisirs container should render at all.
    pub fn is_pair_visible(&self) -> bool {
        self.snapshot().is_pair_visible()
    }

    #[inline]
    pub fn pair(&self) -> PairStacking {
        self.pair
    }

    pub fn snapshot(&self) -> PanelSnapshot {
        PanelSnapshot {
            flags: self.flags,
            pair: self.pair,
        }
    }

    pub fn subscribe(&mut self, handler: impl FnMut(&PanelEvent) + 'static) -> SubscriptionId {
        self.events.subscribe(handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }
}
