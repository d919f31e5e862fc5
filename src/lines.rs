use crate::bus::{SubscriptionId, Topic};
use crate::constants::{DRAG_JITTER_PX, LINE_COLOR, LINE_DISTANCE_PERCENT, LINE_WIDTH};
use crate::geometry::{Rect, Viewport};
use fnv::FnvHashMap;
use glam::Vec2;
use smallvec::{smallvec, SmallVec};

// Bends closer than this to the start are drawn as a straight line (px).
const BEND_EPSILON: f32 = 1e-3;

/// Cardinal heading of the first connector segment, in screen space (y down).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    East,
    South,
    West,
    North,
}

impl Direction {
    pub const fn degrees(self) -> f32 {
        match self {
            Direction::East => 0.0,
            Direction::South => 90.0,
            Direction::West => 180.0,
            Direction::North => 270.0,
        }
    }

    /// `(cos, sin)` of the heading, exact for the four cardinal angles.
    #[inline]
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::East => Vec2::X,
            Direction::South => Vec2::Y,
            Direction::West => Vec2::NEG_X,
            Direction::North => Vec2::NEG_Y,
        }
    }

    /// Dominant-axis heading from `start` toward `anchor`.
    /// The horizontal test is strict, so exact diagonals go vertical.
    pub fn toward(start: Vec2, anchor: Vec2) -> Direction {
        let delta = anchor - start;
        if delta.x.abs() > delta.y.abs() {
            if delta.x > 0.0 {
                Direction::East
            } else {
                Direction::West
            }
        } else if delta.y > 0.0 {
            Direction::South
        } else {
            Direction::North
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Route {
    pub direction: Direction,
    pub intermediate: Vec2,
    /// Straight-line distance start -> anchor; informational only.
    pub length: f32,
}

#[inline]
pub fn compute_route(
    start: Vec2,
    anchor: Vec2,
    distance_percentage: f32,
    viewport_width: f32,
) -> Route {
    let direction = Direction::toward(start, anchor);
    let distance = distance_percentage * viewport_width / 100.0;
    Route {
        direction,
        intermediate: start + direction.unit() * distance,
        length: start.distance(anchor),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineConfig {
    /// Offset of the intermediate point, in percent of the viewport width.
    pub distance_percentage: f32,
    pub color: String,
    pub width: f32,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            distance_percentage: LINE_DISTANCE_PERCENT,
            color: LINE_COLOR.to_string(),
            width: LINE_WIDTH,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConnectorLine {
    pub id: String,
    pub start: Vec2,
    pub end: Vec2,
    pub intermediate: Vec2,
    pub direction: Direction,
    pub length: f32,
    pub active: bool,
    pub color: String,
    pub width: f32,
}

impl ConnectorLine {
    pub fn routed(id: &str, start: Vec2, viewport: Viewport, config: &LineConfig) -> Self {
        let end = viewport.anchor();
        let route = compute_route(start, end, config.distance_percentage, viewport.width);
        Self {
            id: id.to_string(),
            start,
            end,
            intermediate: route.intermediate,
            direction: route.direction,
            length: route.length,
            active: true,
            color: config.color.clone(),
            width: config.width,
        }
    }

    /// Two segments through the bend, or one straight segment when the bend
    /// sits on the start point (zero offset).
    pub fn segments(&self) -> SmallVec<[Segment; 2]> {
        let mid = self.intermediate;
        if mid.abs_diff_eq(self.start, BEND_EPSILON) {
            return smallvec![Segment {
                from: self.start,
                to: self.end,
            }];
        }
        smallvec![
            Segment {
                from: self.start,
                to: mid,
            },
            Segment {
                from: mid,
                to: self.end,
            },
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineEvent {
    Updated(String),
    Toggled(String, bool),
    Removed(String),
}

/// Connector lines keyed by tracked-element id.
#[derive(Default)]
pub struct LineRegistry {
    lines: FnvHashMap<String, ConnectorLine>,
    events: Topic<LineEvent>,
}

impl LineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_line(&mut self, line: ConnectorLine) {
        let id = line.id.clone();
        self.lines.insert(id.clone(), line);
        log::debug!("[lines] updated {} (total {})", id, self.lines.len());
        self.events.publish(&LineEvent::Updated(id));
    }

    /// Flip the active flag of an existing line. Unknown ids are ignored.
    pub fn set_active(&mut self, id: &str, active: bool) -> bool {
        let Some(line) = self.lines.get_mut(id) else {
            return false;
        };
        line.active = active;
        self.events.publish(&LineEvent::Toggled(id.to_string(), active));
        true
    }

    pub fn remove_line(&mut self, id: &str) -> Option<ConnectorLine> {
        let removed = self.lines.remove(id)?;
        log::debug!("[lines] removed {}", id);
        self.events.publish(&LineEvent::Removed(id.to_string()));
        Some(removed)
    }

    #[inline]
    pub fn get(&self, id: &str) -> Option<&ConnectorLine> {
        self.lines.get(id)
    }

    /// Active lines ordered by id, so redraws are stable.
    pub fn active_lines(&self) -> Vec<&ConnectorLine> {
        let mut out: Vec<&ConnectorLine> = self.lines.values().filter(|l| l.active).collect();
        out.sort_by(|a, b| a.id.cmp(&b.id));
        out
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn subscribe(&mut self, handler: impl FnMut(&LineEvent) + 'static) -> SubscriptionId {
        self.events.subscribe(handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }
}

/// Follows one draggable element and keeps its connector line current.
///
/// `rect` arguments are `None` while the element has no layout yet; the
/// tracker then publishes nothing. Between `unmount` and the next `mount`
/// resize and drag events are ignored.
#[derive(Clone, Debug)]
pub struct LineTracker {
    id: String,
    config: LineConfig,
    active: bool,
    mounted: bool,
    last_start: Option<Vec2>,
}

impl LineTracker {
    pub fn new(id: impl Into<String>, config: LineConfig) -> Self {
        Self {
            id: id.into(),
            config,
            active: true,
            mounted: false,
            last_start: None,
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn config(&self) -> &LineConfig {
        &self.config
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn last_start(&self) -> Option<Vec2> {
        self.last_start
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[inline]
    fn tracking(&self) -> bool {
        self.active && self.mounted && !self.id.is_empty()
    }

    pub fn mount(
        &mut self,
        rect: Option<Rect>,
        viewport: Viewport,
        registry: &mut LineRegistry,
    ) -> bool {
        self.mounted = true;
        self.resize(rect, viewport, registry)
    }

    /// Unconditional recompute; also resets the jitter reference point.
    pub fn resize(
        &mut self,
        rect: Option<Rect>,
        viewport: Viewport,
        registry: &mut LineRegistry,
    ) -> bool {
        if !self.tracking() {
            return false;
        }
        let Some(rect) = rect else {
            return false;
        };
        let start = rect.center();
        self.last_start = Some(start);
        registry.update_line(ConnectorLine::routed(&self.id, start, viewport, &self.config));
        true
    }

    /// Recompute during a drag gesture, dropping sub-threshold jitter.
    pub fn drag_moved(
        &mut self,
        rect: Option<Rect>,
        viewport: Viewport,
        registry: &mut LineRegistry,
    ) -> bool {
        if !self.tracking() {
            return false;
        }
        let Some(rect) = rect else {
            return false;
        };
        let start = rect.center();
        if let Some(last) = self.last_start {
            let moved = (start - last).abs();
            if moved.x <= DRAG_JITTER_PX && moved.y <= DRAG_JITTER_PX {
                return false;
            }
        }
        self.last_start = Some(start);
        registry.update_line(ConnectorLine::routed(&self.id, start, viewport, &self.config));
        true
    }

    pub fn set_active(
        &mut self,
        active: bool,
        rect: Option<Rect>,
        viewport: Viewport,
        registry: &mut LineRegistry,
    ) {
        self.active = active;
        if active {
            self.resize(rect, viewport, registry);
        } else {
            registry.set_active(&self.id, false);
        }
    }

    pub fn set_color(
        &mut self,
        color: impl Into<String>,
        rect: Option<Rect>,
        viewport: Viewport,
        registry: &mut LineRegistry,
    ) {
        self.config.color = color.into();
        if self.active {
            self.resize(rect, viewport, registry);
        }
    }

    pub fn unmount(&mut self, registry: &mut LineRegistry) {
        if !self.id.is_empty() {
            registry.remove_line(&self.id);
        }
        self.mounted = false;
        self.last_start = None;
    }
}
