use crate::bus::{SubscriptionId, Topic};
use crate::constants::{WINDOW_Z_BASE, WINDOW_Z_STEP};
use fnv::FnvHashMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WindowEvent {
    ActiveChanged(Option<String>),
}

/// Click-to-front z-order bookkeeping for the floating windows.
///
/// Every `bring_to_front` hands out a value above anything issued before, so
/// the active window always holds the maximum.
pub struct WindowStack {
    z_orders: FnvHashMap<String, u64>,
    max_z: u64,
    active: Option<String>,
    events: Topic<WindowEvent>,
}

impl Default for WindowStack {
    fn default() -> Self {
        Self {
            z_orders: FnvHashMap::default(),
            max_z: WINDOW_Z_BASE,
            active: None,
            events: Topic::new(),
        }
    }
}

impl WindowStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent; returns the existing value for known ids.
    pub fn register(&mut self, id: &str) -> u64 {
        *self
            .z_orders
            .entry(id.to_string())
            .or_insert(WINDOW_Z_BASE)
    }

    /// The counter is 64-bit, so it cannot wrap within any real session.
    pub fn bring_to_front(&mut self, id: &str) -> u64 {
        self.register(id);
        self.max_z += WINDOW_Z_STEP;
        let z = self.max_z;
        self.z_orders.insert(id.to_string(), z);
        log::debug!("[windows] {} -> z {}", id, z);
        self.set_active(Some(id.to_string()));
        z
    }

    /// Unregistered ids report the baseline.
    #[inline]
    pub fn z_order_of(&self, id: &str) -> u64 {
        self.z_orders.get(id).copied().unwrap_or(WINDOW_Z_BASE)
    }

    #[inline]
    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    #[inline]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn unregister(&mut self, id: &str) {
        self.z_orders.remove(id);
        if self.is_active(id) {
            self.set_active(None);
        }
    }

    pub fn windows(&self) -> FnvHashMap<String, u64> {
        self.z_orders.clone()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.z_orders.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.z_orders.is_empty()
    }

    pub fn subscribe(&mut self, handler: impl FnMut(&WindowEvent) + 'static) -> SubscriptionId {
        self.events.subscribe(handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    // Publishes only when the designation actually moves.
    fn set_active(&mut self, active: Option<String>) {
        if self.active == active {
            return;
        }
        self.active = active.clone();
        self.events.publish(&WindowEvent::ActiveChanged(active));
    }
}
