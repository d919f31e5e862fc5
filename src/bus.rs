use smallvec::SmallVec;

/// Handle returned by [`Topic::subscribe`]; pass it back to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

type Handler<E> = Box<dyn FnMut(&E)>;

/// Single-threaded typed event stream.
///
/// Handlers run synchronously, in subscription order, from inside
/// [`Topic::publish`]. The owner publishes only after its own state is fully
/// updated, so handlers always observe a consistent snapshot. Handlers must
/// not call back into the owner mutably.
pub struct Topic<E> {
    handlers: SmallVec<[(SubscriptionId, Handler<E>); 4]>,
    next_id: u32,
}

impl<E> Default for Topic<E> {
    fn default() -> Self {
        Self {
            handlers: SmallVec::new(),
            next_id: 0,
        }
    }
}

impl<E> Topic<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, handler: impl FnMut(&E) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Returns false when the id was not subscribed (already removed).
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(sid, _)| *sid != id);
        self.handlers.len() != before
    }

    pub fn publish(&mut self, event: &E) {
        for (_, handler) in self.handlers.iter_mut() {
            handler(event);
        }
    }

    #[inline]
    pub fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }
}
