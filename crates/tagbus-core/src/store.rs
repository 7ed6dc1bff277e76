use crate::handle::EventHandle;
use std::any::Any;
use std::slice;

/// Insertion-ordered, append-only sequence of events. Only the builder can
/// add events; once built the sequence is read-only.
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<EventHandle>,
}

#[derive(Debug, Default)]
pub struct EventStoreBuilder {
    events: Vec<EventHandle>,
}

impl EventStore {
    pub fn builder() -> EventStoreBuilder {
        EventStoreBuilder::default()
    }

    pub fn snapshot(&self) -> &[EventHandle] {
        &self.events
    }

    pub fn iter(&self) -> slice::Iter<'_, EventHandle> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventStoreBuilder {
    /// Wraps `payload` in a handle and appends it.
    pub fn event<E: Any>(self, payload: E) -> Self {
        self.handle(EventHandle::new(payload))
    }

    pub fn handle(mut self, handle: EventHandle) -> Self {
        self.events.push(handle);
        self
    }

    pub fn events<I>(mut self, handles: I) -> Self
    where
        I: IntoIterator<Item = EventHandle>,
    {
        self.events.extend(handles);
        self
    }

    pub fn build(self) -> EventStore {
        tracing::trace!(events = self.events.len(), "event store built");
        EventStore { events: self.events }
    }
}

impl FromIterator<EventHandle> for EventStore {
    fn from_iter<I: IntoIterator<Item = EventHandle>>(iter: I) -> Self {
        EventStore::builder().events(iter).build()
    }
}

impl<'a> IntoIterator for &'a EventStore {
    type Item = &'a EventHandle;
    type IntoIter = slice::Iter<'a, EventHandle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builds an [`EventStore`] from payloads of any mix of types, keeping
/// argument order.
///
/// ```
/// use tagbus_core::event_store;
///
/// struct Hello(&'static str);
/// struct Cry;
///
/// let store = event_store![Hello("infinite"), Cry];
/// assert_eq!(store.len(), 2);
/// assert!(store.snapshot()[0].is::<Hello>());
/// ```
#[macro_export]
macro_rules! event_store {
    () => {
        $crate::EventStore::builder().build()
    };
    ($($payload:expr),+ $(,)?) => {
        $crate::EventStore::builder()
            $(.event($payload))+
            .build()
    };
}
