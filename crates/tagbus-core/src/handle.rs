//! Type-erased owning wrapper around one event payload.

use std::any::{type_name, Any, TypeId};
use std::fmt;

/// Owns exactly one payload of any `'static` type and exposes only its
/// runtime identity. Payload types need no trait impls to be stored.
pub struct EventHandle {
    payload: Box<dyn Any>,
    type_name: &'static str,
}

impl EventHandle {
    pub fn new<E: Any>(payload: E) -> Self {
        Self {
            payload: Box::new(payload),
            type_name: type_name::<E>(),
        }
    }

    /// Identity of the concrete payload, not of the box holding it.
    pub fn type_id(&self) -> TypeId {
        (*self.payload).type_id()
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is<E: Any>(&self) -> bool {
        self.payload.is::<E>()
    }

    pub fn downcast_ref<E: Any>(&self) -> Option<&E> {
        self.payload.downcast_ref::<E>()
    }
}

impl fmt::Debug for EventHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHandle")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}
