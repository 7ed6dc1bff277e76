use std::any::{type_name, Any, TypeId};
use std::fmt;
use tagbus_core::EventHandle;

type ErasedHandler<'h> = Box<dyn Fn(&EventHandle) -> anyhow::Result<()> + 'h>;

/// Associates one concrete event type with a handler.
pub struct Binding<'h> {
    event_type: TypeId,
    event_name: &'static str,
    handler: ErasedHandler<'h>,
}

impl<'h> Binding<'h> {
    pub fn new<E, F>(handler: F) -> Self
    where
        E: Any,
        F: Fn(&E) + 'h,
    {
        Self::fallible(move |event: &E| -> anyhow::Result<()> {
            handler(event);
            Ok(())
        })
    }

    /// A handler that may fail. Its error is handed back from dispatch as is,
    /// and stays reachable through `anyhow::Error::downcast_ref`.
    pub fn fallible<E, Err, F>(handler: F) -> Self
    where
        E: Any,
        Err: Into<anyhow::Error>,
        F: Fn(&E) -> Result<(), Err> + 'h,
    {
        Self {
            event_type: TypeId::of::<E>(),
            event_name: type_name::<E>(),
            handler: Box::new(move |handle: &EventHandle| -> anyhow::Result<()> {
                match handle.downcast_ref::<E>() {
                    Some(event) => handler(event).map_err(Into::into),
                    None => Ok(()),
                }
            }),
        }
    }

    pub fn event_type(&self) -> TypeId {
        self.event_type
    }

    pub fn event_name(&self) -> &'static str {
        self.event_name
    }

    /// Exact type test; no widening to wrappers or other types.
    pub fn matches(&self, handle: &EventHandle) -> bool {
        handle.type_id() == self.event_type
    }

    /// Runs the handler on `handle`. Events of another type are ignored.
    pub fn invoke(&self, handle: &EventHandle) -> anyhow::Result<()> {
        (self.handler)(handle)
    }
}

impl fmt::Debug for Binding<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("event_name", &self.event_name)
            .finish_non_exhaustive()
    }
}

/// Declaration-ordered list of bindings. Several bindings may share an
/// event type; all of them fire.
#[derive(Debug, Default)]
pub struct Bindings<'h> {
    entries: Vec<Binding<'h>>,
}

impl<'h> Bindings<'h> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on<E, F>(self, handler: F) -> Self
    where
        E: Any,
        F: Fn(&E) + 'h,
    {
        self.bind(Binding::new(handler))
    }

    pub fn try_on<E, Err, F>(self, handler: F) -> Self
    where
        E: Any,
        Err: Into<anyhow::Error>,
        F: Fn(&E) -> Result<(), Err> + 'h,
    {
        self.bind(Binding::fallible(handler))
    }

    pub fn bind(mut self, binding: Binding<'h>) -> Self {
        self.entries.push(binding);
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Binding<'h>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'h> FromIterator<Binding<'h>> for Bindings<'h> {
    fn from_iter<I: IntoIterator<Item = Binding<'h>>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
