use crate::binding::Bindings;
use tagbus_core::{DispatchConfig, EventStore};
use tracing::{debug, debug_span, trace};

#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    config: DispatchConfig,
}

impl Dispatcher {
    pub fn new(config: DispatchConfig) -> Self {
        Self { config }
    }

    /// One pass over `store`: each event is offered to each binding in
    /// declaration order. The first handler error aborts the pass and is
    /// returned unchanged; handlers that already ran are not undone.
    pub fn dispatch(&self, store: &EventStore, bindings: &Bindings<'_>) -> anyhow::Result<()> {
        let span = debug_span!("dispatch", events = store.len(), bindings = bindings.len());
        let _enter = span.enter();

        let mut invoked = 0usize;
        for (index, event) in store.snapshot().iter().enumerate() {
            let mut matched = false;
            for binding in bindings.iter() {
                if !binding.matches(event) {
                    continue;
                }
                binding.invoke(event)?;
                trace!(index, event = event.type_name(), "handler invoked");
                matched = true;
                invoked += 1;
            }
            if !matched && self.config.log_unmatched {
                debug!(index, event = event.type_name(), "no binding matched event");
            }
        }

        debug!(invoked, "dispatch pass complete");
        Ok(())
    }
}

/// Dispatches with the default configuration.
pub fn dispatch(store: &EventStore, bindings: &Bindings<'_>) -> anyhow::Result<()> {
    Dispatcher::default().dispatch(store, bindings)
}
