use anyhow::Context;
use std::cell::RefCell;
use std::io::{self, Write};
use std::path::PathBuf;
use tagbus_core::{event_store, logging::init_logging, CoreConfig, EventStore};
use tagbus_dispatch::{Bindings, Dispatcher};

struct HelloEvent {
    name: String,
}

impl HelloEvent {
    fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

struct CryEvent;

fn handle_hello(event: &HelloEvent, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", event.name)
}

fn handle_cry(_event: &CryEvent, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "cry")
}

fn actor() -> EventStore {
    event_store![HelloEvent::new("infinite")]
}

fn process_events<W: Write>(
    dispatcher: &Dispatcher,
    store: &EventStore,
    out: W,
) -> anyhow::Result<W> {
    let out = RefCell::new(out);
    let bindings = Bindings::new()
        .try_on(|event: &HelloEvent| handle_hello(event, &mut *out.borrow_mut()))
        .try_on(|event: &CryEvent| handle_cry(event, &mut *out.borrow_mut()));
    dispatcher.dispatch(store, &bindings)?;
    drop(bindings);
    let mut out = out.into_inner();
    out.flush()?;
    Ok(out)
}

fn load_config() -> anyhow::Result<CoreConfig> {
    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => CoreConfig::load(&path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(CoreConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    let cfg = load_config()?;
    init_logging(&cfg.logging);

    let store = actor();
    tracing::debug!(events = store.len(), "event bus built");

    let dispatcher = Dispatcher::new(cfg.dispatch);
    process_events(&dispatcher, &store, io::stdout().lock())?;
    Ok(())
}
