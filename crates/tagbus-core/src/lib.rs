pub mod config;
pub mod error;
pub mod handle;
pub mod logging;
pub mod store;

pub use config::{CoreConfig, DispatchConfig, LoggingConfig};
pub use error::{CoreError, CoreResult};
pub use handle::EventHandle;
pub use store::{EventStore, EventStoreBuilder};
