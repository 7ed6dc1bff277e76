//! Type-directed dispatch over a built [`tagbus_core::EventStore`].
//!
//! Every stored event is checked against every binding, in declaration
//! order. Every binding whose event type equals the event's concrete type
//! runs, not just the first one.

pub mod binding;
pub mod dispatcher;

pub use binding::{Binding, Bindings};
pub use dispatcher::{dispatch, Dispatcher};
