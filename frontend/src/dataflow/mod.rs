//! Dataflow primitives the explorer domain is built from.
//!
//! - **[`Relay`]** - typed event stream from a view to an owner
//! - **[`Actor`]** - single-value state mutated only by its own task
//! - **[`Atom`]** - local UI state of one view (hover, local highlight)
//!
//! Relays follow the `{source}_{event}_relay` naming pattern and each relay
//! is sent from exactly one place in the code.

pub mod actor;
pub mod atom;
pub mod relay;

pub use actor::Actor;
pub use atom::Atom;
pub use relay::{Relay, relay};
