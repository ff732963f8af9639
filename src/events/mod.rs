//! Spell lifecycle events and their dispatch.
//!
//! - `SpellEvent`: the five lifecycle phases, three of them cancellable
//! - `SpellEventHandler`: subscriber trait with dispatch priority
//! - `EventBus`: priority-ordered dispatch that reports cancellation

pub mod bus;
pub mod event;

pub use bus::{EventBus, SpellEventHandler};
pub use event::SpellEvent;
