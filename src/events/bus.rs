//! Event bus: handler subscription and dispatch.

use std::sync::Arc;

use tracing::trace;

use super::event::SpellEvent;
use crate::world::World;

/// A subscriber to spell lifecycle events.
///
/// Handlers may mutate the world (that is how reactive behavior is
/// built) and may cancel the cancellable phases. Cancelling does not
/// stop dispatch: every handler still sees the event.
pub trait SpellEventHandler: Send + Sync {
    /// Dispatch order. Higher priorities see the event first.
    fn priority(&self) -> i32 {
        0
    }

    /// React to an event.
    fn handle(&self, event: &mut SpellEvent, world: &mut World);
}

/// Dispatches spell events to subscribed handlers.
///
/// Handlers run in priority order (highest first); subscribers with
/// equal priority run in subscription order.
#[derive(Clone, Default)]
pub struct EventBus {
    handlers: Vec<Arc<dyn SpellEventHandler>>,
}

impl EventBus {
    /// Create an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Subscribe a handler.
    pub fn subscribe(&mut self, handler: Arc<dyn SpellEventHandler>) {
        self.handlers.push(handler);
        // Stable sort keeps subscription order within a priority tier.
        self.handlers.sort_by_key(|h| std::cmp::Reverse(h.priority()));
    }

    /// Number of subscribed handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if no handlers are subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Fire an event through every handler.
    ///
    /// Returns whether the event ended up cancelled. Dispatch always runs
    /// to completion so later handlers can observe (or undo) an earlier
    /// handler's cancellation.
    pub fn publish(&self, event: &mut SpellEvent, world: &mut World) -> bool {
        trace!(event = %event, handlers = self.handlers.len(), "publishing");
        for handler in &self.handlers {
            handler.handle(event, world);
        }
        event.is_cancelled()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
