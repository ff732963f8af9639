//! Spell lifecycle events.
//!
//! Events are fired at fixed points of a cast: once before the spell
//! leaves the caster, around the whole resolution pass, and around each
//! individual effect. Handlers observe them and may veto the cancellable
//! phases.
//!
//! ## Design Philosophy
//!
//! The engine fires a closed set of lifecycle events rather than letting
//! hosts invent event types; hosts hook behavior in by subscribing
//! handlers. Pre-phase events carry a `cancelled` flag, post-phase events
//! are notifications only, and [`cancel`](SpellEvent::cancel) on a
//! post-phase event does nothing.

use serde::{Deserialize, Serialize};

use crate::core::{EntityId, HitResult};
use crate::spell::{EffectId, Spell, SpellStats};

/// A spell lifecycle event.
///
/// Five phases, in firing order for a successful cast:
/// `PreCast`, `PreResolve`, then per effect `PreEffectResolve` and
/// `PostEffectResolve`, and finally `PostResolve`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SpellEvent {
    /// Fired after the gate passes, before any mana is spent. Cancellable.
    PreCast {
        caster: EntityId,
        spell: Spell,
        cancelled: bool,
    },

    /// Fired before the resolution pass begins. Cancelling skips the
    /// whole pass, including every per-effect event.
    PreResolve {
        caster: EntityId,
        spell: Spell,
        hit: HitResult,
        cancelled: bool,
    },

    /// Fired after the resolution pass completes.
    PostResolve {
        caster: EntityId,
        spell: Spell,
        hit: HitResult,
    },

    /// Fired before one effect resolves. Cancelling skips that effect
    /// and its post event only; the pass continues.
    PreEffectResolve {
        caster: EntityId,
        effect: EffectId,
        hit: HitResult,
        stats: SpellStats,
        cancelled: bool,
    },

    /// Fired after one effect has resolved.
    PostEffectResolve {
        caster: EntityId,
        effect: EffectId,
        hit: HitResult,
        stats: SpellStats,
    },
}

impl SpellEvent {
    /// Pre-cast event for a spell about to leave the caster.
    #[must_use]
    pub fn pre_cast(caster: EntityId, spell: &Spell) -> Self {
        Self::PreCast {
            caster,
            spell: spell.clone(),
            cancelled: false,
        }
    }

    /// Pre-resolve event for a whole resolution pass.
    #[must_use]
    pub fn pre_resolve(caster: EntityId, spell: &Spell, hit: HitResult) -> Self {
        Self::PreResolve {
            caster,
            spell: spell.clone(),
            hit,
            cancelled: false,
        }
    }

    /// Post-resolve event for a completed pass.
    #[must_use]
    pub fn post_resolve(caster: EntityId, spell: &Spell, hit: HitResult) -> Self {
        Self::PostResolve {
            caster,
            spell: spell.clone(),
            hit,
        }
    }

    /// Pre-effect event for one effect about to resolve.
    #[must_use]
    pub fn pre_effect(caster: EntityId, effect: EffectId, hit: HitResult, stats: &SpellStats) -> Self {
        Self::PreEffectResolve {
            caster,
            effect,
            hit,
            stats: stats.clone(),
            cancelled: false,
        }
    }

    /// Post-effect event for one resolved effect.
    #[must_use]
    pub fn post_effect(caster: EntityId, effect: EffectId, hit: HitResult, stats: &SpellStats) -> Self {
        Self::PostEffectResolve {
            caster,
            effect,
            hit,
            stats: stats.clone(),
        }
    }

    /// The caster this event concerns.
    #[must_use]
    pub fn caster(&self) -> EntityId {
        match self {
            Self::PreCast { caster, .. }
            | Self::PreResolve { caster, .. }
            | Self::PostResolve { caster, .. }
            | Self::PreEffectResolve { caster, .. }
            | Self::PostEffectResolve { caster, .. } => *caster,
        }
    }

    /// Check if this phase can be vetoed by a handler.
    #[must_use]
    pub fn is_cancellable(&self) -> bool {
        matches!(
            self,
            Self::PreCast { .. } | Self::PreResolve { .. } | Self::PreEffectResolve { .. }
        )
    }

    /// Request cancellation. No-op on post-phase events.
    pub fn cancel(&mut self) {
        match self {
            Self::PreCast { cancelled, .. }
            | Self::PreResolve { cancelled, .. }
            | Self::PreEffectResolve { cancelled, .. } => *cancelled = true,
            Self::PostResolve { .. } | Self::PostEffectResolve { .. } => {}
        }
    }

    /// Check if a handler has cancelled this event.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        match self {
            Self::PreCast { cancelled, .. }
            | Self::PreResolve { cancelled, .. }
            | Self::PreEffectResolve { cancelled, .. } => *cancelled,
            Self::PostResolve { .. } | Self::PostEffectResolve { .. } => false,
        }
    }
}

impl std::fmt::Display for SpellEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PreCast { spell, .. } => write!(f, "PreCast({})", spell.name),
            Self::PreResolve { spell, .. } => write!(f, "PreResolve({})", spell.name),
            Self::PostResolve { spell, .. } => write!(f, "PostResolve({})", spell.name),
            Self::PreEffectResolve { effect, .. } => write!(f, "PreEffectResolve({effect})"),
            Self::PostEffectResolve { effect, .. } => write!(f, "PostEffectResolve({effect})"),
        }
    }
}
