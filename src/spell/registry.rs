//! Spell registry: effect and cast-method lookup.
//!
//! The registry maps the IDs written into spell recipes to the trait
//! objects that implement them. Hosts register their own parts at startup;
//! `standard` provides the built-in set.

use rustc_hash::FxHashMap;
use std::sync::Arc;

use crate::effects::{Fling, Pull, SpellEffect};

use super::method::{CastMethod, ProjectileCast, SelfCast, TouchCast};
use super::part::{CastMethodId, EffectId};

/// Registry of effects and cast methods.
///
/// ## Example
///
/// ```
/// use glyphcast::effects::Fling;
/// use glyphcast::spell::{SelfCast, SpellRegistry};
///
/// let registry = SpellRegistry::standard();
///
/// assert!(registry.contains_effect(Fling::ID));
/// assert!(registry.contains_cast_method(SelfCast::ID));
/// ```
#[derive(Clone, Default)]
pub struct SpellRegistry {
    effects: FxHashMap<EffectId, Arc<dyn SpellEffect>>,
    cast_methods: FxHashMap<CastMethodId, Arc<dyn CastMethod>>,
}

impl SpellRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in parts: Fling, Pull, and the three cast methods.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register_effect(Fling::ID, Arc::new(Fling));
        registry.register_effect(Pull::ID, Arc::new(Pull));
        registry.register_cast_method(SelfCast::ID, Arc::new(SelfCast));
        registry.register_cast_method(TouchCast::ID, Arc::new(TouchCast));
        registry.register_cast_method(ProjectileCast::ID, Arc::new(ProjectileCast));
        registry
    }

    /// Register an effect.
    ///
    /// Panics if an effect with the same ID already exists.
    pub fn register_effect(&mut self, id: EffectId, effect: Arc<dyn SpellEffect>) {
        if self.effects.contains_key(&id) {
            panic!("{} already registered", id);
        }
        self.effects.insert(id, effect);
    }

    /// Register a cast method.
    ///
    /// Panics if a cast method with the same ID already exists.
    pub fn register_cast_method(&mut self, id: CastMethodId, method: Arc<dyn CastMethod>) {
        if self.cast_methods.contains_key(&id) {
            panic!("{} already registered", id);
        }
        self.cast_methods.insert(id, method);
    }

    /// Look up an effect by ID.
    #[must_use]
    pub fn effect(&self, id: EffectId) -> Option<&Arc<dyn SpellEffect>> {
        self.effects.get(&id)
    }

    /// Look up a cast method by ID.
    #[must_use]
    pub fn cast_method(&self, id: CastMethodId) -> Option<&Arc<dyn CastMethod>> {
        self.cast_methods.get(&id)
    }

    /// Check if an effect ID is registered.
    #[must_use]
    pub fn contains_effect(&self, id: EffectId) -> bool {
        self.effects.contains_key(&id)
    }

    /// Check if a cast method ID is registered.
    #[must_use]
    pub fn contains_cast_method(&self, id: CastMethodId) -> bool {
        self.cast_methods.contains_key(&id)
    }

    /// Number of registered effects.
    #[must_use]
    pub fn effect_count(&self) -> usize {
        self.effects.len()
    }

    /// Number of registered cast methods.
    #[must_use]
    pub fn cast_method_count(&self) -> usize {
        self.cast_methods.len()
    }

    /// Iterate over all registered effects.
    pub fn iter_effects(&self) -> impl Iterator<Item = (EffectId, &Arc<dyn SpellEffect>)> {
        self.effects.iter().map(|(&id, effect)| (id, effect))
    }
}

impl std::fmt::Debug for SpellRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpellRegistry")
            .field("effects", &self.effects.len())
            .field("cast_methods", &self.cast_methods.len())
            .finish()
    }
}
