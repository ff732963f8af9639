//! Effect resolution loop integration tests.
//!
//! These tests verify event ordering, augment attribution, perk hook
//! sequencing, and the cursor semantics of repeated resolution passes.

use std::sync::{Arc, Mutex};

use glyphcast::core::{EntityId, EntityKind, HitResult, Vec3};
use glyphcast::effects::{Fling, Pull, SpellEffect};
use glyphcast::events::{EventBus, SpellEvent, SpellEventHandler};
use glyphcast::perks::{Perk, PerkInstance};
use glyphcast::spell::{
    Augment, CastEnv, EffectId, ProjectileCast, SelfCast, Spell, SpellContext, SpellRegistry,
    SpellResolver, SpellStats, TouchCast,
};
use glyphcast::world::{ManaLedger, Side, World};

type Log = Arc<Mutex<Vec<String>>>;
type AmpLog = Arc<Mutex<Vec<f64>>>;

const PROBE: EffectId = EffectId::new(901);
const PROBE_A: EffectId = EffectId::new(902);
const PROBE_B: EffectId = EffectId::new(903);

fn new_log() -> Log {
    Arc::new(Mutex::new(Vec::new()))
}

fn entries(log: &Log) -> Vec<String> {
    log.lock().unwrap().clone()
}

/// Free effect that records the amplification it resolved with.
struct StatsProbe {
    amps: AmpLog,
}

impl SpellEffect for StatsProbe {
    fn name(&self) -> &'static str {
        "StatsProbe"
    }

    fn mana_cost(&self) -> i32 {
        0
    }

    fn on_resolve(
        &self,
        _hit: &HitResult,
        _world: &mut World,
        _context: &mut SpellContext,
        stats: &SpellStats,
    ) {
        self.amps.lock().unwrap().push(stats.amplification());
    }
}

/// Free effect that records a label when it resolves.
struct NamedProbe {
    label: &'static str,
    log: Log,
}

impl SpellEffect for NamedProbe {
    fn name(&self) -> &'static str {
        self.label
    }

    fn mana_cost(&self) -> i32 {
        0
    }

    fn on_resolve(
        &self,
        _hit: &HitResult,
        _world: &mut World,
        _context: &mut SpellContext,
        _stats: &SpellStats,
    ) {
        self.log.lock().unwrap().push(self.label.to_string());
    }
}

/// Free effect that consumes the part after itself.
struct Consume {
    log: Log,
}

impl SpellEffect for Consume {
    fn name(&self) -> &'static str {
        "Consume"
    }

    fn mana_cost(&self) -> i32 {
        0
    }

    fn on_resolve(
        &self,
        _hit: &HitResult,
        _world: &mut World,
        context: &mut SpellContext,
        _stats: &SpellStats,
    ) {
        context.next_part();
        self.log.lock().unwrap().push("consume".to_string());
    }
}

/// Handler that records every event it sees.
struct Recorder {
    log: Log,
}

impl SpellEventHandler for Recorder {
    fn handle(&self, event: &mut SpellEvent, _world: &mut World) {
        let label = match event {
            SpellEvent::PreCast { .. } => "pre-cast".to_string(),
            SpellEvent::PreResolve { .. } => "pre-resolve".to_string(),
            SpellEvent::PostResolve { .. } => "post-resolve".to_string(),
            SpellEvent::PreEffectResolve { effect, .. } => format!("pre-effect:{}", effect.raw()),
            SpellEvent::PostEffectResolve { effect, .. } => format!("post-effect:{}", effect.raw()),
        };
        self.log.lock().unwrap().push(label);
    }
}

/// Handler that cancels the whole resolution pass.
struct CancelResolve;

impl SpellEventHandler for CancelResolve {
    fn handle(&self, event: &mut SpellEvent, _world: &mut World) {
        if let SpellEvent::PreResolve { .. } = event {
            event.cancel();
        }
    }
}

/// Handler that cancels one specific effect.
struct CancelEffect(EffectId);

impl SpellEventHandler for CancelEffect {
    fn handle(&self, event: &mut SpellEvent, _world: &mut World) {
        if let SpellEvent::PreEffectResolve { effect, .. } = event {
            if *effect == self.0 {
                event.cancel();
            }
        }
    }
}

/// Perk that records its hooks firing.
struct OrderPerk {
    log: Log,
}

impl Perk for OrderPerk {
    fn name(&self) -> &'static str {
        "OrderPerk"
    }

    fn on_pre_resolve(
        &self,
        _level: u8,
        _effect: EffectId,
        _hit: &HitResult,
        _world: &mut World,
        _caster: EntityId,
        _stats: &SpellStats,
    ) {
        self.log.lock().unwrap().push("perk-pre".to_string());
    }

    fn on_post_resolve(
        &self,
        _level: u8,
        _effect: EffectId,
        _hit: &HitResult,
        _world: &mut World,
        _caster: EntityId,
        _stats: &SpellStats,
    ) {
        self.log.lock().unwrap().push("perk-post".to_string());
    }
}

/// Perk that attaches an `OrderPerk` to the caster from inside a hook.
struct GrantingPerk {
    log: Log,
}

impl Perk for GrantingPerk {
    fn name(&self) -> &'static str {
        "GrantingPerk"
    }

    fn on_pre_resolve(
        &self,
        _level: u8,
        _effect: EffectId,
        _hit: &HitResult,
        world: &mut World,
        caster: EntityId,
        _stats: &SpellStats,
    ) {
        self.log.lock().unwrap().push("grant".to_string());
        let granted = OrderPerk {
            log: Arc::clone(&self.log),
        };
        world.add_perk(caster, PerkInstance::new(Arc::new(granted), 1));
    }
}

fn world_with_caster() -> (World, EntityId) {
    let mut world = World::new(Side::Authoritative);
    let caster = world.spawn(EntityKind::Creature, Vec3::ZERO);
    world.set_mana(caster, 100);
    (world, caster)
}

fn resolver_with(registry: SpellRegistry, spell: Spell, caster: EntityId) -> SpellResolver {
    SpellResolver::new(
        SpellContext::new(spell, caster),
        CastEnv::new(Arc::new(registry)),
    )
}

fn registry_with_stats_probe(amps: &AmpLog) -> SpellRegistry {
    let mut registry = SpellRegistry::standard();
    registry.register_effect(
        PROBE,
        Arc::new(StatsProbe {
            amps: Arc::clone(amps),
        }),
    );
    registry
}

// =============================================================================
// Event Ordering
// =============================================================================

/// A full successful cast fires the five phases in order, with the
/// per-effect pair nested inside the whole-spell pair.
#[test]
fn test_event_order_for_full_cast() {
    let log = new_log();
    let mut bus = EventBus::new();
    bus.subscribe(Arc::new(Recorder {
        log: Arc::clone(&log),
    }));

    let (mut world, caster) = world_with_caster();
    let spell = Spell::new("Launch", SelfCast::ID).with_effect(Fling::ID);
    let mut resolver = resolver_with(SpellRegistry::standard(), spell, caster);

    assert!(resolver.cast(&mut world, &bus));

    assert_eq!(
        entries(&log),
        vec![
            "pre-cast",
            "pre-resolve",
            "pre-effect:1",
            "post-effect:1",
            "post-resolve",
        ]
    );
}

/// Resolving an empty recipe fires the whole-spell events and nothing
/// else.
#[test]
fn test_empty_recipe_fires_whole_spell_events_only() {
    let log = new_log();
    let mut bus = EventBus::new();
    bus.subscribe(Arc::new(Recorder {
        log: Arc::clone(&log),
    }));

    let (mut world, caster) = world_with_caster();
    let spell = Spell::new("Empty", SelfCast::ID);
    let mut resolver = resolver_with(SpellRegistry::standard(), spell, caster);

    resolver.resolve_effects(&mut world, &bus);

    assert_eq!(entries(&log), vec!["pre-resolve", "post-resolve"]);
}

/// Effects run strictly in recipe order; a later effect sees the world
/// the earlier one left behind.
#[test]
fn test_effects_run_in_sequence() {
    let (mut world, caster) = world_with_caster();
    let victim = world.spawn(EntityKind::Creature, Vec3::new(3.0, 0.0, 0.0));
    let bus = EventBus::new();

    // Amplify attaches to Fling; Pull resolves unaugmented and folds its
    // drag into the amplified fling motion.
    let spell = Spell::new("Yank", TouchCast::ID)
        .with_augment(Augment::Amplify)
        .with_effect(Fling::ID)
        .with_effect(Pull::ID);
    let mut resolver = resolver_with(SpellRegistry::standard(), spell, caster);

    assert!(resolver.cast_on_entity(&mut world, &bus, victim));

    assert_eq!(world.velocity(victim), Some(Vec3::new(-1.0, 1.8, 0.0)));
    assert_eq!(world.position(victim), Some(Vec3::new(2.0, 1.8, 0.0)));
    assert_eq!(world.current_mana(caster), 100 - 35);
}

// =============================================================================
// Augment Attribution
// =============================================================================

/// An augment contributes to the effect immediately after it, and only
/// that effect.
#[test]
fn test_augment_applies_to_next_effect_only() {
    let amps: AmpLog = Arc::new(Mutex::new(Vec::new()));
    let (mut world, caster) = world_with_caster();
    let bus = EventBus::new();

    let spell = Spell::new("Probed", SelfCast::ID)
        .with_augment(Augment::Amplify)
        .with_effect(PROBE)
        .with_effect(PROBE);
    let mut resolver = resolver_with(registry_with_stats_probe(&amps), spell, caster);

    assert!(resolver.cast(&mut world, &bus));

    assert_eq!(*amps.lock().unwrap(), vec![1.0, 0.0]);
}

/// A run of augments accumulates into the following effect's stats.
#[test]
fn test_augment_run_accumulates() {
    let amps: AmpLog = Arc::new(Mutex::new(Vec::new()));
    let (mut world, caster) = world_with_caster();
    let bus = EventBus::new();

    let spell = Spell::new("Strong", SelfCast::ID)
        .with_augment(Augment::Amplify)
        .with_augment(Augment::Amplify)
        .with_effect(PROBE)
        .with_augment(Augment::Amplify)
        .with_augment(Augment::Dampen)
        .with_effect(PROBE);
    let mut resolver = resolver_with(registry_with_stats_probe(&amps), spell, caster);

    assert!(resolver.cast(&mut world, &bus));

    assert_eq!(*amps.lock().unwrap(), vec![2.0, 0.0]);
}

/// Item-provided augments apply to every effect in the spell.
#[test]
fn test_item_augments_apply_to_every_effect() {
    let amps: AmpLog = Arc::new(Mutex::new(Vec::new()));
    let (mut world, caster) = world_with_caster();
    world.add_item_augment(caster, Augment::Amplify);
    let bus = EventBus::new();

    let spell = Spell::new("Equipped", SelfCast::ID)
        .with_effect(PROBE)
        .with_augment(Augment::Amplify)
        .with_effect(PROBE);
    let mut resolver = resolver_with(registry_with_stats_probe(&amps), spell, caster);

    assert!(resolver.cast(&mut world, &bus));

    // First probe: item only. Second probe: recipe augment plus item.
    assert_eq!(*amps.lock().unwrap(), vec![1.0, 2.0]);
}

// =============================================================================
// Cancellation
// =============================================================================

/// Cancelling pre-resolve suppresses every effect and the post-resolve
/// event, but the cast itself still succeeded and charged.
#[test]
fn test_pre_resolve_cancellation_suppresses_pass() {
    let log = new_log();
    let mut bus = EventBus::new();
    bus.subscribe(Arc::new(Recorder {
        log: Arc::clone(&log),
    }));
    bus.subscribe(Arc::new(CancelResolve));

    let (mut world, caster) = world_with_caster();
    let spell = Spell::new("Launch", SelfCast::ID).with_effect(Fling::ID);
    let mut resolver = resolver_with(SpellRegistry::standard(), spell, caster);

    assert!(resolver.cast(&mut world, &bus));

    assert_eq!(entries(&log), vec!["pre-cast", "pre-resolve"]);
    assert_eq!(world.velocity(caster), Some(Vec3::ZERO));
    assert_eq!(world.current_mana(caster), 80);
}

/// Cancelling one effect skips that effect, its perk hooks, and its post
/// event; the rest of the pass continues.
#[test]
fn test_pre_effect_cancellation_skips_one_effect() {
    let log = new_log();
    let mut bus = EventBus::new();
    bus.subscribe(Arc::new(Recorder {
        log: Arc::clone(&log),
    }));
    bus.subscribe(Arc::new(CancelEffect(PROBE_A)));

    let (mut world, caster) = world_with_caster();
    let mut registry = SpellRegistry::standard();
    registry.register_effect(
        PROBE_A,
        Arc::new(NamedProbe {
            label: "a",
            log: Arc::clone(&log),
        }),
    );
    registry.register_effect(
        PROBE_B,
        Arc::new(NamedProbe {
            label: "b",
            log: Arc::clone(&log),
        }),
    );

    let spell = Spell::new("Pair", SelfCast::ID)
        .with_effect(PROBE_A)
        .with_effect(PROBE_B);
    let mut resolver = resolver_with(registry, spell, caster);

    assert!(resolver.cast(&mut world, &bus));

    assert_eq!(
        entries(&log),
        vec![
            "pre-cast",
            "pre-resolve",
            "pre-effect:902",
            "pre-effect:903",
            "b",
            "post-effect:903",
            "post-resolve",
        ]
    );
}

// =============================================================================
// Perk Hooks
// =============================================================================

/// Perk hooks bracket every effect: pre before, post after, fully
/// sequenced between effects.
#[test]
fn test_perk_hooks_bracket_each_effect() {
    let log = new_log();
    let (mut world, caster) = world_with_caster();
    world.add_perk(
        caster,
        PerkInstance::new(
            Arc::new(OrderPerk {
                log: Arc::clone(&log),
            }),
            1,
        ),
    );
    let bus = EventBus::new();

    let mut registry = SpellRegistry::standard();
    registry.register_effect(
        PROBE_A,
        Arc::new(NamedProbe {
            label: "effect",
            log: Arc::clone(&log),
        }),
    );

    let spell = Spell::new("Pair", SelfCast::ID)
        .with_effect(PROBE_A)
        .with_effect(PROBE_A);
    let mut resolver = resolver_with(registry, spell, caster);

    assert!(resolver.cast(&mut world, &bus));

    assert_eq!(
        entries(&log),
        vec!["perk-pre", "effect", "perk-post", "perk-pre", "effect", "perk-post"]
    );
}

/// The perk list is snapshotted at pass start: perks attached mid-pass
/// do not fire until a later pass.
#[test]
fn test_perk_snapshot_taken_once_per_pass() {
    let log = new_log();
    let (mut world, caster) = world_with_caster();
    world.add_perk(
        caster,
        PerkInstance::new(
            Arc::new(GrantingPerk {
                log: Arc::clone(&log),
            }),
            1,
        ),
    );
    let bus = EventBus::new();

    let mut registry = SpellRegistry::standard();
    registry.register_effect(
        PROBE_A,
        Arc::new(NamedProbe {
            label: "effect",
            log: Arc::clone(&log),
        }),
    );

    let spell = Spell::new("Pair", SelfCast::ID)
        .with_effect(PROBE_A)
        .with_effect(PROBE_A);
    let mut resolver = resolver_with(registry, spell, caster);

    assert!(resolver.cast(&mut world, &bus));

    // The granting perk fired per effect and attached two new perks, but
    // none of the granted perks ran inside this pass.
    assert_eq!(entries(&log), vec!["grant", "effect", "grant", "effect"]);
    assert_eq!(world.perks(caster).len(), 3);
}

// =============================================================================
// Cursor Semantics
// =============================================================================

/// Resolving again without a reset picks up from the exhausted cursor
/// and runs no effects.
#[test]
fn test_second_resolve_without_reset_is_inert() {
    let amps: AmpLog = Arc::new(Mutex::new(Vec::new()));
    let (mut world, caster) = world_with_caster();
    let bus = EventBus::new();

    let spell = Spell::new("Probed", SelfCast::ID).with_effect(PROBE);
    let mut resolver = resolver_with(registry_with_stats_probe(&amps), spell, caster);

    assert!(resolver.cast(&mut world, &bus));
    assert_eq!(amps.lock().unwrap().len(), 1);

    resolver.resolve_effects(&mut world, &bus);
    assert_eq!(amps.lock().unwrap().len(), 1);
}

/// After an explicit reset the whole recipe reprocesses.
#[test]
fn test_reset_reprocesses_all_parts() {
    let amps: AmpLog = Arc::new(Mutex::new(Vec::new()));
    let (mut world, caster) = world_with_caster();
    let bus = EventBus::new();

    let spell = Spell::new("Probed", SelfCast::ID)
        .with_augment(Augment::Amplify)
        .with_effect(PROBE);
    let mut resolver = resolver_with(registry_with_stats_probe(&amps), spell, caster);

    assert!(resolver.cast(&mut world, &bus));
    resolver.reset();
    resolver.resolve_effects(&mut world, &bus);

    assert_eq!(*amps.lock().unwrap(), vec![1.0, 1.0]);
}

/// An effect that consumes the following part steers the cursor: the
/// consumed part never resolves, and the pass never revisits it.
#[test]
fn test_effect_can_consume_following_part() {
    let log = new_log();
    let (mut world, caster) = world_with_caster();
    let bus = EventBus::new();

    let mut registry = SpellRegistry::standard();
    registry.register_effect(
        PROBE_A,
        Arc::new(Consume {
            log: Arc::clone(&log),
        }),
    );
    registry.register_effect(
        PROBE_B,
        Arc::new(NamedProbe {
            label: "swallowed",
            log: Arc::clone(&log),
        }),
    );

    let spell = Spell::new("Eater", SelfCast::ID)
        .with_effect(PROBE_A)
        .with_effect(PROBE_B);
    let mut resolver = resolver_with(registry, spell, caster);

    assert!(resolver.cast(&mut world, &bus));
    assert_eq!(entries(&log), vec!["consume"]);

    resolver.resolve_effects(&mut world, &bus);
    assert_eq!(entries(&log), vec!["consume"]);
}

/// The host holding a deferred resolver can steer the cursor itself
/// before resuming: parts skipped from outside never resolve.
#[test]
fn test_host_can_skip_parts_before_resume() {
    let log = new_log();
    let (mut world, caster) = world_with_caster();
    let bus = EventBus::new();

    let mut registry = SpellRegistry::standard();
    registry.register_effect(
        PROBE_A,
        Arc::new(NamedProbe {
            label: "a",
            log: Arc::clone(&log),
        }),
    );
    registry.register_effect(
        PROBE_B,
        Arc::new(NamedProbe {
            label: "b",
            log: Arc::clone(&log),
        }),
    );

    let spell = Spell::new("Volley", ProjectileCast::ID)
        .with_effect(PROBE_A)
        .with_effect(PROBE_B);
    let mut resolver = resolver_with(registry, spell, caster);

    assert!(!resolver.cast(&mut world, &bus));

    resolver.context_mut().next_part();
    resolver.resume_cast(&mut world, &bus, HitResult::miss(Vec3::ZERO));

    assert_eq!(entries(&log), vec!["b"]);
}

/// Unregistered effect ids are skipped by the loop without firing
/// per-effect events.
#[test]
fn test_unknown_effect_id_is_skipped() {
    let log = new_log();
    let amps: AmpLog = Arc::new(Mutex::new(Vec::new()));
    let mut bus = EventBus::new();
    bus.subscribe(Arc::new(Recorder {
        log: Arc::clone(&log),
    }));

    let (mut world, caster) = world_with_caster();
    let spell = Spell::new("Odd", SelfCast::ID)
        .with_effect(EffectId::new(999))
        .with_effect(PROBE);
    let mut resolver = resolver_with(registry_with_stats_probe(&amps), spell, caster);

    // Bypass the gate (validation would reject the unknown id) and drive
    // the loop directly, as a resumed projectile would.
    resolver.on_resolve(&mut world, &bus, HitResult::miss(Vec3::ZERO));

    assert_eq!(*amps.lock().unwrap(), vec![0.0]);
    assert_eq!(
        entries(&log),
        vec!["pre-resolve", "pre-effect:901", "post-effect:901", "post-resolve"]
    );
}
