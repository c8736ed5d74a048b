//! The World: entity allocation, component attachment, queries, and the
//! strongly-typed bag of global simulation state.
//!
//! One World per game session. Entities live in a bounded slot table with
//! generation counters; queries walk a creation-order list so iteration is
//! stable within a tick and deterministic across runs.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{MAX_ENTITIES, PLAYER_MAX_HEALTH};

use super::components::{Component, ComponentSet, Health};
use super::entity::{Entity, WorldError};
use super::events::VisualEvent;
use super::store::ComponentStore;

/// Global simulation state, one instance per world.
///
/// `wave` and `level` are pure functions of `score`, recomputed by the
/// progression system every tick; nothing mutates them independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Monotonic, non-decreasing.
    pub score: u64,
    pub wave: u32,
    pub level: u32,
    /// Elapsed simulation time in seconds.
    pub time: f32,
    /// Mirror of the player's Health component for external consumers.
    pub player_health: f32,
    pub player_max_health: f32,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            score: 0,
            wave: 1,
            level: 1,
            time: 0.0,
            player_health: PLAYER_MAX_HEALTH,
            player_max_health: PLAYER_MAX_HEALTH,
        }
    }
}

/// Per-slot bookkeeping.
#[derive(Debug, Clone, Copy, Default)]
struct Slot {
    generation: u32,
    alive: bool,
    mask: ComponentSet,
}

/// Entity store plus everything the systems share: global state, the player
/// handle, the seeded RNG, pending visual events, and the per-world system
/// counters (spawn timer, shoot cooldown, enemy hue). Promoting those
/// counters onto the World keeps concurrent worlds independent.
pub struct World {
    slots: Vec<Slot>,
    free: Vec<u32>,
    /// Live entities in creation order; queries iterate this.
    order: Vec<Entity>,
    store: ComponentStore,
    state: GameState,
    player: Option<Entity>,
    rng: Pcg32,
    events: Vec<VisualEvent>,
    pub(crate) spawn_timer: f32,
    pub(crate) shoot_cooldown: f32,
    pub(crate) enemy_hue: f32,
}

impl World {
    /// New world with a fixed default seed.
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    /// New world with an explicit RNG seed; same seed + same inputs means
    /// identical simulation.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            order: Vec::new(),
            store: ComponentStore::default(),
            state: GameState::default(),
            player: None,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
            spawn_timer: 0.0,
            shoot_cooldown: 0.0,
            enemy_hue: 0.0,
        }
    }

    /// Allocate a fresh entity handle.
    ///
    /// Fails with [`WorldError::ResourceExhausted`] once `MAX_ENTITIES` are
    /// live; the policy is to reject creation, not to evict or grow.
    pub fn create_entity(&mut self) -> Result<Entity, WorldError> {
        if self.order.len() >= MAX_ENTITIES {
            return Err(WorldError::ResourceExhausted(self.order.len()));
        }
        let entity = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.alive = true;
                slot.mask = ComponentSet::empty();
                Entity::new(index, slot.generation)
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 0,
                    alive: true,
                    mask: ComponentSet::empty(),
                });
                Entity::new(index, 0)
            }
        };
        self.order.push(entity);
        Ok(entity)
    }

    /// Destroy an entity: all component values are discarded, the handle is
    /// invalidated, and the slot becomes reusable. Stale handles are ignored.
    pub fn destroy_entity(&mut self, entity: Entity) {
        if !self.contains(entity) {
            return;
        }
        let slot = &mut self.slots[entity.slot()];
        slot.alive = false;
        slot.generation = slot.generation.wrapping_add(1);
        slot.mask = ComponentSet::empty();
        self.store.clear_slot(entity.slot());
        self.order.retain(|&e| e != entity);
        if self.player == Some(entity) {
            self.player = None;
        }
        self.free.push(entity.index);
    }

    /// Whether the handle still refers to a live entity.
    pub fn contains(&self, entity: Entity) -> bool {
        self.slots
            .get(entity.slot())
            .is_some_and(|s| s.alive && s.generation == entity.generation)
    }

    /// Number of live entities.
    pub fn live_count(&self) -> usize {
        self.order.len()
    }

    /// Attach a component, replacing any existing value of the same type.
    pub fn attach<C: Component>(&mut self, entity: Entity, value: C) {
        assert!(self.contains(entity), "attach on a dead entity handle");
        C::column_mut(&mut self.store).insert(entity.slot(), value);
        self.slots[entity.slot()].mask |= C::FLAG;
    }

    /// Mark the entity with tag bits (Player/Enemy/Bullet).
    pub fn tag(&mut self, entity: Entity, tags: ComponentSet) {
        assert!(self.contains(entity), "tag on a dead entity handle");
        self.slots[entity.slot()].mask |= tags;
    }

    pub fn get<C: Component>(&self, entity: Entity) -> Option<&C> {
        if !self.contains(entity) {
            return None;
        }
        C::column(&self.store).get(entity.slot())
    }

    pub fn get_mut<C: Component>(&mut self, entity: Entity) -> Option<&mut C> {
        if !self.contains(entity) {
            return None;
        }
        C::column_mut(&mut self.store).get_mut(entity.slot())
    }

    /// The entity's current capability mask (empty for stale handles).
    pub fn mask(&self, entity: Entity) -> ComponentSet {
        if self.contains(entity) {
            self.slots[entity.slot()].mask
        } else {
            ComponentSet::empty()
        }
    }

    /// Snapshot of all live entities carrying every component in `set`, in
    /// creation order. Recomputed fresh on every call, never cached across
    /// ticks.
    pub fn query(&self, set: ComponentSet) -> Vec<Entity> {
        self.order
            .iter()
            .copied()
            .filter(|e| self.slots[e.slot()].mask.contains(set))
            .collect()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// O(1) handle to the single Player-tagged entity, if one exists.
    pub fn player(&self) -> Option<Entity> {
        self.player
    }

    pub(crate) fn set_player(&mut self, entity: Entity) {
        self.player = Some(entity);
    }

    /// The world-owned deterministic random source.
    pub fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    pub fn push_event(&mut self, event: VisualEvent) {
        self.events.push(event);
    }

    /// Drain events emitted since the last call. Consumed by the particle
    /// and screen-shake collaborators once per frame, after ticking.
    pub fn take_events(&mut self) -> Vec<VisualEvent> {
        std::mem::take(&mut self.events)
    }

    /// Mirror the player's Health component into the global snapshot.
    pub fn sync_player_state(&mut self) {
        let Some(player) = self.player else { return };
        if let Some(health) = self.get::<Health>(player).copied() {
            self.state.player_health = health.current;
            self.state.player_max_health = health.max;
        }
    }

    /// Next enemy hue: golden-angle rotation keeps consecutive spawns
    /// visually distinct without consuming RNG draws.
    pub(crate) fn next_enemy_hue(&mut self) -> f32 {
        let hue = self.enemy_hue;
        self.enemy_hue = (self.enemy_hue + 137.5) % 360.0;
        hue
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::components::Position;

    #[test]
    fn test_create_destroy_invalidates_handle() {
        let mut world = World::new();
        let e = world.create_entity().unwrap();
        world.attach(e, Position::new(1.0, 2.0));
        assert!(world.contains(e));

        world.destroy_entity(e);
        assert!(!world.contains(e));
        assert!(world.get::<Position>(e).is_none());
        assert_eq!(world.live_count(), 0);

        // Destroying again is a no-op
        world.destroy_entity(e);
        assert_eq!(world.live_count(), 0);
    }

    #[test]
    fn test_slot_reuse_bumps_generation() {
        let mut world = World::new();
        let old = world.create_entity().unwrap();
        world.attach(old, Position::new(1.0, 1.0));
        world.destroy_entity(old);

        let new = world.create_entity().unwrap();
        assert_eq!(new.index, old.index);
        assert_ne!(new.generation, old.generation);

        // The stale handle sees nothing, even though the slot is live again
        world.attach(new, Position::new(9.0, 9.0));
        assert!(world.get::<Position>(old).is_none());
        assert_eq!(world.get::<Position>(new).map(|p| p.x), Some(9.0));
    }

    #[test]
    fn test_query_is_creation_ordered() {
        let mut world = World::new();
        let a = world.create_entity().unwrap();
        let b = world.create_entity().unwrap();
        let c = world.create_entity().unwrap();
        world.attach(a, Position::new(0.0, 0.0));
        world.attach(c, Position::new(0.0, 0.0));

        assert_eq!(world.query(ComponentSet::POSITION), vec![a, c]);
        // b lacks Position and is filtered out
        assert!(!world.query(ComponentSet::POSITION).contains(&b));

        // Creation order survives slot reuse
        world.destroy_entity(a);
        let d = world.create_entity().unwrap();
        world.attach(d, Position::new(0.0, 0.0));
        assert_eq!(world.query(ComponentSet::POSITION), vec![c, d]);
    }

    #[test]
    fn test_tag_bits_participate_in_queries() {
        let mut world = World::new();
        let e = world.create_entity().unwrap();
        world.attach(e, Position::new(0.0, 0.0));
        world.tag(e, ComponentSet::ENEMY);

        assert_eq!(
            world.query(ComponentSet::ENEMY | ComponentSet::POSITION),
            vec![e]
        );
        assert!(world.query(ComponentSet::BULLET).is_empty());
    }

    #[test]
    fn test_capacity_is_rejected_not_grown() {
        let mut world = World::new();
        for _ in 0..MAX_ENTITIES {
            world.create_entity().unwrap();
        }
        assert_eq!(
            world.create_entity(),
            Err(WorldError::ResourceExhausted(MAX_ENTITIES))
        );
        assert_eq!(world.live_count(), MAX_ENTITIES);
    }

    #[test]
    fn test_take_events_drains() {
        let mut world = World::new();
        world.push_event(VisualEvent::Shake { magnitude: 1.0 });
        world.push_event(VisualEvent::Shake { magnitude: 2.0 });
        assert_eq!(world.take_events().len(), 2);
        assert!(world.take_events().is_empty());
    }

    #[test]
    fn test_same_seed_same_draws() {
        use rand::Rng;
        let mut a = World::with_seed(42);
        let mut b = World::with_seed(42);
        let draw_a: [f32; 4] = std::array::from_fn(|_| a.rng_mut().random_range(0.0..1.0));
        let draw_b: [f32; 4] = std::array::from_fn(|_| b.rng_mut().random_range(0.0..1.0));
        assert_eq!(draw_a, draw_b);
    }
}
