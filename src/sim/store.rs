//! Typed columnar storage: one column per component, indexed by entity slot.
//!
//! The store owns no behavior. The [`World`](super::world::World) validates
//! handles and drives all mutation; columns just hold values.

use super::components::{
    Damage, Health, Lifetime, Position, Render, Rotation, Seeker, Size, Velocity,
};

/// One component column. The slot index is the entity's slot index.
#[derive(Debug, Default)]
pub struct Column<T> {
    slots: Vec<Option<T>>,
}

impl<T> Column<T> {
    /// Insert or replace the value at `slot`, growing the column as needed.
    pub fn insert(&mut self, slot: usize, value: T) {
        if self.slots.len() <= slot {
            self.slots.resize_with(slot + 1, || None);
        }
        self.slots[slot] = Some(value);
    }

    pub fn remove(&mut self, slot: usize) -> Option<T> {
        self.slots.get_mut(slot).and_then(Option::take)
    }

    pub fn get(&self, slot: usize) -> Option<&T> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut T> {
        self.slots.get_mut(slot).and_then(Option::as_mut)
    }
}

/// Every column of the closed component set.
#[derive(Debug, Default)]
pub struct ComponentStore {
    pub(crate) positions: Column<Position>,
    pub(crate) velocities: Column<Velocity>,
    pub(crate) sizes: Column<Size>,
    pub(crate) healths: Column<Health>,
    pub(crate) renders: Column<Render>,
    pub(crate) lifetimes: Column<Lifetime>,
    pub(crate) damages: Column<Damage>,
    pub(crate) seekers: Column<Seeker>,
    pub(crate) rotations: Column<Rotation>,
}

impl ComponentStore {
    /// Discard every component value in `slot` (entity destroyed).
    pub(crate) fn clear_slot(&mut self, slot: usize) {
        self.positions.remove(slot);
        self.velocities.remove(slot);
        self.sizes.remove(slot);
        self.healths.remove(slot);
        self.renders.remove(slot);
        self.lifetimes.remove(slot);
        self.damages.remove(slot);
        self.seekers.remove(slot);
        self.rotations.remove(slot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_insert_get_remove() {
        let mut column: Column<Damage> = Column::default();
        assert!(column.get(3).is_none());

        column.insert(3, Damage { amount: 5.0 });
        assert_eq!(column.get(3).map(|d| d.amount), Some(5.0));
        assert!(column.get(2).is_none());

        // Overwrite in place
        column.insert(3, Damage { amount: 7.0 });
        assert_eq!(column.get(3).map(|d| d.amount), Some(7.0));

        assert_eq!(column.remove(3).map(|d| d.amount), Some(7.0));
        assert!(column.get(3).is_none());
        assert!(column.remove(3).is_none());
    }

    #[test]
    fn test_clear_slot_drops_all_columns() {
        let mut store = ComponentStore::default();
        store.positions.insert(0, Position::new(1.0, 2.0));
        store.healths.insert(0, Health::full(10.0));
        store.positions.insert(1, Position::new(9.0, 9.0));

        store.clear_slot(0);
        assert!(store.positions.get(0).is_none());
        assert!(store.healths.get(0).is_none());
        // Neighboring slots untouched
        assert!(store.positions.get(1).is_some());
    }
}
