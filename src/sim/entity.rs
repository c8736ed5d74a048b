//! Entity handles and world-level errors.

use thiserror::Error;

/// Opaque handle to one simulated entity.
///
/// An entity has no identity beyond the components attached to it. The
/// handle pairs a slot index with a generation counter: destroying an
/// entity bumps the slot's generation, so stale handles held by a caller
/// become inert instead of aliasing the slot's next occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entity {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl Entity {
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index for columnar storage lookup.
    pub(crate) fn slot(self) -> usize {
        self.index as usize
    }
}

/// Recoverable world errors.
///
/// Invariant violations (a queried entity missing a component its tag set
/// guarantees) are programming errors and panic instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    /// The bounded entity store is full; creation was rejected.
    #[error("entity capacity exhausted ({0} live entities)")]
    ResourceExhausted(usize),
}
