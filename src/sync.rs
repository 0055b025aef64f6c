//! Shared access to one position across threads.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::board::{BoardError, Position};

/// A position behind a read-write lock.
///
/// Readers take snapshots or run closures under the read lock; every
/// mutation goes through the single write lock, so moves from different
/// threads are applied one at a time.
#[derive(Clone, Debug, Default)]
pub struct SharedPosition(Arc<RwLock<Position>>);

impl SharedPosition {
    #[must_use]
    pub fn new(position: Position) -> Self {
        SharedPosition(Arc::new(RwLock::new(position)))
    }

    /// Clone of the current position.
    #[must_use]
    pub fn snapshot(&self) -> Position {
        self.0.read().clone()
    }

    /// Run `f` with shared access.
    pub fn read<R>(&self, f: impl FnOnce(&Position) -> R) -> R {
        f(&self.0.read())
    }

    /// Run `f` with exclusive access.
    pub fn write<R>(&self, f: impl FnOnce(&mut Position) -> R) -> R {
        f(&mut self.0.write())
    }

    /// Apply one KIF move under the write lock.
    pub fn apply_kif(&self, text: &str) -> Result<(), BoardError> {
        self.write(|pos| pos.apply_kif(text))
    }
}

impl From<Position> for SharedPosition {
    fn from(position: Position) -> Self {
        SharedPosition::new(position)
    }
}
