//! Thread-safe holder for a slice's state.
//!
//! Many readers can look at the state concurrently; intents are applied
//! one at a time under the write lock.

use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::RwLock;

use super::mvi::Reducer;

/// Shared state container driven by a [`Reducer`].
///
/// Cloning a `Store` is cheap and yields a handle to the same state.
pub struct Store<R: Reducer> {
    inner: Arc<RwLock<R::State>>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            _reducer: PhantomData,
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

impl<R: Reducer> Store<R> {
    /// Create a store seeded with the given state.
    pub fn new(state: R::State) -> Self {
        Self {
            inner: Arc::new(RwLock::new(state)),
            _reducer: PhantomData,
        }
    }

    /// Apply an intent through the reducer.
    pub fn dispatch(&self, intent: R::Intent) {
        let mut guard = self.inner.write();
        let current = std::mem::take(&mut *guard);
        *guard = R::reduce(current, intent);
    }

    /// Get a clone of the current state.
    pub fn state(&self) -> R::State {
        self.inner.read().clone()
    }

    /// Run `f` against the current state without cloning it.
    ///
    /// Derived views borrow from the state, so this is the way to read
    /// them without taking a snapshot first.
    pub fn read<T>(&self, f: impl FnOnce(&R::State) -> T) -> T {
        f(&self.inner.read())
    }
}
