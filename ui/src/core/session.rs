//! Root state container.
//!
//! A [`Session`] owns the current [`EditorState`] and a [`CommitHook`]. Each
//! dispatched action is reduced into a new state, the new state is committed,
//! and only then is the hook told about it. The default hook is
//! [`Persistence`], which mirrors the board into a [`KeyValueStore`].

use tracing::{debug, info};

use super::platform::Platform;
use super::projection::{self, ChartRow, ChartSeries};
use super::state::{reduce, Action, EditorState};
use super::storage::{self, KeyValueStore, StorageError};

/// Called after every committed state change.
pub trait CommitHook {
    fn on_commit(&mut self, state: &EditorState) -> Result<(), StorageError>;
}

/// Writes both collections to the store after each commit.
pub struct Persistence<S> {
    store: S,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Initial state as found in the store.
    pub fn load(&self) -> EditorState {
        storage::load_state(&self.store)
    }
}

impl<S: KeyValueStore> CommitHook for Persistence<S> {
    fn on_commit(&mut self, state: &EditorState) -> Result<(), StorageError> {
        storage::save_state(&self.store, state)
    }
}

/// Session type used by the views.
pub type BoardSession = Session<Persistence<Box<dyn KeyValueStore>>>;

pub struct Session<H> {
    state: EditorState,
    hook: H,
}

impl<H: CommitHook> Session<H> {
    pub fn new(state: EditorState, hook: H) -> Self {
        Self { state, hook }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn hook(&self) -> &H {
        &self.hook
    }

    /// Reduce `action` into the state, then run the commit hook.
    ///
    /// The state change stands even when the hook fails.
    pub fn dispatch(&mut self, action: Action) -> Result<(), StorageError> {
        debug!(?action, "dispatch");
        let current = std::mem::take(&mut self.state);
        self.state = reduce(current, action);
        self.hook.on_commit(&self.state)
    }

    pub fn chart_rows(&self) -> Vec<ChartRow> {
        projection::project(&self.state.metrics, &self.state.data_sets)
    }

    pub fn chart_series(&self) -> Vec<ChartSeries> {
        projection::series(&self.state.data_sets)
    }
}

impl<S: KeyValueStore> Session<Persistence<S>> {
    /// Session seeded from whatever `store` already holds.
    pub fn restore(store: S) -> Self {
        let persistence = Persistence::new(store);
        let state = persistence.load();
        info!(platform = Platform::current().label(), "session restored");
        Self::new(state, persistence)
    }
}

impl BoardSession {
    /// Session on the platform's default store.
    pub fn open_default() -> Self {
        Self::restore(storage::default_store())
    }
}
