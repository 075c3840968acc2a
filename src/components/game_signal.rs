use leptos::{create_rw_signal, RwSignal, SignalSet, SignalUpdate, SignalWith};
use crate::journey::JourneyEngine;

/// Reactive handle on the running game, empty while city data is loading
#[derive(Clone, Copy)]
pub struct GameSignal(RwSignal<Option<JourneyEngine>>);

impl GameSignal {
    #[must_use]
    pub fn new() -> Self {
        Self(create_rw_signal(None))
    }

    /// Read from the engine, tracking it as a reactive dependency
    pub fn with<T>(self, f: impl FnOnce(&JourneyEngine) -> T) -> Option<T> {
        self.0.with(|engine| engine.as_ref().map(f))
    }

    /// Run an intent against the engine and notify every reader
    pub fn update<T>(self, f: impl FnOnce(&mut JourneyEngine) -> T) -> Option<T> {
        let mut result = None;
        self.0.update(|engine| result = engine.as_mut().map(f));
        result
    }

    pub fn replace(self, engine: Option<JourneyEngine>) {
        self.0.set(engine);
    }
}

impl Default for GameSignal {
    fn default() -> Self {
        Self::new()
    }
}
