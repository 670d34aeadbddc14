//! Application state - the App struct definition and sub-structs.

use super::View;
use crate::abacus::Abacus;
use crate::audio::SoundSink;
use crate::progress::GameData;
use crate::session::GameSession;
use crate::storage::GameStore;
use rand::rngs::StdRng;
use std::sync::Arc;
use std::time::Instant;

/// Current screen
pub struct NavigationState {
    pub view: View,
}

/// Persisted progress and where it lives
pub struct ProgressState<S> {
    pub data: GameData,
    pub store: GameStore<S>,
}

/// Whatever is being played right now
#[derive(Default)]
pub struct PlayState {
    /// Quiz round; `None` outside the game view or once the daily limit is hit
    pub session: Option<GameSession>,
    /// Nine-rod abacus of the free practice view
    pub free_practice: Option<Abacus>,
    /// Stickers unlocked by the last visit to the rewards view
    pub new_stickers: Vec<&'static str>,
}

/// Collaborators and bookkeeping that are not user-visible state
pub struct SystemState {
    pub sounds: Arc<dyn SoundSink>,
    pub rng: StdRng,
    /// First press of "reset all progress", awaiting confirmation
    pub reset_armed_at: Option<Instant>,
}

/// The whole application, generic over where progress is stored.
pub struct App<S> {
    pub navigation: NavigationState,
    pub progress: ProgressState<S>,
    pub play: PlayState,
    pub system: SystemState,
}
