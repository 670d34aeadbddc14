//! Application lifecycle - construction and read accessors.

use super::{App, NavigationState, PlayState, ProgressState, SystemState, View};
use crate::abacus::Abacus;
use crate::audio::SoundSink;
use crate::progress::GameData;
use crate::session::GameSession;
use crate::storage::{GameStore, KeyValueStore};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tracing::info;

impl<S: KeyValueStore> App<S> {
    pub fn new(store: S, sounds: Arc<dyn SoundSink>) -> Self {
        Self::with_rng(store, sounds, StdRng::from_entropy())
    }

    /// Build with a specific RNG so problem sequences are reproducible.
    pub fn with_rng(store: S, sounds: Arc<dyn SoundSink>, rng: StdRng) -> Self {
        let store = GameStore::new(store);
        let data = store.load();
        sounds.set_enabled(data.settings.sound_enabled);

        info!(
            candies = data.candies,
            total_correct = data.total_correct,
            stickers = data.stickers_unlocked.len(),
            "Progress loaded"
        );

        Self {
            navigation: NavigationState { view: View::Home },
            progress: ProgressState { data, store },
            play: PlayState::default(),
            system: SystemState {
                sounds,
                rng,
                reset_armed_at: None,
            },
        }
    }

    pub fn view(&self) -> View {
        self.navigation.view
    }

    pub fn data(&self) -> &GameData {
        &self.progress.data
    }

    pub fn store(&self) -> &GameStore<S> {
        &self.progress.store
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.play.session.as_ref()
    }

    pub fn free_practice(&self) -> Option<&Abacus> {
        self.play.free_practice.as_ref()
    }

    pub fn new_stickers(&self) -> &[&'static str] {
        &self.play.new_stickers
    }

    /// The abacus pointer input should go to in the current view.
    pub fn active_abacus(&self) -> Option<&Abacus> {
        match self.navigation.view {
            View::Game => self.play.session.as_ref().map(GameSession::abacus),
            View::FreeMode => self.play.free_practice.as_ref(),
            _ => None,
        }
    }

    pub(super) fn active_abacus_mut(&mut self) -> Option<&mut Abacus> {
        match self.navigation.view {
            View::Game => self.play.session.as_mut().map(GameSession::abacus_mut),
            View::FreeMode => self.play.free_practice.as_mut(),
            _ => None,
        }
    }

    pub(super) fn save(&self) {
        self.progress.store.save(&self.progress.data);
    }
}
