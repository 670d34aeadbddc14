//! View changes. Entering a view builds what it needs; leaving a play view
//! drops its abacus and any in-flight gestures with it.

use super::{App, View};
use crate::abacus::{Abacus, AbacusConfig, AbacusEvent};
use crate::audio::{SoundKind, SoundSink};
use crate::rewards::unlock_new_stickers;
use crate::session::GameSession;
use crate::storage::KeyValueStore;
use std::sync::Arc;
use tracing::{debug, info};

/// Play the bead sound whenever a rod changes.
pub(super) fn attach_bead_sound(abacus: &mut Abacus, sounds: Arc<dyn SoundSink>) {
    abacus.subscribe(move |event| {
        if matches!(event, AbacusEvent::BeadMoved { .. }) {
            sounds.play(SoundKind::Bead);
        }
    });
}

impl<S: KeyValueStore> App<S> {
    pub fn navigate(&mut self, view: View) {
        let from = self.navigation.view;
        debug!(?from, to = ?view, "Navigate");

        if from != view {
            match from {
                View::Game => self.play.session = None,
                View::FreeMode => self.play.free_practice = None,
                _ => {}
            }
        }
        self.navigation.view = view;

        match view {
            View::Game => {
                if self.play.session.is_none() {
                    self.start_session();
                }
            }
            View::FreeMode => {
                if self.play.free_practice.is_none() {
                    let config = AbacusConfig::free_practice()
                        .with_gesture(self.progress.data.settings.gesture);
                    let mut abacus = Abacus::new(config);
                    attach_bead_sound(&mut abacus, Arc::clone(&self.system.sounds));
                    self.play.free_practice = Some(abacus);
                }
            }
            View::Rewards => {
                self.play.new_stickers = unlock_new_stickers(&mut self.progress.data);
                if !self.play.new_stickers.is_empty() {
                    self.save();
                }
            }
            View::Home | View::LevelSelect | View::Settings => {}
        }
    }

    pub fn go_home(&mut self) {
        self.navigate(View::Home);
    }

    /// Whether today's practice quota is used up.
    pub fn is_daily_limit_reached(&self) -> bool {
        self.progress.data.is_over_limit()
    }

    /// Start a quiz round unless the daily limit is reached.
    pub(super) fn start_session(&mut self) {
        if self.is_daily_limit_reached() {
            info!(
                today = self.progress.data.today_count(),
                limit = self.progress.data.settings.daily_limit,
                "Daily limit reached, no new problem"
            );
            self.play.session = None;
            return;
        }

        let settings = &self.progress.data.settings;
        let mut session =
            GameSession::new(settings.difficulty, settings.gesture, &mut self.system.rng);
        attach_bead_sound(session.abacus_mut(), Arc::clone(&self.system.sounds));
        self.play.session = Some(session);
    }
}
