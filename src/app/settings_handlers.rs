//! Settings-related methods - difficulty, toggles, daily limit, full reset

use super::{App, View};
use crate::constants::RESET_CONFIRM_WINDOW_MS;
use crate::progress::GameData;
use crate::settings::{Difficulty, GestureConfig, SettingToggle};
use crate::storage::KeyValueStore;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Outcome of a "reset all progress" press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetRequest {
    /// First press; another within the window confirms
    Armed,
    /// Progress wiped
    Done,
}

impl<S: KeyValueStore> App<S> {
    /// Store the difficulty and go straight into a game.
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        self.progress.data.settings.difficulty = difficulty;
        self.save();
        self.play.session = None;
        self.navigate(View::Game);
    }

    /// Flip a setting, persist it, and return the new value.
    pub fn toggle_setting(&mut self, toggle: SettingToggle) -> bool {
        let value = self.progress.data.settings.toggle(toggle);
        if toggle == SettingToggle::SoundEnabled {
            self.system.sounds.set_enabled(value);
        }
        self.save();
        value
    }

    /// Returns the limit actually stored after clamping.
    pub fn set_daily_limit(&mut self, limit: u32) -> u32 {
        let stored = self.progress.data.settings.set_daily_limit(limit);
        self.save();
        stored
    }

    /// Update gesture thresholds, here and on any live abacus.
    pub fn set_gesture_config(&mut self, gesture: GestureConfig) {
        let gesture = gesture.normalized();
        self.progress.data.settings.gesture = gesture;
        if let Some(session) = self.play.session.as_mut() {
            session.abacus_mut().set_gesture_config(gesture);
        }
        if let Some(abacus) = self.play.free_practice.as_mut() {
            abacus.set_gesture_config(gesture);
        }
        self.save();
    }

    /// Wipe all progress. Needs two presses within the confirm window.
    pub fn request_reset(&mut self, now: Instant) -> ResetRequest {
        let window = Duration::from_millis(RESET_CONFIRM_WINDOW_MS);
        let confirmed = self
            .system
            .reset_armed_at
            .is_some_and(|armed| now.saturating_duration_since(armed) <= window);

        if !confirmed {
            self.system.reset_armed_at = Some(now);
            info!("Progress reset armed");
            return ResetRequest::Armed;
        }

        self.system.reset_armed_at = None;
        self.progress.data = GameData::default();
        self.system
            .sounds
            .set_enabled(self.progress.data.settings.sound_enabled);
        self.play.session = None;
        self.play.new_stickers.clear();
        self.save();
        warn!("All progress reset");
        self.navigate(View::Home);
        ResetRequest::Done
    }
}
