//! Game-related methods - answers, rewards bookkeeping, pointer routing

use super::App;
use crate::audio::SoundKind;
use crate::input::coords::ScreenTransform;
use crate::session::{GameSession, Judgement};
use crate::storage::KeyValueStore;
use crate::types::PointerEvent;
use tracing::{debug, info};

impl<S: KeyValueStore> App<S> {
    /// Check the abacus total against the current problem.
    /// `None` when there is no running session.
    pub fn submit_abacus_answer(&mut self) -> Option<Judgement> {
        let judgement = self.play.session.as_mut()?.submit_abacus();
        self.apply_judgement(judgement);
        Some(judgement)
    }

    /// Check a multiple-choice pick against the current problem.
    pub fn submit_choice(&mut self, choice: u32) -> Option<Judgement> {
        let judgement = self.play.session.as_mut()?.submit_choice(choice);
        self.apply_judgement(judgement);
        Some(judgement)
    }

    fn apply_judgement(&mut self, judgement: Judgement) {
        match judgement {
            Judgement::Correct => {
                self.progress.data.record_correct();
                info!(
                    candies = self.progress.data.candies,
                    streak = self.progress.data.streak,
                    today = self.progress.data.today_count(),
                    "Correct answer"
                );
                self.save();
                self.system.sounds.play(SoundKind::Success);
            }
            Judgement::Wrong => {
                self.progress.data.record_wrong();
                debug!("Wrong answer, streak reset");
                self.save();
                self.system.sounds.play(SoundKind::Wrong);
            }
            Judgement::Ignored => {}
        }
    }

    /// Dismiss wrong-answer feedback.
    pub fn clear_feedback(&mut self) {
        if let Some(session) = self.play.session.as_mut() {
            session.clear_feedback();
        }
    }

    /// Issue the next problem, or end the session if the daily limit is
    /// now reached. Returns true if a new problem is showing.
    pub fn next_problem(&mut self) -> bool {
        if self.play.session.is_none() {
            return false;
        }
        if self.is_daily_limit_reached() {
            info!("Daily limit reached, ending session");
            self.play.session = None;
            return false;
        }
        match self.play.session.as_mut() {
            Some(session) => {
                session.advance(&mut self.system.rng);
                true
            }
            None => false,
        }
    }

    /// The "clear" button under the abacus.
    pub fn clear_abacus(&mut self) {
        if let Some(abacus) = self.active_abacus_mut() {
            abacus.clear();
        }
    }

    /// Button press feedback.
    pub fn play_click(&self) {
        self.system.sounds.play(SoundKind::Click);
    }

    /// Place the abacus of the current view on screen. Returns false when the
    /// view has no abacus. A new abacus starts from its default placement.
    pub fn set_screen_transform(&mut self, transform: ScreenTransform) -> bool {
        match self.active_abacus_mut() {
            Some(abacus) => {
                abacus.set_screen_transform(transform);
                true
            }
            None => false,
        }
    }

    /// Route a pointer event to the abacus of the current view.
    /// Returns true if a rod changed.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        self.active_abacus_mut()
            .is_some_and(|abacus| abacus.handle_pointer(event))
    }

    /// The running session, for hosts that drive the abacus directly.
    pub fn session_mut(&mut self) -> Option<&mut GameSession> {
        self.play.session.as_mut()
    }
}
