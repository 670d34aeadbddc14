//! One quiz round: the current problem, the answering abacus and the verdict.
//!
//! The session only judges answers. Progress bookkeeping, saving and sounds
//! are the app's job (see `app::game_handlers`).

use crate::abacus::{Abacus, AbacusConfig};
use crate::problem::{MathProblem, generate_problem};
use crate::settings::{Difficulty, GestureConfig};
use rand::Rng;
use tracing::debug;

/// Where the current problem stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerState {
    #[default]
    Pending,
    Correct,
    Wrong,
}

/// Outcome of one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Judgement {
    Correct,
    Wrong,
    /// The submission was not accepted (already solved, or choices locked)
    Ignored,
}

pub struct GameSession {
    difficulty: Difficulty,
    problem: MathProblem,
    abacus: Abacus,
    state: AnswerState,
    selected_choice: Option<u32>,
}

impl GameSession {
    pub fn new<R: Rng + ?Sized>(difficulty: Difficulty, gesture: GestureConfig, rng: &mut R) -> Self {
        let problem = generate_problem(difficulty, rng);
        let mut abacus = Abacus::new(AbacusConfig::standard().with_gesture(gesture));
        abacus.sync_problem(&problem.id);
        debug!(?difficulty, expression = %problem.expression, "Session started");
        Self {
            difficulty,
            problem,
            abacus,
            state: AnswerState::Pending,
            selected_choice: None,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn problem(&self) -> &MathProblem {
        &self.problem
    }

    pub fn abacus(&self) -> &Abacus {
        &self.abacus
    }

    pub fn abacus_mut(&mut self) -> &mut Abacus {
        &mut self.abacus
    }

    pub fn state(&self) -> AnswerState {
        self.state
    }

    pub fn selected_choice(&self) -> Option<u32> {
        self.selected_choice
    }

    /// Compare the abacus total with the answer.
    pub fn submit_abacus(&mut self) -> Judgement {
        if self.state == AnswerState::Correct {
            return Judgement::Ignored;
        }
        let total = self.abacus.total();
        self.judge(total == u64::from(self.problem.answer))
    }

    /// Compare a multiple-choice pick with the answer. Picks are locked
    /// until [`GameSession::clear_feedback`] runs.
    pub fn submit_choice(&mut self, choice: u32) -> Judgement {
        if self.state == AnswerState::Correct || self.selected_choice.is_some() {
            return Judgement::Ignored;
        }
        self.selected_choice = Some(choice);
        self.judge(choice == self.problem.answer)
    }

    fn judge(&mut self, correct: bool) -> Judgement {
        debug!(correct, expression = %self.problem.expression, "Answer judged");
        if correct {
            self.state = AnswerState::Correct;
            Judgement::Correct
        } else {
            self.state = AnswerState::Wrong;
            Judgement::Wrong
        }
    }

    /// Dismiss wrong-answer feedback so the child can try again.
    pub fn clear_feedback(&mut self) {
        if self.state == AnswerState::Wrong {
            self.state = AnswerState::Pending;
        }
        if self.state != AnswerState::Correct {
            self.selected_choice = None;
        }
    }

    /// Move on to a fresh problem. The abacus resets because the id changed.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.problem = generate_problem(self.difficulty, rng);
        self.state = AnswerState::Pending;
        self.selected_choice = None;
        self.abacus.sync_problem(&self.problem.id);
    }
}
