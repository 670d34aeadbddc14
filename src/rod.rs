//! Rod state machine - one abacus column.
//!
//! A rod carries one heaven bead worth five and four earth beads worth one
//! each. Only the digit is stored; the bead decomposition is derived from it,
//! so `digit == heaven * 5 + earth_count` holds by construction.
//!
//! ## Transitions
//!
//! ```text
//! SetHeaven(on)      digit = (on ? 5 : 0) + digit % 5
//! SetEarthCount(n)   digit = (digit >= 5 ? 5 : 0) + min(n, 4)
//! ToggleHeaven       digit +/- 5
//! TapEarth(i)        cut the earth stack at i, or raise it up to i
//! ```
//!
//! Out-of-range requests are clamped, never rejected.

use crate::constants::{EARTH_BEADS, HEAVEN_VALUE, MAX_DIGIT};
use serde::{Deserialize, Serialize};

/// A requested change to a rod's digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RodTransition {
    SetHeaven(bool),
    SetEarthCount(u8),
    ToggleHeaven,
    /// A tap on the earth bead at this index (0 = nearest the beam)
    TapEarth(u8),
}

impl RodTransition {
    /// Compute the digit that results from applying this transition to `digit`.
    pub fn apply(self, digit: u8) -> u8 {
        let digit = digit.min(MAX_DIGIT);
        let heaven = if digit >= HEAVEN_VALUE { HEAVEN_VALUE } else { 0 };
        let earth = digit % HEAVEN_VALUE;

        match self {
            Self::SetHeaven(active) => {
                let heaven = if active { HEAVEN_VALUE } else { 0 };
                heaven + earth
            }
            Self::SetEarthCount(count) => heaven + count.min(EARTH_BEADS),
            Self::ToggleHeaven => {
                if digit >= HEAVEN_VALUE {
                    digit - HEAVEN_VALUE
                } else {
                    digit + HEAVEN_VALUE
                }
            }
            Self::TapEarth(index) => {
                let index = index.min(EARTH_BEADS - 1);
                let count = if index < earth { index } else { index + 1 };
                heaven + count.min(EARTH_BEADS)
            }
        }
    }
}

/// A digit change produced by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RodChange {
    pub previous: u8,
    pub digit: u8,
}

/// A single abacus rod.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rod {
    digit: u8,
}

impl Rod {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a rod showing `digit`, clamped to 0..=9.
    pub fn from_digit(digit: u8) -> Self {
        Self {
            digit: digit.min(MAX_DIGIT),
        }
    }

    #[inline]
    pub fn digit(&self) -> u8 {
        self.digit
    }

    #[inline]
    pub fn heaven_active(&self) -> bool {
        self.digit >= HEAVEN_VALUE
    }

    #[inline]
    pub fn earth_count(&self) -> u8 {
        self.digit % HEAVEN_VALUE
    }

    /// Whether the earth bead at `index` is raised against the beam.
    #[inline]
    pub fn earth_bead_active(&self, index: u8) -> bool {
        index < self.earth_count()
    }

    /// Apply a transition. Returns the change only when the digit differs.
    pub fn apply(&mut self, transition: RodTransition) -> Option<RodChange> {
        let previous = self.digit;
        let digit = transition.apply(previous);
        if digit == previous {
            return None;
        }
        self.digit = digit;
        Some(RodChange { previous, digit })
    }

    pub fn set_heaven(&mut self, active: bool) -> Option<RodChange> {
        self.apply(RodTransition::SetHeaven(active))
    }

    pub fn set_earth_count(&mut self, count: u8) -> Option<RodChange> {
        self.apply(RodTransition::SetEarthCount(count))
    }

    pub fn toggle_heaven(&mut self) -> Option<RodChange> {
        self.apply(RodTransition::ToggleHeaven)
    }

    pub fn set_earth_by_bead_tap(&mut self, index: u8) -> Option<RodChange> {
        self.apply(RodTransition::TapEarth(index))
    }
}
