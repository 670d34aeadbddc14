//! Gesture tracking - per-bead gesture records keyed by contact.
//!
//! Each bead can be captured by at most one contact at a time, and each
//! contact drives at most one bead. Two maps keep both directions explicit:
//!
//! ```text
//! beads:    BeadId    -> ActiveGesture   (inserted on down, removed on up/cancel)
//! contacts: ContactId -> BeadId          (routes move/up to the right gesture)
//! ```
//!
//! ## Gesture Lifecycle
//!
//! ```text
//! (none) -> Tracking            (down on an uncaptured bead)
//! Tracking -> Committed         (move past the drag threshold, once)
//! Tracking -> (none)            (up: tap if within the tap threshold)
//! Committed -> (none)           (up, no further action)
//! Any -> (none)                 (cancel / lost capture, no action)
//! ```

use crate::rod::{Rod, RodTransition};
use crate::types::{BeadId, BeadKind, ContactId};
use std::collections::HashMap;

/// State of one in-flight gesture on one bead.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveGesture {
    pub contact: ContactId,
    pub bead: BeadId,
    /// Decision-axis coordinate captured on down
    pub origin: f32,
    /// Heaven bead state when the gesture started
    pub heaven_active_at_start: bool,
    /// Earth count when the gesture started
    pub earth_count_at_start: u8,
    /// Set once a drag has produced a transition
    pub committed: bool,
    /// Displacement of the latest tracked coordinate from the origin
    pub last_delta: f32,
}

impl ActiveGesture {
    pub fn new(contact: ContactId, bead: BeadId, origin: f32, rod: &Rod) -> Self {
        Self {
            contact,
            bead,
            origin,
            heaven_active_at_start: rod.heaven_active(),
            earth_count_at_start: rod.earth_count(),
            committed: false,
            last_delta: 0.0,
        }
    }

    /// Record a new decision-axis coordinate and return its delta from the origin.
    pub fn track(&mut self, coordinate: f32) -> f32 {
        let delta = coordinate - self.origin;
        self.last_delta = delta;
        delta
    }

    /// The transition a drag of `delta` commits, if it crosses the threshold
    /// in the direction that changes this bead.
    pub fn drag_transition(&self, delta: f32, threshold: f32) -> Option<RodTransition> {
        match self.bead.bead {
            BeadKind::Heaven => {
                if !self.heaven_active_at_start && delta > threshold {
                    Some(RodTransition::SetHeaven(true))
                } else if self.heaven_active_at_start && delta < -threshold {
                    Some(RodTransition::SetHeaven(false))
                } else {
                    None
                }
            }
            BeadKind::Earth(index) => {
                let start = self.earth_count_at_start;
                if delta < -threshold && index >= start {
                    Some(RodTransition::SetEarthCount(index + 1))
                } else if delta > threshold && index < start {
                    Some(RodTransition::SetEarthCount(index))
                } else {
                    None
                }
            }
        }
    }

    /// The transition a tap on this bead applies.
    pub fn tap_transition(&self) -> RodTransition {
        match self.bead.bead {
            BeadKind::Heaven => RodTransition::ToggleHeaven,
            BeadKind::Earth(index) => RodTransition::TapEarth(index),
        }
    }

    /// Whether the gesture qualifies as a tap under `threshold`. Only the
    /// last tracked position counts, so a contact that wanders off and comes
    /// back before lifting still taps.
    pub fn is_tap(&self, threshold: f32) -> bool {
        !self.committed && self.last_delta.abs() < threshold
    }
}

/// All in-flight gestures of one abacus.
#[derive(Debug, Default)]
pub struct GestureTracker {
    beads: HashMap<BeadId, ActiveGesture>,
    contacts: HashMap<ContactId, BeadId>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no gesture is in flight
    pub fn is_idle(&self) -> bool {
        self.beads.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.beads.len()
    }

    /// Returns true if some contact currently owns this bead
    pub fn is_captured(&self, bead: BeadId) -> bool {
        self.beads.contains_key(&bead)
    }

    /// The bead a contact is driving, if any
    pub fn bead_for(&self, contact: ContactId) -> Option<BeadId> {
        self.contacts.get(&contact).copied()
    }

    pub fn gesture(&self, bead: BeadId) -> Option<&ActiveGesture> {
        self.beads.get(&bead)
    }

    /// Start tracking a gesture. Returns false if the bead is already captured.
    ///
    /// A contact that is somehow still bound to another bead is released from it
    /// first, since a physical contact cannot be down twice.
    pub fn begin(&mut self, gesture: ActiveGesture) -> bool {
        if self.beads.contains_key(&gesture.bead) {
            return false;
        }
        if let Some(stale) = self.contacts.remove(&gesture.contact) {
            self.beads.remove(&stale);
        }
        self.contacts.insert(gesture.contact, gesture.bead);
        self.beads.insert(gesture.bead, gesture);
        true
    }

    /// The gesture driven by `contact`, if the contact matches the bead's gesture.
    pub fn for_contact_mut(&mut self, contact: ContactId) -> Option<&mut ActiveGesture> {
        let bead = self.contacts.get(&contact)?;
        self.beads
            .get_mut(bead)
            .filter(|gesture| gesture.contact == contact)
    }

    /// Stop tracking the gesture of `contact` and hand it back.
    pub fn end(&mut self, contact: ContactId) -> Option<ActiveGesture> {
        let bead = self.contacts.remove(&contact)?;
        match self.beads.remove(&bead) {
            Some(gesture) if gesture.contact == contact => Some(gesture),
            Some(other) => {
                // Bead now belongs to another contact; put it back untouched
                self.beads.insert(bead, other);
                None
            }
            None => None,
        }
    }

    /// Drop every gesture without applying anything.
    pub fn clear(&mut self) {
        self.beads.clear();
        self.contacts.clear();
    }
}
