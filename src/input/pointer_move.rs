//! Pointer move handling - commit a drag once it crosses the threshold.

use crate::abacus::Abacus;
use crate::profile_scope;
use crate::types::PointerEvent;
use tracing::trace;

impl Abacus {
    /// Track a move of the event's contact. Returns true if the move
    /// changed a rod.
    ///
    /// A gesture commits at most once; further movement in either direction
    /// is ignored until the contact lifts.
    pub fn handle_pointer_move(&mut self, event: &PointerEvent) -> bool {
        profile_scope!("handle_pointer_move");

        let threshold = self.gesture_config.drag_threshold;
        let coordinate = self.input_axis.pick(event.position);
        let Some(gesture) = self.gestures.for_contact_mut(event.contact) else {
            return false;
        };

        let delta = gesture.track(coordinate);
        if gesture.committed {
            return false;
        }
        let Some(transition) = gesture.drag_transition(delta, threshold) else {
            return false;
        };
        gesture.committed = true;
        let rod = gesture.bead.rod;

        trace!(contact = %event.contact, rod, delta, ?transition, "Drag committed");
        self.apply(rod, transition);
        true
    }
}
