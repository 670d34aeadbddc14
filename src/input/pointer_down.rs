//! Pointer down handling - capture a bead and start tracking its gesture.

use crate::abacus::Abacus;
use crate::constants::EARTH_BEADS;
use crate::input::ActiveGesture;
use crate::profile_scope;
use crate::types::{BeadId, BeadKind, PointerEvent};
use tracing::trace;

impl Abacus {
    /// Start a gesture on `bead` for the event's contact.
    ///
    /// Returns false and changes nothing if the bead does not exist or is
    /// already captured by another contact.
    pub fn handle_pointer_down(&mut self, event: &PointerEvent, bead: BeadId) -> bool {
        profile_scope!("handle_pointer_down");

        let Some(rod) = self.rods.get(bead.rod) else {
            trace!(rod = bead.rod, "Pointer down on missing rod");
            return false;
        };
        if let BeadKind::Earth(index) = bead.bead
            && index >= EARTH_BEADS
        {
            trace!(index, "Pointer down on missing earth bead");
            return false;
        }

        let origin = self.input_axis.pick(event.position);
        let gesture = ActiveGesture::new(event.contact, bead, origin, rod);
        let started = self.gestures.begin(gesture);
        if started {
            trace!(contact = %event.contact, ?bead, origin, "Gesture started");
        } else {
            trace!(contact = %event.contact, ?bead, "Bead already captured");
        }
        started
    }

    /// Hit-test the event position and start a gesture on the bead under it.
    pub fn handle_pointer_down_at(&mut self, event: &PointerEvent) -> Option<BeadId> {
        let bead = self.layout.hit_test(event.position)?;
        self.handle_pointer_down(event, bead).then_some(bead)
    }
}
