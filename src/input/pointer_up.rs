//! Pointer up / cancel handling - finish gestures, apply taps.

use crate::abacus::Abacus;
use crate::profile_scope;
use crate::types::{PointerEvent, PointerPhase};
use tracing::trace;

impl Abacus {
    /// Finish the gesture of the event's contact. A gesture that never
    /// committed and stayed within the tap threshold applies its tap.
    /// Returns true if a rod changed.
    pub fn handle_pointer_up(&mut self, event: &PointerEvent) -> bool {
        profile_scope!("handle_pointer_up");

        let Some(mut gesture) = self.gestures.end(event.contact) else {
            return false;
        };
        gesture.track(self.input_axis.pick(event.position));

        if !gesture.is_tap(self.gesture_config.tap_threshold) {
            trace!(
                contact = %event.contact,
                committed = gesture.committed,
                delta = gesture.last_delta,
                "Gesture ended"
            );
            return false;
        }

        let transition = gesture.tap_transition();
        trace!(contact = %event.contact, bead = ?gesture.bead, ?transition, "Tap");
        self.apply(gesture.bead.rod, transition)
    }

    /// Drop the gesture of the event's contact without applying anything.
    /// Transitions it already committed stay applied.
    pub fn handle_pointer_cancel(&mut self, event: &PointerEvent) -> bool {
        let ended = self.gestures.end(event.contact);
        if let Some(gesture) = &ended {
            trace!(contact = %event.contact, bead = ?gesture.bead, phase = ?event.phase, "Gesture cancelled");
        }
        ended.is_some()
    }

    /// Route an event by phase. Down events are hit-tested against the layout.
    /// Returns true if a rod changed.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        match event.phase {
            PointerPhase::Down => {
                self.handle_pointer_down_at(event);
                false
            }
            PointerPhase::Move => self.handle_pointer_move(event),
            PointerPhase::Up => self.handle_pointer_up(event),
            PointerPhase::Cancel | PointerPhase::LostCapture => {
                self.handle_pointer_cancel(event);
                false
            }
        }
    }
}
