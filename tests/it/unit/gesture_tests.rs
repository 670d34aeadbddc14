//! Unit tests for the gesture interpreter.

use crate::helpers::record_events;
use candy_abacus::abacus::{Abacus, AbacusConfig, AbacusEvent};
use candy_abacus::input::coords::InputAxis;
use candy_abacus::settings::GestureConfig;
use candy_abacus::types::{BeadId, ContactId, Point, PointerEvent, PointerPhase};
use proptest::prelude::*;

fn standard() -> Abacus {
    Abacus::new(AbacusConfig::standard())
}

fn down(abacus: &mut Abacus, contact: u64, y: f32, bead: BeadId) {
    assert!(abacus.handle_pointer_down(&PointerEvent::down(contact, 0.0, y), bead));
}

// ============================================================================
// Drag threshold
// ============================================================================

#[test]
fn test_drag_exactly_at_threshold_does_not_commit() {
    let mut abacus = standard();
    down(&mut abacus, 1, 100.0, BeadId::heaven(0));
    abacus.handle_pointer_move(&PointerEvent::moved(1, 0.0, 110.0));
    assert_eq!(abacus.total(), 0);
    abacus.handle_pointer_move(&PointerEvent::moved(1, 0.0, 110.5));
    assert_eq!(abacus.total(), 500);
}

#[test]
fn test_drag_past_threshold_commits_once_while_moving_on() {
    let mut abacus = standard();
    let events = record_events(&mut abacus);
    down(&mut abacus, 1, 100.0, BeadId::heaven(2));
    assert!(abacus.handle_pointer_move(&PointerEvent::moved(1, 0.0, 111.0)));
    assert!(!abacus.handle_pointer_move(&PointerEvent::moved(1, 0.0, 211.0)));
    abacus.handle_pointer_up(&PointerEvent::up(1, 0.0, 211.0));

    let moves = events
        .borrow()
        .iter()
        .filter(|e| matches!(e, AbacusEvent::BeadMoved { .. }))
        .count();
    assert_eq!(moves, 1);
    assert_eq!(abacus.total(), 5);
}

#[test]
fn test_drag_in_wrong_direction_does_nothing() {
    let mut abacus = standard();
    down(&mut abacus, 1, 100.0, BeadId::heaven(2));
    abacus.handle_pointer_move(&PointerEvent::moved(1, 0.0, 40.0));
    abacus.handle_pointer_up(&PointerEvent::up(1, 0.0, 40.0));
    assert_eq!(abacus.total(), 0);

    // Active earth bead dragged further up stays put
    abacus.on_rod_changed(2, 2);
    down(&mut abacus, 2, 200.0, BeadId::earth(2, 0));
    abacus.handle_pointer_move(&PointerEvent::moved(2, 0.0, 150.0));
    assert_eq!(abacus.total(), 2);
}

#[test]
fn test_drag_earth_down_drops_bead_and_those_below() {
    let mut abacus = standard();
    abacus.on_rod_changed(2, 9);
    down(&mut abacus, 1, 200.0, BeadId::earth(2, 1));
    abacus.handle_pointer_move(&PointerEvent::moved(1, 0.0, 230.0));
    assert_eq!(abacus.digits(), vec![0, 0, 6]);
}

#[test]
fn test_drag_uses_start_state_not_current() {
    let mut abacus = standard();
    down(&mut abacus, 1, 100.0, BeadId::earth(2, 3));
    // Another source changes the rod mid-gesture
    abacus.on_rod_changed(2, 4);
    abacus.handle_pointer_move(&PointerEvent::moved(1, 0.0, 80.0));
    // Start state had earth 0, so index 3 >= 0 commits SetEarthCount(4): no change
    assert_eq!(abacus.digits(), vec![0, 0, 4]);
}

#[test]
fn test_custom_thresholds() {
    let config = AbacusConfig::standard().with_gesture(GestureConfig::new(30.0, 35.0));
    let mut abacus = Abacus::new(config);
    down(&mut abacus, 1, 100.0, BeadId::heaven(0));
    abacus.handle_pointer_move(&PointerEvent::moved(1, 0.0, 125.0));
    assert_eq!(abacus.total(), 0);
    abacus.handle_pointer_up(&PointerEvent::up(1, 0.0, 125.0));
    // 25 px is under the 35 px tap threshold, so it counts as a tap
    assert_eq!(abacus.total(), 500);
}

// ============================================================================
// Tap classification
// ============================================================================

#[test]
fn test_release_far_from_origin_is_not_a_tap() {
    let mut abacus = standard();
    abacus.on_rod_changed(0, 5);
    down(&mut abacus, 1, 100.0, BeadId::heaven(0));
    abacus.handle_pointer_up(&PointerEvent::up(1, 0.0, 130.0));
    assert_eq!(abacus.total(), 500);
}

#[test]
fn test_tap_judged_by_release_position() {
    let mut abacus = standard();
    down(&mut abacus, 1, 100.0, BeadId::earth(2, 0));
    // Away from the beam: an inactive earth bead cannot commit this way
    abacus.handle_pointer_move(&PointerEvent::moved(1, 0.0, 130.0));
    abacus.handle_pointer_up(&PointerEvent::up(1, 0.0, 101.0));
    assert_eq!(abacus.total(), 1);
}

#[test]
fn test_tap_between_drag_and_tap_threshold() {
    let mut abacus = standard();
    down(&mut abacus, 1, 100.0, BeadId::earth(1, 0));
    // 11 px down: past the 10 px drag threshold in a direction that cannot
    // commit for an inactive bead, still under the 12 px tap threshold
    abacus.handle_pointer_move(&PointerEvent::moved(1, 0.0, 111.0));
    abacus.handle_pointer_up(&PointerEvent::up(1, 0.0, 111.0));
    assert_eq!(abacus.total(), 10);
}

#[test]
fn test_horizontal_axis_taps_ignore_vertical_motion() {
    let config = AbacusConfig::standard().with_input_axis(InputAxis::Horizontal);
    let mut abacus = Abacus::new(config);
    abacus.handle_pointer_down(&PointerEvent::down(1, 50.0, 50.0), BeadId::heaven(1));
    abacus.handle_pointer_move(&PointerEvent::moved(1, 52.0, 300.0));
    abacus.handle_pointer_up(&PointerEvent::up(1, 52.0, 300.0));
    assert_eq!(abacus.total(), 50);
}

// ============================================================================
// Contact routing
// ============================================================================

#[test]
fn test_unknown_contacts_are_ignored() {
    let mut abacus = standard();
    let events = record_events(&mut abacus);
    assert!(!abacus.handle_pointer_move(&PointerEvent::moved(42, 0.0, 999.0)));
    assert!(!abacus.handle_pointer_up(&PointerEvent::up(42, 0.0, 0.0)));
    assert!(!abacus.handle_pointer_cancel(&PointerEvent::cancel(42)));
    assert!(events.borrow().is_empty());
}

#[test]
fn test_second_contact_on_captured_bead_is_dropped() {
    let mut abacus = standard();
    down(&mut abacus, 1, 100.0, BeadId::heaven(0));
    assert!(!abacus.handle_pointer_down(&PointerEvent::down(2, 0.0, 100.0), BeadId::heaven(0)));
    // The intruder's moves do nothing
    abacus.handle_pointer_move(&PointerEvent::moved(2, 0.0, 200.0));
    assert_eq!(abacus.total(), 0);
    // The owner still works
    abacus.handle_pointer_move(&PointerEvent::moved(1, 0.0, 120.0));
    assert_eq!(abacus.total(), 500);
}

#[test]
fn test_lost_capture_discards_pending_tap() {
    let mut abacus = standard();
    down(&mut abacus, 1, 100.0, BeadId::heaven(0));
    let lost = PointerEvent::new(ContactId(1), Point::new(0.0, 100.0), PointerPhase::LostCapture);
    abacus.handle_pointer(&lost);
    abacus.handle_pointer(&PointerEvent::up(1, 0.0, 100.0));
    assert_eq!(abacus.total(), 0);
    assert_eq!(abacus.active_gestures(), 0);
}

#[test]
fn test_reset_discards_in_flight_gestures() {
    let mut abacus = standard();
    down(&mut abacus, 1, 100.0, BeadId::heaven(0));
    abacus.clear();
    abacus.handle_pointer_up(&PointerEvent::up(1, 0.0, 100.0));
    assert_eq!(abacus.total(), 0);
}

// ============================================================================
// Properties
// ============================================================================

fn bead_strategy() -> impl Strategy<Value = BeadId> {
    (0usize..3, 0u8..5).prop_map(|(rod, slot)| match slot {
        0 => BeadId::heaven(rod),
        n => BeadId::earth(rod, n - 1),
    })
}

proptest! {
    /// One gesture changes its rod at most once, whatever the path.
    #[test]
    fn prop_one_gesture_moves_at_most_once(
        start in 0u8..=9,
        bead in bead_strategy(),
        path in prop::collection::vec(-80.0f32..80.0, 0..12),
        release in -80.0f32..80.0,
    ) {
        let mut abacus = standard();
        abacus.on_rod_changed(bead.rod, start);
        let events = record_events(&mut abacus);

        abacus.handle_pointer_down(&PointerEvent::down(1, 0.0, 100.0), bead);
        for dy in path {
            abacus.handle_pointer_move(&PointerEvent::moved(1, 0.0, 100.0 + dy));
        }
        abacus.handle_pointer_up(&PointerEvent::up(1, 0.0, 100.0 + release));

        let moves = events
            .borrow()
            .iter()
            .filter(|e| matches!(e, AbacusEvent::BeadMoved { .. }))
            .count();
        prop_assert!(moves <= 1);
        prop_assert_eq!(abacus.active_gestures(), 0);
    }

    /// Whatever arrives, the total matches the rods and stays in range.
    #[test]
    fn prop_total_tracks_rods(
        steps in prop::collection::vec(
            (0u8..4, 0u64..3, bead_strategy(), -60.0f32..60.0),
            0..40,
        ),
    ) {
        let mut abacus = standard();
        let events = record_events(&mut abacus);

        for (phase, contact, bead, y) in steps {
            let y = 100.0 + y;
            match phase {
                0 => { abacus.handle_pointer_down(&PointerEvent::down(contact, 0.0, y), bead); }
                1 => { abacus.handle_pointer_move(&PointerEvent::moved(contact, 0.0, y)); }
                2 => { abacus.handle_pointer_up(&PointerEvent::up(contact, 0.0, y)); }
                _ => { abacus.handle_pointer_cancel(&PointerEvent::cancel(contact)); }
            }
        }

        let expected = abacus
            .digits()
            .iter()
            .fold(0u64, |acc, &d| acc * 10 + u64::from(d));
        prop_assert_eq!(abacus.total(), expected);
        prop_assert!(abacus.total() <= 999);
        prop_assert!(abacus.digits().iter().all(|&d| d <= 9));

        let last_value = events.borrow().iter().rev().find_map(|e| match e {
            AbacusEvent::ValueChanged { total } => Some(*total),
            _ => None,
        });
        prop_assert_eq!(last_value.unwrap_or(0), abacus.total());
    }
}
