//! Pointer input handling for the abacus.
//!
//! Every contact drives its own gesture on one bead, so several beads on
//! different rods can move at once. The handlers are `impl Abacus` blocks
//! split by phase:
//!
//! - `state` - per-bead gesture records and the contact routing table
//! - `pointer_down` - bead capture (direct or through hit testing)
//! - `pointer_move` - drag threshold and single commit per gesture
//! - `pointer_up` - tap classification, cancel and phase dispatch
//! - `coords` - decision axis and screen transform

pub mod coords;
mod pointer_down;
mod pointer_move;
mod pointer_up;
mod state;

pub use state::{ActiveGesture, GestureTracker};
