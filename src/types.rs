//! Shared value types for pointer input and bead addressing.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Geometry
// ============================================================================

/// A point in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Offset this point by the given deltas.
    #[inline]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

// ============================================================================
// Pointer Events
// ============================================================================

/// Opaque identifier binding the events of one physical contact together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub u64);

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "contact#{}", self.0)
    }
}

/// Lifecycle phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
    /// The host released pointer capture for this contact
    LostCapture,
}

/// A single pointer event delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub contact: ContactId,
    pub position: Point,
    pub phase: PointerPhase,
}

impl PointerEvent {
    pub fn new(contact: ContactId, position: Point, phase: PointerPhase) -> Self {
        Self {
            contact,
            position,
            phase,
        }
    }

    pub fn down(contact: u64, x: f32, y: f32) -> Self {
        Self::new(ContactId(contact), Point::new(x, y), PointerPhase::Down)
    }

    pub fn moved(contact: u64, x: f32, y: f32) -> Self {
        Self::new(ContactId(contact), Point::new(x, y), PointerPhase::Move)
    }

    pub fn up(contact: u64, x: f32, y: f32) -> Self {
        Self::new(ContactId(contact), Point::new(x, y), PointerPhase::Up)
    }

    pub fn cancel(contact: u64) -> Self {
        Self::new(ContactId(contact), Point::default(), PointerPhase::Cancel)
    }
}

// ============================================================================
// Bead Addressing
// ============================================================================

/// Which bead on a rod a gesture targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeadKind {
    /// The single bead worth five, above the beam
    Heaven,
    /// An earth bead; index 0 is nearest the beam
    Earth(u8),
}

/// A bead on a specific rod. Rod 0 is the most significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BeadId {
    pub rod: usize,
    pub bead: BeadKind,
}

impl BeadId {
    pub const fn heaven(rod: usize) -> Self {
        Self {
            rod,
            bead: BeadKind::Heaven,
        }
    }

    pub const fn earth(rod: usize, index: u8) -> Self {
        Self {
            rod,
            bead: BeadKind::Earth(index),
        }
    }

    /// Pack into a single key for the spatial index.
    pub fn to_key(self) -> u64 {
        let slot = match self.bead {
            BeadKind::Heaven => 0,
            BeadKind::Earth(index) => 1 + index as u64,
        };
        (self.rod as u64) << 8 | slot
    }

    /// Inverse of [`BeadId::to_key`].
    pub fn from_key(key: u64) -> Self {
        let rod = (key >> 8) as usize;
        match key & 0xff {
            0 => Self::heaven(rod),
            slot => Self::earth(rod, (slot - 1) as u8),
        }
    }
}
