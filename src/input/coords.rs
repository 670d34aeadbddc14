//! Coordinate handling for pointer input.
//!
//! Two separate concerns live here:
//! - [`InputAxis`] picks the screen coordinate that drives drag decisions.
//! - [`ScreenTransform`] maps screen points into abacus-local space for hit testing.
//!
//! In forced-landscape mode the abacus is drawn rotated a quarter turn, so the
//! visual up/down axis of the rods lies along the physical x axis. Both types
//! are chosen explicitly by the host; nothing is inferred from layout.

use crate::types::Point;
use serde::{Deserialize, Serialize};

/// The screen axis used to measure drag distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputAxis {
    /// Portrait layout: screen y, growing downward
    #[default]
    Vertical,
    /// Rotated layout: screen x, growing rightward
    Horizontal,
}

impl InputAxis {
    pub fn from_horizontal_flag(horizontal: bool) -> Self {
        if horizontal { Self::Horizontal } else { Self::Vertical }
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Horizontal)
    }

    /// The decision coordinate of a screen point.
    #[inline]
    pub fn pick(self, screen: Point) -> f32 {
        match self {
            Self::Vertical => screen.y,
            Self::Horizontal => screen.x,
        }
    }
}

/// How the abacus is rotated on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rotation {
    #[default]
    None,
    /// Local +y points along screen +x; local +x points along screen -y
    QuarterTurn,
}

impl Rotation {
    /// The rotation that matches a decision axis.
    pub fn for_axis(axis: InputAxis) -> Self {
        match axis {
            InputAxis::Vertical => Self::None,
            InputAxis::Horizontal => Self::QuarterTurn,
        }
    }
}

/// Placement of the abacus on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenTransform {
    /// Screen position of the abacus-local origin
    pub origin: Point,
    /// Screen pixels per local pixel
    pub scale: f32,
    pub rotation: Rotation,
}

impl Default for ScreenTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl ScreenTransform {
    pub const fn identity() -> Self {
        Self {
            origin: Point::new(0.0, 0.0),
            scale: 1.0,
            rotation: Rotation::None,
        }
    }

    pub fn new(origin: Point, scale: f32, rotation: Rotation) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
        Self {
            origin,
            scale,
            rotation,
        }
    }

    /// Convert a screen position to abacus-local coordinates.
    #[inline]
    pub fn screen_to_local(&self, screen: Point) -> Point {
        let dx = (screen.x - self.origin.x) / self.scale;
        let dy = (screen.y - self.origin.y) / self.scale;
        match self.rotation {
            Rotation::None => Point::new(dx, dy),
            Rotation::QuarterTurn => Point::new(-dy, dx),
        }
    }

    /// Convert an abacus-local position to screen coordinates.
    #[inline]
    pub fn local_to_screen(&self, local: Point) -> Point {
        let (dx, dy) = match self.rotation {
            Rotation::None => (local.x, local.y),
            Rotation::QuarterTurn => (local.y, -local.x),
        };
        Point::new(
            self.origin.x + dx * self.scale,
            self.origin.y + dy * self.scale,
        )
    }
}
