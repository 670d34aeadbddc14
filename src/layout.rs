//! Bead geometry and pointer hit testing.
//!
//! Geometry is computed in abacus-local pixels with rod 0 on the left and the
//! heaven deck on top. Active beads sit [`BEAD_TRAVEL`] pixels closer to the
//! beam. The host places the abacus on screen through a [`ScreenTransform`].

use crate::constants::{
    BEAD_HEIGHT, BEAD_TRAVEL, BEAD_WIDTH, BEAM_HEIGHT, EARTH_BEAD_GAP, EARTH_BEADS,
    EARTH_DECK_HEIGHT, EARTH_DECK_PADDING, HEAVEN_DECK_HEIGHT, ROD_GAP, ROD_WIDTH,
};
use crate::input::coords::{InputAxis, Rotation, ScreenTransform};
use crate::rod::Rod;
use crate::spatial_index::SpatialIndex;
use crate::types::{BeadId, BeadKind, Point};

/// An axis-aligned rectangle in abacus-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeadRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BeadRect {
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Left edge of a rod column.
#[inline]
fn column_x(rod: usize) -> f32 {
    rod as f32 * (ROD_WIDTH + ROD_GAP)
}

/// Top of the earth deck.
#[inline]
fn earth_deck_top() -> f32 {
    HEAVEN_DECK_HEIGHT + BEAM_HEIGHT
}

/// Rectangle of a bead given the rod it sits on.
pub fn bead_rect(bead: BeadId, rod: &Rod) -> BeadRect {
    let x = column_x(bead.rod) + (ROD_WIDTH - BEAD_WIDTH) / 2.0;
    let y = match bead.bead {
        BeadKind::Heaven => {
            if rod.heaven_active() { BEAD_TRAVEL } else { 0.0 }
        }
        BeadKind::Earth(index) => {
            // Beads stack against the bottom of the deck; index 0 is the topmost
            let from_bottom = (EARTH_BEADS - 1 - index.min(EARTH_BEADS - 1)) as f32;
            let rest = earth_deck_top() + EARTH_DECK_HEIGHT
                - EARTH_DECK_PADDING
                - BEAD_HEIGHT
                - from_bottom * (BEAD_HEIGHT + EARTH_BEAD_GAP);
            if rod.earth_bead_active(index) { rest - BEAD_TRAVEL } else { rest }
        }
    };
    BeadRect {
        x,
        y,
        width: BEAD_WIDTH,
        height: BEAD_HEIGHT,
    }
}

/// Every bead on one rod.
fn rod_beads(rod: usize) -> impl Iterator<Item = BeadId> {
    std::iter::once(BeadId::heaven(rod)).chain((0..EARTH_BEADS).map(move |i| BeadId::earth(rod, i)))
}

/// Hit-testing state for one abacus.
pub struct AbacusLayout {
    transform: ScreenTransform,
    index: SpatialIndex,
    digit_count: usize,
}

impl AbacusLayout {
    pub fn new(rods: &[Rod], transform: ScreenTransform) -> Self {
        let mut layout = Self {
            transform,
            index: SpatialIndex::new(),
            digit_count: 0,
        };
        layout.rebuild(rods);
        layout
    }

    pub fn transform(&self) -> ScreenTransform {
        self.transform
    }

    pub fn set_transform(&mut self, transform: ScreenTransform) {
        self.transform = transform;
    }

    /// Local size of the whole abacus (width, height).
    pub fn size(&self) -> (f32, f32) {
        let width = if self.digit_count == 0 {
            0.0
        } else {
            column_x(self.digit_count - 1) + ROD_WIDTH
        };
        (width, earth_deck_top() + EARTH_DECK_HEIGHT)
    }

    /// Unscaled placement with the frame's top-left corner at the screen
    /// origin, turned a quarter for the horizontal axis so every bead lands
    /// on non-negative screen coordinates.
    pub fn default_transform(&self, axis: InputAxis) -> ScreenTransform {
        match Rotation::for_axis(axis) {
            Rotation::None => ScreenTransform::identity(),
            Rotation::QuarterTurn => {
                let (width, _) = self.size();
                ScreenTransform::new(Point::new(0.0, width), 1.0, Rotation::QuarterTurn)
            }
        }
    }

    /// Recompute every bead rectangle.
    pub fn rebuild(&mut self, rods: &[Rod]) {
        self.digit_count = rods.len();
        let beads = rods.iter().enumerate().flat_map(|(index, rod)| {
            rod_beads(index).map(move |bead| {
                let rect = bead_rect(bead, rod);
                (bead, (rect.x, rect.y), (rect.width, rect.height))
            })
        });
        self.index.rebuild(beads);
    }

    /// Move the beads of a single rod after its digit changed.
    pub fn update_rod(&mut self, index: usize, rod: &Rod) {
        for bead in rod_beads(index) {
            let rect = bead_rect(bead, rod);
            self.index
                .insert(bead, (rect.x, rect.y), (rect.width, rect.height));
        }
    }

    /// Current rectangle of a bead in local pixels.
    pub fn bounds(&self, bead: BeadId) -> Option<BeadRect> {
        self.index.get(bead).map(|entry| BeadRect {
            x: entry.min_x,
            y: entry.min_y,
            width: entry.max_x - entry.min_x,
            height: entry.max_y - entry.min_y,
        })
    }

    /// Screen position of a bead's center, for hosts and tests.
    pub fn bead_center_on_screen(&self, bead: BeadId) -> Option<Point> {
        self.bounds(bead)
            .map(|rect| self.transform.local_to_screen(rect.center()))
    }

    /// The bead under a screen point, if any.
    pub fn hit_test(&self, screen: Point) -> Option<BeadId> {
        let local = self.transform.screen_to_local(screen);
        self.index.query_point(local.x, local.y).into_iter().next()
    }
}
