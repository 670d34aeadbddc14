//! Spatial Index Module
//!
//! R-tree over bead rectangles for pointer hit testing. Bead rectangles move
//! whenever a rod changes, so entries are replaced per bead rather than rebuilt.

use crate::types::BeadId;
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A bead's rectangle in abacus-local coordinates.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub bead: BeadId,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(bead: BeadId, position: (f32, f32), size: (f32, f32)) -> Self {
        Self {
            bead,
            min_x: position.0,
            min_y: position.1,
            max_x: position.0 + size.0,
            max_y: position.1 + size.1,
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.bead == other.bead
    }
}

/// Spatial index over bead rectangles.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<BeadId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, bead: BeadId, position: (f32, f32), size: (f32, f32)) {
        if let Some(old_entry) = self.entries.remove(&bead) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(bead, position, size);
        self.tree.insert(entry);
        self.entries.insert(bead, entry);
    }

    pub fn get(&self, bead: BeadId) -> Option<&SpatialEntry> {
        self.entries.get(&bead)
    }

    /// All beads whose rectangle contains the point, ordered by bead key.
    pub fn query_point(&self, x: f32, y: f32) -> Vec<BeadId> {
        let point_envelope = AABB::from_point([x, y]);

        let mut hits: Vec<BeadId> = self
            .tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .map(|entry| entry.bead)
            .collect();
        hits.sort_by_key(|bead| bead.to_key());
        hits
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rebuild<I>(&mut self, beads: I)
    where
        I: Iterator<Item = (BeadId, (f32, f32), (f32, f32))>,
    {
        let entries: Vec<SpatialEntry> = beads
            .map(|(bead, pos, size)| SpatialEntry::new(bead, pos, size))
            .collect();

        self.entries = entries.iter().map(|e| (e.bead, *e)).collect();
        self.tree = RTree::bulk_load(entries);
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
