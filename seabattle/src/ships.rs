// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Ships and the segments they are made of.
use crate::{board::Coordinate, board::FireOutcome, config::Geometry};

pub use self::{linear::derive_segments, segment::Segment};

mod linear;
mod segment;

/// A ship: an ordered run of [`Segment`]s derived from two endpoints, plus a sunk flag
/// that is only ever set through [`Ship::mark_sunk`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    /// Cells occupied by this ship, in derivation order.
    segments: Vec<Segment>,

    /// Whether the ship has been marked sunk.
    sunk: bool,
}

impl Ship {
    /// Construct a ship between `start` and `end` using [`Geometry::Legacy`].
    pub fn new(start: Coordinate, end: Coordinate) -> Self {
        Self::with_geometry(start, end, Geometry::Legacy)
    }

    /// Construct a ship between `start` and `end` using the given [`Geometry`].
    pub fn with_geometry(start: Coordinate, end: Coordinate, geometry: Geometry) -> Self {
        Self {
            segments: derive_segments(start, end, geometry),
            sunk: false,
        }
    }

    /// Number of segments, which determines the ship's class.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Get the segments of this ship.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Get an iterator over the coordinates of this ship.
    pub fn coords(&self) -> impl '_ + Iterator<Item = Coordinate> {
        self.segments.iter().map(Segment::coord)
    }

    /// Find the segment at exactly `(row, column)`.
    pub fn find_segment(&self, row: usize, column: usize) -> Option<&Segment> {
        let coord = Coordinate::new(row, column);
        self.segments.iter().find(|segment| segment.coord() == coord)
    }

    fn find_segment_mut(&mut self, row: usize, column: usize) -> Option<&mut Segment> {
        let coord = Coordinate::new(row, column);
        self.segments
            .iter_mut()
            .find(|segment| segment.coord() == coord)
    }

    /// Fire at `(row, column)`. Hitting a live segment kills it and reports `Sunk!` if
    /// it was the last one, `Hit!` otherwise. Anything else, including a segment that
    /// was already hit, is a `Miss!`. Does not change the sunk flag.
    pub fn fire(&mut self, row: usize, column: usize) -> FireOutcome {
        match self.find_segment_mut(row, column) {
            Some(segment) if segment.is_alive() => segment.hit(),
            _ => return FireOutcome::Miss,
        }
        if self.all_hit() {
            FireOutcome::Sunk
        } else {
            FireOutcome::Hit
        }
    }

    /// Returns true if every segment has been hit.
    pub fn all_hit(&self) -> bool {
        self.segments.iter().all(|segment| !segment.is_alive())
    }

    /// Whether this ship has been marked sunk.
    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    /// Mark this ship sunk. The flag never reverts.
    pub fn mark_sunk(&mut self) {
        self.sunk = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ship(start: (usize, usize), end: (usize, usize)) -> Ship {
        Ship::new(start.into(), end.into())
    }

    #[test]
    fn find_segment_matches_exact_cell() {
        let ship = ship((4, 2), (4, 4));
        assert_eq!(ship.find_segment(4, 3).map(Segment::coord), Some(Coordinate::new(4, 3)));
        assert!(ship.find_segment(3, 4).is_none());
        assert!(ship.find_segment(4, 5).is_none());
    }

    #[test]
    fn fire_hits_then_sinks() {
        let mut ship = ship((1, 1), (1, 2));
        assert_eq!(ship.fire(1, 1), FireOutcome::Hit);
        assert!(!ship.all_hit());
        assert_eq!(ship.fire(1, 2), FireOutcome::Sunk);
        assert!(ship.all_hit());
        assert!(!ship.is_sunk());
    }

    #[test]
    fn refire_is_a_miss() {
        let mut ship = ship((1, 1), (1, 2));
        assert_eq!(ship.fire(1, 1), FireOutcome::Hit);
        assert_eq!(ship.fire(1, 1), FireOutcome::Miss);
        assert_eq!(ship.fire(5, 5), FireOutcome::Miss);
        assert!(ship.find_segment(1, 2).unwrap().is_alive());
    }

    #[test]
    fn mark_sunk_sets_flag() {
        let mut ship = ship((0, 0), (0, 0));
        assert!(!ship.is_sunk());
        ship.mark_sunk();
        assert!(ship.is_sunk());
    }
}
