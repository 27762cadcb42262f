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

//! Grid size, glyphs, fleet composition and the options that control how a board is
//! built.

use crate::board::CompositionError;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 10;

/// Glyph for a ship segment which has not been hit.
pub const SHIP_GLYPH: char = '\u{25A1}';
/// Glyph for a ship segment which has been hit.
pub const HIT_GLYPH: char = '*';
/// Glyph for any segment of a ship marked sunk.
pub const SUNK_GLYPH: char = 'x';
/// Glyph for a cell not occupied by any ship.
pub const WATER_GLYPH: char = '~';

/// Demo fleet layout as `(start, end)` pairs of `(row, column)`. Valid under the
/// default options.
pub const SAMPLE_FLEET: [((usize, usize), (usize, usize)); 10] = [
    ((0, 0), (0, 3)),
    ((0, 5), (0, 6)),
    ((0, 8), (0, 9)),
    ((2, 0), (4, 0)),
    ((2, 4), (2, 6)),
    ((2, 8), (2, 9)),
    ((9, 9), (9, 9)),
    ((7, 7), (7, 7)),
    ((7, 9), (7, 9)),
    ((9, 7), (9, 7)),
];

/// Rule used to turn a ship's two endpoints into the cells it occupies.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Geometry {
    /// Compatible placement. A ship whose start row is above its end row is vertical
    /// and sits in column `end.column + 1`. A ship whose start column is left of its
    /// end column is horizontal along `start.row`. Anything else is the single cell
    /// at `start`.
    Legacy,
    /// Straight placement. Cells run between the endpoints along the shared row or
    /// column, in either order.
    Straight,
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry::Legacy
    }
}

/// Options controlling how a [`Board`][crate::Board] is built and how it reacts to
/// shots.
///
/// The default is fully backward compatible: legacy geometry, ships are
/// never marked sunk by the board, and overlapping ships silently replace each other
/// in the field.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BoardOptions {
    /// How ship cells are derived from endpoints.
    pub geometry: Geometry,
    /// Mark a ship sunk when a shot through the board sinks it.
    pub propagate_sunk: bool,
    /// Fail construction when two ships claim the same cell.
    pub reject_overlap: bool,
}

impl BoardOptions {
    /// Backward-compatible options: every placement quirk is kept.
    pub fn legacy() -> Self {
        Self {
            geometry: Geometry::Legacy,
            propagate_sunk: false,
            reject_overlap: false,
        }
    }

    /// Options for a board with straight placement, sunk tracking and overlap checks.
    pub fn corrected() -> Self {
        Self {
            geometry: Geometry::Straight,
            propagate_sunk: true,
            reject_overlap: true,
        }
    }
}

impl Default for BoardOptions {
    fn default() -> Self {
        Self::legacy()
    }
}

/// Required fleet: the total number of ships and how many ships of each length.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FleetComposition {
    /// Total number of ships.
    total: usize,
    /// `(length, count)` pairs, checked in this order.
    classes: Vec<(usize, usize)>,
}

impl FleetComposition {
    /// Construct a composition requiring `total` ships, with `count` ships of each
    /// `(length, count)` class.
    pub fn new<I: IntoIterator<Item = (usize, usize)>>(total: usize, classes: I) -> Self {
        Self {
            total,
            classes: classes.into_iter().collect(),
        }
    }

    /// Total number of ships required.
    pub fn total(&self) -> usize {
        self.total
    }

    /// The required `(length, count)` classes, in the order they are checked.
    pub fn classes(&self) -> &[(usize, usize)] {
        &self.classes
    }

    /// Check a fleet given as the length of each ship. The total is checked first,
    /// then each class in order. Only the first failure is reported.
    pub fn check<I: IntoIterator<Item = usize>>(&self, lengths: I) -> Result<(), CompositionError> {
        let lengths: Vec<usize> = lengths.into_iter().collect();
        if lengths.len() != self.total {
            return Err(CompositionError::ShipCount {
                expected: self.total,
                found: lengths.len(),
            });
        }
        for &(len, expected) in self.classes.iter() {
            let found = lengths.iter().filter(|&&l| l == len).count();
            if found != expected {
                return Err(CompositionError::ClassCount {
                    len,
                    expected,
                    found,
                });
            }
        }
        Ok(())
    }
}

impl Default for FleetComposition {
    /// The standard fleet: four 1-segment, three 2-segment, two 3-segment and one
    /// 4-segment ship.
    fn default() -> Self {
        Self::new(10, vec![(1, 4), (2, 3), (3, 2), (4, 1)])
    }
}
