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

use crate::board::Coordinate;

/// One grid cell occupied by a ship.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Segment {
    coord: Coordinate,
    alive: bool,
}

impl Segment {
    /// Construct a live segment at `coord`.
    pub fn new(coord: Coordinate) -> Self {
        Self { coord, alive: true }
    }

    /// The cell this segment occupies.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    pub fn row(&self) -> usize {
        self.coord.row
    }

    pub fn column(&self) -> usize {
        self.coord.column
    }

    /// Whether this segment has not been hit yet.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Record a hit. A hit segment stays hit.
    pub(super) fn hit(&mut self) {
        self.alive = false;
    }
}
