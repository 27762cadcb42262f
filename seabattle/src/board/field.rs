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

//! Index from grid coordinates to the ship that occupies them.

use std::{borrow::Borrow, collections::HashMap};

use crate::board::Coordinate;

/// Mapping of occupied cells to the index of the owning ship in the fleet.
#[derive(Debug, Default)]
pub(super) struct Field {
    cells: HashMap<Coordinate, usize>,
}

impl Field {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Record `ship` as the occupant of `coord`. Returns the previous occupant, which
    /// is replaced.
    pub(super) fn claim(&mut self, coord: Coordinate, ship: usize) -> Option<usize> {
        self.cells.insert(coord, ship)
    }

    /// Get the index of the ship occupying the given [`Coordinate`], if any.
    pub(super) fn get<B: Borrow<Coordinate>>(&self, coord: B) -> Option<usize> {
        self.cells.get(coord.borrow()).copied()
    }

    /// Number of occupied cells.
    pub(super) fn len(&self) -> usize {
        self.cells.len()
    }
}
