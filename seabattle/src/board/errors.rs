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

//! Errors returned while building a [`Board`][crate::Board].

use thiserror::Error;

use crate::board::Coordinate;

/// Reason why a fleet does not match the required composition.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CompositionError {
    /// The fleet has the wrong number of ships.
    #[error("wrong ship count: expected {expected}, found {found}")]
    ShipCount { expected: usize, found: usize },
    /// The fleet has the wrong number of ships of length `len`.
    #[error("wrong count of {len}-segment ships: expected {expected}, found {found}")]
    ClassCount {
        len: usize,
        expected: usize,
        found: usize,
    },
}

/// Error caused by two ships claiming the same cell.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("cell {coord} claimed by ship {ship} is already occupied by ship {occupant}")]
pub struct OverlapError {
    /// The contested cell.
    coord: Coordinate,
    /// Index of the ship which claimed the cell first.
    occupant: usize,
    /// Index of the ship which tried to claim it again.
    ship: usize,
}

impl OverlapError {
    /// Construct an [`OverlapError`] for a cell claimed by `ship` while held by
    /// `occupant`.
    pub(super) fn new(coord: Coordinate, occupant: usize, ship: usize) -> Self {
        Self {
            coord,
            occupant,
            ship,
        }
    }

    /// Get the contested cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// Index in the fleet of the ship already occupying the cell.
    pub fn occupant(&self) -> usize {
        self.occupant
    }

    /// Index in the fleet of the ship whose claim was rejected.
    pub fn ship(&self) -> usize {
        self.ship
    }
}

/// Error returned when a board could not be built from the given placements.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum FleetError {
    /// The fleet does not match the required composition.
    #[error("invalid fleet: {0}")]
    Composition(#[from] CompositionError),
    /// Two ships were placed on the same cell.
    #[error("invalid placement: {0}")]
    Overlap(#[from] OverlapError),
}

impl FleetError {
    /// Get the composition error, if that is why the board was rejected.
    pub fn composition(&self) -> Option<&CompositionError> {
        match self {
            FleetError::Composition(ref err) => Some(err),
            FleetError::Overlap(_) => None,
        }
    }
}
