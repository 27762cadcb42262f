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

//! The board: the fleet, the field index over it, and shot resolution.

use std::fmt;

use log::trace;

use crate::{
    config::{
        BoardOptions, FleetComposition, BOARD_SIZE, HIT_GLYPH, SHIP_GLYPH, SUNK_GLYPH,
        WATER_GLYPH,
    },
    ships::Ship,
};

use self::field::Field;
pub use self::{
    coordinate::Coordinate,
    errors::{CompositionError, FleetError, OverlapError},
    setup::BoardSetup,
};

mod coordinate;
mod errors;
mod field;
pub mod setup;

/// Result of a shot at the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FireOutcome {
    /// The shot hit nothing, or hit a segment that was already hit.
    Miss,
    /// The shot hit a live segment of a ship that still has other live segments.
    Hit,
    /// The shot hit the last live segment of a ship.
    Sunk,
}

impl FireOutcome {
    /// The outcome as reported to the player: `"Miss!"`, `"Hit!"` or `"Sunk!"`.
    pub fn as_str(self) -> &'static str {
        match self {
            FireOutcome::Miss => "Miss!",
            FireOutcome::Hit => "Hit!",
            FireOutcome::Sunk => "Sunk!",
        }
    }
}

impl fmt::Display for FireOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// What a single grid cell shows.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Cell {
    /// No ship occupies the cell.
    Water,
    /// A live ship segment.
    Ship,
    /// A ship segment that has been hit.
    Hit,
    /// A segment of a ship marked sunk.
    Sunk,
}

impl Cell {
    /// Glyph used for this cell in the rendered field.
    pub fn glyph(self) -> char {
        match self {
            Cell::Water => WATER_GLYPH,
            Cell::Ship => SHIP_GLYPH,
            Cell::Hit => HIT_GLYPH,
            Cell::Sunk => SUNK_GLYPH,
        }
    }
}

/// A single player's board: the fleet and the index of the cells it occupies.
#[derive(Debug)]
pub struct Board {
    /// Ships in the order their placements were given.
    ships: Vec<Ship>,

    /// Occupied cells mapped to indexes into `ships`. Built once during setup.
    field: Field,

    /// Options the board was built with.
    options: BoardOptions,

    /// Fleet the board was validated against.
    composition: FleetComposition,
}

impl Board {
    /// Build a board from `(start, end)` pairs with the default options, failing if
    /// the fleet is not the standard fleet. See [`BoardSetup`] for other options.
    pub fn new<I, C>(placements: I) -> Result<Self, FleetError>
    where
        I: IntoIterator<Item = (C, C)>,
        C: Into<Coordinate>,
    {
        BoardSetup::new(placements).start()
    }

    /// Get the [`BoardOptions`] this board was built with.
    pub fn options(&self) -> &BoardOptions {
        &self.options
    }

    /// Get the fleet, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Get the ship the field holds for the given coordinate, if any.
    pub fn ship_at<C: Into<Coordinate>>(&self, coord: C) -> Option<&Ship> {
        self.field.get(coord.into()).map(|index| &self.ships[index])
    }

    /// Returns true if every segment of every ship has been hit.
    pub fn defeated(&self) -> bool {
        self.ships.iter().all(|ship| ship.all_hit())
    }

    /// Check the fleet against the composition the board was built with.
    pub fn validate_fleet(&self) -> Result<(), CompositionError> {
        self.composition.check(self.ships.iter().map(Ship::len))
    }

    /// Fire at the given location.
    ///
    /// A location not in the field is a miss and touches no ship. Otherwise the shot
    /// goes to the ship holding that cell. Unless
    /// [`propagate_sunk`][BoardOptions::propagate_sunk] is set, a `Sunk!` result does
    /// not mark the ship sunk, so [`Ship::is_sunk`] stays false.
    pub fn fire<C: Into<Coordinate>>(&mut self, location: C) -> FireOutcome {
        let location = location.into();
        let index = match self.field.get(location) {
            Some(index) => index,
            None => {
                trace!("shot at {} found open water", location);
                return FireOutcome::Miss;
            }
        };
        let ship = &mut self.ships[index];
        let outcome = ship.fire(location.row, location.column);
        if outcome == FireOutcome::Sunk && self.options.propagate_sunk {
            ship.mark_sunk();
        }
        trace!("shot at {} on ship {}: {}", location, index, outcome);
        outcome
    }

    /// What the given cell currently shows.
    pub fn cell<C: Into<Coordinate>>(&self, coord: C) -> Cell {
        let coord = coord.into();
        let ship = match self.field.get(coord) {
            Some(index) => &self.ships[index],
            None => return Cell::Water,
        };
        if ship.is_sunk() {
            return Cell::Sunk;
        }
        match ship.find_segment(coord.row, coord.column) {
            Some(segment) if segment.is_alive() => Cell::Ship,
            Some(_) => Cell::Hit,
            None => Cell::Water,
        }
    }

    /// Render the grid as 10 lines of 10 space-separated glyphs. Field cells outside
    /// the grid are not drawn.
    pub fn render_field(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            if row > 0 {
                writeln!(f)?;
            }
            for column in 0..BOARD_SIZE {
                if column > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.cell((row, column)).glyph())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::SAMPLE_FLEET;

    fn sample() -> Board {
        Board::new(SAMPLE_FLEET.iter().copied()).unwrap()
    }

    #[test]
    fn outcome_strings() {
        assert_eq!(FireOutcome::Miss.to_string(), "Miss!");
        assert_eq!(FireOutcome::Hit.to_string(), "Hit!");
        assert_eq!(FireOutcome::Sunk.as_str(), "Sunk!");
    }

    #[test]
    fn miss_touches_no_ship() {
        let mut board = sample();
        assert_eq!(board.fire((1, 1)), FireOutcome::Miss);
        assert!(board.ships().iter().all(|ship| ship.segments().iter().all(|s| s.is_alive())));
    }

    #[test]
    fn cells_track_hits() {
        let mut board = sample();
        assert_eq!(board.cell((0, 0)), Cell::Ship);
        assert_eq!(board.fire((0, 0)), FireOutcome::Hit);
        assert_eq!(board.cell((0, 0)), Cell::Hit);
        assert_eq!(board.cell((1, 0)), Cell::Water);
    }

    #[test]
    fn sunk_is_not_propagated_by_default() {
        let mut board = sample();
        assert_eq!(board.fire((7, 7)), FireOutcome::Sunk);
        assert!(!board.ship_at((7, 7)).unwrap().is_sunk());
        assert_eq!(board.cell((7, 7)), Cell::Hit);
    }

    #[test]
    fn sunk_propagates_when_enabled() {
        let options = BoardOptions {
            propagate_sunk: true,
            ..BoardOptions::legacy()
        };
        let mut board = BoardSetup::new(SAMPLE_FLEET.iter().copied())
            .options(options)
            .start()
            .unwrap();
        assert_eq!(board.fire((7, 7)), FireOutcome::Sunk);
        assert!(board.ship_at((7, 7)).unwrap().is_sunk());
        assert_eq!(board.cell((7, 7)), Cell::Sunk);
    }
}
