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

//! Builds a [`Board`] from ship endpoints.
use log::{debug, info, warn};

use crate::{
    board::{field::Field, Board, Coordinate, FleetError, OverlapError},
    config::{BoardOptions, FleetComposition},
    ships::Ship,
};

/// Builder for a [`Board`]. Collects the ship placements and the options to build
/// with; the board itself is only produced by [`BoardSetup::start`].
#[derive(Debug, Clone)]
pub struct BoardSetup {
    /// `(start, end)` endpoints of each ship, in fleet order.
    placements: Vec<(Coordinate, Coordinate)>,

    /// Placement and firing options.
    options: BoardOptions,

    /// Fleet the placements are validated against.
    composition: FleetComposition,
}

impl BoardSetup {
    /// Begin setup with the given `(start, end)` pairs, using the default options and
    /// the standard fleet composition.
    pub fn new<I, C>(placements: I) -> Self
    where
        I: IntoIterator<Item = (C, C)>,
        C: Into<Coordinate>,
    {
        Self {
            placements: placements
                .into_iter()
                .map(|(start, end)| (start.into(), end.into()))
                .collect(),
            options: BoardOptions::default(),
            composition: FleetComposition::default(),
        }
    }

    /// Use the given [`BoardOptions`].
    pub fn options(mut self, options: BoardOptions) -> Self {
        self.options = options;
        self
    }

    /// Validate against the given [`FleetComposition`] instead of the standard fleet.
    pub fn composition(mut self, composition: FleetComposition) -> Self {
        self.composition = composition;
        self
    }

    /// Get the placements this setup will build.
    pub fn placements(&self) -> &[(Coordinate, Coordinate)] {
        &self.placements
    }

    /// Build the board. Derives every ship, fills in the field and then validates the
    /// fleet. No board is returned if any step fails.
    pub fn start(self) -> Result<Board, FleetError> {
        let geometry = self.options.geometry;
        let ships: Vec<Ship> = self
            .placements
            .iter()
            .map(|&(start, end)| Ship::with_geometry(start, end, geometry))
            .collect();
        let field = populate_field(&ships, self.options.reject_overlap)?;
        let board = Board {
            ships,
            field,
            options: self.options,
            composition: self.composition,
        };
        board.validate_fleet()?;
        info!(
            "built board with {} ships over {} cells",
            board.ships.len(),
            board.field.len()
        );
        Ok(board)
    }
}

/// Index every segment of every ship by its coordinate. With `reject_overlap` unset a
/// later ship replaces an earlier one on a shared cell.
fn populate_field(ships: &[Ship], reject_overlap: bool) -> Result<Field, OverlapError> {
    let mut field = Field::new();
    for (index, ship) in ships.iter().enumerate() {
        for coord in ship.coords() {
            if let Some(occupant) = field.claim(coord, index) {
                if reject_overlap {
                    return Err(OverlapError::new(coord, occupant, index));
                }
                warn!(
                    "ship {} replaces ship {} in the field at {}",
                    index, occupant, coord
                );
            }
        }
    }
    debug!("field populated with {} cells", field.len());
    Ok(field)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{board::CompositionError, config::SAMPLE_FLEET};

    #[test]
    fn overlap_is_kept_by_default() {
        let ships = vec![
            Ship::new((0, 0).into(), (0, 2).into()),
            Ship::new((0, 2).into(), (0, 2).into()),
        ];
        let field = populate_field(&ships, false).unwrap();
        assert_eq!(field.len(), 3);
        assert_eq!(field.get(Coordinate::new(0, 2)), Some(1));
        assert_eq!(field.get(Coordinate::new(0, 1)), Some(0));
    }

    #[test]
    fn overlap_rejected_on_request() {
        let ships = vec![
            Ship::new((0, 0).into(), (0, 2).into()),
            Ship::new((0, 2).into(), (0, 2).into()),
        ];
        let err = populate_field(&ships, true).unwrap_err();
        assert_eq!(err.coord(), Coordinate::new(0, 2));
        assert_eq!(err.occupant(), 0);
        assert_eq!(err.ship(), 1);
    }

    #[test]
    fn setup_keeps_placements_in_order() {
        let setup = BoardSetup::new(SAMPLE_FLEET.iter().copied());
        assert_eq!(setup.placements().len(), 10);
        assert_eq!(
            setup.placements()[3],
            (Coordinate::new(2, 0), Coordinate::new(4, 0))
        );
    }

    #[test]
    fn composition_checked_after_field() {
        let err = BoardSetup::new(SAMPLE_FLEET.iter().copied().take(9))
            .start()
            .unwrap_err();
        assert_eq!(
            err,
            FleetError::Composition(CompositionError::ShipCount {
                expected: 10,
                found: 9
            })
        );
    }
}
