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

use seabattle::{Coordinate, FireOutcome, Geometry, Ship};

fn coords(ship: &Ship) -> Vec<(usize, usize)> {
    ship.coords().map(<(usize, usize)>::from).collect()
}

#[test]
fn vertical_endpoints_use_shifted_column() {
    let ship = Ship::new(Coordinate::new(2, 0), Coordinate::new(4, 0));
    assert_eq!(coords(&ship), vec![(2, 1), (3, 1), (4, 1)]);
    assert!(ship.find_segment(2, 0).is_none());
}

#[test]
fn straight_geometry_places_vertical_ship_in_its_column() {
    let ship = Ship::with_geometry(
        Coordinate::new(2, 0),
        Coordinate::new(4, 0),
        Geometry::Straight,
    );
    assert_eq!(coords(&ship), vec![(2, 0), (3, 0), (4, 0)]);
}

#[test]
fn single_segment_ship_sinks_on_first_hit() {
    let mut ship = Ship::new(Coordinate::new(9, 9), Coordinate::new(9, 9));
    assert_eq!(ship.len(), 1);
    assert_eq!(ship.fire(9, 9), FireOutcome::Sunk);
    assert_eq!(ship.fire(9, 9), FireOutcome::Miss);
}

#[test]
fn four_segment_ship_sinks_progressively() {
    let mut ship = Ship::new(Coordinate::new(0, 0), Coordinate::new(0, 3));
    assert_eq!(ship.len(), 4);
    assert_eq!(ship.fire(0, 0), FireOutcome::Hit);
    assert_eq!(ship.fire(0, 1), FireOutcome::Hit);
    assert_eq!(ship.fire(0, 2), FireOutcome::Hit);
    assert_eq!(ship.fire(0, 3), FireOutcome::Sunk);
    assert!(ship.all_hit());
    assert!(ship.segments().iter().all(|segment| !segment.is_alive()));
}

#[test]
fn segments_are_ordered_and_start_alive() {
    let ship = Ship::new(Coordinate::new(2, 4), Coordinate::new(2, 6));
    let segments = ship.segments();
    assert_eq!(segments.len(), 3);
    for (i, segment) in segments.iter().enumerate() {
        assert_eq!(segment.row(), 2);
        assert_eq!(segment.column(), 4 + i);
        assert!(segment.is_alive());
    }
    assert!(!ship.is_sunk());
}
