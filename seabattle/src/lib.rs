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

//! A single-player Battleship board.
//!
//! A [`Board`] is built from a fixed list of ship endpoints, checked against the
//! standard 10-ship fleet, and then shot at one coordinate at a time. Each shot reports
//! a [`FireOutcome`] of `Miss!`, `Hit!` or `Sunk!`.
//!
//! ```
//! use seabattle::{config::SAMPLE_FLEET, Board, FireOutcome};
//!
//! let mut board = Board::new(SAMPLE_FLEET.iter().copied()).unwrap();
//! assert_eq!(board.fire((9, 9)), FireOutcome::Sunk);
//! assert_eq!(board.fire((5, 5)).as_str(), "Miss!");
//! ```
//!
//! By default the board keeps its compatible quirks, such as vertical ships landing one
//! column to the right. [`BoardOptions`] selects corrected behavior instead.

pub mod board;
pub mod config;
pub mod ships;

pub use crate::{
    board::{
        Board, BoardSetup, Cell, CompositionError, Coordinate, FireOutcome, FleetError,
        OverlapError,
    },
    config::{BoardOptions, FleetComposition, Geometry},
    ships::{Segment, Ship},
};
