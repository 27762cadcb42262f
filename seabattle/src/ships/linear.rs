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

use log::debug;

use crate::{board::Coordinate, config::Geometry, ships::Segment};

/// Derive the cells a ship occupies from its endpoints.
///
/// With [`Geometry::Legacy`] the first test is `start.row < end.row`: such a ship runs
/// down rows `start.row..=end.row`, but in column `end.column + 1`. Otherwise if
/// `start.column < end.column` it runs along `start.row`. Any other pair, including a
/// reversed one, gives the single cell at `start`.
///
/// With [`Geometry::Straight`] a ship whose rows differ runs down `start.column`,
/// otherwise it runs along `start.row`; endpoints may be given in either order.
pub fn derive_segments(start: Coordinate, end: Coordinate, geometry: Geometry) -> Vec<Segment> {
    let segments: Vec<Segment> = match geometry {
        Geometry::Legacy => {
            if start.row < end.row {
                (start.row..=end.row)
                    .map(|row| Segment::new(Coordinate::new(row, end.column + 1)))
                    .collect()
            } else if start.column < end.column {
                (start.column..=end.column)
                    .map(|column| Segment::new(Coordinate::new(start.row, column)))
                    .collect()
            } else {
                vec![Segment::new(start)]
            }
        }
        Geometry::Straight => {
            if start.row != end.row {
                span(start.row, end.row)
                    .map(|row| Segment::new(Coordinate::new(row, start.column)))
                    .collect()
            } else {
                span(start.column, end.column)
                    .map(|column| Segment::new(Coordinate::new(start.row, column)))
                    .collect()
            }
        }
    };
    debug!(
        "derived {} segments from {} to {} ({:?})",
        segments.len(),
        start,
        end,
        geometry
    );
    segments
}

/// Inclusive range between two values in either order.
fn span(a: usize, b: usize) -> std::ops::RangeInclusive<usize> {
    a.min(b)..=a.max(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(start: (usize, usize), end: (usize, usize), geometry: Geometry) -> Vec<(usize, usize)> {
        derive_segments(start.into(), end.into(), geometry)
            .into_iter()
            .map(|segment| <(usize, usize)>::from(segment.coord()))
            .collect()
    }

    #[test]
    fn legacy_vertical_is_shifted_right() {
        assert_eq!(
            cells((2, 0), (4, 0), Geometry::Legacy),
            vec![(2, 1), (3, 1), (4, 1)]
        );
        // The shift follows the end column, not the start column.
        assert_eq!(cells((5, 2), (6, 7), Geometry::Legacy), vec![(5, 8), (6, 8)]);
    }

    #[test]
    fn legacy_horizontal() {
        assert_eq!(
            cells((0, 0), (0, 3), Geometry::Legacy),
            vec![(0, 0), (0, 1), (0, 2), (0, 3)]
        );
    }

    #[test]
    fn legacy_reversed_is_single_cell() {
        assert_eq!(cells((4, 0), (2, 0), Geometry::Legacy), vec![(4, 0)]);
        assert_eq!(cells((0, 3), (0, 0), Geometry::Legacy), vec![(0, 3)]);
        assert_eq!(cells((9, 9), (9, 9), Geometry::Legacy), vec![(9, 9)]);
    }

    #[test]
    fn straight_vertical_keeps_column() {
        assert_eq!(
            cells((2, 0), (4, 0), Geometry::Straight),
            vec![(2, 0), (3, 0), (4, 0)]
        );
        assert_eq!(
            cells((4, 0), (2, 0), Geometry::Straight),
            vec![(2, 0), (3, 0), (4, 0)]
        );
    }

    #[test]
    fn straight_horizontal_either_order() {
        assert_eq!(
            cells((3, 6), (3, 4), Geometry::Straight),
            vec![(3, 4), (3, 5), (3, 6)]
        );
        assert_eq!(cells((7, 7), (7, 7), Geometry::Straight), vec![(7, 7)]);
    }
}
