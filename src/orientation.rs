/*
MIT License
Copyright (c) 2021 Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use crate::Float;
use serde::Serialize;
use std::fmt;

/// One of the 16 points of the compass rose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub enum Direction {
    North,
    NorthNorthEast,
    NorthEast,
    EastNorthEast,
    East,
    EastSouthEast,
    SouthEast,
    SouthSouthEast,
    South,
    SouthSouthWest,
    SouthWest,
    WestSouthWest,
    West,
    WestNorthWest,
    NorthWest,
    NorthNorthWest,
    /// The bearing did not fall in any sector (e.g., it was negative)
    Unknown,
}

impl Direction {
    /// The usual abbreviation of the direction (e.g., `"NNE"`)
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::NorthNorthEast => "NNE",
            Direction::NorthEast => "NE",
            Direction::EastNorthEast => "ENE",
            Direction::East => "E",
            Direction::EastSouthEast => "ESE",
            Direction::SouthEast => "SE",
            Direction::SouthSouthEast => "SSE",
            Direction::South => "S",
            Direction::SouthSouthWest => "SSW",
            Direction::SouthWest => "SW",
            Direction::WestSouthWest => "WSW",
            Direction::West => "W",
            Direction::WestNorthWest => "WNW",
            Direction::NorthWest => "NW",
            Direction::NorthNorthWest => "NNW",
            Direction::Unknown => "?",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Direction::North => "North",
            Direction::NorthNorthEast => "North-Northeast",
            Direction::NorthEast => "Northeast",
            Direction::EastNorthEast => "East-Northeast",
            Direction::East => "East",
            Direction::EastSouthEast => "East-Southeast",
            Direction::SouthEast => "Southeast",
            Direction::SouthSouthEast => "South-Southeast",
            Direction::South => "South",
            Direction::SouthSouthWest => "South-Southwest",
            Direction::SouthWest => "Southwest",
            Direction::WestSouthWest => "West-Southwest",
            Direction::West => "West",
            Direction::WestNorthWest => "West-Northwest",
            Direction::NorthWest => "Northwest",
            Direction::NorthNorthWest => "North-Northwest",
            Direction::Unknown => "Unknown",
        };
        write!(f, "{}", name)
    }
}

/// Sectors of the compass rose, as `[lower, upper)` bounds in degrees.
///
/// North crosses zero, so it appears twice.
const SECTORS: [(Float, Float, Direction); 17] = [
    (0.0, 11.25, Direction::North),
    (11.25, 33.75, Direction::NorthNorthEast),
    (33.75, 56.25, Direction::NorthEast),
    (56.25, 78.75, Direction::EastNorthEast),
    (78.75, 101.25, Direction::East),
    (101.25, 123.75, Direction::EastSouthEast),
    (123.75, 146.25, Direction::SouthEast),
    (146.25, 168.75, Direction::SouthSouthEast),
    (168.75, 191.25, Direction::South),
    (191.25, 213.75, Direction::SouthSouthWest),
    (213.75, 236.25, Direction::SouthWest),
    (236.25, 258.75, Direction::WestSouthWest),
    (258.75, 281.25, Direction::West),
    (281.25, 303.75, Direction::WestNorthWest),
    (303.75, 326.25, Direction::NorthWest),
    (326.25, 348.75, Direction::NorthNorthWest),
    (348.75, 360.0, Direction::North),
];

/// Classifies a compass bearing (in degrees, clockwise from North)
/// into one of the 16 points of the compass rose.
///
/// Bearings are not normalized: anything outside of `[0, 360)` is
/// [`Direction::Unknown`].
pub fn classify(bearing: Float) -> Direction {
    SECTORS
        .iter()
        .find(|(lower, upper, _)| (*lower..*upper).contains(&bearing))
        .map(|(_, _, direction)| *direction)
        .unwrap_or(Direction::Unknown)
}

/// Checks whether a façade looking towards `facade_azimuth` can
/// receive beam radiation from a sun located at `solar_azimuth`.
///
/// This happens when the sun is within ±90 degrees of the normal of the
/// façade; i.e., inside the open interval `(facade - 90, facade + 90)`,
/// modulo 360. Both azimuths are in degrees, clockwise from North.
pub fn is_facade_illuminated(facade_azimuth: Float, solar_azimuth: Float) -> bool {
    if facade_azimuth < 90. {
        // The interval crosses North from the West... e.g., a façade
        // at 30 degrees sees (300, 360) and [0, 120)
        let lower = 360. - (90. - facade_azimuth);
        let upper = facade_azimuth + 90.;
        solar_azimuth > lower || solar_azimuth < upper
    } else if facade_azimuth > 270. {
        // The interval crosses North from the East
        let lower = facade_azimuth - 90.;
        let upper = 90. - (360. - facade_azimuth);
        solar_azimuth > lower || solar_azimuth < upper
    } else {
        facade_azimuth - 90. < solar_azimuth && solar_azimuth < facade_azimuth + 90.
    }
}
