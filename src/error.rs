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
use thiserror::Error;

/// Errors found while reading or checking the description of a
/// building. These are raised before any calculation is performed.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Latitude must be within [-90, 90] degrees
    #[error("latitude must be within [-90, 90] degrees... found {0}")]
    Latitude(Float),

    /// Longitude must be within [-180, 180] degrees
    #[error("longitude must be within [-180, 180] degrees... found {0}")]
    Longitude(Float),

    /// Altitude of the site, in meters
    #[error("altitude must be within [-500, 9000] meters... found {0}")]
    Altitude(Float),

    /// A façade azimuth is outside of [0, 360)
    #[error("azimuth of façade #{index} must be within [0, 360) degrees... found {value}")]
    FacadeAzimuth {
        /// The position of the façade in the building
        index: usize,
        /// The azimuth found
        value: Float,
    },

    /// A façade has a negative (or not finite) glazing area
    #[error("glazing area of façade #{index} must be a non-negative number... found {value}")]
    GlazingArea {
        /// The position of the façade in the building
        index: usize,
        /// The area found
        value: Float,
    },

    /// The solar factor is a fraction
    #[error("solar factor must be within [0, 1]... found {0}")]
    SolarFactor(Float),

    /// The albedo is a fraction
    #[error("ground albedo must be within [0, 1]... found {0}")]
    Albedo(Float),

    /// The minimum solar elevation used for the direct beam
    #[error("minimum solar elevation must be within [0, 90) degrees... found {0}")]
    MinElevation(Float),

    /// The moment of the calculation does not exist
    #[error("there is no {month}/{day} at {hour}h (month/day, in a 365-day year)")]
    Date {
        /// Month of the year
        month: u8,
        /// Day of the month
        day: u8,
        /// Hour of the day
        hour: Float,
    },

    /// A building without façades has nothing to calculate
    #[error("the building has no façades")]
    NoFacades,

    /// The configuration file could not be read
    #[error("could not read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid JSON5
    #[error("could not parse configuration: {0}")]
    Parse(#[from] json5::Error),
}

/// Errors reported by the external collaborators that provide
/// solar position, sky irradiance and cloud cover.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source has no data for the requested instant
    #[error("data unavailable: {0}")]
    Unavailable(String),

    /// The source produced a value that cannot be used
    #[error("invalid {what}: {value}")]
    InvalidValue {
        /// What was being produced
        what: &'static str,
        /// The offending value
        value: Float,
    },

    /// The data file could not be read
    #[error("could not read data file: {0}")]
    Io(#[from] std::io::Error),

    /// The data file is not valid JSON5
    #[error("could not parse data: {0}")]
    Parse(#[from] json5::Error),
}
