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

use crate::error::ConfigurationError;
use crate::irradiance::{IrradianceOptions, DEFAULT_ALBEDO, DEFAULT_MIN_ELEVATION};
use crate::Float;
use serde::{Deserialize, Serialize};
use solar::Solar;
use std::path::Path;

/// Solar factor (g-value) of a low-emissivity double glazing
pub const DEFAULT_SOLAR_FACTOR: Float = 0.37;

/// Lowest altitude accepted for a site, in meters (the Dead Sea shore is at -430)
const MIN_ALTITUDE: Float = -500.;

/// Highest altitude accepted for a site, in meters
const MAX_ALTITUDE: Float = 9000.;

fn default_solar_factor() -> Float {
    DEFAULT_SOLAR_FACTOR
}

fn default_min_elevation() -> Float {
    DEFAULT_MIN_ELEVATION
}

fn default_albedo() -> Float {
    DEFAULT_ALBEDO
}

/// Where the building is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// Latitude in degrees. North is positive.
    pub latitude: Float,

    /// Longitude in degrees. East is positive.
    pub longitude: Float,

    /// Altitude above sea level, in meters
    #[serde(default)]
    pub altitude: Float,

    /// Standard meridian of the clock used for dates, in degrees
    /// (East is positive). Zero means dates are in UTC.
    #[serde(default)]
    pub standard_meridian: Float,
}

impl Site {
    /// Checks that the coordinates make sense
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !(-90. ..=90.).contains(&self.latitude) {
            return Err(ConfigurationError::Latitude(self.latitude));
        }
        if !(-180. ..=180.).contains(&self.longitude) {
            return Err(ConfigurationError::Longitude(self.longitude));
        }
        if !(MIN_ALTITUDE..=MAX_ALTITUDE).contains(&self.altitude) {
            return Err(ConfigurationError::Altitude(self.altitude));
        }
        Ok(())
    }

    /// Builds a [`Solar`] calculator for this site.
    ///
    /// `Solar` uses Radiance's conventions, in which East is negative.
    pub fn solar(&self) -> Solar {
        Solar::new(
            self.latitude.to_radians(),
            -self.longitude.to_radians(),
            -self.standard_meridian.to_radians(),
        )
    }
}

/// A glazed façade of the building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facade {
    /// An optional name, for reporting
    #[serde(default)]
    pub name: Option<String>,

    /// Azimuth of the outward normal, in degrees clockwise from North
    pub azimuth: Float,

    /// Area of glazing on this façade, in m2
    pub glazing_area: Float,
}

impl Facade {
    /// Builds an unnamed façade
    pub fn new(azimuth: Float, glazing_area: Float) -> Self {
        Self {
            name: None,
            azimuth,
            glazing_area,
        }
    }

    fn validate(&self, index: usize) -> Result<(), ConfigurationError> {
        if !(0. ..360.).contains(&self.azimuth) {
            return Err(ConfigurationError::FacadeAzimuth {
                index,
                value: self.azimuth,
            });
        }
        if !self.glazing_area.is_finite() || self.glazing_area < 0. {
            return Err(ConfigurationError::GlazingArea {
                index,
                value: self.glazing_area,
            });
        }
        Ok(())
    }
}

/// The description of a building: its location and its glazed façades.
///
/// It is usually read from a JSON5 file like this one:
///
/// ```ignore
/// {
///     site: { latitude: 48.85, longitude: 2.35, altitude: 66 },
///     solar_factor: 0.37,
///     facades: [
///         { name: "main", azimuth: 115, glazing_area: 153.5 },
///         { azimuth: 205, glazing_area: 25 },
///     ],
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    /// The location
    pub site: Site,

    /// The façades, in the order in which they are reported
    pub facades: Vec<Facade>,

    /// Fraction of the incident irradiance transmitted by the glazing
    #[serde(default = "default_solar_factor")]
    pub solar_factor: Float,

    /// Minimum solar elevation (degrees) for the trigonometric direct beam.
    /// Depends on the obstructions around the building.
    #[serde(default = "default_min_elevation")]
    pub min_elevation: Float,

    /// Ground reflectance
    #[serde(default = "default_albedo")]
    pub albedo: Float,
}

impl Building {
    /// Parses a building from a JSON5 string. The result is validated.
    pub fn from_json5(input: &str) -> Result<Self, ConfigurationError> {
        let building: Building = json5::from_str(input)?;
        building.validate()?;
        Ok(building)
    }

    /// Reads a building from a JSON5 file. The result is validated.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigurationError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json5(&content)
    }

    /// Checks that the building can be simulated
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.site.validate()?;

        if self.facades.is_empty() {
            return Err(ConfigurationError::NoFacades);
        }
        for (i, facade) in self.facades.iter().enumerate() {
            facade.validate(i)?;
        }

        if !(0. ..=1.).contains(&self.solar_factor) {
            return Err(ConfigurationError::SolarFactor(self.solar_factor));
        }
        if !(0. ..=1.).contains(&self.albedo) {
            return Err(ConfigurationError::Albedo(self.albedo));
        }
        if !(0. ..90.).contains(&self.min_elevation) {
            return Err(ConfigurationError::MinElevation(self.min_elevation));
        }
        Ok(())
    }

    /// The options used for calculating the irradiance on the façades
    pub fn irradiance_options(&self) -> IrradianceOptions {
        IrradianceOptions {
            min_elevation: self.min_elevation,
            albedo: self.albedo,
        }
    }
}
