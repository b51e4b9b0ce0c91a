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

/// The position of the sun in the sky, as seen from the site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarPosition {
    /// Compass azimuth in degrees, clockwise from North (East is 90)
    pub azimuth: Float,

    /// Elevation above the horizon, in degrees. Negative at night.
    pub elevation: Float,
}

impl SolarPosition {
    /// Builds a new `SolarPosition`, wrapping the azimuth into `[0, 360)`
    pub fn new(azimuth: Float, elevation: Float) -> Self {
        Self {
            azimuth: azimuth.rem_euclid(360.),
            elevation,
        }
    }

    /// The position used when the sun is below the horizon
    pub fn below_horizon() -> Self {
        Self {
            azimuth: 0.0,
            elevation: -90.0,
        }
    }

    /// Builds a `SolarPosition` from a unit vector pointing towards the sun.
    ///
    /// Z is up, Y is North and X is East.
    pub fn from_direction(x: Float, y: Float, z: Float) -> Self {
        let elevation = z.clamp(-1., 1.).asin().to_degrees();
        let azimuth = x.atan2(y).to_degrees();
        Self::new(azimuth, elevation)
    }

    /// The solar zenith angle, in degrees
    pub fn zenith(&self) -> Float {
        90. - self.elevation
    }

    /// Is the sun above the horizon?
    pub fn is_up(&self) -> bool {
        self.elevation > 0.0
    }
}

/// Irradiance components on the sky at a certain moment, in W/m2.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct SkyIrradiance {
    /// Direct Normal Irradiance
    pub dni: Float,

    /// Diffuse Horizontal Irradiance
    pub dhi: Float,

    /// Global Horizontal Irradiance
    pub ghi: Float,
}

impl SkyIrradiance {
    /// A sky with no irradiance at all
    pub fn dark() -> Self {
        Self::default()
    }

    /// Returns a copy of this sky with a different Direct Normal Irradiance.
    /// Diffuse and Global components are not changed.
    pub fn with_dni(&self, dni: Float) -> Self {
        Self { dni, ..*self }
    }

    /// How far the Global Horizontal Irradiance is from the sum of its
    /// components (i.e., `ghi - (dni * cos(zenith) + dhi)`).
    ///
    /// Only informative... the components are not required to add up.
    pub fn closure_residual(&self, sun: &SolarPosition) -> Float {
        let cos_zenith = sun.zenith().to_radians().cos();
        self.ghi - (self.dni * cos_zenith + self.dhi)
    }
}

#[cfg(test)]
mod testing {
    use super::*;
    use validate::assert_close;

    #[test]
    fn test_from_direction() {
        // South, on the horizon
        let p = SolarPosition::from_direction(0., -1., 0.);
        assert_close!(p.azimuth, 180.);
        assert_close!(p.elevation, 0.);

        // West
        let p = SolarPosition::from_direction(-1., 0., 0.);
        assert_close!(p.azimuth, 270.);

        // East, 45 degrees up
        let a = (0.5 as Float).sqrt();
        let p = SolarPosition::from_direction(a, 0., a);
        assert_close!(p.azimuth, 90.);
        assert_close!(p.elevation, 45., 1e-6);
        assert_close!(p.zenith(), 45., 1e-6);
    }

    #[test]
    fn test_new_wraps_azimuth() {
        assert_close!(SolarPosition::new(-90., 10.).azimuth, 270.);
        assert_close!(SolarPosition::new(360., 10.).azimuth, 0.);
        assert!(!SolarPosition::below_horizon().is_up());
    }

    #[test]
    fn test_closure_residual() {
        let sun = SolarPosition::new(180., 30.);
        let sky = SkyIrradiance {
            dni: 600.,
            dhi: 100.,
            ghi: 400.,
        };
        // 600 * sin(30) + 100 = 400
        assert_close!(sky.closure_residual(&sun), 0.0, 1e-9);

        let sky = sky.with_dni(0.0);
        assert_close!(sky.closure_residual(&sun), 300.0, 1e-9);
        assert_close!(sky.dhi, 100.);
    }
}
