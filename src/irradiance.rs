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

use crate::orientation::is_facade_illuminated;
use crate::sky::{SkyIrradiance, SolarPosition};
use crate::Float;
use serde::Serialize;

/// Tilt of a façade, in degrees
pub const VERTICAL_TILT: Float = 90.;

/// Ground reflectance in an urban environment
pub const DEFAULT_ALBEDO: Float = 0.15;

/// Below this solar elevation (in degrees) the trigonometric
/// method ignores the direct beam.
pub const DEFAULT_MIN_ELEVATION: Float = 10.;

/// The method used for calculating the irradiance on a façade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Isotropic sky transposition model
    Model,

    /// Closed-form trigonometric decomposition
    Trigonometric,
}

impl Method {
    /// All the methods, in the order in which they are reported
    pub const ALL: [Method; 2] = [Method::Model, Method::Trigonometric];
}

/// Parameters shared by both methods
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IrradianceOptions {
    /// Minimum solar elevation (degrees) for the trigonometric direct beam
    pub min_elevation: Float,

    /// Ground reflectance
    pub albedo: Float,
}

impl Default for IrradianceOptions {
    fn default() -> Self {
        Self {
            min_elevation: DEFAULT_MIN_ELEVATION,
            albedo: DEFAULT_ALBEDO,
        }
    }
}

/// The irradiance on a surface, split by origin. In W/m2.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct PoaComponents {
    /// Beam radiation coming straight from the sun
    pub direct: Float,

    /// Radiation scattered by the sky
    pub sky_diffuse: Float,

    /// Radiation reflected by the ground
    pub ground_reflected: Float,
}

impl PoaComponents {
    /// The plane-of-array irradiance. Never negative.
    pub fn total(&self) -> Float {
        (self.direct + self.sky_diffuse + self.ground_reflected).max(0.0)
    }
}

/// Angle of incidence (in degrees) between the sun rays and the normal
/// of a surface with a certain tilt and azimuth (both in degrees).
pub fn angle_of_incidence(sun: &SolarPosition, surface_tilt: Float, surface_azimuth: Float) -> Float {
    let zenith = sun.zenith().to_radians();
    let tilt = surface_tilt.to_radians();
    let relative_azimuth = (sun.azimuth - surface_azimuth).to_radians();

    let cos_aoi = zenith.cos() * tilt.cos() + zenith.sin() * tilt.sin() * relative_azimuth.cos();
    cos_aoi.clamp(-1., 1.).acos().to_degrees()
}

/// Irradiance on a vertical façade according to an isotropic sky.
///
/// The Direct Normal Irradiance is only considered when the façade
/// faces the sun (see [`is_facade_illuminated`]).
pub fn model_components(
    sky: &SkyIrradiance,
    sun: &SolarPosition,
    facade_azimuth: Float,
    options: &IrradianceOptions,
) -> PoaComponents {
    let dni = if is_facade_illuminated(facade_azimuth, sun.azimuth) {
        sky.dni
    } else {
        0.0
    };
    let aoi = angle_of_incidence(sun, VERTICAL_TILT, facade_azimuth).to_radians();
    let tilt = VERTICAL_TILT.to_radians();

    PoaComponents {
        direct: dni * aoi.cos().max(0.0),
        sky_diffuse: sky.dhi * (1. + tilt.cos()) / 2.,
        ground_reflected: sky.ghi * options.albedo * (1. - tilt.cos()) / 2.,
    }
}

/// Irradiance on a vertical façade according to the trigonometric
/// decomposition.
///
/// The direct beam is `dni * cos(elevation) * cos(sun_azimuth - facade_azimuth)`,
/// but only while `min_elevation < elevation < 90` and the façade faces
/// the sun.
pub fn trigonometric_components(
    sky: &SkyIrradiance,
    sun: &SolarPosition,
    facade_azimuth: Float,
    options: &IrradianceOptions,
) -> PoaComponents {
    let elevation = sun.elevation.to_radians();
    let solar_azimuth = sun.azimuth.to_radians();
    let azimuth = facade_azimuth.to_radians();

    let in_window = options.min_elevation < sun.elevation && sun.elevation < 90.;
    let direct = if in_window && is_facade_illuminated(facade_azimuth, sun.azimuth) {
        sky.dni * elevation.cos() * (solar_azimuth - azimuth).cos()
    } else {
        0.0
    };

    // Half of the sky is visible, plus some more as the sun rises.
    let tilt = VERTICAL_TILT.to_radians();
    let sky_diffuse = sky.dhi * (1. + tilt.cos()) / 2. + sky.dhi * elevation.sin() / 2.;

    let ground_reflected = sky.ghi * options.albedo * (1. - elevation.cos()) / 2.;

    PoaComponents {
        direct,
        sky_diffuse,
        ground_reflected,
    }
}

/// Calculates the components of the irradiance on a façade with the given [`Method`]
pub fn components(
    method: Method,
    sky: &SkyIrradiance,
    sun: &SolarPosition,
    facade_azimuth: Float,
    options: &IrradianceOptions,
) -> PoaComponents {
    match method {
        Method::Model => model_components(sky, sun, facade_azimuth, options),
        Method::Trigonometric => trigonometric_components(sky, sun, facade_azimuth, options),
    }
}

/// Plane-of-array irradiance (W/m2) on a façade, with the given [`Method`]
pub fn poa_irradiance(
    method: Method,
    sky: &SkyIrradiance,
    sun: &SolarPosition,
    facade_azimuth: Float,
    options: &IrradianceOptions,
) -> Float {
    components(method, sky, sun, facade_azimuth, options).total()
}
