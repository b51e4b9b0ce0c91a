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

use crate::building::Facade;
use crate::context::EvaluationContext;
use crate::irradiance::{poa_irradiance, IrradianceOptions, Method};
use crate::orientation::{classify, is_facade_illuminated, Direction};
use crate::sky::{SkyIrradiance, SolarPosition};
use crate::Float;
use serde::Serialize;

/// The sky conditions for which gains are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sky {
    /// Clear-sky irradiance, as given
    Clear,

    /// Direct Normal Irradiance attenuated by the cloud cover
    Cloudy,
}

impl Sky {
    /// All the sky conditions, in the order in which they are reported
    pub const ALL: [Sky; 2] = [Sky::Clear, Sky::Cloudy];
}

/// The solar gain through the glazing of a façade
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct GainResult {
    /// Irradiance incident on the façade, in W/m2
    pub irradiance_poa: Float,

    /// Irradiance that makes it through the glazing, in W/m2
    pub transmitted_irradiance: Float,

    /// Power that makes it through the glazing, in W
    pub transmitted_power: Float,
}

impl GainResult {
    /// Applies the solar factor and the glazing area to an incident irradiance
    pub fn new(irradiance_poa: Float, glazing_area: Float, solar_factor: Float) -> Self {
        let transmitted_irradiance = solar_factor * irradiance_poa;
        Self {
            irradiance_poa,
            transmitted_irradiance,
            transmitted_power: glazing_area * transmitted_irradiance,
        }
    }
}

/// One [`GainResult`] per [`Method`]. They are never merged.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct MethodGains {
    /// Calculated with [`Method::Model`]
    pub model: GainResult,

    /// Calculated with [`Method::Trigonometric`]
    pub trigonometric: GainResult,
}

impl MethodGains {
    /// Calculates the gains of a façade with both methods
    pub fn calc(
        sky: &SkyIrradiance,
        sun: &SolarPosition,
        facade: &Facade,
        solar_factor: Float,
        options: &IrradianceOptions,
    ) -> Self {
        let gain = |method: Method| {
            let poa = poa_irradiance(method, sky, sun, facade.azimuth, options);
            GainResult::new(poa, facade.glazing_area, solar_factor)
        };
        Self {
            model: gain(Method::Model),
            trigonometric: gain(Method::Trigonometric),
        }
    }

    /// The result of a certain method
    pub fn get(&self, method: Method) -> &GainResult {
        match method {
            Method::Model => &self.model,
            Method::Trigonometric => &self.trigonometric,
        }
    }
}

/// Everything that was calculated for a façade
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacadeReport {
    /// The name of the façade, if any
    pub name: Option<String>,

    /// Azimuth of the façade, in degrees
    pub azimuth: Float,

    /// Where the façade looks at
    pub direction: Direction,

    /// Glazing area, in m2
    pub glazing_area: Float,

    /// Whether the façade faces the sun
    pub illuminated: bool,

    /// Gains under a clear sky
    pub clear: MethodGains,

    /// Gains with the cloud-corrected direct irradiance
    pub cloudy: MethodGains,
}

impl FacadeReport {
    /// The gains for a certain sky condition
    pub fn gains(&self, sky: Sky) -> &MethodGains {
        match sky {
            Sky::Clear => &self.clear,
            Sky::Cloudy => &self.cloudy,
        }
    }

    /// The gain for a certain method and sky condition
    pub fn gain(&self, method: Method, sky: Sky) -> &GainResult {
        self.gains(sky).get(method)
    }
}

/// Calculates the solar gains of a façade, with both methods and under
/// both sky conditions.
pub fn evaluate_facade(
    facade: &Facade,
    ctx: &EvaluationContext,
    solar_factor: Float,
    options: &IrradianceOptions,
) -> FacadeReport {
    let sun = &ctx.solar_position;
    let clear = MethodGains::calc(&ctx.sky, sun, facade, solar_factor, options);
    let cloudy = MethodGains::calc(&ctx.cloudy_sky(), sun, facade, solar_factor, options);

    let direction = classify(facade.azimuth);
    tracing::debug!(
        azimuth = facade.azimuth,
        %direction,
        model = clear.model.transmitted_power,
        trigonometric = clear.trigonometric.transmitted_power,
        "façade evaluated"
    );

    FacadeReport {
        name: facade.name.clone(),
        azimuth: facade.azimuth,
        direction,
        glazing_area: facade.glazing_area,
        illuminated: is_facade_illuminated(facade.azimuth, sun.azimuth),
        clear,
        cloudy,
    }
}
