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

use crate::cloud::CloudFraction;
use crate::facade::{FacadeReport, MethodGains, Sky};
use crate::irradiance::Method;
use crate::sky::{SkyIrradiance, SolarPosition};
use crate::Float;
use calendar::Date;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Writes a [`Date`] as `{month, day, hour}`
pub(crate) fn serialize_date<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
    let mut s = serializer.serialize_struct("Date", 3)?;
    s.serialize_field("month", &date.month)?;
    s.serialize_field("day", &date.day)?;
    s.serialize_field("hour", &date.hour)?;
    s.end()
}

/// Transmitted power (W) added over all the façades, one
/// running total per [`Method`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct MethodTotals {
    /// Total calculated with [`Method::Model`]
    pub model: Float,

    /// Total calculated with [`Method::Trigonometric`]
    pub trigonometric: Float,
}

impl MethodTotals {
    /// Adds the gains of a façade
    pub fn add(&mut self, gains: &MethodGains) {
        self.model += gains.model.transmitted_power;
        self.trigonometric += gains.trigonometric.transmitted_power;
    }

    /// The total of a certain method
    pub fn get(&self, method: Method) -> Float {
        match method {
            Method::Model => self.model,
            Method::Trigonometric => self.trigonometric,
        }
    }
}

/// Building totals, per sky condition
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct BuildingTotals {
    /// Totals under a clear sky
    pub clear: MethodTotals,

    /// Totals with the cloud-corrected direct irradiance
    pub cloudy: MethodTotals,
}

impl BuildingTotals {
    /// Adds up the façades
    pub fn from_facades(facades: &[FacadeReport]) -> Self {
        let mut ret = Self::default();
        for f in facades {
            ret.clear.add(&f.clear);
            ret.cloudy.add(&f.cloudy);
        }
        ret
    }

    /// The total of a certain method and sky condition
    pub fn get(&self, method: Method, sky: Sky) -> Float {
        match sky {
            Sky::Clear => self.clear.get(method),
            Sky::Cloudy => self.cloudy.get(method),
        }
    }
}

/// The result of evaluating a building at a certain moment
#[derive(Debug, Clone, Serialize)]
pub struct BuildingReport {
    /// The moment of the calculation
    #[serde(serialize_with = "serialize_date")]
    pub date: Date,

    /// Where the sun was
    pub solar_position: SolarPosition,

    /// Clear-sky irradiance
    pub clear_sky: SkyIrradiance,

    /// Clear-sky irradiance with the direct component corrected by clouds
    pub cloudy_sky: SkyIrradiance,

    /// The cloud cover used for the correction
    pub cloud: CloudFraction,

    /// `ghi - (dni * cos(zenith) + dhi)` for the clear sky. Informative only.
    pub closure_residual: Float,

    /// One report per façade, in the order of the building
    pub facades: Vec<FacadeReport>,

    /// Transmitted power of the whole building
    pub totals: BuildingTotals,
}
