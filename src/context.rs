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

use crate::building::Site;
use crate::cloud::{cloud_fraction_or_clear, correct_dni, CloudFraction};
use crate::error::{ConfigurationError, SourceError};
use crate::sky::{SkyIrradiance, SolarPosition};
use crate::sources::{ClearSkySource, CloudCoverSource, SolarPositionSource};
use calendar::Date;

/// Days in each month. [`Date`] has no year, so February always has 28.
const DAYS_PER_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Checks that `date` exists: a month between 1 and 12, a day that
/// belongs to that month and an hour in `[0, 24)`.
pub fn validate_date(date: &Date) -> Result<(), ConfigurationError> {
    let err = || ConfigurationError::Date {
        month: date.month,
        day: date.day,
        hour: date.hour,
    };
    let month_days = match date.month {
        1..=12 => DAYS_PER_MONTH[date.month as usize - 1],
        _ => return Err(err()),
    };
    if date.day == 0 || date.day > month_days || !(0. ..24.).contains(&date.hour) {
        return Err(err());
    }
    Ok(())
}

/// Everything that is known about the sky at the moment of the calculation.
///
/// It is built once and then shared (read-only) by every façade.
#[derive(Debug, Clone, Copy)]
pub struct EvaluationContext {
    /// The moment of the calculation, in standard time
    pub date: Date,

    /// Where the sun is
    pub solar_position: SolarPosition,

    /// Clear-sky irradiance
    pub sky: SkyIrradiance,

    /// The cloud cover
    pub cloud: CloudFraction,
}

impl EvaluationContext {
    /// Builds a context from already-known values
    pub fn new(
        date: Date,
        solar_position: SolarPosition,
        sky: SkyIrradiance,
        cloud: CloudFraction,
    ) -> Self {
        Self {
            date,
            solar_position,
            sky,
            cloud,
        }
    }

    /// Builds a context by asking the external sources.
    ///
    /// The solar position and the clear sky are required. The cloud
    /// cover is not: if it cannot be obtained, the sky is assumed clear.
    pub fn from_sources(
        site: &Site,
        date: Date,
        position: &dyn SolarPositionSource,
        clear_sky: &dyn ClearSkySource,
        clouds: &dyn CloudCoverSource,
    ) -> Result<Self, SourceError> {
        let solar_position = position.solar_position(site, date)?;
        let sky = clear_sky.clear_sky(site, date, &solar_position)?;
        let cloud = cloud_fraction_or_clear(clouds, site, date);

        tracing::debug!(
            azimuth = solar_position.azimuth,
            elevation = solar_position.elevation,
            dni = sky.dni,
            dhi = sky.dhi,
            ghi = sky.ghi,
            cloud = cloud.percent(),
            "evaluation context ready"
        );

        Ok(Self::new(date, solar_position, sky, cloud))
    }

    /// The clear sky with its Direct Normal Irradiance attenuated by the
    /// clouds. Diffuse and Global components are kept.
    pub fn cloudy_sky(&self) -> SkyIrradiance {
        self.sky.with_dni(correct_dni(self.sky.dni, self.cloud))
    }
}
