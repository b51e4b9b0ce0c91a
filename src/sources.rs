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
use crate::error::SourceError;
use crate::sky::{SkyIrradiance, SolarPosition};
use crate::Float;
use calendar::Date;
use serde::Deserialize;
use solar::Time;
use std::path::Path;

/// Something that knows where the sun is
pub trait SolarPositionSource: Sync {
    /// The position of the sun at `date` (in standard time), seen from `site`
    fn solar_position(&self, site: &Site, date: Date) -> Result<SolarPosition, SourceError>;
}

/// Something that knows the irradiance under a clear sky
pub trait ClearSkySource: Sync {
    /// Clear-sky irradiance at `site` and `date`, for a sun at `sun`
    fn clear_sky(
        &self,
        site: &Site,
        date: Date,
        sun: &SolarPosition,
    ) -> Result<SkyIrradiance, SourceError>;
}

/// Something that reports the cloud cover
pub trait CloudCoverSource: Sync {
    /// Percentage of the sky covered by clouds
    fn cloud_cover(&self, site: &Site, date: Date) -> Result<Float, SourceError>;
}

/// Irradiance actually measured on a horizontal plane, in W/m2
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measured {
    /// Global Horizontal Irradiance
    pub ghi: Float,

    /// Direct Normal Irradiance
    pub dni: Float,
}

/// Something that holds irradiance measurements
pub trait MeasuredIrradianceSource: Sync {
    /// The measurement at `site` and `date`
    fn measured(&self, site: &Site, date: Date) -> Result<Measured, SourceError>;
}

/* ************** */
/* SOLAR POSITION */
/* ************** */

/// Solar position following Duffie and Beckman, as implemented by [`solar::Solar`]
#[derive(Debug, Default, Clone, Copy)]
pub struct SunPosition;

impl SolarPositionSource for SunPosition {
    fn solar_position(&self, site: &Site, date: Date) -> Result<SolarPosition, SourceError> {
        let solar = site.solar();
        let n = date.day_of_year();
        match solar.sun_position(Time::Standard(n)) {
            Some(dir) => {
                if !(dir.x.is_finite() && dir.y.is_finite() && dir.z.is_finite()) {
                    return Err(SourceError::InvalidValue {
                        what: "sun direction",
                        value: dir.z,
                    });
                }
                Ok(SolarPosition::from_direction(dir.x, dir.y, dir.z))
            }
            None => Ok(SolarPosition::below_horizon()),
        }
    }
}

/* ********* */
/* CLEAR SKY */
/* ********* */

/// Ineichen and Perez's clear sky model.
///
/// > Ineichen, P. and Perez, R. (2002). *A new airmass independent
/// > formulation for the Linke turbidity coefficient*. Solar Energy 73(3).
#[derive(Debug, Clone, Copy)]
pub struct IneichenClearSky {
    /// Linke turbidity coefficient (typically between 2 and 7)
    pub linke_turbidity: Float,
}

impl Default for IneichenClearSky {
    fn default() -> Self {
        Self {
            linke_turbidity: 3.0,
        }
    }
}

impl IneichenClearSky {
    /// Builds a model with a certain Linke turbidity
    pub fn new(linke_turbidity: Float) -> Self {
        Self { linke_turbidity }
    }
}

/// Ratio between the pressure at `altitude` (m) and the pressure at sea level
fn pressure_ratio(altitude: Float) -> Float {
    (1.0 - 2.25577e-5 * altitude).powf(5.25588)
}

impl ClearSkySource for IneichenClearSky {
    fn clear_sky(
        &self,
        site: &Site,
        date: Date,
        sun: &SolarPosition,
    ) -> Result<SkyIrradiance, SourceError> {
        let tl = self.linke_turbidity;
        if !tl.is_finite() || tl <= 0.0 {
            return Err(SourceError::InvalidValue {
                what: "Linke turbidity",
                value: tl,
            });
        }
        if !sun.is_up() {
            return Ok(SkyIrradiance::dark());
        }

        let zenith = sun.zenith().to_radians();
        let cos_zenith = zenith.cos();
        let air_mass = solar::air_mass(zenith) * pressure_ratio(site.altitude);
        let extraterrestrial = site
            .solar()
            .normal_extraterrestrial_radiation(date.day_of_year());

        let altitude = site.altitude;
        let fh1 = (-altitude / 8000.).exp();
        let fh2 = (-altitude / 1250.).exp();
        let cg1 = 5.09e-5 * altitude + 0.868;
        let cg2 = 3.92e-5 * altitude + 0.0387;

        // Global
        let ghi = cg1
            * extraterrestrial
            * cos_zenith
            * (-cg2 * air_mass * (fh1 + fh2 * (tl - 1.))).exp().max(0.0);

        // Beam... the smallest of the two formulations
        let b = 0.664 + 0.163 / fh1;
        let bnci = extraterrestrial * (b * (-0.09 * air_mass * (tl - 1.)).exp()).max(0.0);
        let bnci_2 = ghi * ((1. - (0.1 - 0.2 * (-tl).exp()) / (0.1 + 0.882 / fh1)) / cos_zenith)
            .clamp(0.0, 1e20);
        let dni = bnci.min(bnci_2);

        // Diffuse is whatever is left
        let dhi = (ghi - dni * cos_zenith).max(0.0);

        Ok(SkyIrradiance { dni, dhi, ghi })
    }
}

/* *********** */
/* CLOUD COVER */
/* *********** */

/// A cloud cover (in percent) that does not change
#[derive(Debug, Clone, Copy)]
pub struct FixedCloudCover(pub Float);

impl CloudCoverSource for FixedCloudCover {
    fn cloud_cover(&self, _site: &Site, _date: Date) -> Result<Float, SourceError> {
        if self.0.is_nan() {
            return Err(SourceError::InvalidValue {
                what: "cloud cover",
                value: self.0,
            });
        }
        Ok(self.0)
    }
}

/// Used when there is no information about clouds. It always fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCloudData;

impl CloudCoverSource for NoCloudData {
    fn cloud_cover(&self, _site: &Site, _date: Date) -> Result<Float, SourceError> {
        Err(SourceError::Unavailable("no cloud cover source".into()))
    }
}

/* ******** */
/* MEASURED */
/* ******** */

/// A single hourly measurement
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MeasuredRecord {
    /// Month of the year, from 1 to 12
    pub month: u8,

    /// Day of the month, from 1
    pub day: u8,

    /// Hour of the day, from 0.0 to 23.999
    pub hour: Float,

    /// Global Horizontal Irradiance, in W/m2
    pub ghi: Float,

    /// Direct Normal Irradiance, in W/m2
    pub dni: Float,
}

/// A list of measurements, usually read from a JSON5 file containing
/// an array of [`MeasuredRecord`]s.
#[derive(Debug, Clone, Default)]
pub struct MeasuredSeries {
    records: Vec<MeasuredRecord>,
}

impl MeasuredSeries {
    /// Builds a series from a list of records
    pub fn new(records: Vec<MeasuredRecord>) -> Self {
        Self { records }
    }

    /// Parses a series from a JSON5 string
    pub fn from_json5(input: &str) -> Result<Self, SourceError> {
        let records: Vec<MeasuredRecord> = json5::from_str(input)?;
        Ok(Self::new(records))
    }

    /// Reads a series from a JSON5 file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json5(&content)
    }

    /// The number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Checks whether there are no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl MeasuredIrradianceSource for MeasuredSeries {
    fn measured(&self, _site: &Site, date: Date) -> Result<Measured, SourceError> {
        // The closest record within the same hour
        self.records
            .iter()
            .filter(|r| r.month == date.month && r.day == date.day)
            .filter(|r| (r.hour - date.hour).abs() < 0.5)
            .min_by(|a, b| {
                let da = (a.hour - date.hour).abs();
                let db = (b.hour - date.hour).abs();
                da.total_cmp(&db)
            })
            .map(|r| Measured {
                ghi: r.ghi,
                dni: r.dni,
            })
            .ok_or_else(|| {
                SourceError::Unavailable(format!(
                    "no measurement for {}/{} at {:.2}h",
                    date.day, date.month, date.hour
                ))
            })
    }
}

#[cfg(test)]
mod testing {
    use super::*;
    use validate::assert_close;

    fn barcelona() -> Site {
        Site {
            latitude: 41.28,
            longitude: 2.07,
            altitude: 0.,
            standard_meridian: 0.,
        }
    }

    #[test]
    fn test_sun_position_summer_noon() {
        let date = Date {
            month: 6,
            day: 21,
            hour: 12.,
        };
        let p = SunPosition.solar_position(&barcelona(), date).unwrap();
        // 90 - latitude + 23.45
        assert!(p.elevation > 70. && p.elevation < 74.5, "elevation = {}", p.elevation);
        assert!(p.azimuth > 165. && p.azimuth < 205., "azimuth = {}", p.azimuth);
    }

    #[test]
    fn test_sun_position_morning_and_night() {
        let morning = Date {
            month: 6,
            day: 21,
            hour: 8.,
        };
        let p = SunPosition.solar_position(&barcelona(), morning).unwrap();
        assert!(p.is_up());
        assert!(p.azimuth > 45. && p.azimuth < 135., "azimuth = {}", p.azimuth);

        let night = Date {
            month: 6,
            day: 21,
            hour: 0.5,
        };
        let p = SunPosition.solar_position(&barcelona(), night).unwrap();
        assert!(!p.is_up());
    }

    #[test]
    fn test_ineichen() {
        let date = Date {
            month: 6,
            day: 21,
            hour: 12.,
        };
        let sun = SolarPosition::new(180., 60.);
        let sky = IneichenClearSky::default()
            .clear_sky(&barcelona(), date, &sun)
            .unwrap();

        assert!(sky.dni > 800. && sky.dni < 1000., "dni = {}", sky.dni);
        assert!(sky.dhi > 50. && sky.dhi < 150., "dhi = {}", sky.dhi);
        assert!(sky.ghi > 800. && sky.ghi < 950., "ghi = {}", sky.ghi);
        // The components add up
        assert_close!(sky.closure_residual(&sun), 0.0, 1e-6);
    }

    #[test]
    fn test_ineichen_turbidity() {
        let date = Date {
            month: 6,
            day: 21,
            hour: 12.,
        };
        let sun = SolarPosition::new(180., 60.);
        let clean = IneichenClearSky::new(2.)
            .clear_sky(&barcelona(), date, &sun)
            .unwrap();
        let hazy = IneichenClearSky::new(6.)
            .clear_sky(&barcelona(), date, &sun)
            .unwrap();
        assert!(clean.dni > hazy.dni);
        assert!(clean.ghi > hazy.ghi);

        let r = IneichenClearSky::new(0.).clear_sky(&barcelona(), date, &sun);
        assert!(matches!(r, Err(SourceError::InvalidValue { .. })));
    }

    #[test]
    fn test_ineichen_night() {
        let date = Date {
            month: 6,
            day: 21,
            hour: 0.,
        };
        let sky = IneichenClearSky::default()
            .clear_sky(&barcelona(), date, &SolarPosition::below_horizon())
            .unwrap();
        assert_eq!(sky, SkyIrradiance::dark());
    }

    #[test]
    fn test_pressure_ratio() {
        assert_close!(pressure_ratio(0.), 1.0);
        assert!(pressure_ratio(1500.) < 0.9);
    }

    #[test]
    fn test_cloud_sources() {
        let date = Date {
            month: 1,
            day: 1,
            hour: 12.,
        };
        assert_close!(FixedCloudCover(40.).cloud_cover(&barcelona(), date).unwrap(), 40.);
        assert!(FixedCloudCover(Float::NAN)
            .cloud_cover(&barcelona(), date)
            .is_err());
        assert!(NoCloudData.cloud_cover(&barcelona(), date).is_err());
    }

    #[test]
    fn test_measured_series() {
        let series = MeasuredSeries::from_json5(
            r#"[
                { month: 3, day: 14, hour: 10, ghi: 350, dni: 420 },
                { month: 3, day: 14, hour: 11, ghi: 480, dni: 610 },
            ]"#,
        )
        .unwrap();
        assert_eq!(series.len(), 2);

        let date = Date {
            month: 3,
            day: 14,
            hour: 11.2,
        };
        let m = series.measured(&barcelona(), date).unwrap();
        assert_close!(m.ghi, 480.);
        assert_close!(m.dni, 610.);

        let date = Date {
            month: 3,
            day: 15,
            hour: 11.,
        };
        assert!(matches!(
            series.measured(&barcelona(), date),
            Err(SourceError::Unavailable(_))
        ));
    }
}
