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

use crate::error::SourceError;
use crate::facade::MethodGains;
use crate::model::SolarGainModel;
use crate::orientation::{classify, Direction};
use crate::report::{serialize_date, MethodTotals};
use crate::sky::{SkyIrradiance, SolarPosition};
use crate::sources::{Measured, MeasuredIrradianceSource, SolarPositionSource};
use crate::Float;
use calendar::Date;
use serde::Serialize;

/// Days in the (non-leap) year used by [`calendar::Date`]
const DAYS_PER_YEAR: usize = 365;

/// How far back the comparison looks
const DAYS_BACK: usize = 7;

/// The same hour, seven days earlier. Dates in [`calendar::Date`] have no
/// year, so the first week of January wraps into the end of December.
pub fn week_before(date: Date) -> Date {
    let mut ret = date;
    ret.add_days(DAYS_PER_YEAR - DAYS_BACK);
    ret
}

/// Builds a full [`SkyIrradiance`] out of a measurement, deriving the
/// Diffuse Horizontal Irradiance as `ghi - cos(zenith) * dni`.
///
/// The result is never negative. When the sun is below the horizon
/// all the measured irradiance is considered diffuse.
pub fn diffuse_from_measurement(measured: &Measured, sun: &SolarPosition) -> SkyIrradiance {
    let cos_zenith = sun.zenith().to_radians().cos().max(0.0);
    let dhi = (measured.ghi - cos_zenith * measured.dni).max(0.0);
    SkyIrradiance {
        dni: measured.dni,
        dhi,
        ghi: measured.ghi,
    }
}

/// The gains a façade would have had with the measured irradiance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekPriorFacade {
    /// The name of the façade, if any
    pub name: Option<String>,

    /// Azimuth of the façade, in degrees
    pub azimuth: Float,

    /// Where the façade looks at
    pub direction: Direction,

    /// Gains calculated with both methods
    pub gains: MethodGains,
}

/// The result of the week-prior comparison
#[derive(Debug, Clone, Serialize)]
pub struct WeekPriorReport {
    /// The moment of the measurement
    #[serde(serialize_with = "serialize_date")]
    pub date: Date,

    /// Where the sun was at that moment
    pub solar_position: SolarPosition,

    /// Measured irradiance, with the derived diffuse component
    pub sky: SkyIrradiance,

    /// One entry per façade, in the order of the building
    pub facades: Vec<WeekPriorFacade>,

    /// Transmitted power of the whole building
    pub totals: MethodTotals,
}

impl SolarGainModel {
    /// Evaluates the building with the irradiance measured one week
    /// before `date`.
    ///
    /// Failing to locate the sun is an error. Missing measurements are not:
    /// the comparison is skipped and `Ok(None)` is returned, as it is when
    /// the measured Global Horizontal Irradiance is zero.
    pub fn evaluate_week_prior(
        &self,
        date: Date,
        position: &dyn SolarPositionSource,
        measurements: &dyn MeasuredIrradianceSource,
    ) -> Result<Option<WeekPriorReport>, SourceError> {
        let building = self.building();
        let prior = week_before(date);
        let sun = position.solar_position(&building.site, prior)?;

        let measured = match measurements.measured(&building.site, prior) {
            Ok(m) => m,
            Err(e) => {
                tracing::warn!(error = %e, "no measurement from a week before, skipping comparison");
                return Ok(None);
            }
        };
        if measured.ghi == 0.0 {
            tracing::warn!("measured GHI from a week before is zero, skipping comparison");
            return Ok(None);
        }

        let sky = diffuse_from_measurement(&measured, &sun);
        let options = building.irradiance_options();
        let mut totals = MethodTotals::default();
        let facades = building
            .facades
            .iter()
            .map(|f| {
                let gains = MethodGains::calc(&sky, &sun, f, building.solar_factor, &options);
                totals.add(&gains);
                WeekPriorFacade {
                    name: f.name.clone(),
                    azimuth: f.azimuth,
                    direction: classify(f.azimuth),
                    gains,
                }
            })
            .collect();

        tracing::debug!(
            model = totals.model,
            trigonometric = totals.trigonometric,
            "week-prior comparison done"
        );

        Ok(Some(WeekPriorReport {
            date: prior,
            solar_position: sun,
            sky,
            facades,
            totals,
        }))
    }
}

#[cfg(test)]
mod testing {
    use super::*;
    use crate::building::{Building, Facade, Site};
    use crate::sources::{MeasuredRecord, MeasuredSeries, SunPosition};
    use validate::assert_close;

    struct FixedSun(SolarPosition);
    impl SolarPositionSource for FixedSun {
        fn solar_position(&self, _site: &Site, _date: Date) -> Result<SolarPosition, SourceError> {
            Ok(self.0)
        }
    }

    struct NoSun;
    impl SolarPositionSource for NoSun {
        fn solar_position(&self, _site: &Site, _date: Date) -> Result<SolarPosition, SourceError> {
            Err(SourceError::Unavailable("ephemeris".into()))
        }
    }

    fn model() -> SolarGainModel {
        let building = Building {
            site: Site {
                latitude: 41.28,
                longitude: 2.07,
                altitude: 0.,
                standard_meridian: 0.,
            },
            facades: vec![Facade::new(180., 10.), Facade::new(0., 5.)],
            solar_factor: 0.37,
            min_elevation: 10.,
            albedo: 0.15,
        };
        SolarGainModel::new(building).unwrap()
    }

    fn series(ghi: Float) -> MeasuredSeries {
        MeasuredSeries::new(vec![MeasuredRecord {
            month: 6,
            day: 14,
            hour: 12.,
            ghi,
            dni: 700.,
        }])
    }

    fn date() -> Date {
        Date {
            month: 6,
            day: 21,
            hour: 12.,
        }
    }

    #[test]
    fn test_week_before() {
        let d = week_before(date());
        assert_eq!(d.month, 6);
        assert_eq!(d.day, 14);
        assert_close!(d.hour, 12.);

        let d = week_before(Date {
            month: 3,
            day: 3,
            hour: 8.,
        });
        assert_eq!((d.month, d.day), (2, 24));

        // Wraps around the year
        let d = week_before(Date {
            month: 1,
            day: 2,
            hour: 8.,
        });
        assert_eq!((d.month, d.day), (12, 26));
    }

    #[test]
    fn test_diffuse_from_measurement() {
        let m = Measured {
            ghi: 800.,
            dni: 700.,
        };
        let sun = SolarPosition::new(180., 60.);
        let sky = diffuse_from_measurement(&m, &sun);
        assert_close!(sky.dhi, 800. - 700. * (30. as Float).to_radians().cos(), 1e-6);
        assert_close!(sky.dni, 700.);
        assert_close!(sky.closure_residual(&sun), 0.0, 1e-6);

        // Never negative
        let m = Measured {
            ghi: 100.,
            dni: 900.,
        };
        assert_close!(diffuse_from_measurement(&m, &sun).dhi, 0.0);

        // Sun down: all diffuse
        let sky = diffuse_from_measurement(&m, &SolarPosition::below_horizon());
        assert_close!(sky.dhi, 100.);
    }

    #[test]
    fn test_evaluate_week_prior() {
        let model = model();
        let sun = FixedSun(SolarPosition::new(180., 70.));
        let report = model
            .evaluate_week_prior(date(), &sun, &series(850.))
            .unwrap()
            .unwrap();

        assert_eq!((report.date.month, report.date.day), (6, 14));
        assert_eq!(report.facades.len(), 2);
        assert_eq!(report.facades[0].direction, Direction::South);
        assert_eq!(report.facades[1].direction, Direction::North);

        let south = &report.facades[0].gains;
        let north = &report.facades[1].gains;
        assert!(south.model.transmitted_power > north.model.transmitted_power);

        let sum = south.trigonometric.transmitted_power + north.trigonometric.transmitted_power;
        assert_close!(report.totals.trigonometric, sum, 1e-9);
    }

    #[test]
    fn test_week_prior_is_skipped() {
        let model = model();
        let sun = FixedSun(SolarPosition::new(180., 70.));

        // Zero GHI
        let r = model.evaluate_week_prior(date(), &sun, &series(0.)).unwrap();
        assert!(r.is_none());

        // No measurement for that day
        let r = model
            .evaluate_week_prior(date(), &sun, &MeasuredSeries::default())
            .unwrap();
        assert!(r.is_none());
    }

    #[test]
    fn test_week_prior_needs_the_sun() {
        let model = model();
        assert!(model
            .evaluate_week_prior(date(), &NoSun, &series(850.))
            .is_err());
        assert!(model
            .evaluate_week_prior(date(), &SunPosition, &series(850.))
            .unwrap()
            .is_some());
    }
}
