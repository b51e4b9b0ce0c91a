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

use crate::building::Building;
use crate::context::EvaluationContext;
use crate::error::{ConfigurationError, SourceError};
use crate::facade::{evaluate_facade, FacadeReport};
use crate::report::{BuildingReport, BuildingTotals};
use crate::sources::{ClearSkySource, CloudCoverSource, SolarPositionSource};
use calendar::Date;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The main model
pub struct SolarGainModel {
    /// The building being evaluated. It is always valid.
    building: Building,
}

impl SolarGainModel {
    /// Builds a new model. The building is validated here, so nothing
    /// is ever calculated for an invalid building.
    pub fn new(building: Building) -> Result<Self, ConfigurationError> {
        building.validate()?;
        Ok(Self { building })
    }

    /// The building being evaluated
    pub fn building(&self) -> &Building {
        &self.building
    }

    /// Gathers the sky conditions at a certain date
    pub fn context(
        &self,
        date: Date,
        position: &dyn SolarPositionSource,
        clear_sky: &dyn ClearSkySource,
        clouds: &dyn CloudCoverSource,
    ) -> Result<EvaluationContext, SourceError> {
        EvaluationContext::from_sources(&self.building.site, date, position, clear_sky, clouds)
    }

    /// Calculates the solar gains of every façade, and the totals.
    pub fn evaluate(&self, ctx: &EvaluationContext) -> BuildingReport {
        let facades = self.evaluate_facades(ctx);
        let totals = BuildingTotals::from_facades(&facades);

        tracing::debug!(
            clear_model = totals.clear.model,
            clear_trigonometric = totals.clear.trigonometric,
            cloudy_model = totals.cloudy.model,
            cloudy_trigonometric = totals.cloudy.trigonometric,
            "building evaluated"
        );

        BuildingReport {
            date: ctx.date,
            solar_position: ctx.solar_position,
            clear_sky: ctx.sky,
            cloudy_sky: ctx.cloudy_sky(),
            cloud: ctx.cloud,
            closure_residual: ctx.sky.closure_residual(&ctx.solar_position),
            facades,
            totals,
        }
    }

    /// Gathers the sky conditions at `date` and evaluates the building
    pub fn evaluate_at(
        &self,
        date: Date,
        position: &dyn SolarPositionSource,
        clear_sky: &dyn ClearSkySource,
        clouds: &dyn CloudCoverSource,
    ) -> Result<BuildingReport, SourceError> {
        let ctx = self.context(date, position, clear_sky, clouds)?;
        Ok(self.evaluate(&ctx))
    }

    fn evaluate_facades(&self, ctx: &EvaluationContext) -> Vec<FacadeReport> {
        let solar_factor = self.building.solar_factor;
        let options = self.building.irradiance_options();

        #[cfg(feature = "parallel")]
        let facades = self.building.facades.par_iter();
        #[cfg(not(feature = "parallel"))]
        let facades = self.building.facades.iter();

        facades
            .map(|f| evaluate_facade(f, ctx, solar_factor, &options))
            .collect()
    }
}
