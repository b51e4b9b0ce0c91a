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

#![deny(missing_docs)]

//! Estimates the solar heat that makes it through the glazing of the
//! façades of a building at a certain moment.
//!
//! * **Sky conditions**: the position of the sun, the clear-sky irradiance and
//! the cloud cover are gathered once into an [`EvaluationContext`]. Where they
//! come from is up to the user (see the [`sources`] module); sensible
//! defaults ([`SunPosition`], [`IneichenClearSky`]) are included.
//! * **Plane of array irradiance**: each façade is vertical, and the irradiance
//! on it is calculated with two independent methods ([`Method::Model`] and
//! [`Method::Trigonometric`]), under a clear and a cloudy sky. The results of
//! the methods are reported side by side, never merged.
//! * **Solar gains**: the incident irradiance is multiplied by the solar factor
//! of the glazing and by its area, and then added over the whole building.
//!
//! ```no_run
//! use facade_gain::{Building, SolarGainModel, SunPosition, IneichenClearSky, FixedCloudCover};
//! use calendar::Date;
//!
//! let building = Building::from_file("building.json5").unwrap();
//! let model = SolarGainModel::new(building).unwrap();
//! let date = Date { month: 6, day: 21, hour: 12. };
//! let report = model
//!     .evaluate_at(date, &SunPosition, &IneichenClearSky::default(), &FixedCloudCover(30.))
//!     .unwrap();
//! println!("{}", report.totals.clear.model);
//! ```

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(feature = "float")]
pub type Float = f32;

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(not(feature = "float"))]
pub type Float = f64;

/// The building, its site and its façades
pub mod building;

/// Cloud cover and its effect on the direct irradiance
pub mod cloud;

/// The sky conditions shared by every façade
pub mod context;

/// Errors
pub mod error;

/// Solar gains of a single façade
pub mod facade;

/// Compares the gains of the building against what the measured
/// irradiance of one week before would have produced.
pub mod history;

/// Irradiance on vertical surfaces.
///
/// Two independent calculations are offered, and they are meant to be
/// reported side by side:
///
/// * [`Method::Model`] is an isotropic-sky transposition: the beam is
///   projected through the angle of incidence, and the sky and the ground are
///   seen through the view factors of the (vertical) surface.
/// * [`Method::Trigonometric`] is a closed-form decomposition that is easy to
///   audit by hand. Its diffuse term grows with the solar elevation and its
///   ground term is weighted by the elevation instead of the tilt.
pub mod irradiance;

/// The main export of this module: a model that evaluates
/// whole buildings.
pub mod model;

/// Compass directions
pub mod orientation;

/// Building-level results
pub mod report;

/// Solar position and sky irradiance
pub mod sky;

/// The data the calculations need from the outside world: where the sun is,
/// how much irradiance a clear sky delivers, how cloudy it is and (for
/// comparisons) what was actually measured.
///
/// Each one is a trait, so that the calculations do not care about where the
/// data comes from.
pub mod sources;

pub use building::{Building, Facade, Site};
pub use cloud::CloudFraction;
pub use context::EvaluationContext;
pub use error::{ConfigurationError, SourceError};
pub use facade::{FacadeReport, GainResult, MethodGains, Sky};
pub use history::WeekPriorReport;
pub use irradiance::Method;
pub use model::SolarGainModel;
pub use orientation::Direction;
pub use report::{BuildingReport, BuildingTotals, MethodTotals};
pub use sky::{SkyIrradiance, SolarPosition};
pub use sources::{
    FixedCloudCover, IneichenClearSky, MeasuredSeries, NoCloudData, SunPosition,
};
