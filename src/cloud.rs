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
use crate::sources::CloudCoverSource;
use crate::Float;
use calendar::Date;
use serde::Serialize;

/// Fraction of the sky covered by clouds, as a percentage.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CloudFraction(Float);

impl CloudFraction {
    /// Builds a `CloudFraction` from a percentage. Values are clamped
    /// into `[0, 100]`; anything that is not a number is a clear sky.
    pub fn new(percent: Float) -> Self {
        if percent.is_nan() {
            return Self::clear();
        }
        Self(percent.clamp(0., 100.))
    }

    /// No clouds at all
    pub fn clear() -> Self {
        Self(0.0)
    }

    /// The percentage of the sky covered by clouds
    pub fn percent(&self) -> Float {
        self.0
    }
}

/// Attenuates the Direct Normal Irradiance by the cloud cover:
/// `dni * (1 - cloud / 100)`
pub fn correct_dni(dni: Float, cloud: CloudFraction) -> Float {
    dni * (1. - cloud.percent() / 100.)
}

/// Asks `source` for the cloud cover. Failures are not fatal: they are
/// logged and a clear sky is assumed.
pub fn cloud_fraction_or_clear(
    source: &dyn CloudCoverSource,
    site: &Site,
    date: Date,
) -> CloudFraction {
    match source.cloud_cover(site, date) {
        Ok(percent) => CloudFraction::new(percent),
        Err(e) => {
            tracing::warn!(error = %e, "cloud cover unavailable, assuming a clear sky");
            CloudFraction::clear()
        }
    }
}
