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

use calendar::Date;
use clap::Parser;
use facade_gain::context::validate_date;
use facade_gain::sources::CloudCoverSource;
use facade_gain::{
    Building, FixedCloudCover, IneichenClearSky, MeasuredSeries, Method, NoCloudData,
    SolarGainModel, SunPosition, WeekPriorReport,
};
use facade_gain::{Float, Sky};
use std::error::Error;
use tracing_subscriber::EnvFilter;

/// Estimates the solar gains through the glazing of the façades of a building
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Inputs {
    /// The JSON5 file describing the building
    #[arg(short, long)]
    input: String,

    /// Overrides the latitude of the site, in degrees
    #[arg(long, env = "LAT", allow_hyphen_values = true)]
    latitude: Option<Float>,

    /// Overrides the longitude of the site, in degrees (East is positive)
    #[arg(long, env = "LONG", allow_hyphen_values = true)]
    longitude: Option<Float>,

    /// Month of the year (1 to 12)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=12))]
    month: u8,

    /// Day of the month
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=31))]
    day: u8,

    /// Hour of the day, in standard time (e.g., 13.5)
    #[arg(long)]
    hour: Float,

    /// Percentage of the sky covered by clouds. Clear if not given.
    #[arg(short, long)]
    cloud: Option<Float>,

    /// Linke turbidity used by the clear-sky model
    #[arg(short, long, default_value_t = 3.0)]
    turbidity: Float,

    /// A JSON5 file with measured irradiance, for comparing against a week before
    #[arg(long)]
    measured: Option<String>,
}

fn run(args: Inputs) -> Result<(), Box<dyn Error>> {
    let mut building = Building::from_file(&args.input)?;
    if let Some(lat) = args.latitude {
        building.site.latitude = lat;
    }
    if let Some(lon) = args.longitude {
        building.site.longitude = lon;
    }
    let model = SolarGainModel::new(building)?;

    let date = Date {
        month: args.month,
        day: args.day,
        hour: args.hour,
    };
    validate_date(&date)?;

    let clouds: Box<dyn CloudCoverSource> = match args.cloud {
        Some(c) => Box::new(FixedCloudCover(c)),
        None => Box::new(NoCloudData),
    };
    let clear_sky = IneichenClearSky::new(args.turbidity);

    tracing::info!(
        input = %args.input,
        facades = model.building().facades.len(),
        "evaluating building"
    );
    let report = model.evaluate_at(date, &SunPosition, &clear_sky, clouds.as_ref())?;
    for method in Method::ALL {
        for sky in Sky::ALL {
            tracing::info!(
                ?method,
                ?sky,
                power = report.totals.get(method, sky),
                "total transmitted power (W)"
            );
        }
    }
    println!("{}", serde_json::to_string_pretty(&report)?);

    if let Some(path) = args.measured {
        match week_prior(&model, date, &path) {
            Some(prior) => println!("{}", serde_json::to_string_pretty(&prior)?),
            None => tracing::warn!(file = %path, "week-prior comparison not available"),
        }
    }

    Ok(())
}

/// Compares against the measurements of a week before. This comparison
/// is informative, so nothing that goes wrong here stops the program.
fn week_prior(model: &SolarGainModel, date: Date, path: &str) -> Option<WeekPriorReport> {
    let measurements = match MeasuredSeries::from_file(path) {
        Ok(m) => m,
        Err(e) => {
            tracing::warn!(file = %path, error = %e, "could not load measurements");
            return None;
        }
    };
    match model.evaluate_week_prior(date, &SunPosition, &measurements) {
        Ok(prior) => prior,
        Err(e) => {
            tracing::warn!(error = %e, "week-prior comparison failed");
            None
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Inputs::parse();
    if let Err(e) = run(args) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod testing {
    use super::*;
    use validate::assert_close;

    fn model() -> SolarGainModel {
        let building = Building::from_json5(
            r#"{
                site: { latitude: 41.28, longitude: 2.07 },
                facades: [{ azimuth: 180, glazing_area: 10 }],
            }"#,
        )
        .unwrap();
        SolarGainModel::new(building).unwrap()
    }

    fn date() -> Date {
        Date {
            month: 6,
            day: 21,
            hour: 12.,
        }
    }

    fn write(name: &str, content: &str) -> String {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_week_prior_missing_file() {
        assert!(week_prior(&model(), date(), "./this/file/does_not_exist.json5").is_none());
    }

    #[test]
    fn test_week_prior_malformed_file() {
        let path = write("simple_facade_gain_malformed.json5", "[{ month: 6, day: ");
        assert!(week_prior(&model(), date(), &path).is_none());
    }

    #[test]
    fn test_week_prior_from_file() {
        let path = write(
            "simple_facade_gain_measured.json5",
            "[{ month: 6, day: 14, hour: 12, ghi: 820, dni: 700 }]",
        );
        let prior = week_prior(&model(), date(), &path).unwrap();
        assert_eq!((prior.date.month, prior.date.day), (6, 14));
        assert_close!(prior.sky.ghi, 820.);
    }
}
