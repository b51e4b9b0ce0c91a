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
use facade_gain::{
    Building, Direction, FixedCloudCover, IneichenClearSky, Method, NoCloudData, Sky,
    SolarGainModel, SunPosition,
};
use validate::assert_close;

/// A box in Barcelona (GMT + 1), with one façade per cardinal direction
fn barcelona() -> SolarGainModel {
    let building = Building::from_json5(
        r#"{
            site: {
                latitude: 41.28,
                longitude: 2.07,
                standard_meridian: 15,
            },
            solar_factor: 0.4,
            facades: [
                { name: "north", azimuth: 0, glazing_area: 20 },
                { name: "east", azimuth: 90, glazing_area: 20 },
                { name: "south", azimuth: 180, glazing_area: 20 },
                { name: "west", azimuth: 270, glazing_area: 20 },
            ],
        }"#,
    )
    .unwrap();
    SolarGainModel::new(building).unwrap()
}

fn power(model: &SolarGainModel, hour: f64, name: &str, method: Method) -> f64 {
    let date = Date {
        month: 6,
        day: 21,
        hour: hour as facade_gain::Float,
    };
    let report = model
        .evaluate_at(date, &SunPosition, &IneichenClearSky::default(), &NoCloudData)
        .unwrap();
    let facade = report
        .facades
        .iter()
        .find(|f| f.name.as_deref() == Some(name))
        .unwrap();
    facade.gain(method, Sky::Clear).transmitted_power as f64
}

#[test]
fn validate_directions() {
    let model = barcelona();
    let date = Date {
        month: 6,
        day: 21,
        hour: 12.,
    };
    let report = model
        .evaluate_at(date, &SunPosition, &IneichenClearSky::default(), &NoCloudData)
        .unwrap();
    let directions: Vec<Direction> = report.facades.iter().map(|f| f.direction).collect();
    assert_eq!(
        directions,
        vec![
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West
        ]
    );
}

#[test]
fn validate_sun_path() {
    let model = barcelona();
    for method in Method::ALL {
        // Morning sun on the East
        let east = power(&model, 9., "east", method);
        let west = power(&model, 9., "west", method);
        assert!(east > west, "{:?}: east {} vs west {}", method, east, west);

        // Afternoon sun on the West
        let east = power(&model, 17., "east", method);
        let west = power(&model, 17., "west", method);
        assert!(west > east, "{:?}: east {} vs west {}", method, east, west);

        // Around solar noon, the South gets more than the North
        let south = power(&model, 13., "south", method);
        let north = power(&model, 13., "north", method);
        assert!(south > north, "{:?}: south {} vs north {}", method, south, north);
    }
}

#[test]
fn validate_night() {
    let model = barcelona();
    for hour in [0.5, 2., 4., 23.] {
        for name in ["north", "east", "south", "west"] {
            for method in Method::ALL {
                assert_close!(power(&model, hour, name, method), 0.0);
            }
        }
    }
}

#[test]
fn validate_totals_and_clouds() {
    let model = barcelona();
    let date = Date {
        month: 6,
        day: 21,
        hour: 10.,
    };

    let clear = model
        .evaluate_at(date, &SunPosition, &IneichenClearSky::default(), &NoCloudData)
        .unwrap();
    let overcast = model
        .evaluate_at(
            date,
            &SunPosition,
            &IneichenClearSky::default(),
            &FixedCloudCover(100.),
        )
        .unwrap();

    // Without cloud data, both skies are the same
    for method in Method::ALL {
        assert_close!(
            clear.totals.get(method, Sky::Clear),
            clear.totals.get(method, Sky::Cloudy),
            1e-9
        );
    }

    // Full cloud cover removes the beam only
    assert_close!(overcast.cloudy_sky.dni, 0.0);
    assert_close!(overcast.cloudy_sky.dhi, clear.clear_sky.dhi, 1e-9);
    for method in Method::ALL {
        let sum: facade_gain::Float = overcast
            .facades
            .iter()
            .map(|f| f.gain(method, Sky::Cloudy).transmitted_power)
            .sum();
        assert_close!(overcast.totals.get(method, Sky::Cloudy), sum, 1e-6);
        assert!(overcast.totals.get(method, Sky::Cloudy) < clear.totals.get(method, Sky::Clear));
        assert!(overcast.totals.get(method, Sky::Cloudy) > 0.0);
    }
}

#[test]
fn validate_report_serializes() {
    let model = barcelona();
    let date = Date {
        month: 3,
        day: 21,
        hour: 11.,
    };
    let report = model
        .evaluate_at(
            date,
            &SunPosition,
            &IneichenClearSky::default(),
            &FixedCloudCover(25.),
        )
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["date"]["month"], 3);
    assert_eq!(json["facades"].as_array().unwrap().len(), 4);
    assert_eq!(json["facades"][2]["direction"], "South");
    assert!(json["totals"]["clear"]["model"].as_f64().unwrap() > 0.0);
    assert!(json["totals"]["cloudy"]["trigonometric"].is_number());
}
