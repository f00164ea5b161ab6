/// Number of weather readings the model is trained on
pub const FEATURE_COUNT: usize = 7;

/// Describes one weather reading as presented in the form, the table and the chart
#[derive(Clone, Copy)]
pub struct Feature {
    pub key: &'static str,
    pub label: &'static str,
    pub name: &'static str,
    pub default: f64,
}

/// All features in the order the model was trained on.
/// Moving an entry here silently corrupts predictions.
pub static FEATURES: [Feature; FEATURE_COUNT] = [
    Feature { key: "pressure", label: "Pressure (hPa)", name: "Pressure", default: 1012.0 },
    Feature { key: "global_radiation", label: "Global Radiation", name: "Global Radiation", default: 350.0 },
    Feature { key: "temp_mean", label: "Mean Temperature (°C)", name: "Temp Mean", default: 28.0 },
    Feature { key: "temp_min", label: "Min Temperature (°C)", name: "Temp Min", default: 24.0 },
    Feature { key: "temp_max", label: "Max Temperature (°C)", name: "Temp Max", default: 32.0 },
    Feature { key: "wind_speed", label: "Wind Speed (km/h)", name: "Wind Speed", default: 5.0 },
    Feature { key: "wind_bearing", label: "Wind Bearing (°)", name: "Wind Bearing", default: 180.0 },
];

/// One set of weather readings, created per request and never mutated afterward
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeatherSample {
    pub pressure: f64,
    pub global_radiation: f64,
    pub temp_mean: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub wind_speed: f64,
    pub wind_bearing: f64,
}

impl WeatherSample {
    /// Builds a sample from values given in feature order
    ///
    /// # Arguments
    ///
    /// * 'values' - readings ordered as in FEATURES
    pub fn from_values(values: [f64; FEATURE_COUNT]) -> WeatherSample {
        let [pressure, global_radiation, temp_mean, temp_min, temp_max, wind_speed, wind_bearing] = values;

        WeatherSample { pressure, global_radiation, temp_mean, temp_min, temp_max, wind_speed, wind_bearing }
    }

    /// Returns the readings as a single row in feature order
    pub fn to_row(&self) -> [f64; FEATURE_COUNT] {
        [
            self.pressure,
            self.global_radiation,
            self.temp_mean,
            self.temp_min,
            self.temp_max,
            self.wind_speed,
            self.wind_bearing,
        ]
    }

    /// Pairs every reading with its feature description, in feature order
    pub fn features(&self) -> impl Iterator<Item = (&'static Feature, f64)> {
        FEATURES.iter().zip(self.to_row())
    }
}

impl Default for WeatherSample {
    fn default() -> Self {
        WeatherSample::from_values(FEATURES.map(|f| f.default))
    }
}
