use log::warn;
use serde::Deserialize;
use crate::models::weather_sample::{WeatherSample, FEATURES};

/// Raw form state as submitted by the browser, one optional text value per field
#[derive(Deserialize, Default, Debug, Clone)]
pub struct SampleForm {
    pub pressure: Option<String>,
    pub global_radiation: Option<String>,
    pub temp_mean: Option<String>,
    pub temp_min: Option<String>,
    pub temp_max: Option<String>,
    pub wind_speed: Option<String>,
    pub wind_bearing: Option<String>,
}

impl SampleForm {
    fn raw_values(&self) -> [&Option<String>; 7] {
        [
            &self.pressure,
            &self.global_radiation,
            &self.temp_mean,
            &self.temp_min,
            &self.temp_max,
            &self.wind_speed,
            &self.wind_bearing,
        ]
    }
}

/// Reads the current form state into a weather sample.
///
/// There is no range validation, any number is accepted as is. Missing or blank fields take
/// their default value, and so do fields that can't be read as a number.
///
/// # Arguments
///
/// * 'form' - the submitted form state
pub fn collect_sample(form: &SampleForm) -> WeatherSample {
    let mut values = FEATURES.map(|f| f.default);

    for (i, raw) in form.raw_values().into_iter().enumerate() {
        let Some(raw) = raw.as_deref().map(str::trim).filter(|r| !r.is_empty()) else {
            continue;
        };
        match raw.parse::<f64>() {
            Ok(v) => values[i] = v,
            Err(_) => warn!("ignoring unreadable value '{}' for {}, using default", raw, FEATURES[i].key),
        }
    }

    WeatherSample::from_values(values)
}
