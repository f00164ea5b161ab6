use log::{info, warn};
use crate::manager_model::errors::PredictionError;
use crate::manager_model::Regressor;
use crate::models::weather_sample::WeatherSample;

/// Outcome of the prediction step for one render of the page
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    NotRequested,
    Predicted(f64),
    Failed(String),
}

/// Runs the model on the given sample.
///
/// The sample is turned into a single row in training order and passed unmodified.
///
/// # Arguments
///
/// * 'model' - the loaded model
/// * 'sample' - weather readings to predict from
pub fn predict_energy(model: &dyn Regressor, sample: &WeatherSample) -> Result<f64, PredictionError> {
    let row = sample.to_row();

    model.predict(&row)
}

/// Runs a prediction and turns the result into something the presenter can show,
/// a failing model only affects the current request
///
/// # Arguments
///
/// * 'model' - the loaded model
/// * 'sample' - weather readings to predict from
pub fn run_prediction(model: &dyn Regressor, sample: &WeatherSample) -> Outcome {
    match predict_energy(model, sample) {
        Ok(value) => {
            info!("predicted {:.4} from {:?}", value, sample.to_row());
            Outcome::Predicted(value)
        },
        Err(e) => {
            warn!("prediction failed for {:?}: {}", sample.to_row(), e);
            Outcome::Failed(e.to_string())
        },
    }
}
