pub mod errors;

use std::fs;
use std::path::Path;
use crate::manager_model::errors::{ModelError, PredictionError};
use crate::models::model_artifact::{ModelArtifact, Scaler};
use crate::models::weather_sample::FEATURES;

/// The single capability the application needs from a trained model.
///
/// Implementations are loaded once and then shared read only between all requests.
pub trait Regressor: Send + Sync {
    /// Returns the predicted value for one row of features
    ///
    /// # Arguments
    ///
    /// * 'row' - feature values in training order
    fn predict(&self, row: &[f64]) -> Result<f64, PredictionError>;
}

/// Linear regression with optional standardisation of the input features
pub struct LinearModel {
    target: String,
    scaler: Option<Scaler>,
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LinearModel {
    /// Loads and validates a model artifact from disk
    ///
    /// The artifact must name its features in exactly the order the weather sample produces
    /// them, otherwise loading fails rather than letting predictions run on transposed input.
    ///
    /// # Arguments
    ///
    /// * 'model_file' - path to the json model artifact
    pub fn load(model_file: &str) -> Result<LinearModel, ModelError> {
        let path = Path::new(model_file);
        if !path.exists() {
            return Err(ModelError::NotFound(model_file.to_string()));
        }

        let json = fs::read_to_string(path)?;
        let artifact: ModelArtifact = serde_json::from_str(&json)?;

        LinearModel::from_artifact(artifact)
    }

    /// Validates an artifact and turns it into a usable model
    ///
    /// # Arguments
    ///
    /// * 'artifact' - the deserialized artifact
    pub fn from_artifact(artifact: ModelArtifact) -> Result<LinearModel, ModelError> {
        let width = artifact.coefficients.len();

        if artifact.feature_names.len() != width {
            return Err(ModelError::Inconsistent(format!(
                "{} feature names but {} coefficients", artifact.feature_names.len(), width)));
        }

        let expected = FEATURES.iter().map(|f| f.key).collect::<Vec<&str>>();
        if artifact.feature_names.iter().map(String::as_str).ne(expected.iter().copied()) {
            return Err(ModelError::Inconsistent(format!(
                "feature order {:?} does not match {:?}", artifact.feature_names, expected)));
        }

        if let Some(scaler) = &artifact.scaler {
            if scaler.mean.len() != width || scaler.scale.len() != width {
                return Err(ModelError::Inconsistent("scaler length mismatch".to_string()));
            }
            if scaler.scale.iter().any(|s| *s == 0.0) {
                return Err(ModelError::Inconsistent("scaler has zero scale".to_string()));
            }
        }

        let all_finite = artifact.coefficients.iter()
            .chain(artifact.scaler.iter().flat_map(|s| s.mean.iter().chain(s.scale.iter())))
            .chain(std::iter::once(&artifact.intercept))
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(ModelError::Inconsistent("model parameters must be finite".to_string()));
        }

        Ok(LinearModel {
            target: artifact.target.unwrap_or_else(|| "prediction".to_string()),
            scaler: artifact.scaler,
            coefficients: artifact.coefficients,
            intercept: artifact.intercept,
        })
    }

    /// Name of the predicted quantity
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Regressor for LinearModel {
    fn predict(&self, row: &[f64]) -> Result<f64, PredictionError> {
        if row.len() != self.coefficients.len() {
            return Err(PredictionError::ShapeMismatch { expected: self.coefficients.len(), actual: row.len() });
        }

        let mut result = self.intercept;
        for (i, (x, c)) in row.iter().zip(&self.coefficients).enumerate() {
            let x = match &self.scaler {
                Some(s) => (x - s.mean[i]) / s.scale[i],
                None => *x,
            };
            result += c * x;
        }

        if result.is_finite() {
            Ok(result)
        } else {
            Err(PredictionError::NonFinite(result))
        }
    }
}
