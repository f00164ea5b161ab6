use serde::Deserialize;

#[derive(Deserialize)]
pub struct Scaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// On-disk representation of a trained linear regression model
#[derive(Deserialize)]
pub struct ModelArtifact {
    #[serde(default)]
    pub target: Option<String>,
    pub feature_names: Vec<String>,
    #[serde(default)]
    pub scaler: Option<Scaler>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}
