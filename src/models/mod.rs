pub mod model_artifact;
pub mod weather_sample;
