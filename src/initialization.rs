use std::sync::Arc;
use log::info;
use crate::config::Config;
use crate::errors::EnergyPredictInitError;
use crate::manager_model::LinearModel;
use crate::presenter::Presenter;
use crate::server::AppState;

/// Loads the model and compiles the page template.
///
/// Any failure here is fatal, the server must not start without a working model.
///
/// # Arguments
///
/// * 'config' - the loaded configuration
pub fn init(config: &Config) -> Result<AppState, EnergyPredictInitError> {
    info!("energy-predict version: {}", env!("CARGO_PKG_VERSION"));

    let model = LinearModel::load(&config.model.model_file)?;
    info!("model loaded from {} (target: {})", config.model.model_file, model.target());

    let presenter = Presenter::new(config.page.clone())?;

    Ok(AppState { model: Arc::new(model), presenter: Arc::new(presenter) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_for(model_file: &str) -> Config {
        let toml = format!(r#"
[general]
log_path = "logs/"
log_level = "info"
log_to_stdout = true

[web_server]
bind_address = "127.0.0.1"
port = 8501

[model]
model_file = "{}"
"#, model_file);
        toml::from_str(&toml).unwrap()
    }

    #[test]
    fn missing_model_is_fatal() {
        let config = config_for("/nonexistent/energy_model.json");
        let Err(err) = init(&config) else {
            panic!("startup must fail without a model");
        };
        assert!(err.to_string().contains("NotFound"));
    }

    #[test]
    fn corrupt_model_is_fatal() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{\"coefficients\": [1, 2").unwrap();
        let config = config_for(file.path().to_str().unwrap());
        assert!(init(&config).is_err());
    }

    #[test]
    fn sample_model_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/resources/energy_model.json");
        let state = init(&config_for(path)).unwrap();
        let row = crate::models::weather_sample::WeatherSample::default().to_row();
        assert!(state.model.predict(&row).unwrap().is_finite());
    }
}
