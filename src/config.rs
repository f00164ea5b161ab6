use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;

#[derive(Deserialize)]
pub struct WebServer {
    pub bind_address: String,
    pub port: u16,
}

#[derive(Deserialize)]
pub struct ModelParameters {
    pub model_file: String,
}

#[derive(Deserialize, Clone)]
#[serde(default)]
pub struct Page {
    pub title: String,
    pub subtitle: String,
    pub footer: String,
}

impl Default for Page {
    fn default() -> Self {
        Page {
            title: "Energy Consumption Prediction System".to_string(),
            subtitle: "Predict application energy usage based on weather conditions".to_string(),
            footer: "Final Year Project | Energy Prediction Using Machine Learning".to_string(),
        }
    }
}

#[derive(Deserialize)]
pub struct General {
    pub log_path: String,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

#[derive(Deserialize)]
pub struct Config {
    pub general: General,
    pub web_server: WebServer,
    pub model: ModelParameters,
    #[serde(default)]
    pub page: Page,
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {

    let toml = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&toml)?;

    if config.model.model_file.trim().is_empty() {
        return Err(ConfigError::from("model file must be given"));
    }

    Ok(config)
}

/// Returns the configuration path given on the command line as '--config=<path>',
/// or 'config.toml' if none was given
///
/// # Arguments
///
/// * 'args' - command line arguments, program name excluded
pub fn config_path<I: IntoIterator<Item = String>>(args: I) -> String {
    args.into_iter()
        .find_map(|a| a.strip_prefix("--config=").map(str::to_string))
        .unwrap_or_else(|| "config.toml".to_string())
}
