use std::fmt;
use std::fmt::Formatter;
use thiserror::Error;
use crate::manager_model::errors::ModelError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("ConfigError::File: {0}")]
    File(#[from] std::io::Error),
    #[error("ConfigError::Document: {0}")]
    Document(#[from] toml::de::Error),
    #[error("ConfigError::Value: {0}")]
    Value(String),
}
impl From<&str> for ConfigError {
    fn from(e: &str) -> Self { ConfigError::Value(e.to_string()) }
}

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("LoggingError::File: {0}")]
    File(#[from] std::io::Error),
    #[error("LoggingError::Config: {0}")]
    Config(#[from] log4rs::config::runtime::ConfigErrors),
    #[error("LoggingError::Init: {0}")]
    Init(#[from] log::SetLoggerError),
}

#[derive(Error, Debug)]
pub enum PresenterError {
    #[error("PresenterError::Template: {0}")]
    Template(#[from] minijinja::Error),
}

pub struct EnergyPredictInitError(pub String);

impl fmt::Display for EnergyPredictInitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "EnergyPredictInitError: {}", self.0)
    }
}
impl fmt::Debug for EnergyPredictInitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
impl std::error::Error for EnergyPredictInitError {}

impl From<ModelError> for EnergyPredictInitError {
    fn from(e: ModelError) -> Self {
        EnergyPredictInitError(e.to_string())
    }
}
impl From<PresenterError> for EnergyPredictInitError {
    fn from(e: PresenterError) -> Self {
        EnergyPredictInitError(e.to_string())
    }
}
