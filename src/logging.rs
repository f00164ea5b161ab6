use std::path::Path;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Handle;
use crate::config::General;
use crate::errors::LoggingError;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l:<5} {t} - {m}{n}";
const LOG_FILE: &str = "energy_predict.log";

/// Builds the log4rs configuration from the general section of the config file
///
/// # Arguments
///
/// * 'general' - log path, level and whether to also log to stdout
pub fn build_log_config(general: &General) -> Result<log4rs::Config, LoggingError> {
    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(Path::new(&general.log_path).join(LOG_FILE))?;

    let mut builder = log4rs::Config::builder()
        .appender(Appender::builder().build("file", Box::new(file)));
    let mut root = Root::builder().appender("file");

    if general.log_to_stdout {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();
        builder = builder.appender(Appender::builder().build("stdout", Box::new(stdout)));
        root = root.appender("stdout");
    }

    Ok(builder.build(root.build(general.log_level))?)
}

/// Sets up logging for the whole process, must be called once before anything is logged
///
/// # Arguments
///
/// * 'general' - log path, level and whether to also log to stdout
pub fn setup_logger(general: &General) -> Result<Handle, LoggingError> {
    let config = build_log_config(general)?;

    Ok(log4rs::init_config(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::LevelFilter;
    use tempfile::TempDir;

    #[test]
    fn builds_file_and_console_appenders() {
        let dir = TempDir::new().unwrap();
        let general = General {
            log_path: dir.path().to_str().unwrap().to_string(),
            log_level: LevelFilter::Warn,
            log_to_stdout: true,
        };

        let config = build_log_config(&general).unwrap();
        assert_eq!(config.appenders().len(), 2);
        assert_eq!(config.root().level(), LevelFilter::Warn);
        assert!(dir.path().join(LOG_FILE).exists());
    }

    #[test]
    fn stdout_appender_is_optional() {
        let dir = TempDir::new().unwrap();
        let general = General {
            log_path: dir.path().to_str().unwrap().to_string(),
            log_level: LevelFilter::Info,
            log_to_stdout: false,
        };

        let config = build_log_config(&general).unwrap();
        assert_eq!(config.appenders().len(), 1);
    }
}
