use std::env;
use anyhow::Context;
use log::{error, info};
use crate::config::{config_path, load_config};
use crate::initialization::init;
use crate::logging::setup_logger;
use crate::server::serve;

mod config;
mod errors;
mod initialization;
mod input;
mod logging;
mod manager_model;
mod models;
mod predictor;
mod presenter;
mod server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = config_path(env::args().skip(1));
    let config = load_config(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path))?;

    setup_logger(&config.general).context("failed to set up logging")?;

    let state = match init(&config) {
        Ok(state) => state,
        Err(e) => {
            error!("startup aborted: {}", e);
            return Err(e.into());
        }
    };

    let bind_addr = format!("{}:{}", config.web_server.bind_address, config.web_server.port);
    serve(state, &bind_addr).await
        .with_context(|| format!("server error on {}", bind_addr))?;

    info!("server stopped");
    Ok(())
}
