//! # HTTP Chain Server - Entry Point
//! src/main.rs
//!
//! Parsea la configuración, inicializa el logging, abre el puerto y atiende
//! conexiones hasta que `accept` falle. Un error al abrir el puerto termina
//! el proceso con código distinto de cero.

use anyhow::{anyhow, Context};
use http_chain_server::config::Config;
use http_chain_server::logging;
use http_chain_server::server::Server;

fn main() -> anyhow::Result<()> {
    let config = Config::new();
    config.validate().map_err(|e| anyhow!(e))?;

    logging::init(&config.log_level);

    tracing::info!(
        address = %config.address(),
        directory = %config.directory.display(),
        buffer_size = config.buffer_size,
        "starting server"
    );

    let server = Server::bind(&config).context("Failed to bind to port")?;
    server.run()?;

    Ok(())
}
