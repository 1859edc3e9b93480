//! Bookstore entry-point: loads settings, prepares the catalogue store and
//! serves the API, the views and the OpenAPI docs.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use color_eyre::eyre::{Context, Result, eyre};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use bookstore::bootstrap::{BookstoreSettings, open_catalogue_store};
use bookstore::inbound::http::health::HealthState;

use server::{build_http_state, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = BookstoreSettings::load_from_iter(std::env::args_os())
        .map_err(|error| eyre!("failed to load bookstore settings: {error}"))?;

    let store = open_catalogue_store(&settings)
        .await
        .wrap_err("failed to open the catalogue store")?;
    store
        .seed(&settings)
        .await
        .wrap_err("failed to seed the catalogue")?;

    let health_state = web::Data::new(HealthState::new());
    let bind_addr = settings.bind_addr();
    let server = create_server(
        health_state.clone(),
        build_http_state(&store),
        bind_addr,
    )
    .wrap_err_with(|| format!("failed to bind {bind_addr}"))?;
    info!(%bind_addr, "bookstore listening");

    let outcome = server.await;
    health_state.mark_unhealthy();
    store.shutdown().await;
    outcome.wrap_err("server terminated with an error")
}
