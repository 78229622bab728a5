use tracing::info;
use tracing_subscriber::EnvFilter;

use transit_server::adapter::TransitAdapter;
use transit_server::config::AppConfig;
use transit_server::navitia::NavitiaClient;
use transit_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let addr = config.bind_addr;

    let client = NavitiaClient::new(config.navitia)?;
    let state = AppState::new(TransitAdapter::new(client));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Transit server listening on http://{addr}");
    info!("API Endpoints:");
    info!("  GET  /health                        - Health check");
    info!("  GET  /api/stations/search?q=        - Station autocomplete");
    info!("  GET  /api/stations/nearby?lat=&lon= - Stations within 1 km");
    info!("  GET  /api/journeys?from=&to=        - Journey search");
    info!("  GET  /api/lines                     - Metro and RER lines");
    info!("  GET  /api/lines/:id/stations        - Stations on a line");

    axum::serve(listener, app).await?;
    Ok(())
}
