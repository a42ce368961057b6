use std::net::SocketAddr;
use tripdesk_api::{app, events::spawn_booking_logger, AppState};
use tripdesk_store::{Backend, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tripdesk_api=debug,tripdesk_ledger=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!("Starting Tripdesk API on port {}", config.server.port);

    let backend = Backend::from_config(&config)?;
    let _event_logger = spawn_booking_logger(&backend.bookings);
    let app = app(AppState::from(backend));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
