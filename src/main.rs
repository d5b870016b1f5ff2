use std::net::SocketAddr;

use dioxus_logger::tracing;
use recruit::server::{config::Config, error::Error, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    if let Err(e) = dioxus_logger::init(tracing::Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Error> {
    let esi_client = startup::build_esi_client(&config)?;
    let gsf_client = startup::build_gsf_client(&config)?;
    let session = startup::connect_to_session(&config).await?;
    let db = startup::connect_to_database(&config).await?;

    let mut state =
        AppState::new(db, esi_client).with_max_number_per_page(config.max_number_per_page);
    match gsf_client {
        Some(gsf_client) => state = state.with_gsf_client(gsf_client),
        None => tracing::warn!("GSF_BLACKLIST_URL is not set, GSF blacklist checks are skipped"),
    }

    let app = router::routes().with_state(state).layer(session);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
