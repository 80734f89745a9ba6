use og_card::settings::get_config;
use og_card::{AppState, init_openapi_route};
use poem::listener::TcpListener;
use tracing::Level;

use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let log_level = Level::DEBUG;
    // Logging to File
    let file_appender = tracing_appender::rolling::daily("./logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(log_level)
        .init();

    tracing::info!("Initializing card service...");

    let config = get_config()?;
    tracing::info!("run with config: {:?}", config);

    let app_state = Arc::new(AppState::from_config(&config)?);
    tracing::info!(
        "Fonts loaded from {}, html_debug={}",
        config.fonts_dir().display(),
        app_state.html_debug
    );

    let app = init_openapi_route(app_state.clone(), &config);
    tracing::info!("run server on {}:{}", config.host, config.port);
    poem::Server::new(TcpListener::bind(format!(
        "{}:{}",
        config.host, config.port
    )))
    .run(app)
    .await?;

    Ok(())
}
