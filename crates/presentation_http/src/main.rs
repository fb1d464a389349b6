//! ZipWeather HTTP Server
//!
//! Main entry point for the lookup page and API.

use std::{sync::Arc, time::Duration};

use application::{LocationImageService, WeatherLookupService};
use infrastructure::{
    AppConfig, GeocodingAdapter, ImageSearchAdapter, LogFormat, ReverseGeocodingAdapter,
    TemplateEngine, WeatherAdapter, init_tracing,
};
use presentation_http::{SecurityHeadersLayer, routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration before tracing so the log format can be honoured
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    let log_format = config.server.log_format.parse().unwrap_or(LogFormat::Text);
    init_tracing(log_format).map_err(|e| anyhow::anyhow!("{e}"))?;

    info!("ZipWeather v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = load_error {
        warn!("Failed to load config, using defaults: {}", e);
    }

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        reverse_geocoding = config.reverse_geocoding.enabled,
        image_search = config.image_search.is_enabled(),
        "Configuration loaded"
    );

    let lookup = build_lookup_service(&config)?;
    let templates =
        TemplateEngine::new().map_err(|e| anyhow::anyhow!("Failed to load templates: {e}"))?;

    let state = AppState::new(lookup, templates);
    let app = routes::create_router(state);

    // Configure CORS layer
    let app = if config.server.cors_enabled {
        app.layer(cors_layer(&config.server.allowed_origins))
    } else {
        app
    };

    let app = app
        .layer(SecurityHeadersLayer::new())
        .layer(TraceLayer::new_for_http());

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wire the adapters into the lookup service
fn build_lookup_service(config: &AppConfig) -> anyhow::Result<WeatherLookupService> {
    let geocoding = GeocodingAdapter::with_config(&config.geocoding)
        .map_err(|e| anyhow::anyhow!("Failed to initialize geocoding: {e}"))?;
    let weather = WeatherAdapter::with_config(config.weather.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize weather: {e}"))?;

    let mut service = WeatherLookupService::new(Arc::new(geocoding), Arc::new(weather));

    if config.reverse_geocoding.enabled {
        let reverse = ReverseGeocodingAdapter::with_config(&config.reverse_geocoding)
            .map_err(|e| anyhow::anyhow!("Failed to initialize reverse geocoding: {e}"))?;
        service = service.with_reverse_geocoding(Arc::new(reverse));
    }

    match ImageSearchAdapter::from_config(&config.image_search)
        .map_err(|e| anyhow::anyhow!("Failed to initialize image search: {e}"))?
    {
        Some(images) => {
            service = service.with_images(LocationImageService::new(Arc::new(images)));
        },
        None => info!("No image search access key configured, photos disabled"),
    }

    Ok(service)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use axum::http::{HeaderValue, Method};
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET])
            .allow_headers(Any)
    }
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("Waiting up to {:?} for connections to close...", timeout);
}
