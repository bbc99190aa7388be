//! # Maturity Compass HTTP Server
//!
//! Composition root: loads configuration, builds the catalog and the report
//! generator, and serves the API.
//!
//! ```bash
//! # Offline, with canned reports
//! MATURITY_COMPASS__AI__PROVIDER=mock maturity-compass
//!
//! # Gemini-backed reports
//! MATURITY_COMPASS__AI__GEMINI_API_KEY=... maturity-compass
//! ```

use std::process::ExitCode;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use tower_http::timeout::TimeoutLayer;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use maturity_compass::adapters::ai::{AiReportGenerator, GeminiConfig, GeminiProvider, MockAIProvider};
use maturity_compass::adapters::catalog::StaticIndustryCatalog;
use maturity_compass::adapters::http::{api_router, cors_layer, AppState};
use maturity_compass::adapters::validation::JsonReportValidator;
use maturity_compass::config::{AiConfig, AiProvider, AppConfig, ScoringConfig};
use maturity_compass::ports::{AIProvider, IndustryCatalog};

fn setup_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn build_catalog(config: &ScoringConfig) -> Result<StaticIndustryCatalog, String> {
    let catalog = match &config.catalog_path {
        Some(path) => StaticIndustryCatalog::from_path(path, config.weight_policy),
        None => StaticIndustryCatalog::embedded(config.weight_policy),
    };
    catalog.map_err(|e| format!("Invalid industry catalog: {}", e))
}

fn build_provider(config: &AiConfig) -> Result<Arc<dyn AIProvider>, String> {
    match config.provider {
        AiProvider::Mock => Ok(Arc::new(MockAIProvider::new())),
        AiProvider::Gemini => {
            let key = config.gemini_api_key.clone().unwrap_or_default();
            let gemini = GeminiConfig::new(key)
                .with_model(config.model.clone())
                .with_base_url(config.base_url.clone())
                .with_timeout(config.timeout())
                .with_max_retries(config.max_retries);
            GeminiProvider::new(gemini)
                .map(|p| Arc::new(p) as Arc<dyn AIProvider>)
                .map_err(|e| format!("Failed to create Gemini provider: {}", e))
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    setup_tracing(&config);

    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        return ExitCode::FAILURE;
    }

    let addr = match config.server.socket_addr() {
        Ok(addr) => addr,
        Err(e) => {
            error!(error = %e, "Invalid server address");
            return ExitCode::FAILURE;
        }
    };

    let catalog = match build_catalog(&config.scoring) {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => {
            error!(error = %e, "Startup failed");
            return ExitCode::FAILURE;
        }
    };

    let provider = match build_provider(&config.ai) {
        Ok(provider) => provider,
        Err(e) => {
            error!(error = %e, "Startup failed");
            return ExitCode::FAILURE;
        }
    };
    let provider_info = provider.provider_info();

    let generator = AiReportGenerator::new(provider, Arc::new(JsonReportValidator::new()))
        .with_temperature(config.ai.temperature);

    let state = AppState::new(catalog.clone(), Arc::new(generator))
        .with_unrated_policy(config.scoring.unrated_policy);

    let router = api_router(state)
        .layer(DefaultBodyLimit::max(config.server.max_body_bytes))
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server.cors_origins_list()));

    info!(
        %addr,
        environment = ?config.server.environment,
        provider = %provider_info.name,
        model = %provider_info.model,
        industries = catalog.industries().len(),
        "Starting Maturity Compass server"
    );

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, %addr, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for shutdown signal");
        }
        info!("Shutdown signal received");
    };

    if let Err(e) = axum::serve(listener, router).with_graceful_shutdown(shutdown).await {
        error!(error = %e, "Server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
