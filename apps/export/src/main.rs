mod config;
mod errors;
mod export;
mod models;
mod render;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::export::convert_file;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume-export v{}", env!("CARGO_PKG_VERSION"));

    // One-shot conversion: RESUME_INPUT → OUTPUT_DIR/resume.{md,html}
    if let Some(input) = &config.input_path {
        info!("Converting {}", input.display());
        return match convert_file(input, &config.output_dir).await {
            Ok(_) => Ok(()),
            Err(e) if e.is_parse() => {
                error!("{e}");
                Err(e.into())
            }
            Err(e) => {
                error!("Conversion error: {e}");
                Err(e.into())
            }
        };
    }

    let state = AppState {
        config: config.clone(),
    };

    // Any origin: the renderer is called from browser-side résumé editors.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
