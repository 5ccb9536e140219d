mod routes;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

/// Overrides the port of the configured `site-addr`.
const PORT_ENV: &str = "PORT";

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    if let Err(e) = dotenv {
        if !e.not_found() {
            tracing::warn!(error = %e, "failed to load .env");
        }
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "server exited");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), routes::ServerError> {
    let options = routes::load_options()?;
    let addr = routes::listen_addr(options.site_addr, std::env::var(PORT_ENV).ok().as_deref());
    let app = routes::app(options);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| routes::ServerError::Bind { addr, source })?;
    tracing::info!(%addr, "biocure listening");
    axum::serve(listener, app).await.map_err(routes::ServerError::Serve)
}
