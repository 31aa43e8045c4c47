mod config;
mod error;
mod routes;
mod state;

use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenv {
        // A missing .env is normal outside local development.
        if !e.not_found() {
            tracing::warn!(error = %e, "ignoring unreadable .env");
        }
    }

    let config = config::ServerConfig::from_env()?;
    let addr = config.listen_addr()?;
    let state = state::AppState::new(config);

    // SSR is optional: without a Leptos configuration only the API is served.
    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "leptos SSR unavailable, serving API routes only");
            routes::api_routes(state)?
        }
    };

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "apacks listening");
    axum::serve(listener, app).await?;
    Ok(())
}
