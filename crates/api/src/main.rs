use anyhow::Context;

use loginkit_api::{config::ServerConfig, LoginRouter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    loginkit_observability::init();

    let config = ServerConfig::from_env().context("invalid server configuration")?;
    let router = LoginRouter::with_auth_service(config.auth_service());
    let app = loginkit_api::app::build_app(router);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
