//! Static host for the POINTSE client bundle.

mod config;
mod routes;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if dotenvy::dotenv().is_err() {
        eprintln!("no .env file found; using process environment");
    }
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env()?;
    if !config.static_dir.join("index.html").is_file() {
        tracing::warn!(dir = %config.static_dir.display(), "index.html missing; build the client with trunk first");
    }

    let app = routes::app(&config);
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;

    tracing::info!(addr = %config.bind_addr(), allowed_hosts = ?config.allowed_hosts, "pointse listening");
    axum::serve(listener, app).await?;
    Ok(())
}
