use api::{
    Config, build,
    telemetry::{get_subscriber, init_subscriber},
};

/// Items API Server
///
/// Environment variables can be set directly or loaded from a .env file in the project root.
///
/// Optional environment variables:
/// - IP_ADDRESS: Server bind address (defaults to 127.0.0.1; 0.0.0.0 for public)
/// - PORT: Server port (defaults to 8000)
/// - ALLOWED_ORIGINS: CORS origins ("*" for any origin, the default, or a comma-separated list)
/// - RUST_LOG: log filter, overriding the default of "info"
///
/// Example .env file:
/// IP_ADDRESS=127.0.0.1
/// PORT=8000
/// ALLOWED_ORIGINS=*
///
/// Example production command:
/// IP_ADDRESS=0.0.0.0 PORT=8000 ALLOWED_ORIGINS=https://items.example.com \
/// cargo run -p api
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Silently ignored if the file doesn't exist
    let _ = dotenvy::dotenv();

    init_subscriber(get_subscriber("info"))?;

    let mut config = Config::from_env()?;
    let server = build(&mut config)?;
    tracing::info!("Listening on http://{}:{}", config.ip, config.port);
    server.await?;
    Ok(())
}
