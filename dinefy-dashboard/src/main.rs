use dinefy_dashboard::{Config, Server, init_logger_with_file, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env is optional)
    dotenv::dotenv().ok();

    // 2. Configuration and logging
    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        config.json_logs,
        config.log_dir.as_deref(),
    )
    .map_err(|e| anyhow::anyhow!(e))?;

    print_banner();
    tracing::info!(
        environment = %config.environment,
        port = config.http_port,
        "🍽️  Dinefy dashboard starting..."
    );

    // 3. Serve until ctrl-c (Server::run builds the state and background tasks)
    let server = Server::new(config);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
