use dxfanalyzer::init_logging;
use dxfanalyzer_server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    tracing::info!(
        "starting DXF Analyzer {} (built {})",
        dxfanalyzer::VERSION,
        dxfanalyzer::BUILD_DATE
    );

    // Serve until shutdown
    let config = ServerConfig::from_env();
    dxfanalyzer_server::run(&config).await
}
