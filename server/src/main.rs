mod server_config;
mod web_server;

use clap::Parser;
use common::{log, logger};
use server_config::{get_config_manager, ServerConfig, DEFAULT_CONFIG_FILE};
use web_server::run_web_server;

#[derive(Parser)]
#[command(name = "tictactoe_server")]
struct Args {
    /// YAML config file; defaults are used when it does not exist.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,
    #[arg(long)]
    use_log_prefix: bool,
    /// Write the default config to `--config` and exit.
    #[arg(long)]
    write_default_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config_manager = get_config_manager(&args.config);

    if args.write_default_config {
        config_manager.set_config(&ServerConfig::default())?;
        println!("Wrote default config to {}", args.config);
        return Ok(());
    }

    let config = config_manager.get_config()?;

    let prefix = if args.use_log_prefix {
        Some("Server".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, config.move_service.log_search_stats);
    log!("Using config {}", args.config);

    run_web_server(config).await?;

    log!("Server shut down gracefully");

    Ok(())
}
