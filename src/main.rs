use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use cliniccloud::core::config;
use cliniccloud::tui;

#[derive(Parser)]
#[command(name = "cliniccloud", about = "Terminal client for the ClinicCloud document search service")]
struct Args {
    /// Base URL of the search service (overrides config file and env var)
    #[arg(short, long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to cliniccloud.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("cliniccloud.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {e}");
        Default::default()
    });
    let resolved = config::resolve(file_config, args.base_url);

    log::info!("ClinicCloud client starting up against {}", resolved.base_url);

    tui::run(resolved)
}
