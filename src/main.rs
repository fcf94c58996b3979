use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use wildlife::core::config::{self, CliOverrides, WildlifeConfig};

#[derive(Parser)]
#[command(name = "wildlife", about = "Terminal wildlife showcase")]
struct Args {
    /// Directory for favorites, preferences and recent searches
    #[arg(long)]
    storage_dir: Option<PathBuf>,

    /// Open this animal's profile once the catalogue has loaded
    #[arg(short, long)]
    animal: Option<String>,

    /// Start with slider autoplay off, whatever the saved preference says
    #[arg(long)]
    no_autoplay: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to wildlife.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("wildlife.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        WildlifeConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            storage_dir: args.storage_dir,
            animal: args.animal,
            no_autoplay: args.no_autoplay,
        },
    );

    log::info!("Wildlife showcase starting up: {:?}", resolved);

    wildlife::tui::run(resolved)
}
