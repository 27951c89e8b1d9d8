use clap::Parser;
use passdata::core::config::{self, PassDataConfig};
use passdata::core::detail::MissingFieldPolicy;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "passdata", about = "Delegate vs. closure callbacks from list rows")]
struct Args {
    /// How to show users with missing fields
    #[arg(short, long, value_enum)]
    missing_fields: Option<MissingFieldPolicy>,

    /// Config file to use instead of ~/.passdata/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to passdata.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("passdata.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            eprintln!("Warning: {e}. Using defaults.");
            PassDataConfig::default()
        }
    };
    let resolved = config::resolve(&file_config, args.missing_fields);

    log::info!(
        "PassData starting up with {} users ({:?} on missing fields)",
        resolved.users.len(),
        resolved.detail.missing_fields
    );

    passdata::tui::run(resolved)
}
