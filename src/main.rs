use clap::Parser;
use nasa_gallery::core::Category;
use nasa_gallery::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "nasa-gallery", about = "Browse NASA's public image archive")]
struct Args {
    /// Category to open with
    #[arg(short, long, value_enum)]
    category: Option<Category>,

    /// Search endpoint (overrides NASA_IMAGES_BASE_URL and the config file)
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - stdout belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("nasa-gallery.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{e}; falling back to defaults");
        config::GalleryConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            category: args.category,
            base_url: args.base_url,
        },
    );

    log::info!(
        "NASA Gallery starting up: category={}, base_url={}",
        resolved.category,
        resolved.base_url
    );

    nasa_gallery::tui::run(resolved)
}
