//! Headless WebUI page models - inspection CLI
//!
//! Loads site-settings or downloads snapshots and prints what the pages
//! would render: grouped origins with representative selection, download
//! rows with date headers.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use webui_pages::config::PageConfig;
use webui_pages::downloads::DownloadsPage;
use webui_pages::model::{DownloadItem, SiteGroup};
use webui_pages::observability::init_default_logging;
use webui_pages::proxy::{DownloadsProxy, LocalBackend, PageCallback, SiteSettingsProxy};
use webui_pages::sites::{representative_origin, sorted_origins, SortMethod};

/// Headless WebUI page model inspector
#[derive(Parser)]
#[command(name = "webui-pages")]
#[command(about = "Inspect site-settings and downloads snapshots headlessly")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a site-settings snapshot (a JSON array of site groups)
    Sites {
        /// Snapshot file path
        #[arg(value_name = "FILE")]
        snapshot: PathBuf,

        /// Sort method for origin lists (most-visited, storage, name)
        #[arg(long)]
        sort: Option<SortMethod>,
    },
    /// Render a downloads snapshot (a JSON array of download items)
    Downloads {
        /// Snapshot file path
        #[arg(value_name = "FILE")]
        snapshot: PathBuf,
    },
    /// Validate configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_default_logging();

    let config = match load_configuration(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Sites { snapshot, sort } => render_sites(&config, &snapshot, sort).await,
        Commands::Downloads { snapshot } => render_downloads(&config, &snapshot).await,
        Commands::Config { show } => handle_config_command(&config, show),
    };

    if let Err(e) = result {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_configuration(config_path: &Option<PathBuf>) -> Result<PageConfig, Box<dyn std::error::Error>> {
    match config_path {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            Ok(PageConfig::load_from_file(path)?)
        }
        None => {
            let default_path = PathBuf::from("webui-pages.toml");
            if default_path.exists() {
                info!("Loading configuration from: {}", default_path.display());
                return Ok(PageConfig::load_from_file(&default_path)?);
            }
            Ok(PageConfig::default())
        }
    }
}

async fn render_sites(
    config: &PageConfig,
    snapshot: &PathBuf,
    sort: Option<SortMethod>,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(snapshot)?;
    let groups: Vec<SiteGroup> = serde_json::from_str(&content)?;
    info!(groups = groups.len(), "site snapshot loaded");

    let backend = LocalBackend::new();
    let sort = sort.or(config.sites.default_sort);

    for group in &groups {
        let usage = backend.get_formatted_bytes(group.total_usage()).await?;
        println!("{} ({usage}, {} cookies)", group.etld_plus_one, group.num_cookies);

        match representative_origin(group) {
            Ok(favicon) => println!("  favicon: {}", favicon.origin),
            Err(e) => println!("  favicon: none ({e})"),
        }

        let origins = match sort {
            Some(method) => sorted_origins(&group.origins, method),
            None => group.origins.clone(),
        };
        for origin in &origins {
            let partitioned = if origin.is_partitioned {
                " (partitioned)"
            } else {
                ""
            };
            println!(
                "  {} - {} B, {} cookies, engagement {}{partitioned}",
                origin.site_representation(),
                origin.usage,
                origin.num_cookies,
                origin.engagement,
            );
        }
    }
    Ok(())
}

async fn render_downloads(
    config: &PageConfig,
    snapshot: &PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(snapshot)?;
    let items: Vec<DownloadItem> = serde_json::from_str(&content)?;
    info!(items = items.len(), "downloads snapshot loaded");

    let backend = Arc::new(LocalBackend::with_downloads(items.clone()));
    let mut page = DownloadsPage::with_strings(
        Arc::clone(&backend) as Arc<dyn DownloadsProxy>,
        config.load_time_data(),
    );
    page.apply(PageCallback::InsertItems { index: 0, items })?;

    for (index, item) in page.list().items().iter().enumerate() {
        if page.list().shows_date(index) {
            println!("{}", item.date_string);
        }
        println!(
            "  [{}] {} - {}",
            item.since_string,
            item.file_name,
            item.display_url(config.downloads.url_display_limit),
        );
    }
    println!(
        "{} items, clearable: {}",
        page.list().len(),
        page.has_clearable_downloads()
    );
    Ok(())
}

fn handle_config_command(
    config: &PageConfig,
    show: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    config.validate()?;
    info!("Configuration is valid");
    if show {
        println!("{}", toml::to_string_pretty(config)?);
    }
    Ok(())
}
