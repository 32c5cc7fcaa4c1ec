//! Folio - a terminal viewer for sectioned documents
//!
//! Sections fade in the first time they scroll into view and the
//! navigation header follows the section being read.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use folio_core::{constants, paths, Document, FolioConfig};

mod commands;
mod tui;

use tui::themes::{DEFAULT_THEME, THEME_REGISTRY};

/// Default width for headless layout
const HEADLESS_WIDTH: u16 = 80;

/// Default body height for headless resolution
const HEADLESS_HEIGHT: u16 = 20;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Scroll through a sectioned document in the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Section document (TOML); the built-in sample when omitted
    #[arg(short, long, global = true)]
    document: Option<PathBuf>,

    /// Config file (defaults to ~/.folio/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Fraction of a section that must be on screen to reveal it
    #[arg(long, global = true)]
    threshold: Option<f64>,

    /// Rows below the top of the screen that already count as reached
    #[arg(long, global = true)]
    look_ahead: Option<f64>,

    /// Theme name
    #[arg(short, long, default_value = DEFAULT_THEME)]
    theme: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the viewer (default)
    View,

    /// List sections with their offsets
    Sections {
        /// Layout width in columns
        #[arg(long, default_value_t = HEADLESS_WIDTH)]
        width: u16,
    },

    /// Print the active section for a scroll offset
    Resolve {
        /// Scroll offset in rows
        #[arg(long)]
        offset: f64,
        #[arg(long, default_value_t = HEADLESS_WIDTH)]
        width: u16,
        #[arg(long, default_value_t = HEADLESS_HEIGHT)]
        height: u16,
    },

    /// List available themes
    Themes,
}

/// Restore terminal state - called on panic or unexpected exit
fn restore_terminal() {
    use crossterm::{
        event::DisableMouseCapture,
        execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };
    let _ = disable_raw_mode();
    let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Log to a file (stdout belongs to the TUI), or nowhere if it can't be created
fn init_logging() -> Result<()> {
    let log_dir = paths::logs_dir();
    std::fs::create_dir_all(&log_dir).ok();

    #[cfg(unix)]
    let null_device = "/dev/null";
    #[cfg(windows)]
    let null_device = "NUL";

    let log_file = match std::fs::File::create(log_dir.join(constants::ui::LOG_FILE_NAME)) {
        Ok(file) => file,
        Err(_) => std::fs::File::create(null_device).context("Failed to open null device")?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

impl Cli {
    /// Config file, then command line overrides
    fn config(&self) -> Result<FolioConfig> {
        let mut config = match &self.config {
            Some(path) => FolioConfig::load_over(path, FolioConfig::terminal())
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => FolioConfig::load_or(FolioConfig::terminal())?,
        };
        if let Some(threshold) = self.threshold {
            config.tracker.threshold = threshold;
        }
        if let Some(look_ahead) = self.look_ahead {
            config.spy.look_ahead = look_ahead;
        }
        config.validate()?;
        Ok(config)
    }

    fn document(&self) -> Result<Document> {
        let document = match &self.document {
            Some(path) => Document::load(path)
                .with_context(|| format!("Failed to load document {}", path.display()))?,
            None => Document::sample()?,
        };
        Ok(document)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Set up panic hook to restore terminal state
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    init_logging()?;

    run(Cli::parse()).await
}

/// Dispatch a parsed command line; config is only read by commands that use it
async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Themes) => {
            println!("Available themes ({}):", THEME_REGISTRY.count());
            for (name, theme) in THEME_REGISTRY.list() {
                println!("  {} - {}", name, theme.display_name);
            }
        }
        Some(Commands::Sections { width }) => {
            let document = cli.document()?;
            for row in commands::list_sections(&document, width) {
                println!(
                    "{:>6} {:>4}  {:<12} {}",
                    row.offset, row.height, row.id, row.label
                );
            }
        }
        Some(Commands::Resolve {
            offset,
            width,
            height,
        }) => {
            let document = cli.document()?;
            let config = cli.config()?;
            let resolution = commands::resolve(&document, &config, width, height, offset)?;
            match &resolution.active {
                Some(id) => println!("{id}"),
                None => println!("-"),
            }
            tracing::debug!(
                visible = resolution.visible.len(),
                scrolled = resolution.scrolled,
                "Resolved offset {}",
                offset
            );
        }
        Some(Commands::View) | None => {
            let document = cli.document()?;
            let config = cli.config()?;
            let theme = THEME_REGISTRY.get_or_default(&cli.theme);
            tracing::info!("Using theme: {} ({})", theme.display_name, theme.name);

            let mut app = tui::App::new(document, &config, &cli.theme)?;
            app.run().await?;
        }
    }

    Ok(())
}
