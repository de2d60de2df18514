use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use distview::config::{KeybindingsConfig, ThemeSource};
use distview::{App, init_logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "distview")]
#[command(about = "Interactive viewer for an editable probability density")]
struct Args {
    /// Path to the data directory (default: ~/.distview/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Theme file (JSON or YAML); overrides theme.json in the data directory
    #[arg(short, long)]
    theme: Option<PathBuf>,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".distview")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let theme_source = ThemeSource::resolve(args.theme, &data_dir);
    let theme = theme_source.load()?;
    tracing::info!(source = %theme_source, "theme loaded");

    let keybindings = KeybindingsConfig::load_or_default(&data_dir);
    let mut app = App::new(theme, theme_source, keybindings)?;

    ratatui::run(|terminal| -> color_eyre::Result<()> {
        execute!(std::io::stdout(), EnableMouseCapture)?;
        let result = app.run(terminal);
        execute!(std::io::stdout(), DisableMouseCapture)?;
        result
    })?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
