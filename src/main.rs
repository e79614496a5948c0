use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four::config::AppConfig;
use connect_four::game::Session;
use connect_four::ui::{render_text, run_script, write_events, App, EventLog};

/// Play two-player Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override board height (rows)
    #[arg(long)]
    height: Option<usize>,

    /// Override board width (columns)
    #[arg(long)]
    width: Option<usize>,

    /// Play these 1-based columns without the TUI and print the result
    #[arg(long, value_delimiter = ',')]
    moves: Option<Vec<usize>>,

    /// Write log output to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(height) = cli.height {
        config.board.height = height;
    }
    if let Some(width) = cli.width {
        config.board.width = width;
    }
    config.validate().context("invalid board settings")?;

    match cli.moves {
        Some(moves) => run_headless(config, &moves),
        None => run_tui(config),
    }
}

fn run_headless(config: AppConfig, moves: &[usize]) -> Result<()> {
    let columns = moves
        .iter()
        .map(|&m| match m.checked_sub(1) {
            Some(col) => Ok(col),
            None => bail!("columns are numbered from 1"),
        })
        .collect::<Result<Vec<_>>>()?;

    let mut session = Session::new(config.board.height, config.board.width)?;
    let mut log = EventLog::new(config.players);
    // Moves played before a bad column are still reported
    let played = run_script(&mut session, &columns, &mut log);
    write_events(&log, &mut io::stdout().lock())?;
    let consumed = played?;

    if consumed < columns.len() {
        info!("game over; {} trailing moves not played", columns.len() - consumed);
    }
    println!();
    print!("{}", render_text(session.state().grid()));
    Ok(())
}

fn run_tui(config: AppConfig) -> Result<()> {
    let mut app = App::new(config)?;
    run_terminal(&mut app).context("terminal UI failed")
}

fn run_terminal(app: &mut App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
