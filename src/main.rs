use anyhow::{Context, Result};
use clap::Parser;
use crossterm::cursor::Show;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use dragonflap::app::App;
use dragonflap::assets::Assets;
use dragonflap::build_info::version_string;
use dragonflap::core::clock::FrameClock;
use dragonflap::{logging, ui, AppContext, GameConfig};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dragonflap")]
#[command(about = "Fly a dragon through scrolling obstacles in your terminal", long_about = None)]
struct Cli {
    /// JSON config file (default: ~/.dragonflap/config.json if it exists)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding dragon.txt, obstacle.txt and background.txt
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Seed for obstacle gap positions
    #[arg(long)]
    seed: Option<u64>,

    /// Append logs to this file. Verbosity follows RUST_LOG
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Show version information
    #[arg(short = 'V', long)]
    version: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("dragonflap {}", version_string());
        return Ok(());
    }

    if let Some(path) = &cli.log_file {
        logging::init_file_logging(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
    }

    let mut config =
        GameConfig::load_or_default(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(dir) = cli.assets {
        config.assets_dir = dir;
    }
    tracing::info!(
        "Starting dragonflap {} ({}x{} world, {} fps)",
        version_string(),
        config.world_width,
        config.world_height,
        config.fps
    );

    let assets = Assets::load(&config.assets_dir);
    if assets.missing_count() > 0 {
        tracing::warn!(
            "{} sprite(s) missing from {}",
            assets.missing_count(),
            config.assets_dir.display()
        );
    }

    let mut ctx = AppContext::new(config, assets);
    let mut app = App::new(cli.seed);

    enable_raw_mode().context("Failed to enable raw mode")?;
    let result = setup_and_run(&mut app, &mut ctx);
    // Restore terminal before reporting anything, whatever happened above
    let restored = restore_terminal();

    tracing::info!("Exiting");
    first_error(result, restored)
}

fn setup_and_run(app: &mut App, ctx: &mut AppContext) -> Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    run(&mut terminal, app, ctx)
}

/// Undo raw mode and the alternate screen. Every step is attempted even if
/// an earlier one fails.
fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = io::stdout()
        .execute(LeaveAlternateScreen)
        .and_then(|out| out.execute(Show).map(|_| ()));
    raw.and(screen)
}

/// The run's own error wins over a teardown error.
fn first_error(run: Result<()>, restored: io::Result<()>) -> Result<()> {
    run?;
    restored.context("Failed to restore terminal")
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    ctx: &mut AppContext,
) -> Result<()> {
    let size = terminal.size()?;
    ctx.resize(size.width, size.height);

    let mut clock = FrameClock::new(ctx.config.frame_duration());

    while !app.should_quit {
        terminal.draw(|frame| ui::draw(frame, app, ctx))?;

        // Handle input until the frame is used up
        while event::poll(clock.remaining())? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key, ctx),
                Event::Resize(cols, rows) => {
                    if ctx.resize(cols, rows) {
                        tracing::debug!("Terminal resized to {}x{}", cols, rows);
                    }
                }
                _ => {}
            }
            if app.should_quit {
                return Ok(());
            }
        }

        let dt_ms = clock.tick();
        app.update(dt_ms, ctx);
    }

    Ok(())
}
