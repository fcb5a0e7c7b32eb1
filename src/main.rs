use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::GameConfig;
use grid_snake::high_score::{default_scores_path, JsonHighScoreStore};
use grid_snake::input::{GameInput, InputHandler};
use grid_snake::renderer;
use grid_snake::session::GameSession;
use grid_snake::terminal_runtime::{install_panic_hook, TerminalSession};
use grid_snake::ui::scene::SceneHandle;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Longest wait for input before redrawing.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON config file; omitted fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Cells per side of the square play field.
    #[arg(long)]
    grid_size: Option<u16>,

    /// Terminal columns per grid cell.
    #[arg(long)]
    block_size: Option<u16>,

    /// Seed for food placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Where the high score is stored.
    #[arg(long)]
    high_score_file: Option<PathBuf>,

    /// Write logs here (filtered by RUST_LOG); logging is off otherwise.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.log_file.as_deref() {
        init_tracing(path)?;
    }

    // Config problems are reported before the terminal switches to raw mode.
    let config = load_config(&cli)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))?;

    install_panic_hook();
    run(config, &cli)
}

fn load_config(cli: &Cli) -> Result<GameConfig, grid_snake::error::ConfigError> {
    let mut config = match cli.config.as_deref() {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    if let Some(grid_size) = cli.grid_size {
        config.grid_size = grid_size;
    }
    if let Some(block_size) = cli.block_size {
        config.block_size = block_size;
    }

    config.validate()?;
    Ok(config)
}

fn run(config: GameConfig, cli: &Cli) -> io::Result<()> {
    let scores_path = cli
        .high_score_file
        .clone()
        .unwrap_or_else(default_scores_path);
    info!(path = %scores_path.display(), "using high score file");

    let scene = SceneHandle::new(config.grid(), config.block_size);
    let collaborators = scene.collaborators(Box::new(JsonHighScoreStore::new(scores_path)));
    let mut session = match cli.seed {
        Some(seed) => GameSession::with_seed(config, seed, collaborators),
        None => GameSession::from_entropy(config, collaborators),
    };

    let mut terminal = TerminalSession::enter()?;
    let mut input = InputHandler::new();

    loop {
        {
            let view = scene.borrow();
            let phase = session.phase();
            terminal.draw(|frame| renderer::render(frame, &view, phase))?;
        }

        let timeout = session
            .time_until_tick(Instant::now())
            .map_or(FRAME_INTERVAL, |until| until.min(FRAME_INTERVAL));

        if let Some(game_input) = input.poll(timeout)? {
            if game_input == GameInput::Quit {
                break;
            }

            session.handle_input(game_input, Instant::now());
        }

        session.poll(Instant::now());
    }

    info!(score = session.score(), "quit");
    Ok(())
}

fn init_tracing(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::init_tracing;

    #[test]
    fn second_subscriber_install_is_reported() {
        let dir = std::env::temp_dir().join("grid-snake-log-tests");
        fs::create_dir_all(&dir).expect("test log directory should be creatable");
        let first = dir.join(format!("first-{}.log", std::process::id()));
        let second = dir.join(format!("second-{}.log", std::process::id()));

        init_tracing(&first).expect("first subscriber should install");
        assert!(init_tracing(&second).is_err());

        let _ = fs::remove_file(first);
        let _ = fs::remove_file(second);
    }
}
