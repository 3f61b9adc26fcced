use anyhow::{Context, Result};
use clap::Parser;
use common::{GameEngine, GameState, SystemClock};
use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen, SetTitle,
    },
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use terminal::audio::TerminalBell;
use terminal::config::Config;
use terminal::input::CrosstermInput;
use terminal::presenter::TerminalPresenter;
use terminal::replay::reader::ReplayReader;
use terminal::replay::recorder::ReplayRecorder;

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let config = Config::parse();

    if let Some(path) = &config.inspect {
        return inspect(path);
    }

    init_logging(&config)?;

    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!(
        "Starting {}x{} game at {} fps, seed {}",
        config.grid_width,
        config.grid_height,
        config.fps,
        seed
    );
    let mut game = GameState::with_rng(config.grid_width, config.grid_height, StdRng::seed_from_u64(seed))?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let reports_release = matches!(supports_keyboard_enhancement(), Ok(true));
    if reports_release {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut presenter = TerminalPresenter::new(terminal, config.render_config(), config.frame_duration())
        .with_audio(Box::new(TerminalBell::new(io::stdout(), !config.mute)))
        .with_title_hook(|title| {
            let _ = execute!(io::stdout(), SetTitle(title));
        });
    if let Some(dir) = &config.record_dir {
        presenter = presenter.with_recorder(ReplayRecorder::new(
            dir.clone(),
            config.grid_width,
            config.grid_height,
            Some(seed),
        ));
    }

    let mut input = CrosstermInput::new(reports_release);
    let mut engine = GameEngine::new(SystemClock::new(), config.frame_duration());
    let res = engine.run(&mut game, &mut input, &mut presenter);

    // Restore terminal
    if reports_release {
        execute!(presenter.terminal_mut().backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(presenter.terminal_mut().backend_mut(), LeaveAlternateScreen)?;
    presenter.terminal_mut().show_cursor()?;

    let summary = res?;
    match presenter.finish(&game.view()) {
        Ok(Some(path)) => println!("Replay saved to {}", path.display()),
        Ok(None) => {}
        Err(err) => eprintln!("Failed to save replay: {:?}", err),
    }

    println!("Game has terminated successfully!");
    println!("Score: {}", summary.score);
    println!("Size: {}", summary.size);
    tracing::info!("Exited after {} frames", summary.frames);

    Ok(())
}

fn init_logging(config: &Config) -> Result<()> {
    // The game owns stdout, so logs go to a file
    let file = File::create(&config.log_file)
        .with_context(|| format!("Failed to create log file {:?}", config.log_file))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn inspect(path: &Path) -> Result<()> {
    let files = if path.is_dir() {
        ReplayReader::list_replays(path)?
    } else {
        vec![path.to_path_buf()]
    };

    if files.is_empty() {
        println!("No replays found in {}", path.display());
        return Ok(());
    }

    for file in files {
        match ReplayReader::load_replay(&file) {
            Ok(replay) => println!("{}", replay.summary(&file)),
            Err(err) => eprintln!("Skipping {}: {:?}", file.display(), err),
        }
    }

    Ok(())
}
