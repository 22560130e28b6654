//! Terminal runner (default binary).
//!
//! Reads keys, feeds them to the engine, fires gravity on a fixed cadence and
//! redraws after every pass. All game rules live in `blockfall-core`; this file
//! only owns time, the keyboard and the screen.

use std::fs::File;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tui_blockfall::clock::GravityClock;
use tui_blockfall::config::Config;
use tui_blockfall::core::{GameSnapshot, GameState};
use tui_blockfall::input::{handle_key_event, is_press, should_quit};
use tui_blockfall::term::{write_ascii, FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Exit {
    Quit,
    GameOver,
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;
    init_logging(&config)?;

    let seed = config.seed.unwrap_or_else(rand::random);
    info!(
        seed,
        randomizer = config.randomizer.as_str(),
        gravity_ms = config.gravity_ms,
        "starting game"
    );
    let mut game = GameState::new(config.randomizer.into_source(seed));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    let exit = result?;

    info!(?exit, score = game.score(), lines = game.lines(), "game finished");
    match exit {
        Exit::GameOver => println!("Game Over! Score: {}", game.score()),
        Exit::Quit => println!("Score: {}", game.score()),
    }
    Ok(())
}

fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("install log subscriber: {}", e))
}

fn run(term: &mut TerminalRenderer, game: &mut GameState, config: &Config) -> Result<Exit> {
    let started = Instant::now();
    let now_ms = || started.elapsed().as_millis() as u64;

    let mut gravity = GravityClock::new(config.gravity_ms, now_ms());
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut text = String::new();

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        if config.plain {
            text.clear();
            write_ascii(&snap, &mut text);
            term.draw_text(&text)?;
        } else {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        if game.is_game_over() {
            wait_for_key()?;
            return Ok(Exit::GameOver);
        }

        // Input, waiting no longer than the poll interval or the next gravity step.
        let timeout = gravity.until_next(now_ms()).min(config.poll_ms);
        if event::poll(Duration::from_millis(timeout))? {
            match event::read()? {
                Event::Key(key) if is_press(&key) => {
                    if should_quit(key) {
                        return Ok(Exit::Quit);
                    }
                    if let Some(action) = handle_key_event(key) {
                        let changed = game.apply_action(action);
                        debug!(action = action.as_str(), changed, "input");
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity.
        if gravity.should_tick(now_ms()) {
            game.tick();
        }
    }
}

fn wait_for_key() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if is_press(&key) {
                return Ok(());
            }
        }
    }
}
