use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tank_shooter::display;
use tank_shooter::input::{Command, KeyTracker, TickInput};
use tank_shooter::state::GameState;
use tank_shooter::{GameConfig, Simulation, TickOutcome};

#[derive(Parser, Debug)]
#[command(name = "tank_shooter")]
#[command(about = "Scrolling tank shooter in the terminal")]
struct Cli {
    /// TOML file overriding any of the game constants
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for enemy placement (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Write logs here (RUST_LOG filters, default `info`)
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Run this many ticks without a terminal using random commands, then
    /// print the final snapshot as JSON
    #[arg(long)]
    headless: Option<u64>,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

// ── Headless runner ───────────────────────────────────────────────────────────

/// Random command set for one tick.  Always confirms the guide and accepts
/// the play-again prompt so long runs keep playing.
fn random_input(state: GameState, rng: &mut impl Rng) -> TickInput {
    let mut commands = Vec::new();
    match state {
        GameState::ShowingGuide => commands.push(Command::Confirm),
        GameState::GameOver => commands.push(Command::RestartYes),
        _ => {
            if rng.gen_bool(0.3) {
                commands.push(Command::MoveLeft);
            }
            if rng.gen_bool(0.3) {
                commands.push(Command::MoveRight);
            }
            if rng.gen_bool(0.1) {
                commands.push(Command::Shoot);
            }
        }
    }
    commands.into_iter().collect()
}

fn run_headless(sim: &mut Simulation, ticks: u64, rng: &mut StdRng) -> Result<()> {
    for _ in 0..ticks {
        let input = random_input(sim.state(), rng);
        if sim.tick(&input, rng) == TickOutcome::Exit {
            break;
        }
    }
    let json = serde_json::to_string_pretty(&sim.snapshot())?;
    println!("{json}");
    Ok(())
}

// ── Terminal loop ─────────────────────────────────────────────────────────────

fn game_loop<W: Write>(
    out: &mut W,
    sim: &mut Simulation,
    rx: &mpsc::Receiver<Event>,
    rng: &mut StdRng,
) -> Result<()> {
    let frame_time = Duration::from_secs(1) / sim.config.tick_rate;
    let mut keys = KeyTracker::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // Drain all pending input events (non-blocking)
        let mut disconnected = false;
        loop {
            match rx.try_recv() {
                Ok(Event::Key(key)) => keys.record(key, frame),
                Ok(_) => {}
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        let mut input = keys.take(frame);
        if disconnected {
            log::warn!("input reader stopped, quitting");
            input.insert(Command::Quit);
        }

        if sim.tick(&input, rng) == TickOutcome::Exit {
            return Ok(());
        }
        display::render(out, &sim.snapshot())?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };
    let seed = cli.seed.unwrap_or_else(|| rand::thread_rng().gen());
    log::info!("starting with seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut sim = Simulation::new(config);

    if let Some(ticks) = cli.headless {
        return run_headless(&mut sim, ticks, &mut rng);
    }

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = game_loop(&mut out, &mut sim, &rx, &mut rng);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    log::info!(
        "finished at level {} with score {}",
        sim.scoreboard.level(),
        sim.scoreboard.score()
    );
    result
}
