use std::io;
use std::panic;
use std::thread;
use std::time::{Duration, Instant};

use autopilot_snake::config::{GRID_HEIGHT, GRID_WIDTH, GridSize};
use autopilot_snake::error::AppError;
use autopilot_snake::game::GameState;
use autopilot_snake::render::{self, FrameSink};
use autopilot_snake::sim;
use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

#[derive(Debug, Parser)]
#[command(version, about = "Self-driving snake for a tiny monochrome display")]
struct Cli {
    /// Seed for apple placement; omit for a different run every time.
    #[arg(long)]
    seed: Option<u64>,

    /// Run without a terminal for this many ticks and print a JSON summary.
    #[arg(long, value_name = "TICKS")]
    headless: Option<u64>,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    if let Some(ticks) = cli.headless {
        let summary = sim::simulate(cli.seed.unwrap_or(0), ticks);
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    install_panic_hook();

    run(&cli)?;
    cleanup_terminal()?;
    Ok(())
}

fn run(cli: &Cli) -> io::Result<()> {
    let mut terminal = setup_terminal()?;

    let bounds = GridSize {
        width: GRID_WIDTH,
        height: GRID_HEIGHT,
    };
    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(bounds, seed),
        None => GameState::new(bounds),
    };

    let started = Instant::now();
    let mut last_tick = Instant::now();

    terminal.draw(|frame| {
        let mut sink = FrameSink::new(frame);
        render::draw(&state, &mut sink);
    })?;

    loop {
        if last_tick.elapsed() >= state.tick_interval() {
            state.step(elapsed_ms(started));
            last_tick = Instant::now();

            terminal.draw(|frame| {
                let mut sink = FrameSink::new(frame);
                render::draw(&state, &mut sink);
            })?;
        }

        if poll_quit()? {
            break;
        }

        thread::sleep(Duration::from_millis(16));
    }

    Ok(())
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Drains pending terminal events; returns true on a quit key.
fn poll_quit() -> io::Result<bool> {
    while event::poll(Duration::from_millis(0))? {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(true);
            }
            _ => {}
        }
    }

    Ok(false)
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
        let _ = disable_raw_mode();
        return Err(error);
    }

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn cleanup_terminal() -> io::Result<()> {
    disable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)?;

    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, Show, LeaveAlternateScreen);
        default_hook(panic_info);
    }));
}
