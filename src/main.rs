//! Football Juggling entry point
//!
//! Console frontend: keys arrive as lines on stdin, the frame clock drives
//! the simulation at a fixed rate and scores are printed as they happen.
//! Rendering is left to a separate frontend consuming the same `Game` queries.

use std::io::BufRead;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use football_juggling::sim::GameMode;
use football_juggling::{FrameClock, Game, InputSymbol, KeyBindings, Settings};

/// Printable name of the key bound to `symbol`
fn key_label(keys: &KeyBindings, symbol: InputSymbol) -> String {
    match keys.key_for(symbol) {
        Some(' ') => "space".to_string(),
        Some(key) => key.to_ascii_uppercase().to_string(),
        None => "-".to_string(),
    }
}

fn print_how_to_play(keys: &KeyBindings) {
    let label = |symbol: InputSymbol| key_label(keys, symbol);

    println!();
    println!("-------------------------------------------------------");
    println!("                Football Juggling Game");
    println!("-------------------------------------------------------");
    println!();
    println!("---- How To Play ----");
    println!();
    println!("Move the white tile so that the soccer ball won't fall.");
    println!();
    for (name, symbol) in [
        ("Top left     ", InputSymbol::TopLeft),
        ("Top center   ", InputSymbol::TopCenter),
        ("Top right    ", InputSymbol::TopRight),
        ("Center left  ", InputSymbol::CenterLeft),
        ("Center       ", InputSymbol::Center),
        ("Center right ", InputSymbol::CenterRight),
        ("Bottom left  ", InputSymbol::BottomLeft),
        ("Bottom center", InputSymbol::BottomCenter),
        ("Bottom right ", InputSymbol::BottomRight),
    ] {
        println!("  {} - {}", name, label(symbol));
    }
    println!();
    println!("Type keys and press enter. Your score will be displayed on the console.");
    println!();
    println!("Press {} to start.", label(InputSymbol::Start));
    println!();
}

/// Forward every typed character to the game loop; closes the channel on EOF
fn spawn_key_reader() -> mpsc::Receiver<char> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            // An empty line stands for the space bar
            let keys: Vec<char> = if line.is_empty() {
                vec![' ']
            } else {
                line.chars().collect()
            };
            for key in keys {
                if tx.send(key).is_err() {
                    return;
                }
            }
        }
    });
    rx
}

fn main() {
    env_logger::init();
    log::info!("Football Juggling starting...");

    let settings = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => Settings::load(&path),
        None => Settings::default(),
    };

    let mut game = Game::from_settings(&settings);
    let mut clock = FrameClock::new(settings.fps);
    print_how_to_play(game.bindings());
    let start_key = key_label(game.bindings(), InputSymbol::Start);

    let keys = spawn_key_reader();
    let mut last_time = Instant::now();
    let mut last_mode = game.state.mode;

    loop {
        // Input lands before the tick it should affect
        loop {
            match keys.try_recv() {
                Ok(key) => report(game.handle_key(key), &start_key),
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    log::info!("Input closed, exiting");
                    return;
                }
            }
        }

        let now = Instant::now();
        let elapsed = now.duration_since(last_time).as_secs_f64();
        last_time = now;

        for _ in 0..clock.advance(elapsed) {
            report(game.update(), &start_key);
        }

        if game.state.mode != last_mode {
            log::debug!("Mode {:?} -> {:?}", last_mode, game.state.mode);
            if game.state.mode == GameMode::Failed {
                if let Some(marker) = game.marker_position() {
                    log::debug!("Miss marker at {:?}", marker);
                }
            }
            last_mode = game.state.mode;
        }
        log::trace!("Ball pose {:?}", game.ball_pose());

        std::thread::sleep(Duration::from_secs_f64(clock.step() / 4.0));
    }
}

fn report(events: Vec<football_juggling::sim::GameEvent>, start_key: &str) {
    for event in events {
        if let Some(message) = event.console_message(start_key) {
            println!("{}", message);
        }
    }
}
