//! Fixed timestep simulation tick
//!
//! Core game loop that advances the round by one frame and applies input.

use super::random::RandomSource;
use super::state::{GameEvent, GameMode, GameState};
use super::transition::{Effect, Trigger, transition};
use crate::input::InputSymbol;

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, rng: &mut impl RandomSource) -> Vec<GameEvent> {
    // Motion runs before the checks, so the tick that moves the ball past a
    // threshold is also the tick that reacts to it
    let trigger = match state.mode {
        GameMode::BeforeStart | GameMode::Failed => None,
        GameMode::Falling => {
            state.ball.tick_fall();
            state.ball.has_fallen().then_some(Trigger::FallCompleted)
        }
        GameMode::Juggling => {
            state.ball.tick_juggle();
            state.ball.has_arrived().then(|| Trigger::Arrived {
                caught: state.is_catching(),
            })
        }
    };

    match trigger {
        Some(trigger) => run(state, &[trigger], rng),
        None => Vec::new(),
    }
}

/// Apply one input symbol immediately (before the next tick)
pub fn apply_input(
    state: &mut GameState,
    symbol: InputSymbol,
    rng: &mut impl RandomSource,
) -> Vec<GameEvent> {
    let trigger = match symbol {
        InputSymbol::Start => Trigger::Start,
        select => Trigger::Select(select),
    };
    run(state, &[trigger], rng)
}

fn run(state: &mut GameState, triggers: &[Trigger], rng: &mut impl RandomSource) -> Vec<GameEvent> {
    let next = transition(state.mode, triggers);
    state.mode = next.mode;

    let mut events = Vec::new();
    for effect in next.effects {
        match effect {
            Effect::ResetRound => {
                state.reset_round();
                log::info!("Round started");
                events.push(GameEvent::RoundStarted);
            }
            Effect::MoveTile(symbol) => state.tile.set_cell_from_input(symbol),
            Effect::IncrementScore => {
                state.score += 1;
                events.push(GameEvent::Scored { score: state.score });
            }
            Effect::ChooseDestination => state.ball.choose_new_destination(rng),
            Effect::MarkFailure => {
                state.marker.set_cell(state.ball.next_cell);
                log::info!(
                    "Missed at cell {} (tile on {}), final score {}",
                    state.ball.next_cell.index(),
                    state.tile.cell.index(),
                    state.score
                );
                events.push(GameEvent::Failed { score: state.score });
            }
        }
    }
    events
}
