//! Round state machine as a pure transition function
//!
//! `transition` decides the next mode and lists the effects to apply. It
//! never touches the ball or tile itself, which keeps the rules testable
//! without running the motion model.

use super::state::GameMode;
use crate::input::InputSymbol;

/// What happened this input/tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Start/restart input
    Start,
    /// Cell select input
    Select(InputSymbol),
    /// The fall height went below zero
    FallCompleted,
    /// The transit reached its destination; `caught` is read before any reroll
    Arrived { caught: bool },
}

/// Side effect requested by a transition, applied in list order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Reset ball, tile and score
    ResetRound,
    /// Move the tile to the cell bound to this select symbol
    MoveTile(InputSymbol),
    IncrementScore,
    ChooseDestination,
    /// Place the miss marker and report the final score
    MarkFailure,
}

/// Result of running triggers through the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub mode: GameMode,
    pub effects: Vec<Effect>,
}

/// Fold `triggers` over `mode`, each seeing the mode left by the previous one
pub fn transition(mode: GameMode, triggers: &[Trigger]) -> Transition {
    let mut mode = mode;
    let mut effects = Vec::new();

    for &trigger in triggers {
        mode = match (mode, trigger) {
            (GameMode::BeforeStart | GameMode::Failed, Trigger::Start) => {
                effects.push(Effect::ResetRound);
                GameMode::Falling
            }
            (GameMode::Falling, Trigger::FallCompleted) => {
                effects.push(Effect::IncrementScore);
                effects.push(Effect::ChooseDestination);
                GameMode::Juggling
            }
            (GameMode::Juggling, Trigger::Select(symbol)) => {
                effects.push(Effect::MoveTile(symbol));
                GameMode::Juggling
            }
            // A miss is decided before any reroll could move the destination
            (GameMode::Juggling, Trigger::Arrived { caught: false }) => {
                effects.push(Effect::MarkFailure);
                GameMode::Failed
            }
            (GameMode::Juggling, Trigger::Arrived { caught: true }) => {
                effects.push(Effect::IncrementScore);
                effects.push(Effect::ChooseDestination);
                GameMode::Juggling
            }
            (mode, _) => mode,
        };
    }

    Transition { mode, effects }
}
