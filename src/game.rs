//! Game context
//!
//! Owns the round state, the random source and the key bindings. The frame
//! clock calls [`Game::update`] once per tick; input is applied as it arrives.

use glam::Vec3;

use crate::input::{InputSymbol, KeyBindings};
use crate::settings::Settings;
use crate::sim::{BallPose, GameEvent, GameRng, GameState, RandomSource, apply_input, tick};

pub struct Game<R: RandomSource = GameRng> {
    pub state: GameState,
    rng: R,
    bindings: KeyBindings,
}

impl Game<GameRng> {
    /// Build a game from settings, seeding from the clock unless a seed is set
    pub fn from_settings(settings: &Settings) -> Self {
        let rng = match settings.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_time(),
        };
        log::info!("Game initialized with seed: {}", rng.seed());
        Self::new(rng, settings.key_bindings())
    }
}

impl<R: RandomSource> Game<R> {
    pub fn new(rng: R, bindings: KeyBindings) -> Self {
        Self {
            state: GameState::new(),
            rng,
            bindings,
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Translate a key press; unbound keys are ignored
    pub fn handle_key(&mut self, key: char) -> Vec<GameEvent> {
        match self.bindings.lookup(key) {
            Some(symbol) => self.handle_input(symbol),
            None => Vec::new(),
        }
    }

    pub fn handle_input(&mut self, symbol: InputSymbol) -> Vec<GameEvent> {
        apply_input(&mut self.state, symbol, &mut self.rng)
    }

    /// Run one simulation tick
    pub fn update(&mut self) -> Vec<GameEvent> {
        tick(&mut self.state, &mut self.rng)
    }

    pub fn ball_pose(&self) -> BallPose {
        self.state.ball_pose()
    }

    pub fn tile_position(&self) -> Vec3 {
        self.state.tile.position()
    }

    pub fn marker_position(&self) -> Option<Vec3> {
        self.state.marker_position()
    }
}
