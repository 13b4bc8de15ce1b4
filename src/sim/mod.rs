//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Injected RNG only
//! - No rendering or platform dependencies

pub mod ball;
pub mod grid;
pub mod random;
pub mod state;
pub mod tick;
pub mod tile;
pub mod transition;

pub use ball::{Ball, BallPose};
pub use grid::{CELL_POSITIONS, CellIndex};
pub use random::{GameRng, RandomSource, ScriptedRandom};
pub use state::{GameEvent, GameMode, GameState};
pub use tick::{apply_input, tick};
pub use tile::Tile;
pub use transition::{Effect, Transition, Trigger, transition};
