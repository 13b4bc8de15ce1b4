//! Football Juggling - A 3x3 grid catching game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball motion, tile, round state machine)
//! - `input`: Key bindings mapping device keys to input symbols
//! - `clock`: Fixed timestep frame clock
//! - `game`: Context object tying state, randomness and bindings together
//! - `settings`: Data-driven configuration

pub mod clock;
pub mod game;
pub mod input;
pub mod settings;
pub mod sim;

pub use clock::FrameClock;
pub use game::Game;
pub use input::{InputSymbol, KeyBindings};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Frame rate of the fixed simulation tick
    pub const FPS: f64 = 60.0;
    /// Accepted range for a configured frame rate
    pub const MIN_FPS: f64 = 1.0;
    pub const MAX_FPS: f64 = 1000.0;
    /// Fixed simulation timestep
    pub const SIM_DT: f64 = 1.0 / FPS;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest wall-clock delta accepted per frame (seconds)
    pub const MAX_FRAME_DT: f64 = 0.1;

    /// Ball radius (tiles sit one radius below the cell plane)
    pub const BALL_RADIUS: f32 = 0.76;

    /// Height the ball starts falling from
    pub const INITIAL_FALL_HEIGHT: f32 = 3.0;
    /// Height lost per tick while falling
    pub const FALL_STEP: f32 = 0.1;

    /// Distance between neighbouring cell centers
    pub const CELL_SPACING: f32 = 2.0;

    /// Revolution speed after reset (degrees/tick)
    pub const DEFAULT_REVOLUTION_VELOCITY: f32 = 2.25;
    /// Spin speed after reset (degrees/tick)
    pub const DEFAULT_SPIN_VELOCITY: f32 = 1.0;

    /// Revolution speeds drawn per transit (degrees/tick)
    pub const REVOLUTION_VELOCITIES: [f32; 4] = [2.25, 2.5, 3.0, 3.6];
    /// Cosmetic spin speeds drawn per transit (degrees/tick)
    pub const SPIN_VELOCITIES: [f32; 4] = [1.0, 5.0, 10.0, 20.0];

    /// Revolution angle at which the ball lands on its destination
    pub const ARRIVAL_ANGLE: f32 = 180.0;
}

/// Wrap an angle in degrees to [0, 360)
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negatives
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(359.0), 359.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(370.0), 10.0);
        assert!((wrap_degrees(-10.0) - 350.0).abs() < 0.0001);
    }
}
