//! Round state and core simulation types

use glam::Vec3;

use super::ball::{Ball, BallPose};
use super::grid::CellIndex;
use super::tile::Tile;

/// Current mode of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Ball hangs above the center cell, waiting for the start input
    #[default]
    BeforeStart,
    /// Ball drops onto the center cell
    Falling,
    /// Ball arcs between cells; the tile must meet it
    Juggling,
    /// A landing was missed; waiting for the restart input
    Failed,
}

/// Something observable that happened during an input or tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A new round began (score reset to zero)
    RoundStarted,
    /// The ball was caught; carries the running score
    Scored { score: u32 },
    /// The ball landed away from the tile; carries the final score
    Failed { score: u32 },
}

impl GameEvent {
    /// Console line(s) for this event, if it has any.
    ///
    /// `start_key` names the key bound to start/restart in the prompt.
    pub fn console_message(&self, start_key: &str) -> Option<String> {
        match self {
            GameEvent::RoundStarted => None,
            GameEvent::Scored { score } => Some(score.to_string()),
            GameEvent::Failed { score } => Some(format!(
                "Failed!\nScore: {score}\nPress {start_key} to restart.\n"
            )),
        }
    }
}

/// Complete round state (ball, tile, mode, score)
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub mode: GameMode,
    /// Catches in the current round
    pub score: u32,
    pub ball: Ball,
    /// The player's tile
    pub tile: Tile,
    /// Marks the missed cell while `Failed`
    pub marker: Tile,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            mode: GameMode::BeforeStart,
            score: 0,
            ball: Ball::new(),
            tile: Tile::default(),
            marker: Tile::default(),
        }
    }

    /// Put ball, tile and score back to their start-of-round values
    pub fn reset_round(&mut self) {
        self.ball.reset();
        self.tile.set_cell(CellIndex::CENTER);
        self.score = 0;
    }

    /// Whether the tile sits under the ball's landing cell
    pub fn is_catching(&self) -> bool {
        self.tile.cell == self.ball.next_cell
    }

    /// Ball pose for the renderer in the current mode
    pub fn ball_pose(&self) -> BallPose {
        match self.mode {
            GameMode::BeforeStart | GameMode::Falling => self.ball.falling_pose(),
            GameMode::Juggling | GameMode::Failed => self.ball.arc_pose(),
        }
    }

    /// Missed cell, shown only after a failure
    pub fn visible_marker(&self) -> Option<Tile> {
        (self.mode == GameMode::Failed).then_some(self.marker)
    }

    pub fn marker_position(&self) -> Option<Vec3> {
        self.visible_marker().map(|m| m.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.mode, GameMode::BeforeStart);
        assert_eq!(state.score, 0);
        assert_eq!(state.tile.cell, CellIndex::CENTER);
        assert!(state.visible_marker().is_none());
    }

    #[test]
    fn test_console_messages() {
        assert_eq!(GameEvent::RoundStarted.console_message("space"), None);
        assert_eq!(
            GameEvent::Scored { score: 12 }.console_message("space").as_deref(),
            Some("12")
        );
        let failed = GameEvent::Failed { score: 7 }.console_message("space").unwrap();
        assert!(failed.starts_with("Failed!"));
        assert!(failed.contains("Score: 7"));
        assert!(failed.contains("Press space to restart."));
    }

    #[test]
    fn test_restart_prompt_names_bound_key() {
        let failed = GameEvent::Failed { score: 3 }.console_message("R").unwrap();
        assert!(failed.contains("Press R to restart."));
        assert!(!failed.contains("space"));
    }

    #[test]
    fn test_marker_only_visible_when_failed() {
        let mut state = GameState::new();
        state.marker.set_cell(CellIndex::ALL[0]);
        assert!(state.marker_position().is_none());
        state.mode = GameMode::Failed;
        assert_eq!(state.visible_marker().map(|m| m.cell), Some(CellIndex::ALL[0]));
    }

    #[test]
    fn test_ball_pose_follows_mode() {
        let mut state = GameState::new();
        assert_eq!(state.ball_pose(), state.ball.falling_pose());
        state.mode = GameMode::Juggling;
        assert_eq!(state.ball_pose(), state.ball.arc_pose());
    }
}
