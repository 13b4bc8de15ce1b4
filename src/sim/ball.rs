//! Ball motion: the opening fall and the arc transits between cells
//!
//! A transit is half a revolution of the `last_cell` coordinate about an
//! axis through the midpoint of the two cells. The axis is perpendicular to
//! the travel direction and to the vertical, so the arc leaves `last_cell`
//! at 0°, peaks above the grid at 90° and lands on `next_cell` at 180°.

use glam::{Mat4, Quat, Vec3};

use super::grid::{CELL_COUNT, CellIndex};
use super::random::RandomSource;
use crate::consts::*;
use crate::wrap_degrees;

/// Ball position and orientation handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallPose {
    pub position: Vec3,
    pub orientation: Quat,
}

impl BallPose {
    /// Model matrix for a mesh of the given uniform scale
    pub fn model_matrix(&self, scale: f32) -> Mat4 {
        Mat4::from_scale_rotation_translation(Vec3::splat(scale), self.orientation, self.position)
    }
}

/// The juggled ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    /// Vertical offset during the opening fall
    pub falling_height: f32,
    /// Cell the current transit started from
    pub last_cell: CellIndex,
    /// Cell the current transit lands on
    pub next_cell: CellIndex,
    /// Transit progress in degrees (180 = arrived)
    pub revolution_angle: f32,
    /// Cosmetic self-rotation in degrees, [0, 360)
    pub spin_angle: f32,
    pub revolution_velocity: f32,
    pub spin_velocity: f32,
    /// Unit axis of the current transit (zero until a destination is chosen)
    pub rotation_axis: Vec3,
    /// Midpoint of `last_cell` and `next_cell`
    pub rotation_center: Vec3,
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

impl Ball {
    pub fn new() -> Self {
        Self {
            falling_height: INITIAL_FALL_HEIGHT,
            last_cell: CellIndex::CENTER,
            next_cell: CellIndex::CENTER,
            revolution_angle: 0.0,
            spin_angle: 0.0,
            revolution_velocity: DEFAULT_REVOLUTION_VELOCITY,
            spin_velocity: DEFAULT_SPIN_VELOCITY,
            rotation_axis: Vec3::ZERO,
            rotation_center: CellIndex::CENTER.position(),
        }
    }

    /// Restore the post-construction state (start of a new fall)
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Drop by one fall step. The caller watches for the height going negative.
    pub fn tick_fall(&mut self) {
        self.falling_height -= FALL_STEP;
    }

    pub fn has_fallen(&self) -> bool {
        self.falling_height < 0.0
    }

    /// Start a new transit from the current destination
    pub fn choose_new_destination(&mut self, rng: &mut impl RandomSource) {
        self.last_cell = self.next_cell;
        self.revolution_angle = 0.0;

        // Draw among the other eight cells so the destination never repeats
        let draw = rng.below(CELL_COUNT - 1);
        let skip = self.last_cell.index();
        let next = if draw >= skip { draw + 1 } else { draw };
        self.next_cell = CellIndex::ALL[next];

        self.revolution_velocity = REVOLUTION_VELOCITIES[rng.below(REVOLUTION_VELOCITIES.len())];
        self.spin_velocity = SPIN_VELOCITIES[rng.below(SPIN_VELOCITIES.len())];
        self.update_rotation();

        log::debug!(
            "Transit {} -> {} (rev {}°/tick, spin {}°/tick)",
            self.last_cell.index(),
            self.next_cell.index(),
            self.revolution_velocity,
            self.spin_velocity
        );
    }

    /// Advance one tick of the transit (revolution is not clamped)
    pub fn tick_juggle(&mut self) {
        self.spin_angle = wrap_degrees(self.spin_angle + self.spin_velocity);
        self.revolution_angle += self.revolution_velocity;
    }

    pub fn has_arrived(&self) -> bool {
        self.revolution_angle >= ARRIVAL_ANGLE
    }

    /// Pose while waiting to start or falling onto the center cell
    pub fn falling_pose(&self) -> BallPose {
        BallPose {
            position: Vec3::new(0.0, self.falling_height, 0.0),
            orientation: Quat::IDENTITY,
        }
    }

    /// Pose along the current transit arc
    pub fn arc_pose(&self) -> BallPose {
        let start = self.last_cell.position();
        let position = if self.rotation_axis == Vec3::ZERO {
            start
        } else {
            let revolution =
                Quat::from_axis_angle(self.rotation_axis, self.revolution_angle.to_radians());
            self.rotation_center + revolution * (start - self.rotation_center)
        };
        BallPose {
            position,
            orientation: Quat::from_rotation_x(self.spin_angle.to_radians()),
        }
    }

    fn update_rotation(&mut self) {
        let last = self.last_cell.position();
        let next = self.next_cell.position();
        let direction = next - last;
        self.rotation_axis = direction.cross(Vec3::NEG_Y).normalize_or_zero();
        self.rotation_center = (last + next) * 0.5;
    }
}
