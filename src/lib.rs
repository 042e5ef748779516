//! Ledge Runner - a coin-collecting 2D platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, progression)
//!
//! Rendering, input-device wiring, and UI chrome are the host's job: the host
//! samples a [`sim::TickInput`] each frame, calls [`sim::tick`], and draws
//! from the resulting [`sim::GameState`].

pub mod sim;

pub use sim::{GamePhase, GameState, Rect, TickInput, tick};

/// Game configuration constants
///
/// Velocities and accelerations are in pixels per frame, calibrated to the
/// ~60 Hz cadence in [`TICK_HZ`]. A host running at a different refresh rate
/// must rescale them.
pub mod consts {
    use glam::Vec2;

    /// Simulation cadence the constants are tuned for
    pub const TICK_HZ: u32 = 60;

    /// World dimensions (pixels)
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Downward acceleration applied every tick, grounded or not
    pub const GRAVITY: f32 = 0.6;
    /// Initial vertical velocity of a jump (negative = upward)
    pub const JUMP_STRENGTH: f32 = -12.0;
    /// Horizontal run speed
    pub const MOVE_SPEED: f32 = 5.0;

    /// Where a new, respawned, or level-advanced player is placed
    pub const SPAWN_POINT: Vec2 = Vec2::new(100.0, 300.0);

    /// Entity extents
    pub const PLAYER_SIZE: f32 = 32.0;
    pub const COIN_SIZE: f32 = 20.0;
    pub const ENEMY_SIZE: f32 = 30.0;

    /// A stomp counts only while the player's bottom edge, less this margin,
    /// is still above the enemy's top
    pub const STOMP_MARGIN: f32 = 10.0;
    /// Depth of the band below a platform top in which an overhanging enemy
    /// reverses patrol direction
    pub const EDGE_BAND: f32 = 10.0;

    /// Scoring
    pub const COIN_SCORE: u32 = 100;
    pub const STOMP_SCORE: u32 = 200;
    pub const LEVEL_CLEAR_SCORE: u32 = 1000;

    pub const STARTING_LIVES: i32 = 3;
}
