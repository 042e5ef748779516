//! Game state and core simulation types
//!
//! Everything the renderer needs after a tick lives here: the full entity
//! model plus session score/lives/level. The whole [`GameState`] is the
//! render snapshot.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting on the start command; no entities move
    Ready,
    /// Active gameplay
    Playing,
    /// Tick requests are ignored until unpaused
    Paused,
    /// Run ended; only restart leaves this phase
    GameOver,
}

/// Which way the player sprite faces. Cosmetic only, never feeds physics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Left,
    #[default]
    Right,
}

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Velocity in pixels per frame
    pub vel: Vec2,
    /// True whenever the player is not resting on a platform
    pub jumping: bool,
    pub direction: Direction,
}

impl Player {
    pub fn spawn() -> Self {
        Self {
            rect: Rect::new(SPAWN_POINT.x, SPAWN_POINT.y, PLAYER_SIZE, PLAYER_SIZE),
            vel: Vec2::ZERO,
            jumping: false,
            direction: Direction::Right,
        }
    }

    /// Teleport back to the spawn point with zero velocity (damage respawn)
    pub fn respawn(&mut self) {
        self.rect.pos = SPAWN_POINT;
        self.vel = Vec2::ZERO;
    }
}

/// A static platform. Immutable for the whole session; level advance does
/// not reshuffle the layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
}

/// A collectible coin. Recycled on level clear rather than destroyed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub rect: Rect,
    pub collected: bool,
}

/// A patrolling enemy. Dead enemies stay in the vector and are skipped by
/// physics and drawing; the collection is never compacted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub rect: Rect,
    /// Horizontal patrol speed; the sign is the patrol direction
    pub vel_x: f32,
    pub dead: bool,
}

/// Complete game state: entity model plus session progression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub score: u32,
    pub lives: i32,
    pub level: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
    pub enemies: Vec<Enemy>,
}

impl GameState {
    /// Fresh session in the `Ready` phase with the standard level layout
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Ready,
            score: 0,
            lives: STARTING_LIVES,
            level: 1,
            time_ticks: 0,
            player: Player::spawn(),
            platforms: level_platforms(),
            coins: level_coins(),
            enemies: level_enemies(),
        }
    }

    /// Begin a session from the title or game-over screen.
    ///
    /// Resets score, lives, level, and the full entity model. A no-op while
    /// a session is already running, so a stray start command mid-game
    /// cannot clobber state.
    pub fn start(&mut self) {
        if matches!(self.phase, GamePhase::Ready | GamePhase::GameOver) {
            self.reset_session();
        }
    }

    /// Restart after game over: score 0, lives 3, level 1, fresh entities
    pub fn restart(&mut self) {
        if self.phase == GamePhase::GameOver {
            self.reset_session();
        }
    }

    fn reset_session(&mut self) {
        *self = Self::new();
        self.phase = GamePhase::Playing;
        log::info!("session started");
    }

    /// One damage event: lose a life and respawn.
    ///
    /// The decrement and the game-over flip happen in the same update, so no
    /// tick can observe lives <= 0 while still `Playing`.
    pub(crate) fn take_hit(&mut self) {
        self.lives -= 1;
        log::debug!("player hit, {} lives left", self.lives);
        if self.lives <= 0 {
            self.phase = GamePhase::GameOver;
            log::info!(
                "game over at level {} with score {}",
                self.level,
                self.score
            );
        }
        self.player.respawn();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

fn level_platforms() -> Vec<Platform> {
    [
        (0.0, 550.0, 800.0, 50.0), // ground
        (200.0, 450.0, 150.0, 20.0),
        (400.0, 350.0, 150.0, 20.0),
        (600.0, 250.0, 150.0, 20.0),
        (100.0, 200.0, 100.0, 20.0),
        (500.0, 150.0, 120.0, 20.0),
    ]
    .into_iter()
    .map(|(x, y, w, h)| Platform {
        rect: Rect::new(x, y, w, h),
    })
    .collect()
}

fn level_coins() -> Vec<Coin> {
    [
        (250.0, 400.0),
        (450.0, 300.0),
        (650.0, 200.0),
        (150.0, 150.0),
        (550.0, 100.0),
        (300.0, 500.0),
        (700.0, 500.0),
    ]
    .into_iter()
    .map(|(x, y)| Coin {
        rect: Rect::new(x, y, COIN_SIZE, COIN_SIZE),
        collected: false,
    })
    .collect()
}

fn level_enemies() -> Vec<Enemy> {
    [
        (300.0, 518.0, 2.0),
        (500.0, 518.0, -2.0),
        (250.0, 418.0, 1.5),
    ]
    .into_iter()
    .map(|(x, y, vel_x)| Enemy {
        rect: Rect::new(x, y, ENEMY_SIZE, ENEMY_SIZE),
        vel_x,
        dead: false,
    })
    .collect()
}
