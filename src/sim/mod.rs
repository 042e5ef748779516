//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display frame, no delta-time scaling
//! - Stable iteration order (world vectors are never reordered or compacted)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{collect_coins, is_stomp, patrol_flip, resolve_platform_landing};
pub use rect::Rect;
pub use state::{Coin, Direction, Enemy, GamePhase, GameState, Platform, Player};
pub use tick::{TickInput, tick};
