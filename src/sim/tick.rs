//! Per-frame simulation tick
//!
//! One call advances the world by exactly one frame. The orchestration here
//! is pure sequencing; the rules live in [`super::collision`] and
//! [`super::state`]. The resolution order (platforms, coins, enemies, world
//! bounds, level clear) is a behavioral contract: reordering it changes which
//! respawn or scoring trigger fires first in a given frame.

use super::collision::{collect_coins, is_stomp, patrol_flip, resolve_platform_landing};
use super::state::{Direction, GamePhase, GameState};
use crate::consts::*;

/// Input snapshot for a single tick, sampled fresh each frame by the host.
/// The core is agnostic to which physical keys map to which action.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Pause toggle (one-shot; the host clears it after the tick)
    pub pause: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => state.phase = GamePhase::Playing,
            _ => {}
        }
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    step_physics(state, input);
    resolve_platform_landing(&mut state.player, &state.platforms);

    let picked = collect_coins(&state.player.rect, &mut state.coins);
    if picked > 0 {
        state.score += picked * COIN_SCORE;
        log::debug!("picked up {} coin(s), score {}", picked, state.score);
    }

    resolve_enemies(state);
    resolve_world_bounds(state);
    resolve_level_clear(state);
}

/// Physics & movement: input-derived horizontal velocity, jump impulse,
/// unconditional gravity, position integration, enemy patrol movement.
fn step_physics(state: &mut GameState, input: &TickInput) {
    let player = &mut state.player;

    player.vel.x = match (input.left, input.right) {
        (true, false) => {
            player.direction = Direction::Left;
            -MOVE_SPEED
        }
        (false, true) => {
            player.direction = Direction::Right;
            MOVE_SPEED
        }
        // Neither held, or both cancelling out
        _ => 0.0,
    };

    // Holding jump while airborne has no effect: `jumping` is already true
    if input.jump && !player.jumping {
        player.vel.y = JUMP_STRENGTH;
        player.jumping = true;
    }

    // Gravity applies even while grounded; the platform resolution step
    // zeroes it again every frame the player is standing on something
    player.vel.y += GRAVITY;
    player.rect.pos += player.vel;

    for enemy in &mut state.enemies {
        if !enemy.dead {
            enemy.rect.pos.x += enemy.vel_x;
        }
    }
}

/// Patrol reversals, then stomp-or-damage for every live enemy touching the
/// player. Damage is applied immediately per enemy, so a fatal hit flips the
/// phase before later enemies are examined.
fn resolve_enemies(state: &mut GameState) {
    for i in 0..state.enemies.len() {
        if state.enemies[i].dead {
            continue;
        }

        patrol_flip(&mut state.enemies[i], &state.platforms);

        if state.player.rect.overlaps(&state.enemies[i].rect) {
            if is_stomp(&state.player, &state.enemies[i]) {
                state.enemies[i].dead = true;
                state.player.vel.y = JUMP_STRENGTH / 2.0;
                state.score += STOMP_SCORE;
                log::debug!("stomped enemy, score {}", state.score);
            } else {
                state.take_hit();
            }
        }
    }
}

/// Clamp the player horizontally; falling past the bottom is damage,
/// identical to an enemy hit.
fn resolve_world_bounds(state: &mut GameState) {
    let max_x = WORLD_WIDTH - state.player.rect.size.x;
    state.player.rect.pos.x = state.player.rect.pos.x.clamp(0.0, max_x);

    if state.player.rect.pos.y > WORLD_HEIGHT {
        state.take_hit();
    }
}

/// Level advance once every coin is collected: coins are recycled and the
/// player teleported to spawn. Platforms and enemies are deliberately left
/// alone, and so is the player's velocity.
fn resolve_level_clear(state: &mut GameState) {
    if state.coins.iter().all(|c| c.collected) {
        state.level += 1;
        state.score += LEVEL_CLEAR_SCORE;
        for coin in &mut state.coins {
            coin.collected = false;
        }
        state.player.rect.pos = SPAWN_POINT;
        log::info!("level cleared, advancing to level {}", state.level);
    }
}
