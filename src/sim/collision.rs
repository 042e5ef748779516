//! Collision resolution helpers
//!
//! Each helper resolves one contact class from the fixed per-tick pipeline:
//! platform landings, coin pickups, enemy patrol reversals, and the
//! stomp-vs-damage classification. The pipeline order itself lives in
//! [`super::tick`] and is a load-bearing contract.

use super::rect::Rect;
use super::state::{Coin, Enemy, Platform, Player};
use crate::consts::*;

/// Land the player on whatever platform it fell onto this frame.
///
/// `jumping` is reset to true up front and only cleared by an actual landing,
/// so a player that walked off a ledge becomes airborne without any extra
/// bookkeeping. A landing requires downward motion and that the bottom edge,
/// rewound by this frame's vertical velocity, was at or above the platform
/// top. That rewind test is what distinguishes landing-on-top from side and
/// underside contacts; it approximates a swept check without full continuous
/// collision detection.
pub fn resolve_platform_landing(player: &mut Player, platforms: &[Platform]) {
    player.jumping = true;
    for platform in platforms {
        if player.rect.overlaps(&platform.rect)
            && player.vel.y > 0.0
            && player.rect.bottom() - player.vel.y <= platform.rect.top()
        {
            player.rect.pos.y = platform.rect.top() - player.rect.size.y;
            player.vel.y = 0.0;
            player.jumping = false;
        }
    }
}

/// Mark every uncollected coin overlapping the player as collected.
///
/// Returns how many were picked up this frame; already-collected coins are
/// skipped, so standing on a coin's spot awards it exactly once.
pub fn collect_coins(player: &Rect, coins: &mut [Coin]) -> u32 {
    let mut picked = 0;
    for coin in coins.iter_mut() {
        if !coin.collected && player.overlaps(&coin.rect) {
            coin.collected = true;
            picked += 1;
        }
    }
    picked
}

/// Reverse an enemy's patrol direction at the world edges and near platform
/// edges.
///
/// The platform check flips the enemy when its feet are within [`EDGE_BAND`]
/// of a platform top while its horizontal extent overhangs that platform,
/// turning it around before it would walk off. The check runs per platform;
/// an enemy overhanging two platform edges at once flips twice and keeps its
/// heading.
pub fn patrol_flip(enemy: &mut Enemy, platforms: &[Platform]) {
    if enemy.rect.left() <= 0.0 || enemy.rect.right() >= WORLD_WIDTH {
        enemy.vel_x = -enemy.vel_x;
    }

    for platform in platforms {
        let overhangs = enemy.rect.left() < platform.rect.left()
            || enemy.rect.right() > platform.rect.right();
        let feet_on_top = enemy.rect.bottom() >= platform.rect.top()
            && enemy.rect.bottom() <= platform.rect.top() + EDGE_BAND;
        if overhangs && feet_on_top {
            enemy.vel_x = -enemy.vel_x;
        }
    }
}

/// True when an overlap with a live enemy counts as a stomp: the player is
/// falling and its bottom edge, less [`STOMP_MARGIN`], is still above the
/// enemy's top. Anything else is damage.
pub fn is_stomp(player: &Player, enemy: &Enemy) -> bool {
    player.vel.y > 0.0 && player.rect.bottom() - STOMP_MARGIN < enemy.rect.top()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use crate::sim::state::Direction;

    fn platform(x: f32, y: f32, w: f32, h: f32) -> Platform {
        Platform {
            rect: Rect::new(x, y, w, h),
        }
    }

    fn falling_player(x: f32, y: f32, size: f32, vel_y: f32) -> Player {
        Player {
            rect: Rect::new(x, y, size, size),
            vel: Vec2::new(0.0, vel_y),
            jumping: true,
            direction: Direction::Right,
        }
    }

    #[test]
    fn test_landing_snaps_to_platform_top() {
        // 20px-tall body falling onto a platform top at y=450: after
        // resolution the body rests with its bottom exactly on the top.
        let platforms = [platform(200.0, 450.0, 150.0, 20.0)];
        let mut player = falling_player(250.0, 435.0, 20.0, 8.0);

        resolve_platform_landing(&mut player, &platforms);
        assert_eq!(player.rect.pos.y, 430.0);
        assert_eq!(player.rect.bottom(), 450.0);
        assert_eq!(player.vel.y, 0.0);
        assert!(!player.jumping);
    }

    #[test]
    fn test_no_landing_while_rising() {
        let platforms = [platform(200.0, 450.0, 150.0, 20.0)];
        let mut player = falling_player(250.0, 445.0, 32.0, -5.0);

        resolve_platform_landing(&mut player, &platforms);
        assert_eq!(player.rect.pos.y, 445.0, "rising player passes through");
        assert!(player.jumping);
    }

    #[test]
    fn test_no_landing_from_side_hit() {
        // Falling, but the rewound bottom was already below the platform
        // top, so this is a side contact rather than a landing.
        let platforms = [platform(200.0, 450.0, 150.0, 20.0)];
        let mut player = falling_player(195.0, 455.0, 32.0, 3.0);
        assert!(player.rect.bottom() - player.vel.y > 450.0);

        resolve_platform_landing(&mut player, &platforms);
        assert_eq!(player.rect.pos.y, 455.0);
        assert!(player.jumping);
    }

    #[test]
    fn test_grounded_player_marked_airborne_off_ledge() {
        // No platform under the player at all: jumping flips back to true
        // even though nothing else changes.
        let platforms = [platform(200.0, 450.0, 150.0, 20.0)];
        let mut player = falling_player(600.0, 100.0, 32.0, 0.6);
        player.jumping = false;

        resolve_platform_landing(&mut player, &platforms);
        assert!(player.jumping);
    }

    #[test]
    fn test_coin_collected_once() {
        let mut coins = vec![Coin {
            rect: Rect::new(250.0, 400.0, 20.0, 20.0),
            collected: false,
        }];
        let player = Rect::new(245.0, 395.0, 32.0, 32.0);

        assert_eq!(collect_coins(&player, &mut coins), 1);
        assert!(coins[0].collected);
        // Second pass over the same spot is a no-op
        assert_eq!(collect_coins(&player, &mut coins), 0);
    }

    #[test]
    fn test_patrol_flip_at_left_world_edge() {
        let mut enemy = Enemy {
            rect: Rect::new(0.0, 518.0, 30.0, 30.0),
            vel_x: -2.0,
            dead: false,
        };
        patrol_flip(&mut enemy, &[]);
        assert_eq!(enemy.vel_x, 2.0);
    }

    #[test]
    fn test_patrol_flip_at_right_world_edge() {
        let mut enemy = Enemy {
            rect: Rect::new(WORLD_WIDTH - 30.0, 518.0, 30.0, 30.0),
            vel_x: 2.0,
            dead: false,
        };
        patrol_flip(&mut enemy, &[]);
        assert_eq!(enemy.vel_x, -2.0);
    }

    #[test]
    fn test_patrol_flip_at_platform_edge() {
        // Enemy walking on a raised platform, left edge overhanging
        let platforms = [platform(200.0, 450.0, 150.0, 20.0)];
        let mut enemy = Enemy {
            rect: Rect::new(190.0, 420.0, 30.0, 30.0),
            vel_x: -1.5,
            dead: false,
        };
        patrol_flip(&mut enemy, &platforms);
        assert_eq!(enemy.vel_x, 1.5);
    }

    #[test]
    fn test_no_patrol_flip_mid_platform() {
        let platforms = [platform(200.0, 450.0, 150.0, 20.0)];
        let mut enemy = Enemy {
            rect: Rect::new(260.0, 420.0, 30.0, 30.0),
            vel_x: 1.5,
            dead: false,
        };
        patrol_flip(&mut enemy, &platforms);
        assert_eq!(enemy.vel_x, 1.5);
    }

    #[test]
    fn test_stomp_classification() {
        let enemy = Enemy {
            rect: Rect::new(300.0, 518.0, 30.0, 30.0),
            vel_x: 2.0,
            dead: false,
        };

        // Falling onto the enemy from above
        let stomper = falling_player(300.0, 480.0, 32.0, 8.0);
        assert!(is_stomp(&stomper, &enemy));

        // Overlapping from the side with no downward motion
        let mut walker = falling_player(290.0, 516.0, 32.0, 0.0);
        assert!(!is_stomp(&walker, &enemy));

        // Falling, but already sunk too deep to count as from-above
        walker.vel.y = 4.0;
        walker.rect.pos.y = 510.0; // bottom 542, minus margin 532 > 518
        assert!(!is_stomp(&walker, &enemy));
    }
}
