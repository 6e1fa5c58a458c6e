use rand::Rng;

use crate::config::GameConfig;

use super::geom::Rect;

/// Color channels are ints in `{0, 1}`; the renderer expands them to floats.
pub const PADDLE_COLOR: [i32; 4] = [1, 1, 1, 1];
pub const BALL_COLOR: [i32; 4] = [1, 1, 1, 1];
pub const BRICK_COLOR: [i32; 4] = [1, 0, 0, 1];

/// Full per-tick game state.
///
/// Plain data: the tick function is pure over this, which keeps the rules
/// unit-testable without a window or device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub paddle: Rect,
    pub ball: Rect,
    pub brick: Rect,

    /// Cleared on the first ball hit, never set again.
    pub brick_alive: bool,

    /// Per-axis direction. Usually each component is in `{-1, 0, 1}`; x may
    /// reach magnitude 2 or 3 right after a moving-paddle hit.
    pub ball_dir: (i32, i32),
}

impl GameState {
    /// Initial placement: paddle centered above the bottom edge, ball in the
    /// upper half, brick at a random spot inside the configured spawn ranges.
    pub fn new(cfg: &GameConfig, rng: &mut impl Rng) -> Self {
        let (pw, ph) = cfg.paddle_size;
        let (bw, bh) = cfg.ball_size;
        let (kw, kh) = cfg.brick_size;

        Self {
            paddle: Rect::new(
                cfg.width / 2 - pw / 2,
                cfg.height - ph - cfg.paddle_margin,
                pw,
                ph,
            ),
            ball: Rect::new(cfg.width / 2, cfg.height / 4, bw, bh),
            brick: Rect::new(
                rng.gen_range(cfg.brick_spawn_x.0..=cfg.brick_spawn_x.1),
                rng.gen_range(cfg.brick_spawn_y.0..=cfg.brick_spawn_y.1),
                kw,
                kh,
            ),
            brick_alive: true,
            ball_dir: (1, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn initial_placement() {
        let cfg = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let state = GameState::new(&cfg, &mut rng);

        assert_eq!(state.paddle, Rect::new(206, 487, 100, 10));
        assert_eq!(state.ball, Rect::new(256, 128, 20, 20));
        assert!(state.brick_alive);
        assert_eq!(state.ball_dir, (1, 1));
    }

    #[test]
    fn brick_spawns_inside_configured_ranges() {
        let cfg = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let state = GameState::new(&cfg, &mut rng);
            assert!(state.brick.x >= cfg.brick_spawn_x.0);
            assert!(state.brick.x <= cfg.brick_spawn_x.1);
            assert!(state.brick.y >= cfg.brick_spawn_y.0);
            assert!(state.brick.y <= cfg.brick_spawn_y.1);
        }
    }

    #[test]
    fn seeded_spawn_is_reproducible() {
        let cfg = GameConfig::default();
        let a = GameState::new(&cfg, &mut StdRng::seed_from_u64(99));
        let b = GameState::new(&cfg, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
