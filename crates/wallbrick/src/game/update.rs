use crate::config::GameConfig;

use super::state::GameState;

/// Input sampled for one tick.
#[derive(Debug, Copy, Clone, Default)]
pub struct TickInput {
    pub left_held: bool,
    pub right_held: bool,

    /// Extra horizontal kick imparted on a moving-paddle hit, 0 or 1. Drawn
    /// fresh every tick whether or not a key is held.
    pub effect_variation: i32,
}

/// Advances the game by one tick.
///
/// Branch order matters: the paddle collision wins over wall bounces, the
/// brick check runs afterwards regardless, the paddle clamps before the ball
/// integrates. Collision is tested against current positions only, so a fast
/// enough ball can tunnel through a thin obstacle.
pub fn step(state: &mut GameState, input: TickInput, cfg: &GameConfig) {
    let mut paddle_effect = None;
    if input.left_held {
        state.paddle.x -= cfg.speed;
        paddle_effect = Some(-(1 + input.effect_variation));
    }
    if input.right_held {
        // Right wins when both keys are held.
        state.paddle.x += cfg.speed;
        paddle_effect = Some(1 + input.effect_variation);
    }

    if state.ball.overlaps(state.paddle) {
        state.ball_dir.1 = -1;
        if let Some(effect) = paddle_effect {
            state.ball_dir.0 = effect;
        }
    } else {
        // Wall bounces only apply when the paddle did not collide. The four
        // checks are independent; both axes can flip in the same tick.
        if state.ball.right() >= cfg.width {
            state.ball_dir.0 = -1;
        }
        if state.ball.x < 0 {
            state.ball_dir.0 = 1;
        }
        if state.ball.bottom() >= cfg.height {
            state.ball_dir.1 = -1;
        }
        if state.ball.y < 0 {
            state.ball_dir.1 = 1;
        }
    }

    if state.brick_alive && state.ball.overlaps(state.brick) {
        state.ball_dir.1 = -1;
        if let Some(effect) = paddle_effect {
            state.ball_dir.0 = effect;
        }
        state.brick_alive = false;
    }

    state.paddle.x = state.paddle.x.clamp(0, cfg.width - state.paddle.w);

    state.ball.x += state.ball_dir.0 * cfg.speed;
    state.ball.y += state.ball_dir.1 * cfg.speed;
}

#[cfg(test)]
mod tests {
    use crate::game::geom::Rect;

    use super::*;

    fn cfg() -> GameConfig {
        GameConfig::default()
    }

    /// A state with everything far apart: ball mid-air, paddle at the
    /// bottom-left, brick alive in the top-left.
    fn base_state() -> GameState {
        GameState {
            paddle: Rect::new(0, 487, 100, 10),
            ball: Rect::new(250, 250, 20, 20),
            brick: Rect::new(100, 40, 40, 25),
            brick_alive: true,
            ball_dir: (1, 1),
        }
    }

    fn held(left: bool, right: bool, variation: i32) -> TickInput {
        TickInput {
            left_held: left,
            right_held: right,
            effect_variation: variation,
        }
    }

    // ── free flight ───────────────────────────────────────────────────────

    #[test]
    fn idle_tick_only_advances_the_ball() {
        let cfg = cfg();
        let mut state = base_state();
        let before = state.clone();

        step(&mut state, TickInput::default(), &cfg);

        assert_eq!(state.ball_dir, before.ball_dir);
        assert_eq!(state.ball.x, before.ball.x + cfg.speed);
        assert_eq!(state.ball.y, before.ball.y + cfg.speed);
        assert_eq!(state.paddle, before.paddle);
        assert_eq!(state.brick, before.brick);
        assert!(state.brick_alive);
    }

    // ── wall bounces ──────────────────────────────────────────────────────

    #[test]
    fn left_wall_bounce_flips_dx_and_ball_moves_right() {
        let cfg = cfg();
        let mut state = base_state();
        state.ball = Rect::new(-1, 250, 20, 20);
        state.ball_dir = (-1, 1);

        step(&mut state, TickInput::default(), &cfg);
        assert_eq!(state.ball_dir.0, 1);
        assert_eq!(state.ball.x, -1 + cfg.speed);

        let x_before = state.ball.x;
        step(&mut state, TickInput::default(), &cfg);
        assert!(state.ball.x > x_before);
    }

    #[test]
    fn right_wall_bounce_flips_dx() {
        let cfg = cfg();
        let mut state = base_state();
        state.ball = Rect::new(495, 250, 20, 20); // right() == 515 >= 512
        state.ball_dir = (1, 1);

        step(&mut state, TickInput::default(), &cfg);
        assert_eq!(state.ball_dir.0, -1);
    }

    #[test]
    fn corner_flips_both_axes_in_one_tick() {
        let cfg = cfg();
        let mut state = base_state();
        state.ball = Rect::new(500, 500, 20, 20); // past both far edges
        state.ball_dir = (1, 1);

        step(&mut state, TickInput::default(), &cfg);
        assert_eq!(state.ball_dir, (-1, -1));
    }

    #[test]
    fn top_wall_bounce_flips_dy() {
        let cfg = cfg();
        let mut state = base_state();
        state.ball = Rect::new(250, -2, 20, 20);
        state.ball_dir = (1, -1);

        step(&mut state, TickInput::default(), &cfg);
        assert_eq!(state.ball_dir.1, 1);
    }

    // ── paddle collision ──────────────────────────────────────────────────

    #[test]
    fn paddle_hit_sends_ball_up() {
        let cfg = cfg();
        let mut state = base_state();
        state.ball = Rect::new(20, 480, 20, 20); // overlapping the paddle
        state.ball_dir = (1, 1);

        step(&mut state, TickInput::default(), &cfg);
        assert_eq!(state.ball_dir.1, -1);
        // Stationary paddle imparts no horizontal kick.
        assert_eq!(state.ball_dir.0, 1);
    }

    #[test]
    fn moving_paddle_hit_with_variation_gives_dx_two() {
        let cfg = cfg();
        let mut state = base_state();
        state.ball = Rect::new(20, 480, 20, 20);
        state.ball_dir = (-1, 1);

        step(&mut state, held(false, true, 1), &cfg);
        assert_eq!(state.ball_dir, (2, -1));
    }

    #[test]
    fn moving_paddle_hit_without_variation_gives_unit_dx() {
        let cfg = cfg();
        let mut state = base_state();
        state.ball = Rect::new(20, 480, 20, 20);
        state.ball_dir = (1, 1);

        step(&mut state, held(true, false, 0), &cfg);
        assert_eq!(state.ball_dir, (-1, -1));
    }

    #[test]
    fn right_overrides_left_when_both_held() {
        let cfg = cfg();
        let mut state = base_state();
        state.paddle.x = 200;
        state.ball = Rect::new(220, 480, 20, 20);
        state.ball_dir = (-1, 1);

        step(&mut state, held(true, true, 1), &cfg);

        // Net paddle movement cancels out, the effect keeps the right sign.
        assert_eq!(state.paddle.x, 200);
        assert_eq!(state.ball_dir.0, 2);
    }

    #[test]
    fn paddle_collision_suppresses_wall_checks() {
        let cfg = cfg();
        let mut state = base_state();
        // Ball past the bottom-right corner but also overlapping the paddle:
        // the paddle branch wins, so dy is set by it and dx is untouched.
        state.paddle = Rect::new(400, 495, 100, 10);
        state.ball = Rect::new(495, 495, 20, 20);
        state.ball_dir = (1, 1);

        step(&mut state, TickInput::default(), &cfg);
        assert_eq!(state.ball_dir, (1, -1));
    }

    // ── brick collision ───────────────────────────────────────────────────

    #[test]
    fn brick_hit_deactivates_and_bounces() {
        let cfg = cfg();
        let mut state = base_state();
        state.ball = Rect::new(110, 50, 20, 20); // inside the brick
        state.ball_dir = (1, 1);

        step(&mut state, TickInput::default(), &cfg);
        assert!(!state.brick_alive);
        assert_eq!(state.ball_dir.1, -1);
    }

    #[test]
    fn brick_hit_takes_paddle_effect() {
        let cfg = cfg();
        let mut state = base_state();
        state.ball = Rect::new(110, 50, 20, 20);
        state.ball_dir = (1, 1);

        step(&mut state, held(true, false, 1), &cfg);
        assert!(!state.brick_alive);
        assert_eq!(state.ball_dir.0, -2);
    }

    #[test]
    fn dead_brick_never_retriggers() {
        let cfg = cfg();
        let mut state = base_state();
        state.brick_alive = false;
        state.ball = Rect::new(110, 50, 20, 20); // would overlap if alive
        state.ball_dir = (1, 1);

        step(&mut state, TickInput::default(), &cfg);

        assert!(!state.brick_alive);
        // No bounce happened: the ball kept falling.
        assert_eq!(state.ball_dir, (1, 1));
    }

    #[test]
    fn brick_destruction_is_permanent_over_many_ticks() {
        let cfg = cfg();
        let mut state = base_state();
        state.ball = Rect::new(110, 50, 20, 20);

        step(&mut state, TickInput::default(), &cfg);
        assert!(!state.brick_alive);

        for _ in 0..500 {
            step(&mut state, TickInput::default(), &cfg);
            assert!(!state.brick_alive);
        }
    }

    // ── paddle clamp ──────────────────────────────────────────────────────

    #[test]
    fn paddle_stays_in_bounds_for_any_input_sequence() {
        let cfg = cfg();
        let mut state = base_state();

        for i in 0..1000 {
            // Long one-sided runs in both directions plus mixed stretches.
            let input = match i % 7 {
                0 | 1 | 2 => held(true, false, i % 2),
                3 | 4 | 5 => held(false, true, i % 2),
                _ => held(true, true, 0),
            };
            step(&mut state, input, &cfg);

            assert!(state.paddle.x >= 0);
            assert!(state.paddle.x <= cfg.width - state.paddle.w);
        }
    }

    #[test]
    fn paddle_clamps_at_both_walls() {
        let cfg = cfg();
        let mut state = base_state();

        state.paddle.x = 1;
        step(&mut state, held(true, false, 0), &cfg);
        assert_eq!(state.paddle.x, 0);

        state.paddle.x = cfg.width - state.paddle.w - 1;
        step(&mut state, held(false, true, 0), &cfg);
        assert_eq!(state.paddle.x, cfg.width - state.paddle.w);
    }
}
