use wallbrick_engine::render::QuadRecord;

use super::geom::Rect;
use super::state::{BALL_COLOR, BRICK_COLOR, GameState, PADDLE_COLOR};

/// Packs the state into the fixed three-record layout the renderer consumes:
/// `paddle, ball, brick`, eight ints each.
///
/// A destroyed brick keeps its slot with a zero-alpha color so the layout
/// never changes; the renderer emits no pixels for it.
pub fn pack(state: &GameState) -> [QuadRecord; 3] {
    let brick_color = if state.brick_alive {
        BRICK_COLOR
    } else {
        [BRICK_COLOR[0], BRICK_COLOR[1], BRICK_COLOR[2], 0]
    };

    [
        record(state.paddle, PADDLE_COLOR),
        record(state.ball, BALL_COLOR),
        record(state.brick, brick_color),
    ]
}

fn record(rect: Rect, color: [i32; 4]) -> QuadRecord {
    QuadRecord::new(rect.x, rect.y, rect.w, rect.h, color)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> GameState {
        GameState {
            paddle: Rect::new(206, 487, 100, 10),
            ball: Rect::new(256, 128, 20, 20),
            brick: Rect::new(150, 60, 40, 25),
            brick_alive: true,
            ball_dir: (1, 1),
        }
    }

    #[test]
    fn wire_layout_is_three_records_of_eight_ints() {
        let records = pack(&sample_state());
        let bytes: &[u8] = bytemuck::cast_slice(&records);
        assert_eq!(bytes.len(), 3 * 8 * 4);

        let ints: &[i32] = bytemuck::cast_slice(&records);
        #[rustfmt::skip]
        assert_eq!(ints, &[
            206, 487, 100, 10, 1, 1, 1, 1, // paddle
            256, 128,  20, 20, 1, 1, 1, 1, // ball
            150,  60,  40, 25, 1, 0, 0, 1, // brick
        ]);
    }

    #[test]
    fn dead_brick_packs_with_zero_alpha() {
        let mut state = sample_state();
        state.brick_alive = false;

        let records = pack(&state);
        assert_eq!(records[2].color, [1, 0, 0, 0]);
        // Geometry is preserved; only the alpha channel hides it.
        assert_eq!(records[2].rect, [150, 60, 40, 25]);
    }

    #[test]
    fn record_order_is_paddle_ball_brick() {
        let state = sample_state();
        let records = pack(&state);
        assert_eq!(records[0].rect[0], state.paddle.x);
        assert_eq!(records[1].rect[0], state.ball.x);
        assert_eq!(records[2].rect[0], state.brick.x);
    }
}
