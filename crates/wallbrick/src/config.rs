/// Game tuning values.
///
/// All geometry is in window pixels; the window and the render target share
/// the same coordinate space.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,

    /// Pixels per tick, for both the paddle and the ball.
    pub speed: i32,

    pub paddle_size: (i32, i32),
    /// Gap between the paddle and the bottom edge.
    pub paddle_margin: i32,

    pub ball_size: (i32, i32),

    pub brick_size: (i32, i32),
    /// Inclusive range for the brick spawn x; keeps it clear of the walls.
    pub brick_spawn_x: (i32, i32),
    /// Inclusive range for the brick spawn y.
    pub brick_spawn_y: (i32, i32),
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            speed: 3,
            paddle_size: (100, 10),
            paddle_margin: 15,
            ball_size: (20, 20),
            brick_size: (40, 25),
            brick_spawn_x: (100, 372),
            brick_spawn_y: (40, 100),
        }
    }
}
