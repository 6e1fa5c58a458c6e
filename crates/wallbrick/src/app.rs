use rand::Rng;
use rand::rngs::StdRng;

use wallbrick_engine::core::{App, AppControl, FrameCtx};
use wallbrick_engine::input::Key;
use wallbrick_engine::render::{ColorRgba, QuadRenderer};

use crate::config::GameConfig;
use crate::game::records::pack;
use crate::game::state::GameState;
use crate::game::update::{TickInput, step};

/// Per-frame glue: sample input, advance the game one tick, pack the quad
/// records and hand them to the renderer.
pub struct Wallbrick {
    cfg: GameConfig,
    state: GameState,
    rng: StdRng,
    renderer: QuadRenderer,
}

impl Wallbrick {
    pub fn new(cfg: GameConfig, mut rng: StdRng) -> Self {
        let state = GameState::new(&cfg, &mut rng);
        log::debug!("brick spawned at ({}, {})", state.brick.x, state.brick.y);

        let renderer = QuadRenderer::new(cfg.width as u32, cfg.height as u32);

        Self {
            cfg,
            state,
            rng,
            renderer,
        }
    }
}

impl App for Wallbrick {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input_frame.keys_pressed.contains(&Key::Escape) {
            return AppControl::Exit;
        }

        let input = TickInput {
            left_held: ctx.input.key_down(Key::A) || ctx.input.key_down(Key::ArrowLeft),
            right_held: ctx.input.key_down(Key::D) || ctx.input.key_down(Key::ArrowRight),
            effect_variation: self.rng.gen_range(0..2),
        };

        let brick_was_alive = self.state.brick_alive;
        step(&mut self.state, input, &self.cfg);
        if brick_was_alive && !self.state.brick_alive {
            log::info!("brick destroyed on frame {}", ctx.time.frame_index);
        }

        let records = pack(&self.state);
        let renderer = &mut self.renderer;
        ctx.render(|rctx, target| {
            renderer.render(rctx, target, &records, ColorRgba::TRANSPARENT);
        })
    }
}
