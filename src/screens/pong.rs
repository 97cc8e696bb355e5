//! Gameplay screen
//!
//! Owns the match for as long as the screen is active and translates between
//! host capabilities and the pure simulation.

use glam::Vec2;

use super::{FONT_HEIGHT, Screen, ScreenKind};
use crate::host::{FrameDeps, InputSource, LogicalKey, Renderer, SoundEffect, Windowing};
use crate::settings::Settings;
use crate::sim::{PongMatchState, Side, TickInput, tick};

/// Dash length and gap of the center line
const CENTER_DASH: f32 = 20.0;

pub struct PongScreen {
    settings: Settings,
    state: Option<PongMatchState>,
    /// Smoothed frame time for the FPS readout
    frame_time: f32,
}

impl PongScreen {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            state: None,
            frame_time: 0.0,
        }
    }

    /// The running match, between `enter` and `exit`
    pub fn match_state(&self) -> Option<&PongMatchState> {
        self.state.as_ref()
    }

    pub fn match_state_mut(&mut self) -> Option<&mut PongMatchState> {
        self.state.as_mut()
    }

    fn read_input(input: &dyn InputSource) -> TickInput {
        let axis = |up: LogicalKey, down: LogicalKey| {
            let mut v = 0.0;
            if input.key_down(up) {
                v += 1.0;
            }
            if input.key_down(down) {
                v -= 1.0;
            }
            v
        };
        TickInput {
            left: axis(LogicalKey::LeftPaddleUp, LogicalKey::LeftPaddleDown),
            right: axis(LogicalKey::RightPaddleUp, LogicalKey::RightPaddleDown),
        }
    }
}

impl Screen for PongScreen {
    fn kind(&self) -> ScreenKind {
        ScreenKind::Pong
    }

    fn enter(&mut self, windowing: &dyn Windowing) {
        let seed = self.settings.match_seed();
        self.state = Some(PongMatchState::new(
            windowing.window_size(),
            self.settings.tuning.clone().sanitized(),
            seed,
        ));
        self.frame_time = 0.0;
    }

    fn tick(
        &mut self,
        dt: f32,
        deps: &mut FrameDeps<'_>,
        change_request: &mut dyn FnMut(ScreenKind),
    ) {
        if deps.input.key_pressed(LogicalKey::MenuReturn) {
            deps.audio.play_sound_effect(SoundEffect::MenuReturn);
            change_request(ScreenKind::MainMenu);
            return;
        }

        let Some(state) = self.state.as_mut() else {
            return;
        };

        if dt > 0.0 {
            self.frame_time = if self.frame_time == 0.0 {
                dt
            } else {
                self.frame_time * 0.9 + dt * 0.1
            };
        }

        let input = Self::read_input(deps.input);
        let events = tick(state, &input, dt);

        for side in events.sweep.paddle_hits() {
            log::trace!("{} paddle return", side.as_str());
            deps.audio.play_sound_effect(SoundEffect::PaddleHit);
        }
        if events.scored.is_some() {
            deps.audio.play_sound_effect(SoundEffect::Score);
        }
    }

    fn render(&self, renderer: &mut dyn Renderer, windowing: &dyn Windowing) {
        let Some(state) = &self.state else {
            return;
        };

        // Center line
        renderer.set_color(90, 90, 90, 255);
        let mid_x = state.field.x * 0.5;
        let mut y = 0.0;
        while y < state.field.y {
            let top = (y + CENTER_DASH).min(state.field.y);
            renderer.draw_filled_quad(Vec2::new(mid_x - 2.0, y), Vec2::new(mid_x + 2.0, top));
            y += CENTER_DASH * 2.0;
        }

        renderer.set_color(255, 255, 255, 255);
        for side in [Side::Left, Side::Right] {
            let region = state.paddle(side).region();
            renderer.draw_filled_quad(region.min, region.max);
        }
        let ball = state.ball.region();
        renderer.draw_filled_quad(ball.min, ball.max);

        let top = windowing.window_height() as i32 - 10;
        let quarter = (windowing.window_width() * 0.25) as i32;
        renderer.draw_text(&state.score.left.to_string(), quarter, top, FONT_HEIGHT);
        renderer.draw_text(&state.score.right.to_string(), 3 * quarter, top, FONT_HEIGHT);

        if self.settings.show_fps && self.frame_time > 0.0 {
            let fps = (1.0 / self.frame_time).round() as u32;
            renderer.set_color(0, 255, 0, 255);
            renderer.draw_text(&format!("FPS {}", fps), 10, 10 + FONT_HEIGHT, FONT_HEIGHT);
        }
    }

    fn exit(&mut self) {
        if let Some(state) = self.state.take() {
            log::info!(
                "Match ended {} - {}",
                state.score.left,
                state.score.right
            );
        }
    }
}
