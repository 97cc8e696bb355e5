//! Options screen: shows the active tuning

use super::{FONT_HEIGHT, Screen, ScreenKind};
use crate::host::{FrameDeps, LogicalKey, Renderer, SoundEffect, Windowing};
use crate::settings::Settings;

#[derive(Debug, Default)]
pub struct OptionsScreen {
    settings: Settings,
}

impl OptionsScreen {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Lines shown on screen
    pub fn lines(&self) -> Vec<String> {
        let t = &self.settings.tuning;
        vec![
            format!("Ball speed: {:.0}", t.ball_speed),
            format!("Ball size: {:.0}", t.ball_diameter),
            format!("Paddle: {:.0} x {:.0}", t.paddle_width, t.paddle_height),
            format!("Paddle speed: {:.0}", t.paddle_speed),
            format!("Max bounces per frame: {}", t.max_sweep_iterations),
            format!("Volume: {:.0}%", self.settings.effective_sfx_volume() * 100.0),
        ]
    }
}

impl Screen for OptionsScreen {
    fn kind(&self) -> ScreenKind {
        ScreenKind::Options
    }

    fn enter(&mut self, _windowing: &dyn Windowing) {}

    fn tick(
        &mut self,
        _dt: f32,
        deps: &mut FrameDeps<'_>,
        change_request: &mut dyn FnMut(ScreenKind),
    ) {
        if deps.input.key_pressed(LogicalKey::MenuReturn) {
            deps.audio.play_sound_effect(SoundEffect::MenuReturn);
            change_request(ScreenKind::MainMenu);
        }
    }

    fn render(&self, renderer: &mut dyn Renderer, windowing: &dyn Windowing) {
        let mut y = windowing.window_height() as i32 - 10;

        renderer.set_color(255, 0, 0, 255);
        renderer.draw_text("OPTIONS", 10, y, FONT_HEIGHT);

        renderer.set_color(200, 200, 200, 255);
        y -= FONT_HEIGHT;
        for line in self.lines() {
            y -= FONT_HEIGHT;
            renderer.draw_text(&line, 10, y, FONT_HEIGHT);
        }
        renderer.draw_text("Backspace - back", 10, y - 2 * FONT_HEIGHT, FONT_HEIGHT);
    }

    fn exit(&mut self) {}
}
