//! Title screen

use super::{FONT_HEIGHT, Screen, ScreenKind};
use crate::host::{FrameDeps, LogicalKey, Renderer, SoundEffect, Windowing};

#[derive(Debug, Default)]
pub struct MainMenuScreen;

impl Screen for MainMenuScreen {
    fn kind(&self) -> ScreenKind {
        ScreenKind::MainMenu
    }

    fn enter(&mut self, _windowing: &dyn Windowing) {}

    fn tick(
        &mut self,
        _dt: f32,
        deps: &mut FrameDeps<'_>,
        change_request: &mut dyn FnMut(ScreenKind),
    ) {
        let input = deps.input;
        if input.key_pressed(LogicalKey::MenuSelect) {
            deps.audio.play_sound_effect(SoundEffect::MenuSelect);
            change_request(ScreenKind::Pong);
        } else if input.key_pressed(LogicalKey::Options) {
            deps.audio.play_sound_effect(SoundEffect::MenuSelect);
            change_request(ScreenKind::Options);
        } else if input.key_pressed(LogicalKey::QuitApplication) {
            change_request(ScreenKind::Quit);
        }
    }

    fn render(&self, renderer: &mut dyn Renderer, windowing: &dyn Windowing) {
        let top = windowing.window_height() as i32 - 10;

        renderer.set_color(255, 0, 0, 255);
        renderer.draw_text("EDGE PONG", 10, top, FONT_HEIGHT);

        renderer.set_color(200, 200, 200, 255);
        renderer.draw_text("Return - play", 10, top - 2 * FONT_HEIGHT, FONT_HEIGHT);
        renderer.draw_text("O - options", 10, top - 3 * FONT_HEIGHT, FONT_HEIGHT);
        renderer.draw_text("Escape - quit", 10, top - 4 * FONT_HEIGHT, FONT_HEIGHT);
    }

    fn exit(&mut self) {}
}
