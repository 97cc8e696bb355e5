//! Edge Pong entry point
//!
//! Native headless host: there is no window or audio device yet, so the
//! screen state machine is driven by a scripted keyboard and observed through
//! the log (`RUST_LOG=info` or `debug`).
//!
//! Usage: `edge-pong [settings.json] [frames]`

use std::path::PathBuf;

use edge_pong::Settings;
use edge_pong::consts::FRAME_DT;
use edge_pong::host::{AudioSink, FrameDeps, Renderer, SoundEffect, WindowSize};
use edge_pong::input::{InputMapper, Scancode, scancode};
use edge_pong::screens::{ScreenKind, ScreenStateMachine};

const DEFAULT_SETTINGS_PATH: &str = "edge_pong.json";
const DEFAULT_FRAMES: u64 = 1200;

/// Counts draw calls instead of drawing
#[derive(Debug, Default)]
struct CountingRenderer {
    quads: u64,
    texts: u64,
}

impl Renderer for CountingRenderer {
    fn set_color(&mut self, _r: u8, _g: u8, _b: u8, _a: u8) {}

    fn draw_filled_quad(&mut self, _min: glam::Vec2, _max: glam::Vec2) {
        self.quads += 1;
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, _font_height: i32) {
        log::trace!("text {:?} at ({}, {})", text, x, y);
        self.texts += 1;
    }
}

/// Logs sound effects instead of playing them
#[derive(Debug)]
struct LogAudio {
    volume: f32,
    played: u64,
}

impl AudioSink for LogAudio {
    fn play_sound_effect(&mut self, effect: SoundEffect) {
        self.played += 1;
        log::debug!("sfx {:?} at volume {:.2}", effect, self.volume);
    }
}

/// Keys held over frame ranges `[from, to)`
struct KeyScript {
    holds: Vec<(u64, u64, Scancode)>,
}

impl KeyScript {
    /// Enter a match, wiggle both paddles, back out to the menu and quit
    fn demo(frames: u64) -> Self {
        let mut holds = vec![(2, 4, scancode::RETURN)];

        let play_end = frames.saturating_sub(30).max(10);
        let mut from = 10;
        let mut up = true;
        while from < play_end {
            let to = (from + 45).min(play_end);
            let (left, right) = if up {
                (scancode::LSHIFT, scancode::RCTRL)
            } else {
                (scancode::LCTRL, scancode::RSHIFT)
            };
            holds.push((from, to, left));
            holds.push((from + 10, (to + 10).min(play_end), right));
            from = to;
            up = !up;
        }

        holds.push((play_end + 5, play_end + 7, scancode::BACKSPACE));
        holds.push((play_end + 15, play_end + 17, scancode::ESCAPE));
        Self { holds }
    }

    fn is_down(&self, frame: u64, code: Scancode) -> bool {
        self.holds
            .iter()
            .any(|&(from, to, c)| c == code && (from..to).contains(&frame))
    }
}

fn main() {
    env_logger::init();
    log::info!("Edge Pong (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH));
    let frames = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_FRAMES);

    let settings = Settings::load_or_create(&settings_path);
    let windowing = WindowSize::default();
    let mut renderer = CountingRenderer::default();
    let mut audio = LogAudio {
        volume: settings.effective_sfx_volume(),
        played: 0,
    };
    let mut keyboard = InputMapper::default();
    let script = KeyScript::demo(frames);

    let mut machine = ScreenStateMachine::new(ScreenKind::MainMenu, settings, &windowing);

    // The script always ends in Escape; the cap covers a rebound quit key
    let frame_cap = frames + 100;
    let mut frame = 0;
    while frame < frame_cap {
        keyboard.update(|code| script.is_down(frame, code));
        let mut deps = FrameDeps {
            input: &keyboard,
            renderer: &mut renderer,
            audio: &mut audio,
            windowing: &windowing,
        };
        if !machine.frame(FRAME_DT, &mut deps) {
            break;
        }
        frame += 1;
    }

    log::info!(
        "Stopped after {} frames ({} quads, {} text runs, {} sounds)",
        machine.frames(),
        renderer.quads,
        renderer.texts,
        audio.played
    );
}
