//! Capabilities screens are given by the host
//!
//! Screens never own a window, GPU or audio device. They query input, describe
//! what to draw and request sounds through these traits, so tests can hand
//! them in-memory doubles.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Logical keys screens react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalKey {
    LeftPaddleUp,
    LeftPaddleDown,
    RightPaddleUp,
    RightPaddleDown,
    MenuSelect,
    MenuReturn,
    Options,
    QuitApplication,
}

impl LogicalKey {
    pub const COUNT: usize = 8;

    pub const ALL: [LogicalKey; Self::COUNT] = [
        LogicalKey::LeftPaddleUp,
        LogicalKey::LeftPaddleDown,
        LogicalKey::RightPaddleUp,
        LogicalKey::RightPaddleDown,
        LogicalKey::MenuSelect,
        LogicalKey::MenuReturn,
        LogicalKey::Options,
        LogicalKey::QuitApplication,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Ball returned by a paddle
    PaddleHit,
    /// A point was scored
    Score,
    /// Menu entry chosen
    MenuSelect,
    /// Back to the previous menu
    MenuReturn,
}

/// Per-frame keyboard state, by logical key
pub trait InputSource {
    /// Went down this frame
    fn key_pressed(&self, key: LogicalKey) -> bool;
    /// Down for more than one frame
    fn key_held(&self, key: LogicalKey) -> bool;
    /// Went up this frame
    fn key_released(&self, key: LogicalKey) -> bool;
    /// Idle
    fn key_none(&self, key: LogicalKey) -> bool;

    /// Down this frame, whether newly or still
    fn key_down(&self, key: LogicalKey) -> bool {
        self.key_pressed(key) || self.key_held(key)
    }
}

/// Immediate-mode 2D drawing (y-up pixel coordinates)
pub trait Renderer {
    fn set_color(&mut self, r: u8, g: u8, b: u8, a: u8);
    fn draw_filled_quad(&mut self, min: Vec2, max: Vec2);
    fn draw_text(&mut self, text: &str, x: i32, y: i32, font_height: i32);
}

/// Fire-and-forget sound effects
pub trait AudioSink {
    fn play_sound_effect(&mut self, effect: SoundEffect);
}

/// Read-only window information
pub trait Windowing {
    fn window_width(&self) -> f32;
    fn window_height(&self) -> f32;

    fn window_size(&self) -> Vec2 {
        Vec2::new(self.window_width(), self.window_height())
    }
}

/// Fixed window size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: crate::consts::WINDOW_WIDTH,
            height: crate::consts::WINDOW_HEIGHT,
        }
    }
}

impl Windowing for WindowSize {
    fn window_width(&self) -> f32 {
        self.width
    }

    fn window_height(&self) -> f32 {
        self.height
    }
}

/// Everything a screen needs during a tick
pub struct FrameDeps<'a> {
    pub input: &'a dyn InputSource,
    pub renderer: &'a mut dyn Renderer,
    pub audio: &'a mut dyn AudioSink,
    pub windowing: &'a dyn Windowing,
}
