//! Edge Pong - two-paddle Pong driven by continuous edge collision
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, edge colliders, sweep, scoring)
//! - `host`: Capability traits the screens draw, play and read input through
//! - `input`: Keyboard scancode to logical key mapper with press/hold/release states
//! - `screens`: Main menu, options and gameplay screens plus the state machine hosting them
//! - `settings`: Persisted tuning and audio preferences

pub mod host;
pub mod input;
pub mod screens;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Host frame step (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Longest frame the host will hand to a screen (stalls get clamped)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Default window dimensions
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_SPEED: f32 = 400.0;
    pub const BALL_DIAMETER: f32 = 30.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 120.0;
    /// Vertical paddle speed while a key is held (pixels/s)
    pub const PADDLE_SPEED: f32 = 400.0;
    /// Gap between a paddle's outer face and the window edge
    pub const PADDLE_INSET: f32 = 10.0;

    /// Upper bound on resolved collisions within a single frame
    pub const MAX_SWEEP_ITERATIONS: u32 = 8;

    /// Widest serve angle away from the horizontal (radians)
    pub const SERVE_MAX_ANGLE: f32 = std::f32::consts::FRAC_PI_4;
}
