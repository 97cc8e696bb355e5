//! Simulation tick
//!
//! One call per frame: move paddles from input, sweep the ball through the
//! colliders, then check for a goal.

use super::collision::{SweepReport, sweep_ball};
use super::scoring::resolve_scoring;
use super::state::{PongMatchState, Side};

/// Paddle commands for a single tick
///
/// Each axis is +1 (up), -1 (down) or 0 (hold still).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    pub left: f32,
    pub right: f32,
}

impl TickInput {
    pub fn axis(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Events produced by a tick, for the host to turn into sound and HUD updates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickEvents {
    pub sweep: SweepReport,
    pub scored: Option<Side>,
}

/// Advance the match by `dt` seconds
pub fn tick(state: &mut PongMatchState, input: &TickInput, dt: f32) -> TickEvents {
    let field_height = state.field.y;
    let paddle_speed = state.tuning.paddle_speed;
    for side in [Side::Left, Side::Right] {
        let axis = input.axis(side).clamp(-1.0, 1.0);
        if axis != 0.0 {
            state
                .paddle_mut(side)
                .move_vertically(axis, paddle_speed, dt, field_height);
        }
    }

    let sweep = sweep_ball(
        &mut state.ball,
        &state.colliders,
        &state.paddles,
        dt,
        state.tuning.ball_speed,
        state.tuning.max_sweep_iterations,
    );

    let scored = resolve_scoring(state);

    TickEvents { sweep, scored }
}
