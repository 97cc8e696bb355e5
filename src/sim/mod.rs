//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only (owned by the match)
//! - Stable collider iteration order (ties go to the first collider)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod edge;
pub mod geom;
pub mod scoring;
pub mod serve;
pub mod state;
pub mod tick;

pub use collision::{
    Contact, Impact, SweepReport, deflect, earliest_impact, paddle_covers, sweep_ball,
};
pub use edge::{EdgeCollider, make_edge_collider, play_field_edges};
pub use geom::{Range, Region, left_normal, normalize};
pub use scoring::{check_goal, resolve_scoring};
pub use serve::{biased_random_ball_velocity, serve_toward};
pub use state::{Ball, MatchTuning, Paddle, PongMatchState, Score, Side};
pub use tick::{TickEvents, TickInput, tick};
