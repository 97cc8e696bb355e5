//! Match state and core simulation types
//!
//! Everything a running match mutates lives in `PongMatchState`, owned by the
//! gameplay screen. There are no module-level statics, so independent
//! matches can run side by side.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::edge::{EdgeCollider, play_field_edges};
use super::geom::Region;
use super::serve::biased_random_ball_velocity;
use crate::consts::*;

/// One of the two players / paddles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal direction pointing at this side of the field
    pub fn direction(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// A paddle, positioned by its center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub position: Vec2,
    /// Width and height
    pub dimensions: Vec2,
}

impl Paddle {
    pub fn new(position: Vec2, dimensions: Vec2) -> Self {
        Self {
            position,
            dimensions,
        }
    }

    pub fn region(&self) -> Region {
        Region::from_center(self.position, self.dimensions * 0.5)
    }

    /// Move vertically by `direction * speed * dt`, keeping the paddle
    /// fully inside `[0, field_height]`
    pub fn move_vertically(&mut self, direction: f32, speed: f32, dt: f32, field_height: f32) {
        let half = self.dimensions.y * 0.5;
        let y = self.position.y + direction * speed * dt;
        // A paddle taller than the field gets pinned to the middle
        self.position.y = if half * 2.0 >= field_height {
            field_height * 0.5
        } else {
            y.clamp(half, field_height - half)
        };
    }
}

/// The ball (a square hitbox of side `diameter`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub position: Vec2,
    /// Pixels per second
    pub velocity: Vec2,
    pub diameter: f32,
}

impl Ball {
    pub fn new(position: Vec2, velocity: Vec2, diameter: f32) -> Self {
        Self {
            position,
            velocity,
            diameter,
        }
    }

    pub fn region(&self) -> Region {
        Region::from_center(self.position, Vec2::splat(self.diameter * 0.5))
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Tunable match parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchTuning {
    /// Constant ball speed (pixels/s)
    pub ball_speed: f32,
    pub ball_diameter: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Paddle speed while a key is held (pixels/s)
    pub paddle_speed: f32,
    /// Gap between a paddle and the window edge behind it
    pub paddle_inset: f32,
    /// Maximum collisions resolved per tick
    pub max_sweep_iterations: u32,
}

impl Default for MatchTuning {
    fn default() -> Self {
        Self {
            ball_speed: BALL_SPEED,
            ball_diameter: BALL_DIAMETER,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_inset: PADDLE_INSET,
            max_sweep_iterations: MAX_SWEEP_ITERATIONS,
        }
    }
}

impl MatchTuning {
    /// Replace values the sweep cannot work with by their defaults
    ///
    /// Speeds and sizes must be finite and positive, the inset finite and
    /// non-negative, and at least one sweep iteration must run per tick.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let positive = |name: &str, value: f32, fallback: f32| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                log::warn!("Invalid {} {}, using {}", name, value, fallback);
                fallback
            }
        };

        let paddle_inset = if self.paddle_inset.is_finite() && self.paddle_inset >= 0.0 {
            self.paddle_inset
        } else {
            log::warn!(
                "Invalid paddle_inset {}, using {}",
                self.paddle_inset,
                defaults.paddle_inset
            );
            defaults.paddle_inset
        };

        let max_sweep_iterations = if self.max_sweep_iterations == 0 {
            log::warn!(
                "max_sweep_iterations must be at least 1, using {}",
                defaults.max_sweep_iterations
            );
            defaults.max_sweep_iterations
        } else {
            self.max_sweep_iterations
        };

        Self {
            ball_speed: positive("ball_speed", self.ball_speed, defaults.ball_speed),
            ball_diameter: positive("ball_diameter", self.ball_diameter, defaults.ball_diameter),
            paddle_width: positive("paddle_width", self.paddle_width, defaults.paddle_width),
            paddle_height: positive("paddle_height", self.paddle_height, defaults.paddle_height),
            paddle_speed: positive("paddle_speed", self.paddle_speed, defaults.paddle_speed),
            paddle_inset,
            max_sweep_iterations,
        }
    }
}

/// Complete state of one match
#[derive(Debug, Clone)]
pub struct PongMatchState {
    /// Play-field width and height
    pub field: Vec2,
    pub tuning: MatchTuning,
    /// Indexed by `Side::index`
    pub paddles: [Paddle; 2],
    pub ball: Ball,
    /// Fixed order: bottom, right, top, left
    pub colliders: Vec<EdgeCollider>,
    pub score: Score,
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
}

impl PongMatchState {
    /// Lay out paddles and colliders for a field and serve the first ball
    /// toward a random side
    pub fn new(field: Vec2, tuning: MatchTuning, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);

        let dimensions = Vec2::new(tuning.paddle_width, tuning.paddle_height);
        let left_face = tuning.paddle_inset + tuning.paddle_width;
        let right_face = field.x - tuning.paddle_inset - tuning.paddle_width;
        let mid_y = field.y * 0.5;

        let paddles = [
            Paddle::new(
                Vec2::new(left_face - tuning.paddle_width * 0.5, mid_y),
                dimensions,
            ),
            Paddle::new(
                Vec2::new(right_face + tuning.paddle_width * 0.5, mid_y),
                dimensions,
            ),
        ];

        let velocity = biased_random_ball_velocity(&mut rng, 0.0, tuning.ball_speed);
        let ball = Ball::new(field * 0.5, velocity, tuning.ball_diameter);

        log::info!(
            "Match laid out on {}x{} field (seed {})",
            field.x,
            field.y,
            seed
        );

        Self {
            field,
            colliders: play_field_edges(field, left_face, right_face),
            tuning,
            paddles,
            ball,
            score: Score::default(),
            seed,
            rng,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        &self.paddles[side.index()]
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        &mut self.paddles[side.index()]
    }

    pub fn field_center(&self) -> Vec2 {
        self.field * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_match_layout() {
        let state = PongMatchState::new(Vec2::new(800.0, 600.0), MatchTuning::default(), 7);

        assert_eq!(state.ball.position, Vec2::new(400.0, 300.0));
        assert!((state.ball.velocity.length() - BALL_SPEED).abs() < 1e-3);
        assert_eq!(state.score, Score::default());

        let left = state.paddle(Side::Left).region();
        let right = state.paddle(Side::Right).region();
        assert_eq!(left.min.x, PADDLE_INSET);
        assert_eq!(right.max.x, 800.0 - PADDLE_INSET);

        // Side colliders sit on the paddles' inner faces
        assert_eq!(state.colliders[3].a.x, left.max.x);
        assert_eq!(state.colliders[1].a.x, right.min.x);
    }

    #[test]
    fn test_paddle_clamped_to_field() {
        let mut paddle = Paddle::new(Vec2::new(20.0, 300.0), Vec2::new(20.0, 120.0));

        paddle.move_vertically(1.0, 400.0, 10.0, 600.0);
        assert_eq!(paddle.region().max.y, 600.0);

        paddle.move_vertically(-1.0, 400.0, 10.0, 600.0);
        assert_eq!(paddle.region().min.y, 0.0);

        paddle.move_vertically(1.0, 400.0, 0.25, 600.0);
        assert_eq!(paddle.position.y, 160.0);
    }

    #[test]
    fn test_side_helpers() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.direction(), 1.0);
        let mut score = Score::default();
        score.increment(Side::Right);
        assert_eq!(score.get(Side::Right), 1);
        assert_eq!(score.get(Side::Left), 0);
    }
}
