//! Goal detection, scoring and respawn

use super::serve::serve_toward;
use super::state::{Ball, PongMatchState, Side};

/// Side that scores when the ball has fully left the field, if any
///
/// Only the horizontal bounds count: past the right edge the left player
/// scores, past the left edge the right player scores.
pub fn check_goal(ball: &Ball, field_width: f32) -> Option<Side> {
    let region = ball.region();
    if region.min.x > field_width {
        Some(Side::Left)
    } else if region.max.x < 0.0 {
        Some(Side::Right)
    } else {
        None
    }
}

/// Award a point if the ball left the field, then re-serve from the center
/// toward the player who conceded
///
/// Returns the scoring side.
pub fn resolve_scoring(state: &mut PongMatchState) -> Option<Side> {
    let scorer = check_goal(&state.ball, state.field.x)?;

    state.score.increment(scorer);
    state.ball.position = state.field_center();
    state.ball.velocity = serve_toward(&mut state.rng, scorer.opposite(), state.tuning.ball_speed);

    log::info!(
        "{} scores ({} - {})",
        scorer.as_str(),
        state.score.left,
        state.score.right
    );

    Some(scorer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::MatchTuning;
    use glam::Vec2;

    fn match_state() -> PongMatchState {
        PongMatchState::new(Vec2::new(800.0, 600.0), MatchTuning::default(), 11)
    }

    #[test]
    fn test_ball_inside_or_straddling_is_no_goal() {
        let ball = Ball::new(Vec2::new(400.0, 300.0), Vec2::ZERO, 30.0);
        assert_eq!(check_goal(&ball, 800.0), None);
        // Half-way over the line still counts as in play
        let ball = Ball::new(Vec2::new(800.0, 300.0), Vec2::ZERO, 30.0);
        assert_eq!(check_goal(&ball, 800.0), None);
        let ball = Ball::new(Vec2::new(-15.0, 300.0), Vec2::ZERO, 30.0);
        assert_eq!(check_goal(&ball, 800.0), None);
    }

    #[test]
    fn test_right_scores_past_left_edge() {
        let mut state = match_state();
        state.ball.position = Vec2::new(-16.0, 120.0);

        assert_eq!(resolve_scoring(&mut state), Some(Side::Right));
        assert_eq!(state.score.right, 1);
        assert_eq!(state.score.left, 0);
        assert_eq!(state.ball.position, Vec2::new(400.0, 300.0));
        assert!(state.ball.velocity.x < 0.0);
    }

    #[test]
    fn test_left_scores_exactly_once() {
        let mut state = match_state();
        state.ball.position = Vec2::new(816.0, 300.0);

        assert_eq!(resolve_scoring(&mut state), Some(Side::Left));
        assert_eq!(resolve_scoring(&mut state), None);
        assert_eq!(state.score.left, 1);
        assert!(state.ball.velocity.x > 0.0);
        assert!((state.ball.velocity.length() - state.tuning.ball_speed).abs() < 1e-2);
    }
}
