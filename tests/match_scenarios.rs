use edge_pong::consts::{BALL_SPEED, FRAME_DT};
use edge_pong::sim::*;
use glam::Vec2;

fn new_match(seed: u64) -> PongMatchState {
    PongMatchState::new(Vec2::new(800.0, 600.0), MatchTuning::default(), seed)
}

#[test]
fn test_ball_leaving_right_edge_scores_for_left() {
    let mut state = new_match(1);
    state.ball = Ball::new(Vec2::new(785.0, 300.0), Vec2::new(400.0, 0.0), 30.0);

    let events = tick(&mut state, &TickInput::default(), 0.1);

    assert_eq!(events.scored, Some(Side::Left));
    assert_eq!(state.score, Score { left: 1, right: 0 });
    assert_eq!(state.ball.position, Vec2::new(400.0, 300.0));
    assert!(state.ball.velocity.x > 0.0);
    assert!((state.ball.velocity.length() - BALL_SPEED).abs() < 1e-2);
}

#[test]
fn test_missed_paddle_leads_to_a_single_point() {
    let mut state = new_match(2);
    state.paddle_mut(Side::Left).position.y = 540.0;
    state.ball = Ball::new(Vec2::new(200.0, 150.0), Vec2::new(-400.0, 0.0), 30.0);

    let mut misses = 0;
    let mut goals = Vec::new();
    for _ in 0..60 {
        let events = tick(&mut state, &TickInput::default(), FRAME_DT);
        misses += events
            .sweep
            .contacts
            .iter()
            .filter(|c| matches!(c, Contact::PaddleMiss { side: Side::Left, .. }))
            .count();
        if let Some(side) = events.scored {
            goals.push(side);
            break;
        }
    }

    assert_eq!(misses, 1);
    assert_eq!(goals, vec![Side::Right]);
    assert_eq!(state.score, Score { left: 0, right: 1 });
    assert!(state.ball.velocity.x < 0.0);
}

#[test]
fn test_covering_paddle_returns_the_ball() {
    let mut state = new_match(3);
    state.paddle_mut(Side::Left).position.y = 150.0;
    state.ball = Ball::new(Vec2::new(200.0, 150.0), Vec2::new(-400.0, 0.0), 30.0);

    let mut returned = false;
    for _ in 0..60 {
        let events = tick(&mut state, &TickInput::default(), FRAME_DT);
        assert_eq!(events.scored, None);
        if events.sweep.paddle_hits().any(|side| side == Side::Left) {
            returned = true;
            break;
        }
    }

    assert!(returned);
    assert!(state.ball.velocity.x > 0.0);
    assert!(state.ball.region().min.x >= 30.0 - 1e-3);
}

#[test]
fn test_paddle_follows_input_within_field() {
    let mut state = new_match(4);
    let up = TickInput {
        left: 1.0,
        right: 0.0,
    };
    for _ in 0..600 {
        tick(&mut state, &up, FRAME_DT);
    }

    assert_eq!(state.paddle(Side::Left).region().max.y, 600.0);
    assert_eq!(state.paddle(Side::Right).position.y, 300.0);
}

#[test]
fn test_independent_matches_do_not_share_state() {
    let mut a = new_match(10);
    let mut b = new_match(10);
    a.ball.position = Vec2::new(900.0, 300.0);

    tick(&mut a, &TickInput::default(), FRAME_DT);
    tick(&mut b, &TickInput::default(), FRAME_DT);

    assert_eq!(a.score.left, 1);
    assert_eq!(b.score, Score::default());
}

#[test]
fn test_sanitized_tuning_keeps_ball_moving_forward() {
    let tuning: MatchTuning =
        serde_json::from_str(r#"{ "max_sweep_iterations": 0, "ball_speed": -400.0 }"#).unwrap();
    let mut state = PongMatchState::new(Vec2::new(800.0, 600.0), tuning.sanitized(), 5);
    let start = state.ball.position;
    let heading = state.ball.velocity.x.signum();

    let mut last_x = start.x;
    for _ in 0..4 {
        let events = tick(&mut state, &TickInput::default(), FRAME_DT);
        assert!(!events.sweep.exhausted);
        assert!((state.ball.position.x - last_x) * heading > 0.0);
        last_x = state.ball.position.x;
    }
    assert!((state.ball.velocity.length() - BALL_SPEED).abs() < 1e-2);
}
