//! Biased random serve direction
//!
//! A serve leaves at a random angle of at most `SERVE_MAX_ANGLE` from the
//! horizontal, never exactly horizontal, toward a chosen (or random) side.

use glam::Vec2;
use rand::Rng;

use super::state::Side;
use crate::consts::SERVE_MAX_ANGLE;

/// Random serve velocity of magnitude `speed`
///
/// `horizontal_direction` > 0 serves to the right, < 0 to the left and 0
/// picks a side at random.
pub fn biased_random_ball_velocity<R: Rng>(
    rng: &mut R,
    horizontal_direction: f32,
    speed: f32,
) -> Vec2 {
    // random::<f32>() is in [0, 1), so the angle lands in (0, SERVE_MAX_ANGLE]
    let angle = SERVE_MAX_ANGLE * (1.0 - rng.random::<f32>());
    let vertical = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    let horizontal = if horizontal_direction > 0.0 {
        1.0
    } else if horizontal_direction < 0.0 {
        -1.0
    } else if rng.random_bool(0.5) {
        1.0
    } else {
        -1.0
    };

    Vec2::new(angle.cos() * horizontal, angle.sin() * vertical) * speed
}

/// Serve velocity heading toward `receiver`
pub fn serve_toward<R: Rng>(rng: &mut R, receiver: Side, speed: f32) -> Vec2 {
    biased_random_ball_velocity(rng, receiver.direction(), speed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn angle_from_horizontal(v: Vec2) -> f32 {
        (v.y.abs()).atan2(v.x.abs())
    }

    proptest! {
        #[test]
        fn serve_respects_bias_and_cone(
            seed in any::<u64>(),
            bias in prop_oneof![Just(-1.0f32), Just(1.0f32)],
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let v = biased_random_ball_velocity(&mut rng, bias, 400.0);

            prop_assert!(v.x * bias > 0.0);
            prop_assert!(v.y != 0.0);
            prop_assert!(angle_from_horizontal(v) <= SERVE_MAX_ANGLE + 1e-5);
            prop_assert!((v.length() - 400.0).abs() < 1e-2);
        }
    }

    #[test]
    fn test_unbiased_serve_reaches_both_sides() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut left = 0;
        let mut right = 0;
        for _ in 0..200 {
            let v = biased_random_ball_velocity(&mut rng, 0.0, 1.0);
            assert!(v.x != 0.0);
            if v.x > 0.0 {
                right += 1;
            } else {
                left += 1;
            }
        }
        assert!(left > 0 && right > 0);
    }

    #[test]
    fn test_serve_toward_side() {
        let mut rng = Pcg32::seed_from_u64(3);
        assert!(serve_toward(&mut rng, Side::Right, 400.0).x > 0.0);
        assert!(serve_toward(&mut rng, Side::Left, 400.0).x < 0.0);
    }
}
