//! Continuous collision detection and response for the ball
//!
//! The ball is swept against edge colliders one impact at a time: find the
//! earliest time of impact within the remaining frame time, move exactly to
//! it, deflect (unless a guarding paddle missed), then continue with what is
//! left of the frame. Several bounces can therefore happen in one tick.

use glam::Vec2;

use super::edge::EdgeCollider;
use super::state::{Ball, Paddle, Side};

/// Earliest impact found for one sub-step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impact {
    /// Index into the collider list
    pub collider: usize,
    /// Fraction of the swept displacement, in `[0, 1]`
    pub time: f32,
}

/// A collision resolved during a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Velocity was deflected off the collider. `guard` is the paddle that
    /// returned the ball, if the edge had one.
    Bounce { collider: usize, guard: Option<Side> },
    /// The ball reached a guarded edge outside the paddle's cover and keeps
    /// going toward the goal
    PaddleMiss { collider: usize, side: Side },
}

/// What happened while sweeping the ball through one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweepReport {
    pub contacts: Vec<Contact>,
    /// Sub-steps run (each resolves at most one collision)
    pub iterations: u32,
    /// The iteration bound was hit before the frame time was consumed
    pub exhausted: bool,
}

impl SweepReport {
    /// Sides whose paddle returned the ball this tick
    pub fn paddle_hits(&self) -> impl Iterator<Item = Side> + '_ {
        self.contacts.iter().filter_map(|c| match c {
            Contact::Bounce {
                guard: Some(side), ..
            } => Some(*side),
            _ => None,
        })
    }
}

/// Time of impact of a box (given by its corners) moving by `displacement`
/// against one collider
///
/// Uses the corner closest to (or deepest behind) the surface. Returns `None`
/// when that corner is already behind the surface, when the motion does not
/// approach the surface, or when the impact lies outside `[0, 1]`.
pub fn time_of_impact(
    corners: &[Vec2; 4],
    collider: &EdgeCollider,
    displacement: Vec2,
) -> Option<f32> {
    let distance = corners
        .iter()
        .map(|&corner| collider.signed_distance(corner))
        .fold(f32::INFINITY, f32::min);

    if distance < 0.0 {
        // Already behind the surface: expected after slipping past a paddle
        log::trace!(
            "ball corner {:.3} behind collider at {:?}, ignoring",
            distance,
            collider.center
        );
        return None;
    }

    let approach = displacement.dot(collider.surface_normal);
    if approach >= 0.0 {
        return None;
    }

    let t = distance / -approach;
    (0.0..=1.0).contains(&t).then_some(t)
}

/// Earliest impact of `ball` moving by `displacement` among `colliders`
///
/// Colliders listed in `ignored` are skipped. Ties keep the first collider in
/// iteration order.
pub fn earliest_impact(
    ball: &Ball,
    colliders: &[EdgeCollider],
    displacement: Vec2,
    ignored: &[usize],
) -> Option<Impact> {
    let corners = ball.region().corners();
    let mut earliest: Option<Impact> = None;

    for (index, collider) in colliders.iter().enumerate() {
        if ignored.contains(&index) {
            continue;
        }
        let Some(time) = time_of_impact(&corners, collider, displacement) else {
            continue;
        };
        if earliest.is_none_or(|e| time < e.time) {
            earliest = Some(Impact {
                collider: index,
                time,
            });
        }
    }

    earliest
}

/// Whether `paddle` covers the ball along the collider's tangent
pub fn paddle_covers(collider: &EdgeCollider, paddle: &Paddle, ball: &Ball) -> bool {
    let tangent = collider.tangent();
    let paddle_range = paddle.region().project(tangent);
    let ball_range = ball.region().project(tangent);
    paddle_range.overlaps(&ball_range)
}

/// Push the velocity back into the field along each axis of the normal
///
/// `v += 2 * |v| * n` per component. For axis-aligned normals this equals a
/// mirror reflection; for slanted ones it always sends the ball away from
/// the wall it just hit rather than mirroring exactly.
#[inline]
pub fn deflect(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity + 2.0 * velocity.abs() * normal
}

/// Advance `ball` through `dt` seconds against `colliders`
///
/// `paddles` is indexed by `Side::index`. Each sub-step resolves exactly one
/// collision; the loop ends when no collision lies within the remaining
/// time or after `max_iterations` sub-steps. The ball's speed is reset to
/// `speed` on the way out. On exhaustion the ball stays at its last resolved
/// position and the leftover time is dropped.
pub fn sweep_ball(
    ball: &mut Ball,
    colliders: &[EdgeCollider],
    paddles: &[Paddle; 2],
    dt: f32,
    speed: f32,
    max_iterations: u32,
) -> SweepReport {
    let mut report = SweepReport::default();
    // Guarded edges the ball slipped past; re-testing them would find the same t = 0 impact
    let mut passed: Vec<usize> = Vec::new();
    let mut remaining = dt;

    while report.iterations < max_iterations {
        report.iterations += 1;

        let displacement = ball.velocity * remaining;
        let Some(impact) = earliest_impact(ball, colliders, displacement, &passed) else {
            ball.position += displacement;
            ball.velocity = ball.velocity.normalize_or_zero() * speed;
            return report;
        };

        let collider = &colliders[impact.collider];
        ball.position += displacement * impact.time;

        let covered = match collider.guard {
            Some(side) => paddle_covers(collider, &paddles[side.index()], ball),
            None => true,
        };

        if covered {
            ball.velocity = deflect(ball.velocity, collider.surface_normal);
            report.contacts.push(Contact::Bounce {
                collider: impact.collider,
                guard: collider.guard,
            });
        } else if let Some(side) = collider.guard {
            passed.push(impact.collider);
            report.contacts.push(Contact::PaddleMiss {
                collider: impact.collider,
                side,
            });
        }

        remaining *= 1.0 - impact.time;
    }

    log::debug!(
        "sweep gave up after {} iterations with {:.5}s left at {:?}",
        report.iterations,
        remaining,
        ball.position
    );
    ball.velocity = ball.velocity.normalize_or_zero() * speed;
    report.exhausted = true;
    report
}
