//! Obstruction-aware shot segment
//!
//! A segment is one leg of a shot: an actor ball sent through a target
//! corridor. Other balls that intrude on the swept path narrow the corridor
//! or block it outright, and the surviving corridor is expressed as the
//! actor's own `ShotTarget` one step further back in the chain.

use std::f32::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};

use crate::consts::{BALL_DIAMETER, CLEARANCE, EPSILON};
use crate::error::ShotInfeasible;
use crate::geom::{Angle, Vector2D};
use crate::table::ShotTarget;

/// Smallest corridor spread (radians) still considered aimable
const MIN_SPREAD: f32 = 1e-6;

/// Obstacle scans before a corridor that keeps narrowing is given up on
const MAX_SCANS: usize = 16;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotSegment {
    /// Actor ball center
    pub position: Vector2D,
    /// Narrowed ray from the actor toward the first corridor boundary
    pub vector1: Vector2D,
    /// Narrowed ray from the actor toward the second corridor boundary
    pub vector2: Vector2D,
    /// Contact corridor on the actor's surface and the force it needs
    pub target: ShotTarget,
}

/// Current corridor between two rays from the actor
///
/// `turn` is +1 when `v2` lies counter-clockwise of `v1`, -1 otherwise.
/// Each ray's boundary line is pushed outward by one ball diameter: any
/// obstacle center inside the widened band would touch the actor en route.
struct Corridor {
    origin: Vector2D,
    v1: Vector2D,
    v2: Vector2D,
    turn: f32,
}

impl Corridor {
    fn spread(&self) -> f32 {
        self.v1.direction().separation(self.v2.direction())
    }

    fn travel(&self) -> Vector2D {
        (self.v1 + self.v2) / 2.0
    }

    /// Distance of `point` from the `v1` ray, measured away from the band
    fn offset1(&self, point: Vector2D) -> f32 {
        let outward = self.v1.direction() - self.turn * FRAC_PI_2;
        (point - self.origin).dot(Vector2D::from_polar(1.0, outward))
    }

    /// Distance of `point` from the `v2` ray, measured away from the band
    fn offset2(&self, point: Vector2D) -> f32 {
        let outward = self.v2.direction() + self.turn * FRAC_PI_2;
        (point - self.origin).dot(Vector2D::from_polar(1.0, outward))
    }

    /// Whether a ball at `point` lies inside the swept band, ahead of the
    /// actor and no further than one diameter past the corridor
    fn may_collide(&self, point: Vector2D) -> bool {
        let reach = BALL_DIAMETER - CLEARANCE;
        if self.offset1(point) >= reach || self.offset2(point) >= reach {
            return false;
        }

        let travel = self.travel();
        let along = (point - self.origin).dot(travel.normalized());
        along > 0.0 && along < travel.magnitude() + BALL_DIAMETER
    }

    /// Narrow the corridor so the nearer boundary passes `point` at
    /// exactly one diameter
    fn narrow(&mut self, point: Vector2D) -> Result<(), ShotInfeasible> {
        let blocked = ShotInfeasible::Blocked {
            x: point.x,
            y: point.y,
        };

        let spread = self.spread();
        let toward = point - self.origin;
        let lean = (BALL_DIAMETER / toward.magnitude()).min(1.0).asin();
        let tangent1 = toward.direction() + self.turn * lean;
        let tangent2 = toward.direction() - self.turn * lean;
        let a1 = tangent1.separation(self.v1.direction());
        let a2 = tangent2.separation(self.v2.direction());

        if a1.min(a2) > spread {
            return Err(blocked);
        }

        if a1 <= a2 {
            self.v1.set_direction(tangent1);
        } else {
            self.v2.set_direction(tangent2);
        }

        // v1 must still turn toward v2 the same way it started
        let remaining = self.turn * self.v1.direction().signed_to(self.v2.direction());
        if remaining <= MIN_SPREAD {
            return Err(blocked);
        }
        debug_assert!(remaining <= spread + 1e-4);

        log::trace!(
            "narrowed by ball at {} (a1 {:.4}, a2 {:.4}): spread {:.4} -> {:.4}",
            point,
            a1,
            a2,
            spread,
            remaining
        );
        Ok(())
    }
}

impl ShotSegment {
    /// Plan one leg: send the ball at `position` through `target`, avoiding
    /// `obstacles` (ball centers, never including the actor itself)
    ///
    /// Obstacles are scanned in the order given, and the scan repeats until
    /// a full pass narrows nothing. Turning a boundary inward swings its
    /// offset line about the actor, and a longer mean ray reaches further,
    /// so a ball that was clear before a narrowing can intrude after it.
    pub fn new(
        position: Vector2D,
        target: &ShotTarget,
        obstacles: &[Vector2D],
    ) -> Result<Self, ShotInfeasible> {
        let v1 = target.point1 - position;
        let v2 = target.point2 - position;

        if !(v1.is_finite() && v2.is_finite() && target.force.is_finite()) {
            return Err(ShotInfeasible::Degenerate("non-finite geometry"));
        }
        if v1.magnitude() <= BALL_DIAMETER || v2.magnitude() <= BALL_DIAMETER {
            return Err(ShotInfeasible::Degenerate("actor overlaps corridor boundary"));
        }

        let spread = v1.direction().separation(v2.direction());
        if spread <= MIN_SPREAD {
            return Err(ShotInfeasible::Degenerate("zero-width corridor"));
        }
        if spread >= PI - MIN_SPREAD {
            return Err(ShotInfeasible::Degenerate("corridor surrounds actor"));
        }

        let turn = if v1.cross(v2) > 0.0 { 1.0 } else { -1.0 };
        let mut corridor = Corridor {
            origin: position,
            v1,
            v2,
            turn,
        };

        let mut settled = false;
        for _ in 0..MAX_SCANS {
            let mut narrowed = false;
            for &obstacle in obstacles {
                if corridor.may_collide(obstacle) {
                    corridor.narrow(obstacle)?;
                    narrowed = true;
                }
            }
            if !narrowed {
                settled = true;
                break;
            }
        }
        if !settled {
            log::warn!("corridor from {} still narrowing after {} scans", position, MAX_SCANS);
            return Err(ShotInfeasible::Degenerate("narrowing did not settle"));
        }

        let target = departure_target(&corridor, target)?;
        Ok(Self {
            position,
            vector1: corridor.v1,
            vector2: corridor.v2,
            target,
        })
    }

    /// Angular width of the narrowed corridor
    pub fn spread(&self) -> f32 {
        self.vector1.direction().separation(self.vector2.direction())
    }

    /// Mean travel direction of the actor
    pub fn travel_direction(&self) -> Angle {
        ((self.vector1 + self.vector2) / 2.0).direction()
    }
}

/// Contact points on the actor's surface plus the force that has to reach
/// them so the actor arrives at `incoming` with enough force
fn departure_target(corridor: &Corridor, incoming: &ShotTarget) -> Result<ShotTarget, ShotInfeasible> {
    let origin = corridor.origin;
    let point1 = origin + Vector2D::from_polar(-BALL_DIAMETER, corridor.v1.direction());
    let point2 = origin + Vector2D::from_polar(-BALL_DIAMETER, corridor.v2.direction());

    let travel = corridor.travel();
    let needed = incoming.force.magnitude();
    let obliquity = if needed > EPSILON {
        incoming.force.direction().separation(travel.direction())
    } else {
        0.0
    };

    let transfer = obliquity.cos();
    if obliquity >= FRAC_PI_2 || transfer <= EPSILON {
        return Err(ShotInfeasible::Obliquity { obliquity });
    }

    let magnitude = needed / transfer + travel.magnitude();
    Ok(ShotTarget::new(
        point1,
        point2,
        Vector2D::from_polar(magnitude, travel.direction()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::POCKET_FORCE;
    use proptest::prelude::*;

    /// 50-wide corridor at x = 1080 centered on y = 270, pushing east
    fn east_target() -> ShotTarget {
        ShotTarget::new(
            Vector2D::new(1080.0, 295.0),
            Vector2D::new(1080.0, 245.0),
            Vector2D::new(POCKET_FORCE, 0.0),
        )
    }

    fn actor() -> Vector2D {
        Vector2D::new(500.0, 270.0)
    }

    #[test]
    fn test_no_obstacles_keeps_rays() {
        let target = east_target();
        let seg = ShotSegment::new(actor(), &target, &[]).unwrap();
        assert_eq!(seg.vector1, target.point1 - actor());
        assert_eq!(seg.vector2, target.point2 - actor());
    }

    #[test]
    fn test_departure_corridor_on_actor_surface() {
        let seg = ShotSegment::new(actor(), &east_target(), &[]).unwrap();
        assert!((seg.target.point1.distance(actor()) - BALL_DIAMETER).abs() < 1e-3);
        assert!((seg.target.point2.distance(actor()) - BALL_DIAMETER).abs() < 1e-3);
        // Contact happens behind the ball, opposite the travel direction
        assert!(seg.target.point1.x < actor().x);
        assert!(seg.target.point2.x < actor().x);
    }

    #[test]
    fn test_straight_force_adds_travel() {
        let seg = ShotSegment::new(actor(), &east_target(), &[]).unwrap();
        let force = seg.target.force;
        assert!(force.direction().separation(Angle::ZERO) < 1e-4);
        assert!((force.magnitude() - (POCKET_FORCE + 580.0)).abs() < 0.1);
    }

    #[test]
    fn test_obstacle_behind_actor_ignored() {
        let target = east_target();
        let seg = ShotSegment::new(actor(), &target, &[Vector2D::new(100.0, 270.0)]).unwrap();
        assert_eq!(seg.vector1, target.point1 - actor());
        assert_eq!(seg.vector2, target.point2 - actor());
    }

    #[test]
    fn test_obstacle_outside_band_ignored() {
        let target = east_target();
        let seg = ShotSegment::new(actor(), &target, &[Vector2D::new(790.0, 400.0)]).unwrap();
        assert_eq!(seg.spread(), ShotSegment::new(actor(), &target, &[]).unwrap().spread());
    }

    #[test]
    fn test_center_obstacle_blocks() {
        let err = ShotSegment::new(actor(), &east_target(), &[Vector2D::new(790.0, 270.0)])
            .unwrap_err();
        assert!(matches!(err, ShotInfeasible::Blocked { .. }));
    }

    #[test]
    fn test_close_center_obstacle_blocks() {
        let err = ShotSegment::new(actor(), &east_target(), &[Vector2D::new(540.0, 270.0)])
            .unwrap_err();
        assert_eq!(err, ShotInfeasible::Blocked { x: 540.0, y: 270.0 });
    }

    #[test]
    fn test_edge_obstacle_narrows_near_side() {
        // Wide corridor so a ball grazing one side leaves room on the other
        let target = ShotTarget::new(
            Vector2D::new(1080.0, 470.0),
            Vector2D::new(1080.0, 70.0),
            Vector2D::new(POCKET_FORCE, 0.0),
        );
        let open = ShotSegment::new(actor(), &target, &[]).unwrap();
        let seg = ShotSegment::new(actor(), &target, &[Vector2D::new(800.0, 390.0)]).unwrap();

        assert!(seg.spread() < open.spread());
        // The upper ray (toward point1) moved, the lower one did not
        assert_ne!(seg.vector1, open.vector1);
        assert_eq!(seg.vector2, open.vector2);
        assert!(seg.vector1.direction().signed_to(open.vector1.direction()) > 0.0);
    }

    #[test]
    fn test_clear_obstacle_order_irrelevant() {
        let target = ShotTarget::new(
            Vector2D::new(1080.0, 470.0),
            Vector2D::new(1080.0, 70.0),
            Vector2D::new(POCKET_FORCE, 0.0),
        );
        let grazing = Vector2D::new(800.0, 390.0);
        let clear = Vector2D::new(700.0, 520.0);
        let a = ShotSegment::new(actor(), &target, &[grazing, clear]).unwrap();
        let b = ShotSegment::new(actor(), &target, &[clear, grazing]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_obliquity_past_right_angle_fails() {
        // Ball has to arrive moving west while the actor travels east
        let mut target = east_target();
        target.force = Vector2D::new(-POCKET_FORCE, 0.0);
        let err = ShotSegment::new(actor(), &target, &[]).unwrap_err();
        assert!(matches!(err, ShotInfeasible::Obliquity { .. }));
    }

    #[test]
    fn test_oblique_force_scaled_by_cosine() {
        let mut target = east_target();
        target.force = Vector2D::from_polar(10.0, PI / 3.0);
        let seg = ShotSegment::new(actor(), &target, &[]).unwrap();
        assert!((seg.target.force.magnitude() - (20.0 + 580.0)).abs() < 0.1);
    }

    #[test]
    fn test_actor_touching_boundary_is_degenerate() {
        let target = east_target();
        let err = ShotSegment::new(Vector2D::new(1075.0, 290.0), &target, &[]).unwrap_err();
        assert!(matches!(err, ShotInfeasible::Degenerate(_)));
    }

    #[test]
    fn test_zero_width_corridor_is_degenerate() {
        let p = Vector2D::new(1080.0, 270.0);
        let target = ShotTarget::new(p, p, Vector2D::new(POCKET_FORCE, 0.0));
        let err = ShotSegment::new(actor(), &target, &[]).unwrap_err();
        assert_eq!(err, ShotInfeasible::Degenerate("zero-width corridor"));
    }

    #[test]
    fn test_mirrored_corridor_orientation() {
        // Same geometry with the boundary points swapped must agree
        let target = east_target();
        let mut swapped = target.clone();
        std::mem::swap(&mut swapped.point1, &mut swapped.point2);

        let blocker = [Vector2D::new(790.0, 270.0)];
        assert!(ShotSegment::new(actor(), &swapped, &blocker).is_err());

        let a = ShotSegment::new(actor(), &target, &[]).unwrap();
        let b = ShotSegment::new(actor(), &swapped, &[]).unwrap();
        assert!((a.spread() - b.spread()).abs() < 1e-6);
        assert!((a.target.force.magnitude() - b.target.force.magnitude()).abs() < 1e-3);
    }

    /// 400-wide corridor at x = 1080 pushing east
    fn wide_target() -> ShotTarget {
        ShotTarget::new(
            Vector2D::new(1080.0, 470.0),
            Vector2D::new(1080.0, 70.0),
            Vector2D::new(POCKET_FORCE, 0.0),
        )
    }

    /// Band of a finished segment, for checking what still intrudes
    fn corridor_of(seg: &ShotSegment) -> Corridor {
        Corridor {
            origin: seg.position,
            v1: seg.vector1,
            v2: seg.vector2,
            turn: if seg.vector1.cross(seg.vector2) > 0.0 { 1.0 } else { -1.0 },
        }
    }

    fn scattered(raw: Vec<(f32, f32)>, position: Vector2D) -> Vec<Vector2D> {
        raw.into_iter()
            .map(|(x, y)| Vector2D::new(x, y))
            .filter(|o| o.distance(position) >= BALL_DIAMETER)
            .collect()
    }

    #[test]
    fn test_narrowed_ball_left_on_boundary() {
        let grazing = Vector2D::new(800.0, 390.0);
        let seg = ShotSegment::new(actor(), &wide_target(), &[grazing]).unwrap();
        let corridor = corridor_of(&seg);
        assert!((corridor.offset1(grazing) - BALL_DIAMETER).abs() < CLEARANCE);
        assert!(!corridor.may_collide(grazing));
    }

    #[test]
    fn test_repeated_obstacles_change_nothing() {
        let obstacles = [
            Vector2D::new(800.0, 390.0),
            Vector2D::new(760.0, 150.0),
            Vector2D::new(700.0, 520.0),
            Vector2D::new(950.0, 330.0),
        ];
        let doubled = [obstacles, obstacles].concat();
        let once = ShotSegment::new(actor(), &wide_target(), &obstacles);
        let twice = ShotSegment::new(actor(), &wide_target(), &doubled);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_travel_direction_matches_force() {
        let seg = ShotSegment::new(actor(), &wide_target(), &[Vector2D::new(800.0, 390.0)]).unwrap();
        assert!(seg.travel_direction().separation(seg.target.force.direction()) < 1e-4);
    }

    proptest! {
        #[test]
        fn narrowing_never_widens(
            ax in 100.0f32..600.0,
            ay in 100.0f32..440.0,
            obstacles in proptest::collection::vec((0.0f32..1080.0, 0.0f32..540.0), 0..8),
        ) {
            let target = wide_target();
            let position = Vector2D::new(ax, ay);
            let open = ShotSegment::new(position, &target, &[]).unwrap();
            let obstacles = scattered(obstacles, position);

            for n in 0..=obstacles.len() {
                if let Ok(seg) = ShotSegment::new(position, &target, &obstacles[..n]) {
                    prop_assert!(seg.spread() <= open.spread() + 1e-5);
                }
            }
        }

        #[test]
        fn settled_corridor_is_clear(
            ax in 100.0f32..600.0,
            ay in 100.0f32..440.0,
            obstacles in proptest::collection::vec((0.0f32..1080.0, 0.0f32..540.0), 1..8),
        ) {
            let target = wide_target();
            let position = Vector2D::new(ax, ay);
            let obstacles = scattered(obstacles, position);

            if let Ok(seg) = ShotSegment::new(position, &target, &obstacles) {
                let corridor = corridor_of(&seg);
                for &o in &obstacles {
                    prop_assert!(!corridor.may_collide(o), "ball at {} still intrudes", o);
                }

                // Scanning the same balls again finds nothing more
                let doubled = [obstacles.clone(), obstacles.clone()].concat();
                let again = ShotSegment::new(position, &target, &doubled);
                prop_assert_eq!(again.as_ref().ok(), Some(&seg));
            }
        }
    }
}
