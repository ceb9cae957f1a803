//! Spatial index for sensor raycasts.
//!
//! Rebuilt from the ECS world once per tick so every ship senses the
//! same snapshot of geometry. Rays test against circular terrain
//! obstacles and other ships' hulls on the horizontal plane.

use glam::DVec2;
use hecs::World;

use broadside_core::components::{Health, Hull, Obstacle, UnitTag};
use broadside_core::enums::ContactKind;
use broadside_core::types::{Position, UnitId};
use broadside_helm::sensor::{RayHit, SpatialQuery};

struct Circle {
    center: DVec2,
    radius: f64,
    kind: ContactKind,
    unit: Option<UnitId>,
}

/// Immutable geometry snapshot for one tick.
pub struct WorldIndex {
    circles: Vec<Circle>,
}

impl WorldIndex {
    /// Snapshot obstacle and hull geometry from the world.
    pub fn build(world: &World) -> Self {
        let mut circles = Vec::new();

        for (_entity, (obstacle, pos)) in world.query::<(&Obstacle, &Position)>().iter() {
            circles.push(Circle {
                center: pos.horizontal(),
                radius: obstacle.radius,
                kind: ContactKind::Terrain,
                unit: None,
            });
        }

        for (_entity, (tag, hull, health, pos)) in world
            .query::<(&UnitTag, &Hull, &Health, &Position)>()
            .iter()
        {
            // Sunk hulls return no echoes.
            if health.is_destroyed() {
                continue;
            }
            circles.push(Circle {
                center: pos.horizontal(),
                radius: hull.radius,
                kind: ContactKind::Hostile,
                unit: Some(tag.id),
            });
        }

        Self { circles }
    }

    /// A view of the index that excludes one ship's own hull, so a
    /// scanning unit does not detect itself.
    pub fn viewed_by(&self, unit: UnitId) -> UnitView<'_> {
        UnitView {
            index: self,
            exclude: unit,
        }
    }

    fn cast(
        &self,
        origin: &Position,
        bearing_deg: f64,
        max_range: f64,
        exclude: Option<UnitId>,
    ) -> Option<RayHit> {
        let o = origin.horizontal();
        let rad = bearing_deg.to_radians();
        let dir = DVec2::new(rad.sin(), rad.cos());

        let mut best: Option<RayHit> = None;
        for circle in &self.circles {
            if circle.unit.is_some() && circle.unit == exclude {
                continue;
            }

            let to_center = circle.center - o;
            let along = to_center.dot(dir);
            // Centers behind the origin (or enclosing it) never register.
            if along < 0.0 {
                continue;
            }
            let perp_sq = to_center.length_squared() - along * along;
            let radius_sq = circle.radius * circle.radius;
            if perp_sq > radius_sq {
                continue;
            }

            let t = along - (radius_sq - perp_sq).sqrt();
            if t < 0.0 || t > max_range {
                continue;
            }
            if best.as_ref().map_or(true, |b| t < b.distance) {
                best = Some(RayHit {
                    distance: t,
                    point: Position::from_horizontal(o + dir * t),
                    kind: circle.kind,
                });
            }
        }
        best
    }
}

/// Per-ship sensing view over the shared index.
pub struct UnitView<'a> {
    index: &'a WorldIndex,
    exclude: UnitId,
}

impl SpatialQuery for UnitView<'_> {
    fn raycast(&self, origin: &Position, bearing_deg: f64, max_range: f64) -> Option<RayHit> {
        self.index.cast(origin, bearing_deg, max_range, Some(self.exclude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use broadside_core::constants::MAX_HEALTH;
    use broadside_core::enums::ShipClass;

    fn make_world_with_island(center: Position, radius: f64) -> World {
        let mut world = World::new();
        world.spawn((Obstacle { radius }, center));
        world
    }

    #[test]
    fn test_ray_hits_island_ahead() {
        let world = make_world_with_island(Position::new(0.0, 100.0, 0.0), 20.0);
        let index = WorldIndex::build(&world);
        let hit = index
            .cast(&Position::default(), 0.0, 400.0, None)
            .expect("island due north should be hit");
        assert_eq!(hit.kind, ContactKind::Terrain);
        assert!((hit.distance - 80.0).abs() < 1e-9);
        assert!((hit.point.y - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_ray_misses_island_behind() {
        let world = make_world_with_island(Position::new(0.0, 100.0, 0.0), 20.0);
        let index = WorldIndex::build(&world);
        assert!(index.cast(&Position::default(), 180.0, 400.0, None).is_none());
    }

    #[test]
    fn test_ray_respects_max_range() {
        let world = make_world_with_island(Position::new(0.0, 300.0, 0.0), 20.0);
        let index = WorldIndex::build(&world);
        assert!(index.cast(&Position::default(), 0.0, 200.0, None).is_none());
        assert!(index.cast(&Position::default(), 0.0, 400.0, None).is_some());
    }

    #[test]
    fn test_ray_reports_nearest_of_two() {
        let mut world = World::new();
        world.spawn((Obstacle { radius: 10.0 }, Position::new(0.0, 200.0, 0.0)));
        world.spawn((Obstacle { radius: 10.0 }, Position::new(0.0, 80.0, 0.0)));
        let index = WorldIndex::build(&world);
        let hit = index.cast(&Position::default(), 0.0, 400.0, None).unwrap();
        assert!((hit.distance - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_own_hull_excluded_other_hulls_hostile() {
        let mut world = World::new();
        let tag_a = UnitTag {
            id: UnitId(0),
            team: 0,
            class: ShipClass::Destroyer,
        };
        let tag_b = UnitTag {
            id: UnitId(1),
            team: 1,
            class: ShipClass::Destroyer,
        };
        world.spawn((
            tag_a,
            Hull { radius: 15.0 },
            Health {
                current: MAX_HEALTH,
            },
            Position::default(),
        ));
        world.spawn((
            tag_b,
            Hull { radius: 15.0 },
            Health {
                current: MAX_HEALTH,
            },
            Position::new(0.0, 100.0, 0.0),
        ));

        let index = WorldIndex::build(&world);
        let view = index.viewed_by(UnitId(0));
        let hit = view
            .raycast(&Position::default(), 0.0, 400.0)
            .expect("other hull should be sensed");
        assert_eq!(hit.kind, ContactKind::Hostile);
        assert!((hit.distance - 85.0).abs() < 1e-9);

        // Scanning south from inside own hull finds nothing.
        assert!(view.raycast(&Position::default(), 180.0, 400.0).is_none());
    }

    #[test]
    fn test_sunk_hull_returns_no_echo() {
        let mut world = World::new();
        world.spawn((
            UnitTag {
                id: UnitId(1),
                team: 1,
                class: ShipClass::Corvette,
            },
            Hull { radius: 15.0 },
            Health { current: 0.0 },
            Position::new(0.0, 100.0, 0.0),
        ));
        let index = WorldIndex::build(&world);
        let view = index.viewed_by(UnitId(0));
        assert!(view.raycast(&Position::default(), 0.0, 400.0).is_none());
    }
}
