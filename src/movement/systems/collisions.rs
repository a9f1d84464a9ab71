//! Movement domain: floor and wall contact detection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{BodyContacts, GameLayer, MovementState, Player, SensorReading, WallProbe};

/// How far below the feet a floor still counts as contact.
const FLOOR_PROBE_DISTANCE: f32 = 4.0;

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &mut BodyContacts), With<Player>>,
) {
    // Filter to only hit Ground layer entities
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, collider, mut contacts) in &mut query {
        let half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => 24.0,
        };

        let ray_origin = transform.translation.truncate() - Vec2::new(0.0, half_height);
        let hit = spatial_query.cast_ray(
            ray_origin,
            Dir2::NEG_Y,
            FLOOR_PROBE_DISTANCE,
            true,
            &ground_filter,
        );

        contacts.on_floor = hit.is_some();
    }
}

/// Casts the forward probe in the facing direction. A missing probe reads as
/// no wall.
pub(crate) fn detect_walls(
    spatial_query: SpatialQuery,
    mut query: Query<
        (
            &Transform,
            &Collider,
            &MovementState,
            Option<&WallProbe>,
            &mut BodyContacts,
        ),
        With<Player>,
    >,
) {
    // Filter to only hit Wall layer entities
    let wall_filter = SpatialQueryFilter::from_mask(GameLayer::Wall);

    for (transform, collider, state, probe, mut contacts) in &mut query {
        let Some(probe) = probe else {
            contacts.wall = SensorReading::CLEAR;
            continue;
        };

        let half_width = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.x,
            None => 12.0,
        };

        let hit = spatial_query.cast_ray(
            transform.translation.truncate(),
            state.facing.direction(),
            half_width + probe.reach,
            true,
            &wall_filter,
        );

        // Normals come back in world space; only x is used, which both
        // spaces share.
        contacts.wall = SensorReading::sanitize(hit.map(|hit| SensorReading::hit(hit.normal)));
    }
}
