//! Single-axis integration steps built from the occupancy and snapping
//! queries. Callers own the motion state and write the results back.

use crate::grid::TileGrid;
use crate::hitbox::{Facing, Hitbox};
use crate::occupancy::can_occupy;
use crate::resolve::{resolve_ceiling_y, resolve_wall_x};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AirborneStep {
    pub y: f32,
    pub air_speed: f32,
    pub in_air: bool,
}

/// Advance a falling or jumping box by one tick.
///
/// A free move applies `air_speed` and then `gravity`. A blocked fall snaps
/// onto the floor and grounds the box. A blocked rise keeps its height and
/// restarts the fall at `collision_fall_speed`.
pub fn step_airborne<G: TileGrid + ?Sized>(
    grid: &G,
    hitbox: &Hitbox,
    air_speed: f32,
    gravity: f32,
    collision_fall_speed: f32,
) -> AirborneStep {
    if can_occupy(grid, &hitbox.translated(0.0, air_speed)) {
        return AirborneStep {
            y: hitbox.y + air_speed,
            air_speed: air_speed + gravity,
            in_air: true,
        };
    }
    let snap = resolve_ceiling_y(grid, hitbox, air_speed);
    if snap.landed {
        AirborneStep {
            y: snap.y,
            air_speed: 0.0,
            in_air: false,
        }
    } else {
        AirborneStep {
            y: snap.y,
            air_speed: collision_fall_speed,
            in_air: true,
        }
    }
}

/// New x after trying to move by `dx`. A blocked move goes through
/// [`resolve_wall_x`], so blocked leftward moves stay put.
pub fn step_horizontal<G: TileGrid + ?Sized>(grid: &G, hitbox: &Hitbox, dx: f32) -> f32 {
    if can_occupy(grid, &hitbox.translated(dx, 0.0)) {
        hitbox.x + dx
    } else {
        resolve_wall_x(grid, hitbox, dx)
    }
}

/// Knock-back toward `facing`. Applied only if the whole displaced box fits.
pub fn push_back<G: TileGrid + ?Sized>(grid: &G, hitbox: &Hitbox, facing: Facing, distance: f32) -> f32 {
    let dx = facing.sign() * distance;
    if can_occupy(grid, &hitbox.translated(dx, 0.0)) {
        hitbox.x + dx
    } else {
        hitbox.x
    }
}
