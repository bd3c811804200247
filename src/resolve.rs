use crate::grid::{tile_index, TileGrid};
use crate::hitbox::Hitbox;

/// Gap left between a snapped box and the tile it was stopped by, so the next
/// step does not start on the boundary itself.
pub const SNAP_BIAS: f32 = 1.0;

/// Result of snapping a blocked vertical move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerticalSnap {
    pub y: f32,
    /// Set when the box was falling and now rests on the floor.
    pub landed: bool,
}

/// X position for a box whose horizontal move was rejected.
///
/// Moving right (`dx > 0`) puts the right edge one pixel short of the column
/// boundary after the column the right edge currently sits in. Moving left or
/// standing still returns `hitbox.x` untouched: leftward contacts are left to
/// the caller, and movement code is built around that, so the asymmetry is
/// part of the contract.
pub fn resolve_wall_x<G: TileGrid + ?Sized>(grid: &G, hitbox: &Hitbox, dx: f32) -> f32 {
    if dx <= 0.0 {
        return hitbox.x;
    }
    let tile_size = grid.tile_size();
    let boundary = (tile_index(hitbox.right(), tile_size) + 1) as f32 * tile_size;
    boundary - hitbox.width - SNAP_BIAS
}

/// Y position for a box whose vertical move was rejected.
///
/// Falling (`vertical_speed > 0`) rests the bottom edge one pixel above the
/// boundary below the row it currently sits in, and reports a landing. Rising
/// keeps `hitbox.y`; ceiling hits are not snapped.
pub fn resolve_ceiling_y<G: TileGrid + ?Sized>(
    grid: &G,
    hitbox: &Hitbox,
    vertical_speed: f32,
) -> VerticalSnap {
    if vertical_speed <= 0.0 {
        return VerticalSnap {
            y: hitbox.y,
            landed: false,
        };
    }
    let tile_size = grid.tile_size();
    let boundary = (tile_index(hitbox.bottom(), tile_size) + 1) as f32 * tile_size;
    VerticalSnap {
        y: boundary - hitbox.height - SNAP_BIAS,
        landed: true,
    }
}
