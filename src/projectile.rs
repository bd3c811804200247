use crate::grid::TileGrid;
use crate::hitbox::Hitbox;
use crate::occupancy::is_solid_at;

/// Whether a projectile has struck level geometry.
///
/// Only the bottom-right corner of `bounds` is probed, a single point rather
/// than the full corner and edge scan entities get. `probe_height` replaces
/// the bounds height for shapes whose visual bounds overhang their body (see
/// [`crate::config::CollisionConfig::bolt_probe_height`]).
pub fn projectile_hits_level<G: TileGrid + ?Sized>(
    grid: &G,
    bounds: &Hitbox,
    probe_height: Option<f32>,
) -> bool {
    let height = probe_height.unwrap_or(bounds.height);
    is_solid_at(grid, bounds.right(), bounds.y + height)
}
