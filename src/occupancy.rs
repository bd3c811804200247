use crate::grid::{is_tile_solid, tile_index, TileGrid};
use crate::hitbox::Hitbox;

/// Whether a pixel lies in a solid tile. Anything outside the level's pixel
/// extent is solid, including non-finite coordinates.
pub fn is_solid_at<G: TileGrid + ?Sized>(grid: &G, x: f32, y: f32) -> bool {
    let inside_x = x >= 0.0 && x < grid.pixel_width();
    let inside_y = y >= 0.0 && y < grid.pixel_height();
    if !(inside_x && inside_y) {
        return true;
    }
    let ts = grid.tile_size();
    is_tile_solid(grid, tile_index(x, ts), tile_index(y, ts))
}

/// Scan every tile row crossed by the vertical segment `x, y_top..=y_bottom`.
fn is_solid_between<G: TileGrid + ?Sized>(grid: &G, x: f32, y_top: f32, y_bottom: f32) -> bool {
    let ts = grid.tile_size();
    let tx = tile_index(x, ts);
    let first = tile_index(y_top, ts);
    let last = tile_index(y_bottom, ts);
    (first..=last).any(|ty| is_tile_solid(grid, tx, ty))
}

/// Whether `hitbox` may sit where it is without overlapping solid tiles.
///
/// Checks all four corners, then scans the full height of the left and right
/// edges. The edge scan catches a one-tile wall that a box taller than a tile
/// would otherwise straddle between its corners.
pub fn can_occupy<G: TileGrid + ?Sized>(grid: &G, hitbox: &Hitbox) -> bool {
    let (left, top) = (hitbox.x, hitbox.y);
    let (right, bottom) = (hitbox.right(), hitbox.bottom());

    if is_solid_at(grid, left, top)
        || is_solid_at(grid, right, bottom)
        || is_solid_at(grid, right, top)
        || is_solid_at(grid, left, bottom)
    {
        return false;
    }

    !(is_solid_between(grid, right, top, bottom) || is_solid_between(grid, left, top, bottom))
}
