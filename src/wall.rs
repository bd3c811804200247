use crate::grid::{is_tile_solid, tile_index, TileGrid};
use crate::hitbox::{Facing, Hitbox};

/// Pixel slack allowed when matching an edge against a tile boundary.
pub const WALL_TOLERANCE: f32 = 2.0;

/// Whether the leading edge on `facing` sits on a column boundary.
///
/// Pure geometry: the tiles themselves are not consulted.
pub fn is_touching_wall(hitbox: &Hitbox, facing: Facing, tile_size: f32) -> bool {
    let column = tile_index(hitbox.x, tile_size);
    match facing {
        Facing::Left => {
            let boundary = column as f32 * tile_size;
            let x = hitbox.x.trunc();
            x >= boundary && x <= boundary + WALL_TOLERANCE
        }
        Facing::Right => {
            let boundary = (column + 1) as f32 * tile_size;
            let gap = hitbox.right() - boundary;
            (-WALL_TOLERANCE..=WALL_TOLERANCE).contains(&gap)
        }
    }
}

/// Wall-slide and wall-jump eligibility.
///
/// The neighbouring column must be solid on the box's row and the row below,
/// and the box must be touching it. A neighbouring column past the level edge
/// counts as a wall outright.
pub fn is_on_wall<G: TileGrid + ?Sized>(grid: &G, hitbox: &Hitbox, facing: Facing) -> bool {
    let ts = grid.tile_size();
    let column = tile_index(hitbox.x, ts);
    let row = tile_index(hitbox.y, ts);
    let neighbour = match facing {
        Facing::Left => column - 1,
        Facing::Right => column + 1,
    };
    if neighbour < 0 || neighbour >= grid.columns() {
        return true;
    }
    is_tile_solid(grid, neighbour, row)
        && is_tile_solid(grid, neighbour, row + 1)
        && is_touching_wall(hitbox, facing, ts)
}
