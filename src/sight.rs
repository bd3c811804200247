use crate::grid::{is_tile_solid, tile_index, TileGrid};
use crate::hitbox::Hitbox;

/// No solid tile in columns `start..end` of `row`.
pub fn are_all_tiles_clear<G: TileGrid + ?Sized>(grid: &G, start: i32, end: i32, row: i32) -> bool {
    (start..end).all(|x| !is_tile_solid(grid, x, row))
}

/// Columns `start..end` of `row` are clear and each one has solid ground
/// directly underneath.
pub fn are_all_tiles_walkable<G: TileGrid + ?Sized>(
    grid: &G,
    start: i32,
    end: i32,
    row: i32,
) -> bool {
    are_all_tiles_clear(grid, start, end, row)
        && (start..end).all(|x| is_tile_solid(grid, x, row + 1))
}

/// Walkable line of sight from `observer` to `target` along `row`.
///
/// When the observer is right of the target, the target's own column is
/// skipped and the scan runs up to (not including) the observer's column.
/// Otherwise it runs from the observer's column up to the target's.
pub fn is_sight_clear<G: TileGrid + ?Sized>(
    grid: &G,
    observer: &Hitbox,
    target: &Hitbox,
    row: i32,
) -> bool {
    let ts = grid.tile_size();
    let observer_col = tile_index(observer.x, ts);
    let target_col = tile_index(target.x, ts);
    if observer_col > target_col {
        are_all_tiles_walkable(grid, target_col + 1, observer_col, row)
    } else {
        are_all_tiles_walkable(grid, observer_col, target_col, row)
    }
}

/// Unobstructed line of fire from a fixed launcher to an entity along `row`.
/// Unlike [`is_sight_clear`], nothing needs to support the path from below.
pub fn can_launcher_see_entity<G: TileGrid + ?Sized>(
    grid: &G,
    entity: &Hitbox,
    launcher: &Hitbox,
    row: i32,
) -> bool {
    let ts = grid.tile_size();
    let launcher_col = tile_index(launcher.x, ts);
    let entity_col = tile_index(entity.x, ts);
    if launcher_col > entity_col {
        are_all_tiles_clear(grid, entity_col, launcher_col, row)
    } else {
        are_all_tiles_clear(grid, launcher_col, entity_col, row)
    }
}
