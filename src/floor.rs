use crate::grid::{is_tile_solid, tile_index, TileGrid};
use crate::hitbox::{Facing, Hitbox};
use crate::occupancy::is_solid_at;

/// How far below the feet the floor probes look. Absorbs sub-pixel drift
/// introduced by sprite scaling.
pub const FLOOR_PROBE: f32 = 2.0;

/// True when the point just below either bottom corner is solid.
pub fn is_on_floor<G: TileGrid + ?Sized>(grid: &G, hitbox: &Hitbox) -> bool {
    let probe_y = hitbox.bottom() + FLOOR_PROBE;
    is_solid_at(grid, hitbox.x, probe_y) || is_solid_at(grid, hitbox.right(), probe_y)
}

/// Whether there is still floor under the leading corner after moving by
/// `x_speed`. AI uses this to turn around at ledges.
pub fn is_floor_ahead<G: TileGrid + ?Sized>(
    grid: &G,
    hitbox: &Hitbox,
    x_speed: f32,
    facing: Facing,
) -> bool {
    let probe_y = hitbox.bottom() + FLOOR_PROBE;
    let probe_x = match facing {
        Facing::Left => hitbox.x + x_speed,
        Facing::Right => hitbox.x + x_speed + hitbox.width,
    };
    is_solid_at(grid, probe_x, probe_y)
}

/// Top of the first solid tile at or below `(x, y)` in its column.
///
/// Returns `y` unchanged when the column has no solid tile below, or when `x`
/// lies outside the grid.
pub fn find_ground_y<G: TileGrid + ?Sized>(grid: &G, x: f32, y: f32) -> f32 {
    let ts = grid.tile_size();
    let column = tile_index(x, ts);
    if column < 0 || column >= grid.columns() {
        return y;
    }
    let start = tile_index(y, ts).max(0);
    (start..grid.rows())
        .find(|&row| is_tile_solid(grid, column, row))
        .map_or(y, |row| row as f32 * ts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{LevelGrid, EMPTY};

    /// 10x10 grid, 32px tiles, solid floor on row 7 across columns 0..=4.
    fn ledge_grid() -> LevelGrid {
        let mut grid = LevelGrid::filled(10, 10, EMPTY, 32.0).expect("valid grid");
        for x in 0..=4 {
            grid.set(x, 7, 0);
        }
        grid
    }

    #[test]
    fn standing_box_is_on_floor() {
        let grid = ledge_grid();
        let standing = Hitbox::new(40.0, 200.0, 20.0, 23.0);
        assert!(is_on_floor(&grid, &standing));
        let hovering = Hitbox::new(40.0, 190.0, 20.0, 23.0);
        assert!(!is_on_floor(&grid, &hovering));
    }

    #[test]
    fn floor_probe_sees_one_corner_on_the_ledge() {
        let grid = ledge_grid();
        // Left corner over column 4, right corner over the drop.
        let hb = Hitbox::new(150.0, 200.0, 20.0, 23.0);
        assert!(is_on_floor(&grid, &hb));
    }

    #[test]
    fn ledge_detection_uses_leading_corner() {
        let grid = ledge_grid();
        let hb = Hitbox::new(120.0, 200.0, 20.0, 23.0);
        assert!(is_floor_ahead(&grid, &hb, 2.0, Facing::Right));
        assert!(!is_floor_ahead(&grid, &hb, 25.0, Facing::Right));
        assert!(is_floor_ahead(&grid, &hb, -25.0, Facing::Left));
    }

    #[test]
    fn ground_raycast_finds_row_top() {
        let grid = ledge_grid();
        assert_eq!(find_ground_y(&grid, 70.0, 10.0), 7.0 * 32.0);
        assert_eq!(find_ground_y(&grid, 70.0, -50.0), 7.0 * 32.0);
    }

    #[test]
    fn ground_raycast_without_floor_returns_start() {
        let grid = ledge_grid();
        assert_eq!(find_ground_y(&grid, 250.0, 33.5), 33.5);
        // Starting below the floor row never looks back up.
        assert_eq!(find_ground_y(&grid, 70.0, 260.0), 260.0);
        assert_eq!(find_ground_y(&grid, -4.0, 12.0), 12.0);
        assert_eq!(find_ground_y(&grid, 400.0, 12.0), 12.0);
    }
}
