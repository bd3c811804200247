use serde::{Deserialize, Serialize};

/// Raw tile code as stored in a level grid.
pub type TileCode = i32;

/// Passable tile, never collidable.
pub const EMPTY: TileCode = -1;

/// Codes in `[0, MAX_SOLID)` collide. Anything at or above belongs to the
/// cross-layer marker range and is ignored by collision.
pub const MAX_SOLID: TileCode = 49;

/// Read-only access to a tile grid addressed `[x][y]` in tile units.
///
/// Queries only ever read through this trait, so chunked or sparse layouts can
/// stand in for [`LevelGrid`] without touching any query signature.
pub trait TileGrid {
    fn columns(&self) -> i32;

    fn rows(&self) -> i32;

    /// Edge length of one tile in pixels.
    fn tile_size(&self) -> f32;

    /// Tile code at `(x, y)`, or `None` outside the grid.
    fn tile(&self, x: i32, y: i32) -> Option<TileCode>;

    /// Exclusive upper bound of the solid code range.
    fn solid_limit(&self) -> TileCode {
        MAX_SOLID
    }

    fn pixel_width(&self) -> f32 {
        self.columns() as f32 * self.tile_size()
    }

    fn pixel_height(&self) -> f32 {
        self.rows() as f32 * self.tile_size()
    }
}

impl<G: TileGrid + ?Sized> TileGrid for &G {
    fn columns(&self) -> i32 {
        (**self).columns()
    }

    fn rows(&self) -> i32 {
        (**self).rows()
    }

    fn tile_size(&self) -> f32 {
        (**self).tile_size()
    }

    fn tile(&self, x: i32, y: i32) -> Option<TileCode> {
        (**self).tile(x, y)
    }

    fn solid_limit(&self) -> TileCode {
        (**self).solid_limit()
    }
}

pub fn is_solid_code(code: TileCode, limit: TileCode) -> bool {
    code != EMPTY && (0..limit).contains(&code)
}

/// Whether the tile at `(x_tile, y_tile)` blocks movement.
///
/// Coordinates outside the grid count as solid, matching the closed-world rule
/// of the pixel-space checks.
pub fn is_tile_solid<G: TileGrid + ?Sized>(grid: &G, x_tile: i32, y_tile: i32) -> bool {
    match grid.tile(x_tile, y_tile) {
        Some(code) => is_solid_code(code, grid.solid_limit()),
        None => true,
    }
}

/// Column (or row) index of a pixel coordinate.
pub fn tile_index(pixel: f32, tile_size: f32) -> i32 {
    (pixel / tile_size).floor() as i32
}

/// Dense column-major grid, the layout produced by the level loader.
///
/// Deserializing goes through the same shape checks as the constructors, so a
/// grid never holds fewer codes than its dimensions address.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLevelGrid")]
pub struct LevelGrid {
    width: usize,
    height: usize,
    tile_size: f32,
    codes: Vec<TileCode>,
}

impl LevelGrid {
    pub fn filled(width: usize, height: usize, code: TileCode, tile_size: f32) -> Result<Self, String> {
        validate_shape(width, height, tile_size)?;
        Ok(Self {
            width,
            height,
            tile_size,
            codes: vec![code; width * height],
        })
    }

    /// Build from `columns[x][y]`. Every column must have the same length.
    pub fn from_columns(columns: Vec<Vec<TileCode>>, tile_size: f32) -> Result<Self, String> {
        let width = columns.len();
        let height = columns.first().map_or(0, Vec::len);
        validate_shape(width, height, tile_size)?;
        let mut codes = Vec::with_capacity(width * height);
        for (x, column) in columns.into_iter().enumerate() {
            if column.len() != height {
                return Err(format!(
                    "column {x} has {} rows, expected {height}",
                    column.len()
                ));
            }
            codes.extend(column);
        }
        Ok(Self {
            width,
            height,
            tile_size,
            codes,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("invalid grid snapshot: {e}"))
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| e.to_string())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn set(&mut self, x: i32, y: i32, code: TileCode) {
        if let Some(idx) = self.index(x, y) {
            self.codes[idx] = code;
        }
    }

    /// Count of tiles that collide under this grid's solid limit.
    pub fn solid_count(&self) -> usize {
        self.codes
            .iter()
            .filter(|&&code| is_solid_code(code, self.solid_limit()))
            .count()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(x as usize * self.height + y as usize)
    }
}

impl TileGrid for LevelGrid {
    fn columns(&self) -> i32 {
        self.width as i32
    }

    fn rows(&self) -> i32 {
        self.height as i32
    }

    fn tile_size(&self) -> f32 {
        self.tile_size
    }

    fn tile(&self, x: i32, y: i32) -> Option<TileCode> {
        self.index(x, y).map(|idx| self.codes[idx])
    }
}

#[derive(Deserialize)]
struct RawLevelGrid {
    width: usize,
    height: usize,
    tile_size: f32,
    codes: Vec<TileCode>,
}

impl TryFrom<RawLevelGrid> for LevelGrid {
    type Error = String;

    fn try_from(raw: RawLevelGrid) -> Result<Self, String> {
        validate_shape(raw.width, raw.height, raw.tile_size)?;
        if raw.codes.len() != raw.width * raw.height {
            return Err(format!(
                "grid snapshot holds {} codes, expected {}x{}",
                raw.codes.len(),
                raw.width,
                raw.height
            ));
        }
        Ok(Self {
            width: raw.width,
            height: raw.height,
            tile_size: raw.tile_size,
            codes: raw.codes,
        })
    }
}

fn validate_shape(width: usize, height: usize, tile_size: f32) -> Result<(), String> {
    if width == 0 || height == 0 {
        return Err(format!("grid must be at least 1x1 tiles, got {width}x{height}"));
    }
    if !(tile_size.is_finite() && tile_size > 0.0) {
        return Err(format!("tile size must be positive, got {tile_size}"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_solid_range() {
        assert!(!is_solid_code(EMPTY, MAX_SOLID));
        assert!(is_solid_code(0, MAX_SOLID));
        assert!(is_solid_code(48, MAX_SOLID));
        assert!(!is_solid_code(49, MAX_SOLID));
        // Cross-layer markers are offset past the solid range.
        assert!(!is_solid_code(12 + 255, MAX_SOLID));
        assert!(!is_solid_code(-7, MAX_SOLID));
    }

    #[test]
    fn columns_are_addressed_x_then_y() {
        let grid = LevelGrid::from_columns(vec![vec![EMPTY, 1, 2], vec![3, EMPTY, 60]], 32.0)
            .expect("rectangular columns");
        assert_eq!(grid.columns(), 2);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.tile(0, 1), Some(1));
        assert_eq!(grid.tile(1, 0), Some(3));
        assert_eq!(grid.tile(1, 2), Some(60));
        assert_eq!(grid.tile(2, 0), None);
        assert_eq!(grid.tile(0, -1), None);
        assert!(is_tile_solid(&grid, 1, 0));
        assert!(!is_tile_solid(&grid, 1, 2));
        assert!(is_tile_solid(&grid, 5, 5));
        assert_eq!(grid.solid_count(), 3);
    }

    #[test]
    fn rejects_bad_shapes() {
        assert!(LevelGrid::from_columns(vec![], 32.0).is_err());
        assert!(LevelGrid::from_columns(vec![vec![1, 2], vec![1]], 32.0).is_err());
        assert!(LevelGrid::filled(3, 3, EMPTY, 0.0).is_err());
        assert!(LevelGrid::filled(0, 3, EMPTY, 32.0).is_err());
    }

    #[test]
    fn json_snapshot_is_checked() {
        let mut grid = LevelGrid::filled(3, 2, EMPTY, 16.0).expect("valid grid");
        grid.set(2, 1, 7);
        let json = grid.to_json().expect("serializable");
        assert_eq!(LevelGrid::from_json(&json), Ok(grid));

        let short = r#"{"width":3,"height":2,"tile_size":16.0,"codes":[-1,-1]}"#;
        let err = LevelGrid::from_json(short).expect_err("length mismatch");
        assert!(err.contains("expected 3x2"));
    }

    #[test]
    fn plain_deserialize_enforces_shape() {
        let short = r#"{"width":3,"height":2,"tile_size":16.0,"codes":[-1,-1]}"#;
        assert!(serde_json::from_str::<LevelGrid>(short).is_err());

        let zero_tiles = r#"{"width":1,"height":1,"tile_size":0.0,"codes":[-1]}"#;
        assert!(serde_json::from_str::<LevelGrid>(zero_tiles).is_err());

        let ok = r#"{"width":2,"height":1,"tile_size":16.0,"codes":[-1,4]}"#;
        let grid = serde_json::from_str::<LevelGrid>(ok).expect("well-formed grid");
        assert_eq!(grid.tile(1, 0), Some(4));
    }

    #[test]
    fn pixel_extent_follows_tile_size() {
        let grid = LevelGrid::filled(26, 14, EMPTY, 32.0).expect("valid grid");
        assert_eq!(grid.pixel_width(), 832.0);
        assert_eq!(grid.pixel_height(), 448.0);
        assert_eq!(tile_index(-0.5, 32.0), -1);
        assert_eq!(tile_index(63.9, 32.0), 1);
    }
}
