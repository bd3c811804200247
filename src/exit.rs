use serde::{Deserialize, Serialize};

use crate::grid::{tile_index, TileCode, TileGrid};
use crate::hitbox::Hitbox;

/// Direction of a level-transition marker in the decoration grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExitKind {
    Left,
    Right,
    Up,
    Down,
}

impl ExitKind {
    pub const LEFT_CODE: TileCode = 35;
    pub const RIGHT_CODE: TileCode = 36;
    pub const UP_CODE: TileCode = 38;
    pub const DOWN_CODE: TileCode = 39;

    pub fn code(self) -> TileCode {
        match self {
            ExitKind::Left => Self::LEFT_CODE,
            ExitKind::Right => Self::RIGHT_CODE,
            ExitKind::Up => Self::UP_CODE,
            ExitKind::Down => Self::DOWN_CODE,
        }
    }

    pub fn from_code(code: TileCode) -> Option<Self> {
        match code {
            Self::LEFT_CODE => Some(ExitKind::Left),
            Self::RIGHT_CODE => Some(ExitKind::Right),
            Self::UP_CODE => Some(ExitKind::Up),
            Self::DOWN_CODE => Some(ExitKind::Down),
            _ => None,
        }
    }
}

/// Exit marker under `hitbox`, if any.
///
/// Checked in priority order: right (at the top-left tile or the tile under
/// the right edge), left, up (both at the top-left tile), then down one row
/// below the top-left tile. Cells outside the decoration grid hold no marker.
pub fn exit_status<G: TileGrid + ?Sized>(decorations: &G, hitbox: &Hitbox) -> Option<ExitKind> {
    let ts = decorations.tile_size();
    let column = tile_index(hitbox.x, ts);
    let row = tile_index(hitbox.y, ts);
    let right_column = tile_index(hitbox.right(), ts);
    let marker = |x: i32, y: i32| decorations.tile(x, y).and_then(ExitKind::from_code);

    let here = marker(column, row);
    if here == Some(ExitKind::Right) || marker(right_column, row) == Some(ExitKind::Right) {
        return Some(ExitKind::Right);
    }
    if matches!(here, Some(ExitKind::Left | ExitKind::Up)) {
        return here;
    }
    (marker(column, row + 1) == Some(ExitKind::Down)).then_some(ExitKind::Down)
}
