use std::cell::Cell;

use crate::grid::{TileCode, TileGrid};

/// Wraps a grid and counts tile reads, for profiling how much of the grid a
/// query touches.
///
/// Uses a `Cell`, so a counting grid stays on the thread that made it. Share
/// the inner grid across threads, not the wrapper.
pub struct CountingGrid<G> {
    inner: G,
    reads: Cell<u64>,
}

impl<G: TileGrid> CountingGrid<G> {
    pub fn new(inner: G) -> Self {
        Self {
            inner,
            reads: Cell::new(0),
        }
    }

    pub fn tile_reads(&self) -> u64 {
        self.reads.get()
    }

    pub fn reset(&self) {
        self.reads.set(0);
    }

    pub fn into_inner(self) -> G {
        self.inner
    }
}

impl<G: TileGrid> TileGrid for CountingGrid<G> {
    fn columns(&self) -> i32 {
        self.inner.columns()
    }

    fn rows(&self) -> i32 {
        self.inner.rows()
    }

    fn tile_size(&self) -> f32 {
        self.inner.tile_size()
    }

    fn tile(&self, x: i32, y: i32) -> Option<TileCode> {
        self.reads.set(self.reads.get().saturating_add(1));
        self.inner.tile(x, y)
    }

    fn solid_limit(&self) -> TileCode {
        self.inner.solid_limit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{LevelGrid, EMPTY};
    use crate::hitbox::Hitbox;
    use crate::sight::can_launcher_see_entity;

    #[test]
    fn counts_only_tile_reads() {
        let grid = LevelGrid::filled(10, 3, EMPTY, 16.0).expect("valid grid");
        let counted = CountingGrid::new(grid);
        assert_eq!(counted.columns(), 10);
        assert_eq!(counted.pixel_width(), 160.0);
        assert_eq!(counted.tile_reads(), 0);

        let launcher = Hitbox::new(8.0, 16.0, 16.0, 16.0);
        let target = Hitbox::new(130.0, 16.0, 10.0, 10.0);
        assert!(can_launcher_see_entity(&counted, &target, &launcher, 1));
        // Columns 0..8 on one row.
        assert_eq!(counted.tile_reads(), 8);

        let inner = counted.into_inner();
        assert_eq!(inner.columns(), 10);
    }
}
