use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{load_collision_config, CollisionConfig};
use crate::exit::{exit_status, ExitKind};
use crate::grid::{LevelGrid, TileGrid, EMPTY};
use crate::hitbox::Hitbox;

/// Collision and decoration grids of the active level.
///
/// Installed wholesale at level transitions and never edited in place, so any
/// number of systems can query it in parallel during a tick.
#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLevel")]
pub struct Level {
    tiles: LevelGrid,
    decorations: LevelGrid,
}

impl Level {
    pub fn new(tiles: LevelGrid, decorations: LevelGrid) -> Result<Self, String> {
        if tiles.columns() != decorations.columns() || tiles.rows() != decorations.rows() {
            return Err(format!(
                "decoration grid is {}x{}, collision grid is {}x{}",
                decorations.columns(),
                decorations.rows(),
                tiles.columns(),
                tiles.rows()
            ));
        }
        if tiles.tile_size() != decorations.tile_size() {
            return Err(format!(
                "decoration tile size {} differs from collision tile size {}",
                decorations.tile_size(),
                tiles.tile_size()
            ));
        }
        Ok(Self { tiles, decorations })
    }

    /// Level with no solid tiles and no markers.
    pub fn empty(config: &CollisionConfig, width: usize, height: usize) -> Result<Self, String> {
        let tiles = LevelGrid::filled(width, height, EMPTY, config.tile_size())?;
        Self::new(tiles.clone(), tiles)
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("invalid level snapshot: {e}"))
    }

    pub fn tiles(&self) -> &LevelGrid {
        &self.tiles
    }

    pub fn decorations(&self) -> &LevelGrid {
        &self.decorations
    }

    pub fn exit_status(&self, hitbox: &Hitbox) -> Option<ExitKind> {
        exit_status(&self.decorations, hitbox)
    }
}

#[derive(Deserialize)]
struct RawLevel {
    tiles: LevelGrid,
    decorations: LevelGrid,
}

impl TryFrom<RawLevel> for Level {
    type Error = String;

    fn try_from(raw: RawLevel) -> Result<Self, String> {
        Level::new(raw.tiles, raw.decorations)
    }
}

/// Running tally kept by the level-swap report.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LevelSwapStats {
    pub installs: u64,
    /// Installs whose tile size disagreed with [`CollisionConfig::tile_size`].
    pub tile_size_mismatches: u64,
}

/// Registers collision config and reports level swaps.
#[derive(Default)]
pub struct CollisionPlugin {
    /// Used as-is when set; otherwise read through [`load_collision_config`].
    pub config: Option<CollisionConfig>,
}

impl Plugin for CollisionPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone().unwrap_or_else(load_collision_config);
        app.insert_resource(config)
            .init_resource::<LevelSwapStats>()
            .add_systems(
                PreUpdate,
                report_level_swap.run_if(resource_exists_and_changed::<Level>),
            );
    }
}

fn report_level_swap(
    level: Res<Level>,
    config: Res<CollisionConfig>,
    mut stats: ResMut<LevelSwapStats>,
) {
    let tiles = level.tiles();
    stats.installs += 1;
    info!(
        "[Collision] Level installed: {}x{} tiles, {} solid",
        tiles.width(),
        tiles.height(),
        tiles.solid_count()
    );
    if tiles.tile_size() != config.tile_size() {
        stats.tile_size_mismatches += 1;
        warn!(
            "[Collision] Level tile size {} does not match configured {}",
            tiles.tile_size(),
            config.tile_size()
        );
    }
}
