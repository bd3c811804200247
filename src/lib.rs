//! Collision queries for tile-based platformer levels.
//!
//! Every query is a pure function over a read-only [`TileGrid`] and a caller
//! owned [`Hitbox`]. Out-of-level pixels are solid. Snapping queries return
//! corrected coordinates and leave writing them back to the caller.

pub mod config;
pub mod counters;
pub mod exit;
pub mod floor;
pub mod grid;
pub mod hitbox;
pub mod kinematics;
pub mod level;
pub mod occupancy;
pub mod projectile;
pub mod resolve;
pub mod sight;
pub mod wall;

pub use config::{load_collision_config, CollisionConfig};
pub use counters::CountingGrid;
pub use exit::{exit_status, ExitKind};
pub use floor::{find_ground_y, is_floor_ahead, is_on_floor};
pub use grid::{is_tile_solid, LevelGrid, TileCode, TileGrid, EMPTY, MAX_SOLID};
pub use hitbox::{Facing, Hitbox};
pub use kinematics::{push_back, step_airborne, step_horizontal, AirborneStep};
pub use level::{CollisionPlugin, Level, LevelSwapStats};
pub use occupancy::{can_occupy, is_solid_at};
pub use projectile::projectile_hits_level;
pub use resolve::{resolve_ceiling_y, resolve_wall_x, VerticalSnap};
pub use sight::{can_launcher_see_entity, is_sight_clear};
pub use wall::{is_on_wall, is_touching_wall};
