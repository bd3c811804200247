use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Env var naming the JSON file `CollisionConfig` is read from.
pub const CONFIG_ENV: &str = "TILECOLLIDE_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "collision.json";

/// Tile metrics shared by the level loader and the entities querying it.
#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Unscaled tile edge, in source-art pixels.
    pub base_tile_size: f32,
    /// Global sprite scale applied to every tile and hitbox.
    pub scale: f32,
    /// Unscaled probe height for flat bolt projectiles.
    pub bolt_probe_height: f32,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            base_tile_size: 32.0,
            scale: 1.0,
            bolt_probe_height: 4.0,
        }
    }
}

impl CollisionConfig {
    /// Scaled tile edge, truncated to whole pixels.
    pub fn tile_size(&self) -> f32 {
        self.scaled(self.base_tile_size)
    }

    /// Height override for [`crate::projectile::projectile_hits_level`].
    pub fn bolt_probe_height(&self) -> f32 {
        self.scaled(self.bolt_probe_height)
    }

    pub fn scaled(&self, value: f32) -> f32 {
        (value * self.scale).trunc()
    }

    pub fn from_json(contents: &str) -> Result<Self, String> {
        let config: CollisionConfig = serde_json::from_str(contents).map_err(|e| e.to_string())?;
        if config.tile_size() < 1.0 {
            return Err(format!(
                "tile size {} x {} rounds below one pixel",
                config.base_tile_size, config.scale
            ));
        }
        Ok(config)
    }
}

/// Read the config named by [`CONFIG_ENV`], falling back to defaults.
pub fn load_collision_config() -> CollisionConfig {
    let path = std::env::var(CONFIG_ENV)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    load_collision_config_from(&path)
}

pub fn load_collision_config_from(path: &str) -> CollisionConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => match CollisionConfig::from_json(&contents) {
            Ok(cfg) => {
                info!("[Collision] Loaded config from {path} (tile size {})", cfg.tile_size());
                cfg
            }
            Err(e) => {
                warn!("[Collision] Failed to parse {path}: {e}");
                CollisionConfig::default()
            }
        },
        Err(_) => CollisionConfig::default(),
    }
}
