use bevy::prelude::*;

mod galaxy_config;
mod generator;
mod spawn_points;

pub use spawn_points::{GalaxyPoints, SpawnPointsPlugin};

pub use galaxy_config::{GalaxyConfig, GalaxyConfigPlugin, GalaxyConfigUi};
pub use generator::{generate, PointCloud};

#[derive(Resource)]
pub struct PointCount {
    pub count: usize,
}
