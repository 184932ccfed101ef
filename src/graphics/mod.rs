use bevy::prelude::*;

mod render;

pub use render::{point_cloud_mesh, PointCloudMaterial};

pub struct GraphicsPlugin;

impl Plugin for GraphicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(render::RenderPlugin);
    }
}
