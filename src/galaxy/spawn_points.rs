use super::PointCount;
use crate::graphics::{point_cloud_mesh, PointCloudMaterial};
use crate::prelude::*;
use bevy::prelude::*;
use bevy::render::view::NoFrustumCulling;

pub struct SpawnPointsPlugin;

impl Plugin for SpawnPointsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(PointSpawningControl { generation: -1 })
            .insert_resource(PointCount { count: 0 })
            .add_systems(Update, (regenerate_point_cloud, rotate_galaxy));
    }
}

#[derive(Resource)]
struct PointSpawningControl {
    generation: i32,
}

/// Root entity of the live point cloud.
#[derive(Component)]
pub struct GalaxyPoints;

/// Rebuilds the cloud whenever the committed config moved to a new
/// generation. The despawn of the old cloud and the spawn of the new one go
/// out in the same command batch, so the scene swaps atomically and the old
/// mesh and material are released with their entity.
fn regenerate_point_cloud(
    mut commands: Commands,
    galaxy_config: Res<GalaxyConfig>,
    mut control: ResMut<PointSpawningControl>,
    mut point_count: ResMut<PointCount>,
    existing_cloud_query: Query<Entity, With<GalaxyPoints>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<PointCloudMaterial>>,
) {
    if control.generation == galaxy_config.generation {
        return;
    }
    control.generation = galaxy_config.generation;

    for entity in &existing_cloud_query {
        commands.entity(entity).despawn();
    }

    let mut rng = rand::rng();
    let cloud = generate(&galaxy_config, &mut rng);
    point_count.count = cloud.len();

    info!(
        "galaxy regenerated: {} points (generation {})",
        cloud.len(),
        galaxy_config.generation
    );

    commands.spawn((
        Mesh3d(meshes.add(point_cloud_mesh(&cloud))),
        MeshMaterial3d(materials.add(PointCloudMaterial::new(&galaxy_config))),
        Transform::IDENTITY,
        Visibility::Inherited,
        GalaxyPoints,
        NoFrustumCulling,
    ));
}

/// The whole cloud turns about the vertical axis at half a radian per second.
fn rotate_galaxy(time: Res<Time>, mut query: Query<&mut Transform, With<GalaxyPoints>>) {
    let angle = time.elapsed_secs() / 2.0;
    for mut transform in &mut query {
        transform.rotation = Quat::from_rotation_y(angle);
    }
}
