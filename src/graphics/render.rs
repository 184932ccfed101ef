use crate::prelude::*;
use bevy::{
    prelude::*,
    reflect::TypePath,
    render::{
        mesh::Indices,
        render_asset::RenderAssetUsages,
        render_resource::{AsBindGroup, PrimitiveTopology, ShaderRef, ShaderType},
    },
};
use bytemuck::{Pod, Zeroable};

pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MaterialPlugin::<PointCloudMaterial>::default());
    }
}

// This struct is duplicated in galaxy_points.wgsl, so make sure to update both
#[derive(ShaderType, Pod, Zeroable, Clone, Copy, Debug)]
#[repr(C)]
struct PointsParams {
    /// World-space quad extent of a point sprite.
    size: f32,
    pad: Vec3,
}

impl PointsParams {
    fn read(config: &GalaxyConfig) -> Self {
        Self {
            size: config.size,
            pad: Vec3::ZERO,
        }
    }
}

/// Additive, depth-write-free point sprites. The vertex shader expands each
/// quad in view space so apparent size falls off with distance.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct PointCloudMaterial {
    #[uniform(0)]
    params: PointsParams,
    alpha_mode: AlphaMode,
}

impl PointCloudMaterial {
    pub fn new(config: &GalaxyConfig) -> Self {
        Self {
            params: PointsParams::read(config),
            alpha_mode: AlphaMode::Add,
        }
    }
}

impl Material for PointCloudMaterial {
    fn vertex_shader() -> ShaderRef {
        "shaders/galaxy_points.wgsl".into()
    }

    fn fragment_shader() -> ShaderRef {
        "shaders/galaxy_points.wgsl".into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        self.alpha_mode
    }
}

/// Expands a generated cloud into one camera-facing-quad-per-point mesh.
/// All four corners of a quad carry the bare point center; the shader tells
/// them apart by UV and spreads them out in view space.
pub fn point_cloud_mesh(cloud: &PointCloud) -> Mesh {
    const CORNERS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

    let count = cloud.len();
    let mut positions = Vec::with_capacity(count * 4);
    let mut uvs = Vec::with_capacity(count * 4);
    let mut colors = Vec::with_capacity(count * 4);
    let mut indices = Vec::with_capacity(count * 6);

    for (i, (center, color)) in cloud.positions.iter().zip(&cloud.colors).enumerate() {
        let base = (i * 4) as u32;
        for corner in CORNERS {
            positions.push(center.to_array());
            uvs.push(corner);
            colors.push([color.x, color.y, color.z, 1.0]);
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
    .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, colors)
    .with_inserted_indices(Indices::U32(indices))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::render::mesh::VertexAttributeValues;

    #[test]
    fn mesh_expands_each_point_into_one_quad() {
        let cloud = PointCloud {
            positions: vec![vec3(1.0, 2.0, 3.0), vec3(-1.0, 0.0, 0.5)],
            colors: vec![vec3(1.0, 0.0, 0.0), vec3(0.0, 0.0, 1.0)],
        };
        let mesh = point_cloud_mesh(&cloud);

        assert_eq!(mesh.count_vertices(), 8);
        let Some(Indices::U32(indices)) = mesh.indices() else {
            panic!("expected u32 indices");
        };
        assert_eq!(indices.len(), 12);

        let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("expected f32x3 positions");
        };
        assert!(positions[..4].iter().all(|p| *p == [1.0, 2.0, 3.0]));
        assert!(positions[4..].iter().all(|p| *p == [-1.0, 0.0, 0.5]));

        let Some(VertexAttributeValues::Float32x4(colors)) = mesh.attribute(Mesh::ATTRIBUTE_COLOR)
        else {
            panic!("expected f32x4 colors");
        };
        assert_eq!(colors[0], [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(colors[7], [0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn empty_cloud_builds_an_empty_mesh() {
        let cloud = PointCloud {
            positions: vec![],
            colors: vec![],
        };
        let mesh = point_cloud_mesh(&cloud);
        assert_eq!(mesh.count_vertices(), 0);
    }
}
