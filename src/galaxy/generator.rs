use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

use super::GalaxyConfig;

/// Output of one generator run. Positions and colors are index-aligned and
/// both hold exactly `count` entries. A cloud is never patched in place;
/// regeneration always builds a new one.
pub struct PointCloud {
    pub positions: Vec<Vec3>,
    pub colors: Vec<Vec3>,
}

impl PointCloud {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Samples a fresh spiral-galaxy point cloud from `config`.
///
/// Each point draws its distance from the center uniformly in
/// `[0, radius)`. That is uniform in radius, not in disk area, so the core
/// comes out denser. Points round-robin over the arms by index, the arm angle is
/// twisted by `spin` in proportion to the point's radius, and each axis gets
/// an independent power-law scatter offset scaled by that same radius.
/// Colors interpolate from `inside_color` at the center to `outside_color`
/// at the rim.
///
/// Deterministic for a fixed RNG stream. The draw order per point is:
/// radius, then (magnitude, sign) for x, y, z.
///
/// # Panics
///
/// Panics if `config.branches` is zero. The editing panel clamps branches to
/// its slider domain, so a zero here is a programmer error.
pub fn generate<R: Rng + ?Sized>(config: &GalaxyConfig, rng: &mut R) -> PointCloud {
    assert!(config.branches >= 1, "branch count must be at least 1");

    let count = config.count as usize;
    let branch_step = TAU / config.branches as f32;

    let mut positions = Vec::with_capacity(count);
    let mut colors = Vec::with_capacity(count);

    for i in 0..count {
        let radius = rng.random::<f32>() * config.radius;
        let branch_angle = (i % config.branches as usize) as f32 * branch_step;
        let angle = branch_angle + radius * config.spin;

        let scatter_x = scatter_offset(rng, config, radius);
        let scatter_y = scatter_offset(rng, config, radius);
        let scatter_z = scatter_offset(rng, config, radius);

        positions.push(vec3(
            angle.sin() * radius + scatter_x,
            scatter_y,
            angle.cos() * radius + scatter_z,
        ));
        colors.push(
            config
                .inside_color
                .lerp(config.outside_color, radius / config.radius),
        );
    }

    PointCloud { positions, colors }
}

/// One axis of the fuzzy scatter around an arm. The exponent concentrates
/// offsets near zero (with rare outliers); scaling by `radius` makes outer
/// points scatter more in absolute terms.
fn scatter_offset<R: Rng + ?Sized>(rng: &mut R, config: &GalaxyConfig, radius: f32) -> f32 {
    let magnitude = rng.random::<f32>().powf(config.randomness_power);
    let sign = if rng.random::<f32>() < 0.5 { 1.0 } else { -1.0 };
    magnitude * sign * config.randomness * radius
}
