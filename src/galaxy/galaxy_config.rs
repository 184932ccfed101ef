use bevy::prelude::*;

/// The committed galaxy parameters. The editing panel stages its edits in
/// [`GalaxyConfigUi`] and copies them here on commit; everything downstream
/// (generator, renderer) reads only this resource.
#[derive(Resource, Clone, PartialEq)]
pub struct GalaxyConfig {
    pub generation: i32,

    pub count: u32,
    /// Rendered point size. Pass-through to the material, the generator
    /// ignores it.
    pub size: f32,
    pub radius: f32,
    pub branches: u32,
    pub spin: f32,
    pub randomness: f32,
    pub randomness_power: f32,

    pub inside_color: Vec3,
    pub outside_color: Vec3,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            generation: 1,
            count: 23_000,
            size: 0.04,
            radius: 5.0,
            branches: 3,
            spin: 1.241,
            randomness: 0.387,
            randomness_power: 2.088,
            inside_color: Vec3::new(1.0, 0.376, 0.188),    // #ff6030
            outside_color: Vec3::new(0.106, 0.224, 0.518), // #1b3984
        }
    }
}

impl GalaxyConfig {
    pub const MIN: Self = Self {
        generation: 0,
        count: 100,
        size: 0.01,
        radius: 1.0,
        branches: 2,
        spin: -5.0,
        randomness: 0.0,
        randomness_power: 1.0,
        inside_color: Vec3::ZERO,
        outside_color: Vec3::ZERO,
    };
    pub const MAX: Self = Self {
        generation: 0,
        count: 100_000,
        size: 0.1,
        radius: 10.0,
        branches: 10,
        spin: 5.0,
        randomness: 2.0,
        randomness_power: 10.0,
        inside_color: Vec3::ONE,
        outside_color: Vec3::ONE,
    };
}

#[derive(Resource)]
struct GalaxyConfigOld(GalaxyConfig);

impl Default for GalaxyConfigOld {
    fn default() -> Self {
        Self(GalaxyConfig {
            generation: -1,
            ..default()
        })
    }
}

/// Live widget values. The panel mutates these freely while a control is
/// being dragged; they land in [`GalaxyConfig`] only on commit.
#[derive(Resource)]
pub struct GalaxyConfigUi {
    pub count: u32,
    pub size: f32,
    pub radius: f32,
    pub branches: u32,
    pub spin: f32,
    pub randomness: f32,
    pub randomness_power: f32,
    pub inside_color: [f32; 3],
    pub outside_color: [f32; 3],
}

impl From<&GalaxyConfig> for GalaxyConfigUi {
    fn from(config: &GalaxyConfig) -> Self {
        Self {
            count: config.count,
            size: config.size,
            radius: config.radius,
            branches: config.branches,
            spin: config.spin,
            randomness: config.randomness,
            randomness_power: config.randomness_power,
            inside_color: config.inside_color.to_array(),
            outside_color: config.outside_color.to_array(),
        }
    }
}

impl GalaxyConfigUi {
    pub fn commit(&self, config: &mut GalaxyConfig) {
        config.count = self.count;
        config.size = self.size;
        config.radius = self.radius;
        config.branches = self.branches;
        config.spin = self.spin;
        config.randomness = self.randomness;
        config.randomness_power = self.randomness_power;
        config.inside_color = Vec3::from_array(self.inside_color);
        config.outside_color = Vec3::from_array(self.outside_color);
    }
}

pub struct GalaxyConfigPlugin;

impl Plugin for GalaxyConfigPlugin {
    fn build(&self, app: &mut App) {
        let config = GalaxyConfig::default();
        app.insert_resource(GalaxyConfigUi::from(&config))
            .insert_resource(config)
            .insert_resource(GalaxyConfigOld::default())
            .add_systems(Update, apply_ui_updates);
    }
}

/// A commit that changed nothing keeps the old generation, so downstream
/// regeneration only fires on real parameter changes.
fn apply_ui_updates(
    mut galaxy_config_old: ResMut<GalaxyConfigOld>,
    mut galaxy_config: ResMut<GalaxyConfig>,
) {
    if galaxy_config.is_changed() && *galaxy_config != galaxy_config_old.0 {
        galaxy_config.generation += 1;

        galaxy_config_old.0 = galaxy_config.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(GalaxyConfigPlugin);
        // settle the initial insertion bump
        app.update();
        app
    }

    #[test]
    fn startup_commits_one_generation() {
        let app = test_app();
        assert_eq!(app.world().resource::<GalaxyConfig>().generation, 2);
    }

    #[test]
    fn changed_value_bumps_generation_once() {
        let mut app = test_app();
        let start = app.world().resource::<GalaxyConfig>().generation;

        app.world_mut().resource_mut::<GalaxyConfig>().spin = 2.0;
        app.update();
        assert_eq!(
            app.world().resource::<GalaxyConfig>().generation,
            start + 1
        );

        app.update();
        assert_eq!(
            app.world().resource::<GalaxyConfig>().generation,
            start + 1
        );
    }

    #[test]
    fn rewriting_an_equal_value_keeps_the_generation() {
        let mut app = test_app();
        let start = app.world().resource::<GalaxyConfig>().generation;

        let spin = app.world().resource::<GalaxyConfig>().spin;
        app.world_mut().resource_mut::<GalaxyConfig>().spin = spin;
        app.update();
        assert_eq!(app.world().resource::<GalaxyConfig>().generation, start);
    }

    #[test]
    fn ui_commit_round_trips_every_field() {
        let config = GalaxyConfig::default();
        let mut ui = GalaxyConfigUi::from(&config);
        ui.count = 50_000;
        ui.branches = 5;
        ui.inside_color = [0.2, 0.4, 0.6];

        let mut committed = config.clone();
        ui.commit(&mut committed);

        assert_eq!(committed.count, 50_000);
        assert_eq!(committed.branches, 5);
        assert_eq!(committed.inside_color, Vec3::new(0.2, 0.4, 0.6));
        assert_eq!(committed.spin, config.spin);
        assert_eq!(committed.generation, config.generation);
    }
}
