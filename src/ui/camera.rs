use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::EguiContexts;
use std::f32::consts::{FRAC_PI_4, SQRT_2};

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera)
            .add_systems(PostUpdate, orbit_camera_system);
    }
}

fn spawn_camera(mut commands: Commands, mut clearcolor: ResMut<ClearColor>) {
    *clearcolor = ClearColor(Color::BLACK);
    commands.spawn((
        Camera3d { ..default() },
        Transform::from_xyz(0.0, 8.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
        OrbitCamera::default(),
    ));
}

#[derive(Component, Clone)]
pub struct OrbitCamera {
    yaw: f32,
    pitch: f32,
    distance: f32,
    smooth_zoom_buffer: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        // matches the spawn transform: (0, 8, 8) looking at the origin
        Self {
            yaw: 0.0,
            pitch: FRAC_PI_4,
            distance: 8.0 * SQRT_2,
            smooth_zoom_buffer: 0.0,
        }
    }
}

impl OrbitCamera {
    const PITCH_LIMIT: f32 = 1.54;
    const MIN_DISTANCE: f32 = 2.0;
    const MAX_DISTANCE: f32 = 60.0;

    fn translation(&self) -> Vec3 {
        let rotation = Quat::from_euler(EulerRot::YXZ, self.yaw, -self.pitch, 0.0);
        rotation * Vec3::new(0.0, 0.0, self.distance)
    }
}

pub fn orbit_camera_system(
    mut query: Query<(&mut Transform, &mut OrbitCamera)>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut motion_evr: EventReader<MouseMotion>,
    mut scroll_evr: EventReader<MouseWheel>,
    mut contexts: EguiContexts,
) {
    let Ok((mut transform, mut camera)) = query.single_mut() else {
        return;
    };

    let mut drag_delta = Vec2::ZERO;
    for ev in motion_evr.read() {
        drag_delta += ev.delta;
    }

    // leave drags over the side panel to egui
    let pointer_captured = contexts.ctx_mut().wants_pointer_input();

    if mouse_buttons.pressed(MouseButton::Left) && !pointer_captured {
        camera.yaw -= drag_delta.x * 0.005;
        camera.pitch = (camera.pitch + drag_delta.y * 0.005)
            .clamp(-OrbitCamera::PITCH_LIMIT, OrbitCamera::PITCH_LIMIT);
    }

    // scroll delta is cached to a buffer
    // buffer is converted to actual zoom over time for a smooth zooming effect
    for ev in scroll_evr.read() {
        if pointer_captured {
            continue;
        }
        match ev.unit {
            MouseScrollUnit::Line => camera.smooth_zoom_buffer += ev.y * 0.05,
            MouseScrollUnit::Pixel => camera.smooth_zoom_buffer += ev.y * 0.002,
        }
    }

    let smooth_zoom_amount = camera.smooth_zoom_buffer * 0.2;
    camera.smooth_zoom_buffer -= smooth_zoom_amount;
    camera.distance = (camera.distance * (1.0 - smooth_zoom_amount))
        .clamp(OrbitCamera::MIN_DISTANCE, OrbitCamera::MAX_DISTANCE);

    transform.translation = camera.translation();
    transform.look_at(Vec3::ZERO, Vec3::Y);
}
