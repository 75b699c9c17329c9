use bevy::app::AppExit;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;
use bevy::window::WindowResolution;

use crate::simulation::scenario::Scenario;
use crate::visualization::projection::DrawItem;

#[derive(Component)]
struct BodyIndex(pub usize);

/// Frames left before a headless run exits
#[derive(Resource)]
struct FrameBudget(u64);

const DIGIT_KEYS: [(KeyCode, u8); 9] = [
    (KeyCode::Digit1, 1),
    (KeyCode::Digit2, 2),
    (KeyCode::Digit3, 3),
    (KeyCode::Digit4, 4),
    (KeyCode::Digit5, 5),
    (KeyCode::Digit6, 6),
    (KeyCode::Digit7, 7),
    (KeyCode::Digit8, 8),
    (KeyCode::Digit9, 9),
];

pub fn run_2d(scenario: Scenario) {
    println!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.system.bodies.len());

    let camera = scenario.engine.camera;
    App::new()
        .insert_resource(scenario)
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "orbsim".to_string(),
                resolution: WindowResolution::new(camera.width as f32, camera.height as f32),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_bodies_system)
        .add_systems(Update, (keyboard_command_system, physics_step_system, sync_transforms_system).chain())
        .run();
}

/// Run `frames` batches without a window, printing every body after each one
pub fn run_headless(scenario: Scenario, frames: u64) {
    App::new()
        .insert_resource(scenario)
        .insert_resource(FrameBudget(frames))
        .add_plugins((MinimalPlugins, LogPlugin::default()))
        .add_systems(Update, (physics_step_system, print_state_system).chain())
        .run();
}

fn setup_bodies_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    for item in scenario.render() {
        let [r, g, b] = rgb(item.color);
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new((item.radius as f32).max(1.0)))),
                material: materials.add(ColorMaterial::from(Color::srgb_u8(r, g, b))),
                transform: screen_transform(&item, &scenario),
                ..Default::default()
            },
            BodyIndex(item.index),
        ));
    }
}

fn keyboard_command_system(keys: Res<ButtonInput<KeyCode>>, mut scenario: ResMut<Scenario>) {
    for (code, digit) in DIGIT_KEYS {
        if keys.just_pressed(code) && !scenario.press_key(digit) {
            debug!("key {digit} is not bound to a transfer");
        }
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    // Commands land between batches, never mid-batch
    scenario.advance();
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    let items = scenario.render();
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(item) = items.get(*i) {
            *transform = screen_transform(item, &scenario);
        }
    }
}

fn print_state_system(scenario: Res<Scenario>, mut budget: ResMut<FrameBudget>, mut exit: EventWriter<AppExit>) {
    for b in &scenario.system.bodies {
        println!("{:>8.2} {:<10} {:>12.4} {:>12.4}", scenario.system.t, b.name, b.x.x, b.x.y);
    }
    budget.0 = budget.0.saturating_sub(1);
    if budget.0 == 0 {
        exit.send(AppExit::Success);
    }
}

/// Screen coordinates (origin top-left, y down) to Bevy world coordinates
/// (origin centre, y up)
fn screen_transform(item: &DrawItem, scenario: &Scenario) -> Transform {
    let camera = &scenario.engine.camera;
    let x = item.x - camera.width / 2.0;
    let y = camera.height / 2.0 - item.y;
    Transform::from_xyz(x as f32, y as f32, 0.0)
}

fn rgb(color: u32) -> [u8; 3] {
    let [_, r, g, b] = color.to_be_bytes();
    [r, g, b]
}
