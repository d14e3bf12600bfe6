//! Background visuals: starfield decoration and scene lighting.

use bevy::prelude::*;

use crate::driver::ScenePlayer;
use crate::scene::Scene;

/// Visual radius of one background star.
const STAR_MESH_RADIUS: f32 = 1.5;

/// Spawn the star decoration from the scene graph's generated positions.
///
/// Stars are static; nothing touches their transforms after startup.
pub fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    player: Option<Res<ScenePlayer>>,
) {
    let Some(player) = player else {
        return;
    };
    let Scene::Solar(graph) = &player.state.scene else {
        return;
    };

    // Emissive white so stars are visible regardless of lighting.
    let star_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::WHITE * 0.5,
        unlit: true,
        ..default()
    });
    let star_mesh = meshes.add(Sphere::new(STAR_MESH_RADIUS));

    for star in &graph.stars {
        commands.spawn((
            Mesh3d(star_mesh.clone()),
            MeshMaterial3d(star_material.clone()),
            Transform::from_translation(star.as_vec3()),
        ));
    }

    info!("Spawned {} background stars", graph.stars.len());
}

/// Spawn lighting for the loaded scene.
pub fn spawn_lighting(mut commands: Commands, player: Option<Res<ScenePlayer>>) {
    let Some(player) = player else {
        return;
    };

    match &player.state.scene {
        Scene::Cube(_) => {
            // Single key light from the upper left.
            commands.spawn((
                DirectionalLight {
                    illuminance: 10000.0,
                    shadows_enabled: false,
                    ..default()
                },
                Transform::from_xyz(-1.0, 2.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
            ));
        }
        Scene::Solar(_) => {
            // Ambient fill so the night sides of planets stay legible.
            commands.insert_resource(AmbientLight {
                color: Color::WHITE,
                brightness: 200.0,
            });

            // Key light from above the orbital plane.
            commands.spawn((
                DirectionalLight {
                    illuminance: 5000.0,
                    shadows_enabled: false,
                    ..default()
                },
                Transform::from_xyz(0.0, 600.0, 0.0).looking_at(Vec3::ZERO, Vec3::Z),
            ));
        }
    }

    info!("Scene lighting initialized");
}
