//! Spawning of the visual entities for scene bodies.

use bevy::prelude::*;

use crate::driver::ScenePlayer;
use crate::scene::cube::{cube_color, CUBE_SIZE};
use crate::scene::Scene;

/// Links a spawned entity back to its orbit group by index in the scene
/// graph's stable iteration order.
#[derive(Component)]
pub struct OrbitBodyIndex(pub usize);

/// Marker for the cube demo's single mesh.
#[derive(Component)]
pub struct SpinningCube;

/// Marker for the body whose surface is time-animated.
#[derive(Component)]
pub struct AnimatedSurface;

/// Spawn meshes and materials for the loaded scene.
pub fn spawn_scene_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    player: Option<Res<ScenePlayer>>,
) {
    let Some(player) = player else {
        return;
    };

    match &player.state.scene {
        Scene::Cube(_) => {
            commands.spawn((
                Mesh3d(meshes.add(Cuboid::new(CUBE_SIZE, CUBE_SIZE, CUBE_SIZE))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: cube_color(),
                    ..default()
                })),
                Transform::default(),
                SpinningCube,
            ));
            info!("Spawned cube scene");
        }
        Scene::Solar(graph) => {
            for (index, orbit) in graph.orbits.iter().enumerate() {
                let color = orbit.body.surface.color();
                let animated = orbit.body.surface.animated_time().is_some();

                // The animated center body glows; planets are lit.
                let material = materials.add(StandardMaterial {
                    base_color: color,
                    emissive: if animated {
                        color.to_linear() * 2.0
                    } else {
                        LinearRgba::BLACK
                    },
                    ..default()
                });

                let entity = commands
                    .spawn((
                        Mesh3d(meshes.add(Sphere::new(orbit.body.radius))),
                        MeshMaterial3d(material),
                        Transform::from_translation(orbit.world_position().as_vec3()),
                        OrbitBodyIndex(index),
                    ))
                    .id();

                if animated {
                    commands.entity(entity).insert(AnimatedSurface);
                }
            }
            info!("Spawned {} scene bodies", graph.orbits.len());
        }
    }
}
