//! comets.rs
//!
//! Small pool of free-flying comets. Each keeps a bounded FIFO of its
//! recent positions, rendered as a fading line strip, and respawns with
//! fresh random state once it leaves the scene bounds.

use std::collections::VecDeque;

use bevy::prelude::*;
use rand::Rng;

use crate::config::{
    COMET_BOUND_X, COMET_BOUND_Y, COMET_BOUND_Z, COMET_COUNT, COMET_HEAD_RADIUS, COMET_SPAWN_X,
    COMET_SPAWN_Y, COMET_SPAWN_Z, COMET_SPEED_XY, COMET_SPEED_Z, COMET_TRAIL_LENGTH,
    SPHERE_LATITUDES, SPHERE_LONGITUDES,
};

pub struct CometsPlugin;

impl Plugin for CometsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, start)
            .add_systems(FixedUpdate, (advance_comets, rebuild_trails).chain());
    }
}

#[derive(Component, Debug, Clone)]
pub struct Comet {
    pub position: Vec3,
    pub velocity: Vec3,
    pub trail: VecDeque<Vec3>,
}

impl Comet {
    pub fn spawn(rng: &mut impl Rng) -> Self {
        Self {
            position: Vec3::new(
                rng.random_range(COMET_SPAWN_X.0..COMET_SPAWN_X.1),
                rng.random_range(COMET_SPAWN_Y.0..COMET_SPAWN_Y.1),
                rng.random_range(COMET_SPAWN_Z.0..COMET_SPAWN_Z.1),
            ),
            velocity: Vec3::new(
                rng.random_range(COMET_SPEED_XY.0..COMET_SPEED_XY.1),
                rng.random_range(COMET_SPEED_XY.0..COMET_SPEED_XY.1),
                rng.random_range(COMET_SPEED_Z.0..COMET_SPEED_Z.1),
            ),
            trail: VecDeque::with_capacity(COMET_TRAIL_LENGTH),
        }
    }

    // the z bound is one-sided: comets spawn behind the scene with
    // positive dz and only ever leave through the near plane
    fn out_of_bounds(&self) -> bool {
        self.position.x.abs() > COMET_BOUND_X
            || self.position.y.abs() > COMET_BOUND_Y
            || self.position.z > COMET_BOUND_Z
    }

    // one tick: integrate, record the new position, respawn on exit
    pub fn advance(&mut self, rng: &mut impl Rng) {
        self.position += self.velocity;
        self.trail.push_back(self.position);
        if self.trail.len() > COMET_TRAIL_LENGTH {
            self.trail.pop_front();
        }
        if self.out_of_bounds() {
            *self = Comet::spawn(rng);
        }
    }
}

// trail entity, linked back to the comet whose history it draws
#[derive(Component)]
pub struct CometTrail {
    pub comet: Entity,
}

fn empty_trail_mesh() -> Mesh {
    let mut mesh = Mesh::new(
        bevy::render::render_resource::PrimitiveTopology::LineStrip,
        bevy::render::render_asset::RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, Vec::<[f32; 3]>::new());
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, Vec::<[f32; 4]>::new());
    mesh
}

fn start(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut rng = rand::rng();

    let head_mesh = meshes.add(
        Sphere::new(COMET_HEAD_RADIUS)
            .mesh()
            .uv(SPHERE_LONGITUDES, SPHERE_LATITUDES),
    );
    let head_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        metallic: 0.0,
        perceptual_roughness: 0.5,
        ..default()
    });
    // trail fade comes from per-vertex alpha, material just blends
    let trail_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        ..default()
    });

    for _ in 0..COMET_COUNT {
        let comet = Comet::spawn(&mut rng);
        let position = comet.position;

        let head = commands
            .spawn((
                comet,
                Mesh3d(head_mesh.clone()),
                MeshMaterial3d(head_material.clone()),
                Transform::from_translation(position),
            ))
            .id();

        // trail vertices are in world space, so the trail entity stays
        // at the identity transform instead of following the head
        commands.spawn((
            CometTrail { comet: head },
            Mesh3d(meshes.add(empty_trail_mesh())),
            MeshMaterial3d(trail_material.clone()),
            Transform::IDENTITY,
        ));
    }
}

fn advance_comets(mut comets: Query<(&mut Comet, &mut Transform)>) {
    let mut rng = rand::rng();
    for (mut comet, mut transform) in comets.iter_mut() {
        comet.advance(&mut rng);
        transform.translation = comet.position;
    }
}

// rewrite each trail mesh from the comet's position history,
// alpha ramping from 0 at the oldest point to 1 at the newest
fn rebuild_trails(
    trails: Query<(&CometTrail, &Mesh3d)>,
    comets: Query<&Comet>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    for (trail, mesh_handle) in trails.iter() {
        let Ok(comet) = comets.get(trail.comet) else {
            continue;
        };
        let Some(mesh) = meshes.get_mut(&mesh_handle.0) else {
            continue;
        };

        let positions: Vec<[f32; 3]> = comet.trail.iter().map(|p| [p.x, p.y, p.z]).collect();
        let colors: Vec<[f32; 4]> = (0..comet.trail.len())
            .map(|i| [1.0, 1.0, 1.0, i as f32 / COMET_TRAIL_LENGTH as f32])
            .collect();

        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
        mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn still_comet() -> Comet {
        Comet {
            position: Vec3::ZERO,
            velocity: Vec3::new(0.1, 0.0, 0.1),
            trail: VecDeque::new(),
        }
    }

    #[test]
    fn spawn_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let comet = Comet::spawn(&mut rng);
            assert!(comet.position.x >= -100.0 && comet.position.x < 100.0);
            assert!(comet.position.y >= -50.0 && comet.position.y < 50.0);
            assert!(comet.position.z >= -100.0 && comet.position.z < -50.0);
            assert!(comet.velocity.x >= -0.2 && comet.velocity.x < 0.2);
            assert!(comet.velocity.y >= -0.2 && comet.velocity.y < 0.2);
            assert!(comet.velocity.z >= 0.1 && comet.velocity.z < 0.4);
            assert!(comet.trail.is_empty());
        }
    }

    #[test]
    fn trail_grows_one_position_per_tick_up_to_capacity() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut comet = still_comet();
        for tick in 1..=30 {
            comet.advance(&mut rng);
            assert_eq!(comet.trail.len(), tick.min(COMET_TRAIL_LENGTH));
        }
    }

    #[test]
    fn trail_is_fifo_and_holds_the_latest_positions() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut comet = still_comet();
        // 21 ticks: the tick-1 position is evicted, ticks 2..=21 remain
        let mut all_positions = Vec::new();
        for _ in 0..21 {
            comet.advance(&mut rng);
            all_positions.push(comet.position);
        }
        assert_eq!(comet.trail.len(), COMET_TRAIL_LENGTH);
        let expected: Vec<Vec3> = all_positions[1..].to_vec();
        let actual: Vec<Vec3> = comet.trail.iter().copied().collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn respawns_in_the_tick_it_crosses_a_bound() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut comet = Comet {
            position: Vec3::new(149.9, 0.0, 0.0),
            velocity: Vec3::new(0.5, 0.0, 0.0),
            trail: VecDeque::from(vec![Vec3::ZERO; 10]),
        };
        comet.advance(&mut rng);
        // fresh state: cleared trail, position back inside the spawn box
        assert!(comet.trail.is_empty());
        assert!(comet.position.x.abs() <= 100.0);
        assert!(comet.position.z <= -50.0);
        assert!(comet.velocity.z > 0.0);
    }

    #[test]
    fn respawns_on_y_bound() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut comet = Comet {
            position: Vec3::new(0.0, -99.9, 0.0),
            velocity: Vec3::new(0.0, -0.2, 0.0),
            trail: VecDeque::new(),
        };
        comet.advance(&mut rng);
        assert!(comet.trail.is_empty());
        assert!(comet.position.y >= -50.0 && comet.position.y < 50.0);
    }

    #[test]
    fn z_bound_is_one_sided() {
        let mut rng = StdRng::seed_from_u64(6);
        // far negative z does not trigger a respawn
        let mut comet = Comet {
            position: Vec3::new(0.0, 0.0, -140.0),
            velocity: Vec3::new(0.0, 0.0, -0.1),
            trail: VecDeque::new(),
        };
        comet.advance(&mut rng);
        assert_eq!(comet.trail.len(), 1);
        assert!(comet.position.z < -140.0);

        // crossing z = +50 does
        let mut comet = Comet {
            position: Vec3::new(0.0, 0.0, 49.9),
            velocity: Vec3::new(0.0, 0.0, 0.4),
            trail: VecDeque::new(),
        };
        comet.advance(&mut rng);
        assert!(comet.trail.is_empty());
        assert!(comet.position.z < -50.0);
    }
}
