//! asteroids.rs
//!
//! One-shot procedural generation of the asteroid ring. Each asteroid is
//! an independent orbiting particle reusing the shared `OrbitalBody`
//! state, so the per-tick advance system picks them up for free.

use bevy::prelude::*;
use rand::Rng;

use crate::config::{
    ASTEROID_COUNT, ASTEROID_DISTANCE_RANGE, ASTEROID_GRAY_RANGE, ASTEROID_RADIUS_RANGE,
    ASTEROID_SPEED_RANGE, SPHERE_LATITUDES, SPHERE_LONGITUDES,
};
use crate::systems::bodies::OrbitalBody;

pub struct AsteroidsPlugin;

impl Plugin for AsteroidsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, start);
    }
}

#[derive(Component)]
pub struct Asteroid;

// generated parameters for a single ring particle
#[derive(Debug, Clone)]
pub struct AsteroidParams {
    pub radius: f32,
    pub distance: f32,
    pub speed: f32,
    pub color: [f32; 3],
    pub angle: f32,
}

impl AsteroidParams {
    pub fn generate(rng: &mut impl Rng) -> Self {
        Self {
            radius: rng.random_range(ASTEROID_RADIUS_RANGE.0..ASTEROID_RADIUS_RANGE.1),
            distance: rng.random_range(ASTEROID_DISTANCE_RANGE.0..ASTEROID_DISTANCE_RANGE.1),
            speed: rng.random_range(ASTEROID_SPEED_RANGE.0..ASTEROID_SPEED_RANGE.1),
            color: [
                rng.random_range(ASTEROID_GRAY_RANGE.0..ASTEROID_GRAY_RANGE.1),
                rng.random_range(ASTEROID_GRAY_RANGE.0..ASTEROID_GRAY_RANGE.1),
                rng.random_range(ASTEROID_GRAY_RANGE.0..ASTEROID_GRAY_RANGE.1),
            ],
            angle: rng.random_range(0.0..std::f32::consts::TAU),
        }
    }
}

fn start(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut rng = rand::rng();

    // unit sphere shared by the whole ring, scaled per asteroid
    let mesh = meshes.add(
        Sphere::new(1.0)
            .mesh()
            .uv(SPHERE_LONGITUDES, SPHERE_LATITUDES),
    );

    for _ in 0..ASTEROID_COUNT {
        let params = AsteroidParams::generate(&mut rng);
        let body = OrbitalBody {
            distance: params.distance,
            speed: params.speed,
            angle: params.angle,
        };

        commands.spawn((
            Asteroid,
            Mesh3d(mesh.clone()),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(params.color[0], params.color[1], params.color[2]),
                metallic: 0.0,
                perceptual_roughness: 0.5,
                ..default()
            })),
            Transform::from_translation(body.position()).with_scale(Vec3::splat(params.radius)),
            body,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generated_parameters_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let params = AsteroidParams::generate(&mut rng);
            assert!(params.radius >= 0.05 && params.radius < 0.1);
            assert!(params.distance >= 10.0 && params.distance < 11.0);
            assert!(params.speed >= 0.01 && params.speed < 0.015);
            assert!(params.angle >= 0.0 && params.angle < std::f32::consts::TAU);
            for channel in params.color {
                assert!(channel >= 0.4 && channel < 0.6);
            }
        }
    }

    #[test]
    fn asteroids_orbit_like_bodies() {
        let mut rng = StdRng::seed_from_u64(7);
        let params = AsteroidParams::generate(&mut rng);
        let mut body = OrbitalBody {
            distance: params.distance,
            speed: params.speed,
            angle: params.angle,
        };
        let start_angle = body.angle;
        for _ in 0..60 {
            body.advance();
        }
        assert!((body.angle - (start_angle + 60.0 * params.speed)).abs() < 1e-4);
        assert!((body.position().length() - params.distance).abs() < 1e-4);
    }
}
