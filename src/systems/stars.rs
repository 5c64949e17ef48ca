//! stars.rs
//!
//! Twinkling star backdrop: a thousand points on a fixed-radius sky
//! sphere, each with its own tiny angular drift. The whole field is a
//! single point-list mesh whose positions are rewritten every tick.

use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::Rng;

use crate::config::{SKY_RADIUS, STAR_COUNT, STAR_DRIFT_RANGE, STAR_PHI_MAX};

pub struct StarsPlugin;

impl Plugin for StarsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, start)
            .add_systems(FixedUpdate, drift_stars);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Star {
    pub theta: f32,
    pub phi: f32,
    pub dtheta: f32,
    pub dphi: f32,
}

impl Star {
    pub fn generate(rng: &mut impl Rng) -> Self {
        Self {
            theta: rng.random_range(0.0..TAU),
            phi: rng.random_range(0.0..STAR_PHI_MAX),
            dtheta: rng.random_range(STAR_DRIFT_RANGE.0..STAR_DRIFT_RANGE.1),
            dphi: rng.random_range(STAR_DRIFT_RANGE.0..STAR_DRIFT_RANGE.1),
        }
    }

    // theta wraps, phi pins at the poles
    pub fn drift(&mut self) {
        self.theta = (self.theta + self.dtheta).rem_euclid(TAU);
        self.phi = (self.phi + self.dphi).clamp(0.0, STAR_PHI_MAX);
    }

    pub fn position(&self) -> [f32; 3] {
        [
            SKY_RADIUS * self.phi.sin() * self.theta.cos(),
            SKY_RADIUS * self.phi.sin() * self.theta.sin(),
            SKY_RADIUS * self.phi.cos(),
        ]
    }
}

#[derive(Resource)]
pub struct StarField {
    pub stars: Vec<Star>,
    mesh: Handle<Mesh>,
}

fn star_mesh(stars: &[Star]) -> Mesh {
    let positions: Vec<[f32; 3]> = stars.iter().map(Star::position).collect();
    let mut mesh = Mesh::new(
        bevy::render::render_resource::PrimitiveTopology::PointList,
        bevy::render::render_asset::RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh
}

fn start(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut rng = rand::rng();
    let stars: Vec<Star> = (0..STAR_COUNT).map(|_| Star::generate(&mut rng)).collect();

    let mesh = meshes.add(star_mesh(&stars));

    commands.spawn((
        Mesh3d(mesh.clone()),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            ..default()
        })),
        Transform::IDENTITY,
    ));

    commands.insert_resource(StarField { stars, mesh });
}

fn drift_stars(mut field: ResMut<StarField>, mut meshes: ResMut<Assets<Mesh>>) {
    for star in field.stars.iter_mut() {
        star.drift();
    }
    if let Some(mesh) = meshes.get_mut(&field.mesh) {
        let positions: Vec<[f32; 3]> = field.stars.iter().map(Star::position).collect();
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generated_angles_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            let star = Star::generate(&mut rng);
            assert!(star.theta >= 0.0 && star.theta < TAU);
            assert!(star.phi >= 0.0 && star.phi <= STAR_PHI_MAX);
            assert!(star.dtheta.abs() <= 0.0001);
            assert!(star.dphi.abs() <= 0.0001);
        }
    }

    #[test]
    fn theta_wraps_into_zero_to_two_pi() {
        let mut star = Star {
            theta: TAU - 0.00005,
            phi: 1.0,
            dtheta: 0.0001,
            dphi: 0.0,
        };
        star.drift();
        assert!(star.theta >= 0.0 && star.theta < TAU);
        assert!(star.theta < 0.0001);
    }

    #[test]
    fn phi_pins_at_the_poles() {
        let mut star = Star {
            theta: 0.0,
            phi: 0.00002,
            dtheta: 0.0,
            dphi: -0.0001,
        };
        for _ in 0..100 {
            star.drift();
            assert!(star.phi >= 0.0);
        }
        assert_eq!(star.phi, 0.0);

        star.phi = STAR_PHI_MAX - 0.00002;
        star.dphi = 0.0001;
        for _ in 0..100 {
            star.drift();
            assert!(star.phi <= STAR_PHI_MAX);
        }
        assert_eq!(star.phi, STAR_PHI_MAX);
    }

    #[test]
    fn angles_stay_valid_over_long_runs() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut stars: Vec<Star> = (0..50).map(|_| Star::generate(&mut rng)).collect();
        for _ in 0..100_000 {
            for star in stars.iter_mut() {
                star.drift();
            }
        }
        for star in &stars {
            assert!(star.theta >= 0.0 && star.theta < TAU);
            assert!(star.phi >= 0.0 && star.phi <= STAR_PHI_MAX);
        }
    }

    #[test]
    fn positions_sit_on_the_sky_sphere() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..100 {
            let star = Star::generate(&mut rng);
            let [x, y, z] = star.position();
            let r = (x * x + y * y + z * z).sqrt();
            assert!((r - SKY_RADIUS).abs() < 1e-3);
        }
    }
}
