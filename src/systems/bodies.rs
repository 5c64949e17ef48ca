//! bodies.rs
//!
//! Body registry and orbital state for the sun, planets, and moons.
//! Moons are child entities, so their orbits compose with the parent
//! planet's transform instead of orbiting the world origin.

use std::fs;

use bevy::asset::AssetLoadFailedEvent;
use bevy::prelude::*;
use serde::Deserialize;

use crate::config::{
    BODIES_CONFIG_PATH, ORBIT_GUIDE_SEGMENTS, SPHERE_LATITUDES, SPHERE_LONGITUDES,
};

pub struct BodiesPlugin;

impl Plugin for BodiesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, start)
            .add_systems(FixedUpdate, advance_orbits)
            .add_systems(Update, degrade_failed_textures);
    }
}

// planet tag (includes the central body)
#[derive(Component)]
pub struct Planet;

// moon tag
#[derive(Component)]
pub struct Moon;

/// Per-entity orbital state: fixed circular orbit parameters plus the
/// accumulated angle. Shared by planets, moons, and asteroids.
#[derive(Component, Debug, Clone)]
pub struct OrbitalBody {
    pub distance: f32,
    pub speed: f32,
    pub angle: f32,
}

impl OrbitalBody {
    pub fn new(distance: f32, speed: f32) -> Self {
        Self {
            distance,
            speed,
            angle: 0.0,
        }
    }

    // one simulation tick; the angle accumulates without wraparound,
    // cos/sin are periodic anyway
    pub fn advance(&mut self) {
        self.angle += self.speed;
    }

    // position in the parent's frame
    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.angle.cos() * self.distance,
            0.0,
            self.angle.sin() * self.distance,
        )
    }
}

// descriptor table, immutable after startup
#[derive(Debug, Clone, Deserialize)]
pub struct BodyConfig {
    pub name: String,
    pub radius: f32,
    pub distance: f32,
    pub speed: f32,
    pub color: [f32; 3],
    #[serde(default)]
    pub texture: Option<String>,
    #[serde(default)]
    pub moons: Vec<MoonConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoonConfig {
    pub radius: f32,
    pub distance: f32,
    pub speed: f32,
    pub color: [f32; 3],
}

// default registry (speeds in rad/tick)
pub fn builtin_bodies() -> Vec<BodyConfig> {
    fn body(
        name: &str,
        radius: f32,
        distance: f32,
        speed: f32,
        color: [f32; 3],
        moons: Vec<MoonConfig>,
    ) -> BodyConfig {
        BodyConfig {
            name: name.to_string(),
            radius,
            distance,
            speed,
            color,
            texture: None,
            moons,
        }
    }
    fn moon(radius: f32, distance: f32, speed: f32, color: [f32; 3]) -> MoonConfig {
        MoonConfig {
            radius,
            distance,
            speed,
            color,
        }
    }

    vec![
        body("Sun", 2.0, 0.0, 0.0, [1.0, 1.0, 0.0], vec![]),
        body("Mercury", 0.2, 4.0, 0.03, [0.5, 0.5, 0.5], vec![]),
        body("Venus", 0.3, 5.5, 0.025, [1.0, 0.8, 0.2], vec![]),
        body(
            "Earth",
            0.5,
            7.0,
            0.02,
            [0.0, 0.5, 1.0],
            vec![moon(0.1, 0.8, 0.1, [0.7, 0.7, 0.7])],
        ),
        body(
            "Mars",
            0.4,
            9.0,
            0.018,
            [1.0, 0.3, 0.0],
            vec![
                moon(0.05, 0.6, 0.12, [0.6, 0.6, 0.6]),
                moon(0.05, 0.8, 0.1, [0.6, 0.6, 0.6]),
            ],
        ),
        body(
            "Jupiter",
            1.0,
            12.0,
            0.012,
            [1.0, 0.6, 0.2],
            vec![
                moon(0.15, 1.5, 0.08, [0.8, 0.7, 0.6]),
                moon(0.12, 1.8, 0.07, [0.8, 0.7, 0.6]),
                moon(0.1, 2.0, 0.06, [0.8, 0.7, 0.6]),
                moon(0.1, 2.2, 0.05, [0.8, 0.7, 0.6]),
            ],
        ),
        body(
            "Saturn",
            0.9,
            16.0,
            0.009,
            [1.0, 1.0, 0.5],
            vec![
                moon(0.12, 1.5, 0.07, [0.7, 0.7, 0.6]),
                moon(0.1, 1.8, 0.06, [0.7, 0.7, 0.6]),
                moon(0.08, 2.0, 0.05, [0.7, 0.7, 0.6]),
            ],
        ),
        body("Uranus", 0.7, 20.0, 0.006, [0.5, 1.0, 1.0], vec![]),
        body("Neptune", 0.7, 24.0, 0.004, [0.3, 0.5, 1.0], vec![]),
    ]
}

// drop entries the renderer cannot draw sensibly
fn validate(bodies: Vec<BodyConfig>) -> Vec<BodyConfig> {
    bodies
        .into_iter()
        .filter(|b| {
            let ok = b.radius > 0.0
                && b.distance >= 0.0
                && b.moons
                    .iter()
                    .all(|m| m.radius > 0.0 && m.distance > 0.0 && m.speed > 0.0);
            if !ok {
                warn!("skipping invalid body entry '{}'", b.name);
            }
            ok
        })
        .collect()
}

// read the optional json override, fall back to the builtin table
fn load_registry() -> Vec<BodyConfig> {
    match fs::read_to_string(BODIES_CONFIG_PATH) {
        Ok(raw) => match serde_json::from_str::<Vec<BodyConfig>>(&raw) {
            Ok(bodies) => {
                info!("loaded {} bodies from {}", bodies.len(), BODIES_CONFIG_PATH);
                validate(bodies)
            }
            Err(e) => {
                warn!("could not parse {}: {}, using builtin table", BODIES_CONFIG_PATH, e);
                builtin_bodies()
            }
        },
        Err(_) => builtin_bodies(),
    }
}

// a flat circular line loop, drawn unlit
pub fn orbit_guide_mesh(distance: f32, segments: usize) -> Mesh {
    let mut positions = Vec::with_capacity(segments);
    let mut indices = Vec::with_capacity(segments * 2);

    for i in 0..segments {
        let theta = i as f32 * std::f32::consts::TAU / segments as f32;
        positions.push([distance * theta.cos(), 0.0, distance * theta.sin()]);
    }

    // connect the points, wrapping back to the start
    for i in 0..segments {
        indices.push(i as u32);
        indices.push(((i + 1) % segments) as u32);
    }

    let mut mesh = Mesh::new(
        bevy::render::render_resource::PrimitiveTopology::LineList,
        bevy::render::render_asset::RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_indices(bevy::render::mesh::Indices::U32(indices));
    mesh
}

// spawn the sun, planets, moons, and orbit guides from the registry
fn start(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
) {
    let bodies = load_registry();

    // orbit guide material, reusable
    let guide_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.3, 0.3, 0.3),
        unlit: true,
        ..default()
    });

    for body in &bodies {
        let material = materials.add(StandardMaterial {
            base_color: Color::srgb(body.color[0], body.color[1], body.color[2]),
            base_color_texture: body.texture.as_ref().map(|path| asset_server.load(path)),
            metallic: 0.0,
            perceptual_roughness: 0.5,
            ..default()
        });

        let mesh = meshes.add(
            Sphere::new(body.radius)
                .mesh()
                .uv(SPHERE_LONGITUDES, SPHERE_LATITUDES),
        );

        let is_central = body.distance == 0.0;

        let planet_entity = {
            let mut planet = commands.spawn((
                Planet,
                Mesh3d(mesh),
                MeshMaterial3d(material),
                Transform::from_xyz(body.distance, 0.0, 0.0),
            ));
            // the central body stays put, everything else carries orbital state
            if !is_central {
                planet.insert(OrbitalBody::new(body.distance, body.speed));
            }
            planet.id()
        };

        if !is_central {
            commands.spawn((
                Mesh3d(meshes.add(orbit_guide_mesh(body.distance, ORBIT_GUIDE_SEGMENTS))),
                MeshMaterial3d(guide_material.clone()),
                Transform::IDENTITY,
            ));
        }

        for moon in &body.moons {
            commands
                .spawn((
                    Moon,
                    OrbitalBody::new(moon.distance, moon.speed),
                    Mesh3d(meshes.add(
                        Sphere::new(moon.radius)
                            .mesh()
                            .uv(SPHERE_LONGITUDES, SPHERE_LATITUDES),
                    )),
                    MeshMaterial3d(materials.add(StandardMaterial {
                        base_color: Color::srgb(moon.color[0], moon.color[1], moon.color[2]),
                        metallic: 0.0,
                        perceptual_roughness: 0.5,
                        ..default()
                    })),
                    Transform::from_xyz(moon.distance, 0.0, 0.0),
                ))
                .insert(ChildOf(planet_entity));
        }
    }
}

// one tick for every orbiting entity (planets, moons, asteroids alike);
// moon translations are local, the transform hierarchy does the composition
fn advance_orbits(mut orbits: Query<(&mut OrbitalBody, &mut Transform)>) {
    for (mut body, mut transform) in orbits.iter_mut() {
        body.advance();
        transform.translation = body.position();
    }
}

// a texture that fails to load is stripped from its material so the
// body falls back to flat color
fn degrade_failed_textures(
    mut events: EventReader<AssetLoadFailedEvent<Image>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for event in events.read() {
        for (_, material) in materials.iter_mut() {
            if material.base_color_texture.as_ref().map(|h| h.id()) == Some(event.id) {
                material.base_color_texture = None;
                warn!("could not load texture {}, using flat color", event.path);
            }
        }
    }
}
