use std::f32::consts::PI;

// Simulation rate (ticks per second, one tick per rendered frame)
pub const SIM_TICK_HZ: f64 = 60.0;

// Camera controls
pub const CAMERA_START_DISTANCE: f32 = 40.0;
pub const CAMERA_MIN_DISTANCE: f32 = 10.0;
pub const CAMERA_MAX_DISTANCE: f32 = 60.0;
pub const CAMERA_ZOOM_STEP: f32 = 2.0;
pub const CAMERA_DRAG_SENSITIVITY: f32 = 0.2; // degrees per pixel
pub const CAMERA_MAX_PITCH: f32 = 90.0; // degrees

// Sphere tessellation (longitude x latitude segments)
pub const SPHERE_LONGITUDES: u32 = 32;
pub const SPHERE_LATITUDES: u32 = 16;

// Orbit guide resolution
pub const ORBIT_GUIDE_SEGMENTS: usize = 100;

// Asteroid ring generation ranges
pub const ASTEROID_COUNT: usize = 100;
pub const ASTEROID_RADIUS_RANGE: (f32, f32) = (0.05, 0.1);
pub const ASTEROID_DISTANCE_RANGE: (f32, f32) = (10.0, 11.0);
pub const ASTEROID_SPEED_RANGE: (f32, f32) = (0.01, 0.015);
pub const ASTEROID_GRAY_RANGE: (f32, f32) = (0.4, 0.6);

// Comets
pub const COMET_COUNT: usize = 3;
pub const COMET_TRAIL_LENGTH: usize = 20;
pub const COMET_SPAWN_X: (f32, f32) = (-100.0, 100.0);
pub const COMET_SPAWN_Y: (f32, f32) = (-50.0, 50.0);
pub const COMET_SPAWN_Z: (f32, f32) = (-100.0, -50.0);
pub const COMET_SPEED_XY: (f32, f32) = (-0.2, 0.2);
pub const COMET_SPEED_Z: (f32, f32) = (0.1, 0.4);
pub const COMET_BOUND_X: f32 = 150.0;
pub const COMET_BOUND_Y: f32 = 100.0;
pub const COMET_BOUND_Z: f32 = 50.0; // far side only, comets drift toward +z
pub const COMET_HEAD_RADIUS: f32 = 0.2;

// Star backdrop
pub const STAR_COUNT: usize = 1000;
pub const SKY_RADIUS: f32 = 100.0;
pub const STAR_DRIFT_RANGE: (f32, f32) = (-0.0001, 0.0001);
pub const STAR_PHI_MAX: f32 = PI;

// Asset paths
pub const BODIES_CONFIG_PATH: &str = "assets/bodies.json";
pub const MUSIC_PATH: &str = "audio/space_rumble.mp3";
