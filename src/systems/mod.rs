pub mod asteroids;
pub mod audio;
pub mod bodies;
pub mod camera;
pub mod comets;
pub mod stars;
pub mod ui;
