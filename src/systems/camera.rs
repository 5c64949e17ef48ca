use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use crate::config::{
    CAMERA_DRAG_SENSITIVITY, CAMERA_MAX_DISTANCE, CAMERA_MAX_PITCH, CAMERA_MIN_DISTANCE,
    CAMERA_START_DISTANCE, CAMERA_ZOOM_STEP,
};

pub struct OrbitCamPlugin;

impl Plugin for OrbitCamPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, update);
    }
}

// camera component
// angles in degrees, pitch clamped, yaw free-running
#[derive(Component, Debug)]
pub struct OrbitCamera {
    pub rot_x: f32,
    pub rot_y: f32,
    pub distance: f32,
    pub is_dragging: bool,
    // false until the first motion sample after a press; that sample
    // only establishes the drag reference point
    pub has_drag_reference: bool,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            rot_x: 0.0,
            rot_y: 0.0,
            distance: CAMERA_START_DISTANCE,
            is_dragging: false,
            has_drag_reference: false,
        }
    }
}

impl OrbitCamera {
    pub fn new(distance: f32) -> Self {
        Self {
            distance,
            ..default()
        }
    }

    // apply one pointer drag delta (pixels)
    pub fn drag(&mut self, delta: Vec2) {
        self.rot_y += delta.x * CAMERA_DRAG_SENSITIVITY;
        self.rot_x = (self.rot_x + delta.y * CAMERA_DRAG_SENSITIVITY)
            .clamp(-CAMERA_MAX_PITCH, CAMERA_MAX_PITCH);
    }

    // apply scroll notches, positive = zoom in
    pub fn zoom(&mut self, notches: f32) {
        self.distance = (self.distance - notches * CAMERA_ZOOM_STEP)
            .clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }

    // world transform equivalent to the view stack: pull back by distance,
    // rotate by rot_x about X, then rot_y about Y
    pub fn view_transform(&self) -> Transform {
        let rotation = Quat::from_rotation_y(-self.rot_y.to_radians())
            * Quat::from_rotation_x(-self.rot_x.to_radians());
        Transform {
            translation: rotation * Vec3::new(0.0, 0.0, self.distance),
            rotation,
            ..default()
        }
    }
}

fn update(
    mut camera_query: Query<(&mut Transform, &mut OrbitCamera)>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<CursorMoved>,
    mut scroll_events: EventReader<MouseWheel>,
) {
    for (mut transform, mut camera) in camera_query.iter_mut() {
        // handle mouse drag
        if mouse_buttons.just_pressed(MouseButton::Left) {
            camera.is_dragging = true;
            camera.has_drag_reference = false;
            // motion queued before the press belongs to no drag
            mouse_motion.clear();
        }
        if mouse_buttons.just_released(MouseButton::Left) {
            camera.is_dragging = false;
        }

        // update camera angles; the first sample after a press carries a
        // delta spanning back to the pre-press cursor position, so it only
        // anchors the drag and is never applied
        if camera.is_dragging {
            for motion in mouse_motion.read() {
                if !camera.has_drag_reference {
                    camera.has_drag_reference = true;
                    continue;
                }
                if let Some(delta) = motion.delta {
                    camera.drag(delta);
                }
            }
        } else {
            mouse_motion.clear();
        }

        // handle mouse scroll
        for scroll in scroll_events.read() {
            let notches = match scroll.unit {
                MouseScrollUnit::Line => scroll.y,
                // trackpads report pixels; treat each event as one notch
                MouseScrollUnit::Pixel => scroll.y.signum(),
            };
            if scroll.y != 0.0 {
                camera.zoom(notches);
            }
        }

        *transform = camera.view_transform();
    }
}
