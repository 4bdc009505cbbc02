//! One frame of hero motion: ornaments bob, sway and lean toward the
//! pointer, the surface shader gets time and a lagged pointer, the camera
//! drifts for parallax. Nothing here allocates.

use glam::Vec2;

use super::{
    camera::Camera,
    generator::SceneState,
    ornament::Ornament,
    surface::GradientSurface,
};

pub const BOB_AMPLITUDE: f32 = 0.3;
pub const BOB_FREQUENCY: f32 = 0.3;
pub const SWAY_AMPLITUDE: f32 = 0.2;
pub const SWAY_FREQUENCY: f32 = 0.21;
pub const ATTRACTION_STRENGTH: f32 = 0.3;
pub const ATTRACTION_FOLLOW: f32 = 0.03;
pub const SURFACE_POINTER_FOLLOW: f32 = 0.05;

/// Vertical offset from the rest position.
pub fn bob_offset(time: f32, initial_x: f32) -> f32 {
    (time * BOB_FREQUENCY + initial_x).sin() * BOB_AMPLITUDE
}

/// Horizontal offset from the rest position.
pub fn sway_offset(time: f32, initial_x: f32) -> f32 {
    (time * SWAY_FREQUENCY + initial_x).cos() * SWAY_AMPLITUDE
}

/// Offset the pointer pulls an ornament toward. Pointer y is up-positive
/// and the pull mirrors it, as the camera parallax does.
pub fn attraction_target(pointer: Vec2) -> Vec2 {
    Vec2::new(pointer.x, -pointer.y) * ATTRACTION_STRENGTH
}

/// Recomputes the position from rest each frame: bob and sway first, then
/// a 3% blend toward the pointer target.
pub fn step_ornament(ornament: &mut Ornament, time: f32, pointer: Vec2) {
    ornament.rotation += ornament.rotation_speed;

    let rest = ornament.initial_position;
    let floating = Vec2::new(
        rest.x + sway_offset(time, rest.x),
        rest.y + bob_offset(time, rest.x),
    );
    let target = rest.truncate() + attraction_target(pointer);
    ornament.position = floating.lerp(target, ATTRACTION_FOLLOW).extend(rest.z);
}

pub fn step_surface(surface: &mut GradientSurface, time: f32, pointer: Vec2) {
    surface.uniforms.time = time;
    surface.uniforms.mouse = surface.uniforms.mouse.lerp(pointer, SURFACE_POINTER_FOLLOW);
}

pub fn step_camera(camera: &mut Camera, pointer: Vec2) {
    camera.follow_pointer(pointer);
}

/// Advance the whole scene to `time` seconds with the current pointer.
pub fn advance_frame(state: &mut SceneState, time: f32, pointer: Vec2) {
    for ornament in state.ornaments.iter_mut() {
        step_ornament(ornament, time, pointer);
    }
    step_surface(&mut state.surface, time, pointer);
    step_camera(&mut state.camera, pointer);
}
