use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{
    backend::Light,
    camera::Camera,
    input::Viewport,
    ornament::{generate_ornaments, Ornament, DEFAULT_ORNAMENT_COUNT},
    surface::{GradientSurface, SurfaceConfig, DEFAULT_SEGMENTS},
};

/// Largest count the HTTP and CLI entry points accept.
pub const MAX_ORNAMENT_COUNT: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneOptions {
    pub ornament_count: usize,
    pub surface_segments: u32,
    /// Fixed seed for reproducible scenes, thread RNG otherwise.
    pub seed: Option<u64>,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            ornament_count: DEFAULT_ORNAMENT_COUNT,
            surface_segments: DEFAULT_SEGMENTS,
            seed: None,
        }
    }
}

/// Everything the frame loop mutates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneState {
    pub ornaments: Vec<Ornament>,
    pub surface: GradientSurface,
    pub camera: Camera,
    pub lights: Vec<Light>,
}

pub fn hero_lights() -> Vec<Light> {
    vec![
        Light::Ambient {
            color: 0xffffff,
            intensity: 1.2,
        },
        Light::Directional {
            color: 0xffffff,
            intensity: 2.0,
            position: Vec3::new(5.0, 8.0, 5.0),
        },
        Light::Hemisphere {
            sky_color: 0xffffff,
            ground_color: 0x444444,
            intensity: 1.0,
        },
    ]
}

pub fn generate_scene<R: Rng + ?Sized>(
    rng: &mut R,
    options: &SceneOptions,
    viewport: Viewport,
) -> SceneState {
    SceneState {
        ornaments: generate_ornaments(rng, options.ornament_count),
        surface: GradientSurface::new(SurfaceConfig::with_segments(options.surface_segments)),
        camera: Camera::new(viewport),
        lights: hero_lights(),
    }
}
