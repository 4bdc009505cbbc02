use std::f32::consts::PI;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::{
    math::smoothstep,
    noise::simplex3,
    palette::{mix_rgb, to_rgb, SURFACE_COLOR_A, SURFACE_COLOR_B, SURFACE_COLOR_C},
};

pub const VERTEX_SHADER: &str = include_str!("shaders/gradient_surface.vert");
pub const FRAGMENT_SHADER: &str = include_str!("shaders/gradient_surface.frag");

pub const DEFAULT_SEGMENTS: u32 = 128;
pub const MAX_SEGMENTS: u32 = 512;

const NOISE_FREQUENCY: f32 = 0.4;
const NOISE_AMPLITUDE: f32 = 1.8;
const DETAIL_FREQUENCY: f32 = 1.2;
const DETAIL_AMPLITUDE: f32 = 0.5;
const POINTER_SPAN: f32 = 12.0;
const DIMPLE_RADIUS: f32 = 6.0;
const DIMPLE_DEPTH: f32 = 2.0;
pub const DISPLACEMENT_SCALE: f32 = 0.8;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    pub width: f32,
    pub height: f32,
    pub segments: u32,
    pub rotation_x: f32,
    pub position: Vec3,
    pub color_a: u32,
    pub color_b: u32,
    pub color_c: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 30.0,
            height: 30.0,
            segments: DEFAULT_SEGMENTS,
            rotation_x: -PI / 2.3,
            position: Vec3::new(0.0, -3.0, -7.0),
            color_a: SURFACE_COLOR_A,
            color_b: SURFACE_COLOR_B,
            color_c: SURFACE_COLOR_C,
        }
    }
}

impl SurfaceConfig {
    pub fn with_segments(segments: u32) -> Self {
        Self {
            segments: segments.clamp(1, MAX_SEGMENTS),
            ..Self::default()
        }
    }

    pub fn vertex_count(&self) -> usize {
        let side = self.segments as usize + 1;
        side * side
    }
}

/// Values the shader reads every frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SurfaceUniforms {
    pub time: f32,
    pub mouse: Vec2,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientSurface {
    pub config: SurfaceConfig,
    pub uniforms: SurfaceUniforms,
}

impl GradientSurface {
    pub fn new(config: SurfaceConfig) -> Self {
        Self {
            config,
            uniforms: SurfaceUniforms::default(),
        }
    }
}

/// Elevation of the plane at local `(x, y)`, same formula as the vertex shader.
pub fn displacement(x: f32, y: f32, time: f32, pointer: Vec2) -> f32 {
    let influence = smoothstep(1.0, 0.0, pointer.length()) * 1.5;
    let mut elevation = simplex3(Vec3::new(
        x * NOISE_FREQUENCY,
        y * NOISE_FREQUENCY,
        time * 0.1,
    )) * NOISE_AMPLITUDE;
    elevation += simplex3(Vec3::new(
        x * DETAIL_FREQUENCY,
        y * DETAIL_FREQUENCY,
        time * 0.3,
    )) * DETAIL_AMPLITUDE;
    let dist = Vec2::new(x, y).distance(pointer * POINTER_SPAN);
    elevation - smoothstep(DIMPLE_RADIUS, 0.0, dist) * influence * DIMPLE_DEPTH
}

/// Fragment color for texture coordinate `uv`, mirrors the fragment shader.
/// `facing` is the view-space normal z, 1 when the plane faces the camera.
pub fn shade(config: &SurfaceConfig, uv: Vec2, elevation: f32, time: f32, facing: f32) -> [f32; 3] {
    let elevation_mix = smoothstep(-0.8, 0.8, elevation) * 0.5 + 0.5;
    let sweep_mix = smoothstep(0.0, 1.0, uv.x + (uv.y * 5.0 + time * 0.2).sin() * 0.1);
    let color = mix_rgb(to_rgb(config.color_a), to_rgb(config.color_b), elevation_mix);
    let color = mix_rgb(color, to_rgb(config.color_c), sweep_mix);
    let fresnel = (1.0 - facing.abs()).powi(2) * 0.1;
    [color[0] + fresnel, color[1] + fresnel, color[2] + fresnel]
}

/// Minimum and maximum elevation over the plane's vertex grid.
pub fn elevation_range(config: &SurfaceConfig, time: f32, pointer: Vec2) -> (f32, f32) {
    let segments = config.segments.max(1);
    let mut min = f32::MAX;
    let mut max = f32::MIN;
    for iy in 0..=segments {
        for ix in 0..=segments {
            let x = (ix as f32 / segments as f32 - 0.5) * config.width;
            let y = (0.5 - iy as f32 / segments as f32) * config.height;
            let elevation = displacement(x, y, time, pointer);
            min = min.min(elevation);
            max = max.max(elevation);
        }
    }
    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_displacement_is_pure() {
        let pointer = Vec2::new(0.2, -0.4);
        assert_eq!(
            displacement(1.5, -3.0, 12.25, pointer),
            displacement(1.5, -3.0, 12.25, pointer)
        );
    }

    #[test]
    fn test_pointer_dimple_depresses_surface() {
        // pointer at the centre pulls the vertex under it down by the full depth
        let with_pointer = displacement(0.0, 0.0, 1.0, Vec2::ZERO);
        let far_pointer = displacement(0.0, 0.0, 1.0, Vec2::new(1.0, 1.0));
        assert!((far_pointer - with_pointer - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_elevation_range_covers_every_vertex() {
        let config = SurfaceConfig::with_segments(8);
        let pointer = Vec2::new(0.1, 0.2);
        let (min, max) = elevation_range(&config, 3.0, pointer);
        assert!(min < max);
        // corner and centre vertices sit inside the range
        for (x, y) in [(-15.0, 15.0), (15.0, -15.0), (0.0, 0.0)] {
            let elevation = displacement(x, y, 3.0, pointer);
            assert!(elevation >= min && elevation <= max);
        }
    }

    #[test]
    fn test_segments_are_clamped() {
        assert_eq!(SurfaceConfig::with_segments(0).segments, 1);
        assert_eq!(SurfaceConfig::with_segments(10_000).segments, MAX_SEGMENTS);
        assert_eq!(SurfaceConfig::with_segments(64).vertex_count(), 65 * 65);
    }

    #[test]
    fn test_shade_blends_palette() {
        let config = SurfaceConfig::default();
        let left = shade(&config, Vec2::new(0.0, 0.0), -5.0, 0.0, 1.0);
        let right = shade(&config, Vec2::new(1.0, 0.0), -5.0, 0.0, 1.0);
        // deep trough on the left edge is half colorA, half colorB
        let a = to_rgb(config.color_a);
        let b = to_rgb(config.color_b);
        for k in 0..3 {
            assert!((left[k] - (a[k] + b[k]) / 2.0).abs() < 1e-5);
        }
        let c = to_rgb(config.color_c);
        for k in 0..3 {
            assert!((right[k] - c[k]).abs() < 1e-5);
        }
        let grazing = shade(&config, Vec2::new(1.0, 0.0), -5.0, 0.0, 0.0);
        assert!((grazing[0] - right[0] - 0.1).abs() < 1e-5);
    }

    #[test]
    fn test_shader_sources_declare_uniforms() {
        for name in ["uniform float time", "uniform vec2 mouse", "snoise"] {
            assert!(VERTEX_SHADER.contains(name));
        }
        for name in ["colorA", "colorB", "colorC", "fresnel"] {
            assert!(FRAGMENT_SHADER.contains(name));
        }
    }
}
