use std::{f32::consts::TAU, ops::RangeInclusive};

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::palette::BRAND_COLORS;

pub const DEFAULT_ORNAMENT_COUNT: usize = 25;
pub const SCALE_RANGE: RangeInclusive<f32> = 0.3..=0.8;
pub const SHELL_RADIUS_RANGE: RangeInclusive<f32> = 4.0..=9.0;
pub const MAX_ROTATION_SPEED: f32 = 0.004;
pub const FLOAT_SPEED_RANGE: RangeInclusive<f32> = 0.001..=0.003;
pub const ROUGHNESS_RANGE: RangeInclusive<f32> = 0.1..=0.4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrnamentShape {
    Tetrahedron,
    Octahedron,
    Icosahedron,
    Box,
    TorusKnot,
}

impl OrnamentShape {
    pub const ALL: [OrnamentShape; 5] = [
        OrnamentShape::Tetrahedron,
        OrnamentShape::Octahedron,
        OrnamentShape::Icosahedron,
        OrnamentShape::Box,
        OrnamentShape::TorusKnot,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrnamentShape::Tetrahedron => "tetrahedron",
            OrnamentShape::Octahedron => "octahedron",
            OrnamentShape::Icosahedron => "icosahedron",
            OrnamentShape::Box => "box",
            OrnamentShape::TorusKnot => "torus-knot",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            OrnamentShape::Tetrahedron => 0,
            OrnamentShape::Octahedron => 1,
            OrnamentShape::Icosahedron => 2,
            OrnamentShape::Box => 3,
            OrnamentShape::TorusKnot => 4,
        }
    }
}

/// Glassy physical material, only the colors and roughness vary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrnamentMaterial {
    pub color: u32,
    pub emissive: u32,
    pub emissive_intensity: f32,
    pub metalness: f32,
    pub roughness: f32,
    pub transmission: f32,
    pub thickness: f32,
    pub opacity: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ornament {
    pub shape: OrnamentShape,
    pub material: OrnamentMaterial,
    pub scale: f32,
    pub initial_position: Vec3,
    pub position: Vec3,
    pub rotation: Vec3,
    pub rotation_speed: Vec3,
    pub float_speed: f32,
}

/// Point on a sphere of `radius`, uniform over the surface when `theta` is
/// uniform in `[0, 2π)` and `cos_phi` uniform in `[-1, 1]`.
pub fn shell_position(radius: f32, theta: f32, cos_phi: f32) -> Vec3 {
    let phi = cos_phi.clamp(-1.0, 1.0).acos();
    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}

fn pick_color<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    BRAND_COLORS[rng.random_range(0..BRAND_COLORS.len())]
}

pub fn generate_ornament<R: Rng + ?Sized>(rng: &mut R) -> Ornament {
    let shape = OrnamentShape::ALL[rng.random_range(0..OrnamentShape::ALL.len())];
    let material = OrnamentMaterial {
        color: pick_color(rng),
        emissive: pick_color(rng),
        emissive_intensity: 0.15,
        metalness: 0.3,
        roughness: rng.random_range(ROUGHNESS_RANGE),
        transmission: 0.8,
        thickness: 0.8,
        opacity: 0.9,
    };
    let scale = rng.random_range(SCALE_RANGE);
    let radius = rng.random_range(SHELL_RADIUS_RANGE);
    let theta = rng.random_range(0.0..TAU);
    let cos_phi = rng.random_range(-1.0f32..=1.0);
    let position = shell_position(radius, theta, cos_phi);
    let rotation_speed = Vec3::new(
        rng.random_range(-MAX_ROTATION_SPEED..=MAX_ROTATION_SPEED),
        rng.random_range(-MAX_ROTATION_SPEED..=MAX_ROTATION_SPEED),
        rng.random_range(-MAX_ROTATION_SPEED..=MAX_ROTATION_SPEED),
    );
    Ornament {
        shape,
        material,
        scale,
        initial_position: position,
        position,
        rotation: Vec3::ZERO,
        rotation_speed,
        float_speed: rng.random_range(FLOAT_SPEED_RANGE),
    }
}

pub fn generate_ornaments<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Ornament> {
    (0..count).map(|_| generate_ornament(rng)).collect()
}
