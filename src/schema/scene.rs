use poem_openapi::{payload::Json, ApiResponse, Object};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::common::BadRequestResponse;
use crate::scene::{
    backend::Light,
    camera::Camera,
    generator::SceneState,
    ornament::Ornament,
    palette::to_hex,
    surface::{GradientSurface, FRAGMENT_SHADER, VERTEX_SHADER},
};

#[derive(Object, Deserialize, Serialize, Clone, Copy, Debug, PartialEq)]
#[oai(rename = "Vector3")]
pub struct Vector3Payload {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<Vec3> for Vector3Payload {
    fn from(x: Vec3) -> Self {
        Self {
            x: x.x,
            y: x.y,
            z: x.z,
        }
    }
}

#[derive(Object, Deserialize, Serialize, Clone, Debug)]
pub struct CameraPayload {
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vector3Payload,
    pub look_at: Vector3Payload,
}

impl From<&Camera> for CameraPayload {
    fn from(x: &Camera) -> Self {
        Self {
            fov: x.fov,
            aspect: x.aspect,
            near: x.near,
            far: x.far,
            position: x.position.into(),
            look_at: x.look_at.into(),
        }
    }
}

#[derive(Object, Deserialize, Serialize, Clone, Debug)]
pub struct LightPayload {
    pub kind: String,
    pub color: String,
    pub intensity: f32,
    pub position: Option<Vector3Payload>,
    pub ground_color: Option<String>,
}

impl From<&Light> for LightPayload {
    fn from(x: &Light) -> Self {
        match x {
            Light::Ambient { color, intensity } => Self {
                kind: "ambient".to_string(),
                color: to_hex(*color),
                intensity: *intensity,
                position: None,
                ground_color: None,
            },
            Light::Directional {
                color,
                intensity,
                position,
            } => Self {
                kind: "directional".to_string(),
                color: to_hex(*color),
                intensity: *intensity,
                position: Some((*position).into()),
                ground_color: None,
            },
            Light::Hemisphere {
                sky_color,
                ground_color,
                intensity,
            } => Self {
                kind: "hemisphere".to_string(),
                color: to_hex(*sky_color),
                intensity: *intensity,
                position: None,
                ground_color: Some(to_hex(*ground_color)),
            },
        }
    }
}

#[derive(Object, Deserialize, Serialize, Clone, Debug)]
pub struct OrnamentPayload {
    pub shape: String,
    pub color: String,
    pub emissive: String,
    pub emissive_intensity: f32,
    pub metalness: f32,
    pub roughness: f32,
    pub transmission: f32,
    pub thickness: f32,
    pub opacity: f32,
    pub scale: f32,
    pub position: Vector3Payload,
    pub rotation_speed: Vector3Payload,
    pub float_speed: f32,
}

impl From<&Ornament> for OrnamentPayload {
    fn from(x: &Ornament) -> Self {
        Self {
            shape: x.shape.as_str().to_string(),
            color: to_hex(x.material.color),
            emissive: to_hex(x.material.emissive),
            emissive_intensity: x.material.emissive_intensity,
            metalness: x.material.metalness,
            roughness: x.material.roughness,
            transmission: x.material.transmission,
            thickness: x.material.thickness,
            opacity: x.material.opacity,
            scale: x.scale,
            position: x.initial_position.into(),
            rotation_speed: x.rotation_speed.into(),
            float_speed: x.float_speed,
        }
    }
}

#[derive(Object, Deserialize, Serialize, Clone, Debug)]
pub struct SurfacePayload {
    pub width: f32,
    pub height: f32,
    pub segments: u32,
    pub rotation_x: f32,
    pub position: Vector3Payload,
    pub color_a: String,
    pub color_b: String,
    pub color_c: String,
    pub vertex_shader: String,
    pub fragment_shader: String,
}

impl From<&GradientSurface> for SurfacePayload {
    fn from(x: &GradientSurface) -> Self {
        let config = &x.config;
        Self {
            width: config.width,
            height: config.height,
            segments: config.segments,
            rotation_x: config.rotation_x,
            position: config.position.into(),
            color_a: to_hex(config.color_a),
            color_b: to_hex(config.color_b),
            color_c: to_hex(config.color_c),
            vertex_shader: VERTEX_SHADER.to_string(),
            fragment_shader: FRAGMENT_SHADER.to_string(),
        }
    }
}

/// Everything a client renderer needs to build the hero scene.
#[derive(Object, Deserialize, Serialize, Clone, Debug)]
pub struct SceneDescriptor {
    pub seed: Option<u64>,
    pub camera: CameraPayload,
    pub lights: Vec<LightPayload>,
    pub ornaments: Vec<OrnamentPayload>,
    pub surface: SurfacePayload,
}

impl SceneDescriptor {
    pub fn new(state: &SceneState, seed: Option<u64>) -> Self {
        Self {
            seed,
            camera: (&state.camera).into(),
            lights: state.lights.iter().map(Into::into).collect(),
            ornaments: state.ornaments.iter().map(Into::into).collect(),
            surface: (&state.surface).into(),
        }
    }
}

#[derive(ApiResponse)]
pub enum SceneResponses {
    #[oai(status = 200)]
    Ok(Json<SceneDescriptor>),

    #[oai(status = 400)]
    BadRequest(Json<BadRequestResponse>),
}
