//! Seam between the scene and whatever draws it.
//!
//! The scene never talks to a graphics API directly. A `RenderBackend`
//! owns the renderer, geometry and material handles and the platform frame
//! scheduler; `HeadlessBackend` keeps all of that in memory.

use std::collections::HashSet;

use anyhow::bail;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::{
    camera::Camera,
    input::Viewport,
    ornament::{OrnamentMaterial, OrnamentShape},
    surface::{SurfaceConfig, SurfaceUniforms},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeometryId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialId(pub u64);

/// Platform frame callback registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameHandle(pub u64);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum GeometrySpec {
    Tetrahedron {
        radius: f32,
    },
    Octahedron {
        radius: f32,
    },
    Icosahedron {
        radius: f32,
    },
    Box {
        size: f32,
    },
    TorusKnot {
        radius: f32,
        tube: f32,
        tubular_segments: u32,
        radial_segments: u32,
    },
    Plane {
        width: f32,
        height: f32,
        segments: u32,
    },
}

impl GeometrySpec {
    /// The one shared geometry every ornament of `shape` points at.
    pub fn for_shape(shape: OrnamentShape) -> Self {
        match shape {
            OrnamentShape::Tetrahedron => GeometrySpec::Tetrahedron { radius: 0.8 },
            OrnamentShape::Octahedron => GeometrySpec::Octahedron { radius: 0.8 },
            OrnamentShape::Icosahedron => GeometrySpec::Icosahedron { radius: 0.8 },
            OrnamentShape::Box => GeometrySpec::Box { size: 0.8 },
            OrnamentShape::TorusKnot => GeometrySpec::TorusKnot {
                radius: 0.6,
                tube: 0.15,
                tubular_segments: 100,
                radial_segments: 16,
            },
        }
    }

    pub fn for_surface(config: &SurfaceConfig) -> Self {
        GeometrySpec::Plane {
            width: config.width,
            height: config.height,
            segments: config.segments,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum MaterialSpec {
    Physical(OrnamentMaterial),
    Shader {
        vertex_shader: String,
        fragment_shader: String,
        color_a: u32,
        color_b: u32,
        color_c: u32,
        transparent: bool,
        double_sided: bool,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Light {
    Ambient {
        color: u32,
        intensity: f32,
    },
    Directional {
        color: u32,
        intensity: f32,
        position: Vec3,
    },
    Hemisphere {
        sky_color: u32,
        ground_color: u32,
        intensity: f32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RendererOptions {
    pub antialias: bool,
    pub alpha: bool,
    pub viewport: Viewport,
}

/// What one mesh looks like this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshBinding {
    pub geometry: GeometryId,
    pub material: MaterialId,
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct RenderFrame<'a> {
    pub camera: &'a Camera,
    pub lights: &'a [Light],
    pub meshes: &'a [MeshBinding],
    pub surface: MeshBinding,
    pub surface_uniforms: SurfaceUniforms,
}

pub trait RenderBackend {
    /// Whether a rendering context can be created at all. Checked before
    /// anything is allocated.
    fn is_available(&self) -> bool;

    /// Create the renderer and attach its output surface to the page.
    fn create_renderer(&mut self, options: &RendererOptions) -> anyhow::Result<()>;
    fn resize(&mut self, viewport: Viewport);
    /// Remove the output surface from the page, the renderer stays alive.
    fn detach_surface(&mut self);
    fn destroy_renderer(&mut self);

    fn create_geometry(&mut self, spec: &GeometrySpec) -> anyhow::Result<GeometryId>;
    fn dispose_geometry(&mut self, id: GeometryId);
    fn create_material(&mut self, spec: &MaterialSpec) -> anyhow::Result<MaterialId>;
    fn dispose_material(&mut self, id: MaterialId);

    /// Ask the platform to call back on its next frame.
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);

    fn render(&mut self, frame: &RenderFrame<'_>) -> anyhow::Result<()>;
}

impl<B: RenderBackend + ?Sized> RenderBackend for &mut B {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn create_renderer(&mut self, options: &RendererOptions) -> anyhow::Result<()> {
        (**self).create_renderer(options)
    }

    fn resize(&mut self, viewport: Viewport) {
        (**self).resize(viewport)
    }

    fn detach_surface(&mut self) {
        (**self).detach_surface()
    }

    fn destroy_renderer(&mut self) {
        (**self).destroy_renderer()
    }

    fn create_geometry(&mut self, spec: &GeometrySpec) -> anyhow::Result<GeometryId> {
        (**self).create_geometry(spec)
    }

    fn dispose_geometry(&mut self, id: GeometryId) {
        (**self).dispose_geometry(id)
    }

    fn create_material(&mut self, spec: &MaterialSpec) -> anyhow::Result<MaterialId> {
        (**self).create_material(spec)
    }

    fn dispose_material(&mut self, id: MaterialId) {
        (**self).dispose_material(id)
    }

    fn request_frame(&mut self) -> FrameHandle {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        (**self).cancel_frame(handle)
    }

    fn render(&mut self, frame: &RenderFrame<'_>) -> anyhow::Result<()> {
        (**self).render(frame)
    }
}

/// Everything a headless run did, readable from tests and the CLI preview.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadlessStats {
    pub renderers_created: usize,
    pub geometries_created: usize,
    pub materials_created: usize,
    pub frames_requested: usize,
    pub frames_cancelled: usize,
    pub frames_rendered: usize,
    pub meshes_last_frame: usize,
    pub resizes: usize,
}

/// In-memory backend: hands out ids, tracks what is live and queues frame
/// callbacks for the caller to fire.
#[derive(Debug)]
pub struct HeadlessBackend {
    available: bool,
    fail_geometry_after: Option<usize>,
    next_id: u64,
    renderer_live: bool,
    surface_attached: bool,
    viewport: Option<Viewport>,
    geometries: HashSet<GeometryId>,
    materials: HashSet<MaterialId>,
    pending_frames: Vec<FrameHandle>,
    stats: HeadlessStats,
}

impl Default for HeadlessBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self {
            available: true,
            fail_geometry_after: None,
            next_id: 0,
            renderer_live: false,
            surface_attached: false,
            viewport: None,
            geometries: HashSet::new(),
            materials: HashSet::new(),
            pending_frames: Vec::new(),
            stats: HeadlessStats::default(),
        }
    }

    /// A backend whose rendering context can never be created.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    /// Refuse geometry creation once `count` geometries exist.
    pub fn failing_geometry_after(count: usize) -> Self {
        Self {
            fail_geometry_after: Some(count),
            ..Self::new()
        }
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn stats(&self) -> &HeadlessStats {
        &self.stats
    }

    pub fn live_geometries(&self) -> usize {
        self.geometries.len()
    }

    pub fn live_materials(&self) -> usize {
        self.materials.len()
    }

    pub fn renderer_live(&self) -> bool {
        self.renderer_live
    }

    pub fn surface_attached(&self) -> bool {
        self.surface_attached
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    pub fn pending_frames(&self) -> &[FrameHandle] {
        &self.pending_frames
    }

    /// Pop the oldest queued frame callback, as the platform would fire it.
    pub fn take_pending_frame(&mut self) -> Option<FrameHandle> {
        if self.pending_frames.is_empty() {
            return None;
        }
        Some(self.pending_frames.remove(0))
    }

    /// Nothing allocated is still alive.
    pub fn is_clean(&self) -> bool {
        !self.renderer_live
            && !self.surface_attached
            && self.geometries.is_empty()
            && self.materials.is_empty()
            && self.pending_frames.is_empty()
    }
}

impl RenderBackend for HeadlessBackend {
    fn is_available(&self) -> bool {
        self.available
    }

    fn create_renderer(&mut self, options: &RendererOptions) -> anyhow::Result<()> {
        if !self.available {
            bail!("rendering context unavailable");
        }
        if self.renderer_live {
            bail!("renderer already live");
        }
        self.renderer_live = true;
        self.surface_attached = true;
        self.viewport = Some(options.viewport);
        self.stats.renderers_created += 1;
        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) {
        if self.renderer_live {
            self.viewport = Some(viewport);
            self.stats.resizes += 1;
        }
    }

    fn detach_surface(&mut self) {
        self.surface_attached = false;
    }

    fn destroy_renderer(&mut self) {
        self.renderer_live = false;
        self.surface_attached = false;
        self.viewport = None;
    }

    fn create_geometry(&mut self, _spec: &GeometrySpec) -> anyhow::Result<GeometryId> {
        if let Some(limit) = self.fail_geometry_after {
            if self.geometries.len() >= limit {
                bail!("geometry buffer allocation failed");
            }
        }
        let id = GeometryId(self.next_id());
        self.geometries.insert(id);
        self.stats.geometries_created += 1;
        Ok(id)
    }

    fn dispose_geometry(&mut self, id: GeometryId) {
        self.geometries.remove(&id);
    }

    fn create_material(&mut self, _spec: &MaterialSpec) -> anyhow::Result<MaterialId> {
        let id = MaterialId(self.next_id());
        self.materials.insert(id);
        self.stats.materials_created += 1;
        Ok(id)
    }

    fn dispose_material(&mut self, id: MaterialId) {
        self.materials.remove(&id);
    }

    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_id());
        self.pending_frames.push(handle);
        self.stats.frames_requested += 1;
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let before = self.pending_frames.len();
        self.pending_frames.retain(|pending| *pending != handle);
        if self.pending_frames.len() != before {
            self.stats.frames_cancelled += 1;
        }
    }

    fn render(&mut self, frame: &RenderFrame<'_>) -> anyhow::Result<()> {
        if !self.renderer_live {
            bail!("render called without a live renderer");
        }
        if !frame.camera.view_projection().is_finite() {
            bail!("camera matrix is not finite");
        }
        for mesh in frame.meshes.iter().chain(std::iter::once(&frame.surface)) {
            if !self.geometries.contains(&mesh.geometry) || !self.materials.contains(&mesh.material) {
                bail!("mesh references a disposed resource");
            }
        }
        self.stats.frames_rendered += 1;
        self.stats.meshes_last_frame = frame.meshes.len() + 1;
        Ok(())
    }
}
