//! Binds the hero scene to a page's mount, resize and unmount.
//!
//! `HeroCanvas` owns the scene state and every graphics handle it asked the
//! backend for. There is exactly one release path (`release`) and it runs on
//! a failed mount, on `unmount` and on drop.

use std::sync::Arc;

use glam::Vec3;
use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info, warn};

use super::{
    animation::advance_frame,
    backend::{
        FrameHandle, GeometryId, GeometrySpec, MaterialId, MaterialSpec, MeshBinding,
        RenderBackend, RenderFrame, RendererOptions,
    },
    generator::{generate_scene, SceneOptions, SceneState},
    input::{SceneInput, Viewport},
    ornament::OrnamentShape,
    surface::{FRAGMENT_SHADER, VERTEX_SHADER},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountOutcome {
    Mounted,
    /// No rendering context; ready already fired so the page can show its
    /// static fallback.
    Fallback,
    AlreadyMounted,
}

#[derive(Debug, Default)]
struct Resources {
    renderer: bool,
    geometries: Vec<GeometryId>,
    materials: Vec<MaterialId>,
}

#[derive(Debug)]
struct Mounted {
    state: SceneState,
    resources: Resources,
    meshes: Vec<MeshBinding>,
    surface: MeshBinding,
    pending: Option<FrameHandle>,
}

type ReadyCallback = Box<dyn FnMut() + Send>;

pub struct HeroCanvas<B: RenderBackend> {
    backend: B,
    input: Arc<SceneInput>,
    options: SceneOptions,
    mounted: Option<Mounted>,
    ready: bool,
    on_ready: Option<ReadyCallback>,
}

impl<B: RenderBackend> HeroCanvas<B> {
    pub fn new(backend: B, input: Arc<SceneInput>, options: SceneOptions) -> Self {
        Self {
            backend,
            input,
            options,
            mounted: None,
            ready: false,
            on_ready: None,
        }
    }

    /// Called once per mount, after the first rendered frame or right away
    /// on fallback.
    pub fn on_ready(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_ready = Some(Box::new(callback));
        self
    }

    pub fn input(&self) -> &Arc<SceneInput> {
        &self.input
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn state(&self) -> Option<&SceneState> {
        self.mounted.as_ref().map(|mounted| &mounted.state)
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.mounted.as_ref().and_then(|mounted| mounted.pending)
    }

    fn fire_ready(&mut self) {
        if self.ready {
            return;
        }
        self.ready = true;
        if let Some(callback) = self.on_ready.as_mut() {
            callback();
        }
    }

    pub fn mount(&mut self) -> anyhow::Result<MountOutcome> {
        if self.mounted.is_some() {
            return Ok(MountOutcome::AlreadyMounted);
        }
        self.ready = false;

        if !self.backend.is_available() {
            warn!("rendering context unavailable, falling back to static hero");
            self.fire_ready();
            return Ok(MountOutcome::Fallback);
        }

        let viewport = self.input.viewport();
        let state = match self.options.seed {
            Some(seed) => generate_scene(&mut StdRng::seed_from_u64(seed), &self.options, viewport),
            None => generate_scene(&mut rand::rng(), &self.options, viewport),
        };

        let mut resources = Resources::default();
        let bindings = acquire(&mut self.backend, &state, viewport, &mut resources);
        let (meshes, surface) = match bindings {
            Ok(bindings) => bindings,
            Err(err) => {
                release(&mut self.backend, &mut resources);
                return Err(err.context("failed to mount hero scene"));
            }
        };

        let pending = Some(self.backend.request_frame());
        info!(
            ornaments = state.ornaments.len(),
            geometries = resources.geometries.len(),
            materials = resources.materials.len(),
            "hero scene mounted"
        );
        self.mounted = Some(Mounted {
            state,
            resources,
            meshes,
            surface,
            pending,
        });
        Ok(MountOutcome::Mounted)
    }

    /// Platform frame callback. Stale or cancelled handles are ignored.
    /// Returns whether a frame was rendered.
    pub fn frame(&mut self, handle: FrameHandle, elapsed: f32) -> anyhow::Result<bool> {
        let Some(mounted) = self.mounted.as_mut() else {
            return Ok(false);
        };
        if mounted.pending != Some(handle) {
            debug!(?handle, "ignoring stale frame callback");
            return Ok(false);
        }
        mounted.pending = Some(self.backend.request_frame());

        advance_frame(&mut mounted.state, elapsed, self.input.pointer());
        for (mesh, ornament) in mounted.meshes.iter_mut().zip(mounted.state.ornaments.iter()) {
            mesh.position = ornament.position;
            mesh.rotation = ornament.rotation;
        }

        let frame = RenderFrame {
            camera: &mounted.state.camera,
            lights: &mounted.state.lights,
            meshes: &mounted.meshes,
            surface: mounted.surface,
            surface_uniforms: mounted.state.surface.uniforms,
        };
        self.backend.render(&frame)?;

        self.fire_ready();
        Ok(true)
    }

    /// Track a new viewport. Safe to call any number of times, mounted or not.
    pub fn resize(&mut self, width: u32, height: u32, pixel_ratio: f32) {
        let viewport = Viewport::new(width, height, pixel_ratio);
        self.input.set_viewport(viewport);
        if let Some(mounted) = self.mounted.as_mut() {
            mounted.state.camera.set_viewport(viewport);
            self.backend.resize(Viewport::new(
                width,
                height,
                viewport.clamped_pixel_ratio(),
            ));
        }
    }

    /// Stop the frame loop and give every graphics resource back. Returns
    /// whether anything was mounted.
    pub fn unmount(&mut self) -> bool {
        let Some(mut mounted) = self.mounted.take() else {
            return false;
        };
        if let Some(handle) = mounted.pending.take() {
            self.backend.cancel_frame(handle);
        }
        self.backend.detach_surface();
        release(&mut self.backend, &mut mounted.resources);
        self.ready = false;
        info!("hero scene unmounted");
        true
    }
}

impl<B: RenderBackend> Drop for HeroCanvas<B> {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn acquire<B: RenderBackend>(
    backend: &mut B,
    state: &SceneState,
    viewport: Viewport,
    resources: &mut Resources,
) -> anyhow::Result<(Vec<MeshBinding>, MeshBinding)> {
    backend.create_renderer(&RendererOptions {
        antialias: true,
        alpha: true,
        viewport: Viewport::new(viewport.width, viewport.height, viewport.clamped_pixel_ratio()),
    })?;
    resources.renderer = true;

    // one geometry per shape, shared by every ornament of that shape
    let mut shape_geometries = Vec::with_capacity(OrnamentShape::ALL.len());
    for shape in OrnamentShape::ALL {
        let id = backend.create_geometry(&GeometrySpec::for_shape(shape))?;
        resources.geometries.push(id);
        shape_geometries.push(id);
    }

    let mut meshes = Vec::with_capacity(state.ornaments.len());
    for ornament in &state.ornaments {
        let material = backend.create_material(&MaterialSpec::Physical(ornament.material.clone()))?;
        resources.materials.push(material);
        meshes.push(MeshBinding {
            geometry: shape_geometries[ornament.shape.index()],
            material,
            position: ornament.position,
            rotation: ornament.rotation,
            scale: ornament.scale,
        });
    }

    let config = &state.surface.config;
    let plane = backend.create_geometry(&GeometrySpec::for_surface(config))?;
    resources.geometries.push(plane);
    let shader = backend.create_material(&MaterialSpec::Shader {
        vertex_shader: VERTEX_SHADER.to_string(),
        fragment_shader: FRAGMENT_SHADER.to_string(),
        color_a: config.color_a,
        color_b: config.color_b,
        color_c: config.color_c,
        transparent: true,
        double_sided: true,
    })?;
    resources.materials.push(shader);
    let surface = MeshBinding {
        geometry: plane,
        material: shader,
        position: config.position,
        rotation: Vec3::new(config.rotation_x, 0.0, 0.0),
        scale: 1.0,
    };

    Ok((meshes, surface))
}

fn release<B: RenderBackend>(backend: &mut B, resources: &mut Resources) {
    for id in resources.geometries.drain(..) {
        backend.dispose_geometry(id);
    }
    for id in resources.materials.drain(..) {
        backend.dispose_material(id);
    }
    if resources.renderer {
        backend.destroy_renderer();
        resources.renderer = false;
    }
}
