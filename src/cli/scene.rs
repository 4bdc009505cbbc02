use std::sync::Arc;

use anyhow::bail;
use serde::Serialize;
use tracing::info;

use crate::{
    scene::{
        backend::{HeadlessBackend, HeadlessStats},
        generator::{SceneOptions, MAX_ORNAMENT_COUNT},
        input::SceneInput,
        lifecycle::{HeroCanvas, MountOutcome},
        surface::elevation_range,
    },
    schema::scene::SceneDescriptor,
};

/// Seconds between simulated frames.
const FRAME_INTERVAL: f32 = 1.0 / 60.0;

#[derive(Debug, Serialize)]
pub struct ScenePreview {
    pub frames: usize,
    pub stats: HeadlessStats,
    /// every geometry and material was returned after unmount
    pub released: bool,
    /// lowest and highest surface vertex on the last frame
    pub surface_elevation: [f32; 2],
    pub scene: SceneDescriptor,
}

/// Mount the hero scene on the headless backend, drive `frames` frame
/// callbacks and unmount. The descriptor is the state after the last frame.
pub fn preview(options: SceneOptions, frames: usize) -> anyhow::Result<ScenePreview> {
    if options.ornament_count > MAX_ORNAMENT_COUNT {
        bail!("count must be at most {}", MAX_ORNAMENT_COUNT);
    }
    let mut backend = HeadlessBackend::new();
    let input = Arc::new(SceneInput::default());
    let mut canvas = HeroCanvas::new(&mut backend, input, options);

    if canvas.mount()? != MountOutcome::Mounted {
        bail!("hero scene did not mount");
    }
    for frame in 0..frames {
        let Some(handle) = canvas.backend_mut().take_pending_frame() else {
            break;
        };
        canvas.frame(handle, frame as f32 * FRAME_INTERVAL)?;
    }
    let (scene, surface_elevation) = match canvas.state() {
        Some(state) => {
            let uniforms = state.surface.uniforms;
            let (min, max) = elevation_range(&state.surface.config, uniforms.time, uniforms.mouse);
            (SceneDescriptor::new(state, options.seed), [min, max])
        }
        None => bail!("hero scene lost its state"),
    };
    canvas.unmount();
    drop(canvas);

    let stats = backend.stats().clone();
    info!(frames = stats.frames_rendered, "scene preview finished");
    Ok(ScenePreview {
        frames: stats.frames_rendered,
        released: backend.is_clean(),
        surface_elevation,
        stats,
        scene,
    })
}
