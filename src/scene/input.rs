//! Input shared between platform event handlers and the frame loop.
//!
//! Handlers may run on another thread than the one stepping frames, so the
//! latest pointer and viewport live in atomics. Readers always see a whole
//! value: both pointer axes share one word, and the viewport packs width,
//! height and pixel ratio into another.

use std::sync::atomic::{AtomicU64, Ordering};

use glam::Vec2;
use serde::{Deserialize, Serialize};

pub const MAX_PIXEL_RATIO: f32 = 2.0;

/// Widest or tallest viewport edge the shared input can hold.
pub const MAX_VIEWPORT_EDGE: u32 = (1 << 24) - 1;
/// Pixel ratio is shared in thousandths.
const PIXEL_RATIO_SCALE: f32 = 1000.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32, pixel_ratio: f32) -> Self {
        Self {
            width,
            height,
            pixel_ratio,
        }
    }

    /// Width over height; a collapsed viewport reports 1.
    pub fn aspect(&self) -> f32 {
        if self.width == 0 || self.height == 0 {
            return 1.0;
        }
        self.width as f32 / self.height as f32
    }

    pub fn clamped_pixel_ratio(&self) -> f32 {
        if !self.pixel_ratio.is_finite() || self.pixel_ratio <= 0.0 {
            return 1.0;
        }
        self.pixel_ratio.min(MAX_PIXEL_RATIO)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280, 720, 1.0)
    }
}

/// Client coordinates to `[-1, 1]` on both axes, Y up.
pub fn pointer_from_client(x: f32, y: f32, viewport: Viewport) -> Vec2 {
    if viewport.width == 0 || viewport.height == 0 {
        return Vec2::ZERO;
    }
    let nx = (x / viewport.width as f32) * 2.0 - 1.0;
    let ny = -((y / viewport.height as f32) * 2.0 - 1.0);
    Vec2::new(nx.clamp(-1.0, 1.0), ny.clamp(-1.0, 1.0))
}

fn pack(a: u32, b: u32) -> u64 {
    ((a as u64) << 32) | b as u64
}

fn unpack(word: u64) -> (u32, u32) {
    ((word >> 32) as u32, word as u32)
}

/// 24 bits each for width and height, 16 for the pixel ratio in thousandths.
fn pack_viewport(viewport: Viewport) -> u64 {
    let width = viewport.width.min(MAX_VIEWPORT_EDGE) as u64;
    let height = viewport.height.min(MAX_VIEWPORT_EDGE) as u64;
    let ratio = if viewport.pixel_ratio.is_finite() && viewport.pixel_ratio > 0.0 {
        (viewport.pixel_ratio * PIXEL_RATIO_SCALE)
            .round()
            .min(u16::MAX as f32) as u64
    } else {
        0
    };
    (width << 40) | (height << 16) | ratio
}

fn unpack_viewport(word: u64) -> Viewport {
    Viewport::new(
        (word >> 40) as u32 & MAX_VIEWPORT_EDGE,
        (word >> 16) as u32 & MAX_VIEWPORT_EDGE,
        (word & 0xffff) as f32 / PIXEL_RATIO_SCALE,
    )
}

#[derive(Debug)]
pub struct SceneInput {
    pointer: AtomicU64,
    viewport: AtomicU64,
}

impl SceneInput {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            pointer: AtomicU64::new(pack(0f32.to_bits(), 0f32.to_bits())),
            viewport: AtomicU64::new(pack_viewport(viewport)),
        }
    }

    pub fn set_pointer(&self, pointer: Vec2) {
        self.pointer
            .store(pack(pointer.x.to_bits(), pointer.y.to_bits()), Ordering::Relaxed);
    }

    /// Pointer move handler: normalise against the current viewport and store.
    pub fn pointer_moved(&self, client_x: f32, client_y: f32) {
        self.set_pointer(pointer_from_client(client_x, client_y, self.viewport()));
    }

    pub fn pointer(&self) -> Vec2 {
        let (x, y) = unpack(self.pointer.load(Ordering::Relaxed));
        Vec2::new(f32::from_bits(x), f32::from_bits(y))
    }

    pub fn set_viewport(&self, viewport: Viewport) {
        self.viewport
            .store(pack_viewport(viewport), Ordering::Relaxed);
    }

    pub fn viewport(&self) -> Viewport {
        unpack_viewport(self.viewport.load(Ordering::Relaxed))
    }
}

impl Default for SceneInput {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}
