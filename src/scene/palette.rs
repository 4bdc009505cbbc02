/// Brand colors the ornaments draw from, picked for contrast on dark backgrounds.
pub const BRAND_COLORS: [u32; 7] = [
    0x6366f1, // indigo
    0xec4899, // pink
    0x10b981, // emerald
    0xf59e0b, // amber
    0x34d399, // green
    0x60a5fa, // blue
    0xffffff, // white
];

pub const SURFACE_COLOR_A: u32 = 0x2563eb;
pub const SURFACE_COLOR_B: u32 = 0xc026d3;
pub const SURFACE_COLOR_C: u32 = 0xf43f5e;

pub fn to_hex(color: u32) -> String {
    format!("#{:06x}", color & 0xffffff)
}

/// Normalised `[r, g, b]` for shader uniforms.
pub fn to_rgb(color: u32) -> [f32; 3] {
    [
        ((color >> 16) & 0xff) as f32 / 255.0,
        ((color >> 8) & 0xff) as f32 / 255.0,
        (color & 0xff) as f32 / 255.0,
    ]
}

pub fn mix_rgb(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_and_rgb() {
        assert_eq!(to_hex(0x6366f1), "#6366f1");
        assert_eq!(to_hex(0x00ff00), "#00ff00");
        assert_eq!(to_rgb(0xffffff), [1.0, 1.0, 1.0]);
        assert_eq!(to_rgb(0xff0000), [1.0, 0.0, 0.0]);
    }
}
