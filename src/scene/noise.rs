//! CPU twin of the 3D simplex noise the gradient surface vertex shader uses.
//!
//! The lattice hash is the `mod 289` permutation polynomial rather than a
//! lookup table, so the values match the GPU side up to float rounding.

use glam::Vec3;

fn mod289(x: f32) -> f32 {
    x - (x * (1.0 / 289.0)).floor() * 289.0
}

fn permute(x: f32) -> f32 {
    mod289((x * 34.0 + 1.0) * x)
}

fn taylor_inv_sqrt(r: f32) -> f32 {
    1.792_842_9 - 0.853_734_7 * r
}

fn step(edge: f32, x: f32) -> f32 {
    if x < edge {
        0.0
    } else {
        1.0
    }
}

/// Gradient for one simplex corner, derived from its hashed lattice value.
fn corner_gradient(p: f32) -> Vec3 {
    const N: f32 = 1.0 / 7.0;
    let ns = Vec3::new(2.0 * N, 0.5 * N - 1.0, N);
    let j = p - 49.0 * (p * ns.z * ns.z).floor();
    let gx = (j * ns.z).floor();
    let gy = (j - 7.0 * gx).floor();
    let x = gx * ns.x + ns.y;
    let y = gy * ns.x + ns.y;
    let h = 1.0 - x.abs() - y.abs();
    let sh = -step(h, 0.0);
    let grad = Vec3::new(
        x + (x.floor() * 2.0 + 1.0) * sh,
        y + (y.floor() * 2.0 + 1.0) * sh,
        h,
    );
    grad * taylor_inv_sqrt(grad.dot(grad))
}

/// 3D simplex noise, roughly in `[-1, 1]`.
pub fn simplex3(v: Vec3) -> f32 {
    const C_X: f32 = 1.0 / 6.0;
    const C_Y: f32 = 1.0 / 3.0;

    let skew = (v.x + v.y + v.z) * C_Y;
    let i = Vec3::new(
        (v.x + skew).floor(),
        (v.y + skew).floor(),
        (v.z + skew).floor(),
    );
    let unskew = (i.x + i.y + i.z) * C_X;
    let x0 = Vec3::new(v.x - i.x + unskew, v.y - i.y + unskew, v.z - i.z + unskew);

    // which simplex we are in
    let g = Vec3::new(step(x0.y, x0.x), step(x0.z, x0.y), step(x0.x, x0.z));
    let l = Vec3::new(1.0 - g.x, 1.0 - g.y, 1.0 - g.z);
    let i1 = Vec3::new(g.x.min(l.z), g.y.min(l.x), g.z.min(l.y));
    let i2 = Vec3::new(g.x.max(l.z), g.y.max(l.x), g.z.max(l.y));

    let x1 = x0 - i1 + Vec3::new(C_X, C_X, C_X);
    let x2 = x0 - i2 + Vec3::new(C_Y, C_Y, C_Y);
    let x3 = x0 - Vec3::new(0.5, 0.5, 0.5);

    let i = Vec3::new(mod289(i.x), mod289(i.y), mod289(i.z));
    let offsets = [Vec3::ZERO, i1, i2, Vec3::new(1.0, 1.0, 1.0)];
    let corners = [x0, x1, x2, x3];

    let mut sum = 0.0;
    for (offset, corner) in offsets.iter().zip(corners.iter()) {
        let p = permute(permute(permute(i.z + offset.z) + i.y + offset.y) + i.x + offset.x);
        let m = (0.6 - corner.dot(*corner)).max(0.0);
        let m = m * m;
        sum += m * m * corner_gradient(p).dot(*corner);
    }
    42.0 * sum
}
