//! Random planar point clouds (replay tokens).
//!
//! Purpose
//! - Small, deterministic sampler for hull inputs: CLI demos, benchmarks and
//!   randomized tests all draw from here.
//!
//! Model
//! - Uniform samples in an axis-aligned square or a disk centered at the origin.
//! - Optional grid snapping rounds each coordinate to a multiple of `step`;
//!   with integral steps and moderate extents every orientation is exact.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use crate::hull::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Region the cloud is drawn from. Non-finite extents are treated as 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CloudShape {
    /// `[-half_width, half_width]²`.
    Square { half_width: f64 },
    /// Closed disk of the given radius (area-uniform).
    Disk { radius: f64 },
}

/// Point cloud sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CloudCfg {
    pub count: usize,
    pub shape: CloudShape,
    /// Snap coordinates to multiples of this step. Ignored unless finite and `> 0`.
    pub grid: Option<f64>,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 100,
            shape: CloudShape::Disk { radius: 1.0 },
            grid: None,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

#[inline]
fn extent(v: f64) -> f64 {
    if v.is_finite() {
        v.abs()
    } else {
        0.0
    }
}

/// Draw `cfg.count` points. Same `(cfg, tok)` always yields the same cloud.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let step = cfg.grid.filter(|s| s.is_finite() && *s > 0.0);
    if matches!(
        cfg.shape,
        CloudShape::Square { half_width: v } | CloudShape::Disk { radius: v } if !v.is_finite()
    ) {
        tracing::warn!(shape = ?cfg.shape, "non-finite cloud extent, sampling the origin");
    }
    (0..cfg.count)
        .map(|_| {
            let p = match cfg.shape {
                CloudShape::Square { half_width } => {
                    // scale a unit sample; `gen_range` panics on NaN or overflowing bounds
                    let h = extent(half_width);
                    let u: f64 = rng.gen();
                    let v: f64 = rng.gen();
                    Point::new(h * (2.0 * u - 1.0), h * (2.0 * v - 1.0))
                }
                CloudShape::Disk { radius } => {
                    let r = extent(radius) * rng.gen::<f64>().sqrt();
                    let th = rng.gen::<f64>() * std::f64::consts::TAU;
                    Point::new(r * th.cos(), r * th.sin())
                }
            };
            match step {
                Some(s) => p.map(|v| (v / s).round() * s),
                None => p,
            }
        })
        .collect()
}
