//! Random polygons and query points (radial jitter + replay tokens).
//!
//! Purpose
//! - Provide small, deterministic samplers for tests and benchmarks: star-shaped
//!   polygons (simple, generally non-convex), free-form vertex soups (usually
//!   self-intersecting), and uniform query points in a box.
//!
//! Model
//! - Star polygons start from `n` equally spaced angles on [0, 2π), add bounded
//!   angular and radial jitter, and keep the angle-sorted (CCW) order.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use crate::region::Aabb2;
use nalgebra::{Matrix2xX, Vector2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Star-polygon sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, with
    /// `u∈[-radial_jitter, radial_jitter]`; values near 1 give deep concavities.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}
impl Default for StarCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.5,
            base_radius: 1.0,
            random_phase: true,
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
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
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

/// Draw a star-shaped polygon around the origin in CCW order.
///
/// The polygon is simple (angles are strictly sorted, radii positive). The
/// origin is interior whenever every angular gap is below π, which holds for
/// `n >= 4` or for `n == 3` with `angle_jitter_frac < 0.25`.
pub fn draw_star_polygon(cfg: StarCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    // Jitter stays inside each slot, so the angles are already sorted.
    (0..n)
        .map(|k| {
            let th = phase + (k as f64) * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let r = (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj) * r0;
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect()
}

/// Draw `n` vertices uniformly in `[-half, half]²` with no ordering constraint.
/// The resulting ring is usually self-intersecting.
pub fn draw_vertex_soup(n: usize, half: f64, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    (0..n.max(3))
        .map(|_| Vector2::new(rng.gen_range(-half..=half), rng.gen_range(-half..=half)))
        .collect()
}

/// Sample `m` points uniformly in `bbox` grown by `margin` on every side.
/// Returned as a 2 × m batch (one point per column).
pub fn sample_points(bbox: Aabb2, margin: f64, m: usize, tok: ReplayToken) -> Matrix2xX<f64> {
    let mut rng = tok.to_std_rng();
    let lo = bbox.lo.add_scalar(-margin);
    let hi = bbox.hi.add_scalar(margin);
    let mut pts = Matrix2xX::zeros(m);
    for i in 0..m {
        pts[(0, i)] = lo.x + rng.gen::<f64>() * (hi.x - lo.x);
        pts[(1, i)] = lo.y + rng.gen::<f64>() * (hi.y - lo.y);
    }
    pts
}
