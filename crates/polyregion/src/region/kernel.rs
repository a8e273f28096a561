//! Batched crossing kernel (Sunday's winding-number test).
//!
//! Layout
//! - `ring`: 2 × (N+1) closed vertex ring, `helper`: 2 × N left normals
//!   `(-e.y, e.x)` of the edges. Query points are the columns of a 2 × M matrix.
//! - Intermediate matrices are shaped (edges × points) so each point's column
//!   is contiguous for the final per-point reduction.
//!
//! Per (point P, edge j): with `tail = P − V_j` and `side = tail · h_j`,
//! - upward crossing `V_j.y <= P.y < V_{j+1}.y` with `side > 0` adds 1,
//! - downward crossing `V_{j+1}.y <= P.y < V_j.y` with `side < 0` subtracts 1,
//! - anything else (including `side == 0`) adds nothing.
//!
//! The single-point path evaluates the same per-entry arithmetic without the
//! intermediate matrices, so batch and single queries agree bit-for-bit.

use nalgebra::{DMatrix, DVector, Matrix2xX, Vector2};

#[inline]
pub(crate) fn col(m: &Matrix2xX<f64>, j: usize) -> Vector2<f64> {
    Vector2::new(m[(0, j)], m[(1, j)])
}

/// Side of `p` relative to the directed edge starting at `v` with left normal `h`.
/// Positive: strictly left; negative: strictly right; zero: on the supporting line.
#[inline]
fn side_of(p: Vector2<f64>, v: Vector2<f64>, h: Vector2<f64>) -> f64 {
    let tail = p - v;
    tail.x * h.x + tail.y * h.y
}

/// Signed contribution of one edge given its two half-open y tests and side.
#[inline]
fn contribution(starts_below: bool, ends_above: bool, side: f64) -> i32 {
    match (starts_below, ends_above) {
        (true, true) if side > 0.0 => 1,
        (false, false) if side < 0.0 => -1,
        _ => 0,
    }
}

/// Side matrix `S[j, i] = (p_i − V_j) · h_j`.
pub(crate) fn side_matrix(
    ring: &Matrix2xX<f64>,
    helper: &Matrix2xX<f64>,
    pts: &Matrix2xX<f64>,
) -> DMatrix<f64> {
    DMatrix::from_fn(helper.ncols(), pts.ncols(), |j, i| {
        side_of(col(pts, i), col(ring, j), col(helper, j))
    })
}

/// Half-open y tests: `starts_below[j, i] = V_j.y <= p_i.y`,
/// `ends_above[j, i] = p_i.y < V_{j+1}.y`.
pub(crate) fn crossing_masks(
    ring: &Matrix2xX<f64>,
    pts: &Matrix2xX<f64>,
) -> (DMatrix<bool>, DMatrix<bool>) {
    let n = ring.ncols() - 1;
    let m = pts.ncols();
    let starts_below = DMatrix::from_fn(n, m, |j, i| ring[(1, j)] <= pts[(1, i)]);
    let ends_above = DMatrix::from_fn(n, m, |j, i| pts[(1, i)] < ring[(1, j + 1)]);
    (starts_below, ends_above)
}

/// Winding numbers for every column of `pts`.
pub(crate) fn winding_numbers(
    ring: &Matrix2xX<f64>,
    helper: &Matrix2xX<f64>,
    pts: &Matrix2xX<f64>,
) -> DVector<i32> {
    let sides = side_matrix(ring, helper, pts);
    let (starts_below, ends_above) = crossing_masks(ring, pts);
    DVector::from_fn(pts.ncols(), |i, _| {
        sides
            .column(i)
            .iter()
            .zip(starts_below.column(i).iter())
            .zip(ends_above.column(i).iter())
            .map(|((&s, &b1), &b2)| contribution(b1, b2, s))
            .sum::<i32>()
    })
}

/// Winding number of a single point (streaming over edges).
pub(crate) fn winding_number_at(
    ring: &Matrix2xX<f64>,
    helper: &Matrix2xX<f64>,
    p: Vector2<f64>,
) -> i32 {
    (0..helper.ncols())
        .map(|j| {
            let b1 = ring[(1, j)] <= p.y;
            let b2 = p.y < ring[(1, j + 1)];
            contribution(b1, b2, side_of(p, col(ring, j), col(helper, j)))
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Unit square (CCW) as ring + helper.
    fn square() -> (Matrix2xX<f64>, Matrix2xX<f64>) {
        let ring = Matrix2xX::from_column_slice(&[
            0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0,
        ]);
        let helper = Matrix2xX::from_fn(4, |r, j| {
            let e = col(&ring, j + 1) - col(&ring, j);
            if r == 0 {
                -e.y
            } else {
                e.x
            }
        });
        (ring, helper)
    }

    #[test]
    fn side_signs_follow_left_normal() {
        let (ring, helper) = square();
        // Edge 0 runs (0,0) -> (1,0); interior is on its left.
        let pts = Matrix2xX::from_column_slice(&[0.5, 0.5, 0.5, -0.5, 2.0, 0.0]);
        let s = side_matrix(&ring, &helper, &pts);
        assert_eq!(s.shape(), (4, 3));
        assert!(s[(0, 0)] > 0.0);
        assert!(s[(0, 1)] < 0.0);
        assert_eq!(s[(0, 2)], 0.0);
    }

    #[test]
    fn masks_are_half_open() {
        let (ring, _) = square();
        let pts = Matrix2xX::from_column_slice(&[0.5, 0.0, 0.5, 1.0]);
        let (b1, b2) = crossing_masks(&ring, &pts);
        // Edge 1 runs (1,0) -> (1,1): y = 0 counts, y = 1 does not.
        assert!(b1[(1, 0)] && b2[(1, 0)]);
        assert!(b1[(1, 1)] && !b2[(1, 1)]);
    }

    #[test]
    fn batch_matches_streaming() {
        let (ring, helper) = square();
        let pts = Matrix2xX::from_column_slice(&[
            0.5, 0.5, 1.5, 0.5, 0.0, 0.5, 1.0, 0.5, 0.5, 0.0, 0.5, 1.0, -3.0, 7.0,
        ]);
        let wn = winding_numbers(&ring, &helper, &pts);
        for i in 0..pts.ncols() {
            assert_eq!(wn[i], winding_number_at(&ring, &helper, col(&pts, i)));
        }
        // Left/bottom boundary counts as inside, right/top as outside.
        assert_eq!(wn.as_slice(), &[1, 0, 1, 0, 1, 0, 0]);
    }

    #[test]
    fn empty_batch() {
        let (ring, helper) = square();
        let wn = winding_numbers(&ring, &helper, &Matrix2xX::zeros(0));
        assert_eq!(wn.len(), 0);
    }
}
