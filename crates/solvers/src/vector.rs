use descent_core::Point;

/// Euclidean norm ‖v‖₂.
pub(crate) fn norm(v: &Point) -> f64 {
    v.dot(v).sqrt()
}

/// Returns `x + t·dx`.
pub(crate) fn along(x: &Point, dx: &Point, t: f64) -> Point {
    let mut out = x.clone();
    out.scaled_add(t, dx);
    out
}
