// Initial placement generators.
//
// Each generator produces `n` ground positions for one category group. They
// are pure; assigning the points to targets is the recipe's job.
//
// Ground plane convention: x to the right, -z forward (away from the viewer).

use super::PointF;

/// Default angular spread of an arc, in degrees.
pub const ARC_SPREAD_DEG: f32 = 80.0;

/// `n` points on the line `z`, centered on `start_x`, `spacing` apart.
pub fn line_centered(n: usize, z: f32, spacing: f32, start_x: f32) -> Vec<PointF> {
    if n == 0 {
        return Vec::new();
    }
    let total = (n - 1) as f32 * spacing;
    let left = start_x - total / 2.0;
    (0..n)
        .map(|i| PointF { x: left + i as f32 * spacing, z })
        .collect()
}

/// `n` points evenly around a full circle. Item 0 sits at angle 0, i.e. `+z` of the center.
pub fn ring(n: usize, center: PointF, radius: f32) -> Vec<PointF> {
    (0..n)
        .map(|i| {
            let a = (2.0 * std::f64::consts::PI * i as f64 / n as f64) as f32;
            PointF {
                x: center.x + a.sin() * radius,
                z: center.z + a.cos() * radius,
            }
        })
        .collect()
}

/// `n` points on an arc of `spread_deg` degrees facing forward (-z) from the center.
/// A single item sits straight ahead.
pub fn arc(n: usize, center: PointF, radius: f32, spread_deg: f32) -> Vec<PointF> {
    let spread = spread_deg.to_radians();
    let (start, step) = if n <= 1 {
        (0.0, 0.0)
    } else {
        (-spread / 2.0, spread / (n - 1) as f32)
    };
    (0..n)
        .map(|i| {
            let a = start + step * i as f32;
            PointF {
                x: center.x + a.sin() * radius,
                z: center.z - a.cos() * radius,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_line_centered_spacing() {
        let pts = line_centered(3, -1.7, 1.0, 0.0);
        let xs: Vec<f32> = pts.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![-1.0, 0.0, 1.0]);
        assert!(pts.iter().all(|p| p.z == -1.7));
    }

    #[test]
    fn test_line_centered_offset_and_single() {
        let pts = line_centered(2, -1.1, 0.84, 0.5);
        assert!(close(pts[0].x, 0.08));
        assert!(close(pts[1].x, 0.92));

        let one = line_centered(1, -1.6, 5.0, 0.25);
        assert_eq!(one, vec![PointF { x: 0.25, z: -1.6 }]);
        assert!(line_centered(0, 0.0, 1.0, 0.0).is_empty());
    }

    #[test]
    fn test_ring_positions() {
        let c = PointF { x: 0.0, z: -1.7 };
        let pts = ring(4, c, 1.0);
        assert!(close(pts[0].x, 0.0) && close(pts[0].z, -0.7));
        assert!(close(pts[1].x, 1.0) && close(pts[1].z, -1.7));
        assert!(close(pts[2].x, 0.0) && close(pts[2].z, -2.7));
        assert!(close(pts[3].x, -1.0) && close(pts[3].z, -1.7));
    }

    #[test]
    fn test_ring_single_and_empty() {
        let c = PointF { x: 0.5, z: -2.0 };
        let pts = ring(1, c, 1.43);
        assert_eq!(pts.len(), 1);
        assert!(pts[0].x.is_finite() && pts[0].z.is_finite());
        assert!(close(pts[0].x, 0.5) && close(pts[0].z, -0.57));
        assert!(ring(0, c, 1.0).is_empty());
    }

    #[test]
    fn test_arc_single_straight_ahead() {
        let pts = arc(1, PointF { x: 1.0, z: -1.9 }, 1.25, ARC_SPREAD_DEG);
        assert_eq!(pts.len(), 1);
        assert!(close(pts[0].x, 1.0));
        assert!(close(pts[0].z, -3.15));
    }

    #[test]
    fn test_arc_symmetric_spread() {
        let pts = arc(3, PointF { x: 0.0, z: 0.0 }, 1.0, ARC_SPREAD_DEG);
        let s = 40f32.to_radians().sin();
        let c = 40f32.to_radians().cos();
        assert!(close(pts[0].x, -s) && close(pts[0].z, -c));
        assert!(close(pts[1].x, 0.0) && close(pts[1].z, -1.0));
        assert!(close(pts[2].x, s) && close(pts[2].z, -c));
        assert!(arc(0, PointF { x: 0.0, z: 0.0 }, 1.0, ARC_SPREAD_DEG).is_empty());
    }
}
