// Room bounds: the usable floor rectangle in front of the viewer.

use serde::{Deserialize, Serialize};

use super::{PointF, Target};

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl Default for RoomBounds {
    fn default() -> Self {
        Self {
            min_x: -2.4,
            max_x: 2.4,
            min_z: -3.0,
            max_z: -0.8,
        }
    }
}

impl RoomBounds {
    pub fn contains(&self, p: PointF) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.z >= self.min_z && p.z <= self.max_z
    }

    /// Clamp a point into the rectangle. A NaN coordinate lands on the minimum edge.
    pub fn clamp(&self, p: PointF) -> PointF {
        PointF {
            x: clamp_axis(p.x, self.min_x, self.max_x),
            z: clamp_axis(p.z, self.min_z, self.max_z),
        }
    }

    /// Clamp every target in place. May reintroduce small overlaps at the walls.
    pub fn clamp_all(&self, targets: &mut [Target]) {
        for t in targets.iter_mut() {
            t.pos = self.clamp(t.pos);
        }
    }
}

fn clamp_axis(v: f32, min: f32, max: f32) -> f32 {
    if v.is_nan() { min } else { v.max(min).min(max) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_inside_untouched() {
        let b = RoomBounds::default();
        let p = PointF { x: 1.0, z: -1.5 };
        assert_eq!(b.clamp(p), p);
        assert!(b.contains(p));
    }

    #[test]
    fn test_clamp_outside() {
        let b = RoomBounds::default();
        assert_eq!(b.clamp(PointF { x: 9.0, z: 0.0 }), PointF { x: 2.4, z: -0.8 });
        assert_eq!(b.clamp(PointF { x: -9.0, z: -9.0 }), PointF { x: -2.4, z: -3.0 });
        assert!(!b.contains(PointF { x: 0.0, z: -0.5 }));
    }

    #[test]
    fn test_clamp_non_finite() {
        let b = RoomBounds::default();
        let p = b.clamp(PointF { x: f32::NAN, z: f32::NEG_INFINITY });
        assert!(b.contains(p));
    }
}
