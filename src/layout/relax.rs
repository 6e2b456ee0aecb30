// Overlap relaxation.
//
// Jacobi-style pairwise repulsion over circular footprints. Every iteration
// visits each unordered pair once; overlapping pairs are pushed apart
// symmetrically along the line between their centers. Stops after the first
// iteration without movement, or when the iteration budget runs out.
//
// Not a solver: dense scenes can exhaust the budget with small residual
// overlaps, and that result is returned as-is. Exactly coincident targets have
// no push direction and never separate; they also use up the whole budget.

use serde::{Deserialize, Serialize};

use super::Target;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelaxConfig {
    /// Maximum number of full pair sweeps.
    pub iterations: usize,
    /// Fraction of the half-overlap applied per push.
    pub damping: f32,
    /// Center distance floor, avoids dividing by zero for coincident targets.
    pub min_distance: f32,
}

impl Default for RelaxConfig {
    fn default() -> Self {
        Self {
            iterations: 120,
            damping: 0.65,
            min_distance: 0.0001,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct RelaxReport {
    /// Sweeps performed, including the final still one when converged.
    pub iterations: usize,
    /// True if a sweep finished without moving anything.
    pub converged: bool,
}

pub fn relax_overlaps(targets: &mut [Target], gap: f32, cfg: &RelaxConfig) -> RelaxReport {
    if targets.len() < 2 {
        return RelaxReport { iterations: 0, converged: true };
    }

    for iter in 0..cfg.iterations {
        let mut moved_any = false;

        for i in 0..targets.len() {
            for j in (i + 1)..targets.len() {
                let (head, tail) = targets.split_at_mut(j);
                let a = &mut head[i];
                let b = &mut tail[0];

                let dx = b.pos.x - a.pos.x;
                let dz = b.pos.z - a.pos.z;
                let dist = (dx * dx + dz * dz).sqrt().max(cfg.min_distance);
                let min_dist = a.radius + b.radius + gap;

                if dist < min_dist {
                    let push = (min_dist - dist) * 0.5 * cfg.damping;
                    let nx = dx / dist;
                    let nz = dz / dist;
                    a.pos.x -= nx * push;
                    a.pos.z -= nz * push;
                    b.pos.x += nx * push;
                    b.pos.z += nz * push;
                    moved_any = true;
                }
            }
        }

        if !moved_any {
            return RelaxReport { iterations: iter + 1, converged: true };
        }
    }

    RelaxReport { iterations: cfg.iterations, converged: false }
}

/// Worst remaining overlap (positive means overlapping), or 0 when clear.
pub fn max_overlap(targets: &[Target], gap: f32) -> f32 {
    let mut worst = 0.0f32;
    for i in 0..targets.len() {
        for j in (i + 1)..targets.len() {
            let a = &targets[i];
            let b = &targets[j];
            let need = a.radius + b.radius + gap;
            worst = worst.max(need - a.pos.distance(b.pos));
        }
    }
    worst
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Category, PointF, TargetId};

    fn target(idx: usize, x: f32, z: f32, radius: f32) -> Target {
        Target {
            id: TargetId(idx),
            category: Category::Other,
            pos: PointF { x, z },
            radius,
        }
    }

    #[test]
    fn test_two_targets_separate() {
        let mut ts = vec![target(0, 0.0, -1.7, 0.5), target(1, 0.3, -1.7, 0.5)];
        let report = relax_overlaps(&mut ts, 0.18, &RelaxConfig::default());

        assert!(report.converged);
        assert!(report.iterations < 120);
        let d = ts[0].pos.distance(ts[1].pos);
        assert!(d >= 1.18 - 1e-3, "separation {}", d);
        // symmetric push keeps the midpoint
        assert!(((ts[0].pos.x + ts[1].pos.x) / 2.0 - 0.15).abs() < 1e-4);
        assert!((ts[0].pos.z + 1.7).abs() < 1e-6);
    }

    #[test]
    fn test_clear_targets_untouched() {
        let mut ts = vec![target(0, -1.0, -1.7, 0.3), target(1, 1.0, -1.7, 0.3)];
        let before = ts.clone();
        let report = relax_overlaps(&mut ts, 0.18, &RelaxConfig::default());
        assert_eq!(report, RelaxReport { iterations: 1, converged: true });
        assert_eq!(ts, before);
    }

    #[test]
    fn test_single_and_empty_noop() {
        let mut one = vec![target(0, 0.0, 0.0, 1.5)];
        assert!(relax_overlaps(&mut one, 0.18, &RelaxConfig::default()).converged);
        assert_eq!(one[0].pos, PointF { x: 0.0, z: 0.0 });
        assert_eq!(relax_overlaps(&mut [], 0.18, &RelaxConfig::default()).iterations, 0);
    }

    #[test]
    fn test_coincident_targets_never_separate() {
        // No direction to push along: the pair stays put and the budget runs out.
        let mut ts = vec![target(0, 0.0, -1.0, 0.4), target(1, 0.0, -1.0, 0.4)];
        let before = ts.clone();
        let report = relax_overlaps(&mut ts, 0.18, &RelaxConfig::default());
        assert_eq!(report, RelaxReport { iterations: 120, converged: false });
        assert_eq!(ts, before);
    }

    #[test]
    fn test_budget_exhaustion_reported() {
        let mut ts: Vec<Target> = (0..8).map(|i| target(i, 0.01 * i as f32, -1.7, 1.5)).collect();
        let cfg = RelaxConfig { iterations: 3, ..RelaxConfig::default() };
        let report = relax_overlaps(&mut ts, 0.18, &cfg);
        assert_eq!(report, RelaxReport { iterations: 3, converged: false });
        assert!(max_overlap(&ts, 0.18) > 0.0);
    }

    #[test]
    fn test_dense_scene_reduces_overlap() {
        let mut ts: Vec<Target> = (0..5)
            .map(|i| target(i, 0.1 * i as f32, -1.7 - 0.05 * i as f32, 0.45))
            .collect();
        let before = max_overlap(&ts, 0.18);
        relax_overlaps(&mut ts, 0.18, &RelaxConfig::default());
        assert!(max_overlap(&ts, 0.18) < before);
    }
}
