//! Living-room recipe.
//!
//! Coffee tables in a line, couches in a line behind them, chairs in a ring
//! around the table center, everything else on an arc off to the side.

use crate::layout::placement::{arc, line_centered, ring, ARC_SPREAD_DEG};
use crate::layout::{Category, LayoutConfig, PointF, Target};

use super::{assign, CategoryGroups, PlacementRecipe};

#[derive(Debug, Clone)]
pub struct LivingRecipe {
    /// Depth of the table line.
    pub table_z: f32,
    /// Extra clearance between the table line and the couch line.
    pub couch_clearance: f32,
    /// Extra spacing between couch centers beyond two radii.
    pub couch_spacing_pad: f32,
    /// Extra ring radius beyond table + chair radii.
    pub chair_clearance: f32,
    pub others_center: PointF,
    pub others_radius: f32,
}

impl Default for LivingRecipe {
    fn default() -> Self {
        Self {
            table_z: -1.7,
            couch_clearance: 0.45,
            couch_spacing_pad: 0.35,
            chair_clearance: 0.55,
            others_center: PointF { x: 1.0, z: -1.9 },
            others_radius: 1.25,
        }
    }
}

impl PlacementRecipe for LivingRecipe {
    fn place(&self, targets: &mut [Target], groups: &CategoryGroups, cfg: &LayoutConfig) {
        let table_r = groups.max_radius(Category::Table, cfg);
        let chair_r = groups.max_radius(Category::Chair, cfg);
        let couch_r = groups.max_radius(Category::Couch, cfg);

        let tables = line_centered(groups.tables.len(), self.table_z, 2.0 * table_r + cfg.gap, 0.0);
        assign(targets, &groups.tables, tables);

        let couch_z = self.table_z - (table_r + couch_r + self.couch_clearance);
        let couches = line_centered(
            groups.couches.len(),
            couch_z,
            2.0 * couch_r + self.couch_spacing_pad,
            0.0,
        );
        assign(targets, &groups.couches, couches);

        let chairs = ring(
            groups.chairs.len(),
            PointF { x: 0.0, z: self.table_z },
            table_r + chair_r + self.chair_clearance,
        );
        assign(targets, &groups.chairs, chairs);

        let others = arc(groups.others.len(), self.others_center, self.others_radius, ARC_SPREAD_DEG);
        assign(targets, &groups.others, others);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{build_targets, PlacedObject, Scale3};

    fn placed(assets: &[&str]) -> (Vec<Target>, CategoryGroups, LayoutConfig) {
        let cfg = LayoutConfig::default();
        let objs: Vec<PlacedObject> = assets
            .iter()
            .enumerate()
            .map(|(i, a)| PlacedObject::new(&i.to_string(), a, Scale3::default()))
            .collect();
        let mut targets = build_targets(&objs, &cfg);
        let groups = CategoryGroups::from_targets(&targets);
        LivingRecipe::default().place(&mut targets, &groups, &cfg);
        (targets, groups, cfg)
    }

    #[test]
    fn test_couch_behind_table() {
        let (t, _, _) = placed(&["Table.glb", "Couch.glb"]);
        assert_eq!(t[0].pos, PointF::new(0.0, -1.7));
        assert!(t[1].pos.x.abs() < 1e-6);
        assert!((t[1].pos.z + 3.55).abs() < 1e-5);
    }

    #[test]
    fn test_two_couches_spacing() {
        let (t, _, _) = placed(&["sofa_a.glb", "sofa_b.glb"]);
        // no table: table radius falls back to 0.55
        assert!((t[1].pos.x - t[0].pos.x - 2.05).abs() < 1e-5);
        assert!((t[0].pos.x + t[1].pos.x).abs() < 1e-5);
        assert_eq!(t[0].pos.z, t[1].pos.z);
    }

    #[test]
    fn test_chair_ring_radius() {
        let (t, _, _) = placed(&["Table.glb", "Chair.glb", "Chair.glb", "Chair.glb"]);
        let center = PointF::new(0.0, -1.7);
        for chair in &t[1..] {
            assert!((chair.pos.distance(center) - 1.43).abs() < 1e-4);
        }
    }

    #[test]
    fn test_others_on_arc() {
        let (t, _, _) = placed(&["Lamp.glb"]);
        assert!((t[0].pos.x - 1.0).abs() < 1e-6);
        assert!((t[0].pos.z + 3.15).abs() < 1e-5);
    }
}
