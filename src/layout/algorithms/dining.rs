//! Dining recipe: table line with chairs in a ring around it.

use crate::layout::placement::{arc, line_centered, ring, ARC_SPREAD_DEG};
use crate::layout::{Category, LayoutConfig, PointF, Target};

use super::{assign, CategoryGroups, PlacementRecipe};

#[derive(Debug, Clone)]
pub struct DiningRecipe {
    pub table_z: f32,
    pub chair_clearance: f32,
    pub others_center: PointF,
    pub others_radius: f32,
}

impl Default for DiningRecipe {
    fn default() -> Self {
        Self {
            table_z: -1.7,
            chair_clearance: 0.55,
            others_center: PointF { x: 1.0, z: -2.0 },
            others_radius: 1.25,
        }
    }
}

impl PlacementRecipe for DiningRecipe {
    fn place(&self, targets: &mut [Target], groups: &CategoryGroups, cfg: &LayoutConfig) {
        let table_r = groups.max_radius(Category::Table, cfg);
        let chair_r = groups.max_radius(Category::Chair, cfg);

        let tables = line_centered(groups.tables.len(), self.table_z, 2.0 * table_r + cfg.gap, 0.0);
        assign(targets, &groups.tables, tables);

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
