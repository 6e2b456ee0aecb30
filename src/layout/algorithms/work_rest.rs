//! Work/rest recipe (office, study, bedroom): desks in a line, chairs in a line in front.

use crate::layout::placement::{arc, line_centered, ARC_SPREAD_DEG};
use crate::layout::{Category, LayoutConfig, PointF, Target};

use super::{assign, CategoryGroups, PlacementRecipe};

#[derive(Debug, Clone)]
pub struct WorkRestRecipe {
    pub table_z: f32,
    pub chair_z: f32,
    pub others_center: PointF,
    pub others_radius: f32,
}

impl Default for WorkRestRecipe {
    fn default() -> Self {
        Self {
            table_z: -1.6,
            chair_z: -1.1,
            others_center: PointF { x: -1.0, z: -2.0 },
            others_radius: 1.2,
        }
    }
}

impl PlacementRecipe for WorkRestRecipe {
    fn place(&self, targets: &mut [Target], groups: &CategoryGroups, cfg: &LayoutConfig) {
        let table_r = groups.max_radius(Category::Table, cfg);
        let chair_r = groups.max_radius(Category::Chair, cfg);

        let tables = line_centered(groups.tables.len(), self.table_z, 2.0 * table_r + cfg.gap, 0.0);
        assign(targets, &groups.tables, tables);

        let chairs = line_centered(groups.chairs.len(), self.chair_z, 2.0 * chair_r + cfg.gap, 0.0);
        assign(targets, &groups.chairs, chairs);

        let others = arc(groups.others.len(), self.others_center, self.others_radius, ARC_SPREAD_DEG);
        assign(targets, &groups.others, others);
    }
}
