//! Fallback recipe: every target on one forward arc, regardless of category.

use crate::layout::placement::{arc, ARC_SPREAD_DEG};
use crate::layout::{LayoutConfig, PointF, Target};

use super::{assign, CategoryGroups, PlacementRecipe};

#[derive(Debug, Clone)]
pub struct GenericRecipe {
    pub center: PointF,
    pub radius: f32,
}

impl Default for GenericRecipe {
    fn default() -> Self {
        Self {
            center: PointF { x: 0.0, z: -1.7 },
            radius: 1.6,
        }
    }
}

impl PlacementRecipe for GenericRecipe {
    fn place(&self, targets: &mut [Target], groups: &CategoryGroups, _cfg: &LayoutConfig) {
        let points = arc(groups.all.len(), self.center, self.radius, ARC_SPREAD_DEG);
        assign(targets, &groups.all, points);
    }
}
