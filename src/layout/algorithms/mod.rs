//! Placement recipes, one per room archetype.
//!
//! A recipe assigns initial positions to each category group:
//! - `living`: table line, couch line behind it, chair ring, others on an arc
//! - `dining`: table line, chair ring, others on an arc
//! - `work_rest`: desk line with a chair line in front, others on an arc
//! - `generic`: everything on one arc
//!
//! Targets a recipe does not touch keep their seed position.

mod dining;
mod generic;
mod living;
mod work_rest;

pub use dining::DiningRecipe;
pub use generic::GenericRecipe;
pub use living::LivingRecipe;
pub use work_rest::WorkRestRecipe;

use crate::layout::{Archetype, Category, LayoutConfig, PointF, Target};

/// Common interface for archetype recipes.
pub trait PlacementRecipe {
    fn place(&self, targets: &mut [Target], groups: &CategoryGroups, cfg: &LayoutConfig);
}

/// Recipe for `archetype` with its stock geometry.
pub fn recipe_for(archetype: Archetype) -> Box<dyn PlacementRecipe> {
    match archetype {
        Archetype::Living => Box::new(LivingRecipe::default()),
        Archetype::Dining => Box::new(DiningRecipe::default()),
        Archetype::WorkRest => Box::new(WorkRestRecipe::default()),
        Archetype::Generic => Box::new(GenericRecipe::default()),
    }
}

/// Target indices partitioned by category, each in input order.
#[derive(Debug, Clone, Default)]
pub struct CategoryGroups {
    pub couches: Vec<usize>,
    pub tables: Vec<usize>,
    pub chairs: Vec<usize>,
    pub others: Vec<usize>,
    /// Every target, in input order.
    pub all: Vec<usize>,
    /// Largest radius per category, `None` for empty groups.
    max_radius: [Option<f32>; 4],
}

impl CategoryGroups {
    pub fn from_targets(targets: &[Target]) -> Self {
        let mut groups = Self::default();
        for (i, t) in targets.iter().enumerate() {
            match t.category {
                Category::Couch => groups.couches.push(i),
                Category::Table => groups.tables.push(i),
                Category::Chair => groups.chairs.push(i),
                Category::Other => groups.others.push(i),
            }
            groups.all.push(i);

            let slot = &mut groups.max_radius[slot_of(t.category)];
            *slot = Some(slot.map_or(t.radius, |r| r.max(t.radius)));
        }
        groups
    }

    /// Largest radius in the group, or the category's base radius if the group is empty.
    pub fn max_radius(&self, category: Category, cfg: &LayoutConfig) -> f32 {
        self.max_radius[slot_of(category)].unwrap_or_else(|| cfg.base_radii.get(category))
    }
}

fn slot_of(category: Category) -> usize {
    match category {
        Category::Couch => 0,
        Category::Table => 1,
        Category::Chair => 2,
        Category::Other => 3,
    }
}

/// Write `points` onto the targets listed in `indices`, pairwise.
pub(crate) fn assign(targets: &mut [Target], indices: &[usize], points: Vec<PointF>) {
    for (&i, p) in indices.iter().zip(points) {
        targets[i].pos = p;
    }
}
