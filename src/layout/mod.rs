// Furniture auto-layout.
//
// Goals:
// - Deterministic: same label + same objects in the same order => same output, bit for bit
// - Stateless: targets are built per call and dropped at the end
// - Archetype-driven: the room label picks a recipe (lines, rings, arcs per category)
// - Best-effort no-overlap: a bounded relaxation pass pushes footprints apart
// - Always in bounds: final positions are clamped into the room rectangle
//
// Pipeline:
//   footprint (category + radius) -> archetype -> recipe placement -> relax -> clamp
//
// Output:
// - LayoutResult with one ground position per input object, in input order.
//   Height, rotation and anchoring belong to the caller.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

mod algorithms;
mod archetype;
mod bounds;
mod footprint;
mod placement;
mod relax;

pub use algorithms::{recipe_for, CategoryGroups, PlacementRecipe};
pub use algorithms::{DiningRecipe, GenericRecipe, LivingRecipe, WorkRestRecipe};
pub use archetype::{default_rules, recommend_assets, select_archetype, Archetype, ArchetypeRule};
pub use bounds::RoomBounds;
pub use footprint::{footprint_radius, BaseRadii, Category, Scale3};
pub use placement::{arc, line_centered, ring, ARC_SPREAD_DEG};
pub use relax::{max_overlap, relax_overlaps, RelaxConfig, RelaxReport};

/// A point on the ground plane, meters. -z is forward.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PointF {
    pub x: f32,
    pub z: f32,
}

impl PointF {
    pub fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    pub fn distance(&self, other: PointF) -> f32 {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        (dx * dx + dz * dz).sqrt()
    }
}

/// Caller-owned object handle. Never interpreted, only echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub String);

/// Index of a target within the current layout pass.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TargetId(pub usize);

/// An object as handed in by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedObject {
    pub id: ObjectId,
    /// Asset file name or path, used only for classification.
    pub asset: String,
    pub scale: Scale3,
}

impl PlacedObject {
    pub fn new(id: &str, asset: &str, scale: Scale3) -> Self {
        Self {
            id: ObjectId(id.to_string()),
            asset: asset.to_string(),
            scale,
        }
    }
}

/// Working record for one object during a layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub id: TargetId,
    pub category: Category,
    pub pos: PointF,
    /// Footprint radius. Fixed for the whole pass.
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Clearance kept between footprints, meters.
    pub gap: f32,
    pub bounds: RoomBounds,
    pub relax: RelaxConfig,
    pub base_radii: BaseRadii,
    pub radius_min: f32,
    pub radius_max: f32,
    /// Seed position for targets the recipe leaves alone.
    pub provisional: PointF,
    /// Evaluated top to bottom, first match wins.
    pub archetype_rules: Vec<ArchetypeRule>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            gap: 0.18,
            bounds: RoomBounds::default(),
            relax: RelaxConfig::default(),
            base_radii: BaseRadii::default(),
            radius_min: 0.20,
            radius_max: 1.5,
            provisional: PointF { x: 0.0, z: -1.6 },
            archetype_rules: default_rules(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    pub id: ObjectId,
    pub category: Category,
    pub radius: f32,
    pub position: PointF,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutResult {
    pub archetype: Archetype,
    /// One entry per input object, same order as the input.
    pub placements: Vec<Placement>,
    pub relax: RelaxReport,
}

impl LayoutResult {
    pub fn position_of(&self, id: &str) -> Option<PointF> {
        self.placements
            .iter()
            .find(|p| p.id.0 == id)
            .map(|p| p.position)
    }

    pub fn positions(&self) -> HashMap<ObjectId, PointF> {
        self.placements
            .iter()
            .map(|p| (p.id.clone(), p.position))
            .collect()
    }
}

/// Build the working set: classify and size every object, seed it at the provisional point.
pub fn build_targets(objects: &[PlacedObject], cfg: &LayoutConfig) -> Vec<Target> {
    objects
        .iter()
        .enumerate()
        .map(|(i, obj)| {
            let category = Category::from_asset(&obj.asset);
            Target {
                id: TargetId(i),
                category,
                pos: cfg.provisional,
                radius: footprint_radius(category, obj.scale, cfg),
            }
        })
        .collect()
}

/// Arrange `objects` for the room described by `room_label`.
pub fn arrange(room_label: &str, objects: &[PlacedObject], cfg: &LayoutConfig) -> LayoutResult {
    let archetype = select_archetype(room_label, &cfg.archetype_rules);
    let mut targets = build_targets(objects, cfg);

    let groups = CategoryGroups::from_targets(&targets);
    recipe_for(archetype).place(&mut targets, &groups, cfg);

    let relax = relax_overlaps(&mut targets, cfg.gap, &cfg.relax);
    cfg.bounds.clamp_all(&mut targets);

    let placements = targets
        .iter()
        .map(|t| Placement {
            id: objects[t.id.0].id.clone(),
            category: t.category,
            radius: t.radius,
            position: t.pos,
        })
        .collect();

    LayoutResult { archetype, placements, relax }
}
