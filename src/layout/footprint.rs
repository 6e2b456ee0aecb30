// Footprint classification.
//
// Maps an asset identity (file name or path) to a furniture category and
// approximates its ground footprint as a circle whose radius scales with the
// object's current size.

use serde::{Deserialize, Serialize};

use super::LayoutConfig;

/// Furniture category, derived once from the asset identity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Couch,
    Chair,
    Table,
    Other,
}

impl Category {
    /// Case-insensitive substring match. Couch/sofa wins over chair, chair over table.
    pub fn from_asset(asset: &str) -> Self {
        let lower = asset.to_lowercase();
        if lower.contains("couch") || lower.contains("sofa") {
            Category::Couch
        } else if lower.contains("chair") {
            Category::Chair
        } else if lower.contains("table") {
            Category::Table
        } else {
            Category::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Couch => "couch",
            Category::Chair => "chair",
            Category::Table => "table",
            Category::Other => "other",
        }
    }
}

/// Base footprint radius per category, in meters, at scale 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseRadii {
    pub chair: f32,
    pub table: f32,
    pub couch: f32,
    pub other: f32,
}

impl Default for BaseRadii {
    fn default() -> Self {
        Self {
            chair: 0.33,
            table: 0.55,
            couch: 0.85,
            other: 0.45,
        }
    }
}

impl BaseRadii {
    pub fn get(&self, category: Category) -> f32 {
        match category {
            Category::Chair => self.chair,
            Category::Table => self.table,
            Category::Couch => self.couch,
            Category::Other => self.other,
        }
    }
}

/// Current scale of a placed object, per axis.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scale3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Default for Scale3 {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}

impl Scale3 {
    pub fn uniform(s: f32) -> Self {
        Self { x: s, y: s, z: s }
    }

    /// Mean of the ground-plane components. Height does not widen a footprint.
    pub fn planar_mean(&self) -> f32 {
        (self.x + self.z) / 2.0
    }
}

/// Effective footprint radius, clamped to `[cfg.radius_min, cfg.radius_max]`.
pub fn footprint_radius(category: Category, scale: Scale3, cfg: &LayoutConfig) -> f32 {
    let s = scale.planar_mean();
    // NaN would survive clamp()
    let s = if s.is_nan() { 1.0 } else { s };
    // max/min rather than clamp(): an inverted range must not panic
    (cfg.base_radii.get(category) * s).max(cfg.radius_min).min(cfg.radius_max)
}
