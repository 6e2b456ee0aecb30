//! Arrange requests as sent by the host application.
//!
//! The host posts JSON:
//!
//! ```json
//! {
//!   "room_label": "Living Room",
//!   "objects": [
//!     { "id": "node-3", "asset": "models/Couch.glb", "scale": [1.0, 1.0, 1.0] }
//!   ],
//!   "config": { "gap": 0.2 }
//! }
//! ```
//!
//! `scale` and `config` are optional. Unknown config fields keep their defaults.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::layout::{LayoutConfig, ObjectId, PlacedObject, Scale3};

#[derive(Debug, Clone, Deserialize)]
pub struct ObjectRequest {
    pub id: String,
    pub asset: String,
    #[serde(default = "unit_scale")]
    pub scale: [f32; 3],
}

fn unit_scale() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArrangeRequest {
    #[serde(default)]
    pub room_label: String,
    #[serde(default)]
    pub objects: Vec<ObjectRequest>,
    #[serde(default)]
    pub config: Option<LayoutConfig>,
}

impl ArrangeRequest {
    pub fn placed_objects(&self) -> Vec<PlacedObject> {
        self.objects
            .iter()
            .map(|o| PlacedObject {
                id: ObjectId(o.id.clone()),
                asset: o.asset.clone(),
                scale: Scale3 { x: o.scale[0], y: o.scale[1], z: o.scale[2] },
            })
            .collect()
    }

    pub fn layout_config(&self) -> LayoutConfig {
        self.config.clone().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    #[error("Invalid request at {line}:{col}: {msg}")]
    Json { line: usize, col: usize, msg: String },
    #[error("Duplicate object id '{0}'")]
    DuplicateId(String),
    #[error("Object '{0}' has a non-finite scale")]
    NonFiniteScale(String),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl RequestError {
    /// 1-based (line, column). Validation errors have no source position.
    pub fn location(&self) -> (usize, usize) {
        match self {
            RequestError::Json { line, col, .. } => (*line, *col),
            _ => (1, 1),
        }
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(e: serde_json::Error) -> Self {
        RequestError::Json {
            line: e.line().max(1),
            col: e.column().max(1),
            msg: e.to_string(),
        }
    }
}

pub fn parse_request(input: &str) -> Result<ArrangeRequest, RequestError> {
    let request: ArrangeRequest = serde_json::from_str(input)?;
    validate(&request)?;
    Ok(request)
}

fn validate(request: &ArrangeRequest) -> Result<(), RequestError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for o in &request.objects {
        if !seen.insert(o.id.as_str()) {
            return Err(RequestError::DuplicateId(o.id.clone()));
        }
        if o.scale.iter().any(|s| !s.is_finite()) {
            return Err(RequestError::NonFiniteScale(o.id.clone()));
        }
    }
    if let Some(cfg) = &request.config {
        validate_config(cfg)?;
    }
    Ok(())
}

fn validate_config(cfg: &LayoutConfig) -> Result<(), RequestError> {
    let invalid = |msg: String| Err(RequestError::InvalidConfig(msg));

    let radii = [
        ("radius_min", cfg.radius_min),
        ("radius_max", cfg.radius_max),
        ("base_radii.chair", cfg.base_radii.chair),
        ("base_radii.table", cfg.base_radii.table),
        ("base_radii.couch", cfg.base_radii.couch),
        ("base_radii.other", cfg.base_radii.other),
    ];
    for (name, r) in radii {
        if !r.is_finite() || r <= 0.0 {
            return invalid(format!("{name} must be a positive number, got {r}"));
        }
    }
    if cfg.radius_min > cfg.radius_max {
        return invalid(format!(
            "radius_min {} exceeds radius_max {}",
            cfg.radius_min, cfg.radius_max
        ));
    }

    let b = &cfg.bounds;
    if [b.min_x, b.max_x, b.min_z, b.max_z].iter().any(|v| !v.is_finite()) {
        return invalid("bounds must be finite".to_string());
    }
    if b.min_x > b.max_x || b.min_z > b.max_z {
        return invalid(format!(
            "bounds are inverted: x [{}, {}], z [{}, {}]",
            b.min_x, b.max_x, b.min_z, b.max_z
        ));
    }

    if !cfg.gap.is_finite() || cfg.gap < 0.0 {
        return invalid(format!("gap must be non-negative, got {}", cfg.gap));
    }
    let damping = cfg.relax.damping;
    if !(damping > 0.0 && damping <= 1.0) {
        return invalid(format!("relax.damping must be in (0, 1], got {damping}"));
    }
    let floor = cfg.relax.min_distance;
    if !floor.is_finite() || floor <= 0.0 {
        return invalid(format!("relax.min_distance must be positive, got {floor}"));
    }
    if !cfg.provisional.x.is_finite() || !cfg.provisional.z.is_finite() {
        return invalid("provisional must be finite".to_string());
    }
    Ok(())
}
