//! Output types for the host application.
//!
//! These structs are serialized to JSON and handed back across the wasm
//! boundary. The host turns each (x, z) into a world anchor, keeping the
//! object's own height and rotation.

use serde::Serialize;

use crate::layout::{LayoutResult, Placement};

/// Final ground position of one object.
#[derive(Debug, Clone, Serialize)]
pub struct PlacementOutput {
    pub id: String,
    /// "couch", "chair", "table" or "other"
    pub category: String,
    pub x: f32,
    pub z: f32,
    /// Footprint radius used during layout
    pub radius: f32,
}

impl From<&Placement> for PlacementOutput {
    fn from(p: &Placement) -> Self {
        Self {
            id: p.id.0.clone(),
            category: p.category.as_str().to_string(),
            x: p.position.x,
            z: p.position.z,
            radius: p.radius,
        }
    }
}

/// Error information for the host's error toast
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub message: String,
    pub line: usize,   // 1-based line number
    pub column: usize, // 1-based column number
}

/// The combined response sent to the host
#[derive(Debug, Clone, Serialize)]
pub struct ArrangeOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archetype: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub placements: Vec<PlacementOutput>,
    /// Relaxation sweeps performed
    pub iterations: usize,
    /// False when the relaxation budget ran out with overlaps left
    pub converged: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl ArrangeOutput {
    pub fn from_result(result: &LayoutResult) -> Self {
        Self {
            archetype: Some(result.archetype.as_str().to_string()),
            placements: result.placements.iter().map(PlacementOutput::from).collect(),
            iterations: result.relax.iterations,
            converged: result.relax.converged,
            error: None,
        }
    }

    pub fn from_error(error: ErrorInfo) -> Self {
        Self {
            archetype: None,
            placements: vec![],
            iterations: 0,
            converged: false,
            error: Some(error),
        }
    }
}
