//! Automatic furniture layout for AR room scenes.
//!
//! Given a room label and the objects already placed in the scene, computes
//! non-overlapping ground positions that stay inside the room rectangle.

pub mod bridge;
pub mod layout;
pub mod output;
pub mod request;
pub mod wasm;

pub use bridge::{arrange_json, arrange_json_or_error};
pub use layout::{arrange, Archetype, Category, LayoutConfig, LayoutResult, PlacedObject, PointF, Scale3};
pub use request::{parse_request, ArrangeRequest, RequestError};
