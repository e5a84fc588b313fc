//! Force-directed graph component and its default configuration.

mod component;
mod error;
pub mod options;
mod render;
pub mod scale;
mod state;
mod svg;
mod types;

pub use component::ForceGraphCanvas;
pub use error::OptionsError;
pub use options::{GraphConfig, Offset, RenderOptions, Selection, Size, defaults};
pub use state::SelectionState;
pub use types::{GraphData, GraphLink, GraphNode};
