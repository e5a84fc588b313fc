//! Reusable UI components.

pub mod force_graph;
