//! Symmetry discovery algorithms.
//!
//! The pipeline runs sequencer → adjacency expander → dual BFS walker →
//! correspondence builder; [`symmetry::discover_symmetry`] wires the whole
//! chain together for one seam edge.

pub mod adjacency;
pub mod correspondence;
pub mod sequence;
pub mod symmetry;
pub mod walker;

pub use correspondence::build_correspondence;
pub use symmetry::discover_symmetry;
pub use walker::walk;
