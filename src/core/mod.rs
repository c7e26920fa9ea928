//! Core module - Knowledge catalog
//!
//! Static curriculum data, the indexed catalog over it, and the per-point
//! lookup tables (diagrams, hints).

pub mod catalog;
pub mod curriculum;
pub mod diagram;
pub mod hints;
pub mod knowledge;
