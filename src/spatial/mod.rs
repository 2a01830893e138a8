//! Spatial data structures and coordinate mapping
//!
//! This module contains spatial-related functionality including:
//! - Per-cell mask storage
//! - Pointer to cell and vertex mapping

/// Grid mask storage and bounds-checked access
pub mod grid;
/// Screen-space pointer mapping onto cells and vertices
pub mod pointer;

pub use grid::MaskGrid;
pub use pointer::PointerMapper;
