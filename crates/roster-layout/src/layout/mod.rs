//! Layout calculation modules for roster pagination
//!
//! This module handles the geometric estimates the paginator relies on:
//! - Size tier classification (how dense the card grid is)
//! - Card geometry (columns, card footprint, row pitch)

mod geometry;
mod tier;

pub use geometry::*;
pub use tier::*;
