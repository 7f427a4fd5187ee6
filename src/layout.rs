//! Layout module for tracking UI component regions
//!
//! This module provides region tracking for position-aware mouse interactions.
//! The `LayoutRegions` struct records where fields, buttons and popups were
//! drawn in the last frame, and `target_at()` turns a screen position into
//! the `PointerTarget` a press landed on.

mod layout_regions;

pub use layout_hit_test::target_at;
pub use layout_regions::{LayoutRegions, PointerTarget, PopupRegion};
