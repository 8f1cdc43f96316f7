//! Color constants for the Kindred palette
//!
//! Warm, editorial matchmaking aesthetic: cream paper, ink text,
//! rose and gold accents.

#![allow(dead_code)]

// === PAPER (Backgrounds) ===
pub const CREAM: &str = "#faf6f1";
pub const PAPER: &str = "#ffffff";
pub const LINE: &str = "#e8e0d8";

// === INK (Text) ===
pub const INK: &str = "#2b2430";
pub const INK_SOFT: &str = "rgba(43, 36, 48, 0.68)";
pub const INK_MUTED: &str = "rgba(43, 36, 48, 0.45)";

// === ROSE (Primary accent, matches) ===
pub const ROSE: &str = "#b4536a";
pub const ROSE_DEEP: &str = "#933f56";
pub const ROSE_SOFT: &str = "#f3dde2";

// === GOLD (Premium, featured) ===
pub const GOLD: &str = "#b98a2e";
pub const GOLD_SOFT: &str = "#f5ead3";

// === SEMANTIC ===
pub const SAGE: &str = "#5d7d62";
pub const SAGE_SOFT: &str = "#e2ece4";
pub const AMBER: &str = "#b07a1f";
pub const AMBER_SOFT: &str = "#f6ecd8";
pub const DANGER: &str = "#a63d3d";
pub const DANGER_SOFT: &str = "#f4dddd";
pub const SLATE: &str = "#6b6474";
pub const SLATE_SOFT: &str = "#eceaef";
