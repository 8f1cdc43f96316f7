//! Theme for the Kindred desktop app

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
