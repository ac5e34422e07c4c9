//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use tempfile::TempDir;
use triangle_layout::board::{Board, Component, Net, NetCode, Pad, Point};

#[path = "../../src/layout/led_fixture.rs"]
mod led_fixture;

pub use led_fixture::{led_board, GROUND, SUPPLY};

/// Helper to compare floats with tolerance.
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}

/// Creates a temporary directory for test isolation.
pub fn test_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}
