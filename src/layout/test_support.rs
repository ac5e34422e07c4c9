//! Board fixtures shared by the layout unit tests.

use crate::board::{Board, Component, Net, NetCode, Pad, Point};

#[path = "led_fixture.rs"]
mod led_fixture;

pub use led_fixture::{led_board, GROUND, SUPPLY};
