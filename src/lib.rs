//! triangle-layout: places a triangle of LED driver footprints on a PCB and
//! routes their chain and supply traces.
//!
//! # Architecture
//!
//! - **Board**: components, pads, nets, and copper tracks loaded from a JSON
//!   board file and saved back with a backup of the previous file
//! - **Layout**: triangle geometry, the sequential pad router that chains
//!   consecutive components, and the rail router for supply/ground stubs
//! - **Maintenance**: bulk track removal
//!
//! # Modules
//!
//! - [`board`] — Board data model and file I/O
//! - [`config`] — Configuration loading and validation
//! - [`error`] — Error types
//! - [`layout`] — Placement, routing, and maintenance operations

pub mod board;
pub mod config;
pub mod error;
pub mod layout;
