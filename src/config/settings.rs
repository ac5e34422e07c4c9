//! Configuration structures for deserialisation.
//!
//! These structures map directly to the JSON configuration file format.
//! Every field has a default, so an empty object is a valid configuration.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::layout::MAX_SIDE;

/// Root configuration structure.
///
/// This is the top-level structure that matches the JSON config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Optional JSON schema reference (ignored during parsing).
    #[serde(rename = "$schema", default)]
    _schema: Option<String>,

    /// Optional comment field (ignored during parsing).
    #[serde(rename = "_comment", default)]
    _comment: Option<String>,

    /// Path to the board file. `--board` overrides it.
    #[serde(default)]
    pub board_path: Option<PathBuf>,

    /// Triangle geometry.
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Trace routing settings.
    #[serde(default)]
    pub routing: RoutingConfig,

    /// Maintenance operation settings.
    #[serde(default)]
    pub maintenance: MaintenanceConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any validation checks fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |message: String| Err(ConfigError::ValidationError { message });

        if self.layout.side > MAX_SIDE {
            return invalid(format!(
                "layout.side must be at most {MAX_SIDE}, got {}",
                self.layout.side
            ));
        }
        if !(self.layout.spacing.is_finite() && self.layout.spacing > 0.0) {
            return invalid(format!(
                "layout.spacing must be a positive number, got {}",
                self.layout.spacing
            ));
        }
        if !(self.layout.start_x.is_finite() && self.layout.start_y.is_finite()) {
            return invalid("layout start coordinates must be finite".to_string());
        }
        if !(self.routing.track_width.is_finite() && self.routing.track_width > 0.0) {
            return invalid(format!(
                "routing.track_width must be a positive number, got {}",
                self.routing.track_width
            ));
        }
        for (name, value) in [
            ("routing.stub_length", self.routing.stub_length),
            ("routing.bus_offset", self.routing.bus_offset),
            ("routing.bus_inset", self.routing.bus_inset),
            (
                "maintenance.short_track_threshold",
                self.maintenance.short_track_threshold,
            ),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return invalid(format!("{name} must be zero or positive, got {value}"));
            }
        }
        if self.routing.pad_map.is_empty() {
            return invalid("routing.pad_map must not be empty".to_string());
        }
        if self.routing.supply_net.is_empty() || self.routing.ground_net.is_empty() {
            return invalid("routing supply and ground net names must not be empty".to_string());
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            return invalid(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Triangle placement configuration.
///
/// `side` is an integer component count; fractional values are rejected
/// when the file is parsed.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// X of the first component on the horizontal edge, in mm.
    #[serde(default = "default_start")]
    pub start_x: f64,

    /// Y of the horizontal edge, in mm.
    #[serde(default = "default_start")]
    pub start_y: f64,

    /// Components per triangle edge.
    #[serde(default = "default_side")]
    pub side: usize,

    /// Distance between neighbouring components along the horizontal edge, in mm.
    #[serde(default = "default_spacing")]
    pub spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            start_x: default_start(),
            start_y: default_start(),
            side: default_side(),
            spacing: default_spacing(),
        }
    }
}

const fn default_start() -> f64 {
    50.0
}

const fn default_side() -> usize {
    16
}

const fn default_spacing() -> f64 {
    4.0
}

/// Routing configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoutingConfig {
    /// Pad of the previous component → pad of the next component.
    #[serde(default = "default_pad_map")]
    pub pad_map: IndexMap<String, String>,

    /// Supply rail net name.
    #[serde(default = "default_supply_net")]
    pub supply_net: String,

    /// Ground rail net name.
    #[serde(default = "default_ground_net")]
    pub ground_net: String,

    /// Layer every new trace is placed on.
    #[serde(default = "default_copper_layer")]
    pub copper_layer: String,

    /// Width of every new trace in mm.
    #[serde(default = "default_track_width")]
    pub track_width: f64,

    /// Length of the vertical supply/ground stubs in mm.
    #[serde(default = "default_stub_length")]
    pub stub_length: f64,

    /// Vertical offset of the supply bus below the first edge, in mm.
    #[serde(default = "default_bus_offset")]
    pub bus_offset: f64,

    /// How far the supply bus stops short of each end of the first edge, in mm.
    #[serde(default = "default_bus_inset")]
    pub bus_inset: f64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            pad_map: default_pad_map(),
            supply_net: default_supply_net(),
            ground_net: default_ground_net(),
            copper_layer: default_copper_layer(),
            track_width: default_track_width(),
            stub_length: default_stub_length(),
            bus_offset: default_bus_offset(),
            bus_inset: default_bus_inset(),
        }
    }
}

// Clock out → clock in, data out → data in.
fn default_pad_map() -> IndexMap<String, String> {
    [("2", "5"), ("3", "4")]
        .into_iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect()
}

fn default_supply_net() -> String {
    "+5V".to_string()
}

fn default_ground_net() -> String {
    "GND".to_string()
}

fn default_copper_layer() -> String {
    "F.Cu".to_string()
}

const fn default_track_width() -> f64 {
    0.25
}

const fn default_stub_length() -> f64 {
    1.5
}

const fn default_bus_offset() -> f64 {
    2.5
}

const fn default_bus_inset() -> f64 {
    4.5
}

/// Maintenance configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MaintenanceConfig {
    /// Segments shorter than this (mm) count as short. 100 µin by default.
    #[serde(default = "default_short_track_threshold")]
    pub short_track_threshold: f64,
}

impl Default for MaintenanceConfig {
    fn default() -> Self {
        Self {
            short_track_threshold: default_short_track_threshold(),
        }
    }
}

const fn default_short_track_threshold() -> f64 {
    0.00254
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
