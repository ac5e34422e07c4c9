//! Board primitive types.
//!
//! These types represent the items a board file contains: components with
//! their pads, nets, and copper tracks (segments and vias).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::layers::Layer;

/// A 2D point in board coordinates (mm, Y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// X position in mm.
    pub x: f64,
    /// Y position in mm.
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point moved by `(dx, dy)`.
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Rotates this point about the origin by an orientation in tenths of a degree.
    ///
    /// Positive angles turn counter-clockwise as seen on screen, which with a
    /// downward Y axis means `x' = x·cos + y·sin`, `y' = −x·sin + y·cos`.
    #[must_use]
    pub fn rotated(self, orientation: i32) -> Self {
        if orientation.rem_euclid(3600) == 0 {
            return self;
        }
        let theta = (f64::from(orientation) / 10.0).to_radians();
        let (sin, cos) = theta.sin_cos();
        Self::new(
            self.x.mul_add(cos, self.y * sin),
            (-self.x).mul_add(sin, self.y * cos),
        )
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}

/// Numeric net code. Code 0 is the unconnected net.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetCode(pub u32);

impl NetCode {
    /// The net pads belong to when they are not connected to anything.
    pub const UNCONNECTED: Self = Self(0);

    /// Returns true for the unconnected net.
    #[must_use]
    pub const fn is_unconnected(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for NetCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named electrical net.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Net {
    /// Net code, unique on the board.
    pub code: NetCode,
    /// Net name, unique on the board (e.g. "+5V").
    pub name: String,
}

impl Net {
    /// Creates a new net.
    #[must_use]
    pub fn new(code: u32, name: impl Into<String>) -> Self {
        Self {
            code: NetCode(code),
            name: name.into(),
        }
    }
}

/// A component pad.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Pad {
    /// Pad name (e.g., "1", "2"), unique within its component.
    pub name: String,

    /// Position relative to the component origin, before rotation.
    pub offset: Point,

    /// Net the pad is connected to.
    #[serde(default)]
    pub net: NetCode,
}

impl Pad {
    /// Creates a new pad.
    #[must_use]
    pub fn new(name: impl Into<String>, offset: Point, net: NetCode) -> Self {
        Self {
            name: name.into(),
            offset,
            net,
        }
    }
}

/// A placed footprint instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Component {
    /// Reference designator (e.g., "D0"), unique on the board.
    pub reference: String,

    /// Origin position in mm.
    #[serde(default)]
    pub position: Point,

    /// Orientation in tenths of a degree.
    #[serde(default)]
    pub orientation: i32,

    /// Pads in footprint order.
    #[serde(default)]
    pub pads: Vec<Pad>,
}

impl Component {
    /// Creates a component at the origin with no pads.
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            position: Point::default(),
            orientation: 0,
            pads: Vec::new(),
        }
    }

    /// Adds a pad to the component.
    pub fn add_pad(&mut self, pad: Pad) {
        self.pads.push(pad);
    }

    /// Moves and rotates the component.
    pub fn place(&mut self, position: Point, orientation: i32) {
        self.position = position;
        self.orientation = orientation;
    }

    /// Finds a pad by name.
    #[must_use]
    pub fn pad(&self, name: &str) -> Option<&Pad> {
        self.pads.iter().find(|p| p.name == name)
    }

    /// Absolute board position of one of this component's pads.
    #[must_use]
    pub fn pad_position(&self, pad: &Pad) -> Point {
        let rotated = pad.offset.rotated(self.orientation);
        self.position.offset(rotated.x, rotated.y)
    }
}

/// What a track record represents.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TrackKind {
    /// A straight copper segment between two points.
    #[default]
    Segment,
    /// A plated hole; start and end coincide.
    Via {
        /// Drill diameter in mm.
        drill: f64,
    },
}

/// A copper track record on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Track {
    /// Stable identifier.
    pub id: Uuid,
    /// Start point in mm.
    pub start: Point,
    /// End point in mm.
    pub end: Point,
    /// Width in mm (via diameter for vias).
    pub width: f64,
    /// Copper layer.
    pub layer: Layer,
    /// Owning net.
    pub net: NetCode,
    /// Segment or via.
    #[serde(default)]
    pub kind: TrackKind,
}

impl Track {
    /// Creates a new copper segment.
    #[must_use]
    pub fn segment(start: Point, end: Point, width: f64, layer: Layer, net: NetCode) -> Self {
        Self {
            id: Uuid::new_v4(),
            start,
            end,
            width,
            layer,
            net,
            kind: TrackKind::Segment,
        }
    }

    /// Creates a new via at `at`.
    #[must_use]
    pub fn via(at: Point, diameter: f64, drill: f64, net: NetCode) -> Self {
        Self {
            id: Uuid::new_v4(),
            start: at,
            end: at,
            width: diameter,
            layer: Layer::FrontCopper,
            net,
            kind: TrackKind::Via { drill },
        }
    }

    /// Euclidean length between the endpoints.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance_to(self.end)
    }

    /// Returns true if this record is a via rather than a segment.
    #[must_use]
    pub const fn is_via(&self) -> bool {
        matches!(self.kind, TrackKind::Via { .. })
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TrackKind::Segment => write!(
                f,
                "segment {} -> {} on {} net {}",
                self.start,
                self.end,
                self.layer.as_str(),
                self.net
            ),
            TrackKind::Via { drill } => {
                write!(f, "via at {} drill {drill} net {}", self.start, self.net)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn rotation_by_zero_is_identity() {
        let p = Point::new(1.5, -0.25);
        assert_eq!(p.rotated(0), p);
        assert_eq!(p.rotated(3600), p);
    }

    #[test]
    fn rotation_half_turn_negates() {
        let p = Point::new(1.0, 2.0).rotated(1800);
        assert!(approx_eq(p.x, -1.0));
        assert!(approx_eq(p.y, -2.0));
    }

    #[test]
    fn rotation_quarter_turn_is_counter_clockwise_on_screen() {
        // +X rotated 90° ends up pointing up the screen, i.e. negative Y.
        let p = Point::new(1.0, 0.0).rotated(900);
        assert!(approx_eq(p.x, 0.0));
        assert!(approx_eq(p.y, -1.0));
    }

    #[test]
    fn pad_position_follows_component() {
        let mut c = Component::new("D0");
        c.add_pad(Pad::new("1", Point::new(0.5, 0.0), NetCode(1)));
        c.place(Point::new(10.0, 20.0), 1800);
        let pos = c.pad_position(c.pad("1").unwrap());
        assert!(approx_eq(pos.x, 9.5));
        assert!(approx_eq(pos.y, 20.0));
    }

    #[test]
    fn track_length_and_kind() {
        let t = Track::segment(
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            0.25,
            Layer::FrontCopper,
            NetCode(2),
        );
        assert!(approx_eq(t.length(), 5.0));
        assert!(!t.is_via());

        let v = Track::via(Point::new(1.0, 1.0), 0.6, 0.3, NetCode(2));
        assert!(v.is_via());
        assert!(approx_eq(v.length(), 0.0));
    }

    #[test]
    fn unconnected_net_code() {
        assert!(NetCode::UNCONNECTED.is_unconnected());
        assert!(!NetCode(3).is_unconnected());
    }
}
