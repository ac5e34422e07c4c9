//! Triangle placement geometry.
//!
//! Components are laid out along the three edges of a triangle whose first
//! edge is horizontal with length `side · spacing` and whose other two edges
//! have equal length, so the apex sits `height` below the first edge:
//!
//! ```text
//!   D0 ─ D1 ─ … ─ D(side-1)          edge 1, orientation 180°
//!     ╲                 ╱
//!  edge 3, 300°    edge 2, 60°
//!         ╲         ╱
//!            apex
//! ```
//!
//! Edge 2 walks from the far end of edge 1 towards the apex and edge 3 walks
//! from the apex back towards the start, so consecutive indices are always
//! neighbours.

use std::fmt;

use crate::board::Point;
use crate::config::LayoutConfig;

/// Reference designator prefix of the laid-out components.
pub const REFERENCE_PREFIX: &str = "D";

/// Most components a triangle edge may carry.
pub const MAX_SIDE: usize = 1000;

/// Returns the reference designator for a component index (`D0`, `D1`, …).
#[must_use]
pub fn reference_for(index: usize) -> String {
    format!("{REFERENCE_PREFIX}{index}")
}

/// One of the three triangle edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// The horizontal edge.
    First,
    /// From the end of the first edge down to the apex.
    Second,
    /// From the apex back up towards the start.
    Third,
}

impl Edge {
    /// Component orientation on this edge, in tenths of a degree.
    #[must_use]
    pub const fn orientation(self) -> i32 {
        match self {
            Self::First => 1800,
            Self::Second => 600,
            Self::Third => 3000,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
        };
        write!(f, "edge {n}")
    }
}

/// Where one component goes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Component index in placement order.
    pub index: usize,
    /// Edge the component sits on.
    pub edge: Edge,
    /// Index along that edge.
    pub step: usize,
    /// Component origin.
    pub position: Point,
    /// Orientation in tenths of a degree.
    pub orientation: i32,
}

impl Placement {
    /// Reference designator of the placed component.
    #[must_use]
    pub fn reference(&self) -> String {
        reference_for(self.index)
    }
}

/// Triangle dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleGeometry {
    /// Position of the first component.
    pub start: Point,
    /// Components per edge.
    pub side: usize,
    /// Spacing between components along the first edge.
    pub spacing: f64,
}

impl TriangleGeometry {
    /// Creates a new geometry.
    #[must_use]
    pub const fn new(start: Point, side: usize, spacing: f64) -> Self {
        Self {
            start,
            side,
            spacing,
        }
    }

    /// Creates a geometry from the layout configuration.
    #[must_use]
    pub const fn from_config(config: &LayoutConfig) -> Self {
        Self::new(
            Point::new(config.start_x, config.start_y),
            config.side,
            config.spacing,
        )
    }

    #[allow(clippy::cast_precision_loss)] // component counts are tiny
    fn side_f64(&self) -> f64 {
        self.side as f64
    }

    /// Length of the horizontal first edge.
    #[must_use]
    pub fn edge_length(&self) -> f64 {
        self.side_f64() * self.spacing
    }

    /// Distance from the first edge to the apex.
    #[must_use]
    pub fn height(&self) -> f64 {
        let base = self.edge_length();
        let half = base / 2.0;
        base.mul_add(base, -(half * half)).sqrt()
    }

    /// Total number of components placed, or `None` if it does not fit a `usize`.
    #[must_use]
    pub const fn count(&self) -> Option<usize> {
        self.side.checked_mul(3)
    }

    /// Computes the placement for component `index`, or `None` past the end.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // component counts are tiny
    pub fn placement(&self, index: usize) -> Option<Placement> {
        if index >= self.count()? {
            return None;
        }

        let side = self.side_f64();
        let step = index % self.side;
        let i = step as f64;
        let (edge, x, y) = match index / self.side {
            0 => (Edge::First, self.spacing.mul_add(i, self.start.x), self.start.y),
            1 => (
                Edge::Second,
                self.start.x + side * self.spacing - self.spacing * i / 2.0,
                self.start.y + self.height() / side * i,
            ),
            _ => (
                Edge::Third,
                self.start.x + side / 2.0 * self.spacing - self.spacing * i / 2.0,
                self.start.y + self.height() - self.height() / side * i,
            ),
        };

        Some(Placement {
            index,
            edge,
            step,
            position: Point::new(x, y),
            orientation: edge.orientation(),
        })
    }

    /// Iterates every placement in order.
    pub fn placements(&self) -> impl Iterator<Item = Placement> + '_ {
        (0..self.count().unwrap_or(0)).filter_map(|index| self.placement(index))
    }
}
