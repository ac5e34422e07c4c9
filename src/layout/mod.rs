//! Triangle placement and routing.
//!
//! A default-mode run walks the placements produced by
//! [`geometry::TriangleGeometry`] in order. For each one it:
//!
//! 1. moves the component into place,
//! 2. lets the [`router::SequentialRouter`] wire it to the previous component,
//! 3. on the first edge, adds supply and ground stubs.
//!
//! Once every component is placed the supply bus is added. All new copper
//! goes through [`trace::TraceCreator`].
//!
//! Every component, rail net, and mapped pad is checked before the first
//! component moves, so a run on an incomplete board fails without touching it.

pub mod geometry;
pub mod maintenance;
pub mod rails;
pub mod resolver;
pub mod router;
pub mod trace;

#[cfg(test)]
pub(crate) mod test_support;

use tracing::{debug, info};

use crate::board::Board;
use crate::config::{LayoutConfig, RoutingConfig};
use crate::error::{LayoutError, LayoutResult};

pub use geometry::{Edge, Placement, TriangleGeometry, MAX_SIDE};
pub use rails::RailRouter;
pub use router::{PadMap, SequentialRouter};
pub use trace::TraceCreator;

/// What a layout run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutReport {
    /// Components moved.
    pub placed: usize,
    /// Tracks between consecutive components.
    pub chain_tracks: usize,
    /// Supply stubs on the first edge.
    pub supply_stubs: usize,
    /// Ground stubs on the first edge.
    pub ground_stubs: usize,
    /// Supply bus tracks.
    pub bus_tracks: usize,
}

impl LayoutReport {
    /// Total tracks created.
    #[must_use]
    pub const fn total_tracks(&self) -> usize {
        self.chain_tracks + self.supply_stubs + self.ground_stubs + self.bus_tracks
    }
}

/// Places the triangle and routes it.
///
/// # Errors
///
/// Returns an error if the triangle side exceeds [`MAX_SIDE`], if a
/// component, rail net, mapped pad, or the copper layer is missing, or if a
/// trace cannot be added.
pub fn layout_triangle(
    board: &mut Board,
    layout: &LayoutConfig,
    routing: &RoutingConfig,
) -> LayoutResult<LayoutReport> {
    let geometry = TriangleGeometry::from_config(layout);
    let mut report = LayoutReport::default();

    let count = geometry
        .count()
        .filter(|_| geometry.side <= MAX_SIDE)
        .ok_or(LayoutError::SideOutOfRange {
            side: geometry.side,
            max: MAX_SIDE,
        })?;
    if count == 0 {
        info!("Triangle side is zero, nothing to place");
        return Ok(report);
    }

    let placements: Vec<Placement> = geometry.placements().collect();
    let references: Vec<String> = placements.iter().map(Placement::reference).collect();

    let pad_map = PadMap::from_config(&routing.pad_map);
    pad_map.validate(board, references.iter().map(String::as_str))?;
    let creator = TraceCreator::new(board, &routing.copper_layer, routing.track_width)?;
    let rails = RailRouter::new(board, routing)?;
    let mut router = SequentialRouter::new(pad_map);

    info!(
        components = placements.len(),
        side = geometry.side,
        spacing = geometry.spacing,
        "Laying out triangle"
    );

    for (placement, reference) in placements.iter().zip(&references) {
        debug!(
            "Placing {reference} on {} at {} orientation {}",
            placement.edge, placement.position, placement.orientation
        );
        board
            .component_mut(reference)?
            .place(placement.position, placement.orientation);
        report.placed += 1;

        report.chain_tracks += router.on_placed(board, &creator, reference)?;

        if placement.edge == Edge::First {
            let stubs = rails.route_stubs(board, &creator, reference)?;
            report.supply_stubs += stubs.supply;
            report.ground_stubs += stubs.ground;
        }
    }

    report.bus_tracks += rails.route_supply_bus(board, &creator, &geometry)?;

    info!(
        placed = report.placed,
        chain = report.chain_tracks,
        supply_stubs = report.supply_stubs,
        ground_stubs = report.ground_stubs,
        bus = report.bus_tracks,
        "Layout complete"
    );

    Ok(report)
}
