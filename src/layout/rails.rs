//! Supply and ground rail routing.
//!
//! Every supply pad on the first edge gets a short stub pointing down
//! (`+y`) and every ground pad a stub pointing up (`−y`). One bus segment
//! then runs along the first edge on the supply net, joining the supply
//! stubs. Ground has no bus.

use tracing::debug;

use super::geometry::TriangleGeometry;
use super::resolver::{net_by_name, resolve_pads};
use super::trace::TraceCreator;
use crate::board::{Board, BoardResult, NetCode, Point};
use crate::config::RoutingConfig;

/// Number of stubs created for one component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StubCount {
    /// Stubs on the supply net.
    pub supply: usize,
    /// Stubs on the ground net.
    pub ground: usize,
}

/// Routes supply/ground stubs and the supply bus.
#[derive(Debug, Clone)]
pub struct RailRouter {
    supply: NetCode,
    ground: NetCode,
    stub_length: f64,
    bus_offset: f64,
    bus_inset: f64,
}

impl RailRouter {
    /// Resolves both rail nets by name.
    ///
    /// # Errors
    ///
    /// Returns [`crate::board::BoardError::NetNotFound`] if either rail net is
    /// missing from the board.
    pub fn new(board: &Board, config: &RoutingConfig) -> BoardResult<Self> {
        Ok(Self {
            supply: net_by_name(board, &config.supply_net)?.code,
            ground: net_by_name(board, &config.ground_net)?.code,
            stub_length: config.stub_length,
            bus_offset: config.bus_offset,
            bus_inset: config.bus_inset,
        })
    }

    /// Supply net code.
    #[must_use]
    pub const fn supply(&self) -> NetCode {
        self.supply
    }

    /// Ground net code.
    #[must_use]
    pub const fn ground(&self) -> NetCode {
        self.ground
    }

    /// Adds the rail stubs for one component.
    ///
    /// # Errors
    ///
    /// Returns an error if the component is missing.
    pub fn route_stubs(
        &self,
        board: &mut Board,
        creator: &TraceCreator,
        reference: &str,
    ) -> BoardResult<StubCount> {
        let pads = resolve_pads(board, board.component(reference)?);
        let mut count = StubCount::default();

        for pad in pads {
            let dy = if pad.net == self.supply {
                self.stub_length
            } else if pad.net == self.ground {
                -self.stub_length
            } else {
                continue;
            };

            let end = pad.position.offset(0.0, dy);
            if self.add_once(board, creator, pad.position, end, pad.net)? {
                if pad.net == self.supply {
                    count.supply += 1;
                } else {
                    count.ground += 1;
                }
            }
        }

        Ok(count)
    }

    /// Adds the supply bus along the first edge.
    ///
    /// Returns the number of tracks created (0 if it already exists).
    ///
    /// # Errors
    ///
    /// Returns an error if the supply net is no longer on the board.
    pub fn route_supply_bus(
        &self,
        board: &mut Board,
        creator: &TraceCreator,
        geometry: &TriangleGeometry,
    ) -> BoardResult<usize> {
        let y = geometry.start.y + self.bus_offset;
        let start = Point::new(geometry.start.x + self.bus_inset, y);
        let end = Point::new(
            geometry.start.x + geometry.edge_length() - self.bus_inset,
            y,
        );
        let added = self.add_once(board, creator, start, end, self.supply)?;
        Ok(usize::from(added))
    }

    fn add_once(
        &self,
        board: &mut Board,
        creator: &TraceCreator,
        start: Point,
        end: Point,
        net: NetCode,
    ) -> BoardResult<bool> {
        if creator.exists(board, start, end, net) {
            debug!("Rail track from {start} to {end} already present");
            return Ok(false);
        }
        creator.create_trace(board, start, end, net)?;
        Ok(true)
    }
}
