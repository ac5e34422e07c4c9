//! The single place new copper traces are created.

use crate::board::{Board, BoardError, BoardResult, Layer, NetCode, Point, Track};

/// Endpoints closer than this (mm) are considered the same point.
pub const POINT_TOLERANCE: f64 = 1e-6;

/// Creates copper segments on a fixed layer with a fixed width.
#[derive(Debug, Clone, Copy)]
pub struct TraceCreator {
    layer: Layer,
    width: f64,
}

impl TraceCreator {
    /// Resolves the layer name through the board's layer table.
    ///
    /// # Errors
    ///
    /// Returns an error if the layer is unknown or not a copper layer.
    pub fn new(board: &Board, layer_name: &str, width: f64) -> BoardResult<Self> {
        let layer = board.layers().resolve(layer_name)?;
        if !layer.is_copper() {
            return Err(BoardError::invalid(format!(
                "traces must go on a copper layer, not {layer_name}"
            )));
        }
        Ok(Self { layer, width })
    }

    /// Layer new traces are placed on.
    #[must_use]
    pub const fn layer(&self) -> Layer {
        self.layer
    }

    /// Width of new traces.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Adds a segment from `start` to `end` on `net` and returns it.
    ///
    /// Zero-length segments are allowed.
    ///
    /// # Errors
    ///
    /// Returns an error if `net` is not on the board.
    pub fn create_trace(
        &self,
        board: &mut Board,
        start: Point,
        end: Point,
        net: NetCode,
    ) -> BoardResult<Track> {
        let track = Track::segment(start, end, self.width, self.layer, net);
        board.add_track(track.clone())?;

        let net_name = board.net(net).map_or("<unconnected>", |n| n.name.as_str());
        tracing::info!("Adding track from {start} to {end} on net {net_name}");

        Ok(track)
    }

    /// Returns true if a segment this creator would make already exists,
    /// in either direction.
    #[must_use]
    pub fn exists(&self, board: &Board, start: Point, end: Point, net: NetCode) -> bool {
        let same = |a: Point, b: Point| a.distance_to(b) < POINT_TOLERANCE;
        board.tracks_in_net(net).any(|t| {
            !t.is_via()
                && t.layer == self.layer
                && ((same(t.start, start) && same(t.end, end))
                    || (same(t.start, end) && same(t.end, start)))
        })
    }
}
