//! Pad and net lookups used by the routers.
//!
//! Everything here is read-only. Resolved pads are owned values so callers
//! can keep them while mutating the board.

use crate::board::{Board, BoardError, BoardResult, Component, Net, NetCode, Point};

/// A pad with its absolute position and net.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPad {
    /// Owning component reference.
    pub reference: String,
    /// Pad name.
    pub name: String,
    /// Absolute board position.
    pub position: Point,
    /// Net code ([`NetCode::UNCONNECTED`] if none).
    pub net: NetCode,
    /// Net name, if the pad is on a known net.
    pub net_name: Option<String>,
}

/// Resolves every pad of `component`, in footprint order.
#[must_use]
pub fn resolve_pads(board: &Board, component: &Component) -> Vec<ResolvedPad> {
    component
        .pads
        .iter()
        .map(|pad| ResolvedPad {
            reference: component.reference.clone(),
            name: pad.name.clone(),
            position: component.pad_position(pad),
            net: pad.net,
            net_name: board.net(pad.net).map(|n| n.name.clone()),
        })
        .collect()
}

/// Returns true if any track record is already assigned to `net`.
#[must_use]
pub fn has_existing_trace(board: &Board, net: NetCode) -> bool {
    board.tracks_in_net(net).next().is_some()
}

/// Looks up a net that must exist.
///
/// # Errors
///
/// Returns [`BoardError::NetNotFound`] if no net has that name.
pub fn net_by_name<'a>(board: &'a Board, name: &str) -> BoardResult<&'a Net> {
    board
        .net_by_name(name)
        .ok_or_else(|| BoardError::net_not_found(name))
}
