//! Bulk track removal.

use tracing::info;
use uuid::Uuid;

use crate::board::Board;
use crate::error::{LayoutError, LayoutResult};

/// Short-track deletion stays off until it has been checked against boards
/// that carry vias. Flip only together with the CLI help text.
pub const SHORT_TRACK_DELETION_ENABLED: bool = false;

/// Removes every track record from the board, vias included.
///
/// Returns the number of records removed.
pub fn delete_all_tracks(board: &mut Board) -> usize {
    let removed = board.take_tracks();
    for track in &removed {
        info!("Deleting track {track}");
    }
    removed.len()
}

/// Removes segments shorter than `threshold` (mm). Vias are never removed.
///
/// Returns the number of segments removed.
pub fn prune_short_tracks(board: &mut Board, threshold: f64) -> usize {
    let short: Vec<Uuid> = board
        .tracks()
        .iter()
        .filter(|t| !t.is_via() && t.length() < threshold)
        .map(|t| t.id)
        .collect();

    for id in &short {
        if let Some(track) = board.remove_track(*id) {
            info!(length = track.length(), "Deleting track of short length {track}");
        }
    }
    short.len()
}

/// Fails unless short-track deletion is enabled.
///
/// # Errors
///
/// Returns [`LayoutError::OperationDisabled`] while
/// [`SHORT_TRACK_DELETION_ENABLED`] is off.
pub const fn check_short_track_deletion() -> LayoutResult<()> {
    if SHORT_TRACK_DELETION_ENABLED {
        Ok(())
    } else {
        Err(LayoutError::OperationDisabled {
            operation: "short trace deletion",
            reason: "it has not been verified on boards with vias",
        })
    }
}

/// Short-track deletion as exposed to the command line.
///
/// # Errors
///
/// Returns [`LayoutError::OperationDisabled`] while
/// [`SHORT_TRACK_DELETION_ENABLED`] is off; the board is left untouched.
pub fn delete_short_tracks(board: &mut Board, threshold: f64) -> LayoutResult<usize> {
    check_short_track_deletion()?;
    Ok(prune_short_tracks(board, threshold))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Layer, Point, Track};
    use crate::layout::test_support::{led_board, GROUND, SUPPLY};

    fn segment(x1: f64, y1: f64, x2: f64, y2: f64) -> Track {
        Track::segment(
            Point::new(x1, y1),
            Point::new(x2, y2),
            0.25,
            Layer::FrontCopper,
            SUPPLY,
        )
    }

    fn populated_board() -> Board {
        let mut board = led_board(1);
        board.add_track(segment(0.0, 0.0, 10.0, 0.0)).unwrap();
        board.add_track(segment(5.0, 5.0, 5.0, 5.0)).unwrap();
        board.add_track(segment(1.0, 1.0, 1.001, 1.0)).unwrap();
        board
            .add_track(Track::via(Point::new(2.0, 2.0), 0.6, 0.3, GROUND))
            .unwrap();
        board
    }

    #[test]
    fn delete_all_empties_board() {
        let mut board = populated_board();
        assert_eq!(delete_all_tracks(&mut board), 4);
        assert!(board.tracks().is_empty());
        assert_eq!(delete_all_tracks(&mut board), 0);
    }

    #[test]
    fn prune_keeps_long_segments_and_vias() {
        let mut board = populated_board();
        let threshold = 0.01;
        assert_eq!(prune_short_tracks(&mut board, threshold), 2);
        assert_eq!(board.tracks().len(), 2);
        assert!(board
            .tracks()
            .iter()
            .all(|t| t.is_via() || t.length() >= threshold));
        assert_eq!(board.tracks().iter().filter(|t| t.is_via()).count(), 1);
    }

    #[test]
    fn short_deletion_is_disabled() {
        let mut board = populated_board();
        let err = delete_short_tracks(&mut board, 0.01).unwrap_err();
        assert!(matches!(err, LayoutError::OperationDisabled { .. }));
        assert!(err.to_string().contains("disabled"));
        assert_eq!(board.tracks().len(), 4);
    }
}
