//! Maintenance operation tests.

mod common;

use common::{led_board, test_temp_dir, GROUND, SUPPLY};
use triangle_layout::board::{Board, Layer, Point, Track};
use triangle_layout::config::{LayoutConfig, RoutingConfig};
use triangle_layout::error::LayoutError;
use triangle_layout::layout::layout_triangle;
use triangle_layout::layout::maintenance::{
    delete_all_tracks, delete_short_tracks, prune_short_tracks, SHORT_TRACK_DELETION_ENABLED,
};

fn routed_board() -> Board {
    let mut board = led_board(48);
    layout_triangle(&mut board, &LayoutConfig::default(), &RoutingConfig::default()).unwrap();
    board
        .add_track(Track::via(Point::new(70.0, 70.0), 0.6, 0.3, GROUND))
        .unwrap();
    board
}

#[test]
fn delete_all_then_relayout_restores_routing() {
    let mut board = routed_board();
    let routed = board.tracks().len() - 1;

    assert_eq!(delete_all_tracks(&mut board), routed + 1);
    assert!(board.tracks().is_empty());

    let report =
        layout_triangle(&mut board, &LayoutConfig::default(), &RoutingConfig::default()).unwrap();
    assert_eq!(report.total_tracks(), routed);
}

#[test]
fn delete_all_persists() {
    let dir = test_temp_dir();
    let path = dir.path().join("triangle.board.json");
    routed_board().write(&path).unwrap();

    let mut board = Board::load(&path).unwrap();
    delete_all_tracks(&mut board);
    board.save(&path).unwrap();

    assert!(Board::load(&path).unwrap().tracks().is_empty());
}

#[test]
fn short_track_deletion_refuses_to_run() {
    assert!(!SHORT_TRACK_DELETION_ENABLED);
    let mut board = routed_board();
    let before = board.tracks().len();

    let err = delete_short_tracks(&mut board, 0.00254).unwrap_err();
    assert!(matches!(err, LayoutError::OperationDisabled { .. }));
    assert_eq!(board.tracks().len(), before);
}

#[test]
fn prune_never_removes_vias() {
    let mut board = routed_board();
    let p = Point::new(1.0, 1.0);
    board
        .add_track(Track::segment(p, p, 0.25, Layer::FrontCopper, SUPPLY))
        .unwrap();
    let vias_before = board.tracks().iter().filter(|t| t.is_via()).count();

    let threshold = 2.0;
    let removed = prune_short_tracks(&mut board, threshold);

    // The zero-length segment and all 32 rail stubs (1.5 mm) go.
    assert_eq!(removed, 33);
    assert_eq!(
        board.tracks().iter().filter(|t| t.is_via()).count(),
        vias_before
    );
    assert!(board
        .tracks()
        .iter()
        .filter(|t| !t.is_via())
        .all(|t| t.length() >= threshold));
}
