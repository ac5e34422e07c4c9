//! End-to-end layout tests on a full 48-component triangle.

mod common;

use common::{approx_eq, led_board, test_temp_dir, GROUND, SUPPLY};
use triangle_layout::board::{Board, Layer, Point};
use triangle_layout::config::{LayoutConfig, RoutingConfig};
use triangle_layout::layout::{layout_triangle, TriangleGeometry};

const COMPONENTS: usize = 48;
const COORD_TOLERANCE: f64 = 1e-6;

fn run(board: &mut Board) -> triangle_layout::layout::LayoutReport {
    layout_triangle(board, &LayoutConfig::default(), &RoutingConfig::default())
        .expect("layout should succeed")
}

#[test]
fn default_layout_creates_expected_tracks() {
    let mut board = led_board(COMPONENTS);
    let report = run(&mut board);

    assert_eq!(report.placed, COMPONENTS);
    // 47 consecutive pairs, clock and data each.
    assert_eq!(report.chain_tracks, 2 * (COMPONENTS - 1));
    assert_eq!(report.supply_stubs, 16);
    assert_eq!(report.ground_stubs, 16);
    assert_eq!(report.bus_tracks, 1);
    assert_eq!(board.tracks().len(), 94 + 16 + 16 + 1);

    // Supply carries 16 stubs and the bus, ground only its stubs.
    assert_eq!(board.tracks_in_net(SUPPLY).count(), 17);
    assert_eq!(board.tracks_in_net(GROUND).count(), 16);

    assert!(board
        .tracks()
        .iter()
        .all(|t| t.layer == Layer::FrontCopper && approx_eq(t.width, 0.25, 1e-12)));
}

#[test]
fn components_follow_triangle_edges() {
    let mut board = led_board(COMPONENTS);
    run(&mut board);

    let geometry = TriangleGeometry::from_config(&LayoutConfig::default());
    for placement in geometry.placements() {
        let c = board.component(&placement.reference()).unwrap();
        assert_eq!(c.position, placement.position);
        assert_eq!(c.orientation, placement.orientation);
    }

    let orientation = |r: &str| board.component(r).unwrap().orientation;
    assert_eq!(orientation("D0"), 1800);
    assert_eq!(orientation("D15"), 1800);
    assert_eq!(orientation("D16"), 600);
    assert_eq!(orientation("D31"), 600);
    assert_eq!(orientation("D32"), 3000);
    assert_eq!(orientation("D47"), 3000);
}

#[test]
fn chain_tracks_join_mapped_pads() {
    let mut board = led_board(COMPONENTS);
    run(&mut board);

    for n in 0..COMPONENTS - 1 {
        let prev = board.component(&format!("D{n}")).unwrap();
        let next = board.component(&format!("D{}", n + 1)).unwrap();
        for (net_name, from, to) in [(format!("CK{n}"), "2", "5"), (format!("SD{n}"), "3", "4")] {
            let net = board.net_by_name(&net_name).unwrap().code;
            let tracks: Vec<_> = board.tracks_in_net(net).collect();
            assert_eq!(tracks.len(), 1, "net {net_name}");
            assert_eq!(tracks[0].start, prev.pad_position(prev.pad(from).unwrap()));
            assert_eq!(tracks[0].end, next.pad_position(next.pad(to).unwrap()));
        }
    }

    // Nothing feeds D0 and nothing follows D47.
    for name in ["CKI", "SDI", "CK47", "SD47"] {
        let net = board.net_by_name(name).unwrap().code;
        assert_eq!(board.tracks_in_net(net).count(), 0, "net {name}");
    }
}

#[test]
fn first_edge_stubs_leave_pads_vertically() {
    let mut board = led_board(COMPONENTS);
    run(&mut board);

    for n in 0..16 {
        let c = board.component(&format!("D{n}")).unwrap();
        let supply = c.pad_position(c.pad("1").unwrap());
        let ground = c.pad_position(c.pad("6").unwrap());

        assert!(board.tracks_in_net(SUPPLY).any(|t| t.start == supply
            && t.end == Point::new(supply.x, supply.y + 1.5)));
        assert!(board.tracks_in_net(GROUND).any(|t| t.start == ground
            && t.end == Point::new(ground.x, ground.y - 1.5)));
    }

    // No stubs beyond the first edge.
    let d16 = board.component("D16").unwrap();
    let pad = d16.pad_position(d16.pad("1").unwrap());
    assert!(!board.tracks_in_net(SUPPLY).any(|t| t.start == pad));
}

#[test]
fn rerun_is_idempotent() {
    let mut board = led_board(COMPONENTS);
    run(&mut board);
    let before = board.tracks().len();

    let report = run(&mut board);
    assert_eq!(report.placed, COMPONENTS);
    assert_eq!(report.total_tracks(), 0);
    assert_eq!(board.tracks().len(), before);
}

#[test]
fn rerun_after_reload_is_idempotent() {
    let dir = test_temp_dir();
    let path = dir.path().join("triangle.board.json");

    let mut board = led_board(COMPONENTS);
    run(&mut board);
    board.save(&path).unwrap();

    let mut reloaded = Board::load(&path).unwrap();
    let report = run(&mut reloaded);
    assert_eq!(report.total_tracks(), 0);
    assert_eq!(reloaded.tracks().len(), board.tracks().len());
}

#[test]
fn missing_component_is_fatal() {
    let mut board = led_board(COMPONENTS - 1);
    let err = layout_triangle(&mut board, &LayoutConfig::default(), &RoutingConfig::default())
        .unwrap_err();
    assert!(err.to_string().contains("D47"));
    assert!(board.tracks().is_empty());
}

#[test]
fn missing_rail_net_is_fatal() {
    let mut board = led_board(COMPONENTS);
    let routing = RoutingConfig {
        supply_net: "+3V3".to_string(),
        ..RoutingConfig::default()
    };
    let err = layout_triangle(&mut board, &LayoutConfig::default(), &routing).unwrap_err();
    assert!(err.to_string().contains("+3V3"));
    assert!(board.tracks().is_empty());
}

#[test]
fn custom_geometry_moves_bus() {
    let mut board = led_board(12);
    let layout = LayoutConfig {
        start_x: 10.0,
        start_y: 20.0,
        side: 4,
        spacing: 5.0,
    };
    let report = layout_triangle(&mut board, &layout, &RoutingConfig::default()).unwrap();
    assert_eq!(report.chain_tracks, 22);
    assert_eq!(report.supply_stubs, 4);

    let bus = board
        .tracks_in_net(SUPPLY)
        .find(|t| approx_eq(t.start.y, 22.5, COORD_TOLERANCE) && t.length() > 5.0)
        .expect("supply bus");
    assert!(approx_eq(bus.start.x, 14.5, COORD_TOLERANCE));
    assert!(approx_eq(bus.end.x, 25.5, COORD_TOLERANCE));
}
