//! LED-chain board fixture, shared by the unit and integration tests.
//!
//! The including module brings the board types into scope.

use super::{Board, Component, Net, NetCode, Pad, Point};

pub const SUPPLY: NetCode = NetCode(1);
pub const GROUND: NetCode = NetCode(2);

/// Builds a board with `count` chained LED drivers `D0..D(count-1)`, all at
/// the origin and with no tracks.
///
/// Pads: 1 = +5V, 2 = clock out, 3 = data out, 4 = data in, 5 = clock in,
/// 6 = GND. Clock/data out of `Dn` share a net with clock/data in of `Dn+1`.
pub fn led_board(count: usize) -> Board {
    let mut board = Board::new();
    board.add_net(Net::new(SUPPLY.0, "+5V")).unwrap();
    board.add_net(Net::new(GROUND.0, "GND")).unwrap();
    board.add_net(Net::new(3, "CKI")).unwrap();
    board.add_net(Net::new(4, "SDI")).unwrap();

    let mut next_code = 5;
    let mut clock_in = NetCode(3);
    let mut data_in = NetCode(4);
    for n in 0..count {
        let clock_out = NetCode(next_code);
        let data_out = NetCode(next_code + 1);
        board.add_net(Net::new(clock_out.0, format!("CK{n}"))).unwrap();
        board.add_net(Net::new(data_out.0, format!("SD{n}"))).unwrap();
        next_code += 2;

        let mut c = Component::new(format!("D{n}"));
        c.add_pad(Pad::new("1", Point::new(-0.55, -0.5), SUPPLY));
        c.add_pad(Pad::new("2", Point::new(-0.55, 0.0), clock_out));
        c.add_pad(Pad::new("3", Point::new(-0.55, 0.5), data_out));
        c.add_pad(Pad::new("4", Point::new(0.55, 0.5), data_in));
        c.add_pad(Pad::new("5", Point::new(0.55, 0.0), clock_in));
        c.add_pad(Pad::new("6", Point::new(0.55, -0.5), GROUND));
        board.add_component(c).unwrap();

        clock_in = clock_out;
        data_in = data_out;
    }
    board
}
