//! Full-scene redraw. No state is kept between frames: every call paints the
//! staging area, the target area, the helper grid and then all pieces in
//! paint order.

use crate::board::{Board, PieceImage};
use crate::geometry::Rect;

/// The drawing primitives the board needs.
pub trait Surface<I> {
    fn fill_area(&mut self, rect: Rect, color: &str);
    fn outline_area(&mut self, rect: Rect, color: &str, line_width: f64);
    fn draw_image(&mut self, image: &I, x: f64, y: f64);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub staging: &'static str,
    pub target: &'static str,
    pub target_border: &'static str,
    pub grid: &'static str,
}

pub const DEFAULT_PALETTE: Palette = Palette {
    staging: "#f4f4f4",
    target: "#ffffff",
    target_border: "#999999",
    grid: "#dddddd",
};

const TARGET_BORDER_WIDTH: f64 = 2.0;
const GRID_LINE_WIDTH: f64 = 1.0;

pub fn render<I, S>(board: &Board<I>, surface: &mut S, palette: &Palette)
where
    I: PieceImage,
    S: Surface<I>,
{
    let geo = board.geometry();

    surface.fill_area(geo.canvas_area(), palette.staging);

    let target = geo.target_area();
    surface.fill_area(target, palette.target);
    surface.outline_area(target, palette.target_border, TARGET_BORDER_WIDTH);

    for row in 0..geo.rows {
        for col in 0..geo.cols {
            surface.outline_area(geo.cell(row, col), palette.grid, GRID_LINE_WIDTH);
        }
    }

    for piece in board.pieces() {
        let (x, y) = piece.position();
        surface.draw_image(piece.image(), x, y);
    }
}
