//! The board controller: owns every piece plus the drag state and turns pointer
//! events into moves, snaps and completion.
//!
//! Pieces are kept in paint order, so the last entry is drawn on top and is the
//! first one hit-tested. Picking a piece up moves it to the end of the list.
//! At most one piece is active at a time; snapped pieces are inert for the rest
//! of the session.

use rand::Rng;

use crate::config::BoardRules;
use crate::geometry::BoardGeometry;
use crate::placement;
use crate::plan::Plan;

mod piece;

pub use piece::{Piece, PieceImage};

/// What a pointer event did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerOutcome {
    /// Nothing changed; no redraw needed.
    Ignored,
    /// Piece became active and moved to the top.
    PickedUp(u32),
    /// Active piece followed the pointer.
    Dragged,
    /// Piece released away from its target.
    Dropped(u32),
    /// Piece released close enough and locked in place.
    Snapped { id: u32, solved: bool },
}

impl PointerOutcome {
    pub fn needs_redraw(&self) -> bool {
        !matches!(self, PointerOutcome::Ignored)
    }
}

pub struct Board<I> {
    geometry: BoardGeometry,
    rules: BoardRules,
    pieces: Vec<Piece<I>>,
    /// Index of the dragged piece. Always the last index while set.
    active: Option<usize>,
    /// Pointer position relative to the active piece's top-left at pick-up.
    anchor: (f64, f64),
}

impl<I: PieceImage> Board<I> {
    /// Lay out a freshly loaded plan. `images` must be in plan order, one per piece.
    ///
    /// # Panics
    ///
    /// If the image count differs from the plan's piece count; a board missing a
    /// piece could never be solved.
    pub fn assemble<R: Rng + ?Sized>(
        plan: &Plan,
        images: Vec<I>,
        rules: BoardRules,
        rng: &mut R,
    ) -> Self {
        assert_eq!(
            plan.pieces.len(),
            images.len(),
            "one image per plan piece is required"
        );
        let geometry = BoardGeometry::from_plan(plan, rules.staging_factor);
        let pieces = plan
            .pieces
            .iter()
            .zip(images)
            .map(|(spec, image)| {
                let target = geometry.to_absolute(spec.posx, spec.posy);
                let (w, h) = (image.width(), image.height());
                let start = placement::scatter(&geometry, spec.id, w, h, rng);
                Piece::new(spec.id, image, start, target)
            })
            .collect();
        Self::from_pieces(geometry, rules, pieces)
    }

    /// Board over pieces that are already positioned.
    pub fn from_pieces(geometry: BoardGeometry, rules: BoardRules, pieces: Vec<Piece<I>>) -> Self {
        Self {
            geometry,
            rules,
            pieces,
            active: None,
            anchor: (0.0, 0.0),
        }
    }

    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    pub fn rules(&self) -> &BoardRules {
        &self.rules
    }

    /// Pieces in paint order (last = topmost).
    pub fn pieces(&self) -> &[Piece<I>] {
        &self.pieces
    }

    pub fn piece(&self, id: u32) -> Option<&Piece<I>> {
        self.pieces.iter().find(|p| p.id() == id)
    }

    pub fn active_piece(&self) -> Option<&Piece<I>> {
        self.active.map(|idx| &self.pieces[idx])
    }

    /// Index of the topmost unsnapped piece whose grab region holds the point.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        let inset = self.rules.grab_inset;
        self.pieces
            .iter()
            .rposition(|p| !p.is_snapped() && p.grab_region(inset).contains_strict(x, y))
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) -> PointerOutcome {
        if self.active.is_some() {
            return PointerOutcome::Ignored;
        }
        let Some(idx) = self.hit_test(x, y) else {
            return PointerOutcome::Ignored;
        };
        let mut piece = self.pieces.remove(idx);
        let (px, py) = piece.position();
        self.anchor = (x - px, y - py);
        piece.dragging = true;
        let id = piece.id();
        self.pieces.push(piece);
        self.active = Some(self.pieces.len() - 1);
        PointerOutcome::PickedUp(id)
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> PointerOutcome {
        let Some(idx) = self.active else {
            return PointerOutcome::Ignored;
        };
        let (ax, ay) = self.anchor;
        self.pieces[idx].move_to(x - ax, y - ay);
        PointerOutcome::Dragged
    }

    pub fn pointer_up(&mut self) -> PointerOutcome {
        let Some(idx) = self.active.take() else {
            return PointerOutcome::Ignored;
        };
        let piece = &mut self.pieces[idx];
        piece.dragging = false;
        let id = piece.id();
        if piece.try_snap(self.rules.snap_tolerance) {
            PointerOutcome::Snapped {
                id,
                solved: self.is_solved(),
            }
        } else {
            PointerOutcome::Dropped(id)
        }
    }

    /// Leaving the canvas mid-drag releases the piece where it is.
    pub fn pointer_leave(&mut self) -> PointerOutcome {
        self.pointer_up()
    }

    pub fn is_solved(&self) -> bool {
        self.pieces.iter().all(Piece::is_snapped)
    }

    /// `(snapped, total)`
    pub fn progress(&self) -> (usize, usize) {
        let snapped = self.pieces.iter().filter(|p| p.is_snapped()).count();
        (snapped, self.pieces.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sprite(f64, f64);

    impl PieceImage for Sprite {
        fn width(&self) -> f64 {
            self.0
        }
        fn height(&self) -> f64 {
            self.1
        }
    }

    fn board(pieces: Vec<Piece<Sprite>>) -> Board<Sprite> {
        let geometry = BoardGeometry::new(800.0, 600.0, 3, 4, 1.5);
        Board::from_pieces(geometry, BoardRules::default(), pieces)
    }

    fn piece(id: u32, at: (f64, f64), target: (f64, f64)) -> Piece<Sprite> {
        Piece::new(id, Sprite(100.0, 100.0), at, target)
    }

    fn drag(board: &mut Board<Sprite>, from: (f64, f64), to: (f64, f64)) -> PointerOutcome {
        board.pointer_down(from.0, from.1);
        board.pointer_move(to.0, to.1);
        board.pointer_up()
    }

    #[test]
    fn grab_region_excludes_the_border() {
        let b = board(vec![piece(0, (0.0, 0.0), (200.0, 150.0))]);
        // 100x100 piece at the origin: grab region is (25, 25)..(75, 75).
        assert_eq!(b.hit_test(50.0, 50.0), Some(0));
        assert_eq!(b.hit_test(10.0, 50.0), None);
        assert_eq!(b.hit_test(25.0, 50.0), None);
        assert_eq!(b.hit_test(74.9, 74.9), Some(0));
    }

    #[test]
    fn topmost_overlapping_piece_wins_and_moves_to_top() {
        let mut b = board(vec![
            piece(0, (0.0, 0.0), (200.0, 150.0)),
            piece(1, (10.0, 10.0), (300.0, 150.0)),
            piece(2, (500.0, 500.0), (400.0, 150.0)),
        ]);
        assert_eq!(b.pointer_down(50.0, 50.0), PointerOutcome::PickedUp(1));
        assert_eq!(b.active_piece().map(Piece::id), Some(1));
        let order: Vec<_> = b.pieces().iter().map(Piece::id).collect();
        assert_eq!(order, [0, 2, 1]);
        assert!(b.piece(1).unwrap().is_dragging());
    }

    #[test]
    fn drag_keeps_grab_point_under_pointer() {
        let mut b = board(vec![piece(0, (0.0, 0.0), (200.0, 150.0))]);
        b.pointer_down(40.0, 60.0);
        assert_eq!(b.pointer_move(140.0, 90.0), PointerOutcome::Dragged);
        assert_eq!(b.piece(0).unwrap().position(), (100.0, 30.0));
    }

    #[test]
    fn snap_boundary_is_strict() {
        let tol = BoardRules::default().snap_tolerance;
        let mut b = board(vec![piece(0, (0.0, 0.0), (200.0, 150.0))]);
        // Drop exactly `tol` away on x: stays put.
        let out = drag(&mut b, (50.0, 50.0), (50.0 + 200.0 + tol, 50.0 + 150.0));
        assert_eq!(out, PointerOutcome::Dropped(0));
        assert_eq!(b.piece(0).unwrap().position(), (200.0 + tol, 150.0));

        // Same on y: exactly `tol` below the target stays put.
        let (px, py) = b.piece(0).unwrap().position();
        let out = drag(
            &mut b,
            (px + 50.0, py + 50.0),
            (200.0 + 50.0, 150.0 + tol + 50.0),
        );
        assert_eq!(out, PointerOutcome::Dropped(0));
        assert_eq!(b.piece(0).unwrap().position(), (200.0, 150.0 + tol));
        assert!(!b.piece(0).unwrap().is_snapped());

        // Just inside the tolerance: snaps exactly onto the target.
        let (px, py) = b.piece(0).unwrap().position();
        let out = drag(
            &mut b,
            (px + 50.0, py + 50.0),
            (200.0 + tol - 0.001 + 50.0, 150.0 - tol + 0.001 + 50.0),
        );
        assert_eq!(out, PointerOutcome::Snapped { id: 0, solved: true });
        assert_eq!(b.piece(0).unwrap().position(), (200.0, 150.0));
        assert!(!b.piece(0).unwrap().is_dragging());
    }

    #[test]
    fn snapped_piece_cannot_be_picked_up() {
        let mut b = board(vec![
            piece(0, (200.0, 150.0), (200.0, 150.0)),
            piece(1, (0.0, 0.0), (300.0, 150.0)),
        ]);
        drag(&mut b, (250.0, 200.0), (255.0, 205.0));
        assert!(b.piece(0).unwrap().is_snapped());
        assert_eq!(b.pointer_down(250.0, 200.0), PointerOutcome::Ignored);
        assert_eq!(b.pointer_down(250.0, 200.0), PointerOutcome::Ignored);
        assert!(b.active_piece().is_none());
    }

    #[test]
    fn snapped_piece_does_not_shadow_pieces_below() {
        let mut b = board(vec![
            piece(0, (210.0, 160.0), (500.0, 500.0)),
            piece(1, (200.0, 150.0), (200.0, 150.0)),
        ]);
        drag(&mut b, (250.0, 200.0), (250.0, 200.0));
        assert!(b.piece(1).unwrap().is_snapped());
        assert_eq!(b.pointer_down(260.0, 210.0), PointerOutcome::PickedUp(0));
    }

    #[test]
    fn idle_events_are_ignored() {
        let mut b = board(vec![piece(0, (0.0, 0.0), (200.0, 150.0))]);
        assert_eq!(b.pointer_move(10.0, 10.0), PointerOutcome::Ignored);
        assert_eq!(b.pointer_up(), PointerOutcome::Ignored);
        assert_eq!(b.pointer_leave(), PointerOutcome::Ignored);
        assert_eq!(b.pointer_down(900.0, 900.0), PointerOutcome::Ignored);
        assert!(!PointerOutcome::Ignored.needs_redraw());
        assert_eq!(b.piece(0).unwrap().position(), (0.0, 0.0));
    }

    #[test]
    fn leaving_the_canvas_releases_the_piece() {
        let mut b = board(vec![piece(0, (0.0, 0.0), (200.0, 150.0))]);
        b.pointer_down(50.0, 50.0);
        b.pointer_move(260.0, 210.0);
        assert_eq!(b.pointer_leave(), PointerOutcome::Snapped { id: 0, solved: true });
        assert!(b.active_piece().is_none());
    }

    #[test]
    fn second_press_while_dragging_is_ignored() {
        let mut b = board(vec![
            piece(0, (0.0, 0.0), (200.0, 150.0)),
            piece(1, (500.0, 0.0), (300.0, 150.0)),
        ]);
        b.pointer_down(50.0, 50.0);
        assert_eq!(b.pointer_down(550.0, 50.0), PointerOutcome::Ignored);
        assert_eq!(b.active_piece().map(Piece::id), Some(0));
        assert_eq!(b.pieces().iter().filter(|p| p.is_dragging()).count(), 1);
    }

    #[test]
    #[should_panic(expected = "one image per plan piece")]
    fn assemble_refuses_missing_images() {
        use crate::plan::{CanvasSize, GridSize, PieceSpec};
        use rand::SeedableRng;

        let plan = Plan {
            canvas: CanvasSize { width: 200.0, height: 100.0 },
            grid: GridSize { rows: 1, cols: 2 },
            pieces: (0..2)
                .map(|id| PieceSpec {
                    id,
                    file_rel_path: format!("p/{id}.png"),
                    posx: id as f64 * 100.0,
                    posy: 0.0,
                })
                .collect(),
        };
        let mut rng = rand_pcg::Pcg32::seed_from_u64(0);
        let images = vec![Sprite(100.0, 100.0)];
        let _ = Board::assemble(&plan, images, BoardRules::default(), &mut rng);
    }

    #[test]
    fn progress_counts_snapped_pieces() {
        let mut b = board(vec![
            piece(0, (0.0, 0.0), (200.0, 150.0)),
            piece(1, (500.0, 0.0), (300.0, 150.0)),
        ]);
        assert_eq!(b.progress(), (0, 2));
        let out = drag(&mut b, (50.0, 50.0), (255.0, 205.0));
        assert_eq!(out, PointerOutcome::Snapped { id: 0, solved: false });
        assert_eq!(b.progress(), (1, 2));
        assert!(!b.is_solved());
    }
}
