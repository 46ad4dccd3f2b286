use crate::geometry::Rect;

/// Anything with a pixel size can be a piece image. The browser build uses
/// `HtmlImageElement`; tests use plain sizes.
pub trait PieceImage {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
}

/// A puzzle piece. Position is the top-left corner in canvas units.
#[derive(Debug)]
pub struct Piece<I> {
    id: u32,
    image: I,
    x: f64,
    y: f64,
    target_x: f64,
    target_y: f64,
    pub(crate) dragging: bool,
    snapped: bool,
}

impl<I: PieceImage> Piece<I> {
    pub fn new(id: u32, image: I, position: (f64, f64), target: (f64, f64)) -> Self {
        Self {
            id,
            image,
            x: position.0,
            y: position.1,
            target_x: target.0,
            target_y: target.1,
            dragging: false,
            snapped: false,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn image(&self) -> &I {
        &self.image
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn target(&self) -> (f64, f64) {
        (self.target_x, self.target_y)
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_snapped(&self) -> bool {
        self.snapped
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.image.width(), self.image.height())
    }

    /// Region that picks the piece up; the transparent tabs around the edge don't.
    pub fn grab_region(&self, inset: f64) -> Rect {
        self.bounds().inset(inset)
    }

    pub(crate) fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Snap onto the target if both axis deltas are strictly under `tolerance`.
    pub(crate) fn try_snap(&mut self, tolerance: f64) -> bool {
        let dx = (self.x - self.target_x).abs();
        let dy = (self.y - self.target_y).abs();
        if dx < tolerance && dy < tolerance {
            self.x = self.target_x;
            self.y = self.target_y;
            self.snapped = true;
        }
        self.snapped
    }
}
