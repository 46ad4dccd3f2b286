//! Board layout math. Everything here is derived once per load and never
//! mutated afterwards.

use crate::plan::Plan;

/// Axis-aligned rectangle in canvas units, origin at the top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Strict containment: points on the edge are outside.
    pub fn contains_strict(&self, px: f64, py: f64) -> bool {
        px > self.x && px < self.right() && py > self.y && py < self.bottom()
    }

    /// Shrink by `fraction` of the width/height on every side.
    pub fn inset(&self, fraction: f64) -> Rect {
        let dx = self.w * fraction;
        let dy = self.h * fraction;
        Rect::new(self.x + dx, self.y + dy, self.w - 2.0 * dx, self.h - 2.0 * dy)
    }
}

/// Target area centred inside a larger staging canvas, plus the helper grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardGeometry {
    pub target_width: f64,
    pub target_height: f64,
    pub total_width: f64,
    pub total_height: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub rows: u32,
    pub cols: u32,
    pub cell_width: f64,
    pub cell_height: f64,
}

impl BoardGeometry {
    pub fn new(
        target_width: f64,
        target_height: f64,
        rows: u32,
        cols: u32,
        staging_factor: f64,
    ) -> Self {
        let total_width = target_width * staging_factor;
        let total_height = target_height * staging_factor;
        Self {
            target_width,
            target_height,
            total_width,
            total_height,
            offset_x: (total_width - target_width) / 2.0,
            offset_y: (total_height - target_height) / 2.0,
            rows,
            cols,
            cell_width: target_width / cols as f64,
            cell_height: target_height / rows as f64,
        }
    }

    pub fn from_plan(plan: &Plan, staging_factor: f64) -> Self {
        Self::new(
            plan.canvas.width,
            plan.canvas.height,
            plan.grid.rows,
            plan.grid.cols,
            staging_factor,
        )
    }

    pub fn canvas_area(&self) -> Rect {
        Rect::new(0.0, 0.0, self.total_width, self.total_height)
    }

    pub fn target_area(&self) -> Rect {
        Rect::new(self.offset_x, self.offset_y, self.target_width, self.target_height)
    }

    /// Helper-grid cell in absolute canvas coordinates.
    pub fn cell(&self, row: u32, col: u32) -> Rect {
        Rect::new(
            self.offset_x + col as f64 * self.cell_width,
            self.offset_y + row as f64 * self.cell_height,
            self.cell_width,
            self.cell_height,
        )
    }

    /// Translate a plan offset (relative to the target area) to canvas space.
    pub fn to_absolute(&self, x: f64, y: f64) -> (f64, f64) {
        (x + self.offset_x, y + self.offset_y)
    }
}
