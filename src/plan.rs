//! The puzzle plan: an externally produced JSON document describing the solved
//! layout. The board only reads it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{LoadError, PlanError};

/// Size of the target (solution) area in canvas units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub rows: u32,
    pub cols: u32,
}

/// One piece of the plan. `posx`/`posy` are relative to the target area's
/// top-left corner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PieceSpec {
    pub id: u32,
    pub file_rel_path: String,
    pub posx: f64,
    pub posy: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub canvas: CanvasSize,
    pub grid: GridSize,
    pub pieces: Vec<PieceSpec>,
}

impl Plan {
    /// Parse and validate a plan document.
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        let plan: Plan = serde_json::from_str(text)?;
        plan.validate()?;
        Ok(plan)
    }

    pub fn validate(&self) -> Result<(), PlanError> {
        let CanvasSize { width, height } = self.canvas;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(PlanError::TargetSize { width, height });
        }
        if self.grid.rows == 0 || self.grid.cols == 0 {
            return Err(PlanError::EmptyGrid {
                rows: self.grid.rows,
                cols: self.grid.cols,
            });
        }
        if self.pieces.is_empty() {
            return Err(PlanError::NoPieces);
        }
        let mut seen = HashSet::with_capacity(self.pieces.len());
        for p in &self.pieces {
            if !seen.insert(p.id) {
                return Err(PlanError::DuplicateId(p.id));
            }
            if !(0.0..=width).contains(&p.posx) || !(0.0..=height).contains(&p.posy) {
                return Err(PlanError::OffsetOutOfBounds {
                    id: p.id,
                    x: p.posx,
                    y: p.posy,
                    width,
                    height,
                });
            }
        }
        Ok(())
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }
}
