//! Load-time failures. Once a board is assembled nothing else can fail.

use thiserror::Error;

/// Everything that can stop a puzzle from appearing.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no 'plan' parameter in the page URL (e.g. ?plan=puzzle_plan.json)")]
    MissingPlanParameter,
    #[error("'seed' parameter must be an unsigned integer, got '{0}'")]
    InvalidSeed(String),
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },
    #[error("failed to parse plan: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid plan: {0}")]
    Plan(#[from] PlanError),
    #[error("failed to load piece image {url}")]
    Image { url: String },
    #[error("browser environment unavailable: {0}")]
    Environment(String),
}

/// A plan that parsed but breaks the layout contract.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("target area must be positive, got {width}x{height}")]
    TargetSize { width: f64, height: f64 },
    #[error("grid must have at least one row and column, got {rows}x{cols}")]
    EmptyGrid { rows: u32, cols: u32 },
    #[error("plan contains no pieces")]
    NoPieces,
    #[error("piece id {0} appears more than once")]
    DuplicateId(u32),
    #[error("piece {id} target ({x}, {y}) lies outside the {width}x{height} target area")]
    OffsetOutOfBounds {
        id: u32,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
}
