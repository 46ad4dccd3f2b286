//! Puzzle Board core crate.
//!
//! A jigsaw board for the browser: pieces from an externally generated plan
//! are scattered around a staging border and dragged with the mouse until they
//! snap into the target area. The game logic is target-independent and
//! unit-tested natively; the `web` module (wasm32 only) wires it to a canvas.
//! `start_puzzle()` is the JS entrypoint.

use wasm_bindgen::prelude::*;

pub mod board;
pub mod config;
pub mod error;
pub mod geometry;
pub mod placement;
pub mod plan;
pub mod render;

#[cfg(target_arch = "wasm32")]
mod web;

pub use board::{Board, Piece, PieceImage, PointerOutcome};
pub use config::{BoardRules, LaunchOptions};
pub use error::{LoadError, PlanError};
pub use geometry::{BoardGeometry, Rect};
pub use plan::Plan;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Load the plan named by `?plan=` and bring the board up. Load failures are
/// reported to the user from inside the async task.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start_puzzle() -> Result<(), JsValue> {
    web::start()
}
